use crate::UserProfile;

#[test]
fn test_display_name_prefers_name() {
    let profile = UserProfile::new(Some("Asha".into()), "asha@example.com");
    assert_eq!(profile.display_name(), "Asha");
}

#[test]
fn test_display_name_falls_back_to_email_local_part() {
    let profile = UserProfile::new(None, "asha@example.com");
    assert_eq!(profile.display_name(), "asha");
}

#[test]
fn test_merged_with_keeps_cached_name_for_same_email() {
    let cached = UserProfile::new(Some("Asha".into()), "Asha@Example.com");
    let merged = UserProfile::new(None, "asha@example.com").merged_with(Some(&cached));
    assert_eq!(merged.name.as_deref(), Some("Asha"));
}

#[test]
fn test_merged_with_ignores_other_account() {
    let cached = UserProfile::new(Some("Ravi".into()), "ravi@example.com");
    let merged = UserProfile::new(None, "asha@example.com").merged_with(Some(&cached));
    assert!(merged.name.is_none());
}
