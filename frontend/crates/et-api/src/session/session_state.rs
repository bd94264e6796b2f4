use et_core::UserProfile;

/// Snapshot published to session subscribers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionState {
    pub token: Option<String>,
    pub profile: Option<UserProfile>,
}

impl SessionState {
    /// Token presence is the only thing checked; it is never validated locally.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}
