use crate::{Navigation, Route, RouteGuard};

use et_api::Session;

use googletest::prelude::*;

#[test]
fn given_route_paths_when_round_tripped_then_each_resolves_to_itself() {
    for route in Route::ALL {
        assert_eq!(Route::from_path(route.path()), Some(route));
    }
    assert_eq!(Route::from_path("/settings"), None);
}

#[test]
fn given_routes_then_only_dashboard_and_transactions_are_protected() {
    assert_that!(Route::Login.is_protected(), eq(false));
    assert_that!(Route::Register.is_protected(), eq(false));
    assert_that!(Route::Dashboard.is_protected(), eq(true));
    assert_that!(Route::Transactions.is_protected(), eq(true));
}

#[test]
fn given_no_token_when_resolving_protected_route_then_redirects_to_login() {
    let guard = RouteGuard::new(Session::in_memory());

    assert_eq!(
        guard.resolve(Route::Dashboard),
        Navigation::Redirect(Route::Login)
    );
    assert_eq!(
        guard.resolve(Route::Transactions),
        Navigation::Redirect(Route::Login)
    );
}

#[test]
fn given_no_token_when_resolving_public_route_then_renders() {
    let guard = RouteGuard::new(Session::in_memory());

    assert_eq!(guard.resolve(Route::Login), Navigation::Render(Route::Login));
    assert_eq!(
        guard.resolve(Route::Register),
        Navigation::Render(Route::Register)
    );
}

#[test]
fn given_any_token_when_resolving_protected_route_then_renders() {
    let session = Session::in_memory();
    session.sign_in("not-even-a-jwt", None).unwrap();
    let guard = RouteGuard::new(session);

    assert_eq!(
        guard.resolve(Route::Dashboard),
        Navigation::Render(Route::Dashboard)
    );
}

#[test]
fn given_guard_when_session_signs_out_later_then_guard_sees_it() {
    let session = Session::in_memory();
    session.sign_in("tok", None).unwrap();
    let guard = RouteGuard::new(session.clone());

    session.sign_out().unwrap();

    assert_eq!(
        guard.resolve(Route::Transactions),
        Navigation::Redirect(Route::Login)
    );
}
