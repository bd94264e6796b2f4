use crate::{ApiResult, MemorySessionStore, PROFILE_KEY, SessionState, SessionStore, TOKEN_KEY};

use et_core::UserProfile;

use std::sync::Arc;

use log::{debug, info, warn};
use tokio::sync::watch;

/// Observable session context.
///
/// Owns the persisted store and mirrors its contents in a watch channel so
/// any view can subscribe to login, logout and profile changes. Cloning is
/// cheap and every clone sees the same state.
#[derive(Clone)]
pub struct Session {
    inner: Arc<SessionInner>,
}

struct SessionInner {
    store: Arc<dyn SessionStore>,
    state: watch::Sender<SessionState>,
}

impl Session {
    /// Build a session from whatever the store already holds.
    ///
    /// Unreadable entries are logged and treated as absent.
    pub fn restore(store: Arc<dyn SessionStore>) -> Self {
        let initial = read_state(store.as_ref());
        debug!(
            "Session restored (authenticated: {})",
            initial.is_authenticated()
        );

        let (state, _) = watch::channel(initial);
        Self {
            inner: Arc::new(SessionInner { store, state }),
        }
    }

    /// Empty session backed by memory only.
    pub fn in_memory() -> Self {
        Self::restore(Arc::new(MemorySessionStore::new()))
    }

    pub fn snapshot(&self) -> SessionState {
        self.inner.state.borrow().clone()
    }

    pub fn token(&self) -> Option<String> {
        self.inner.state.borrow().token.clone()
    }

    pub fn profile(&self) -> Option<UserProfile> {
        self.inner.state.borrow().profile.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.state.borrow().is_authenticated()
    }

    /// Receive every state change from now on.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.inner.state.subscribe()
    }

    /// Persist a fresh token and profile, then notify subscribers.
    ///
    /// A cached display name survives when the profile is for the same email.
    pub fn sign_in(&self, token: &str, profile: Option<UserProfile>) -> ApiResult<()> {
        let cached = self.profile();
        let profile = profile.map(|profile| profile.merged_with(cached.as_ref()));

        self.inner.store.set(TOKEN_KEY, token)?;
        match profile {
            Some(ref profile) => self.write_profile(profile)?,
            None => self.inner.store.remove(PROFILE_KEY)?,
        }

        self.publish(SessionState {
            token: Some(token.to_string()),
            profile,
        });
        info!("Session started");
        Ok(())
    }

    /// Update the cached profile without touching the token.
    pub fn remember_profile(&self, profile: UserProfile) -> ApiResult<()> {
        self.write_profile(&profile)?;

        let mut state = self.snapshot();
        state.profile = Some(profile);
        self.publish(state);
        Ok(())
    }

    /// Forget the token and cached profile. No network call is involved.
    pub fn sign_out(&self) -> ApiResult<()> {
        self.inner.store.remove(TOKEN_KEY)?;
        self.inner.store.remove(PROFILE_KEY)?;

        self.publish(SessionState::default());
        info!("Session ended");
        Ok(())
    }

    /// Re-read the store, notifying subscribers only if something changed.
    ///
    /// Picks up edits made by another process sharing the same store.
    pub fn reload(&self) -> bool {
        let latest = read_state(self.inner.store.as_ref());

        self.inner.state.send_if_modified(|current| {
            if *current == latest {
                return false;
            }
            *current = latest;
            true
        })
    }

    fn write_profile(&self, profile: &UserProfile) -> ApiResult<()> {
        let serialized = serde_json::to_string(profile)?;
        self.inner.store.set(PROFILE_KEY, &serialized)
    }

    fn publish(&self, state: SessionState) {
        self.inner.state.send_replace(state);
    }
}

fn read_state(store: &dyn SessionStore) -> SessionState {
    let token = match store.get(TOKEN_KEY) {
        Ok(token) => token.filter(|token| !token.is_empty()),
        Err(e) => {
            warn!("Ignoring unreadable session token: {e}");
            None
        }
    };

    let profile = match store.get(PROFILE_KEY) {
        Ok(Some(raw)) => serde_json::from_str::<UserProfile>(&raw)
            .map_err(|e| warn!("Ignoring unreadable cached profile: {e}"))
            .ok(),
        Ok(None) => None,
        Err(e) => {
            warn!("Ignoring unreadable cached profile: {e}");
            None
        }
    };

    SessionState { token, profile }
}
