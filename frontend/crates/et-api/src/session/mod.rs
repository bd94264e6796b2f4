pub(crate) mod file_store;
pub(crate) mod memory_store;
pub(crate) mod session;
pub(crate) mod session_state;
pub(crate) mod store;

pub use file_store::FileSessionStore;
pub use memory_store::MemorySessionStore;
pub use session::Session;
pub use session_state::SessionState;
pub use store::SessionStore;

/// Storage key holding the bearer token
pub const TOKEN_KEY: &str = "token";
/// Storage key holding the serialized `UserProfile`
pub const PROFILE_KEY: &str = "user";
