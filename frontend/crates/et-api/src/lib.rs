//! et-api
//!
//! Data-access façade for the expense tracker backend, plus the session
//! context it reads the bearer token from.

pub(crate) mod client;
pub(crate) mod session;

#[cfg(test)]
mod tests;

pub use client::{ApiResult, Client, ClientError};
pub use session::{
    FileSessionStore, MemorySessionStore, PROFILE_KEY, Session, SessionState, SessionStore,
    TOKEN_KEY,
};
