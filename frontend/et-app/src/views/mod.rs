pub mod auth;
pub mod dashboard;
pub mod modal;
pub mod transactions;
