//! Derived dashboard views.
//!
//! All of these are recomputed from the fetched list on every render; none
//! of them cache.

pub mod category_total;
pub mod daily_total;
pub mod spending_summary;
