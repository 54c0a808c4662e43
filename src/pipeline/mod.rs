//! Pipeline entry points for report generation.
//!
//! - `fetch_all`: Fetch traffic data for every forum in the roster
//! - `rank_by_average` / `split_powerplay` / `sort_powerplay`: Ordering
//! - `run_pipeline`: Fetch, rank, write reports, deliver messages

pub mod fetch;
pub mod rank;
pub mod run;

pub use fetch::fetch_all;
pub use rank::{rank_by_average, sort_powerplay, split_powerplay};
pub use run::{message_subject, run_pipeline, MESSAGE_SEPARATOR};
