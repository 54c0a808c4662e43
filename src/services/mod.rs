// src/services/mod.rs

//! External interface services: traffic fetching and message delivery.

mod messages;
mod traffic;

pub use messages::{MessageSink, RedditMessenger};
pub use traffic::TrafficClient;
