//! Data models for the PhotoQuest application.
//!
//! These models match the mobile app's TypeScript interfaces exactly for seamless interoperability.

mod datastore;
mod photo;
mod quest;
mod user;

pub use datastore::*;
pub use photo::*;
pub use quest::*;
pub use user::*;
