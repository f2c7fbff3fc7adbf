//! In-memory domain store.
//!
//! The store is the single source of truth for quests, photos and users. It lives for the
//! lifetime of the process and nothing is persisted.

mod domain;

pub use domain::*;

/// Version of the snapshot layout served by the datastore endpoint.
pub const SCHEMA_VERSION: i32 = 1;
