//! savepoint-core - Core library for SavePoint
//!
//! Client-side core of the SavePoint web application: the in-memory clip
//! collection, the filter engine, draft validation, the REST API client,
//! and the session gate. Rendering and persistence live in external
//! collaborators (the UI layer and the clip API).

pub mod api;
pub mod config;
pub mod dashboard;
pub mod draft;
pub mod error;
pub mod filter;
pub mod models;
pub mod session;
pub mod store;
mod util;

pub use dashboard::Dashboard;
pub use error::{Error, Result};
pub use filter::FilterCriteria;
pub use models::{Clip, ClipId, ClipType};
pub use store::ClipStore;
