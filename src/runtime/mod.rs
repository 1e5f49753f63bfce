//! Runtime module - drives the update loop for a host
//!
//! - `app` - message queue and side-effect processing

pub mod app;

pub use app::App;
