//! Letterpress Core
//!
//! Shared configuration, geometry and logging setup for the letterpress crates.

pub mod config;
pub mod geometry;
pub mod logging;

pub use config::ComposeConfig;
pub use geometry::{BoundingBox, Size};
