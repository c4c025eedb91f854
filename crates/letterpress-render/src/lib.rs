//! Word compositing.
//!
//! Each letter of a word is loaded from a style set, trimmed to its visible
//! pixels, scaled to a common height and packed left to right onto a single
//! RGBA canvas.

pub mod compose;
pub mod encode;
pub mod error;
pub mod resize;
pub mod trim;

pub use compose::{CompositionRequest, Compositor, compose, layout};
pub use encode::{encode_png, save_png};
pub use error::{ComposeError, ComposeResult};
pub use resize::scale_to_height;
pub use trim::{bounding_box, trim};
