//! Scroll-driven horizontal gallery: vertical scrolling through a pinned
//! region pans a row of full-width cards from left to right.

pub mod controller;
pub mod layout;
pub mod motion;
pub mod progress;

pub use controller::{FrameScheduler, GalleryController, GallerySnapshot};
pub use motion::SpringConfig;
pub use progress::ScrollSample;
