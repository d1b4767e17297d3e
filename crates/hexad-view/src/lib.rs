//! Hexad View - Looking at the realms
//!
//! This crate turns the static realm data of `hexad-core` into per-frame
//! geometry:
//! - Camera (orbit rotation, idle spin, zoom, look-at)
//! - Billboard markers facing the camera
//! - Input tracking and realm visibility
//! - The single-threaded frame loop
//!
//! No graphics API is touched. A renderer receives [`FrameGeometry`] each
//! frame through the [`Renderer`] trait.

pub mod billboard;
pub mod camera;
pub mod config;
pub mod frame;
pub mod input;
pub mod scene;
pub mod viewer;

pub use billboard::*;
pub use camera::*;
pub use config::*;
pub use frame::*;
pub use input::*;
pub use scene::*;
pub use viewer::*;
