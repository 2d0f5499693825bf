//! Platform abstraction layer
//!
//! Browser canvas integration for the wasm build. Native builds draw into
//! `render::RecordingSurface` instead.

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
