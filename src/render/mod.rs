//! Drawing surface abstraction
//!
//! The game paints through the narrow [`Surface`] trait so the same draw code
//! runs against an HTML canvas or the in-memory [`RecordingSurface`].

pub mod recorder;
pub mod surface;

pub use recorder::{DrawCommand, RecordingSurface};
pub use surface::{Color, Surface, TextAlign};
