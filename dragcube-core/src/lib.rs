/// dragcube core - host-independent cube model and drag rotation
///
/// Builds the six positioned faces of a cube, accumulates drag rotation as an
/// append-only chain of CSS transform clauses, and evaluates chains into
/// matrices for hosts that rasterize the cube themselves.

pub mod config;
pub mod cube;
pub mod drag;
pub mod error;
pub mod projection;
pub mod transform;

// Re-export commonly used types
pub use config::{CubeConfig, DEFAULT_CONTAINER_ID};
pub use cube::{face_transform, CubeModel, Face, DEFAULT_LABELS, FACE_COUNT, HALF_EDGE};
pub use drag::{DragController, DragState, DEFAULT_SENSITIVITY};
pub use error::CubeError;
pub use projection::{css_to_world, viewport_aspect, Camera};
pub use transform::{append_to_text, TransformChain, TransformClause, TransformTarget};
