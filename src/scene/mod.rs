//! Scene boundary: named regions, their geometry and ray casting.

pub mod board;
pub mod region;
pub mod registry;

pub use board::{BoardPart, Signboard, QUESTION_REGION};
pub use region::{Hit, HitShape, InteractiveRegion, Ndc, RegionId, SignFace};
pub use registry::{RayCaster, RegionRegistry, SceneError};
