//! The informational overlay opened by clicking a region.

pub mod catalog;
pub mod state;

pub use catalog::{Catalog, SignInfo, SignKind, ASSISTANT_GREETING};
pub use state::{
    Anchor, AssistantPanel, AssistantStatus, OpenOverlay, OverlayState, Panel, Submission,
};
