//! The signboard scene: four signs on a pole above a ground plane.

use super::region::{Ndc, RegionId, SignFace};
use super::registry::{RegionRegistry, SceneError};

pub const SIGN_WELCOME: &str = "sign_welcome";
pub const SIGN_FEATURES: &str = "sign_features";
pub const SIGN_ABOUT: &str = "sign_about";
pub const SIGN_CONTACT: &str = "sign_contact";
pub const GROUND: &str = "ground";

/// The region hosting the assistant panel.
pub const QUESTION_REGION: &str = SIGN_FEATURES;

/// Non-clickable pole the signs hang from.
pub const POLE: SignFace = SignFace::new(Ndc::new(-0.03, -0.6), Ndc::new(0.03, 0.9), 12.0);

/// A clickable face of the board with its caption.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardPart {
    pub id: RegionId,
    pub label: &'static str,
    pub face: SignFace,
}

/// Static description of the scene, shared by the renderer and the registry.
#[derive(Debug, Clone)]
pub struct Signboard {
    parts: Vec<BoardPart>,
}

impl Default for Signboard {
    fn default() -> Self {
        let part = |id: &str, label, min: (f32, f32), max: (f32, f32), depth| BoardPart {
            id: RegionId::new(id),
            label,
            face: SignFace::new(Ndc::new(min.0, min.1), Ndc::new(max.0, max.1), depth),
        };

        // Ground first so signs painted later appear on top of it
        Self {
            parts: vec![
                part(GROUND, "", (-1.0, -1.0), (1.0, -0.45), 20.0),
                part(SIGN_WELCOME, "Welcome", (0.03, 0.62), (0.55, 0.82), 10.0),
                part(SIGN_FEATURES, "Ask About Features", (-0.55, 0.32), (-0.03, 0.52), 10.5),
                part(SIGN_ABOUT, "About Us", (0.03, 0.02), (0.55, 0.22), 11.0),
                part(SIGN_CONTACT, "Contact", (-0.55, -0.55), (-0.03, -0.35), 11.5),
            ],
        }
    }
}

impl Signboard {
    /// Parts in paint order (farthest first).
    pub fn parts(&self) -> &[BoardPart] {
        &self.parts
    }

    pub fn part(&self, id: &RegionId) -> Option<&BoardPart> {
        self.parts.iter().find(|p| &p.id == id)
    }

    /// Register every part with a fresh registry.
    pub fn registry(&self) -> Result<RegionRegistry, SceneError> {
        let mut registry = RegionRegistry::new();
        for part in &self.parts {
            registry.register(part.id.clone(), part.face)?;
        }
        Ok(registry)
    }
}
