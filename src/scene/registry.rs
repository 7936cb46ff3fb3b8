//! Registry of interactive regions and ray casting against them.
//!
//! Regions are registered once when the scene is built. A cast returns every
//! region under the ray, nearest first; regions at equal distance keep their
//! registration order.

use std::sync::Arc;
use thiserror::Error;

use super::region::{Hit, HitShape, InteractiveRegion, Ndc, RegionId};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SceneError {
    #[error("region {0} is already registered")]
    DuplicateRegion(RegionId),
}

/// Anything a picking ray can be cast against.
pub trait RayCaster {
    /// All hits under `ray`, nearest first.
    fn cast(&self, ray: Ndc) -> Vec<Hit>;
}

#[derive(Debug, Default, Clone)]
pub struct RegionRegistry {
    regions: Vec<InteractiveRegion>,
}

impl RegionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a region. Ids must be unique.
    pub fn register(
        &mut self,
        id: impl Into<RegionId>,
        shape: impl HitShape + 'static,
    ) -> Result<(), SceneError> {
        let id = id.into();
        if self.contains(&id) {
            return Err(SceneError::DuplicateRegion(id));
        }
        tracing::debug!(region = %id, "Registered interactive region");
        self.regions.push(InteractiveRegion {
            id,
            shape: Arc::new(shape),
        });
        Ok(())
    }

    pub fn contains(&self, id: &RegionId) -> bool {
        self.regions.iter().any(|r| &r.id == id)
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Regions in registration order.
    pub fn regions(&self) -> &[InteractiveRegion] {
        &self.regions
    }
}

impl RayCaster for RegionRegistry {
    fn cast(&self, ray: Ndc) -> Vec<Hit> {
        let mut hits: Vec<Hit> = self
            .regions
            .iter()
            .filter_map(|region| {
                region.shape.intersect(ray).map(|distance| Hit {
                    region: region.id.clone(),
                    distance,
                })
            })
            .collect();
        // Stable: equal distances stay in registration order
        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        hits
    }
}
