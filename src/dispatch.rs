//! Pointer hit-test dispatcher.
//!
//! [`dispatch`] is a pure decision function: given a pointer event, what the
//! overlay currently covers, and the scene, it says what the presentation
//! layer should do next. It never mutates anything.

use crate::scene::region::cell_centre;
use crate::scene::{Ndc, RayCaster, RegionId};

/// Size of the surface pointer coordinates are relative to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// A primary-button press at a screen position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    pub client_x: u16,
    pub client_y: u16,
    pub viewport: Viewport,
}

impl PointerEvent {
    pub fn new(client_x: u16, client_y: u16, viewport: Viewport) -> Self {
        Self {
            client_x,
            client_y,
            viewport,
        }
    }

    /// Cell centre in normalised device coordinates (`y` up).
    pub fn ndc(&self) -> Ndc {
        Ndc::new(
            cell_centre(self.client_x, self.viewport.width),
            -cell_centre(self.client_y, self.viewport.height),
        )
    }
}

/// What the dispatcher knows about the overlay for one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayProbe {
    Closed,
    Open { contains_pointer: bool },
}

/// The dispatcher's decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Show the overlay for `region`, anchored at the pointer.
    Open { region: RegionId, x: u16, y: u16 },
    /// Hide the overlay.
    Close,
}

/// Decide the intent for one pointer event.
///
/// With the overlay open, a press outside its content closes it and a press
/// inside is swallowed; the scene is not consulted. With it closed, the
/// nearest region under the pointer is opened, ties going to the hit the
/// caster reported first. No hit means no intent.
pub fn dispatch(
    event: &PointerEvent,
    overlay: OverlayProbe,
    scene: &impl RayCaster,
) -> Option<Intent> {
    match overlay {
        OverlayProbe::Open {
            contains_pointer: true,
        } => None,
        OverlayProbe::Open {
            contains_pointer: false,
        } => Some(Intent::Close),
        OverlayProbe::Closed => {
            let nearest = scene
                .cast(event.ndc())
                .into_iter()
                .min_by(|a, b| a.distance.total_cmp(&b.distance))?;
            Some(Intent::Open {
                region: nearest.region,
                x: event.client_x,
                y: event.client_y,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{Hit, RegionRegistry};
    use std::cell::Cell;

    /// Caster returning canned hits and counting calls.
    struct Canned {
        hits: Vec<Hit>,
        calls: Cell<usize>,
    }

    impl Canned {
        fn new(hits: &[(&str, f32)]) -> Self {
            Self {
                hits: hits
                    .iter()
                    .map(|(id, d)| Hit {
                        region: RegionId::from(*id),
                        distance: *d,
                    })
                    .collect(),
                calls: Cell::new(0),
            }
        }
    }

    impl RayCaster for Canned {
        fn cast(&self, _ray: Ndc) -> Vec<Hit> {
            self.calls.set(self.calls.get() + 1);
            self.hits.clone()
        }
    }

    fn event(x: u16, y: u16) -> PointerEvent {
        PointerEvent::new(x, y, Viewport::new(80, 24))
    }

    #[test]
    fn test_ndc_corners() {
        let viewport = Viewport::new(4, 2);
        let top_left = PointerEvent::new(0, 0, viewport).ndc();
        assert_eq!(top_left, Ndc::new(-0.75, 0.5));
        let bottom_right = PointerEvent::new(3, 1, viewport).ndc();
        assert_eq!(bottom_right, Ndc::new(0.75, -0.5));
    }

    #[test]
    fn test_ndc_zero_viewport_does_not_divide_by_zero() {
        let ndc = PointerEvent::new(0, 0, Viewport::new(0, 0)).ndc();
        assert!(ndc.x.is_finite() && ndc.y.is_finite());
    }

    #[test]
    fn test_closed_with_no_hits_is_no_intent() {
        let scene = RegionRegistry::new();
        assert_eq!(dispatch(&event(3, 3), OverlayProbe::Closed, &scene), None);
    }

    #[test]
    fn test_closed_opens_nearest_hit() {
        let scene = Canned::new(&[("far", 9.0), ("near", 2.0), ("mid", 5.0)]);
        assert_eq!(
            dispatch(&event(10, 7), OverlayProbe::Closed, &scene),
            Some(Intent::Open {
                region: RegionId::from("near"),
                x: 10,
                y: 7
            })
        );
    }

    #[test]
    fn test_ties_go_to_first_reported() {
        let scene = Canned::new(&[("first", 2.0), ("second", 2.0)]);
        match dispatch(&event(0, 0), OverlayProbe::Closed, &scene) {
            Some(Intent::Open { region, .. }) => assert_eq!(region.as_str(), "first"),
            other => panic!("expected Open, got {:?}", other),
        }
    }

    #[test]
    fn test_open_outside_closes_without_casting() {
        let scene = Canned::new(&[("sign", 1.0)]);
        let probe = OverlayProbe::Open {
            contains_pointer: false,
        };
        assert_eq!(dispatch(&event(1, 1), probe, &scene), Some(Intent::Close));
        assert_eq!(scene.calls.get(), 0);
    }

    #[test]
    fn test_open_inside_is_swallowed() {
        let scene = Canned::new(&[("sign", 1.0)]);
        let probe = OverlayProbe::Open {
            contains_pointer: true,
        };
        assert_eq!(dispatch(&event(1, 1), probe, &scene), None);
        assert_eq!(scene.calls.get(), 0);
    }
}
