//! Content shown in the overlay for each region.

use crate::scene::board::{GROUND, SIGN_ABOUT, SIGN_CONTACT, SIGN_FEATURES, SIGN_WELCOME};
use crate::scene::RegionId;

/// Shown by the assistant panel until the first question is asked.
pub const ASSISTANT_GREETING: &str = "I am ready to answer your questions!";

/// How the overlay body is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignKind {
    /// Fixed informational text
    Static,
    /// Free-text question panel backed by the query client
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignInfo {
    pub title: &'static str,
    pub body: &'static str,
    pub kind: SignKind,
}

#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<(RegionId, SignInfo)>,
}

impl Default for Catalog {
    fn default() -> Self {
        let info = |title, body| SignInfo {
            title,
            body,
            kind: SignKind::Static,
        };
        Self {
            entries: vec![
                (
                    RegionId::new(SIGN_WELCOME),
                    info(
                        "Welcome!",
                        "This is an interactive signboard. Click any of the signs to learn \
                         more about different topics.",
                    ),
                ),
                (
                    RegionId::new(SIGN_FEATURES),
                    SignInfo {
                        title: "Ask About Features",
                        body: "This is an interactive assistant. Ask a question!",
                        kind: SignKind::Assistant,
                    },
                ),
                (
                    RegionId::new(SIGN_ABOUT),
                    info(
                        "About Us",
                        "We are a company dedicated to building innovative 3D web \
                         experiences. We were founded in 2024.",
                    ),
                ),
                (
                    RegionId::new(SIGN_CONTACT),
                    info(
                        "Contact Info",
                        "You can reach us at info@example.com or by calling 555-1234. Our \
                         offices are open 9-5, M-F.",
                    ),
                ),
                (
                    RegionId::new(GROUND),
                    info(
                        "Ground Plane",
                        "This is the base of our scene. It helps anchor the signboard in space.",
                    ),
                ),
            ],
        }
    }
}

impl Catalog {
    pub fn lookup(&self, region: &RegionId) -> Option<&SignInfo> {
        self.entries
            .iter()
            .find(|(id, _)| id == region)
            .map(|(_, info)| info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_features_is_assistant() {
        let catalog = Catalog::default();
        for id in [SIGN_WELCOME, SIGN_ABOUT, SIGN_CONTACT, GROUND] {
            assert_eq!(
                catalog.lookup(&RegionId::from(id)).unwrap().kind,
                SignKind::Static
            );
        }
        assert_eq!(
            catalog.lookup(&RegionId::from(SIGN_FEATURES)).unwrap().kind,
            SignKind::Assistant
        );
    }

    #[test]
    fn test_unknown_region() {
        assert!(Catalog::default().lookup(&RegionId::from("pole")).is_none());
    }
}
