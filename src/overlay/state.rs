//! Overlay state machine.
//!
//! `Closed --open--> Open`, `Open --open--> Open` (re-target in place) and
//! `Open --close--> Closed`. Opening always rebuilds the panel, so the
//! assistant starts from its greeting with empty input; closing drops any
//! input and answer.

use super::catalog::{Catalog, SignKind};
use crate::error::QueryError;
use crate::query::validate_question;
use crate::scene::RegionId;

/// Screen position the overlay is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor {
    pub x: u16,
    pub y: u16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssistantStatus {
    /// Greeting shown before the first question
    Ready,
    /// Submit was pressed with an empty question
    NeedsInput,
    /// Waiting for the answer to request `generation`
    Pending { generation: u64 },
    Answered(String),
    /// Query failed; `hint` suggests what to do next
    Failed { message: String, hint: &'static str },
}

/// Outcome of pressing submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Question accepted; the caller should run the query.
    Started { question: String, generation: u64 },
    Empty,
    /// A query is already in flight; input is disabled.
    Busy,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantPanel {
    pub input: String,
    pub status: AssistantStatus,
}

impl Default for AssistantPanel {
    fn default() -> Self {
        Self {
            input: String::new(),
            status: AssistantStatus::Ready,
        }
    }
}

impl AssistantPanel {
    pub fn is_pending(&self) -> bool {
        matches!(self.status, AssistantStatus::Pending { .. })
    }

    pub fn push_char(&mut self, c: char) {
        if !self.is_pending() {
            self.input.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if !self.is_pending() {
            self.input.pop();
        }
    }

    /// Start a query tagged with `generation` if the input is usable.
    pub fn submit(&mut self, generation: u64) -> Submission {
        if self.is_pending() {
            return Submission::Busy;
        }
        match validate_question(&self.input) {
            Ok(question) => {
                let question = question.to_string();
                self.status = AssistantStatus::Pending { generation };
                Submission::Started {
                    question,
                    generation,
                }
            }
            Err(_) => {
                self.status = AssistantStatus::NeedsInput;
                Submission::Empty
            }
        }
    }

    /// Apply a finished query. Results for any other generation are stale
    /// and ignored; returns whether the status changed.
    pub fn finish(&mut self, generation: u64, result: Result<String, QueryError>) -> bool {
        if self.status != (AssistantStatus::Pending { generation }) {
            return false;
        }
        self.status = match result {
            Ok(text) => AssistantStatus::Answered(text),
            Err(err) => AssistantStatus::Failed {
                message: err.user_message(),
                hint: err.category().recovery_hint(),
            },
        };
        true
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Panel {
    Info { body: &'static str },
    Assistant(AssistantPanel),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenOverlay {
    pub region: RegionId,
    pub title: &'static str,
    pub anchor: Anchor,
    pub panel: Panel,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OverlayState {
    #[default]
    Closed,
    Open(OpenOverlay),
}

impl OverlayState {
    pub fn is_open(&self) -> bool {
        matches!(self, OverlayState::Open(_))
    }

    pub fn current(&self) -> Option<&OpenOverlay> {
        match self {
            OverlayState::Open(open) => Some(open),
            OverlayState::Closed => None,
        }
    }

    pub fn region(&self) -> Option<&RegionId> {
        self.current().map(|open| &open.region)
    }

    pub fn assistant(&self) -> Option<&AssistantPanel> {
        match self {
            OverlayState::Open(OpenOverlay {
                panel: Panel::Assistant(panel),
                ..
            }) => Some(panel),
            _ => None,
        }
    }

    pub fn assistant_mut(&mut self) -> Option<&mut AssistantPanel> {
        match self {
            OverlayState::Open(OpenOverlay {
                panel: Panel::Assistant(panel),
                ..
            }) => Some(panel),
            _ => None,
        }
    }

    /// Open (or re-target) the overlay. Regions without catalog content are
    /// ignored and leave the state untouched; returns whether it opened.
    pub fn open(&mut self, region: RegionId, anchor: Anchor, catalog: &Catalog) -> bool {
        let Some(info) = catalog.lookup(&region) else {
            tracing::warn!(region = %region, "No overlay content for region");
            return false;
        };
        let panel = match info.kind {
            SignKind::Static => Panel::Info { body: info.body },
            SignKind::Assistant => Panel::Assistant(AssistantPanel::default()),
        };
        *self = OverlayState::Open(OpenOverlay {
            region,
            title: info.title,
            anchor,
            panel,
        });
        true
    }

    /// Close the overlay; returns whether it was open.
    pub fn close(&mut self) -> bool {
        let was_open = self.is_open();
        *self = OverlayState::Closed;
        was_open
    }
}
