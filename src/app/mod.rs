//! Application context.
//!
//! [`App`] owns everything the interaction session needs: the scene, the
//! overlay state, the query client and the channel background tasks report
//! on. `main` creates it and passes it to the event loop and renderer; there
//! is no global state.

mod handlers;
mod messages;

pub use messages::AppMessage;

use ratatui::layout::Rect;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::dispatch::Viewport;
use crate::overlay::{Catalog, OverlayState};
use crate::query::QueryClient;
use crate::scene::{RegionRegistry, SceneError, Signboard};

/// A query running in the background.
#[derive(Debug)]
pub(crate) struct PendingQuery {
    pub(crate) generation: u64,
    pub(crate) handle: JoinHandle<()>,
}

/// Main application state
pub struct App {
    /// Static scene description used for drawing
    pub board: Signboard,
    /// Hit-testable regions built from `board`
    pub scene: RegionRegistry,
    /// Overlay content per region
    pub catalog: Catalog,
    pub overlay: OverlayState,
    /// Overlay content area from the last render, used for outside-click tests
    pub overlay_area: Option<Rect>,
    /// Size of the terminal the pointer coordinates refer to
    pub viewport: Viewport,
    pub client: QueryClient,
    /// Receiver for async messages (taken by the event loop)
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender for async messages (clone this to pass to async tasks)
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    pending_query: Option<PendingQuery>,
    next_generation: u64,
    /// Tick counter for the loading spinner
    pub tick_count: u64,
    pub should_quit: bool,
    /// Set when state changed and the next loop iteration must redraw
    pub needs_redraw: bool,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("overlay", &self.overlay)
            .field("viewport", &self.viewport)
            .field("pending_query", &self.pending_generation())
            .finish()
    }
}

impl App {
    /// Build the session context with the default signboard.
    pub fn new(client: QueryClient, viewport: Viewport) -> Result<Self, SceneError> {
        let board = Signboard::default();
        let scene = board.registry()?;
        let (message_tx, message_rx) = mpsc::unbounded_channel();

        Ok(Self {
            board,
            scene,
            catalog: Catalog::default(),
            overlay: OverlayState::Closed,
            overlay_area: None,
            viewport,
            client,
            message_rx: Some(message_rx),
            message_tx,
            pending_query: None,
            next_generation: 0,
            tick_count: 0,
            should_quit: false,
            needs_redraw: true,
        })
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        self.cancel_pending_query();
        self.should_quit = true;
    }

    /// Generation of the query currently in flight, if any.
    pub fn pending_generation(&self) -> Option<u64> {
        self.pending_query.as_ref().map(|p| p.generation)
    }

    pub fn is_query_pending(&self) -> bool {
        self.pending_query.is_some()
    }

    /// Advance animations; redraw only while something animates.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.is_query_pending() {
            self.mark_dirty();
        }
    }

    pub fn update_viewport(&mut self, width: u16, height: u16) {
        self.viewport = Viewport::new(width, height);
        self.mark_dirty();
    }
}
