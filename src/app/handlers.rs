//! Event handlers: pointer presses, keys and background messages.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, info};

use super::{App, AppMessage, PendingQuery};
use crate::dispatch::{dispatch, Intent, OverlayProbe, PointerEvent};
use crate::overlay::{Anchor, Submission};

impl App {
    /// Probe describing whether (column, row) lies inside the overlay.
    fn overlay_probe(&self, column: u16, row: u16) -> OverlayProbe {
        if !self.overlay.is_open() {
            return OverlayProbe::Closed;
        }
        let contains_pointer = self.overlay_area.is_some_and(|area| {
            column >= area.x && column < area.right() && row >= area.y && row < area.bottom()
        });
        OverlayProbe::Open { contains_pointer }
    }

    /// Handle a left-button press at terminal cell (column, row).
    ///
    /// Returns the intent that was applied, if any.
    pub fn handle_pointer(&mut self, column: u16, row: u16) -> Option<Intent> {
        let event = PointerEvent::new(column, row, self.viewport);
        let probe = self.overlay_probe(column, row);
        let intent = dispatch(&event, probe, &self.scene)?;
        debug!(?intent, column, row, "Pointer dispatched");
        self.apply_intent(intent.clone());
        Some(intent)
    }

    /// Apply a dispatcher decision to the overlay.
    pub fn apply_intent(&mut self, intent: Intent) {
        match intent {
            Intent::Open { region, x, y } => {
                info!(region = %region, x, y, "Opening overlay");
                if self
                    .overlay
                    .open(region, Anchor { x, y }, &self.catalog)
                {
                    self.cancel_pending_query();
                }
            }
            Intent::Close => {
                if self.overlay.close() {
                    info!("Overlay closed");
                }
                self.overlay_area = None;
                self.cancel_pending_query();
            }
        }
        self.mark_dirty();
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        self.mark_dirty();

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }

        if key.code == KeyCode::Esc {
            if self.overlay.is_open() {
                self.apply_intent(Intent::Close);
            }
            return;
        }

        if let Some(panel) = self.overlay.assistant_mut() {
            match key.code {
                KeyCode::Enter => self.submit_question(),
                KeyCode::Backspace => panel.backspace(),
                KeyCode::Char(c) => panel.push_char(c),
                _ => {}
            }
            return;
        }

        if key.code == KeyCode::Char('q') && !self.overlay.is_open() {
            self.quit();
        }
    }

    /// Insert pasted text into the assistant input. Line breaks become spaces.
    pub fn handle_paste(&mut self, text: &str) {
        if let Some(panel) = self.overlay.assistant_mut() {
            for c in text.chars() {
                panel.push_char(if c == '\n' || c == '\r' { ' ' } else { c });
            }
            self.mark_dirty();
        }
    }

    /// Submit the assistant input. Does nothing unless the assistant panel is
    /// open; ignored while a query is in flight.
    pub fn submit_question(&mut self) {
        let generation = self.next_generation + 1;
        let Some(panel) = self.overlay.assistant_mut() else {
            return;
        };

        match panel.submit(generation) {
            Submission::Started {
                question,
                generation,
            } => {
                self.next_generation = generation;
                let client = self.client.clone();
                let tx = self.message_tx.clone();
                info!(generation, "Submitting assistant question");
                let handle = tokio::spawn(async move {
                    let result = client.query(&question).await;
                    let _ = tx.send(AppMessage::QueryFinished { generation, result });
                });
                self.pending_query = Some(PendingQuery { generation, handle });
            }
            Submission::Empty => debug!("Empty question, nothing sent"),
            Submission::Busy => debug!("Question ignored, query already pending"),
        }
        self.mark_dirty();
    }

    /// Abort the in-flight query, if any. Its result will never arrive.
    pub fn cancel_pending_query(&mut self) {
        if let Some(pending) = self.pending_query.take() {
            pending.handle.abort();
            info!(generation = pending.generation, "Cancelled pending query");
        }
    }

    pub fn handle_message(&mut self, msg: AppMessage) {
        match msg {
            AppMessage::QueryFinished { generation, result } => {
                if self.pending_generation() == Some(generation) {
                    self.pending_query = None;
                }
                let applied = self
                    .overlay
                    .assistant_mut()
                    .is_some_and(|panel| panel.finish(generation, result));
                if applied {
                    self.mark_dirty();
                } else {
                    debug!(generation, "Discarding stale query result");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{MockHttpClient, RecordingSleeper};
    use crate::config::QueryConfig;
    use crate::dispatch::Viewport;
    use crate::overlay::AssistantStatus;
    use crate::query::QueryClient;
    use crate::scene::board::{GROUND, QUESTION_REGION, SIGN_ABOUT};
    use crate::scene::RegionId;
    use crossterm::event::KeyEventKind;
    use ratatui::layout::Rect;
    use serde_json::json;
    use std::sync::Arc;

    fn test_app(http: &MockHttpClient) -> App {
        let client = QueryClient::new(
            QueryConfig::default().with_api_url("http://mock"),
            Arc::new(http.clone()),
            Arc::new(RecordingSleeper::new()),
        );
        App::new(client, Viewport::new(100, 40)).unwrap()
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: crossterm::event::KeyEventState::NONE,
        }
    }

    fn open_question(app: &mut App) {
        app.apply_intent(Intent::Open {
            region: RegionId::from(QUESTION_REGION),
            x: 10,
            y: 10,
        });
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[tokio::test]
    async fn test_click_on_ground_opens_overlay() {
        let mut app = test_app(&MockHttpClient::new());
        // Bottom row of a 100x40 viewport is ground
        let intent = app.handle_pointer(80, 39);
        assert!(matches!(intent, Some(Intent::Open { ref region, x: 80, y: 39 }) if region.as_str() == GROUND));
        assert_eq!(app.overlay.region().unwrap().as_str(), GROUND);
    }

    #[tokio::test]
    async fn test_click_on_sky_does_nothing() {
        let mut app = test_app(&MockHttpClient::new());
        assert_eq!(app.handle_pointer(95, 0), None);
        assert!(!app.overlay.is_open());
    }

    #[tokio::test]
    async fn test_click_outside_overlay_closes_it() {
        let mut app = test_app(&MockHttpClient::new());
        app.apply_intent(Intent::Open {
            region: RegionId::from(SIGN_ABOUT),
            x: 60,
            y: 18,
        });
        app.overlay_area = Some(Rect::new(60, 10, 30, 8));

        assert_eq!(app.handle_pointer(65, 12), None, "inside click is swallowed");
        assert!(app.overlay.is_open());

        assert_eq!(app.handle_pointer(5, 5), Some(Intent::Close));
        assert!(!app.overlay.is_open());
        assert_eq!(app.overlay_area, None);
    }

    #[tokio::test]
    async fn test_escape_closes_and_q_quits() {
        let mut app = test_app(&MockHttpClient::new());
        open_question(&mut app);
        app.handle_key(key(KeyCode::Esc));
        assert!(!app.overlay.is_open());
        assert!(!app.should_quit);

        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[tokio::test]
    async fn test_q_types_into_assistant() {
        let mut app = test_app(&MockHttpClient::new());
        open_question(&mut app);
        type_text(&mut app, "quit?");
        assert!(!app.should_quit);
        assert_eq!(app.overlay.assistant().unwrap().input, "quit?");
    }

    #[tokio::test]
    async fn test_paste_flattens_newlines() {
        let mut app = test_app(&MockHttpClient::new());
        app.handle_paste("ignored while closed");
        open_question(&mut app);
        app.handle_paste("line one\nline two");
        assert_eq!(app.overlay.assistant().unwrap().input, "line one line two");
    }

    #[tokio::test]
    async fn test_question_round_trip() {
        let http = MockHttpClient::new();
        http.push_status(
            200,
            json!({ "candidates": [{ "content": { "parts": [{ "text": "We build 3D." }] } }] }),
        );
        let mut app = test_app(&http);
        let mut rx = app.message_rx.take().unwrap();

        open_question(&mut app);
        type_text(&mut app, "what do you do?");
        app.handle_key(key(KeyCode::Enter));
        assert!(app.is_query_pending());

        let msg = rx.recv().await.unwrap();
        app.handle_message(msg);

        assert!(!app.is_query_pending());
        assert_eq!(
            app.overlay.assistant().unwrap().status,
            AssistantStatus::Answered("We build 3D.".into())
        );
        assert_eq!(http.request_count(), 1);
    }

    #[tokio::test]
    async fn test_empty_question_sends_nothing() {
        let http = MockHttpClient::new();
        let mut app = test_app(&http);
        open_question(&mut app);
        type_text(&mut app, "   ");
        app.handle_key(key(KeyCode::Enter));

        assert!(!app.is_query_pending());
        assert_eq!(
            app.overlay.assistant().unwrap().status,
            AssistantStatus::NeedsInput
        );
        assert_eq!(http.request_count(), 0);
    }

    #[tokio::test]
    async fn test_closing_cancels_and_discards_result() {
        let mut app = test_app(&MockHttpClient::new());
        open_question(&mut app);
        type_text(&mut app, "hi");
        app.submit_question();
        let generation = app.pending_generation().unwrap();

        app.apply_intent(Intent::Close);
        assert!(!app.is_query_pending());

        // A result that raced the abort is dropped
        app.handle_message(AppMessage::QueryFinished {
            generation,
            result: Ok("late".into()),
        });
        assert!(!app.overlay.is_open());

        // Reopening starts fresh and ignores the old generation too
        open_question(&mut app);
        app.handle_message(AppMessage::QueryFinished {
            generation,
            result: Ok("late".into()),
        });
        assert_eq!(
            app.overlay.assistant().unwrap().status,
            AssistantStatus::Ready
        );
    }

    #[tokio::test]
    async fn test_generations_increase() {
        let http = MockHttpClient::new();
        http.set_fallback(crate::adapters::MockResponse::Success(
            crate::traits::Response::json_body(
                200,
                &json!({ "candidates": [{ "content": { "parts": [{ "text": "ok" }] } }] }),
            ),
        ));
        let mut app = test_app(&http);
        let mut rx = app.message_rx.take().unwrap();
        open_question(&mut app);

        type_text(&mut app, "one");
        app.submit_question();
        let first = app.pending_generation().unwrap();
        app.handle_message(rx.recv().await.unwrap());

        type_text(&mut app, " two");
        app.submit_question();
        let second = app.pending_generation().unwrap();
        assert!(second > first);
    }
}
