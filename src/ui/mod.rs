//! UI rendering for the signboard
//!
//! Draw order gives the z-index: scene first, then the hint line, then the
//! overlay on top.

mod modal;
mod scene;
mod theme;

pub use modal::{overlay_rect, render_overlay, wrap_text, SPINNER_FRAMES};
pub use scene::render_scene;
pub use theme::*;

use ratatui::{
    layout::Rect,
    style::Style,
    text::Span,
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

const HINT: &str = " Click a sign · q quit";

/// Render the whole frame and remember where the overlay was drawn.
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    render_scene(frame, area, &app.board);

    if area.height > 0 {
        let hint_area = Rect::new(area.x, area.y, area.width, 1);
        frame.render_widget(
            Paragraph::new(Span::styled(HINT, Style::default().fg(COLOR_DIM))),
            hint_area,
        );
    }

    app.overlay_area = app.overlay.current().map(|open| {
        let intro = app
            .catalog
            .lookup(&open.region)
            .map(|info| info.body)
            .unwrap_or_default();
        render_overlay(frame, area, open, intro, app.tick_count)
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{MockHttpClient, RecordingSleeper};
    use crate::config::QueryConfig;
    use crate::dispatch::{Intent, Viewport};
    use crate::query::QueryClient;
    use crate::scene::board::SIGN_CONTACT;
    use crate::scene::RegionId;
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;

    fn create_test_app() -> App {
        let client = QueryClient::new(
            QueryConfig::default(),
            Arc::new(MockHttpClient::new()),
            Arc::new(RecordingSleeper::new()),
        );
        App::new(client, Viewport::new(100, 40)).unwrap()
    }

    #[tokio::test]
    async fn test_render_records_overlay_area() {
        let mut app = create_test_app();
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();

        terminal.draw(|f| render(f, &mut app)).unwrap();
        assert_eq!(app.overlay_area, None);

        app.apply_intent(Intent::Open {
            region: RegionId::from(SIGN_CONTACT),
            x: 30,
            y: 30,
        });
        terminal.draw(|f| render(f, &mut app)).unwrap();
        let area = app.overlay_area.expect("overlay drawn");
        assert!(area.width > 0 && area.height > 0);

        // A click inside the drawn overlay is swallowed
        assert_eq!(app.handle_pointer(area.x + 1, area.y + 1), None);
        assert!(app.overlay.is_open());

        app.apply_intent(Intent::Close);
        terminal.draw(|f| render(f, &mut app)).unwrap();
        assert_eq!(app.overlay_area, None);
    }
}
