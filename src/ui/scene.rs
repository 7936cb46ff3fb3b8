//! Scene rendering: ground, pole and signs.
//!
//! Every part is drawn through [`SignFace::to_rect`], the same projection the
//! dispatcher uses for pointer events, so what is visible is what is hit.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::scene::board::{GROUND, POLE};
use crate::scene::Signboard;
use crate::ui::theme::{COLOR_GROUND, COLOR_POLE, COLOR_SIGN, COLOR_SIGN_BORDER, COLOR_SIGN_TEXT};

pub fn render_scene(frame: &mut Frame, area: Rect, board: &Signboard) {
    let mut parts = board.parts().iter();

    // Ground is painted first, then the pole, then the signs on top
    if let Some(ground) = parts.next().filter(|p| p.id.as_str() == GROUND) {
        let rect = ground.face.to_rect(area);
        frame.render_widget(Block::default().style(Style::default().bg(COLOR_GROUND)), rect);
    }

    let pole = POLE.to_rect(area);
    frame.render_widget(Block::default().style(Style::default().bg(COLOR_POLE)), pole);

    for part in parts.filter(|p| p.id.as_str() != GROUND) {
        let rect = part.face.to_rect(area);
        if rect.width == 0 || rect.height == 0 {
            continue;
        }

        let block = Block::default()
            .borders(if rect.height >= 3 && rect.width >= 4 {
                Borders::ALL
            } else {
                Borders::NONE
            })
            .border_type(BorderType::Thick)
            .border_style(Style::default().fg(COLOR_SIGN_BORDER).bg(COLOR_SIGN))
            .style(Style::default().bg(COLOR_SIGN));
        let inner = block.inner(rect);
        frame.render_widget(block, rect);

        if inner.height == 0 {
            continue;
        }
        // Vertically centre the caption
        let caption_area = Rect::new(inner.x, inner.y + inner.height.saturating_sub(1) / 2, inner.width, 1);
        let caption = Paragraph::new(part.label)
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(COLOR_SIGN_TEXT)
                    .bg(COLOR_SIGN)
                    .add_modifier(Modifier::BOLD),
            );
        frame.render_widget(caption, caption_area);
    }
}
