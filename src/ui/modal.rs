//! Overlay rendering.
//!
//! The overlay is drawn last so it sits on top of the scene. It is anchored
//! just above the pointer that opened it and clamped to the screen; the area
//! it occupies is returned so outside clicks can be detected against the
//! frame the user actually saw.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::overlay::{
    Anchor, AssistantPanel, AssistantStatus, OpenOverlay, Panel, ASSISTANT_GREETING,
};
use crate::ui::theme::{
    COLOR_ACCENT, COLOR_ANSWER, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_HEADER,
    COLOR_PANEL_BG,
};

pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const MAX_WIDTH: u16 = 48;
const MIN_WIDTH: u16 = 20;

const PROMPT: &str = "> ";
const CURSOR: &str = "█";

/// Word-wrap `text` to `width` display columns. Words wider than a line are
/// split.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut current = String::new();
        let mut current_width = 0;

        for word in paragraph.split_whitespace() {
            let word_width = word.width();
            let sep = usize::from(!current.is_empty());

            if current_width + sep + word_width <= width {
                if sep == 1 {
                    current.push(' ');
                }
                current.push_str(word);
                current_width += sep + word_width;
                continue;
            }

            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }

            if word_width <= width {
                current.push_str(word);
                current_width = word_width;
                continue;
            }

            for c in word.chars() {
                let w = c.width().unwrap_or(1);
                if current_width + w > width && !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                current.push(c);
                current_width += w;
            }
        }

        lines.push(current);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Tail of `input` that fits in `width` columns after the prompt and cursor.
fn visible_input(input: &str, width: usize) -> &str {
    let budget = width.saturating_sub(PROMPT.width() + CURSOR.width());
    let mut used = 0;
    let mut start = input.len();
    for (idx, c) in input.char_indices().rev() {
        let w = c.width().unwrap_or(1);
        if used + w > budget {
            break;
        }
        used += w;
        start = idx;
    }
    &input[start..]
}

/// Place a `width` x `height` box just above `anchor`, falling back to below
/// it when there is no room, and clamp it to `area`.
pub fn overlay_rect(anchor: Anchor, width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    let min_x = area.x;
    let max_x = area.right().saturating_sub(width);
    let x = anchor.x.saturating_sub(width / 2).clamp(min_x, max_x.max(min_x));

    let y = if anchor.y >= area.y + height {
        anchor.y - height
    } else {
        anchor.y.saturating_add(1)
    };
    let max_y = area.bottom().saturating_sub(height);
    let y = y.clamp(area.y, max_y.max(area.y));

    Rect::new(x, y, width, height)
}

/// Keep the first `max` lines, ending with an ellipsis when anything was cut.
fn fit_lines(mut lines: Vec<Line<'static>>, max: usize) -> Vec<Line<'static>> {
    if lines.len() > max {
        lines.truncate(max.saturating_sub(1));
        if max > 0 {
            lines.push(Line::from(Span::styled("…", Style::default().fg(COLOR_DIM))));
        }
    }
    lines
}

fn styled(text: &str, width: usize, color: Color) -> impl Iterator<Item = Line<'static>> {
    wrap_text(text, width)
        .into_iter()
        .map(move |l| Line::from(Span::styled(l, Style::default().fg(color))))
}

/// Body above the input row is trimmed to `max_lines - 3` so the prompt and
/// key hints stay on screen.
fn assistant_lines(
    panel: &AssistantPanel,
    intro: &str,
    width: usize,
    max_lines: usize,
    tick: u64,
) -> Vec<Line<'static>> {
    let mut body: Vec<Line<'static>> = styled(intro, width, COLOR_DIM).collect();
    body.push(Line::default());

    match &panel.status {
        AssistantStatus::Ready => body.extend(styled(ASSISTANT_GREETING, width, COLOR_HEADER)),
        AssistantStatus::NeedsInput => {
            body.extend(styled("Please enter a question.", width, COLOR_ERROR))
        }
        AssistantStatus::Pending { .. } => {
            // About ten frames a second at the 16ms tick
            let spinner = SPINNER_FRAMES[((tick / 6) % SPINNER_FRAMES.len() as u64) as usize];
            body.push(Line::from(Span::styled(
                format!("{} Thinking...", spinner),
                Style::default().fg(COLOR_ACCENT),
            )));
        }
        AssistantStatus::Answered(text) => body.extend(styled(text, width, COLOR_ANSWER)),
        AssistantStatus::Failed { message, hint } => {
            body.extend(styled(message, width, COLOR_ERROR));
            body.extend(styled(hint, width, COLOR_DIM));
        }
    }

    let mut lines = fit_lines(body, max_lines.saturating_sub(3));
    lines.push(Line::default());

    let input_style = if panel.is_pending() {
        Style::default().fg(COLOR_DIM)
    } else {
        Style::default().fg(COLOR_HEADER)
    };
    let mut input_spans = vec![
        Span::styled(PROMPT, Style::default().fg(COLOR_ACCENT)),
        Span::styled(visible_input(&panel.input, width).to_string(), input_style),
    ];
    if !panel.is_pending() {
        input_spans.push(Span::styled(CURSOR, Style::default().fg(COLOR_ACCENT)));
    }
    lines.push(Line::from(input_spans));

    lines.push(Line::from(Span::styled(
        "Enter ask · Esc close",
        Style::default().fg(COLOR_DIM),
    )));
    lines
}

fn info_lines(body: &str, width: usize, max_lines: usize) -> Vec<Line<'static>> {
    let body = styled(body, width, COLOR_HEADER).collect();
    let mut lines = fit_lines(body, max_lines.saturating_sub(2));
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "Esc or click outside to close",
        Style::default().fg(COLOR_DIM),
    )));
    lines
}

/// Draw the open overlay and return the area it covers.
///
/// `intro` is the assistant panel's description line; static panels ignore it.
pub fn render_overlay(
    frame: &mut Frame,
    area: Rect,
    overlay: &OpenOverlay,
    intro: &str,
    tick: u64,
) -> Rect {
    let width = MAX_WIDTH.min(area.width.saturating_sub(2)).max(MIN_WIDTH);
    let text_width = width.saturating_sub(2) as usize;
    let max_lines = area.height.saturating_sub(2) as usize;

    let lines = match &overlay.panel {
        Panel::Info { body } => info_lines(body, text_width, max_lines),
        Panel::Assistant(panel) => assistant_lines(panel, intro, text_width, max_lines, tick),
    };
    let height = u16::try_from(lines.len())
        .unwrap_or(u16::MAX)
        .saturating_add(2);
    let rect = overlay_rect(overlay.anchor, width, height, area);

    frame.render_widget(Clear, rect);

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", overlay.title),
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .style(Style::default().bg(COLOR_PANEL_BG));
    let inner = block.inner(rect);
    frame.render_widget(block, rect);
    frame.render_widget(Paragraph::new(lines), inner);

    rect
}
