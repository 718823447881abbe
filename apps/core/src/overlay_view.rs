use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::overlay_state::OverlayState;

pub const PLACEHOLDER: &str = "Enter a command or a folder name";

const MAX_INPUT_WIDTH: u16 = 72;
const INPUT_HEIGHT: u16 = 3;

const ACCENT: Color = Color::Rgb(0x3d, 0xae, 0xe9);
const BACKGROUND: Color = Color::Rgb(0x23, 0x26, 0x29);
const FOREGROUND: Color = Color::Rgb(0xef, 0xf0, 0xf1);
const MUTED: Color = Color::Rgb(0x7f, 0x8c, 0x8d);

pub fn draw(frame: &mut Frame, state: &OverlayState, max_visible_candidates: u16) {
    let area = frame.area();
    let width = area.width.saturating_sub(4).min(MAX_INPUT_WIDTH).max(1);
    let popup_rows = if state.is_popup_visible() {
        (state.candidates().len() as u16).min(max_visible_candidates)
    } else {
        0
    };
    let popup_height = if popup_rows > 0 { popup_rows + 2 } else { 0 };

    let frame_rect = centered_rect(area, width, INPUT_HEIGHT + popup_height);
    let input_rect = Rect {
        height: INPUT_HEIGHT.min(frame_rect.height),
        ..frame_rect
    };

    draw_input(frame, state, input_rect);

    if popup_height > 0 {
        let popup_rect = Rect {
            y: input_rect.y + input_rect.height,
            height: frame_rect.height.saturating_sub(input_rect.height),
            ..frame_rect
        };
        draw_popup(frame, state, popup_rect);
    }
}

fn draw_input(frame: &mut Frame, state: &OverlayState, rect: Rect) {
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(ACCENT))
        .style(Style::default().bg(BACKGROUND).fg(FOREGROUND));
    let inner_width = rect.width.saturating_sub(2) as usize;

    let line = if state.text().is_empty() {
        Line::from(Span::styled(PLACEHOLDER, Style::default().fg(MUTED)))
    } else {
        let (start, _) = visible_window(state.cursor(), inner_width);
        let visible: String = state.text().chars().skip(start).take(inner_width).collect();
        Line::from(visible)
    };

    frame.render_widget(Clear, rect);
    frame.render_widget(Paragraph::new(line).block(block), rect);

    if rect.width > 2 && rect.height > 2 {
        let (_, column) = visible_window(state.cursor(), inner_width);
        frame.set_cursor_position((rect.x + 1 + column as u16, rect.y + 1));
    }
}

fn draw_popup(frame: &mut Frame, state: &OverlayState, rect: Rect) {
    let items: Vec<ListItem> = state
        .candidates()
        .iter()
        .map(|candidate| ListItem::new(candidate.as_str()))
        .collect();
    let list = List::new(items)
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(MUTED)),
        )
        .style(Style::default().bg(BACKGROUND).fg(FOREGROUND))
        .highlight_style(
            Style::default()
                .bg(ACCENT)
                .fg(BACKGROUND)
                .add_modifier(Modifier::BOLD),
        );
    let mut list_state = ListState::default().with_selected(state.selected_candidate());

    frame.render_widget(Clear, rect);
    frame.render_stateful_widget(list, rect, &mut list_state);
}

/// A `width` x `height` rect centered in `area`, clipped to it.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// First visible char and the cursor column, scrolling so the cursor stays
/// inside a field `width` chars wide.
pub fn visible_window(cursor: usize, width: usize) -> (usize, usize) {
    if width == 0 {
        return (cursor, 0);
    }
    let last_column = width - 1;
    if cursor <= last_column {
        (0, cursor)
    } else {
        (cursor - last_column, last_column)
    }
}
