use crate::theme::{focused_border, label_text, normal_text, popup_bg, unfocused_border};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::Span,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use taskboard_core::InputState;

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Clear a centered area and frame it, returning the inner area
pub fn render_popup_with_block(
    frame: &mut Frame,
    title: &str,
    width_percent: u16,
    height_percent: u16,
) -> Rect {
    let area = centered_rect(width_percent, height_percent, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_style(focused_border())
        .style(popup_bg());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    inner
}

/// Bordered single-line text field. Places the terminal cursor when focused.
pub fn render_input_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    input: &InputState,
    focused: bool,
) {
    let border = if focused {
        focused_border()
    } else {
        unfocused_border()
    };
    let field = Paragraph::new(input.as_str()).style(normal_text()).block(
        Block::default()
            .title(label.to_string())
            .title_style(label_text())
            .borders(Borders::ALL)
            .border_style(border),
    );
    frame.render_widget(field, area);

    if focused {
        frame.set_cursor_position((cursor_column(area, input), area.y + 1));
    }
}

/// Terminal column of the text cursor, clamped to the field's inner width.
fn cursor_column(area: Rect, input: &InputState) -> u16 {
    let before: String = input.as_str().chars().take(input.cursor_pos()).collect();
    let offset = u16::try_from(Span::raw(before).width()).unwrap_or(u16::MAX);
    let max_x = area.x.saturating_add(area.width.saturating_sub(2));
    area.x.saturating_add(1).saturating_add(offset).min(max_x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, layout::Position, Terminal};

    fn typed(text: &str) -> InputState {
        let mut input = InputState::new();
        input.set(text);
        input
    }

    #[test]
    fn test_cursor_follows_display_width() {
        let area = Rect::new(4, 0, 30, 3);
        assert_eq!(cursor_column(area, &typed("")), 5);
        assert_eq!(cursor_column(area, &typed("abc")), 8);
        assert_eq!(cursor_column(area, &typed("日本")), 9);
    }

    #[test]
    fn test_cursor_is_clamped_for_long_input() {
        let area = Rect::new(10, 0, 20, 3);
        let long = typed(&"x".repeat(70_000));
        assert_eq!(cursor_column(area, &long), 28);
    }

    #[test]
    fn test_long_input_renders_inside_field() {
        let mut terminal = Terminal::new(TestBackend::new(40, 5)).unwrap();
        let input = typed(&"y".repeat(70_000));
        terminal
            .draw(|frame| {
                render_input_field(frame, Rect::new(0, 0, 40, 3), "Title", &input, true)
            })
            .unwrap();
        assert_eq!(terminal.get_cursor_position().unwrap(), Position::new(38, 1));
    }
}
