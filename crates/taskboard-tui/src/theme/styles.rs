use super::colors::*;
use ratatui::style::{Modifier, Style};
use taskboard_domain::Lane;

pub fn focused_border() -> Style {
    Style::default().fg(FOCUSED_BORDER)
}

pub fn unfocused_border() -> Style {
    Style::default().fg(UNFOCUSED_BORDER)
}

pub fn hover_border() -> Style {
    Style::default()
        .fg(HOVER_BORDER)
        .add_modifier(Modifier::BOLD)
}

pub fn selected_item(focused: bool) -> Style {
    if focused {
        Style::default().bg(SELECTED_BG)
    } else {
        Style::default()
    }
}

pub fn dragging_item() -> Style {
    Style::default()
        .fg(DRAGGING_TEXT)
        .add_modifier(Modifier::ITALIC)
}

pub fn card_title() -> Style {
    Style::default()
        .fg(NORMAL_TEXT)
        .add_modifier(Modifier::BOLD)
}

pub fn normal_text() -> Style {
    Style::default().fg(NORMAL_TEXT)
}

pub fn label_text() -> Style {
    Style::default().fg(LABEL_TEXT)
}

pub fn highlight_text() -> Style {
    Style::default().fg(HIGHLIGHT_TEXT)
}

pub fn lane_title(lane: Lane) -> Style {
    let color = match lane {
        Lane::Todo => LANE_TODO,
        Lane::Progress => LANE_PROGRESS,
        Lane::Done => LANE_DONE,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

pub fn popup_bg() -> Style {
    Style::default().bg(POPUP_BG)
}
