use ratatui::style::Color;

pub const FOCUSED_BORDER: Color = Color::Cyan;
pub const UNFOCUSED_BORDER: Color = Color::White;
pub const HOVER_BORDER: Color = Color::Yellow;
pub const SELECTED_BG: Color = Color::Blue;

pub const NORMAL_TEXT: Color = Color::White;
pub const LABEL_TEXT: Color = Color::DarkGray;
pub const HIGHLIGHT_TEXT: Color = Color::Yellow;
pub const DRAGGING_TEXT: Color = Color::LightMagenta;

pub const LANE_TODO: Color = Color::LightBlue;
pub const LANE_PROGRESS: Color = Color::LightYellow;
pub const LANE_DONE: Color = Color::LightGreen;

pub const POPUP_BG: Color = Color::Black;
