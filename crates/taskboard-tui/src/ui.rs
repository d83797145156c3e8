use crate::app::App;
use crate::components::{render_input_field, render_popup_with_block};
use crate::modal::ModalField;
use crate::theme::*;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};
use taskboard_domain::Lane;
use taskboard_persistence::KeyValueStore;

pub fn render<S: KeyValueStore>(app: &App<S>, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(frame.area());

    render_lanes(app, frame, chunks[0]);
    render_footer(app, frame, chunks[1]);

    if app.controller.modal().is_open() {
        render_add_task_popup(app, frame);
    }
}

fn render_lanes<S: KeyValueStore>(app: &App<S>, frame: &mut Frame, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    for lane in Lane::ALL {
        render_lane(app, frame, columns[lane.index()], lane);
    }
}

fn render_lane<S: KeyValueStore>(app: &App<S>, frame: &mut Frame, area: Rect, lane: Lane) {
    let document = app.controller.document();
    let container = document.container(lane);
    let is_focused = lane == app.focused_lane && !app.controller.modal().is_open();
    let dragged = app.controller.drag().active();

    let border = if container.is_hovered() {
        hover_border()
    } else if is_focused {
        focused_border()
    } else {
        unfocused_border()
    };

    let title = Line::from(vec![
        Span::styled(format!(" {} ", lane.label()), lane_title(lane)),
        Span::styled(format!("({}) ", container.badge()), label_text()),
    ]);

    let items: Vec<ListItem> = container
        .cards()
        .enumerate()
        .map(|(index, (element, card))| {
            let is_selected = is_focused && app.selection.get() == Some(index);
            let heading_style = if dragged == Some(element) {
                dragging_item()
            } else {
                card_title()
            };
            let marker = if dragged == Some(element) { "⇅ " } else { "" };

            let mut lines = vec![Line::from(Span::styled(
                format!("{marker}{}", card.heading),
                heading_style,
            ))];
            if !card.body.is_empty() {
                lines.push(Line::from(Span::styled(card.body.clone(), label_text())));
            }
            lines.push(Line::from(""));

            ListItem::new(lines).style(selected_item(is_selected && dragged.is_none()))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(border),
    );
    frame.render_widget(list, area);
}

fn render_footer<S: KeyValueStore>(app: &App<S>, frame: &mut Frame, area: Rect) {
    let hints = if app.controller.modal().is_open() {
        "Tab: switch field | Enter: add task | Esc: close"
    } else if app.is_dragging() {
        "h/l: choose lane | Space/Enter: drop | Esc: cancel"
    } else {
        "n: new task | h/l: lane | j/k: card | Space: pick up | d: delete | q: quit"
    };

    let footer = Paragraph::new(hints)
        .style(label_text())
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}

fn render_add_task_popup<S: KeyValueStore>(app: &App<S>, frame: &mut Frame) {
    let modal = app.controller.modal();
    let inner = render_popup_with_block(frame, " New Task ", 60, 40);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    render_input_field(
        frame,
        chunks[0],
        "Title (required)",
        &modal.title,
        modal.focus() == ModalField::Title,
    );
    render_input_field(
        frame,
        chunks[1],
        "Description",
        &modal.description,
        modal.focus() == ModalField::Description,
    );

    let hint = if modal.title.trimmed().is_empty() {
        Paragraph::new("A title is required").style(highlight_text())
    } else {
        Paragraph::new("Enter to add").style(normal_text())
    };
    frame.render_widget(hint, chunks[2]);
}
