//! Terminal UI rendering.
//!
//! All drawing logic lives here, separated from application state ([`App`])
//! and input handling ([`crate::input`]).
//!
//! ## For contributors
//!
//! * The layout is a three-row split: the scrollable item list, a detail
//!   pane for the highlighted item, and a one-line status bar.
//! * Colours and styles are defined inline.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::app::App;

/// Draw the complete UI for one frame.
pub fn draw(app: &mut App, frame: &mut Frame) {
    let [list_area, detail_area, status_area] = Layout::vertical([
        Constraint::Min(1),
        Constraint::Length(5),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    draw_feed_list(app, frame, list_area);
    draw_detail(app, frame, detail_area);
    draw_status_bar(app, frame, status_area);
}

/// Render the scrollable feed item list.
fn draw_feed_list(app: &mut App, frame: &mut Frame, area: Rect) {
    let list_items: Vec<ListItem> = app
        .items
        .iter()
        .map(|item| {
            let location = item.location.as_deref().unwrap_or("—");
            let description = item.description.as_deref().unwrap_or("");

            let line = Line::from(vec![
                Span::styled(
                    format!("{:<20}", location),
                    Style::default().fg(Color::Cyan),
                ),
                Span::raw(" "),
                Span::styled(description, Style::default().fg(Color::White)),
            ]);

            ListItem::new(line)
        })
        .collect();

    let list = List::new(list_items)
        .block(Block::default().title(" Feed ").borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .add_modifier(Modifier::BOLD)
                .bg(Color::DarkGray),
        )
        .highlight_symbol("▸ ");

    frame.render_stateful_widget(list, area, &mut app.list_state);
}

/// Render every field of the highlighted item.
fn draw_detail(app: &App, frame: &mut Frame, area: Rect) {
    let lines = match app.selected_item() {
        Some(item) => vec![
            Line::from(vec![
                Span::styled("id     ", Style::default().fg(Color::DarkGray)),
                Span::raw(item.id.to_string()),
            ]),
            Line::from(vec![
                Span::styled("image  ", Style::default().fg(Color::DarkGray)),
                Span::styled(item.image_url.as_str(), Style::default().fg(Color::Blue)),
            ]),
            Line::from(item.description.as_deref().unwrap_or("(no description)")),
        ],
        None => vec![Line::from("No item selected")],
    };

    let detail = Paragraph::new(lines)
        .block(Block::default().title(" Item ").borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    frame.render_widget(detail, area);
}

/// Render the bottom status bar.
fn draw_status_bar(app: &App, frame: &mut Frame, area: Rect) {
    let status = Paragraph::new(Line::from(vec![
        Span::styled(" ", Style::default()),
        Span::styled(&app.status, Style::default().fg(Color::Yellow)),
        Span::raw("  "),
        Span::styled(
            format!("{} items", app.items.len()),
            Style::default().fg(Color::Green),
        ),
        Span::raw("  q: quit  r: reload  ↑/↓: scroll  Home/End: jump"),
    ]));
    frame.render_widget(status, area);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
