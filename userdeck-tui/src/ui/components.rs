use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, InputMode};

const SEPARATOR: &str = " │ ";

/// Header bar with the controls and the row count
pub fn render_header(app: &App, frame: &mut Frame, area: Rect) {
    let key = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let label = Style::default().fg(Color::White);
    let separator = Style::default().fg(Color::DarkGray);

    let sort_label = if app.state.sort_by_country {
        "Unsort by country"
    } else {
        "Sort by country"
    };
    let color_style = if app.state.color_enabled {
        label.add_modifier(Modifier::REVERSED)
    } else {
        label
    };

    let search_style = if app.input_mode == InputMode::Search {
        Style::default().fg(Color::Yellow)
    } else {
        label
    };
    let cursor = if app.input_mode == InputMode::Search {
        "_"
    } else {
        ""
    };
    let search = if app.state.search_text().is_empty() && app.input_mode == InputMode::Normal {
        Span::styled("Type a country", Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(format!("{}{}", app.state.search_text(), cursor), search_style)
    };

    let status = if app.state.is_loading() {
        Span::styled("Loading users...", Style::default().fg(Color::Yellow))
    } else {
        Span::styled(
            format!("{} of {} users", app.view.len(), app.state.original_len()),
            Style::default().fg(Color::Gray),
        )
    };

    let line = Line::from(vec![
        Span::styled("[c] ", key),
        Span::styled("Color rows", color_style),
        Span::styled(SEPARATOR, separator),
        Span::styled("[s] ", key),
        Span::styled(sort_label, label),
        Span::styled(SEPARATOR, separator),
        Span::styled("[r] ", key),
        Span::styled("Restart state", label),
        Span::styled(SEPARATOR, separator),
        Span::styled("[/] ", key),
        search,
        Span::styled(SEPARATOR, separator),
        status,
    ]);

    let header = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .title("userdeck")
            .title_style(key),
    );
    frame.render_widget(header, area);
}

/// Key help plus the photo URL of the selected user
pub fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let help = match app.input_mode {
        InputMode::Normal => "j/k: Navigate | d: Delete | q: Quit",
        InputMode::Search => "Type a country | Backspace: Erase | Enter/Esc: Done",
    };

    let mut spans = vec![Span::styled(help, Style::default().fg(Color::Gray))];
    if let Some(user) = app.selected_user() {
        spans.push(Span::styled(SEPARATOR, Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(
            format!("Photo: {}", user.picture.thumbnail),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let footer = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title("Help"));
    frame.render_widget(footer, area);
}
