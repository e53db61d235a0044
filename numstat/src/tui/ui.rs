// numstat/src/tui/ui.rs
//! TUI Rendering Logic for numstat.
//!
//! Three rows: a key-hint header, the editor beside the results panel, and
//! the alert bar.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Row, Table, Wrap},
    Frame,
};

use crate::tui::app::App;
use crate::ui::results::result_rows;
use crate::ui::theme::{theme_color, ThemeEntry, ThemeMap};

/// Main draw cycle.
pub fn draw(f: &mut Frame, app: &App, theme_map: &ThemeMap) {
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(9),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_header(f, app, theme_map, vertical_chunks[0]);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(vertical_chunks[1]);

    render_input(f, app, theme_map, content_chunks[0]);
    render_results(f, app, theme_map, content_chunks[1]);
    render_alert(f, app, theme_map, vertical_chunks[2]);
}

fn style_for(entry: ThemeEntry, theme_map: &ThemeMap) -> Style {
    match theme_color(theme_map, entry) {
        Some(color) => Style::default().fg(color.to_tui_color()),
        None => Style::default(),
    }
}

fn render_header(f: &mut Frame, app: &App, theme_map: &ThemeMap, area: Rect) {
    let trigger_style = if app.loading {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Green)
    };

    let mut spans = vec![
        Span::styled(" numstat ", style_for(ThemeEntry::Header, theme_map).bold()),
        Span::raw("| "),
        Span::styled("[Ctrl+Enter/F5] Calculate ", trigger_style),
        Span::styled("[Ctrl+L] Clear ", Style::default().fg(Color::Yellow)),
        Span::styled("[Esc] Quit ", Style::default().fg(Color::Red)),
    ];
    if app.loading {
        spans.push(Span::styled(
            " ⏳ Calculating... ",
            style_for(ThemeEntry::Warn, theme_map).add_modifier(Modifier::BOLD),
        ));
    }

    let header = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray)));
    f.render_widget(header, area);
}

fn render_input(f: &mut Frame, app: &App, theme_map: &ThemeMap, area: Rect) {
    let border = if app.loading {
        Style::default().fg(Color::DarkGray)
    } else {
        style_for(ThemeEntry::Prompt, theme_map)
    };

    let mut lines: Vec<Line> = app.input.split('\n').map(Line::raw).collect();
    if !app.loading {
        // Cursor marker at the end of the buffer.
        if let Some(last) = lines.last_mut() {
            last.push_span(Span::styled("▏", Style::default().add_modifier(Modifier::SLOW_BLINK)));
        }
    }

    // Keep the end of long input visible.
    let inner_height = area.height.saturating_sub(2) as usize;
    let scroll = lines.len().saturating_sub(inner_height) as u16;

    let editor = Paragraph::new(lines)
        .block(Block::default()
            .title(" Data (numbers separated by spaces, commas or semicolons) ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border))
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    f.render_widget(editor, area);
}

fn render_results(f: &mut Frame, app: &App, theme_map: &ThemeMap, area: Rect) {
    let block = Block::default()
        .title(" Results ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(style_for(ThemeEntry::Header, theme_map));

    let Some(calc) = &app.results else {
        let placeholder = Paragraph::new("No results yet.")
            .style(Style::default().dim())
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(placeholder, area);
        return;
    };

    let label_style = style_for(ThemeEntry::StatLabel, theme_map);
    let value_style = style_for(ThemeEntry::StatValue, theme_map).bold();
    let rows = result_rows(calc).into_iter().map(|(label, value)| {
        Row::new(vec![
            Span::styled(label, label_style),
            Span::styled(value, value_style),
        ])
    });

    let table = Table::new(rows, [Constraint::Length(16), Constraint::Min(10)])
        .column_spacing(1)
        .block(block);
    f.render_widget(table, area);
}

fn render_alert(f: &mut Frame, app: &App, theme_map: &ThemeMap, area: Rect) {
    let (text, style) = match &app.alert {
        Some(active) => {
            let alert = &active.alert;
            (
                format!("{} {}", alert.kind.symbol(), alert.message),
                style_for(alert.kind.theme_entry(), theme_map).bold(),
            )
        }
        None => (String::new(), Style::default()),
    };

    let bar = Paragraph::new(Line::from(Span::styled(text, style)))
        .block(Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(style));
    f.render_widget(bar, area);
}
