use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap};

use crate::app::App;
use crate::model::MountState;
use crate::store::Column;
use crate::ui::constants::{HELP_TEXT, table_columns};
use crate::ui::helpers::{field_line, table_state};

pub(crate) fn draw_app_header(frame: &mut Frame<'_>, area: Rect) {
    let title = Paragraph::new("SSHFS EDDY 0.1.0")
        .style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);
    frame.render_widget(title, area);
}

pub(crate) fn draw_help_header(frame: &mut Frame<'_>, area: Rect) {
    let help = Paragraph::new(HELP_TEXT)
        .block(
            Block::default()
                .title(Line::from(Span::styled(
                    "Help",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )))
                .borders(Borders::ALL),
        )
        .style(Style::default().fg(Color::Gray));
    frame.render_widget(help, area);
}

pub(crate) fn draw_logs_header(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let log_lines = app
        .log_lines
        .iter()
        .rev()
        .take(area.height.saturating_sub(2) as usize)
        .cloned()
        .collect::<Vec<_>>();
    let logs = Paragraph::new(log_lines.join("\n"))
        .block(
            Block::default()
                .title(Line::from(Span::styled(
                    "Logs",
                    Style::default()
                        .fg(Color::Magenta)
                        .add_modifier(Modifier::BOLD),
                )))
                .borders(Borders::ALL),
        )
        .style(Style::default().fg(Color::Gray))
        .wrap(Wrap { trim: true });
    frame.render_widget(logs, area);
}

pub(crate) fn draw_mount_table(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let header_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let block = Block::default()
        .title(Line::from(Span::styled("Mountpoints", header_style)))
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let header = Row::new(Column::ALL.map(|column| Cell::from(column.title())))
        .style(header_style)
        .height(1);
    let rows = (0..app.store.len()).map(|row| {
        Row::new(Column::ALL.map(|column| {
            let value = app
                .store
                .display_value(row, column)
                .unwrap_or_else(|_| "?".to_string());
            if column == Column::State {
                Cell::from(Span::styled(value, state_style(app, row)))
            } else {
                Cell::from(value)
            }
        }))
    });
    let table = Table::new(rows, table_columns())
        .header(header)
        .row_highlight_style(Style::default().add_modifier(Modifier::BOLD))
        .highlight_symbol(Span::styled(
            "> ",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ));

    let mut state = table_state(app.selected, app.store.len());
    frame.render_stateful_widget(table, inner, &mut state);

    if app.store.is_empty() && inner.height > 1 {
        let hint = Paragraph::new("No mountpoints configured")
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center);
        let hint_area = Rect {
            x: inner.x,
            y: inner.y + 1,
            width: inner.width,
            height: 1,
        };
        frame.render_widget(hint, hint_area);
    }
}

fn state_style(app: &App, row: usize) -> Style {
    let state = app
        .store
        .cell(row, Column::State)
        .ok()
        .and_then(|cell| match cell {
            crate::store::CellValue::Int(raw) => MountState::from_raw(*raw).ok(),
            crate::store::CellValue::Text(_) => None,
        });
    match state {
        Some(MountState::Mounted) => Style::default().fg(Color::Green),
        Some(MountState::Unmounted) => Style::default().fg(Color::Gray),
        Some(MountState::Unknown) => Style::default().fg(Color::Yellow),
        None => Style::default().fg(Color::Red),
    }
}

pub(crate) fn draw_mount_details(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let header_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Line::from(Span::styled("Mountpoint details", header_style)));
    let record = app
        .selected
        .and_then(|row| app.store.record_at(row).ok());
    let details = if let Some(record) = record {
        let lines = vec![
            field_line("ID", &record.id),
            field_line("Hostname", &record.hostname),
            field_line("Port", &record.port.to_string()),
            field_line("Auth type", &record.auth_type),
            field_line("Auth key", &record.auth_key),
            field_line("Remote dir", &record.remote_dir),
            field_line("Local dir", &record.local_dir),
            Line::from(vec![
                Span::styled("State: ", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(record.state.label()),
            ]),
        ];
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true })
    } else {
        Paragraph::new("No mountpoint selected")
            .block(block)
            .alignment(Alignment::Center)
    };
    frame.render_widget(details, area);
}

pub(crate) fn draw_footer(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let footer = Paragraph::new(app.last_log.as_str()).style(Style::default().fg(Color::Gray));
    frame.render_widget(footer, area);
}
