use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};

use crate::app::{App, HeaderMode};
use crate::ui::constants::{FOOTER_HEIGHT, HEADER_HEIGHT, body_columns};
use crate::ui::panels::{
    draw_app_header, draw_footer, draw_help_header, draw_logs_header, draw_mount_details,
    draw_mount_table,
};

mod constants;
mod helpers;
mod panels;

pub(crate) fn draw_ui(frame: &mut Frame<'_>, app: &App) {
    let layout = if app.header_mode == HeaderMode::Off {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(FOOTER_HEIGHT)].as_ref())
            .split(frame.area())
    } else {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints(
                [
                    Constraint::Length(HEADER_HEIGHT),
                    Constraint::Min(1),
                    Constraint::Length(FOOTER_HEIGHT),
                ]
                .as_ref(),
            )
            .split(frame.area())
    };

    let (body_area, footer_area) = if app.header_mode == HeaderMode::Off {
        (layout[0], layout[1])
    } else {
        match app.header_mode {
            HeaderMode::Help => draw_help_header(frame, layout[0]),
            HeaderMode::Logs => draw_logs_header(frame, app, layout[0]),
            HeaderMode::Off => {}
        }
        (layout[1], layout[2])
    };

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(body_columns().as_ref())
        .split(body_area);
    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(HEADER_HEIGHT), Constraint::Min(1)].as_ref())
        .split(body[0]);
    draw_app_header(frame, left[0]);
    draw_mount_table(frame, app, left[1]);
    draw_mount_details(frame, app, body[1]);

    draw_footer(frame, app, footer_area);
}
