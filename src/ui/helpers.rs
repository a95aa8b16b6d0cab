use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::TableState;

pub(crate) fn field_line(label: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{label}: "),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(value.to_string()),
    ])
}

pub(crate) fn table_state(selected: Option<usize>, len: usize) -> TableState {
    let mut state = TableState::default();
    if len == 0 {
        state.select(None);
    } else {
        state.select(selected.map(|row| row.min(len - 1)));
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_state_clamps_selection() {
        let state = table_state(Some(5), 0);
        assert!(state.selected().is_none());
        let state = table_state(Some(5), 3);
        assert_eq!(state.selected(), Some(2));
        let state = table_state(None, 3);
        assert!(state.selected().is_none());
    }

    #[test]
    fn field_line_keeps_label_and_value_spans() {
        let line = field_line("Hostname", "jimmy");
        assert_eq!(line.spans.len(), 2);
        assert_eq!(line.spans[0].content, "Hostname: ");
        assert_eq!(line.spans[1].content, "jimmy");
    }
}
