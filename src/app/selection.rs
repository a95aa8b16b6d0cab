use crate::app::App;
use crate::app::constants::SELECTION_EMPTY_MESSAGE;

impl App {
    pub(crate) fn select_next(&mut self) {
        let len = self.store.len();
        let next = match self.selected {
            Some(row) if row + 1 < len => Some(row + 1),
            Some(row) => Some(row),
            None if len > 0 => Some(0),
            None => None,
        };
        self.apply_selection(next);
    }

    pub(crate) fn select_previous(&mut self) {
        let previous = match self.selected {
            Some(row) if row > 0 => Some(row - 1),
            Some(row) => Some(row),
            None if !self.store.is_empty() => Some(0),
            None => None,
        };
        self.apply_selection(previous);
    }

    pub(crate) fn select_first(&mut self) {
        let first = if self.store.is_empty() { None } else { Some(0) };
        self.apply_selection(first);
    }

    pub(crate) fn select_last(&mut self) {
        self.apply_selection(self.store.len().checked_sub(1));
    }

    pub(crate) fn clear_selection(&mut self) {
        self.apply_selection(None);
    }

    /// The notifier only fires on an actual change, matching a toolkit
    /// selection object's changed signal.
    fn apply_selection(&mut self, next: Option<usize>) {
        if next == self.selected {
            return;
        }
        self.selected = next;
        self.on_selection_changed();
    }

    /// Reads the highlighted row back out of the store, field by field, and
    /// keeps the reconstructed record for future use. Read failures and empty
    /// selections are log-only: the store and the previously reconstructed
    /// record stay untouched.
    pub(crate) fn on_selection_changed(&mut self) {
        let Some(row) = self.selected else {
            self.log_line(SELECTION_EMPTY_MESSAGE);
            return;
        };
        let record = match self.store.record_at(row) {
            Ok(record) => record,
            Err(err) => {
                self.log_line(&format!("Could not read selected row {row}: {err:#}"));
                return;
            }
        };
        match serde_json::to_string(&record) {
            Ok(json) => self.log_line(&format!("Selection changed: {json}")),
            Err(err) => self.log_line(&format!("Could not encode selected record: {err}")),
        }
        self.set_status(format!("Selected {}", record.id));
        self.last_selected = Some(record);
    }
}
