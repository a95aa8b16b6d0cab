use anyhow::{Context, Result};

use crate::model::{MountRecord, MountState};

/// Display columns in table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Column {
    Id,
    Hostname,
    Port,
    AuthType,
    AuthKey,
    RemoteDir,
    LocalDir,
    State,
}

impl Column {
    pub(crate) const ALL: [Column; 8] = [
        Column::Id,
        Column::Hostname,
        Column::Port,
        Column::AuthType,
        Column::AuthKey,
        Column::RemoteDir,
        Column::LocalDir,
        Column::State,
    ];

    pub(crate) fn title(self) -> &'static str {
        match self {
            Column::Id => "ID",
            Column::Hostname => "Hostname",
            Column::Port => "Port",
            Column::AuthType => "Auth Type",
            Column::AuthKey => "Auth Key",
            Column::RemoteDir => "Remote Directory",
            Column::LocalDir => "Local Directory",
            Column::State => "State",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Typed cell encoding. Port and state are kept as integers; state becomes a
/// display string only in [`RecordStore::display_value`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum CellValue {
    Text(String),
    Int(i64),
}

impl CellValue {
    fn as_text(&self) -> Result<&str> {
        match self {
            CellValue::Text(value) => Ok(value),
            CellValue::Int(value) => anyhow::bail!("expected text cell, found integer {value}"),
        }
    }

    fn as_int(&self) -> Result<i64> {
        match self {
            CellValue::Int(value) => Ok(*value),
            CellValue::Text(value) => anyhow::bail!("expected integer cell, found text {value:?}"),
        }
    }
}

/// Ordered, in-memory table of mountpoint records. Records are copied in at
/// append time and read back row by row; nothing is validated or deduplicated.
#[derive(Debug, Default)]
pub(crate) struct RecordStore {
    rows: Vec<[CellValue; Column::ALL.len()]>,
}

impl RecordStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_records(records: &[MountRecord]) -> Self {
        let mut store = Self::new();
        for record in records {
            store.append(record);
        }
        store
    }

    pub(crate) fn append(&mut self, record: &MountRecord) {
        self.rows.push([
            CellValue::Text(record.id.clone()),
            CellValue::Text(record.hostname.clone()),
            CellValue::Int(i64::from(record.port)),
            CellValue::Text(record.auth_type.clone()),
            CellValue::Text(record.auth_key.clone()),
            CellValue::Text(record.remote_dir.clone()),
            CellValue::Text(record.local_dir.clone()),
            CellValue::Int(record.state.as_raw()),
        ]);
    }

    pub(crate) fn len(&self) -> usize {
        self.rows.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub(crate) fn cell(&self, row: usize, column: Column) -> Result<&CellValue> {
        let cells = self
            .rows
            .get(row)
            .with_context(|| format!("row {row} out of range"))?;
        Ok(&cells[column.index()])
    }

    /// Render-time view of a cell. State integers are converted to their
    /// display labels here and nowhere else.
    pub(crate) fn display_value(&self, row: usize, column: Column) -> Result<String> {
        let cell = self.cell(row, column)?;
        match column {
            Column::State => {
                let state = MountState::from_raw(cell.as_int()?)
                    .with_context(|| format!("row {row} state"))?;
                Ok(state.label().to_string())
            }
            _ => Ok(match cell {
                CellValue::Text(value) => value.clone(),
                CellValue::Int(value) => value.to_string(),
            }),
        }
    }

    /// Read all eight columns back and rebuild the record they were copied
    /// from. Any type mismatch or invalid state integer is a conversion
    /// failure.
    pub(crate) fn record_at(&self, row: usize) -> Result<MountRecord> {
        let port_raw = self.cell(row, Column::Port)?.as_int()?;
        let port = u16::try_from(port_raw)
            .with_context(|| format!("row {row} port {port_raw} out of range"))?;
        let state = MountState::from_raw(self.cell(row, Column::State)?.as_int()?)
            .with_context(|| format!("row {row} state"))?;
        Ok(MountRecord {
            id: self.cell(row, Column::Id)?.as_text()?.to_string(),
            hostname: self.cell(row, Column::Hostname)?.as_text()?.to_string(),
            port,
            auth_type: self.cell(row, Column::AuthType)?.as_text()?.to_string(),
            auth_key: self.cell(row, Column::AuthKey)?.as_text()?.to_string(),
            remote_dir: self.cell(row, Column::RemoteDir)?.as_text()?.to_string(),
            local_dir: self.cell(row, Column::LocalDir)?.as_text()?.to_string(),
            state,
        })
    }

    #[cfg(test)]
    pub(crate) fn set_cell(&mut self, row: usize, column: Column, value: CellValue) {
        self.rows[row][column.index()] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::seed_mountpoints;

    #[test]
    fn row_count_matches_seed_entries() {
        let store = RecordStore::from_records(&seed_mountpoints());
        assert_eq!(store.len(), 2);
        assert!(!store.is_empty());
    }

    #[test]
    fn empty_seed_builds_empty_store() {
        let store = RecordStore::from_records(&[]);
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
        assert!(store.cell(0, Column::Id).is_err());
    }

    #[test]
    fn display_values_match_source_fields() {
        let seeds = seed_mountpoints();
        let store = RecordStore::from_records(&seeds);
        let expected = [
            "jimmy_mediapool",
            "jimmy",
            "22",
            "rsa",
            "/path/to/key",
            "/mediapool",
            "/mnt/jimmy_mediapool",
            "Unknown",
        ];
        for (column, expected) in Column::ALL.iter().zip(expected) {
            assert_eq!(store.display_value(0, *column).unwrap(), expected);
        }
    }

    #[test]
    fn state_renders_display_labels() {
        let mut record = seed_mountpoints().remove(0);
        record.state = MountState::Mounted;
        let mut store = RecordStore::new();
        store.append(&record);
        record.state = MountState::Unmounted;
        store.append(&record);
        assert_eq!(store.display_value(0, Column::State).unwrap(), "Active");
        assert_eq!(
            store.display_value(1, Column::State).unwrap(),
            "Not Mounted"
        );
    }

    #[test]
    fn record_at_reconstructs_inserted_record() {
        let seeds = seed_mountpoints();
        let store = RecordStore::from_records(&seeds);
        assert_eq!(store.record_at(0).unwrap(), seeds[0]);
        assert_eq!(store.record_at(1).unwrap(), seeds[1]);
    }

    #[test]
    fn record_at_rejects_out_of_range_row() {
        let store = RecordStore::from_records(&seed_mountpoints());
        assert!(store.record_at(2).is_err());
    }

    #[test]
    fn corrupted_state_cell_is_a_conversion_failure() {
        let mut store = RecordStore::from_records(&seed_mountpoints());
        store.set_cell(0, Column::State, CellValue::Int(9));
        assert!(store.display_value(0, Column::State).is_err());
        assert!(store.record_at(0).is_err());
    }

    #[test]
    fn mistyped_cell_is_a_conversion_failure() {
        let mut store = RecordStore::from_records(&seed_mountpoints());
        store.set_cell(0, Column::Port, CellValue::Text("22".to_string()));
        assert!(store.record_at(0).is_err());
        store.set_cell(1, Column::Port, CellValue::Int(70_000));
        assert!(store.record_at(1).is_err());
    }
}
