//! Table types.

use serde::{Deserialize, Serialize};

/// An unprocessed table grid as extracted from a page.
///
/// Rows are ordered, cells may be absent, and rows may differ in length.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawTable {
    /// Rows of optional cell values
    pub rows: Vec<Vec<Option<String>>>,
}

impl RawTable {
    /// Create a table from raw rows.
    pub fn new(rows: Vec<Vec<Option<String>>>) -> Self {
        Self { rows }
    }

    /// Create a table where every cell is present.
    pub fn from_strings<R, S>(rows: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            rows.into_iter()
                .map(|row| row.into_iter().map(|c| Some(c.into())).collect())
                .collect(),
        )
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get the number of columns (widest row).
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Check if the table has no rows or no columns.
    pub fn is_empty(&self) -> bool {
        self.row_count() == 0 || self.column_count() == 0
    }
}

/// A header-promoted table with every cell filled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabularValue {
    /// Column headers (the first raw row)
    pub header: Vec<String>,

    /// Data rows in original order, each as wide as the header
    pub body: Vec<Vec<String>>,
}

impl TabularValue {
    /// Minimum number of columns for a table to carry information.
    pub const MIN_COLUMNS: usize = 2;

    /// Promote the first row of a raw grid to the header.
    ///
    /// Absent cells become empty strings and short rows are padded to the
    /// widest row. Returns `None` for grids with no rows or fewer than
    /// [`Self::MIN_COLUMNS`] columns.
    pub fn from_raw(raw: &RawTable) -> Option<Self> {
        let width = raw.column_count();
        if raw.is_empty() || width < Self::MIN_COLUMNS {
            return None;
        }

        let mut rows = raw.rows.iter().map(|row| {
            let mut cells: Vec<String> = row.iter().map(|c| c.clone().unwrap_or_default()).collect();
            cells.resize(width, String::new());
            cells
        });

        let header = rows.next()?;
        let body = rows.collect();
        Some(Self { header, body })
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.header.len()
    }

    /// Get the number of data rows.
    pub fn row_count(&self) -> usize {
        self.body.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_table_dimensions() {
        let table = RawTable::new(vec![
            vec![Some("a".into())],
            vec![Some("b".into()), None, Some("c".into())],
        ]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.column_count(), 3);
        assert!(!table.is_empty());
        assert!(RawTable::default().is_empty());
        assert!(RawTable::new(vec![vec![]]).is_empty());
    }

    #[test]
    fn test_header_promotion() {
        let raw = RawTable::from_strings([["A", "B"], ["1", "2"], ["3", "4"]]);
        let table = TabularValue::from_raw(&raw).unwrap();
        assert_eq!(table.header, vec!["A", "B"]);
        assert_eq!(table.body, vec![vec!["1", "2"], vec!["3", "4"]]);
    }

    #[test]
    fn test_missing_cells_filled_and_padded() {
        let raw = RawTable::new(vec![
            vec![Some("Name".into()), None, Some("Note".into())],
            vec![Some("x".into())],
        ]);
        let table = TabularValue::from_raw(&raw).unwrap();
        assert_eq!(table.header, vec!["Name", "", "Note"]);
        assert_eq!(table.body, vec![vec!["x", "", ""]]);
    }

    #[test]
    fn test_narrow_table_rejected() {
        let raw = RawTable::from_strings([["only"], ["one"]]);
        assert!(TabularValue::from_raw(&raw).is_none());
        assert!(TabularValue::from_raw(&RawTable::default()).is_none());
    }

    #[test]
    fn test_header_only_table_kept() {
        let raw = RawTable::from_strings([["A", "B"]]);
        let table = TabularValue::from_raw(&raw).unwrap();
        assert_eq!(table.column_count(), 2);
        assert_eq!(table.row_count(), 0);
    }

    #[test]
    fn test_raw_table_json_shape() {
        let raw: RawTable = serde_json::from_str(r#"[["a", null], ["b", "c"]]"#).unwrap();
        assert_eq!(raw.rows[0][1], None);
        assert_eq!(raw.rows[1][1].as_deref(), Some("c"));
    }
}
