//! Normalized view of an uploaded tabular file.
//!
//! A [`TabularDataset`] is produced once per file by the CSV reader in
//! `io_utils` and is read-only downstream: the detectors consume the sampled
//! column values, the observation generator consumes the display-row window,
//! and the template generator consumes only the column list.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

/// Original 1-based row number in the source file (header row included).
pub type RowNumber = u64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    /// Unique among the columns of one dataset. Equal to `header` unless the
    /// header is shared with another column, in which case the column index
    /// is appended.
    pub id: String,
    pub header: String,
    pub column_idx: usize,
}

impl Column {
    pub fn new(id: &str, header: &str, column_idx: usize) -> Self {
        Column {
            id: id.to_string(),
            header: header.to_string(),
            column_idx,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TabularDataset {
    pub ordered_columns: Vec<Column>,
    /// Bounded per-column value sample keyed by column index. Used only for
    /// detection, never for generation.
    pub column_values_sampled: HashMap<usize, Vec<String>>,
    /// Bounded display window keyed by original row number. Large files keep
    /// only a head and a tail, so the keys are not necessarily contiguous.
    pub rows_for_display: BTreeMap<RowNumber, Vec<String>>,
}

impl TabularDataset {
    pub fn column(&self, column_idx: usize) -> Option<&Column> {
        self.ordered_columns.get(column_idx)
    }

    /// Renames one column's header and re-derives every column id, since a
    /// rename can introduce or clear a header collision elsewhere.
    pub fn rename_column(&mut self, column_idx: usize, new_header: &str) {
        if let Some(col) = self.ordered_columns.get_mut(column_idx) {
            col.header = new_header.to_string();
        }
        let headers: Vec<String> = self
            .ordered_columns
            .iter()
            .map(|c| c.header.clone())
            .collect();
        self.ordered_columns = columns_from_headers(&headers);
    }
}

/// Builds the ordered column list, disambiguating ids for repeated headers by
/// appending the column index.
pub fn columns_from_headers(headers: &[String]) -> Vec<Column> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for header in headers {
        *counts.entry(header.as_str()).or_default() += 1;
    }
    headers
        .iter()
        .enumerate()
        .map(|(idx, header)| {
            let id = if counts[header.as_str()] > 1 {
                format!("{header}_{idx}")
            } else {
                header.clone()
            };
            Column {
                id,
                header: header.clone(),
                column_idx: idx,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn unique_headers_keep_their_name_as_id() {
        let cols = columns_from_headers(&headers(&["iso", "date", "val"]));
        assert_eq!(cols[0], Column::new("iso", "iso", 0));
        assert_eq!(cols[2], Column::new("val", "val", 2));
    }

    #[test]
    fn repeated_headers_get_index_suffixed_ids() {
        let cols = columns_from_headers(&headers(&["a", "b", "a"]));
        assert_eq!(cols[0].id, "a_0");
        assert_eq!(cols[1].id, "b");
        assert_eq!(cols[2].id, "a_2");
    }

    #[test]
    fn rename_rederives_ids() {
        let mut dataset = TabularDataset {
            ordered_columns: columns_from_headers(&headers(&["a", "b", "a"])),
            ..Default::default()
        };
        dataset.rename_column(2, "c");
        let ids: Vec<&str> = dataset
            .ordered_columns
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(ids, vec!["a", "b", "c"]);

        dataset.rename_column(1, "c");
        let ids: Vec<&str> = dataset
            .ordered_columns
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(ids, vec!["a", "c_1", "c_2"]);
    }
}
