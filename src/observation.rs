//! Expands a validated mapping plus display rows into concrete observations.
//!
//! One row yields one sub-observation per value-bearing column, so a wide
//! dataset produces several observations per row. Incomplete observations
//! reflect genuinely missing source data and are dropped silently, never
//! errored.

use std::collections::{BTreeMap, HashMap};

use crate::mapping::{MappedThing, Mapping, MappingVal};
use crate::table::{RowNumber, TabularDataset};

/// Exact-match, case-sensitive cell rewrite table from the remap-values
/// feature.
pub type ValueMap = HashMap<String, String>;

/// Observations keyed by original row number. Rows that produced none are
/// absent from the map entirely.
pub type RowObservations = BTreeMap<RowNumber, Vec<Observation>>;

/// One fully resolved (place, variable, date, value[, unit]) tuple.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Observation(BTreeMap<MappedThing, String>);

impl Observation {
    pub fn get(&self, thing: MappedThing) -> Option<&str> {
        self.0.get(&thing).map(String::as_str)
    }

    fn set(&mut self, thing: MappedThing, value: String) {
        self.0.insert(thing, value);
    }

    /// Place, StatVar, Date, and Value are all mandatory; Unit is optional.
    fn is_complete(&self) -> bool {
        [
            MappedThing::Place,
            MappedThing::StatVar,
            MappedThing::Date,
            MappedThing::Value,
        ]
        .iter()
        .all(|thing| self.0.contains_key(thing))
    }
}

/// Human-readable preview line for one observation.
pub fn observation_to_string(obs: &Observation) -> String {
    let mut line = format!(
        "Value of {} for {} in {} is {}",
        obs.get(MappedThing::StatVar).unwrap_or_default(),
        obs.get(MappedThing::Place).unwrap_or_default(),
        obs.get(MappedThing::Date).unwrap_or_default(),
        obs.get(MappedThing::Value).unwrap_or_default(),
    );
    if let Some(unit) = obs.get(MappedThing::Unit) {
        line.push(' ');
        line.push_str(unit);
    }
    line
}

/// A column whose cells supply the Value of each sub-observation, plus the
/// header-mapped thing it resolves (if it was reached via a wide mapping).
struct ValueBearingColumn {
    column_idx: usize,
    header_thing: Option<(MappedThing, String)>,
}

/// Expands the mapping over every display row. The caller is expected to
/// have run the validator first; an unvalidated mapping simply yields fewer
/// (or no) observations.
pub fn generate_row_observations(
    mapping: &Mapping,
    dataset: &TabularDataset,
    value_map: &ValueMap,
) -> RowObservations {
    // Value-bearing columns: all header columns of the one wide thing, or
    // the single Value column.
    let mut value_columns: Vec<ValueBearingColumn> = Vec::new();
    for (thing, headers) in mapping.column_header_things() {
        for header in headers {
            value_columns.push(ValueBearingColumn {
                column_idx: header.column_idx,
                header_thing: Some((thing, header.header.clone())),
            });
        }
    }
    if value_columns.is_empty()
        && let Some(MappingVal::Column { column, .. }) = mapping.get(MappedThing::Value)
    {
        value_columns.push(ValueBearingColumn {
            column_idx: column.column_idx,
            header_thing: None,
        });
    }

    let column_constants: Vec<(MappedThing, &BTreeMap<usize, String>)> = mapping
        .iter()
        .filter_map(|(thing, val)| match val {
            MappingVal::ColumnConstant { column_constants } => Some((thing, column_constants)),
            _ => None,
        })
        .collect();
    let plain_columns: Vec<(MappedThing, usize)> = mapping
        .iter()
        .filter_map(|(thing, val)| match val {
            MappingVal::Column { column, .. } if thing != MappedThing::Value => {
                Some((thing, column.column_idx))
            }
            _ => None,
        })
        .collect();
    let file_constants: Vec<(MappedThing, &str)> = mapping
        .iter()
        .filter_map(|(thing, val)| match val {
            MappingVal::FileConstant { file_constant } => Some((thing, file_constant.as_str())),
            _ => None,
        })
        .collect();

    let substitute = |cell: &str| -> String {
        value_map
            .get(cell)
            .cloned()
            .unwrap_or_else(|| cell.to_string())
    };

    let mut result = RowObservations::new();
    for (&row_number, cells) in &dataset.rows_for_display {
        let mut observations = Vec::new();
        for value_column in &value_columns {
            let cell = cells
                .get(value_column.column_idx)
                .map(String::as_str)
                .unwrap_or_default();
            let value = substitute(cell);
            if value.is_empty() {
                continue;
            }
            let mut obs = Observation::default();
            obs.set(MappedThing::Value, value);
            if let Some((thing, header)) = &value_column.header_thing {
                obs.set(*thing, header.clone());
            }
            for (thing, constants) in &column_constants {
                if let Some(constant) = constants.get(&value_column.column_idx) {
                    obs.set(*thing, constant.clone());
                }
            }
            for &(thing, column_idx) in &plain_columns {
                let cell = cells.get(column_idx).map(String::as_str).unwrap_or_default();
                let resolved = substitute(cell);
                if !resolved.is_empty() {
                    obs.set(thing, resolved);
                }
            }
            for &(thing, constant) in &file_constants {
                obs.set(thing, constant.to_string());
            }
            if obs.is_complete() {
                observations.push(obs);
            }
        }
        if !observations.is_empty() {
            result.insert(row_number, observations);
        }
    }
    result
}
