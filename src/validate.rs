//! Structural validation of a [`Mapping`] before generation.
//!
//! Every rule runs independently so one pass surfaces all problems at once.
//! A non-empty result blocks observation and template generation but never
//! mutates the mapping; the user fixes the slots and revalidates.

use thiserror::Error;

use crate::mapping::{MappedThing, Mapping, MappingVal};

/// One structural problem with a mapping. The catalogue is fixed so the UI
/// layer can rely on stable wording.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingIssue {
    #[error("missing required mapping for {0}")]
    MissingRequired(MappedThing),
    #[error("missing column for the column mapping of {0}")]
    EmptyColumn(MappedThing),
    #[error("missing or invalid header list for the column header mapping of {0}")]
    BadHeaders(MappedThing),
    #[error("repeated column in the header list of {0}")]
    RepeatedHeader(MappedThing),
    #[error("missing place property for the Place mapping")]
    MissingPlaceProperty,
    #[error("missing constant for the file constant mapping of {0}")]
    EmptyFileConstant(MappedThing),
    #[error("Place can never be a file-wide constant")]
    PlaceFileConstant,
    #[error("missing constants for the per-column constant mapping of {0}")]
    EmptyColumnConstant(MappedThing),
    #[error("Value must be mapped to a column, not a {0} mapping")]
    ValueNotColumn(&'static str),
    #[error("no mapping references a column, so there are no rows to iterate")]
    NoColumnReference,
    #[error("multiple column header mappings found: {0}")]
    MultipleColumnHeaders(String),
    #[error("either Value must be mapped or exactly one thing must come from column headers")]
    MissingValueSource,
}

/// Checks every structural invariant; empty means the mapping may be fed to
/// the generators.
pub fn check_mapping(mapping: &Mapping) -> Vec<MappingIssue> {
    let mut issues = Vec::new();

    for thing in MappedThing::REQUIRED {
        if mapping.get(thing).is_none() {
            issues.push(MappingIssue::MissingRequired(thing));
        }
    }

    for (thing, val) in mapping.iter() {
        match val {
            MappingVal::Column { column, .. } => {
                if column.id.is_empty() {
                    issues.push(MappingIssue::EmptyColumn(thing));
                }
            }
            MappingVal::ColumnHeader { headers, .. } => {
                if headers.is_empty() || headers.iter().any(|h| h.id.is_empty()) {
                    issues.push(MappingIssue::BadHeaders(thing));
                }
                let mut seen = std::collections::HashSet::new();
                if headers.iter().any(|h| !seen.insert(h.column_idx)) {
                    issues.push(MappingIssue::RepeatedHeader(thing));
                }
            }
            MappingVal::FileConstant { file_constant } => {
                if file_constant.is_empty() {
                    issues.push(MappingIssue::EmptyFileConstant(thing));
                }
                if thing == MappedThing::Place {
                    issues.push(MappingIssue::PlaceFileConstant);
                }
            }
            MappingVal::ColumnConstant { column_constants } => {
                if column_constants.is_empty() {
                    issues.push(MappingIssue::EmptyColumnConstant(thing));
                }
            }
        }
    }

    if let Some(val) = mapping.get(MappedThing::Place) {
        let place_property = match val {
            MappingVal::Column { place_property, .. }
            | MappingVal::ColumnHeader { place_property, .. } => *place_property,
            _ => None,
        };
        if matches!(
            val,
            MappingVal::Column { .. } | MappingVal::ColumnHeader { .. }
        ) && place_property.is_none()
        {
            issues.push(MappingIssue::MissingPlaceProperty);
        }
    }

    if let Some(val) = mapping.get(MappedThing::Value)
        && !matches!(val, MappingVal::Column { .. })
    {
        issues.push(MappingIssue::ValueNotColumn(val.type_name()));
    }

    let any_column_ref = mapping.iter().any(|(_, val)| {
        matches!(
            val,
            MappingVal::Column { .. } | MappingVal::ColumnHeader { .. }
        )
    });
    if !mapping.is_empty() && !any_column_ref {
        issues.push(MappingIssue::NoColumnReference);
    }

    // A dataset can be wide in only one dimension, and a mapping needs
    // exactly one source of cell values: a Value column or that one wide
    // thing.
    let header_things = mapping.column_header_things();
    if header_things.len() > 1 {
        let names = header_things
            .iter()
            .map(|(thing, _)| thing.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        issues.push(MappingIssue::MultipleColumnHeaders(names));
    } else if header_things.is_empty() && mapping.get(MappedThing::Value).is_none() {
        issues.push(MappingIssue::MissingValueSource);
    }

    issues
}

/// `check_mapping` rendered as the display strings UI layers consume.
pub fn check_mapping_messages(mapping: &Mapping) -> Vec<String> {
    check_mapping(mapping)
        .into_iter()
        .map(|issue| issue.to_string())
        .collect()
}
