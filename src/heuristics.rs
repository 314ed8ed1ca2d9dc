//! Combines the column detectors into an initial, best-effort [`Mapping`].
//!
//! The prediction may be incomplete: StatVar, Value, and Unit have no usable
//! free-text heuristic and are always left for the user. Low-confidence
//! place hints are likewise never promoted into the mapping automatically.

use itertools::Itertools;

use crate::date_detect;
use crate::mapping::{MappedThing, Mapping, MappingVal};
use crate::place_detect::{Confidence, PlaceDetector, PlaceProperty, PlaceType};
use crate::table::{Column, TabularDataset};

const COUNTRY_PROPERTY_ORDER: &[PlaceProperty] = &[
    PlaceProperty::IsoCode,
    PlaceProperty::CountryAlpha3Code,
    PlaceProperty::CountryNumericCode,
    PlaceProperty::Name,
];

const STATE_PROPERTY_ORDER: &[PlaceProperty] = &[
    PlaceProperty::IsoCode,
    PlaceProperty::Fips52AlphaCode,
    PlaceProperty::GeoId,
    PlaceProperty::Name,
];

/// Predicts a mapping for the dataset. Re-running over the same dataset
/// always yields the same result; there is no hidden randomness.
pub fn get_predictions(dataset: &TabularDataset, detector: &PlaceDetector) -> Mapping {
    let mut mapping = Mapping::new();
    if let Some(val) = predict_place(dataset, detector) {
        mapping.set(MappedThing::Place, val);
    }
    if let Some(val) = predict_date(dataset) {
        mapping.set(MappedThing::Date, val);
    }
    mapping
}

fn sampled_values<'a>(dataset: &'a TabularDataset, column: &Column) -> &'a [String] {
    dataset
        .column_values_sampled
        .get(&column.column_idx)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// High-confidence place candidates, split by kind. State detections take
/// priority over country detections when any exist; within the winning kind
/// the fixed property preference order decides, and the lowest column index
/// wins among equally good columns.
fn predict_place(dataset: &TabularDataset, detector: &PlaceDetector) -> Option<MappingVal> {
    let mut countries: Vec<(PlaceProperty, &Column)> = Vec::new();
    let mut states: Vec<(PlaceProperty, &Column)> = Vec::new();
    for column in &dataset.ordered_columns {
        let values = sampled_values(dataset, column);
        let Some(detected) = detector.detect(&column.header, values) else {
            continue;
        };
        if detected.confidence != Confidence::High {
            continue;
        }
        let Some(property) = detected.type_property.place_property else {
            continue;
        };
        match detected.type_property.place_type {
            PlaceType::Country => countries.push((property, column)),
            PlaceType::State => states.push((property, column)),
            _ => {}
        }
    }

    let (candidates, place_type, order) = if !states.is_empty() {
        (states, PlaceType::State, STATE_PROPERTY_ORDER)
    } else if !countries.is_empty() {
        (countries, PlaceType::Country, COUNTRY_PROPERTY_ORDER)
    } else {
        return None;
    };

    let (property, column) = order
        .iter()
        .find_map(|&preferred| {
            candidates
                .iter()
                .filter(|&&(property, _)| property == preferred)
                .min_by_key(|&&(_, column)| column.column_idx)
                .copied()
        })?;
    Some(MappingVal::place_column(column.clone(), place_type, property))
}

/// Date headers win over date-valued columns whenever even one header is a
/// date; all date headers are then collected into a single wide mapping.
fn predict_date(dataset: &TabularDataset) -> Option<MappingVal> {
    let header_columns: Vec<Column> = dataset
        .ordered_columns
        .iter()
        .filter(|column| date_detect::detect_column_header_date(&column.header))
        .cloned()
        .collect_vec();
    if !header_columns.is_empty() {
        return Some(MappingVal::column_header(header_columns));
    }
    dataset
        .ordered_columns
        .iter()
        .find(|column| date_detect::detect_column_with_dates(sampled_values(dataset, column)))
        .map(|column| MappingVal::column(column.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn dataset(columns: &[(&str, &[&str])]) -> TabularDataset {
        let mut ordered_columns = Vec::new();
        let mut column_values_sampled = HashMap::new();
        for (idx, (header, values)) in columns.iter().enumerate() {
            ordered_columns.push(Column::new(&format!("{header}{idx}"), header, idx));
            column_values_sampled.insert(idx, values.iter().map(|s| s.to_string()).collect());
        }
        TabularDataset {
            ordered_columns,
            column_values_sampled,
            ..Default::default()
        }
    }

    #[test]
    fn detects_a_country_column() {
        let csv = dataset(&[("a", &["USA", "ITA"]), ("b", &["fdf"]), ("c", &["dfds"])]);
        let det = PlaceDetector::new();
        let got = get_predictions(&csv, &det);
        assert_eq!(got.len(), 1);
        assert_eq!(
            got.get(MappedThing::Place),
            Some(&MappingVal::place_column(
                Column::new("a0", "a", 0),
                PlaceType::Country,
                PlaceProperty::CountryAlpha3Code,
            ))
        );
    }

    #[test]
    fn country_property_preference_order() {
        let iso: &[&str] = &["US", "IT"];
        let alpha3: &[&str] = &["USA", "ITA"];
        let number: &[&str] = &["840", "380"];
        let name: &[&str] = &["United States", "italy "];

        let cases: &[(&[(&str, &[&str])], usize, PlaceProperty)] = &[
            (
                &[("iso", iso), ("alpha3", alpha3), ("number", number), ("name", name)],
                0,
                PlaceProperty::IsoCode,
            ),
            (
                &[("number", number), ("name", name), ("alpha3", alpha3)],
                2,
                PlaceProperty::CountryAlpha3Code,
            ),
            (
                &[("number", number), ("name", name)],
                0,
                PlaceProperty::CountryNumericCode,
            ),
            (&[("name", name)], 0, PlaceProperty::Name),
        ];
        let det = PlaceDetector::new();
        for (columns, want_idx, want_property) in cases {
            let got = get_predictions(&dataset(columns), &det);
            let Some(MappingVal::Column {
                column,
                place_type,
                place_property,
            }) = got.get(MappedThing::Place)
            else {
                panic!("expected a place column for {columns:?}");
            };
            assert_eq!(column.column_idx, *want_idx);
            assert_eq!(*place_type, Some(PlaceType::Country));
            assert_eq!(*place_property, Some(*want_property));
        }
    }

    #[test]
    fn no_columns_means_no_prediction() {
        let det = PlaceDetector::new();
        assert!(get_predictions(&dataset(&[]), &det).is_empty());
    }

    #[test]
    fn equally_good_columns_break_ties_by_lowest_index() {
        let det = PlaceDetector::new();
        let csv = dataset(&[("a", &["USA", "ITA"]), ("b", &["USA", "NOR"]), ("c", &["x"])]);
        let got = get_predictions(&csv, &det);
        let Some(MappingVal::Column { column, .. }) = got.get(MappedThing::Place) else {
            panic!("expected a place column");
        };
        assert_eq!(column.column_idx, 0);
    }

    #[test]
    fn date_headers_collected_into_one_wide_mapping() {
        let det = PlaceDetector::new();
        let csv = dataset(&[("2020-10", &[]), ("2020-11", &[]), ("a", &[])]);
        let got = get_predictions(&csv, &det);
        assert_eq!(
            got.get(MappedThing::Date),
            Some(&MappingVal::column_header(vec![
                Column::new("2020-100", "2020-10", 0),
                Column::new("2020-111", "2020-11", 1),
            ]))
        );
    }

    #[test]
    fn date_column_detected_when_no_header_is_a_date() {
        let det = PlaceDetector::new();
        let csv = dataset(&[
            ("a", &["2020-10", "2021-10", "2022-10"]),
            ("b", &["random", "random", "random"]),
            ("c", &["1", "2", "3"]),
        ]);
        let got = get_predictions(&csv, &det);
        assert_eq!(
            got.get(MappedThing::Date),
            Some(&MappingVal::column(Column::new("a0", "a", 0)))
        );
    }

    #[test]
    fn date_headers_win_over_date_columns() {
        let det = PlaceDetector::new();
        let csv = dataset(&[
            ("2022-10", &["1", "2", "3"]),
            ("2021-10", &["random", "random", "random"]),
            ("c", &["2020-10", "2021-10", "2022-10"]),
        ]);
        let got = get_predictions(&csv, &det);
        let Some(MappingVal::ColumnHeader { headers, .. }) = got.get(MappedThing::Date) else {
            panic!("expected a wide date mapping");
        };
        let indices: Vec<usize> = headers.iter().map(|h| h.column_idx).collect();
        assert_eq!(indices, vec![0, 1]);
    }

    #[test]
    fn state_detections_take_priority_over_country() {
        let det = PlaceDetector::new();
        let csv = dataset(&[
            ("2022-10", &["1", "2", "3"]),
            ("2021-10", &["random", "random", "random"]),
            ("c", &["2020-10", "2021-10", "2022-10"]),
            ("d", &["US", "IT", "ES"]),
            ("e", &["WY", "FL", "NJ"]),
            // Numeric country code or FIPS state code; the header says state.
            ("state", &["36", "40", "50"]),
        ]);
        let got = get_predictions(&csv, &det);
        assert_eq!(
            got.get(MappedThing::Place),
            Some(&MappingVal::place_column(
                Column::new("e4", "e", 4),
                PlaceType::State,
                PlaceProperty::Fips52AlphaCode,
            ))
        );
        let Some(MappingVal::ColumnHeader { headers, .. }) = got.get(MappedThing::Date) else {
            panic!("expected a wide date mapping");
        };
        assert_eq!(headers.len(), 2);
    }

    #[test]
    fn stat_var_value_and_unit_are_never_predicted() {
        let det = PlaceDetector::new();
        let csv = dataset(&[("a", &["USA", "ITA"]), ("val", &["1", "2"])]);
        let got = get_predictions(&csv, &det);
        for thing in [MappedThing::StatVar, MappedThing::Value, MappedThing::Unit] {
            assert!(got.get(thing).is_none());
        }
    }
}
