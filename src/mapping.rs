//! The user-editable mapping from semantic roles to tabular data.
//!
//! A [`Mapping`] assigns each [`MappedThing`] at most one [`MappingVal`],
//! the rule for obtaining that thing's value from the file. The four rule
//! shapes live in one tagged enum so generators can match exhaustively
//! instead of probing optional fields.

use std::collections::BTreeMap;
use std::fmt;

use anyhow::{Context, Result, bail};
use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::place_detect::{PlaceProperty, PlaceType};
use crate::table::Column;

/// The five semantic roles a column or constant can fulfil.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum MappedThing {
    Place,
    Date,
    StatVar,
    Unit,
    Value,
}

impl MappedThing {
    pub const ALL: [MappedThing; 5] = [
        MappedThing::Place,
        MappedThing::Date,
        MappedThing::StatVar,
        MappedThing::Unit,
        MappedThing::Value,
    ];

    /// The roles a mapping must fill before anything can be generated.
    pub const REQUIRED: [MappedThing; 3] =
        [MappedThing::Place, MappedThing::StatVar, MappedThing::Date];
}

impl fmt::Display for MappedThing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MappedThing::Place => "Place",
            MappedThing::Date => "Date",
            MappedThing::StatVar => "StatVar",
            MappedThing::Unit => "Unit",
            MappedThing::Value => "Value",
        };
        write!(f, "{name}")
    }
}

/// How one mapped thing's value is obtained. Only Place may carry
/// `place_type`/`place_property`, and both are required whenever it does.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum MappingVal {
    /// Every row's value comes from one fixed column.
    #[serde(rename_all = "camelCase")]
    Column {
        column: Column,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        place_type: Option<PlaceType>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        place_property: Option<PlaceProperty>,
    },
    /// The thing's value is spread across many columns, one per distinct
    /// value; each listed column's header text supplies the value and its
    /// cells supply the Value of that sub-observation ("wide" layout).
    #[serde(rename_all = "camelCase")]
    ColumnHeader {
        headers: Vec<Column>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        place_type: Option<PlaceType>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        place_property: Option<PlaceProperty>,
    },
    /// One literal applies to every row in the file.
    #[serde(rename_all = "camelCase")]
    FileConstant { file_constant: String },
    /// A constant that varies per column, keyed by column index. Used when a
    /// header-mapped value column has a fixed attribute (e.g. a unit) that
    /// differs between columns.
    #[serde(rename_all = "camelCase")]
    ColumnConstant {
        #[serde(with = "column_index_keys")]
        column_constants: BTreeMap<usize, String>,
    },
}

/// JSON object keys are strings, and the internally-tagged enum buffers its
/// content before dispatching, so the integer keys must be converted at the
/// boundary rather than left to serde_json.
mod column_index_keys {
    use std::collections::BTreeMap;

    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        map: &BTreeMap<usize, String>,
        ser: S,
    ) -> Result<S::Ok, S::Error> {
        ser.collect_map(map.iter().map(|(idx, v)| (idx.to_string(), v)))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        de: D,
    ) -> Result<BTreeMap<usize, String>, D::Error> {
        BTreeMap::<String, String>::deserialize(de)?
            .into_iter()
            .map(|(key, v)| {
                let idx = key
                    .parse::<usize>()
                    .map_err(|_| D::Error::custom(format!("invalid column index '{key}'")))?;
                Ok((idx, v))
            })
            .collect()
    }
}

impl MappingVal {
    pub fn type_name(&self) -> &'static str {
        match self {
            MappingVal::Column { .. } => "column",
            MappingVal::ColumnHeader { .. } => "columnHeader",
            MappingVal::FileConstant { .. } => "fileConstant",
            MappingVal::ColumnConstant { .. } => "columnConstant",
        }
    }

    pub fn column(column: Column) -> Self {
        MappingVal::Column {
            column,
            place_type: None,
            place_property: None,
        }
    }

    pub fn place_column(column: Column, place_type: PlaceType, property: PlaceProperty) -> Self {
        MappingVal::Column {
            column,
            place_type: Some(place_type),
            place_property: Some(property),
        }
    }

    pub fn place_column_header(
        headers: Vec<Column>,
        place_type: PlaceType,
        property: PlaceProperty,
    ) -> Self {
        MappingVal::ColumnHeader {
            headers,
            place_type: Some(place_type),
            place_property: Some(property),
        }
    }

    pub fn column_header(headers: Vec<Column>) -> Self {
        MappingVal::ColumnHeader {
            headers,
            place_type: None,
            place_property: None,
        }
    }

    pub fn file_constant(value: &str) -> Self {
        MappingVal::FileConstant {
            file_constant: value.to_string(),
        }
    }

    pub fn column_constant(constants: &[(usize, &str)]) -> Self {
        MappingVal::ColumnConstant {
            column_constants: constants
                .iter()
                .map(|&(idx, v)| (idx, v.to_string()))
                .collect(),
        }
    }
}

/// Map from [`MappedThing`] to exactly one [`MappingVal`]. Starts as a
/// possibly-partial prediction and is corrected one slot at a time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mapping(BTreeMap<MappedThing, MappingVal>);

impl Mapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, thing: MappedThing) -> Option<&MappingVal> {
        self.0.get(&thing)
    }

    /// Replaces the thing's rule; each edit touches exactly one slot.
    pub fn set(&mut self, thing: MappedThing, val: MappingVal) {
        self.0.insert(thing, val);
    }

    pub fn clear(&mut self, thing: MappedThing) {
        self.0.remove(&thing);
    }

    pub fn iter(&self) -> impl Iterator<Item = (MappedThing, &MappingVal)> {
        self.0.iter().map(|(&thing, val)| (thing, val))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The things mapped through column headers; a valid mapping has at most
    /// one.
    pub fn column_header_things(&self) -> Vec<(MappedThing, &[Column])> {
        self.iter()
            .filter_map(|(thing, val)| match val {
                MappingVal::ColumnHeader { headers, .. } => Some((thing, headers.as_slice())),
                _ => None,
            })
            .collect()
    }

    pub fn save(&self, path: &std::path::Path) -> Result<()> {
        let file = std::fs::File::create(path)
            .with_context(|| format!("Creating mapping file {path:?}"))?;
        serde_json::to_writer_pretty(file, self).context("Writing mapping JSON")
    }

    pub fn load(path: &std::path::Path) -> Result<Self> {
        let file = std::fs::File::open(path)
            .with_context(|| format!("Opening mapping file {path:?}"))?;
        serde_json::from_reader(std::io::BufReader::new(file)).context("Parsing mapping JSON")
    }
}

/// Parses the snake_case JSON a server-backed detection service returns.
/// Entries that fail validation are dropped one by one; only a response that
/// is not a JSON object at all fails the whole parse.
pub fn parse_detected_json(raw: &str) -> Result<Mapping> {
    let root: JsonValue = serde_json::from_str(raw).context("Parsing detection response")?;
    let Some(entries) = root.as_object() else {
        bail!("Detection response must be a JSON object");
    };
    let mut mapping = Mapping::new();
    for (key, entry) in entries {
        let Ok(thing) = serde_json::from_value::<MappedThing>(JsonValue::String(key.clone()))
        else {
            warn!("Dropping detection entry with unknown mapped thing '{key}'");
            continue;
        };
        match parse_detected_entry(entry) {
            Some(val) => mapping.set(thing, val),
            None => warn!("Dropping malformed detection entry for '{key}'"),
        }
    }
    Ok(mapping)
}

fn parse_detected_entry(entry: &JsonValue) -> Option<MappingVal> {
    let obj = entry.as_object()?;
    let place_type = parse_opt(obj.get("place_type"), parse_place_type)?;
    let place_property = parse_opt(obj.get("place_property"), parse_place_property)?;
    match obj.get("type")?.as_str()? {
        "column" => Some(MappingVal::Column {
            column: parse_column(obj.get("column")?)?,
            place_type,
            place_property,
        }),
        "columnHeader" => {
            let headers = obj
                .get("headers")?
                .as_array()?
                .iter()
                .map(parse_column)
                .collect::<Option<Vec<_>>>()?;
            Some(MappingVal::ColumnHeader {
                headers,
                place_type,
                place_property,
            })
        }
        "fileConstant" => Some(MappingVal::file_constant(
            obj.get("file_constant")?.as_str()?,
        )),
        "columnConstant" => {
            let constants = obj
                .get("column_constants")?
                .as_object()?
                .iter()
                .map(|(k, v)| Some((k.parse::<usize>().ok()?, v.as_str()?.to_string())))
                .collect::<Option<BTreeMap<_, _>>>()?;
            Some(MappingVal::ColumnConstant {
                column_constants: constants,
            })
        }
        _ => None,
    }
}

/// `None`/null means absent (fine); a present but malformed value poisons
/// the entry.
fn parse_opt<T>(
    value: Option<&JsonValue>,
    parse: impl Fn(&JsonValue) -> Option<T>,
) -> Option<Option<T>> {
    match value {
        None | Some(JsonValue::Null) => Some(None),
        Some(v) => parse(v).map(Some),
    }
}

fn parse_column(value: &JsonValue) -> Option<Column> {
    let obj = value.as_object()?;
    Some(Column {
        id: obj.get("id")?.as_str()?.to_string(),
        header: obj.get("header")?.as_str()?.to_string(),
        column_idx: obj.get("column_idx")?.as_u64()? as usize,
    })
}

// Place type dcids are PascalCase node names, not the camelCase forms the
// mapping files use.
fn parse_place_type(value: &JsonValue) -> Option<PlaceType> {
    match value.get("dcid")?.as_str()? {
        "GeoCoordinates" => Some(PlaceType::GeoCoordinates),
        "Country" => Some(PlaceType::Country),
        "State" => Some(PlaceType::State),
        "Province" => Some(PlaceType::Province),
        "Municipality" => Some(PlaceType::Municipality),
        "County" => Some(PlaceType::County),
        "City" => Some(PlaceType::City),
        _ => None,
    }
}

fn parse_place_property(value: &JsonValue) -> Option<PlaceProperty> {
    serde_json::from_value(value.get("dcid")?.clone()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edits_replace_exactly_one_slot() {
        let mut mapping = Mapping::new();
        mapping.set(
            MappedThing::Date,
            MappingVal::column(Column::new("date", "date", 2)),
        );
        mapping.set(MappedThing::Unit, MappingVal::file_constant("USDollar"));
        assert_eq!(mapping.len(), 2);

        mapping.set(
            MappedThing::Date,
            MappingVal::column_header(vec![Column::new("2018", "2018", 0)]),
        );
        assert_eq!(mapping.len(), 2);
        assert!(matches!(
            mapping.get(MappedThing::Date),
            Some(MappingVal::ColumnHeader { .. })
        ));

        mapping.clear(MappedThing::Unit);
        assert_eq!(mapping.get(MappedThing::Unit), None);
    }

    #[test]
    fn serde_round_trip_keeps_variant_tags() {
        let mut mapping = Mapping::new();
        mapping.set(
            MappedThing::Place,
            MappingVal::place_column(
                Column::new("iso", "iso", 0),
                PlaceType::Country,
                PlaceProperty::IsoCode,
            ),
        );
        mapping.set(
            MappedThing::Unit,
            MappingVal::column_constant(&[(3, "USDollar")]),
        );
        let json = serde_json::to_string(&mapping).unwrap();
        assert!(json.contains("\"type\":\"column\""));
        assert!(json.contains("\"placeType\":\"country\""));
        assert!(json.contains("\"placeProperty\":\"isoCode\""));
        assert!(json.contains("\"type\":\"columnConstant\""));
        assert!(json.contains("\"3\":\"USDollar\""));

        let back: Mapping = serde_json::from_str(&json).unwrap();
        assert_eq!(back, mapping);
    }

    #[test]
    fn saved_mapping_files_parse_back() {
        // The on-disk shape: camelCase place fields, string object keys for
        // per-column constants.
        let raw = r#"{
            "Place": {
                "type": "column",
                "column": {"id": "iso", "header": "iso", "columnIdx": 0},
                "placeType": "country",
                "placeProperty": "isoCode"
            },
            "Unit": {
                "type": "columnConstant",
                "columnConstants": {"2": "USDollar", "3": "CanadianDollar"}
            }
        }"#;
        let got: Mapping = serde_json::from_str(raw).unwrap();
        assert_eq!(
            got.get(MappedThing::Place),
            Some(&MappingVal::place_column(
                Column::new("iso", "iso", 0),
                PlaceType::Country,
                PlaceProperty::IsoCode,
            ))
        );
        assert_eq!(
            got.get(MappedThing::Unit),
            Some(&MappingVal::column_constant(&[
                (2, "USDollar"),
                (3, "CanadianDollar"),
            ]))
        );

        let bad = r#"{"Unit": {"type": "columnConstant", "columnConstants": {"x": "USDollar"}}}"#;
        assert!(serde_json::from_str::<Mapping>(bad).is_err());
    }

    #[test]
    fn detection_json_parses_valid_entries() {
        let raw = r#"{
            "Place": {
                "type": "column",
                "column": {"id": "a", "header": "b", "column_idx": 0},
                "place_property": {"dcid": "countryAlpha3Code", "display_name": "Alpha 3 Code"},
                "place_type": {"dcid": "Country", "display_name": "Country"},
                "headers": null
            },
            "Date": {
                "type": "column",
                "column": {"id": "d_202", "header": "d", "column_idx": 202},
                "place_property": null,
                "place_type": null,
                "headers": null
            }
        }"#;
        let got = parse_detected_json(raw).unwrap();
        assert_eq!(
            got.get(MappedThing::Place),
            Some(&MappingVal::place_column(
                Column::new("a", "b", 0),
                PlaceType::Country,
                PlaceProperty::CountryAlpha3Code,
            ))
        );
        assert_eq!(
            got.get(MappedThing::Date),
            Some(&MappingVal::column(Column::new("d_202", "d", 202)))
        );
    }

    #[test]
    fn detection_json_drops_invalid_entries_and_keeps_the_rest() {
        // Place has a null column; Date is fine.
        let raw = r#"{
            "Place": {
                "type": "column",
                "column": null,
                "place_property": {"dcid": "countryAlpha3Code", "display_name": "x"},
                "place_type": {"dcid": "Country", "display_name": "x"}
            },
            "Date": {
                "type": "column",
                "column": {"id": "d", "header": "d", "column_idx": 2}
            },
            "Bogus": {"type": "column", "column": {"id": "a", "header": "a", "column_idx": 0}}
        }"#;
        let got = parse_detected_json(raw).unwrap();
        assert_eq!(got.len(), 1);
        assert!(got.get(MappedThing::Place).is_none());
        assert!(got.get(MappedThing::Date).is_some());
    }

    #[test]
    fn detection_json_rejects_bad_shapes_per_entry() {
        // headers must be an array; type must be known; column fields must
        // all be present.
        let raw = r#"{
            "Date": {
                "type": "columnHeader",
                "headers": {"id": "d", "header": "d", "column_idx": 2}
            },
            "Unit": {"type": "random"},
            "StatVar": {
                "type": "column",
                "column": {"random": "a", "header": "b", "column_idx": 0}
            }
        }"#;
        let got = parse_detected_json(raw).unwrap();
        assert!(got.is_empty());
    }

    #[test]
    fn detection_json_requires_an_object() {
        assert!(parse_detected_json("[1, 2]").is_err());
        assert!(parse_detected_json("not json").is_err());
    }
}
