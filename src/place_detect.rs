//! Heuristic place detection for a single column.
//!
//! A [`PlaceDetector`] is built once per process from the static tables in
//! `place_data` and is immutable afterwards, so one instance can be shared
//! across any number of `detect` calls. Detection runs two passes: a
//! high-confidence pass that tallies how many sampled values land in each
//! known code/name set, and a low-confidence fallback that only looks at the
//! column header.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::place_data::{COUNTRIES, REGIONS};

/// Fraction of non-empty values that must match one property set before the
/// high-confidence pass declares that property detected.
pub const MIN_HIGH_CONF_DETECT: f64 = 0.4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Confidence {
    Low,
    High,
}

/// Place types the detector can name. Only `Country` and `State` are
/// detectable with high confidence; the rest come from header hints alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PlaceType {
    GeoCoordinates,
    Country,
    State,
    Province,
    Municipality,
    County,
    City,
}

impl PlaceType {
    pub fn display_name(&self) -> &'static str {
        match self {
            PlaceType::GeoCoordinates => "Geo Coordinates",
            PlaceType::Country => "Country",
            PlaceType::State => "State",
            PlaceType::Province => "Province",
            PlaceType::Municipality => "Municipality",
            PlaceType::County => "County",
            PlaceType::City => "City",
        }
    }

    /// Knowledge-graph node identifier for this type.
    pub fn dcid(&self) -> &'static str {
        match self {
            PlaceType::GeoCoordinates => "GeoCoordinates",
            PlaceType::Country => "Country",
            PlaceType::State => "State",
            PlaceType::Province => "Province",
            PlaceType::Municipality => "Municipality",
            PlaceType::County => "County",
            PlaceType::City => "City",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PlaceProperty {
    Name,
    Longitude,
    Latitude,
    IsoCode,
    CountryAlpha3Code,
    CountryNumericCode,
    Fips52AlphaCode,
    GeoId,
}

impl PlaceProperty {
    pub fn display_name(&self) -> &'static str {
        match self {
            PlaceProperty::Name => "Name",
            PlaceProperty::Longitude => "Longitude",
            PlaceProperty::Latitude => "Latitude",
            PlaceProperty::IsoCode => "ISO Code",
            PlaceProperty::CountryAlpha3Code => "Alpha 3 Code",
            PlaceProperty::CountryNumericCode => "Numeric Code",
            PlaceProperty::Fips52AlphaCode => "US State Alpha Code",
            PlaceProperty::GeoId => "FIPS Code",
        }
    }

    /// Knowledge-graph property identifier.
    pub fn dcid(&self) -> &'static str {
        match self {
            PlaceProperty::Name => "name",
            PlaceProperty::Longitude => "longitude",
            PlaceProperty::Latitude => "latitude",
            PlaceProperty::IsoCode => "isoCode",
            PlaceProperty::CountryAlpha3Code => "countryAlpha3Code",
            PlaceProperty::CountryNumericCode => "countryNumericCode",
            PlaceProperty::Fips52AlphaCode => "fips52AlphaCode",
            PlaceProperty::GeoId => "geoId",
        }
    }

    /// Identifier properties resolve a place node directly, so columns
    /// carrying them can be referenced from an observation without a
    /// standalone place node. Only free-text names need one.
    pub fn is_identifier(&self) -> bool {
        !matches!(self, PlaceProperty::Name)
    }
}

/// A place type plus, for high-confidence detections, the property whose
/// value set the column matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeProperty {
    pub place_type: PlaceType,
    pub place_property: Option<PlaceProperty>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetectedDetails {
    pub type_property: TypeProperty,
    pub confidence: Confidence,
}

/// Header hints for the low-confidence pass, keyed by the alphanumeric
/// lowercase form of the header.
const HEADER_HINTS: &[(&str, PlaceType)] = &[
    ("longitude", PlaceType::GeoCoordinates),
    ("latitude", PlaceType::GeoCoordinates),
    ("latlon", PlaceType::GeoCoordinates),
    ("geocoordinates", PlaceType::GeoCoordinates),
    ("country", PlaceType::Country),
    ("state", PlaceType::State),
    ("province", PlaceType::Province),
    ("municipality", PlaceType::Municipality),
    ("county", PlaceType::County),
    ("city", PlaceType::City),
];

/// Lowercases and strips everything but ASCII alphanumerics.
pub fn to_alphanumeric_lower(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_ascii_lowercase()
}

/// Both the canonical form and the zero-stripped form of a numeric code, so
/// "036" and "36" land in the same set.
fn numeric_forms(code: &str) -> impl Iterator<Item = String> {
    let canonical = code.to_string();
    let stripped = code.trim_start_matches('0').to_string();
    let stripped = if stripped.is_empty() || stripped == canonical {
        None
    } else {
        Some(stripped)
    };
    std::iter::once(canonical).chain(stripped)
}

#[derive(Debug)]
pub struct PlaceDetector {
    country_names: HashSet<String>,
    country_iso: HashSet<String>,
    country_alpha_3: HashSet<String>,
    country_numeric: HashSet<String>,

    state_names: HashSet<String>,
    /// Full ISO codes like "us-ny", matched against the raw lowercased value
    /// so the dash survives.
    state_iso: HashSet<String>,
    state_fips_alpha: HashSet<String>,
    state_fips_code: HashSet<String>,

    header_hints: HashMap<&'static str, PlaceType>,
}

impl PlaceDetector {
    pub fn new() -> Self {
        let mut det = PlaceDetector {
            country_names: HashSet::new(),
            country_iso: HashSet::new(),
            country_alpha_3: HashSet::new(),
            country_numeric: HashSet::new(),
            state_names: HashSet::new(),
            state_iso: HashSet::new(),
            state_fips_alpha: HashSet::new(),
            state_fips_code: HashSet::new(),
            header_hints: HEADER_HINTS.iter().copied().collect(),
        };
        for &(name, iso, alpha_3, numeric) in COUNTRIES {
            det.country_names.insert(to_alphanumeric_lower(name));
            if !iso.is_empty() {
                det.country_iso.insert(to_alphanumeric_lower(iso));
            }
            if !alpha_3.is_empty() {
                det.country_alpha_3.insert(to_alphanumeric_lower(alpha_3));
            }
            if !numeric.is_empty() {
                det.country_numeric.extend(numeric_forms(numeric));
            }
        }
        for &(name, iso, fips_alpha, fips_code) in REGIONS {
            det.state_names.insert(to_alphanumeric_lower(name));
            if !iso.is_empty() {
                det.state_iso.insert(iso.to_ascii_lowercase());
            }
            if !fips_alpha.is_empty() {
                det.state_fips_alpha.insert(to_alphanumeric_lower(fips_alpha));
            }
            if !fips_code.is_empty() {
                det.state_fips_code.extend(numeric_forms(fips_code));
            }
        }
        det
    }

    /// The type/property combinations the high-confidence pass can produce.
    pub fn supported_type_properties(&self) -> Vec<TypeProperty> {
        let country = [
            PlaceProperty::Name,
            PlaceProperty::IsoCode,
            PlaceProperty::CountryAlpha3Code,
            PlaceProperty::CountryNumericCode,
        ];
        let state = [
            PlaceProperty::Name,
            PlaceProperty::IsoCode,
            PlaceProperty::Fips52AlphaCode,
            PlaceProperty::GeoId,
        ];
        country
            .iter()
            .map(|&p| (PlaceType::Country, p))
            .chain(state.iter().map(|&p| (PlaceType::State, p)))
            .map(|(place_type, place_property)| TypeProperty {
                place_type,
                place_property: Some(place_property),
            })
            .collect()
    }

    fn detect_country_high_conf(&self, values: &[String]) -> Option<TypeProperty> {
        let mut num_valid = 0usize;
        // Property order doubles as the tie-break order below.
        let mut counters = [
            (PlaceProperty::Name, 0usize),
            (PlaceProperty::IsoCode, 0),
            (PlaceProperty::CountryAlpha3Code, 0),
            (PlaceProperty::CountryNumericCode, 0),
        ];
        for value in values {
            if value.is_empty() {
                continue;
            }
            let v = to_alphanumeric_lower(value);
            num_valid += 1;
            if self.country_names.contains(&v) {
                counters[0].1 += 1;
            } else if self.country_iso.contains(&v) {
                counters[1].1 += 1;
            } else if self.country_alpha_3.contains(&v) {
                counters[2].1 += 1;
            } else if self.country_numeric.contains(&v) {
                counters[3].1 += 1;
            }
        }
        pick_detected(PlaceType::Country, &counters, num_valid)
    }

    fn detect_state_high_conf(&self, values: &[String]) -> Option<TypeProperty> {
        let mut num_valid = 0usize;
        let mut counters = [
            (PlaceProperty::Name, 0usize),
            (PlaceProperty::IsoCode, 0),
            (PlaceProperty::Fips52AlphaCode, 0),
            (PlaceProperty::GeoId, 0),
        ];
        for value in values {
            if value.is_empty() {
                continue;
            }
            let v = to_alphanumeric_lower(value);
            num_valid += 1;
            if self.state_names.contains(&v) {
                counters[0].1 += 1;
            } else if self.state_iso.contains(&value.to_ascii_lowercase()) {
                counters[1].1 += 1;
            } else if self.state_fips_alpha.contains(&v) {
                counters[2].1 += 1;
            } else if self.state_fips_code.contains(&v) {
                counters[3].1 += 1;
            }
        }
        pick_detected(PlaceType::State, &counters, num_valid)
    }

    /// High-confidence pass over a column's sampled values. A 2- or 3-digit
    /// numeric column can satisfy both the country numeric set and the US
    /// state FIPS set; the header substring check is the only disambiguator,
    /// and country wins when the header names neither kind.
    fn detect_high_confidence(&self, header: &str, values: &[String]) -> Option<TypeProperty> {
        let header_norm = to_alphanumeric_lower(header);

        let country = self.detect_country_high_conf(values);
        if country.is_some() && header_norm.contains("country") {
            return country;
        }
        let state = self.detect_state_high_conf(values);
        if state.is_some() && header_norm.contains("state") {
            return state;
        }
        country.or(state)
    }

    /// Low-confidence pass: header lookup only, type with no property.
    fn detect_low_confidence(&self, header: &str) -> Option<TypeProperty> {
        let header_norm = to_alphanumeric_lower(header);
        self.header_hints
            .get(header_norm.as_str())
            .map(|&place_type| TypeProperty {
                place_type,
                place_property: None,
            })
    }

    /// Classifies one column as a place, or `None`. A detection miss is not
    /// an error; the mapping is simply left incomplete for the user.
    pub fn detect(&self, header: &str, values: &[String]) -> Option<DetectedDetails> {
        if let Some(type_property) = self.detect_high_confidence(header, values) {
            return Some(DetectedDetails {
                type_property,
                confidence: Confidence::High,
            });
        }
        self.detect_low_confidence(header)
            .map(|type_property| DetectedDetails {
                type_property,
                confidence: Confidence::Low,
            })
    }
}

impl Default for PlaceDetector {
    fn default() -> Self {
        Self::new()
    }
}

fn pick_detected(
    place_type: PlaceType,
    counters: &[(PlaceProperty, usize)],
    num_valid: usize,
) -> Option<TypeProperty> {
    for &(property, count) in counters {
        if count as f64 > num_valid as f64 * MIN_HIGH_CONF_DETECT {
            return Some(TypeProperty {
                place_type,
                place_property: Some(property),
            });
        }
    }
    None
}
