//! Packaging artifacts that accompany the template document.
//!
//! Downstream loaders receive three files: the template, a translation
//! metadata summary (predicted mapping vs. the user-corrected one), and a
//! cleaned copy of the CSV. The cleaned copy is only produced when it would
//! differ from the original, i.e. when a column id diverges from its header
//! or a value remap is in effect.

use std::path::Path;

use anyhow::{Context, Result};
use encoding_rs::Encoding;
use serde::Serialize;

use crate::io_utils::{decode_record, open_csv_reader_from_path, open_csv_writer};
use crate::mapping::Mapping;
use crate::observation::ValueMap;
use crate::table::TabularDataset;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TranslationMetadata<'a> {
    predictions: &'a Mapping,
    corrected_mapping: &'a Mapping,
}

/// Serializes the predicted and corrected mappings side by side so a reader
/// of the packaged artifacts can see what the heuristics got wrong.
pub fn generate_translation_metadata_json(
    predictions: &Mapping,
    corrected_mapping: &Mapping,
) -> Result<String> {
    serde_json::to_string(&TranslationMetadata {
        predictions,
        corrected_mapping,
    })
    .context("Serializing translation metadata")
}

/// A cleaned CSV is needed when any column id (original or corrected)
/// differs from its header, or when cell values are being remapped.
pub fn should_generate_csv(
    original: &TabularDataset,
    corrected: &TabularDataset,
    value_map: &ValueMap,
) -> bool {
    if !value_map.is_empty() {
        return true;
    }
    original
        .ordered_columns
        .iter()
        .chain(corrected.ordered_columns.iter())
        .any(|column| column.id != column.header)
}

/// Rewrites the input CSV with column ids as the header row and the value
/// map applied to every cell (exact match, whole cell). Row order and cell
/// layout are otherwise untouched.
pub fn generate_csv(
    dataset: &TabularDataset,
    input: &Path,
    output: Option<&Path>,
    value_map: &ValueMap,
    input_delimiter: u8,
    output_delimiter: u8,
    encoding: &'static Encoding,
) -> Result<()> {
    let mut reader = open_csv_reader_from_path(input, input_delimiter)?;
    let mut writer = open_csv_writer(output, output_delimiter, encoding)?;

    let ids: Vec<&str> = dataset
        .ordered_columns
        .iter()
        .map(|column| column.id.as_str())
        .collect();
    writer.write_record(&ids).context("Writing header row")?;

    // Consume the original header row before copying data rows.
    reader.byte_headers().context("Reading header row")?;
    let mut record = csv::ByteRecord::new();
    while reader.read_byte_record(&mut record)? {
        let cells = decode_record(&record, encoding)?;
        let rewritten: Vec<&str> = cells
            .iter()
            .map(|cell| value_map.get(cell).unwrap_or(cell).as_str())
            .collect();
        writer.write_record(&rewritten).context("Writing data row")?;
    }
    writer.flush().context("Flushing cleaned CSV")?;
    Ok(())
}
