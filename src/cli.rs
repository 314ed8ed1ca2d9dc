use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about = "Map tabular statistical data onto knowledge-graph observations", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Detect place and date columns and write a predicted mapping
    Detect(DetectArgs),
    /// Check a mapping file against the structural rules
    Check(CheckArgs),
    /// Expand a mapping over the file and print the resulting observations
    Preview(PreviewArgs),
    /// Compile a mapping into a template document plus packaging artifacts
    Generate(GenerateArgs),
}

#[derive(Debug, Args)]
pub struct DetectArgs {
    /// Input CSV file to inspect
    #[arg(short = 'i', long = "input")]
    pub input: PathBuf,
    /// Destination mapping file (stdout if omitted)
    #[arg(short = 'o', long = "mapping")]
    pub mapping: Option<PathBuf>,
    /// CSV delimiter character (supports ',', 'tab', ';', '|')
    #[arg(long, value_parser = parse_delimiter)]
    pub delimiter: Option<u8>,
    /// Character encoding of the input file (defaults to utf-8)
    #[arg(long = "input-encoding")]
    pub input_encoding: Option<String>,
}

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Mapping file to validate
    #[arg(short = 'm', long = "mapping")]
    pub mapping: PathBuf,
}

#[derive(Debug, Args)]
pub struct PreviewArgs {
    /// Input CSV file
    #[arg(short = 'i', long = "input")]
    pub input: PathBuf,
    /// Mapping file describing the columns
    #[arg(short = 'm', long = "mapping")]
    pub mapping: PathBuf,
    /// JSON object of cell-value replacements applied before expansion
    #[arg(long = "value-map")]
    pub value_map: Option<PathBuf>,
    /// Limit number of rows previewed
    #[arg(long)]
    pub limit: Option<usize>,
    /// CSV delimiter character (supports ',', 'tab', ';', '|')
    #[arg(long, value_parser = parse_delimiter)]
    pub delimiter: Option<u8>,
    /// Character encoding of the input file (defaults to utf-8)
    #[arg(long = "input-encoding")]
    pub input_encoding: Option<String>,
}

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Input CSV file
    #[arg(short = 'i', long = "input")]
    pub input: PathBuf,
    /// Mapping file describing the columns
    #[arg(short = 'm', long = "mapping")]
    pub mapping: PathBuf,
    /// Output template file (stdout if omitted)
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,
    /// Predicted mapping file, for the translation metadata diff
    #[arg(long = "predictions")]
    pub predictions: Option<PathBuf>,
    /// Destination for the translation metadata JSON
    #[arg(long = "metadata-out")]
    pub metadata_out: Option<PathBuf>,
    /// Destination for the cleaned CSV copy (written only when needed)
    #[arg(long = "csv-out")]
    pub csv_out: Option<PathBuf>,
    /// JSON object of cell-value replacements applied to the cleaned CSV
    #[arg(long = "value-map")]
    pub value_map: Option<PathBuf>,
    /// CSV delimiter character (supports ',', 'tab', ';', '|')
    #[arg(long, value_parser = parse_delimiter)]
    pub delimiter: Option<u8>,
    /// Character encoding of the input file (defaults to utf-8)
    #[arg(long = "input-encoding")]
    pub input_encoding: Option<String>,
    /// Character encoding for the cleaned CSV (defaults to utf-8)
    #[arg(long = "output-encoding")]
    pub output_encoding: Option<String>,
}

pub fn parse_delimiter(value: &str) -> Result<u8, String> {
    match value {
        "tab" | "\t" => Ok(b'\t'),
        "comma" | "," => Ok(b','),
        "|" | "pipe" => Ok(b'|'),
        ";" | "semicolon" => Ok(b';'),
        other => {
            let mut chars = other.chars();
            let first = chars
                .next()
                .ok_or_else(|| "Delimiter cannot be empty".to_string())?;
            if chars.next().is_some() {
                return Err("Delimiter must be a single character".to_string());
            }
            if !first.is_ascii() {
                return Err("Delimiter must be ASCII".to_string());
            }
            Ok(first as u8)
        }
    }
}
