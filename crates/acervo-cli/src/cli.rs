//! CLI argument definitions.

use std::path::PathBuf;

use acervo_ingest::{MAX_SHEET_FILE_SIZE, ReaderOptions};
use acervo_model::RecordKind;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "acervo",
    version,
    about = "Validate heritage inventory spreadsheets against the declaration templates",
    long_about = "Validate museological, bibliographic and archival inventory spreadsheets.\n\n\
                  The header row must follow the official template column for column.\n\
                  Blank mandatory cells are reported per column."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow cell values to appear in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate one spreadsheet against the template for its kind.
    Validate(ValidateArgs),

    /// Validate the spreadsheets of a declaration (one per kind, each optional).
    Submission(SubmissionArgs),

    /// Print the template columns of a record kind (all kinds when omitted).
    Schema {
        #[arg(value_name = "KIND")]
        kind: Option<RecordKind>,
    },

    /// Write a blank CSV template for a record kind.
    Template(TemplateArgs),
}

#[derive(Args)]
pub struct ValidateArgs {
    /// Spreadsheet to validate (.csv, .tsv, .xlsx, .xls, .ods).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Record kind (museological, bibliographic, archival; Portuguese names accepted).
    #[arg(long = "kind", short = 'k', value_name = "KIND")]
    pub kind: RecordKind,

    #[command(flatten)]
    pub reader: ReaderArgs,

    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Args)]
pub struct SubmissionArgs {
    /// Museological inventory spreadsheet.
    #[arg(long = "museological", value_name = "FILE")]
    pub museological: Option<PathBuf>,

    /// Bibliographic inventory spreadsheet.
    #[arg(long = "bibliographic", value_name = "FILE")]
    pub bibliographic: Option<PathBuf>,

    /// Archival inventory spreadsheet.
    #[arg(long = "archival", value_name = "FILE")]
    pub archival: Option<PathBuf>,

    #[command(flatten)]
    pub reader: ReaderArgs,

    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

impl SubmissionArgs {
    /// Attached files in submission order.
    pub fn files(&self) -> Vec<(RecordKind, PathBuf)> {
        [
            (RecordKind::Museological, &self.museological),
            (RecordKind::Bibliographic, &self.bibliographic),
            (RecordKind::Archival, &self.archival),
        ]
        .into_iter()
        .filter_map(|(kind, path)| path.clone().map(|path| (kind, path)))
        .collect()
    }
}

#[derive(Args)]
pub struct TemplateArgs {
    #[arg(long = "kind", short = 'k', value_name = "KIND")]
    pub kind: RecordKind,

    /// Output path (stdout when omitted).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Options shared by commands that read spreadsheets.
#[derive(Args, Clone)]
pub struct ReaderArgs {
    /// Worksheet to read from a workbook (default: first sheet).
    #[arg(long = "sheet", value_name = "NAME")]
    pub sheet: Option<String>,

    /// Field delimiter for CSV files.
    #[arg(long = "delimiter", value_name = "CHAR", value_parser = parse_delimiter)]
    pub delimiter: Option<u8>,

    /// Reject files larger than this many bytes.
    #[arg(long = "max-file-size", value_name = "BYTES", default_value_t = MAX_SHEET_FILE_SIZE)]
    pub max_file_size: u64,
}

impl ReaderArgs {
    pub fn options(&self) -> ReaderOptions {
        ReaderOptions::default()
            .with_max_file_size(self.max_file_size)
            .with_delimiter(self.delimiter)
            .with_sheet(self.sheet.clone())
    }
}

fn parse_delimiter(value: &str) -> Result<u8, String> {
    match value {
        "\\t" | "tab" => Ok(b'\t'),
        _ => match value.as_bytes() {
            [byte] if byte.is_ascii() => Ok(*byte),
            _ => Err(format!("delimiter must be a single ASCII character, got '{value}'")),
        },
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
