use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::{info, info_span};

use acervo_cli::pipeline::{
    submission_exit_code, validate_file, validate_files, validation_exit_code, write_template,
};
use acervo_cli::report::{
    ValidationOutput, render_rejection, render_schema, render_submission, render_validation,
};
use acervo_model::RecordKind;

use crate::cli::{OutputFormatArg, SubmissionArgs, TemplateArgs, ValidateArgs};

/// Validates one file and prints the outcome. Returns the process exit code.
pub fn run_validate(args: &ValidateArgs) -> Result<i32> {
    let source = args.file.display().to_string();
    let span = info_span!("validate", kind = %args.kind, file = %source);
    let _guard = span.enter();

    let outcome = validate_file(args.kind, &args.file, &args.reader.options())?;
    match args.format {
        OutputFormatArg::Json => {
            let output = ValidationOutput::new(args.kind, &outcome);
            println!(
                "{}",
                serde_json::to_string_pretty(&output).context("serialize validation output")?
            );
        }
        OutputFormatArg::Table => match &outcome {
            Ok(result) => print!("{}", render_validation(args.kind, &source, result)),
            Err(error) => print!("{}", render_rejection(args.kind, &source, error)),
        },
    }
    Ok(validation_exit_code(&outcome))
}

pub fn run_submission(args: &SubmissionArgs) -> Result<i32> {
    let files = args.files();
    if files.is_empty() {
        bail!("attach at least one sheet (--museological, --bibliographic or --archival)");
    }
    let span = info_span!("submission", sheets = files.len());
    let _guard = span.enter();

    let files: Vec<(RecordKind, &Path)> = files
        .iter()
        .map(|(kind, path)| (*kind, path.as_path()))
        .collect();
    let report = validate_files(&files, &args.reader.options())?;
    match args.format {
        OutputFormatArg::Json => println!(
            "{}",
            serde_json::to_string_pretty(&report.summaries())
                .context("serialize submission summary")?
        ),
        OutputFormatArg::Table => print!("{}", render_submission(&report)),
    }
    Ok(submission_exit_code(&report))
}

pub fn run_schema(kind: Option<RecordKind>) {
    let kinds = kind.map_or_else(|| RecordKind::ALL.to_vec(), |kind| vec![kind]);
    for kind in kinds {
        println!("{}", render_schema(kind));
    }
}

pub fn run_template(args: &TemplateArgs) -> Result<()> {
    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("create {}", path.display()))?;
            write_template(args.kind, BufWriter::new(file))?;
            info!(kind = %args.kind, path = %path.display(), "template written");
        }
        None => write_template(args.kind, io::stdout().lock())?,
    }
    Ok(())
}
