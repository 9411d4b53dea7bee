//! Validate command implementation for the routecheck CLI.

use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, ValueEnum};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use routecheck_core::{Document, PairingMode, Report, Validator};
use routecheck_fs::open_utf8_file;
use serde::{Deserialize, Serialize};
use std::io::{BufReader, Write};

use crate::{ARG_DOCUMENTS, ARG_FORMAT, ARG_PAIRING, CliError, ENV_DOCUMENTS};

/// Stop pairing accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum PairingArg {
    /// Check the earlier stop of each consecutive pair.
    #[default]
    Legacy,
    /// Check the later stop of each consecutive pair.
    Forward,
}

impl From<PairingArg> for PairingMode {
    fn from(arg: PairingArg) -> Self {
        match arg {
            PairingArg::Legacy => Self::Legacy,
            PairingArg::Forward => Self::Forward,
        }
    }
}

/// How failing reports are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ReportFormat {
    /// Indented `Errors for ...` lines.
    #[default]
    Text,
    /// Pretty-printed JSON, one object per failing document.
    Json,
}

/// CLI arguments for the `validate` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Validate solution documents. Each document holds an \
                 instance and a solution; every route is replayed against \
                 the instance and the claimed value is compared with the \
                 recomputed cost. Options can come from CLI flags, \
                 configuration files, or environment variables.",
    about = "Validate solution documents"
)]
#[ortho_config(prefix = "ROUTECHECK")]
pub(crate) struct ValidateArgs {
    /// Paths to JSON documents holding an instance and a solution.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) documents: Option<Vec<Utf8PathBuf>>,
    /// Which stop of each consecutive pair is checked.
    #[arg(long = ARG_PAIRING, value_enum)]
    #[serde(default)]
    pub(crate) pairing: Option<PairingArg>,
    /// Output format for failing reports.
    #[arg(long = ARG_FORMAT, value_enum)]
    #[serde(default)]
    pub(crate) format: Option<ReportFormat>,
}

impl ValidateArgs {
    pub(crate) fn into_config(self) -> Result<ValidateConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ValidateConfig::try_from(merged)
    }
}

/// Resolved `validate` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ValidateConfig {
    /// Documents in the order they are validated.
    pub(crate) documents: Vec<Utf8PathBuf>,
    /// Pairing applied to every route.
    pub(crate) pairing: PairingMode,
    /// Output format for failing reports.
    pub(crate) format: ReportFormat,
}

impl ValidateConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        for path in &self.documents {
            Self::require_existing(path, ARG_DOCUMENTS)?;
        }
        Ok(())
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match routecheck_fs::file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<ValidateArgs> for ValidateConfig {
    type Error = CliError;

    fn try_from(args: ValidateArgs) -> Result<Self, Self::Error> {
        let documents = args
            .documents
            .filter(|documents| !documents.is_empty())
            .ok_or(CliError::MissingArgument {
                field: ARG_DOCUMENTS,
                env: ENV_DOCUMENTS,
            })?;
        Ok(Self {
            documents,
            pairing: args.pairing.unwrap_or_default().into(),
            format: args.format.unwrap_or_default(),
        })
    }
}

/// JSON shape written for a failing document.
#[derive(Debug, Serialize)]
struct DocumentReport<'a> {
    document: &'a Utf8Path,
    report: &'a Report,
}

pub(super) fn run_validate(args: ValidateArgs) -> Result<(), CliError> {
    let mut stderr = std::io::stderr().lock();
    run_validate_with(args, &mut stderr)
}

pub(super) fn run_validate_with(
    args: ValidateArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = resolve_validate_config(args)?;
    let validator = Validator::new(config.pairing);
    let total = config.documents.len();
    let mut failing = 0;

    for path in &config.documents {
        let document = load_document(path)?;
        let report = validator
            .validate_document(&document)
            .map_err(|source| CliError::StructuralDefect {
                path: path.clone(),
                source,
            })?;
        if report.is_failing() {
            failing += 1;
            write_report(writer, path, &report, config.format)?;
        } else {
            log::info!("{path}: solution is feasible and correctly costed");
        }
    }

    if failing == 0 {
        Ok(())
    } else {
        Err(CliError::InvalidSolutions { failing, total })
    }
}

fn resolve_validate_config(args: ValidateArgs) -> Result<ValidateConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

/// Loads a JSON-encoded [`Document`] from disk.
pub(super) fn load_document(path: &Utf8Path) -> Result<Document, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenDocument {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseDocument {
        path: path.to_path_buf(),
        source,
    })
}

fn write_report(
    writer: &mut dyn Write,
    path: &Utf8Path,
    report: &Report,
    format: ReportFormat,
) -> Result<(), CliError> {
    let payload = match format {
        ReportFormat::Text => report.to_string(),
        ReportFormat::Json => serde_json::to_string_pretty(&DocumentReport {
            document: path,
            report,
        })
        .map_err(CliError::SerialiseReport)?,
    };
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteReport)?;
    writer.write_all(b"\n").map_err(CliError::WriteReport)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<ValidateConfig, CliError> {
    let merged = ValidateArgs::merge_from_layers(layers).map_err(CliError::from)?;
    ValidateConfig::try_from(merged)
}
