//! CLI runners shared by the `build_annotated_data` and
//! `build_evaluation_data` binaries.
//!
//! The runners take an argument iterator instead of touching
//! `std::env` directly so tests can drive them end to end.

use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, error::ErrorKind};

use crate::constants::splits::{DEFAULT_RATIOS_ARG, DEFAULT_SEED};
use crate::evaluation::build_evaluation_data;
use crate::merge::build_annotated_data;
use crate::splits::{DocumentSplitter, SplitRatios};

#[derive(Debug, Parser)]
#[command(
    name = "build_annotated_data",
    disable_help_subcommand = true,
    about = "Join annotation rows with master sentence text",
    long_about = "Join the annotation table with the master-data table on \
                  (doc_id, stock_code, sentence_id) and write the combined \
                  annotated-data table."
)]
struct BuildAnnotatedDataCli {
    #[arg(value_name = "ANNOTATION", help = "Path to annotation.tsv")]
    annotation: PathBuf,
    #[arg(value_name = "MASTER_DATA", help = "Path to master_data.csv")]
    master_data: PathBuf,
    #[arg(value_name = "OUT", help = "Path to the annotated-data output table")]
    out: PathBuf,
}

#[derive(Debug, Parser)]
#[command(
    name = "build_evaluation_data",
    disable_help_subcommand = true,
    about = "Partition annotated data into train/dev/test JSONL files",
    long_about = "Normalize the annotated-data table and partition it by \
                  document into train/dev/test JSON-Lines files using a \
                  seeded deterministic policy."
)]
struct BuildEvaluationDataCli {
    #[arg(value_name = "ANNOTATED_DATA", help = "Path to annotated_data.tsv")]
    annotated_data: PathBuf,
    #[arg(value_name = "MASTER_DATA", help = "Path to master_data.csv")]
    master_data: PathBuf,
    #[arg(value_name = "OUT_DIR", help = "Output directory for the split files")]
    out_dir: PathBuf,
    #[arg(
        long,
        default_value_t = DEFAULT_SEED,
        help = "Deterministic seed used for split allocation"
    )]
    seed: u64,
    #[arg(
        long = "split-ratios",
        value_name = "TRAIN,DEV,TEST",
        value_parser = parse_split_ratios_arg,
        default_value = DEFAULT_RATIOS_ARG,
        help = "Comma-separated split ratios that must sum to 1.0"
    )]
    split: SplitRatios,
}

/// Run the annotation merger. Arguments are everything after the
/// program name.
pub fn run_build_annotated_data<I>(args_iter: I) -> Result<(), Box<dyn Error>>
where
    I: Iterator<Item = String>,
{
    init_tracing();
    let Some(cli) = parse_cli::<BuildAnnotatedDataCli, _>(
        std::iter::once("build_annotated_data".to_string()).chain(args_iter),
    )?
    else {
        return Ok(());
    };

    let rows = build_annotated_data(&cli.annotation, &cli.master_data, &cli.out)?;
    println!("wrote {rows} annotated rows to {}", cli.out.display());
    Ok(())
}

/// Run the dataset splitter. Arguments are everything after the
/// program name.
pub fn run_build_evaluation_data<I>(args_iter: I) -> Result<(), Box<dyn Error>>
where
    I: Iterator<Item = String>,
{
    init_tracing();
    let Some(cli) = parse_cli::<BuildEvaluationDataCli, _>(
        std::iter::once("build_evaluation_data".to_string()).chain(args_iter),
    )?
    else {
        return Ok(());
    };

    let splitter = DocumentSplitter::new(cli.split, cli.seed)?;
    let written =
        build_evaluation_data(&cli.annotated_data, &cli.master_data, &cli.out_dir, &splitter)?;
    for (split, count) in &written {
        println!(
            "wrote {count} records to {}",
            cli.out_dir.join(split.filename()).display()
        );
    }
    Ok(())
}

/// Parse a CLI, treating help/version output as a successful no-op.
fn parse_cli<T, I>(args: I) -> Result<Option<T>, Box<dyn Error>>
where
    T: Parser,
    I: Iterator<Item = String>,
{
    match T::try_parse_from(args) {
        Ok(cli) => Ok(Some(cli)),
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.print()?;
            Ok(None)
        }
        Err(err) => Err(Box::new(err)),
    }
}

fn parse_split_ratios_arg(raw: &str) -> Result<SplitRatios, String> {
    let parts: Vec<&str> = raw.split(',').collect();
    if parts.len() != 3 {
        return Err("expected three comma-separated ratios: TRAIN,DEV,TEST".to_string());
    }
    let parse = |part: &str| {
        part.trim()
            .parse::<f32>()
            .map_err(|err| format!("invalid ratio '{part}': {err}"))
    };
    let ratios = SplitRatios {
        train: parse(parts[0])?,
        dev: parse(parts[1])?,
        test: parse(parts[2])?,
    };
    ratios.normalized().map_err(|err| err.to_string())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_ratios_arg_parses_valid_triples() {
        let ratios = parse_split_ratios_arg("0.8,0.1,0.1").unwrap();
        assert!((ratios.train - 0.8).abs() < 1e-6);
        assert!((ratios.dev - 0.1).abs() < 1e-6);
        assert!((ratios.test - 0.1).abs() < 1e-6);
    }

    #[test]
    fn split_ratios_arg_rejects_bad_shapes_and_sums() {
        assert!(parse_split_ratios_arg("0.8,0.2").is_err());
        assert!(parse_split_ratios_arg("0.8,0.1,abc").is_err());
        assert!(parse_split_ratios_arg("0.8,0.3,0.3").is_err());
    }

    #[test]
    fn help_request_is_a_successful_no_op() {
        let args = ["--help".to_string()].into_iter();
        let parsed = parse_cli::<BuildAnnotatedDataCli, _>(
            std::iter::once("build_annotated_data".to_string()).chain(args),
        )
        .unwrap();
        assert!(parsed.is_none());
    }

    #[test]
    fn missing_positional_arguments_are_an_error() {
        let parsed = parse_cli::<BuildAnnotatedDataCli, _>(
            std::iter::once("build_annotated_data".to_string()),
        );
        assert!(parsed.is_err());
    }
}
