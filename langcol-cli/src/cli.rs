//! Argument surface and top-level execution

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use langcol_core::Detector;

use crate::annotate::annotate_table;
use crate::input::load_table;
use crate::output::{resolve_output_path, write_table};
use crate::progress::ProgressReporter;

/// Detect the language of one CSV column and append the result
#[derive(Debug, Parser)]
#[command(
    name = "langcol",
    version,
    about = "Append a detected ISO 639-1 language column to a CSV file",
    long_about = "Reads a CSV file, classifies the text in one column with the lingua \
                  language-identification engine, and appends the detected ISO 639-1 \
                  code as a new `language` column. Rows where no language is \
                  confidently detected get `NA`; rows where classification fails get \
                  `ERROR`.\n\nWithout --output_file the input file is overwritten in \
                  place when its path ends in `.csv`; otherwise `.csv` is appended to \
                  the input path and the original is left untouched."
)]
pub struct Cli {
    /// Path to the input CSV file
    #[arg(value_name = "INPUT_FILE")]
    pub input_file: PathBuf,

    /// Output CSV path (default: overwrite the input, see long help)
    #[arg(long = "output_file", value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    /// Column number (starting from 1) containing the text to classify
    #[arg(long = "text_column", value_name = "N", default_value_t = 2)]
    pub text_column: usize,

    /// Treat the first line of the input as a header row
    #[arg(long = "has_header")]
    pub has_header: bool,

    /// Classify rows on a thread pool instead of sequentially
    #[arg(short, long)]
    pub parallel: bool,

    /// Worker thread count for --parallel (default: all cores)
    #[arg(long, value_name = "N")]
    pub threads: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Run the load → classify → write pipeline
    pub fn execute(&self) -> Result<()> {
        self.init_logging()?;

        log::info!("Loading {}", self.input_file.display());
        let mut table = load_table(&self.input_file, self.has_header)?;

        if self.parallel {
            let threads = self.threads.unwrap_or_else(num_cpus::get);
            rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build_global()
                .context("Failed to configure worker thread pool")?;
            log::info!("Classifying rows on {threads} threads");
        }

        let detector = Detector::with_lingua();
        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_rows(table.row_count() as u64);

        annotate_table(
            &mut table,
            self.text_column,
            &detector,
            self.parallel,
            &progress,
        )?;
        progress.finish();

        let output_path = resolve_output_path(&self.input_file, self.output_file.clone());
        log::info!("Writing {}", output_path.display());
        write_table(&table, &output_path)?;

        Ok(())
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .init();

        Ok(())
    }
}
