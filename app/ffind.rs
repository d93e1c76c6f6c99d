//! Command-line interface for ffind.
//!
//! This binary provides access to the ffind library functionality,
//! searching a directory tree for names matching a wildcard pattern and
//! printing one line per match.

use clap::{Parser, ValueEnum, error::ErrorKind};
use ffind::{FfindBuilder, FfindOptions, FfindStream, output};
use std::path::{Path, PathBuf};
use std::process::exit;

/// ffind — recursive wildcard file search
#[derive(Parser)]
#[command(name = "ffind", version, about, long_about = None)]
struct Cli {
    /// Wildcard pattern (`*` matches any run of characters, `?` exactly one)
    pattern: String,

    /// Directory to search (default current dir)
    #[arg(default_value = ".")]
    directory: PathBuf,

    /// Search subdirectories recursively
    #[arg(short, long)]
    recursive: bool,

    /// Include directories in the results
    #[arg(short, long)]
    directories: bool,

    /// Include files in the results (on by default)
    #[arg(short, long)]
    files: bool,

    /// Case-insensitive pattern matching
    #[arg(short, long)]
    ignore_case: bool,

    /// Maximum recursion depth; a negative value resets to the default
    #[arg(short, long, default_value_t = 10, allow_hyphen_values = true)]
    max_depth: i64,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

impl From<Format> for output::OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => output::OutputFormat::Text,
            Format::Json => output::OutputFormat::Json,
        }
    }
}

impl Cli {
    fn into_options(self) -> (FfindOptions, PathBuf, Format) {
        let max_depth = if self.max_depth < 0 {
            FfindOptions::default().max_depth
        } else {
            self.max_depth as usize
        };

        // Files are always shown; -f re-asserts the default and cannot be
        // turned off from the command line.
        let _ = self.files;

        let options = FfindBuilder::new(self.pattern)
            .case_sensitive(!self.ignore_case)
            .recursive(self.recursive)
            .include_dirs(self.directories)
            .include_files(true)
            .max_depth(max_depth)
            .build();

        (options, self.directory, self.format)
    }
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Help and version go to stdout and exit 0; real parse errors
            // (missing pattern, unknown option) exit 1, not clap's 2.
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = e.print();
            exit(code);
        }
    };

    let (options, directory, format) = cli.into_options();

    if format == Format::Text {
        print_preamble(&options, &directory);
    }

    let stream = match FfindStream::new(&directory, options) {
        Ok(stream) => stream,
        Err(e) => {
            eprintln!("Error: {e}");
            exit(1);
        }
    };

    let mut had_errors = false;
    for item in stream {
        match item {
            Ok(report) => println!("{}", output::format_report(&report, format.into())),
            Err(e) => {
                eprintln!("Error: {e}");
                had_errors = true;
            }
        }
    }

    // Abandoned branches mean an incomplete listing; make that visible.
    if had_errors {
        exit(1);
    }
}

fn print_preamble(options: &FfindOptions, directory: &Path) {
    println!(
        "Searching for pattern '{}' in '{}'",
        options.pattern,
        directory.display()
    );
    if options.recursive {
        println!(
            "Recursive search enabled (max depth: {})",
            options.max_depth
        );
    }
    println!(
        "Showing: {}{}",
        if options.include_files { "files " } else { "" },
        if options.include_dirs { "directories" } else { "" }
    );
    println!("---");
}
