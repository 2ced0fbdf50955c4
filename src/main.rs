use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use domcheck::{Error, Result, Summary};

#[derive(Parser)]
#[command(name = "domcheck")]
#[command(about = "Check domains against a blocklist", long_about = None)]
struct Args {
    /// Input file (blocklist section then query section); stdin if omitted
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output file for verdicts; stdout if omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })
}

fn create(path: &Path) -> Result<File> {
    File::create(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })
}

fn run(args: &Args) -> Result<Summary> {
    let mut input: Box<dyn BufRead> = match &args.input {
        Some(path) => Box::new(BufReader::new(open(path)?)),
        None => Box::new(io::stdin().lock()),
    };
    let mut output: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(create(path)?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    domcheck::run(&mut input, &mut output)
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(summary) => summary.log(),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn args(input: Option<PathBuf>, output: Option<PathBuf>) -> Args {
        Args {
            input,
            output,
            verbose: false,
        }
    }

    #[test]
    fn run_reads_and_writes_files() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.txt");
        let output = dir.path().join("out.txt");
        fs::write(&input, "2\ngdz.ru\ncom\n3\nm.gdz.ru\naaa.aa\naaa.com\n").unwrap();

        let summary = run(&args(Some(input), Some(output.clone()))).unwrap();

        assert_eq!(fs::read_to_string(&output).unwrap(), "Bad\nGood\nBad\n");
        assert_eq!(summary.forbidden, 2);
        assert_eq!(summary.allowed, 1);
    }

    #[test]
    fn run_reports_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("missing.txt");
        let output = dir.path().join("out.txt");

        let err = run(&args(Some(input), Some(output))).unwrap_err();

        assert!(matches!(err, Error::Open { .. }), "got: {}", err);
    }
}
