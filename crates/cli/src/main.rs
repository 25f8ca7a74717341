use clap::error::ErrorKind;
use clap::Parser;
use ferrous_qtype_application::ports::{lock_sink, RecordSink};
use ferrous_qtype_application::use_cases::{ResolveQueryTypesUseCase, TransformStats};
use ferrous_qtype_infrastructure::io::{open_query_file, TsvSink};
use std::io::{self, BufWriter, Stderr, Stdout};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::{Arc, Mutex};
use tracing::{debug, error, info, warn};

mod bootstrap;

const EXIT_FAILURE: u8 = 1;
const EXIT_INTERRUPTED: u8 = 130;

const USAGE: &str = "Usage: ferrous-qtype <input_file>

Parse DNS query types from numeric to TYPE format.

Input format:  domain qtype
Output format: domain TYPE";

type StdioSink = Arc<Mutex<TsvSink<BufWriter<Stdout>, Stderr>>>;

#[derive(Parser)]
#[command(name = "ferrous-qtype")]
#[command(version)]
#[command(about = "Parse DNS query types from numeric to TYPE format")]
struct Cli {
    /// Query file, one `domain qtype` pair per line
    #[arg(value_name = "INPUT_FILE")]
    input_file: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(_) => {
            eprintln!("{}", USAGE);
            return ExitCode::from(EXIT_FAILURE);
        }
    };

    bootstrap::init_logging(cli.log_level.as_deref());
    info!("Starting ferrous-qtype v{}", env!("CARGO_PKG_VERSION"));

    let sink: StdioSink = Arc::new(Mutex::new(TsvSink::new(
        BufWriter::new(io::stdout()),
        io::stderr(),
    )));

    let input_file = cli.input_file;
    let batch_sink = Arc::clone(&sink);
    let batch = tokio::task::spawn_blocking(move || resolve_file(&input_file, batch_sink));

    tokio::select! {
        joined = batch => match joined {
            Ok(Ok(stats)) => {
                debug!(written = stats.written, invalid = stats.invalid, "Batch complete");
                ExitCode::SUCCESS
            }
            Ok(Err(e)) => {
                eprintln!("Error: {}", e);
                ExitCode::from(EXIT_FAILURE)
            }
            Err(e) => {
                error!(error = %e, "Batch task failed");
                ExitCode::from(EXIT_FAILURE)
            }
        },
        Ok(()) = tokio::signal::ctrl_c() => {
            info!("Interrupted");
            // Holding the lock until exit keeps the batch from writing past
            // the flushed records. The blocking reader itself cannot be
            // cancelled, so the runtime is not drained.
            let mut guard = lock_sink(&sink);
            if let Err(e) = guard.flush() {
                warn!(error = %e, "Failed to flush output on interrupt");
            }
            std::process::exit(i32::from(EXIT_INTERRUPTED))
        }
    }
}

fn resolve_file(path: &Path, mut sink: StdioSink) -> anyhow::Result<TransformStats> {
    let reader = open_query_file(path)?;
    let stats = ResolveQueryTypesUseCase::new().execute(reader, &mut sink)?;
    Ok(stats)
}
