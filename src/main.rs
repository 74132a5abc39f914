// Calculon: terminal calculator backed by a remote evaluation service

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use calculon::config::{Config, Overrides};
use calculon::effects::{Calculator, HttpEvaluator, SessionEnv};
use calculon::storage::{FileStore, InMemoryStore, Store};
use calculon::logging;
use calculon::ui::{terminal, App};
use clap::Parser;
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::runtime::Runtime;
use tracing::{info, warn};

/// Interactive calculator; expressions are evaluated by a remote service.
#[derive(Debug, Parser)]
#[command(name = "calculon", version, about)]
struct Cli {
    /// Config file (default: <config dir>/calculon/config.toml, if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Base URL of the evaluation service
    #[arg(long, env = "CALCULON_SERVICE_URL")]
    service_url: Option<String>,

    /// Directory for persisted history, memory and the log file
    #[arg(long, env = "CALCULON_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Tracing filter directive, e.g. "calculon=debug"
    #[arg(long)]
    log_filter: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config.with_overrides(Overrides {
            service_url: cli.service_url,
            data_dir: cli.data_dir,
            log_filter: cli.log_filter,
        }),
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::from(2);
        }
    };
    if let Err(e) = config.check() {
        eprintln!("Error: {e}");
        return ExitCode::from(2);
    }

    if let Err(e) = logging::init(&config.log_file(), &config.log_filter) {
        eprintln!("Warning: logging disabled: {e}");
    }
    info!(service_url = %config.service_url, data_dir = %config.data_dir.display(), "starting");

    let result = match FileStore::open(&config.data_dir) {
        Ok(store) => run(&config, store),
        Err(e) => {
            warn!(error = %e, "history and memory will not persist");
            eprintln!("Warning: {e}; history and memory will not be saved");
            run(&config, InMemoryStore::new())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run<St: Store>(config: &Config, store: St) -> io::Result<()> {
    let runtime = Runtime::new()?;
    let evaluator = HttpEvaluator::new(&config.service_url, config.request_timeout())
        .map_err(io::Error::other)?;
    let calculator = Calculator::load(store, config.notice_timings());
    let mut app = App::new(calculator, SessionEnv::new(evaluator), runtime.handle().clone());

    let guard = terminal::enter()?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);
    drop(guard);

    info!("exiting");
    res
}
