use clap::Parser;
use foresight::core::config::{self, CliOverrides, ResolvedConfig};
use foresight::core::dataset::DatasetBundle;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "foresight", about = "Terminal console for a forecasting platform demo")]
struct Args {
    /// View to open on (e.g. overview, ask, domains, diligence)
    #[arg(short, long)]
    view: Option<String>,

    /// Dataset JSON file to load instead of the built-in one
    #[arg(short, long)]
    dataset: Option<PathBuf>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Logging is not up yet, report config problems once it is
    let (file_config, config_error) = match config::load_config() {
        Ok(c) => (c, None),
        Err(e) => (Default::default(), Some(e)),
    };
    let cli = CliOverrides {
        view: args.view,
        dataset: args.dataset,
        log_level: args.log_level,
    };
    let resolved = config::resolve(&file_config, &cli);

    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    log::info!("Foresight starting up");
    if let Some(e) = config_error {
        log::warn!("Ignoring config file: {e}");
    }
    for warning in &resolved.warnings {
        log::warn!("{warning}");
    }

    let dataset = load_dataset(&resolved)?;
    foresight::tui::run(dataset, &resolved)
}

/// The configured dataset file, or the built-in one if it is unset or
/// cannot be used.
fn load_dataset(resolved: &ResolvedConfig) -> io::Result<DatasetBundle> {
    if let Some(path) = &resolved.dataset_file {
        match DatasetBundle::load(path) {
            Ok(bundle) => {
                log::info!("Loaded dataset from {}", path.display());
                return Ok(bundle);
            }
            Err(e) => log::warn!(
                "Failed to load dataset {}: {e}. Using built-in dataset",
                path.display()
            ),
        }
    }
    DatasetBundle::embedded().map_err(|e| {
        log::error!("Built-in dataset is invalid: {e}");
        io::Error::other(e.to_string())
    })
}
