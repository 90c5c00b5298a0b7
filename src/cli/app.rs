// ABOUTME: Main application orchestration for the appset-render CLI
// ABOUTME: Coordinates between CLI arguments, configuration, and command execution

use anyhow::Result;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use super::commands;
use super::{Args, Commands, Config};

pub struct App {
    config: Config,
}

impl App {
    /// Create a new application instance
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Initialize logging based on configuration
    pub fn init_logging(&self, verbose: bool, no_color: bool) -> Result<()> {
        let log_level = if verbose {
            "debug"
        } else {
            &self.config.logging.level
        };

        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

        // stdout is reserved for rendered manifests
        let builder = tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .with_ansi(!no_color)
            .with_target(false);

        let initialized = match self.config.logging.format.as_str() {
            "compact" => builder.compact().try_init(),
            "json" => builder.json().try_init(),
            _ => builder.try_init(),
        };
        initialized.map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

        debug!("Logging initialized with level: {}", log_level);
        Ok(())
    }

    /// Run the application with parsed arguments
    pub async fn run(&mut self, args: Args) -> Result<()> {
        self.init_logging(args.verbose, args.no_color)?;

        info!("Starting appset-render v{}", env!("CARGO_PKG_VERSION"));
        debug!("Configuration loaded from: {:?}", args.config);

        match args.command {
            Commands::Render {
                appset,
                params,
                params_file,
                format,
                output,
            } => {
                if let Some(path) = params_file {
                    let file_params = commands::load_params_file(&path).await?;
                    self.config.merge_params(file_params);
                }
                self.config.merge_params(Args::parse_params(&params)?);

                let format = format.unwrap_or(self.config.output_format);
                commands::render_application_set(appset, format, output, &self.config).await
            }

            Commands::Check { appset } => commands::check_application_set(appset).await,
        }
    }

    /// Create application from command line arguments
    pub fn from_args(args: &Args) -> Result<Self> {
        let config = Config::load(args.config.clone())?;
        Ok(Self::new(config))
    }
}
