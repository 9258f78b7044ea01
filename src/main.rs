use clap::Parser;
use loyalty_backend::cli::{self, Cli, Commands};
use loyalty_backend::config::{init_logging, BootstrapSettings, LoggingConfig, SystemEnvironment};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    let args = Cli::parse();

    init_logging(&LoggingConfig::from_env_provider(&SystemEnvironment))?;

    // Missing or malformed configuration aborts startup
    let settings = BootstrapSettings::from_env()?;
    tracing::debug!("Loaded bootstrap settings: {:?}", settings);

    let result = match args.selected_command() {
        Commands::Serve => cli::serve::run_server(&settings).await,
        Commands::Migrate => cli::migrate::run_migrations(&settings).await,
    };

    if let Err(e) = &result {
        tracing::error!("Fatal error: {}", e);
    }

    result
}
