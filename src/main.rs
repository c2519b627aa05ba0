use clap::Parser;
use interview_rag::cli::handlers;
use interview_rag::cli::output;
use interview_rag::cli::Cli;
use interview_rag::cli::Commands;
use interview_rag::logging;
use interview_rag::AppConfig;
use interview_rag::RagService;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_from(cli.config.as_deref())?;
    if cli.verbose {
        config.logging.level = "debug".to_string();
    }

    // Only the long-running server writes log files
    let _guard = if matches!(cli.command, Commands::Serve { .. }) {
        Some(logging::init_logging(&config.logging)?)
    } else {
        logging::init_simple_logging(&config.logging.level)?;
        None
    };
    info!("interview-rag v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Serve {
            host,
            port,
            no_cors,
        } => handlers::handle_serve(&config, host, port, no_cors).await?,
        Commands::Ask {
            question,
            no_fallback,
            json,
        } => {
            let service = RagService::new(&config)?;
            handlers::handle_ask(&service, &question, no_fallback, json).await?;
        }
        Commands::Basic { question, json } => {
            let service = RagService::new(&config)?;
            handlers::handle_basic(&service, &question, json).await?;
        }
        Commands::Compare { question, json } => {
            let service = RagService::new(&config)?;
            handlers::handle_compare(&service, &question, json).await?;
        }
        Commands::Contextual {
            question,
            interview_type,
            company,
            requirements,
            json,
        } => {
            let service = RagService::new(&config)?;
            handlers::handle_contextual(
                &service,
                &question,
                interview_type,
                company,
                requirements,
                json,
            )
            .await?;
        }
        Commands::Preset {
            question,
            preset,
            json,
        } => {
            let service = RagService::new(&config)?;
            handlers::handle_preset(&service, &question, &preset, json).await?;
        }
        Commands::Search { query, limit, json } => {
            let service = RagService::new(&config)?;
            handlers::handle_search(&service, &query, limit, json).await?;
        }
        Commands::Presets => output::print_presets(),
        Commands::Config => output::print_config(&config),
    }

    Ok(())
}
