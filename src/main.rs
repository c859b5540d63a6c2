use clap::Parser;
use stem_solver::adapters::server;
use stem_solver::core::ModelSelection;
use stem_solver::utils::{logger, validation::Validate};
use stem_solver::{CliConfig, ServiceConfig, SolveHandler, WorkersAiClient};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting stem-solver");

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let models = ModelSelection::from_config(&config);
    tracing::info!("Vision model: {}", models.vision);
    tracing::info!("Solver model: {}", models.solver);

    let handler = SolveHandler::new(WorkersAiClient::from_config(&config), models);
    let app = server::router(handler, config.max_body_bytes);

    let addr = config.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);

    server::serve(listener, app).await?;

    tracing::info!("Server stopped");
    Ok(())
}

fn load_config(cli: &CliConfig) -> stem_solver::Result<ServiceConfig> {
    let config = cli.resolve()?;
    config.validate()?;
    Ok(config)
}
