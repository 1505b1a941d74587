use std::net::SocketAddr;

use clap::Parser;
use medical_report_analyzer::{
    cli::{self, Cli, Command},
    config::Config,
    create_router,
    utils::init_tracing,
    AppState,
};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    // Load configuration
    let config = Config::from_env()?;
    info!("Configuration loaded: {:?}", config.server);
    info!("Model configuration: {:?}", config.llm);

    // OCR engine and inference client live for the whole process
    let state = AppState::from_config(config.clone())?;

    match cli.command() {
        Command::Serve => serve(state, &config).await,
        Command::Analyze { path } => {
            let output = cli::run_analyze(&state.analyzer, &path).await?;
            println!("{}", output);
            Ok(())
        }
    }
}

async fn serve(state: AppState, config: &Config) -> anyhow::Result<()> {
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    info!("Server listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    Ok(())
}
