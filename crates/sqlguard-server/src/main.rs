//! sqlguard-server CLI
//!
//! Seeds the demo database and serves the query API until Ctrl-C.

use clap::Parser;
use tokio::net::TcpListener;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use sqlguard_server::http::serve;
use sqlguard_server::{app, load_whitelist, seed, AppState, Cli};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let whitelist = load_whitelist(cli.whitelist.as_deref())?;
    let pool = sqlguard_sqlite::connect(&cli.database_config()).await?;

    if cli.no_seed {
        info!("Skipping demo data");
    } else {
        seed(&pool).await?;
    }

    let router = app(&AppState::new(pool.clone(), whitelist));
    let listener = TcpListener::bind(cli.bind).await?;

    serve(listener, router, async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!(error = %err, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    })
    .await?;

    pool.close().await;
    Ok(())
}
