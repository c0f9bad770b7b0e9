mod archiver;
mod config;
mod models;
mod parser;
mod routes;
mod slug;

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tracing::info;

#[derive(Parser)]
#[command(name = "watch_collection_api", about = "Watch carousel extraction API")]
struct Cli {
    /// Address to listen on
    #[arg(long, default_value = "0.0.0.0:8000")]
    bind: SocketAddr,

    /// Directory the save operation writes JSON files into
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,

    /// Substitute carousel document (defaults to the bundled sample)
    #[arg(long, requires = "links")]
    document: Option<PathBuf>,

    /// Substitute link list, one URL per line
    #[arg(long, requires = "document")]
    links: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    let source = match (&cli.document, &cli.links) {
        (Some(document), Some(links)) => config::WatchSource::from_files(document, links)?,
        _ => config::WatchSource::embedded(),
    };
    info!(links = source.links.len(), "watch source loaded");

    let app = routes::router(routes::AppState::new(source, cli.data_dir));

    let listener = tokio::net::TcpListener::bind(cli.bind).await?;
    info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
