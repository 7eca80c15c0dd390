use clap::Parser;
use gz_client::{handle_command, init_logging, ConnectionArgs, ListArgs, NoticeService};
use gz_core::{NoticeLogger, Result};
use gz_web::AppState;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about = "Browse notices published in The Gazette", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    connection: ConnectionArgs,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Print one page of notices
    List(ListArgs),
    /// Serve the notices listing as JSON over HTTP
    Serve {
        #[arg(long, default_value = "127.0.0.1:3000")]
        addr: SocketAddr,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let logger: Arc<dyn NoticeLogger> = Arc::new(init_logging());
    let cli = Cli::parse();

    let config = cli.connection.to_config();
    let notices = NoticeService::from_config(&config, logger)?;
    info!("🔗 Notices endpoint: {}", config.base_url);

    match cli.command {
        Commands::List(args) => handle_command(args, &notices).await?,
        Commands::Serve { addr } => gz_web::serve(AppState { notices }, addr).await?,
    }

    Ok(())
}
