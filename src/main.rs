//! langstats - Generate an animated card of your most used GitHub languages.

use clap::Parser;
use langstats::cli;
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(cli.log_level)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("setting default subscriber failed");

    if let Err(error) = cli::run(cli).await {
        tracing::error!("{}", error);
        std::process::exit(1);
    }
}
