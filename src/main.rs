use clap::Parser;
use zoxide_predictor::cli::{self, Cli};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Suggestions go to stdout, logs to stderr
    zoxide_predictor::tracing::init(cli.verbose);

    cli::run(cli).await.inspect_err(|e| {
        tracing::error!("zoxide-predictor failed: {:?}", e);
    })
}
