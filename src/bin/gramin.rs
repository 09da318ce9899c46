use clap::Parser;
use gramin_bank_api::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // DATABASE_URL usually lives in .env during development
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = gramin_bank_api::cli::run(cli).await {
        match std::env::var("CLI_VERBOSE").as_deref() {
            Ok("true") | Ok("1") => eprintln!("Error: {e:?}"),
            _ => eprintln!("Error: {e}"),
        }
        std::process::exit(1);
    }

    Ok(())
}
