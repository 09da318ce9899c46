use clap::Subcommand;
use serde_json::json;

use crate::cli::OutputFormat;
use crate::database::{manager, AccountStore};

#[derive(Subcommand)]
pub enum AccountCommands {
    #[command(about = "Create the accounts table if missing")]
    Init,

    #[command(about = "Check database connectivity and report the account count")]
    Status,

    #[command(about = "Delete every account from the store")]
    Clear,
}

pub async fn handle(cmd: AccountCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    let pool = manager::connect()?;
    let store = AccountStore::new(pool.clone());

    match cmd {
        AccountCommands::Init => {
            store.ensure_schema().await?;

            match output_format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&json!({"status": "ok"}))?)
                }
                OutputFormat::Text => println!("Accounts table ready"),
            }

            Ok(())
        }
        AccountCommands::Status => {
            manager::health_check(&pool).await?;
            let count = store.count().await?;

            match output_format {
                OutputFormat::Json => println!(
                    "{}",
                    serde_json::to_string_pretty(&json!({
                        "database": "ok",
                        "accounts": count
                    }))?
                ),
                OutputFormat::Text => {
                    println!("Database: ok");
                    println!("Accounts: {}", count);
                }
            }

            Ok(())
        }
        AccountCommands::Clear => {
            let cleared = store.clear().await?;

            match output_format {
                OutputFormat::Json => println!(
                    "{}",
                    serde_json::to_string_pretty(&json!({"cleared": cleared}))?
                ),
                OutputFormat::Text => println!("Cleared {} accounts from the database", cleared),
            }

            Ok(())
        }
    }
}
