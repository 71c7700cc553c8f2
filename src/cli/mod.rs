use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod catalog;
pub mod chat;
pub mod serve;

use crate::core::AppConfig;

#[derive(Subcommand)]
enum Command {
    /// Run the web server
    Serve {
        /// Set the server host address
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Set the server port
        #[arg(long, default_value = "2222")]
        port: String,
    },
    /// Print the product catalog as JSON
    Catalog {
        /// Only list products in this category
        #[arg(long)]
        category: Option<String>,
    },
    /// Start an advisor session in the terminal
    Chat {},
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

pub async fn run() -> Result<()> {
    let args = Cli::parse();
    let config = AppConfig::default();

    // Handle each sub command
    match args.command {
        Some(Command::Serve { host, port }) => {
            serve::run(host, port, config).await;
        }
        Some(Command::Catalog { category }) => {
            catalog::run(category, &config)?;
        }
        Some(Command::Chat {}) => {
            chat::run(&config).await?;
        }
        None => {}
    }

    Ok(())
}
