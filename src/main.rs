use anyhow::Result;
use routine_advisor::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
