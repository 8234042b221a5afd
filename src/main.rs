/*
 * Responsibility
 * - Start the tokio runtime and call app::run() (no logic here)
 */
use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    token_gate::app::run().await
}
