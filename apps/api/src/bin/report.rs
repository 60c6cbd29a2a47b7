//! Console runner: reads one fragment, prints the report and saves it to
//! `report.txt` in the current directory.

use std::path::Path;

use anyhow::Result;

use archeologist::batch;
use archeologist::config::Config;
use archeologist::logging::init_tracing;
use archeologist::reconstruction::pipeline::Pipeline;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("\nReconstruction failed: {e:#}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let config = Config::from_env()?;
    init_tracing(&config.rust_log);

    let pipeline = Pipeline::from_config(&config)?;

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut output = std::io::stdout();

    batch::run(&pipeline, &mut input, &mut output, Path::new(".")).await?;
    Ok(())
}
