// src/main.rs

use std::process::ExitCode;

use clihelper::{cli, logging, run, Outcome};

#[tokio::main]
async fn main() -> ExitCode {
    match run_main().await {
        Ok(outcome) => outcome.into(),
        Err(err) => {
            eprintln!("clihelper error: {err:?}");
            ExitCode::FAILURE
        }
    }
}

async fn run_main() -> anyhow::Result<Outcome> {
    let args = cli::parse();
    logging::init_logging(args.log_level)?;
    run(args).await
}
