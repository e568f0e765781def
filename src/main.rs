use clap::Parser;

use solver_viz::cli::{self, Args};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries only the completion line
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .try_init();

    let args = Args::parse();
    let output_dir = cli::run(&args)?;

    println!("Plots saved to {}", output_dir.display());
    Ok(())
}
