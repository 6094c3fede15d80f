mod args;

use args::Args;
use clap::Parser;
use gridworld::*;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => {
            info!(path = %path.display(), "loading config");
            GridWorldConfig::from_json_file(path)?
        }
        None => GridWorldConfig {
            n: args.n,
            gamma: args.gamma,
            ..Default::default()
        },
    };

    let env = GridWorld::from_config(&config)?;
    let action = args.action.parse::<Action>()?;
    let ts = env.transitions(args.state, action.code())?;

    println!("state {} {action}:", args.state);
    println!("{:>10} {:>8} {:>11}", "next_state", "reward", "probability");
    for t in &ts {
        println!("{:>10} {:>8} {:>11.1}", t.next_state, t.reward, t.probability);
    }
    println!("{env}");

    Ok(())
}
