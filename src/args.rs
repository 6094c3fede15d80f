use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Side of the grid. Ignored when a config file is given.
    #[arg(short, long, default_value_t = 4)]
    pub n: usize,

    /// JSON file with the grid configuration.
    #[arg(short, long, required = false)]
    pub config: Option<PathBuf>,

    /// State to query.
    #[arg(short, long, default_value_t = 1)]
    pub state: i32,

    /// Intended action, by name (north, east, south, west) or code (0-3).
    #[arg(short, long, default_value = "north")]
    pub action: String,

    /// Discount factor. Ignored when a config file is given.
    #[arg(short, long, default_value_t = 1.)]
    pub gamma: f32,
}
