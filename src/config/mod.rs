use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "grades-dashboard")]
#[command(about = "A very sophisticated student grades dashboard")]
pub struct CliConfig {
    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Exit without waiting for a key press")]
    pub no_wait: bool,

    #[arg(long, help = "Seed the grade generator for reproducible output")]
    pub seed: Option<u64>,

    #[arg(long, help = "Print the banner without color")]
    pub no_color: bool,
}
