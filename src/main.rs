//! Pulsenet - Pulse Network Simulator
//!
//! Presses the button on one or more pulse networks and prints, per file,
//! the low/high pulse product and the presses needed to reach the terminal.
//!
//! # Usage
//!
//! ```bash
//! pulsenet input.txt
//! pulsenet --part 2 --watch db,qx,gf,vc input.txt
//! ```

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use env_logger::Env;
use pulsenet_core::{
    dsl,
    error::Result,
    sim::{DEFAULT_AGGREGATE_PRESSES, DEFAULT_PRESS_CEILING, DEFAULT_TERMINAL},
    Campaign, CampaignConfig, Network,
};

/// Which results to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Part {
    #[value(name = "1")]
    One,
    #[value(name = "2")]
    Two,
    Both,
}

/// Pulse network simulator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Network description files
    #[arg(value_name = "INPUT_FILE", required = true)]
    input_files: Vec<PathBuf>,

    /// Button presses for the pulse product
    #[arg(short, long, default_value_t = DEFAULT_AGGREGATE_PRESSES)]
    presses: u64,

    /// Give up the period search after this many presses
    #[arg(short, long, default_value_t = DEFAULT_PRESS_CEILING)]
    ceiling: u64,

    /// Terminal module
    #[arg(short, long, default_value = DEFAULT_TERMINAL)]
    terminal: String,

    /// Modules to watch instead of the terminal's conjunction inputs
    #[arg(short, long, value_delimiter = ',')]
    watch: Option<Vec<String>>,

    /// Which results to print
    #[arg(long, value_enum, default_value_t = Part::Both)]
    part: Part,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let mut config = CampaignConfig::new()
        .with_presses(args.presses)
        .with_press_ceiling(args.ceiling)
        .with_terminal(args.terminal.clone());
    if let Some(watch) = &args.watch {
        config = config.with_watched(watch.iter().cloned());
    }

    for path in &args.input_files {
        println!("{}:", path.display());

        // Parse and wire the network
        let ast = dsl::parse_file(path)?;
        let network = Network::from_ast(ast)?;

        let mut campaign = Campaign::new(network, config.clone())?;

        if args.part != Part::Two {
            let report = campaign.aggregate()?;
            println!("{}", report.product()?);
            campaign.reset();
        }

        if args.part != Part::One {
            let outcome = campaign.find_periods()?;
            println!("{}", outcome.presses());
        }
    }

    Ok(())
}
