mod collectors;
mod config;
mod models;
mod render;
mod util;

use anyhow::Result;
use clap::Parser;
use collectors::{mounts, usage};

#[derive(Parser, Debug)]
#[command(
    name = "dfree",
    about = "df-style disk space reporter for physical disks",
    version = "0.1",
    disable_help_flag = true
)]
struct Cli {
    /// Print sizes with binary unit prefixes (k, M, G, ...)
    #[arg(short = 'h', long = "human-readable")]
    human_readable: bool,

    /// Scale sizes by SIZE before printing (recognized but not implemented)
    #[arg(short = 'B', long = "block-size", value_name = "SIZE")]
    block_size: Option<String>,

    /// Print a one-shot JSON snapshot of all registered disks and exit
    #[arg(long)]
    json: bool,

    /// Print help
    #[arg(long, action = clap::ArgAction::Help)]
    help: Option<bool>,

    // Unrecognized arguments are collected here and diagnosed, not fatal.
    #[arg(hide = true, allow_hyphen_values = true, num_args = 0.., value_name = "ARG")]
    unrecognized: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.block_size.is_some() {
        eprintln!("-B is not implemented.");
    }
    for arg in &cli.unrecognized {
        eprintln!("{} is not implemented.", arg);
    }

    let cfg = config::Config::load();
    let human = cli.human_readable || cfg.output.human_readable;

    // Count first to size the registry; the second read may come up
    // shorter if mounts disappeared in between, never longer.
    let capacity = mounts::count_mounted_disks()?;
    let mut disks = mounts::register_disks(capacity)?;
    disks.retain(|d| !cfg.devices.is_excluded(&d.device));

    usage::collect(&mut disks);

    if cli.json {
        return render::print_json(&disks);
    }
    render::print_table(&disks, human);
    Ok(())
}
