use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use o365endpoints::{Instance, View};
use std::path::PathBuf;

/*-------------------------------------------------------------------------------------------------
  Command Line Interface (CLI) Arguments
-------------------------------------------------------------------------------------------------*/

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Query the Microsoft 365 network endpoint directory.",
    long_about = "Query the Microsoft 365 network endpoint directory.\n\n\
        Without a VIEW, starts an interactive menu. Run with --list to see the views."
)]
pub struct Args {
    /// Microsoft 365 cloud instance [Worldwide, USGovDoD, USGovGCCHigh, China]
    #[arg(short = 'i', long, value_parser = parse_instance)]
    pub instance: Option<Instance>,

    /// Root URL of the endpoint web service
    #[arg(short = 'u', long)]
    pub url: Option<String>,

    /// Request timeout in seconds
    #[arg(short = 't', long)]
    pub timeout: Option<u64>,

    /// Read the endpoint directory from a local JSON file instead of the web service
    #[arg(long = "input", conflicts_with_all = ["instance", "url", "timeout"])]
    pub input_file: Option<PathBuf>,

    /// List the available views and exit
    #[arg(short = 'l', long)]
    pub list: bool,

    /// Logging verbosity
    #[command(flatten)]
    pub verbose: Verbosity<WarnLevel>,

    /// View to print, by name (e.g. `exchange-ipv4`) or menu number
    #[arg(value_parser = parse_view)]
    pub view: Option<View>,
}

/*--------------------------------------------------------------------------------------
  Value Parsers
--------------------------------------------------------------------------------------*/

fn parse_instance(value: &str) -> Result<Instance, String> {
    value.parse()
}

fn parse_view(value: &str) -> Result<View, String> {
    value.parse().map_err(|error: o365endpoints::Error| error.to_string())
}
