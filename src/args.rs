use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(
    name = "mailtally",
    about = "Deduplicate email lists and tally addresses by domain",
    version,
    long_about = None
)]
pub struct Args {
    /// File with one email per line (reads stdin when omitted)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Report the first entry on this domain
    #[arg(short, long)]
    pub domain: Option<String>,

    /// Print the deduplicated email list
    #[arg(long)]
    pub dedupe: bool,

    /// Number of largest domains to display
    #[arg(short, long)]
    pub top: Option<usize>,

    /// Mask addresses and domain names in the output
    #[arg(long)]
    pub redact: bool,

    /// Emit the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
