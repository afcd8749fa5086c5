use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    after_help = "API metadata is read from standard input:\n  nvim --api-info | neovimqt-gen [output dir]"
)]
pub struct Cli {
    /// Output directory for the generated bindings; lists the API when omitted
    pub output: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
