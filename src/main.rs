//! CLI entry point for filet chart composition

use clap::Parser;
use filetgrid::io::cli::{Cli, FileProcessor};
use filetgrid::io::logging::init_logging;

fn main() -> filetgrid::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.quiet);
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
