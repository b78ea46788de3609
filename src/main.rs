//! CLI entry point for the crossword pattern generator

use clap::Parser;
use crosspattern::io::cli::{Cli, PatternApp, init_tracing};

fn main() -> crosspattern::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli);
    let app = PatternApp::new(cli);
    app.process()
}
