mod cli;
mod commands;
mod common;
mod utils;

fn main() -> eyre::Result<()> {
    cli::start()
}
