use crate::cli::CLI;
use clap::{CommandFactory, Subcommand};
use clap_complete::{Shell, generate};
use std::io;

#[derive(Subcommand)]
pub(crate) enum Command {
    #[clap(about = "Print a completion script for the given shell to stdout.")]
    Generate {
        #[arg(value_enum, help = "Target shell.")]
        shell: Shell,
    },
}

impl Command {
    pub fn run(self) -> eyre::Result<()> {
        match self {
            Command::Generate { shell } => {
                let mut cmd = CLI::command();
                let name = cmd.get_name().to_owned();
                generate(shell, &mut cmd, name, &mut io::stdout());
            }
        }
        Ok(())
    }
}
