// src/cli/commands.rs
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate a password without entering the interactive menu
    Generate {
        /// Password length
        #[arg(long, short, value_parser = clap::value_parser!(u8).range(4..=32))]
        length: Option<u8>,

        /// Leave uppercase letters out of the pool
        #[arg(long)]
        no_uppercase: bool,

        /// Leave lowercase letters out of the pool
        #[arg(long)]
        no_lowercase: bool,

        /// Leave numbers out of the pool
        #[arg(long)]
        no_numbers: bool,

        /// Add special symbols to the pool
        #[arg(long)]
        symbols: bool,

        /// Copy the generated password to the clipboard
        #[arg(long)]
        copy: bool,
    },
}
