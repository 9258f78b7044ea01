// CLI module - process entry points

pub mod migrate;
pub mod serve;

use clap::{Parser, Subcommand};

/// Loyalty catalog backend
#[derive(Parser, Debug)]
#[command(name = "loyalty-backend")]
#[command(about = "Items and tags REST service", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run pending migrations, then serve HTTP (default)
    Serve,

    /// Run pending migrations and exit
    Migrate,
}

impl Cli {
    /// The subcommand to run, `serve` when none was given
    pub fn selected_command(&self) -> &Commands {
        self.command.as_ref().unwrap_or(&Commands::Serve)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_defaults_to_serve() {
        let cli = Cli::try_parse_from(["loyalty-backend"]).unwrap();
        assert_eq!(cli.selected_command(), &Commands::Serve);
    }

    #[test]
    fn test_migrate_subcommand() {
        let cli = Cli::try_parse_from(["loyalty-backend", "migrate"]).unwrap();
        assert_eq!(cli.selected_command(), &Commands::Migrate);
    }

    #[test]
    fn test_unknown_subcommand_rejected() {
        assert!(Cli::try_parse_from(["loyalty-backend", "bootstrap"]).is_err());
    }
}
