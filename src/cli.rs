use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "Swiss-system tournament tracker")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Drop and recreate the database schema
    Init,
    /// Register a new player
    Register {
        /// Player's full name (need not be unique)
        name: String,
    },
    /// Record the outcome of a single match
    Report {
        /// Id of the player who won
        winner: String,
        /// Id of the player who lost
        loser: String,
    },
    /// Print the number of registered players
    Count,
    /// Print players ordered by wins
    Standings {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Print the pairings for the next round
    Pairings {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Delete recorded matches and registered players
    Reset {
        /// Keep players, delete only matches
        #[arg(long)]
        matches_only: bool,
    },
    /// Start the HTTP API server
    Serve {
        /// Port number (defaults to the configured server port)
        #[arg(short, long)]
        port: Option<u16>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_keeps_ids_as_text() {
        let cli = Cli::parse_from(["swiss_tournament", "report", "3", "x"]);
        assert_eq!(
            cli.command,
            Command::Report {
                winner: "3".to_string(),
                loser: "x".to_string()
            }
        );
    }

    #[test]
    fn test_flags() {
        let cli = Cli::parse_from(["swiss_tournament", "reset", "--matches-only"]);
        assert_eq!(cli.command, Command::Reset { matches_only: true });

        let cli = Cli::parse_from(["swiss_tournament", "serve", "-p", "8080"]);
        assert_eq!(cli.command, Command::Serve { port: Some(8080) });
    }
}
