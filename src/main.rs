use anyhow::Result;

use swiss_tournament::cli::Command;
use swiss_tournament::config::AppConfig;
use swiss_tournament::{
    handle_count, handle_init, handle_pairings, handle_register, handle_report, handle_reset,
    handle_serve, handle_standings, interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    let config = AppConfig::new();
    execute_command(&command, &config)
}

fn execute_command(command: &Command, config: &AppConfig) -> Result<()> {
    match command {
        Command::Init => handle_init(config),
        Command::Register { name } => handle_register(config, name),
        Command::Report { winner, loser } => handle_report(config, winner, loser),
        Command::Count => handle_count(config),
        Command::Standings { json } => handle_standings(config, *json),
        Command::Pairings { json } => handle_pairings(config, *json),
        Command::Reset { matches_only } => handle_reset(config, *matches_only),
        Command::Serve { port } => handle_serve(config, port.unwrap_or(config.server.port)),
    }
}
