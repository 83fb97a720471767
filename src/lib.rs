pub mod api;
pub mod cli;
pub mod config;
pub mod database;
pub mod errors;
pub mod output;
pub mod sanitize;
pub mod services;
pub mod swiss;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use log::info;

use crate::cli::Command;
use crate::config::AppConfig;
use crate::database::SqliteStore;
use crate::services::server::ServerService;
use crate::services::TournamentService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

fn open_store(config: &AppConfig) -> Result<SqliteStore> {
    let pool = database::create_pool(&config.database.path, config.database.pool_size)?;
    Ok(SqliteStore::open(pool)?)
}

fn open_service(config: &AppConfig) -> Result<TournamentService<SqliteStore>> {
    Ok(TournamentService::new(open_store(config)?))
}

pub fn handle_init(config: &AppConfig) -> Result<()> {
    let pool = database::create_pool(&config.database.path, config.database.pool_size)?;
    let mut conn = database::get_connection(&pool)?;
    database::setup::reset_database(&mut conn)?;
    info!("Initialized database at {}", config.database.path);
    Ok(())
}

pub fn handle_register(config: &AppConfig, name: &str) -> Result<()> {
    let player = open_service(config)?.register_player(name)?;
    println!("{}", player.id);
    Ok(())
}

pub fn handle_report(config: &AppConfig, winner: &str, loser: &str) -> Result<()> {
    let winner = sanitize::parse_player_id(winner)?;
    let loser = sanitize::parse_player_id(loser)?;
    open_service(config)?.report_match(winner, loser)?;
    Ok(())
}

pub fn handle_count(config: &AppConfig) -> Result<()> {
    println!("{}", open_service(config)?.count_players()?);
    Ok(())
}

pub fn handle_standings(config: &AppConfig, json: bool) -> Result<()> {
    let standings = open_service(config)?.standings()?;
    if json {
        println!("{}", serde_json::to_string_pretty(&standings)?);
    } else {
        print!("{}", output::standings_table(&standings));
    }
    Ok(())
}

pub fn handle_pairings(config: &AppConfig, json: bool) -> Result<()> {
    let pairings = open_service(config)?.pairings()?;
    if json {
        println!("{}", serde_json::to_string_pretty(&pairings)?);
    } else {
        print!("{}", output::pairings_table(&pairings));
    }
    Ok(())
}

pub fn handle_reset(config: &AppConfig, matches_only: bool) -> Result<()> {
    let service = open_service(config)?;
    service.delete_matches()?;
    if !matches_only {
        service.delete_players()?;
    }
    Ok(())
}

pub fn handle_serve(config: &AppConfig, port: u16) -> Result<()> {
    let store = open_store(config)?;
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let service = ServerService::new(port, store);
        service.run().await
    })
}
