//! CLI command implementations

use std::fs;
use std::path::Path;

use serde_json::json;

use crate::animals::filter::{DIET_KEY, NAME_KEY, SPECIES_KEY, TRAITS_KEY};
use crate::animals::{AnimalQuery, AnimalStore, JsonFileBackend, Persistence};
use crate::http_server::HttpServer;
use crate::observability::{log_event, log_event_with_fields, Event, Logger, Severity};

use super::args::Command;
use super::config::{resolve_port, Config, PORT_ENV};
use super::errors::{CliError, CliResult};
use super::io::write_response;

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Init { config } => init(&config),
        Command::Serve { config, port } => serve(&config, port),
        Command::List {
            config,
            name,
            species,
            diet,
            traits,
        } => list(&config, &list_query(name, species, diet, traits)),
    }
}

/// Build the `list` query the same way URL query pairs are read
fn list_query(
    name: Option<String>,
    species: Option<String>,
    diet: Option<String>,
    traits: Vec<String>,
) -> AnimalQuery {
    let scalars = [(NAME_KEY, name), (SPECIES_KEY, species), (DIET_KEY, diet)]
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key, v)));
    let traits = traits.into_iter().map(|t| (TRAITS_KEY, t));

    AnimalQuery::from_pairs(scalars.chain(traits))
}

fn load_config(config_path: &Path) -> CliResult<Config> {
    let config = Config::load(config_path)?;
    Logger::set_min_severity(config.log_severity()?);
    log_event_with_fields(
        Event::ConfigLoaded,
        &[
            ("config", config_path.display().to_string().as_str()),
            ("data_file", config.data_file.display().to_string().as_str()),
        ],
    );
    Ok(config)
}

fn open_store(config: &Config) -> CliResult<AnimalStore> {
    let backend = JsonFileBackend::with_mode(&config.data_file, config.write_mode);
    AnimalStore::open(backend).map_err(|e| {
        CliError::boot_failed(format!(
            "Failed to load animals from {}: {}",
            config.data_file.display(),
            e
        ))
    })
}

/// Create an empty animals file and the public directory
///
/// Refuses to touch an existing animals file.
pub fn init(config_path: &Path) -> CliResult<()> {
    let config = load_config(config_path)?;
    let data_file = &config.data_file;

    if data_file.exists() {
        return Err(CliError::already_initialized(data_file.display()));
    }

    if let Some(parent) = data_file.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            CliError::io_error(format!("Failed to create directory {:?}: {}", parent, e))
        })?;
    }

    JsonFileBackend::new(data_file)
        .save(&[])
        .map_err(|e| CliError::io_error(e.to_string()))?;

    fs::create_dir_all(&config.server.public_dir).map_err(|e| {
        CliError::io_error(format!(
            "Failed to create directory {:?}: {}",
            config.server.public_dir, e
        ))
    })?;

    log_event_with_fields(
        Event::StoreInitialized,
        &[("data_file", data_file.display().to_string().as_str())],
    );

    write_response(json!({
        "initialized": true,
        "data_file": data_file.display().to_string(),
    }))
}

/// Load the store and serve HTTP until ctrl-c
pub fn serve(config_path: &Path, port: Option<u16>) -> CliResult<()> {
    log_event(Event::BootStart);

    let mut config = load_config(config_path)?;
    let env_port = std::env::var(PORT_ENV).ok();
    config.server.port = resolve_port(port, env_port.as_deref(), &config)?;

    let store = open_store(&config)?;
    let server = HttpServer::new(config.server.clone(), store);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })
}

/// Print the animals matching `query` as one JSON line
pub fn list(config_path: &Path, query: &AnimalQuery) -> CliResult<()> {
    let config = Config::load(config_path)?;
    // stdout carries the result; keep lifecycle lines off it
    Logger::set_min_severity(Severity::Error);

    let store = open_store(&config)?;
    let animals = store.filter(query);

    write_response(serde_json::to_value(animals)?)
}
