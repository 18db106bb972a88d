//! CLI command implementations

use std::path::Path;

use crate::auth::crypto::{generate_secret, hash_password};
use crate::config::BlogConfig;
use crate::http_server::HttpServer;
use crate::observability::{log_event_with_fields, Event};
use crate::posts::{DocumentBackend, LocalBackend, PostStore};

use super::args::Command;
use super::errors::{CliError, CliResult};

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, port } => serve(config.as_deref(), port),
        Command::HashPassword { password } => {
            println!("{}", hash_password(&password)?);
            Ok(())
        }
        Command::GenSecret => {
            println!("{}", generate_secret());
            Ok(())
        }
        Command::Reindex { config } => reindex(config.as_deref()),
        Command::Verify { config } => verify(config.as_deref()),
    }
}

fn load_config(path: Option<&Path>) -> CliResult<BlogConfig> {
    let config = BlogConfig::load(path)?;
    let blog_dir = config.blog_dir.display().to_string();
    log_event_with_fields(Event::ConfigLoaded, &[("blog_dir", blog_dir.as_str())]);
    Ok(config)
}

fn open_store(config: &BlogConfig) -> CliResult<PostStore<LocalBackend>> {
    let backend = LocalBackend::open(&config.blog_dir)?;
    Ok(PostStore::new(backend, config.site.clone()))
}

fn runtime() -> CliResult<tokio::runtime::Runtime> {
    tokio::runtime::Runtime::new()
        .map_err(|e| CliError::serve_failed(format!("Failed to create tokio runtime: {}", e)))
}

/// Run the HTTP API
pub fn serve(config_path: Option<&Path>, port: Option<u16>) -> CliResult<()> {
    let mut config = load_config(config_path)?;
    if let Some(port) = port {
        config.port = port;
        config.validate()?;
    }

    if config.uses_default_secret() {
        log_event_with_fields(Event::InsecureConfig, &[("setting", "JWT_SECRET")]);
    }
    if config.password_hash.is_none() {
        log_event_with_fields(Event::InsecureConfig, &[("setting", "BLOG_PASSWORD_HASH")]);
    }

    let server = HttpServer::from_config(&config)?;

    runtime()?.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::serve_failed(format!("HTTP server failed: {}", e)))
    })
}

/// Regenerate the index document
pub fn reindex(config_path: Option<&Path>) -> CliResult<()> {
    let config = load_config(config_path)?;
    let store = open_store(&config)?;

    let count = runtime()?.block_on(store.reindex())?;
    println!("Indexed {} post(s) in {}", count, store.backend().root().display());
    Ok(())
}

/// Compare the index listing with the post documents
pub fn verify(config_path: Option<&Path>) -> CliResult<()> {
    let config = load_config(config_path)?;
    let store = open_store(&config)?;

    let count = verify_store(&store)?;
    println!("Index consistent: {} post(s)", count);
    Ok(())
}

/// Check that the index lists exactly `store.list()`, in the same order.
///
/// Returns the number of posts on success.
pub fn verify_store<B: DocumentBackend>(store: &PostStore<B>) -> CliResult<usize> {
    let listed = store.list()?;
    let indexed = store
        .index_entries()?
        .ok_or_else(|| CliError::index_mismatch("index.html is missing"))?;

    if indexed == listed {
        return Ok(listed.len());
    }

    let first_difference = listed
        .iter()
        .zip(indexed.iter())
        .position(|(a, b)| a != b)
        .unwrap_or_else(|| listed.len().min(indexed.len()));
    let detail = format!(
        "index lists {} post(s), directory has {}; first difference at position {}",
        indexed.len(),
        listed.len(),
        first_difference
    );
    log_event_with_fields(Event::IndexMismatch, &[("detail", detail.as_str())]);
    Err(CliError::index_mismatch(detail))
}
