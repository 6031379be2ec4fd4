//! # CLI Layer
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Installs a tracing subscriber
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: Convert shell arguments into typed commands via clap
//! 2. **Logging**: `ENVUPDATE_LOG` filter, `-v` for debug by default
//! 3. **Context Setup**: Resolve the data directory, load config, build the API
//! 4. **Dispatch**: Route commands to the API
//! 5. **Error Handling**: Failed operations become `Err`, which `main` turns into exit status 1

use super::render::{render_config, render_json, render_messages, render_value};
use super::setup::{Cli, Commands};
use clap::Parser;
use envupdateapp::api::EnvUpdateApi;
use envupdateapp::config::EnvUpdateConfig;
use envupdateapp::error::{EnvUpdateError, Result};
use envupdateapp::init::{initialize, EnvUpdateContext};
use envupdateapp::model::{Action, EditRequest, EditResult, Scope};
use envupdateapp::store::fs::FileStore;
use std::path::PathBuf;
use tracing::{debug, Level};
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "ENVUPDATE_LOG";

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let data_override = cli.data.as_ref().map(PathBuf::from);

    // The template needs neither a data directory nor a valid config
    if let Commands::Config { template: true } = &cli.command {
        print!("{}", EnvUpdateConfig::template());
        return Ok(());
    }

    let EnvUpdateContext {
        mut api,
        config,
        data_dir,
    } = initialize(data_override)?;
    debug!(command = ?cli.command, scope = %cli.scope, "dispatching");

    match cli.command {
        Commands::Append { name, segment } => {
            edit(&mut api, &name, Action::Append, &cli.scope, &segment)
        }
        Commands::Prepend { name, segment } => {
            edit(&mut api, &name, Action::Prepend, &cli.scope, &segment)
        }
        Commands::Remove { name, segment } => {
            edit(&mut api, &name, Action::Remove, &cli.scope, &segment)
        }
        Commands::Invoke {
            name,
            action,
            scope_code,
            segment,
        } => {
            let outcome = api.invoke(&name, &action, &scope_code, &segment);
            report_edit(outcome, &name)
        }
        Commands::Show {
            name,
            segments,
            json,
        } => handle_show(&api, &name, &cli.scope, segments, json),
        Commands::Set { name, value } => {
            let result = api.set_value(&name, Scope::parse(&cli.scope), &value)?;
            print!("{}", render_messages(&result.messages, false));
            Ok(())
        }
        Commands::Config { .. } => {
            print!("{}", render_config(&config, &data_dir));
            Ok(())
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { Level::DEBUG } else { Level::WARN };
    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .with_env_var(LOG_ENV)
        .from_env_lossy();

    // A second install (e.g. in tests) is harmless
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

fn edit(
    api: &mut EnvUpdateApi<FileStore>,
    name: &str,
    action: Action,
    scope_code: &str,
    segment: &str,
) -> Result<()> {
    let request = EditRequest::new(name, action, Scope::parse(scope_code), segment);
    let outcome = api.update(&request);
    report_edit(outcome, name)
}

/// Prints the result string and turns a failed edit into an error.
fn report_edit(outcome: Result<EditResult>, name: &str) -> Result<()> {
    let result = outcome?;
    println!("{}", result.content_string());
    if result.success {
        return Ok(());
    }
    let reason = result
        .failure
        .map(|failure| failure.to_string())
        .unwrap_or_else(|| "unknown failure".to_string());
    Err(EnvUpdateError::Api(format!(
        "Could not update {}: {}",
        name, reason
    )))
}

fn handle_show(
    api: &EnvUpdateApi<FileStore>,
    name: &str,
    scope_code: &str,
    as_segments: bool,
    as_json: bool,
) -> Result<()> {
    let result = api.show(name, Scope::parse(scope_code))?;
    if as_json {
        let json = render_json(&result).map_err(EnvUpdateError::Serialization)?;
        println!("{}", json);
        return Ok(());
    }
    print!("{}", render_value(&result, as_segments));
    eprint!("{}", render_messages(&result.messages, true));
    Ok(())
}
