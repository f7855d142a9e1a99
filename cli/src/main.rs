//! CLI entrypoint for jsctx
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use jsctx_application::ProjectContext;
use jsctx_domain::config::parse_json;
use jsctx_domain::{ConfigEntry, JavaScriptContentAssist, OutputFormat};
use jsctx_infrastructure::{ConfigLoader, LocalFileStore};
use jsctx_presentation::{Cli, Command, ConsoleFormatter, JsonFormatter, OutputFormatter};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let Some(command) = cli.command else {
        bail!("A command is required. Run with --help for usage.");
    };

    // === Configuration ===
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?
    };
    config.validate()?;

    if !config.output.color {
        colored::control::set_override(false);
    }

    let format = cli
        .output
        .map(OutputFormat::from)
        .or(config.output.format)
        .unwrap_or_default();
    let formatter: Box<dyn OutputFormatter> = match format {
        OutputFormat::Text => Box::new(ConsoleFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    };

    // === Dependency Injection ===
    let path = command
        .file()
        .canonicalize()
        .with_context(|| format!("Cannot resolve {}", command.file().display()))?;
    let location = path.to_string_lossy().into_owned();

    let context = ProjectContext::new(
        Arc::new(LocalFileStore::new()),
        config.project.to_project_options(),
    );
    context.init_from(&location).await;
    let root = context.project_ready().await;
    info!(
        "Project root: {}",
        root.as_ref().map_or("none", |r| r.as_str())
    );

    let output = match command {
        Command::Env { .. } => {
            let env = context.computed_environment().await;
            formatter.format_environment(root.as_ref(), &env)
        }
        Command::Lint { .. } => {
            let options = context.lint_options().await;
            formatter.format_config("Lint", options.as_ref())
        }
        Command::Format { .. } => {
            let options = context.formatting_options().await;
            formatter.format_config("Formatting", options.as_ref())
        }
        Command::Ecma { .. } => formatter.format_ecma(context.ecma_level().await),
        Command::Complete { offset, prefix, .. } => {
            let buffer = tokio::fs::read_to_string(&path)
                .await
                .with_context(|| format!("Cannot read {}", path.display()))?;
            let prefix =
                prefix.unwrap_or_else(|| JavaScriptContentAssist::prefix_at(&buffer, offset));
            debug!("Completing {:?} at offset {}", prefix, offset);
            let proposals = JavaScriptContentAssist::proposals(&prefix, &buffer, offset);
            formatter.format_proposals(&proposals)
        }
        Command::Update {
            name,
            create,
            values,
            ..
        } => {
            let values: Value =
                serde_json::from_str(&values).context("Values must be a JSON object")?;
            if !values.is_object() {
                bail!("Values must be a JSON object");
            }
            context.update_file(&name, create, values).await?;
            let updated = context.fetch_file(&name, None).await;
            let entry = updated.and_then(|file| {
                parse_json(&name, &file.contents)
                    .ok()
                    .map(|values| ConfigEntry::new(file, values))
            });
            formatter.format_config(&name, entry.as_ref())
        }
    };

    print!("{}", output);

    Ok(())
}
