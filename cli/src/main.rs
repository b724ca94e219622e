//! CLI entrypoint for lessonsmith
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::{CommandFactory, Parser};
use lessonsmith_application::{
    ModuleRequest, NoProgress, PlanModuleInput, PlanModuleUseCase,
    PopulateModuleInput, PopulateModuleUseCase, PopulationProgress, UploadCourseInput,
    UploadCourseUseCase,
};
use lessonsmith_domain::{ConfigIssue, PageNaming};
use lessonsmith_infrastructure::{ConfigLoader, FileConfig, LocalLessonSource, WebDriverSession};
use lessonsmith_presentation::{
    Cli, Command, ConsoleFormatter, PlanFormatter, ProgressReporter, SimpleProgress,
};
use std::fs;
use std::io::IsTerminal;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Crates whose debug output goes to the log file
const FILE_FILTER: &str =
    "warn,lessonsmith=debug,lessonsmith_application=debug,lessonsmith_infrastructure=debug";

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    let Some(command) = cli.command.clone() else {
        Cli::command().print_help()?;
        return Ok(());
    };

    if let Some(path) = &cli.config
        && !path.exists()
    {
        bail!("Config file not found: {}", path.display());
    }
    let config = ConfigLoader::load(cli.config.as_deref())
        .map_err(|e| anyhow!("Failed to load configuration: {}", e))?;

    let _guard = init_logging(cli.verbose, &config)?;
    info!("Starting lessonsmith");

    check_config(&config, command.is_upload())?;

    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    // === Dependency Injection ===
    let source = Arc::new(
        LocalLessonSource::new(&config.catalog_settings())
            .context("Invalid asset prefix in [course]")?,
    );
    let settings = config.executor_settings();

    match command {
        Command::Plan {
            path,
            start_slide,
            require_clusters,
        } => {
            let plan = PlanModuleUseCase::new(source).execute(
                &PlanModuleInput::new(&path)
                    .with_start(start_slide)
                    .with_require_clusters(require_clusters),
            )?;

            let format = config.output.plan_format(cli.output.map(Into::into));
            let formatter = ConsoleFormatter::new(settings.naming.clone());
            println!("{}", formatter.format_as(&plan, format));
        }

        Command::UploadModule {
            path,
            module,
            start_slide,
            require_clusters,
        } => {
            let mut session = attach(&config)?;
            let request = match module {
                Some(module_id) => ModuleRequest::Existing { module_id },
                None => ModuleRequest::named_after(&path),
            };
            let progress = progress(cli.quiet, &settings.naming);

            let mut use_case = PopulateModuleUseCase::new(source, settings.clone());
            let output = use_case
                .execute_with_progress(
                    &mut session,
                    PopulateModuleInput {
                        directory: path,
                        request,
                        start: start_slide,
                        require_clusters,
                    },
                    progress.as_ref(),
                )
                .await
                .inspect_err(|e| error!("Upload failed: {}", e))?;

            println!(
                "{} ({} steps, {})",
                output.module,
                output.plan.len(),
                output.state
            );
        }

        Command::UploadAll {
            path,
            require_clusters,
        } => {
            let mut session = attach(&config)?;
            let progress = progress(cli.quiet, &settings.naming);

            let mut use_case = UploadCourseUseCase::new(source, settings.clone());
            let output = use_case
                .execute_with_progress(
                    &mut session,
                    UploadCourseInput {
                        root: path,
                        require_clusters,
                    },
                    progress.as_ref(),
                )
                .await
                .inspect_err(|e| error!("Upload failed: {}", e))?;

            for uploaded in &output.sections {
                println!("{}", uploaded.section);
                for module in &uploaded.modules {
                    println!("  {}", module);
                }
            }
        }
    }

    Ok(())
}

/// Console verbosity from `-v`, plus a debug log file
fn init_logging(verbose: u8, config: &FileConfig) -> Result<WorkerGuard> {
    let console_filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let directory = &config.logging.directory;
    fs::create_dir_all(directory)
        .with_context(|| format!("Cannot create log directory {}", directory.display()))?;
    let appender = tracing_appender::rolling::never(directory, &config.logging.file_name);
    let (file_writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .with_filter(console_filter),
        )
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_writer(file_writer)
                .with_filter(EnvFilter::new(FILE_FILTER)),
        )
        .init();

    Ok(guard)
}

/// Log warnings, abort on errors
fn check_config(config: &FileConfig, upload: bool) -> Result<()> {
    let issues = if upload {
        config.validate_for_upload()
    } else {
        config.validate()
    };

    let (errors, warnings): (Vec<ConfigIssue>, Vec<ConfigIssue>) =
        issues.into_iter().partition(ConfigIssue::is_error);
    for issue in &warnings {
        warn!("{}", issue.message);
    }
    for issue in &errors {
        error!("{}", issue.message);
    }
    if let Some(first) = errors.first() {
        bail!(
            "Invalid configuration: {} ({} issue(s))",
            first.message,
            errors.len()
        );
    }
    Ok(())
}

fn attach(config: &FileConfig) -> Result<WebDriverSession> {
    let session_id = config.webdriver.session_id.as_deref().unwrap_or_default();
    let session = WebDriverSession::attach(&config.webdriver.url, session_id)?;
    info!("Attached to {}", session.session_url());
    Ok(session)
}

fn progress(quiet: bool, naming: &PageNaming) -> Box<dyn PopulationProgress> {
    if quiet {
        Box::new(NoProgress)
    } else if std::io::stderr().is_terminal() {
        Box::new(ProgressReporter::new(naming.clone()))
    } else {
        Box::new(SimpleProgress::new(naming.clone()))
    }
}
