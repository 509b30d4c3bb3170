//! CLI entrypoint for content-gateway
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use gateway_application::ContentGateway;
use gateway_domain::{ContactSubmission, ContentKind, OutputFormat, get_excerpt};
use gateway_infrastructure::{ConfigLoader, FileLoggingConfig, ReqwestHttpClient};
use gateway_presentation::{Cli, Command, ConsoleFormatter, ProgressReporter, TableRow};
use serde::Serialize;
use serde_json::json;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

type Gateway = ContentGateway<ReqwestHttpClient>;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(ExitCode::SUCCESS);
    }

    // Load configuration before logging so [logging] can take effect
    let mut file_config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    let _log_guard = init_logging(cli.verbose, &file_config.logging)?;

    if let Some(site_url) = &cli.site_url {
        file_config.gateway.site_url = site_url.clone();
    }
    file_config.validate().context("Invalid configuration")?;

    if !file_config.output.color {
        colored::control::set_override(false);
    }

    let format: OutputFormat = cli
        .format
        .map(Into::into)
        .or(file_config.output.format)
        .unwrap_or_default();

    let Some(command) = cli.command else {
        bail!("No command given. Run with --help for usage.");
    };

    // === Dependency Injection ===
    let client = Arc::new(ReqwestHttpClient::new(file_config.gateway.site_url.clone())?);
    let mut gateway = ContentGateway::new(client, file_config.to_gateway_config());
    if !cli.quiet && format == OutputFormat::Table {
        gateway = gateway.with_progress(Arc::new(ProgressReporter::new()));
    }

    info!("Using content proxy at {}", file_config.gateway.site_url);

    run(command, &gateway, format).await
}

/// Initialize tracing from `-v` count, falling back to `[logging].level`
fn init_logging(verbose: u8, logging: &FileLoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => match &logging.level {
            Some(level) => EnvFilter::try_new(level)
                .with_context(|| format!("Invalid logging.level '{}'", level))?,
            None => EnvFilter::new("warn"),
        },
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let console = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);
    let registry = tracing_subscriber::registry().with(filter).with(console);

    match &logging.file {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "content-gateway.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(writer),
                )
                .init();
            Ok(Some(guard))
        }
        None => {
            registry.init();
            Ok(None)
        }
    }
}

async fn run(command: Command, gateway: &Gateway, format: OutputFormat) -> Result<ExitCode> {
    match command {
        Command::List { kind, limit } => {
            match kind {
                ContentKind::Services => emit_list(format, "Services", &gateway.get_services(limit).await),
                ContentKind::Cases => emit_list(format, "Case studies", &gateway.get_cases(limit).await),
                ContentKind::Solutions => {
                    emit_list(format, "Solutions", &gateway.get_solutions(limit).await)
                }
                ContentKind::Tools => emit_list(format, "Tools", &gateway.get_tools(limit).await),
                ContentKind::Testimonials => {
                    emit_list(format, "Testimonials", &gateway.get_testimonials(limit).await)
                }
                ContentKind::Team => emit_list(format, "Team", &gateway.get_team_members(limit).await),
                ContentKind::Posts => emit_list(format, "Blog posts", &gateway.get_blog_posts(limit).await),
            }
            Ok(ExitCode::SUCCESS)
        }

        Command::Show { kind, slug } => {
            if !kind.has_detail_pages() {
                bail!("{} have no detail pages; use `list {}`", kind, kind);
            }

            let found = match kind {
                ContentKind::Services => emit_item(format, "Service", gateway.get_service_by_slug(&slug).await),
                ContentKind::Cases => emit_item(format, "Case study", gateway.get_case_by_slug(&slug).await),
                ContentKind::Solutions => {
                    emit_item(format, "Solution", gateway.get_solution_by_slug(&slug).await)
                }
                ContentKind::Tools => emit_item(format, "Tool", gateway.get_tool_by_slug(&slug).await),
                ContentKind::Posts => emit_item(format, "Blog post", gateway.get_post_by_slug(&slug).await),
                ContentKind::Testimonials | ContentKind::Team => false,
            };

            if found {
                Ok(ExitCode::SUCCESS)
            } else {
                eprintln!("No {} found with slug '{}'", kind, slug.trim());
                Ok(ExitCode::FAILURE)
            }
        }

        Command::Terms { taxonomy } => {
            let terms = gateway.get_terms(taxonomy).await;
            emit_list(format, &format!("Terms of {}", taxonomy), &terms);
            Ok(ExitCode::SUCCESS)
        }

        Command::TermName { taxonomy, id } => {
            let name = gateway.get_category_name(id, taxonomy).await;
            match format {
                OutputFormat::Json => println!(
                    "{}",
                    ConsoleFormatter::format_json(&json!({"id": id, "taxonomy": taxonomy, "name": name}))
                ),
                OutputFormat::Table => println!("{}", name),
            }
            Ok(ExitCode::SUCCESS)
        }

        Command::Excerpt { text, max } => {
            println!("{}", get_excerpt(&text, max));
            Ok(ExitCode::SUCCESS)
        }

        Command::Contact {
            name,
            email,
            message,
            phone,
            company,
            service,
            budget,
        } => {
            let submission = ContactSubmission {
                phone: phone.unwrap_or_default(),
                company: company.unwrap_or_default(),
                service: service.unwrap_or_default(),
                budget: budget.unwrap_or_default(),
                ..ContactSubmission::new(name, email, message)
            };
            let result = gateway.submit_contact_form(&submission).await;
            emit_result(format, &result, ConsoleFormatter::format_submission(&result), result.success)
        }

        Command::Subscribe { email } => {
            let result = gateway.subscribe_newsletter(&email).await;
            emit_result(format, &result, ConsoleFormatter::format_submission(&result), result.success)
        }

        Command::Health => {
            let status = gateway.check_api_health().await;
            emit_result(format, &status, ConsoleFormatter::format_health(&status), status.healthy)
        }

        Command::Overview => overview(gateway, format).await,
    }
}

/// Fetch every collection concurrently; the fetches share nothing
async fn overview(gateway: &Gateway, format: OutputFormat) -> Result<ExitCode> {
    let (services, cases, solutions, tools, testimonials, team, posts) = tokio::join!(
        gateway.get_services(None),
        gateway.get_cases(None),
        gateway.get_solutions(None),
        gateway.get_tools(None),
        gateway.get_testimonials(None),
        gateway.get_team_members(None),
        gateway.get_blog_posts(None),
    );

    let counts = [
        (ContentKind::Services.collection(), services.len()),
        (ContentKind::Cases.collection(), cases.len()),
        (ContentKind::Solutions.collection(), solutions.len()),
        (ContentKind::Tools.collection(), tools.len()),
        (ContentKind::Testimonials.collection(), testimonials.len()),
        (ContentKind::Team.collection(), team.len()),
        (ContentKind::Posts.collection(), posts.len()),
    ];

    match format {
        OutputFormat::Json => {
            let map: serde_json::Map<String, serde_json::Value> = counts
                .iter()
                .map(|(name, count)| (name.to_string(), json!(count)))
                .collect();
            println!("{}", ConsoleFormatter::format_json(&map));
        }
        OutputFormat::Table => print!("{}", ConsoleFormatter::format_overview(&counts)),
    }

    Ok(ExitCode::SUCCESS)
}

fn emit_list<T: TableRow + Serialize>(format: OutputFormat, title: &str, items: &[T]) {
    match format {
        OutputFormat::Json => println!("{}", ConsoleFormatter::format_json(items)),
        OutputFormat::Table => print!("{}", ConsoleFormatter::format_table(title, items)),
    }
}

/// Print `item` if present; returns whether it was
fn emit_item<T: Serialize>(format: OutputFormat, title: &str, item: Option<T>) -> bool {
    let Some(item) = item else {
        return false;
    };
    match format {
        OutputFormat::Json => println!("{}", ConsoleFormatter::format_json(&item)),
        OutputFormat::Table => print!("{}", ConsoleFormatter::format_detail(title, &item)),
    }
    true
}

fn emit_result<T: Serialize>(format: OutputFormat, value: &T, text: String, ok: bool) -> Result<ExitCode> {
    match format {
        OutputFormat::Json => println!("{}", ConsoleFormatter::format_json(value)),
        OutputFormat::Table => print!("{}", text),
    }
    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
