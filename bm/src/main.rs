use std::path::Path;
use std::sync::Arc;

use clap::Parser;
use colored::*;
use eyre::{Context, Result, eyre};
use tracing::info;
use tracing_subscriber::EnvFilter;

use baristamsg::cli::{Cli, Command, KindArg};
use baristamsg::config::Config;
use baristamsg::{ContentApiClient, Event, EventOption, MessageBuilder, TemplateResolver, TemplatedMessage};

fn setup_logging(cli_log_level: Option<&str>, config_log_level: Option<&str>) -> Result<()> {
    // Priority: CLI --log-level > config file > RUST_LOG > info
    let filter = match cli_log_level.or(config_log_level) {
        Some(level) => EnvFilter::try_new(level).context(format!("Invalid log level: {}", level))?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
    Ok(())
}

fn resolver_from_config(config: &Config) -> Result<TemplateResolver> {
    let client = ContentApiClient::from_config(&config.content).context("Failed to create content API client")?;
    Ok(TemplateResolver::new(Arc::new(client), &config.service_instance_prefix))
}

fn load_event(path: Option<&Path>) -> Result<Event> {
    let path = path.ok_or_else(|| eyre!("--event <FILE> is required for this message kind"))?;
    let content = std::fs::read_to_string(path).context(format!("Failed to read event file {}", path.display()))?;
    serde_json::from_str(&content).context(format!("Failed to parse event file {}", path.display()))
}

async fn render(
    builder: &MessageBuilder,
    kind: KindArg,
    event: Option<&Path>,
    message: Option<String>,
    max_orders: u32,
    event_names: Vec<String>,
) -> Result<TemplatedMessage> {
    let message = match kind {
        KindArg::WrongOrder => {
            let event = load_event(event)?;
            let original = message.ok_or_else(|| eyre!("--message is required for wrong-order"))?;
            builder.wrong_order(&original, &event.selection.items).await?
        }
        KindArg::HelpPrivacy => builder.help(&load_event(event)?).await?,
        KindArg::ReadyToOrder => {
            let event = load_event(event)?;
            builder.ready_to_order(&event, &event.selection.items, max_orders).await?
        }
        KindArg::ReadyToOrderWithoutEmail => {
            let event = load_event(event)?;
            builder
                .ready_to_order_without_email(&event, &event.selection.items, max_orders)
                .await?
        }
        KindArg::EventRegistration => {
            let events: Vec<EventOption> = event_names.into_iter().map(|name| EventOption { name }).collect();
            builder.event_registration(&events).await?
        }
    };
    Ok(message)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Read the log level first so config fallback warnings reach the subscriber
    let config_log_level = Config::load_log_level(cli.config.as_ref());
    setup_logging(cli.log_level.as_deref(), config_log_level.as_deref()).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    info!(prefix = %config.service_instance_prefix, "bm starting");

    match cli.command {
        Command::Templates => {
            let resolver = resolver_from_config(&config)?;
            let templates = resolver.fetch_templates().await?;
            if templates.is_empty() {
                println!("No templates found for prefix '{}'", resolver.prefix());
            } else {
                for template in templates {
                    println!(
                        "{} {} {}",
                        template.sid.yellow(),
                        template.friendly_name,
                        template.language.unwrap_or_default().dimmed()
                    );
                }
            }
        }
        Command::Name {
            kind,
            options,
            max_orders,
        } => {
            let name = baristamsg::template_name(&config.service_instance_prefix, kind.to_kind(max_orders), options);
            println!("{}", name);
        }
        Command::Resolve {
            kind,
            options,
            max_orders,
        } => {
            let resolver = resolver_from_config(&config)?;
            match resolver.resolve(kind.to_kind(max_orders), options).await {
                Ok(template) => println!("{} {} {}", "✓".green(), template.friendly_name, template.sid.cyan()),
                Err(e) if e.is_not_found() => {
                    eprintln!(
                        "{} No template named {} among templates with prefix '{}'",
                        "✗".red(),
                        e.template_name().unwrap_or_default().yellow(),
                        resolver.prefix()
                    );
                    std::process::exit(2);
                }
                Err(e) => return Err(e).context("Failed to resolve template"),
            }
        }
        Command::Render {
            kind,
            event,
            message,
            max_orders,
            event_names,
        } => {
            let builder = MessageBuilder::new(resolver_from_config(&config)?);
            let rendered = render(&builder, kind, event.as_deref(), message, max_orders, event_names).await?;
            println!("{}", serde_json::to_string_pretty(&rendered)?);
        }
    }

    Ok(())
}
