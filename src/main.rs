mod cli;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;

use cli::args::{Cli, Commands};
use cli::handlers;
use taqwim::calendar::{Clock, EventRegistry, FixedClock, SystemClock};
use taqwim::config::AppConfig;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let mut config = AppConfig::load().context("Loading config")?;
    let registry = EventRegistry::builtin();

    // --date pins "today" for every command
    let clock: Box<dyn Clock> = match cli.date {
        Some(date) => Box::new(FixedClock(date)),
        None => Box::new(SystemClock),
    };

    match cli.command {
        Some(Commands::Today { json }) => {
            handlers::handle_today(clock.as_ref(), &config, &registry, json)?;
        }
        Some(Commands::Month { year, month, json }) => {
            handlers::handle_month(clock.as_ref(), &config, &registry, year, month, json)?;
        }
        Some(Commands::Convert { date, to_gregorian }) => {
            handlers::handle_convert(&config, &date, to_gregorian)?;
        }
        Some(Commands::Events {
            month,
            category,
            json,
        }) => {
            handlers::handle_events(&config, &registry, month, category.as_deref(), json)?;
        }
        Some(Commands::Next) => {
            handlers::handle_next(clock.as_ref(), &config, &registry)?;
        }
        Some(Commands::Context { question }) => {
            handlers::handle_context(clock.as_ref(), &config, &registry, question.as_deref())?;
        }
        Some(Commands::Config { locale, offset }) => {
            handlers::handle_config(&mut config, locale.as_deref(), offset)?;
        }

        // No subcommand → launch TUI
        None => {
            tui::app::run(config, registry, clock)?;
        }
    }

    Ok(())
}
