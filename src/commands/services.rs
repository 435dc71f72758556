use anyhow::Result;
use clap::Subcommand;
use owo_colors::OwoColorize;
use veloria_core::services::ServiceInput;
use veloria_core::validation::validate_service;

use super::{Ctx, ensure_valid};
use crate::render::Render;

#[derive(Subcommand)]
pub enum ServicesCommand {
    /// List services
    List {
        /// Include inactive services
        #[arg(short, long)]
        all: bool,
    },
    /// Add a service
    Add {
        name: String,

        /// Duration in minutes
        #[arg(short, long)]
        duration: i64,

        /// Price in roubles
        #[arg(short, long)]
        price: i64,

        #[arg(long, default_value = "")]
        description: String,
    },
    /// Change an existing service
    Edit {
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(short, long)]
        duration: Option<i64>,

        #[arg(short, long)]
        price: Option<i64>,

        #[arg(long)]
        description: Option<String>,
    },
    /// Switch a service between active and inactive
    Toggle { id: String },
    /// Delete a service. Existing bookings keep its name.
    Remove { id: String },
}

pub fn run(ctx: &Ctx, command: ServicesCommand) -> Result<()> {
    let services = &ctx.app.services;

    match command {
        ServicesCommand::List { all } => {
            let list = if all { services.load() } else { services.active() };
            if list.is_empty() {
                println!("{}", ctx.t("services.empty").dimmed());
            }
            for service in list {
                println!("{}", service.render());
            }
        }
        ServicesCommand::Add {
            name,
            duration,
            price,
            description,
        } => {
            ensure_valid(validate_service(ctx.lang, &name, duration, price))?;
            let input = ServiceInput {
                description: description.trim().to_string(),
                ..ServiceInput::new(name.trim(), to_u32(duration)?, to_u32(price)?)
            };
            let service = services.add(input)?;
            println!("{} {}", "+".green(), service.render());
        }
        ServicesCommand::Edit {
            id,
            name,
            duration,
            price,
            description,
        } => {
            let existing = services
                .get(&id)
                .ok_or_else(|| anyhow::anyhow!("Service '{}' not found", id))?;

            let name = name.unwrap_or_else(|| existing.name.clone());
            let duration = duration.unwrap_or(i64::from(existing.duration_min));
            let price = price.unwrap_or(i64::from(existing.price_rub));
            ensure_valid(validate_service(ctx.lang, &name, duration, price))?;

            let input = ServiceInput {
                name: name.trim().to_string(),
                duration_min: to_u32(duration)?,
                price_rub: to_u32(price)?,
                description: description.map_or(existing.description, |d| d.trim().to_string()),
                active: existing.active,
            };
            if let Some(service) = services.update(&id, input)? {
                println!("{} {}", "~".yellow(), service.render());
            }
        }
        ServicesCommand::Toggle { id } => match services.toggle_active(&id)? {
            Some(service) => println!("{} {}", "~".yellow(), service.render()),
            None => anyhow::bail!("Service '{}' not found", id),
        },
        ServicesCommand::Remove { id } => {
            let Some(service) = services.get(&id) else {
                anyhow::bail!("Service '{}' not found", id);
            };
            services.remove(&id)?;
            println!("{} {}", "-".red(), service.render());
        }
    }

    Ok(())
}

fn to_u32(n: i64) -> Result<u32> {
    u32::try_from(n).map_err(|_| anyhow::anyhow!("Value {} is out of range", n))
}
