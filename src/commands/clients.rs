use anyhow::Result;
use clap::{Args, Subcommand};
use owo_colors::OwoColorize;
use veloria_core::clients::{ClientInput, Loyalty, LoyaltyFilter};
use veloria_core::validation::validate_client_name;

use super::{Ctx, ensure_valid, parse_date_arg};
use crate::render::{Render, client_details};

#[derive(Subcommand)]
pub enum ClientsCommand {
    /// List clients, optionally filtered
    List {
        /// Match against name, phone or email
        #[arg(short, long, default_value = "")]
        query: String,

        /// all, vip, regular or new
        #[arg(short, long, default_value = "all")]
        loyalty: LoyaltyFilter,
    },
    /// Show one client with every field
    Show { id: String },
    /// Add a client
    Add {
        name: String,

        #[command(flatten)]
        fields: ClientFields,
    },
    /// Change fields of an existing client
    Edit {
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[command(flatten)]
        fields: ClientFields,
    },
    /// Delete a client
    Remove { id: String },
}

#[derive(Args)]
pub struct ClientFields {
    #[arg(long)]
    phone: Option<String>,

    #[arg(long)]
    email: Option<String>,

    /// Unset, VIP, Regular or New
    #[arg(long)]
    loyalty: Option<Loyalty>,

    /// YYYY-MM-DD
    #[arg(long)]
    birthday: Option<String>,

    /// YYYY-MM-DD
    #[arg(long)]
    last_visit: Option<String>,

    #[arg(long)]
    tags: Option<String>,

    #[arg(long)]
    allergies: Option<String>,

    #[arg(long)]
    preferences: Option<String>,

    #[arg(long)]
    notes: Option<String>,
}

impl ClientFields {
    /// Overlay the given flags on `input`. Blank values clear a field.
    fn apply(self, mut input: ClientInput) -> Result<ClientInput> {
        let text = |value: Option<String>, current: Option<String>| match value {
            Some(v) if v.trim().is_empty() => None,
            Some(v) => Some(v.trim().to_string()),
            None => current,
        };
        let date = |value: Option<String>, current: Option<String>| -> Result<Option<String>> {
            match value {
                Some(v) if v.trim().is_empty() => Ok(None),
                Some(v) => Ok(Some(parse_date_arg(&v)?.format("%Y-%m-%d").to_string())),
                None => Ok(current),
            }
        };

        input.phone = text(self.phone, input.phone);
        input.email = text(self.email, input.email);
        input.tags = text(self.tags, input.tags);
        input.allergies = text(self.allergies, input.allergies);
        input.preferences = text(self.preferences, input.preferences);
        input.notes = text(self.notes, input.notes);
        input.birthday = date(self.birthday, input.birthday)?;
        input.last_visit = date(self.last_visit, input.last_visit)?;
        if let Some(loyalty) = self.loyalty {
            input.loyalty = loyalty;
        }
        Ok(input)
    }
}

pub fn run(ctx: &Ctx, command: ClientsCommand) -> Result<()> {
    let clients = &ctx.app.clients;

    match command {
        ClientsCommand::List { query, loyalty } => {
            let found = clients.search(&query, loyalty);
            if found.is_empty() {
                println!("{}", ctx.t("clients.empty").dimmed());
            }
            for client in found {
                println!("{}", client.render());
            }
        }
        ClientsCommand::Show { id } => {
            let client = clients
                .get(&id)
                .ok_or_else(|| anyhow::anyhow!("Client '{}' not found", id))?;
            println!("{}", client_details(&client));
        }
        ClientsCommand::Add { name, fields } => {
            ensure_valid(validate_client_name(ctx.lang, &name))?;
            let input = fields.apply(ClientInput::new(name.trim()))?;
            let client = clients.add(input)?;
            println!("{} {}", "+".green(), client.render());
        }
        ClientsCommand::Edit { id, name, fields } => {
            let existing = clients
                .get(&id)
                .ok_or_else(|| anyhow::anyhow!("Client '{}' not found", id))?;

            let mut input = fields.apply(ClientInput::from(existing))?;
            if let Some(name) = name {
                ensure_valid(validate_client_name(ctx.lang, &name))?;
                input.name = name.trim().to_string();
            }

            match clients.update(&id, input)? {
                Some(client) => println!("{} {}", "~".yellow(), client.render()),
                None => anyhow::bail!("Client '{}' not found", id),
            }
        }
        ClientsCommand::Remove { id } => {
            let Some(client) = clients.get(&id) else {
                anyhow::bail!("Client '{}' not found", id);
            };
            clients.remove(&id)?;
            println!("{} {}", "-".red(), client.render());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields() -> ClientFields {
        ClientFields {
            phone: None,
            email: None,
            loyalty: None,
            birthday: None,
            last_visit: None,
            tags: None,
            allergies: None,
            preferences: None,
            notes: None,
        }
    }

    #[test]
    fn apply_overlays_and_clears() {
        let existing = ClientInput {
            phone: Some("+7 900".into()),
            notes: Some("old".into()),
            ..ClientInput::new("Anna")
        };
        let input = ClientFields {
            phone: Some("  ".into()),
            loyalty: Some(Loyalty::Vip),
            birthday: Some("1990-05-01".into()),
            ..fields()
        }
        .apply(existing)
        .unwrap();

        assert_eq!(input.phone, None);
        assert_eq!(input.notes.as_deref(), Some("old"));
        assert_eq!(input.loyalty, Loyalty::Vip);
        assert_eq!(input.birthday.as_deref(), Some("1990-05-01"));
    }

    #[test]
    fn apply_rejects_bad_dates() {
        let bad = ClientFields {
            last_visit: Some("31.02.2026".into()),
            ..fields()
        };
        assert!(bad.apply(ClientInput::new("Anna")).is_err());
    }
}
