use anyhow::Result;
use clap::Args;
use owo_colors::OwoColorize;
use veloria_core::booking::{BookingDraft, BookingStatus};
use veloria_core::calendar::dates::{add_minutes_to_hhmm, date_from_query, format_iso};

use super::{Ctx, parse_time_arg};
use crate::render::render_event;

#[derive(Args)]
pub struct BookArgs {
    /// Day of the booking (YYYY-MM-DD); today when missing or malformed
    #[arg(short, long)]
    date: Option<String>,

    /// Start time (HH:MM)
    #[arg(short, long, default_value = "00:00")]
    time: String,

    /// Prefill name, phone and email from this client
    #[arg(long)]
    client: Option<String>,

    #[arg(short, long)]
    name: Option<String>,

    #[arg(long)]
    phone: Option<String>,

    #[arg(long)]
    email: Option<String>,

    /// Who performs the service
    #[arg(short, long)]
    master: Option<String>,

    /// new, confirmed or cancelled
    #[arg(long, default_value = "new")]
    status: BookingStatus,

    #[arg(long)]
    note: Option<String>,

    /// Service name; repeat for several services
    #[arg(short, long = "service")]
    services: Vec<String>,

    /// Total in roubles, replacing the sum of the service prices
    #[arg(long)]
    total: Option<String>,
}

pub fn run(ctx: &Ctx, args: BookArgs) -> Result<()> {
    let date = date_from_query(args.date.as_deref(), ctx.today);
    let time = parse_time_arg(&args.time)?;
    let mut draft = BookingDraft::new(ctx.lang, date);
    draft.planned = format!("{}T{}", format_iso(date), time);

    if let Some(id) = &args.client {
        let client = ctx
            .app
            .clients
            .get(id)
            .ok_or_else(|| anyhow::anyhow!("Client '{}' not found", id))?;
        draft.prefill_from_client(&client);
    }

    if let Some(name) = args.name {
        draft.client_name = name;
    }
    if let Some(phone) = args.phone {
        draft.phone = phone;
    }
    if let Some(email) = args.email {
        draft.email = email;
    }
    if let Some(master) = args.master {
        draft.master = master;
    }
    draft.status = args.status;
    draft.note = args.note.unwrap_or_default();
    draft.total_override = args.total;

    if !args.services.is_empty() {
        let found = ctx.app.services.find_by_names(&args.services);
        let missing: Vec<&String> = args
            .services
            .iter()
            .filter(|n| !found.iter().any(|s| s.name.trim().eq_ignore_ascii_case(n.trim())))
            .collect();
        if !missing.is_empty() {
            let missing: Vec<&str> = missing.iter().map(|s| s.as_str()).collect();
            anyhow::bail!("Unknown or inactive service(s): {}", missing.join(", "));
        }
        draft.services = found;
    }

    let totals = draft.totals();
    let total_rub = draft.total_rub();
    let input = draft.into_event_input(ctx.lang, ctx.today);
    let ends = add_minutes_to_hhmm(&input.time, totals.duration_min as i64);
    let event = ctx.app.events.add(input)?;

    println!("{}", ctx.t("booking.alert.created").green());
    println!("   {} {}", event.date, render_event(&event, ctx.lang));
    if totals.duration_min > 0 {
        println!("   {} - {}, {} min", event.time, ends, totals.duration_min);
    }
    println!("   {} RUB", total_rub);

    Ok(())
}
