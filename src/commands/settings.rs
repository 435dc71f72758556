//! Language and subscription plan.

use anyhow::Result;
use owo_colors::OwoColorize;
use veloria_core::i18n::Lang;
use veloria_core::plan::PlanId;

use super::Ctx;

pub fn lang(ctx: &Ctx, requested: Option<&str>) -> Result<()> {
    match requested {
        None => println!("{}", ctx.lang),
        Some(code) => {
            let lang: Lang = code.parse()?;
            ctx.app.language.save(lang)?;
            println!("{} {}", "Language:".dimmed(), lang);
        }
    }
    Ok(())
}

pub fn plan(ctx: &Ctx, requested: Option<&str>) -> Result<()> {
    let plans = &ctx.app.plan;

    match requested.map(str::trim) {
        None => {
            let current = plans.load();
            for plan in [PlanId::Lite, PlanId::Pro, PlanId::Elite] {
                let marker = if plan == current { "*" } else { " " };
                let line = format!("{} {:<6} {}", marker, plan.to_string(), price_label(ctx, plan));
                if plan == current {
                    println!("{}", line.bold());
                } else {
                    println!("{}", line.dimmed());
                }
            }
        }
        Some("cancel") => {
            plans.cancel()?;
            println!("{} {}", "Plan:".dimmed(), plans.load());
        }
        Some(code) => {
            let plan: PlanId = code.parse()?;
            plans.save(plan)?;
            println!("{} {}", "Plan:".dimmed(), plan);
        }
    }
    Ok(())
}

fn price_label(ctx: &Ctx, plan: PlanId) -> String {
    match plan.monthly_price_rub() {
        0 => ctx.t("subscription.free"),
        price => format!("{} RUB {}", price, ctx.t("subscription.perMonth")),
    }
}
