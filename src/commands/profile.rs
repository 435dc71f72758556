use anyhow::Result;
use clap::Subcommand;
use owo_colors::OwoColorize;
use veloria_core::profile::UserProfile;
use veloria_core::validation::{
    validate_forgot_password, validate_login, validate_profile, validate_signup,
};

use super::{Ctx, ensure_valid};

#[derive(Subcommand)]
pub enum ProfileCommand {
    /// Show the profile
    Show,
    /// Change name and/or email
    Set {
        #[arg(short, long)]
        name: Option<String>,

        #[arg(short, long)]
        email: Option<String>,
    },
    /// Forget the stored name and email
    Clear,
}

pub fn run(ctx: &Ctx, command: Option<ProfileCommand>) -> Result<()> {
    let profile = &ctx.app.profile;

    match command.unwrap_or(ProfileCommand::Show) {
        ProfileCommand::Show => {
            let current = profile.load();
            println!("{}", current.name.bold());
            if !current.email.is_empty() {
                println!("{}", current.email);
            }
            let state = if profile.is_logged_in() {
                "logged in".green().to_string()
            } else {
                "logged out".dimmed().to_string()
            };
            println!("{}", state);
        }
        ProfileCommand::Set { name, email } => {
            let current = profile.load();
            let updated = UserProfile {
                name: name.unwrap_or(current.name),
                email: email.unwrap_or(current.email),
            };
            ensure_valid(validate_profile(ctx.lang, &updated.name, &updated.email))?;
            profile.save(&updated)?;
            println!("{}", ctx.t("settings.notice.profileUpdated").green());
        }
        ProfileCommand::Clear => {
            profile.clear()?;
        }
    }

    Ok(())
}

pub fn login(ctx: &Ctx, email: &str, password: &str, name: Option<&str>, remember: bool) -> Result<()> {
    ensure_valid(validate_login(ctx.lang, email.trim(), password))?;
    ctx.app.profile.login(email, name, remember)?;

    let profile = ctx.app.profile.load();
    println!("Logged in as {}", profile.name.bold());
    if !remember {
        println!("{}", "Session only: the login ends with this command.".dimmed());
    }
    Ok(())
}

/// Mock sign-up: a valid form logs the new account straight in.
pub fn signup(
    ctx: &Ctx,
    name: &str,
    email: &str,
    password: &str,
    confirm: &str,
    remember: bool,
) -> Result<()> {
    ensure_valid(validate_signup(ctx.lang, name, email.trim(), password, confirm))?;
    ctx.app.profile.login(email, Some(name), remember)?;

    println!("Signed up as {}", name.trim().bold());
    Ok(())
}

/// Mock password reset; nothing is sent.
pub fn forgot_password(ctx: &Ctx, email: &str) -> Result<()> {
    ensure_valid(validate_forgot_password(ctx.lang, email.trim()))?;
    println!("A reset link would be sent to {}", email.trim().bold());
    Ok(())
}

pub fn logout(ctx: &Ctx) -> Result<()> {
    ctx.app.profile.logout()?;
    println!("Logged out");
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use veloria_core::Veloria;
    use veloria_core::i18n::Lang;

    use super::*;

    fn ctx() -> Ctx {
        Ctx {
            app: Veloria::in_memory(),
            lang: Lang::En,
            today: NaiveDate::from_ymd_opt(2026, 10, 18).unwrap(),
        }
    }

    #[test]
    fn signup_logs_in_with_the_given_name() {
        let ctx = ctx();
        signup(&ctx, "Anna", "anna@example.com", "secret1", "secret1", true).unwrap();

        assert!(ctx.app.profile.is_logged_in());
        let profile = ctx.app.profile.load();
        assert_eq!(profile.name, "Anna");
        assert_eq!(profile.email, "anna@example.com");
    }

    #[test]
    fn signup_rejects_mismatched_passwords() {
        let ctx = ctx();
        assert!(signup(&ctx, "Anna", "anna@example.com", "secret1", "secret2", true).is_err());
        assert!(signup(&ctx, " ", "anna@example.com", "secret1", "secret1", true).is_err());
        assert!(!ctx.app.profile.is_logged_in());
    }

    #[test]
    fn forgot_password_needs_a_valid_email() {
        let ctx = ctx();
        assert!(forgot_password(&ctx, "anna@example.com").is_ok());
        assert!(forgot_password(&ctx, "not an email").is_err());
        assert!(forgot_password(&ctx, "").is_err());
    }
}
