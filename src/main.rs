mod commands;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use veloria_core::{Veloria, VeloriaConfig};

use commands::Ctx;

#[derive(Parser)]
#[command(name = "veloria")]
#[command(about = "Manage clients, services and bookings in your local veloria store")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List, add, edit and remove clients
    Clients {
        #[command(subcommand)]
        action: commands::clients::ClientsCommand,
    },
    /// Manage the service catalogue
    Services {
        #[command(subcommand)]
        action: commands::services::ServicesCommand,
    },
    /// Create a new booking
    Book(commands::book::BookArgs),
    /// Show the calendar
    Calendar {
        #[command(subcommand)]
        view: commands::calendar::CalendarCommand,
    },
    /// Show or edit the profile
    Profile {
        #[command(subcommand)]
        action: Option<commands::profile::ProfileCommand>,
    },
    /// Log in with a mock account
    Login {
        email: String,

        #[arg(short, long)]
        password: String,

        /// Display name to store with the login
        #[arg(short, long)]
        name: Option<String>,

        /// Keep the login across runs (defaults to `remember_me` in config.toml)
        #[arg(long, overrides_with = "no_remember")]
        remember: bool,

        #[arg(long)]
        no_remember: bool,
    },
    /// Create a mock account and log in
    Signup {
        #[arg(short, long)]
        name: String,

        email: String,

        #[arg(short, long)]
        password: String,

        /// Repeat the password
        #[arg(long)]
        confirm: String,

        /// Keep the login across runs (defaults to `remember_me` in config.toml)
        #[arg(long, overrides_with = "no_remember")]
        remember: bool,

        #[arg(long)]
        no_remember: bool,
    },
    /// Ask for a password reset link
    ForgotPassword { email: String },
    /// Forget the current login
    Logout,
    /// Show or set the interface language (ru, en)
    Lang { lang: Option<String> },
    /// Show, change or cancel the subscription plan
    Plan {
        /// lite, pro, elite or cancel
        plan: Option<String>,
    },
    /// Show, set or clear the profile avatar
    Avatar {
        #[command(subcommand)]
        action: Option<commands::avatar::AvatarCommand>,
    },
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = VeloriaConfig::load()?;
    tracing::debug!(data_dir = %config.display_path().display(), "loaded config");
    let app = Veloria::open(&config);
    let ctx = Ctx::new(app);

    match cli.command {
        Commands::Clients { action } => commands::clients::run(&ctx, action),
        Commands::Services { action } => commands::services::run(&ctx, action),
        Commands::Book(args) => commands::book::run(&ctx, args),
        Commands::Calendar { view } => commands::calendar::run(&ctx, view),
        Commands::Profile { action } => commands::profile::run(&ctx, action),
        Commands::Login {
            email,
            password,
            name,
            remember,
            no_remember,
        } => {
            let remember = remember_flag(remember, no_remember, config.remember_me);
            commands::profile::login(&ctx, &email, &password, name.as_deref(), remember)
        }
        Commands::Signup {
            name,
            email,
            password,
            confirm,
            remember,
            no_remember,
        } => {
            let remember = remember_flag(remember, no_remember, config.remember_me);
            commands::profile::signup(&ctx, &name, &email, &password, &confirm, remember)
        }
        Commands::ForgotPassword { email } => commands::profile::forgot_password(&ctx, &email),
        Commands::Logout => commands::profile::logout(&ctx),
        Commands::Lang { lang } => commands::settings::lang(&ctx, lang.as_deref()),
        Commands::Plan { plan } => commands::settings::plan(&ctx, plan.as_deref()),
        Commands::Avatar { action } => commands::avatar::run(&ctx, action),
    }
}

/// `--remember` or `--no-remember` when given, the configured default otherwise.
fn remember_flag(remember: bool, no_remember: bool, default: bool) -> bool {
    if remember {
        true
    } else if no_remember {
        false
    } else {
        default
    }
}

/// Logs go to stderr; `VELORIA_LOG` takes the usual filter syntax.
fn init_tracing() {
    let filter = EnvFilter::try_from_env("VELORIA_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_booking_with_services() {
        let cli = Cli::try_parse_from([
            "veloria", "book", "--date", "2026-02-14", "--time", "11:00", "-s", "Cut", "-s", "Beard",
        ])
        .unwrap();
        assert!(matches!(cli.command, Commands::Book(_)));
    }

    #[test]
    fn rejects_unknown_loyalty_filter() {
        assert!(Cli::try_parse_from(["veloria", "clients", "list", "--loyalty", "gold"]).is_err());
    }

    #[test]
    fn parses_signup_and_forgot_password() {
        let cli = Cli::try_parse_from([
            "veloria", "signup", "anna@example.com", "-n", "Anna", "-p", "secret1", "--confirm", "secret1",
            "--no-remember",
        ])
        .unwrap();
        match cli.command {
            Commands::Signup {
                name,
                email,
                remember,
                no_remember,
                ..
            } => {
                assert_eq!(name, "Anna");
                assert_eq!(email, "anna@example.com");
                assert!(!remember_flag(remember, no_remember, true));
            }
            _ => panic!("expected signup"),
        }

        let cli = Cli::try_parse_from(["veloria", "forgot-password", "anna@example.com"]).unwrap();
        assert!(matches!(cli.command, Commands::ForgotPassword { .. }));

        assert!(Cli::try_parse_from(["veloria", "signup", "anna@example.com", "-p", "secret1"]).is_err());
    }

    #[test]
    fn remember_flag_falls_back_to_config() {
        assert!(remember_flag(true, false, false));
        assert!(!remember_flag(false, true, true));
        assert!(remember_flag(false, false, true));
        assert!(!remember_flag(false, false, false));
    }
}
