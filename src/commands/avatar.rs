use anyhow::Result;
use clap::Subcommand;
use owo_colors::OwoColorize;

use super::Ctx;

/// Longest prefix of the data URL printed by `show`.
const PREVIEW_LEN: usize = 48;

#[derive(Subcommand)]
pub enum AvatarCommand {
    /// Show whether an avatar is set
    Show,
    /// Store a `data:image/...` URL as the avatar
    Set { data_url: String },
    /// Remove the avatar
    Clear,
}

pub fn run(ctx: &Ctx, command: Option<AvatarCommand>) -> Result<()> {
    let avatar = &ctx.app.avatar;

    match command.unwrap_or(AvatarCommand::Show) {
        AvatarCommand::Show => match avatar.load() {
            Some(url) => {
                let preview: String = url.chars().take(PREVIEW_LEN).collect();
                println!("{}… ({} bytes)", preview, url.len());
            }
            None => println!("{}", "No avatar".dimmed()),
        },
        AvatarCommand::Set { data_url } => {
            avatar.save(data_url.trim())?;
            println!("{}", "Avatar updated".green());
        }
        AvatarCommand::Clear => {
            avatar.clear()?;
            println!("Avatar removed");
        }
    }
    Ok(())
}
