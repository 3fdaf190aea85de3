use anyhow::Result;
use clap::Parser;

mod application;
mod cli;
mod data;
mod domain;
mod infrastructure;
mod presentation;
mod server;

use cli::{Cli, Command};
use infrastructure::jwt::JwtService;
use infrastructure::logging::init_logging;
use infrastructure::settings::{JwtSettings, Settings};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => {
            let settings = Settings::from_env()?;
            init_logging(&settings.log_level)?;
            server::run(settings).await
        }
        Command::IssueToken {
            author_id,
            ttl_seconds,
        } => {
            let jwt = JwtSettings::from_env()?;
            let service = JwtService::new(&jwt.secret, ttl_seconds.unwrap_or(jwt.ttl_seconds));
            let token = service.generate_token(&author_id)?;
            println!("{token}");
            Ok(())
        }
    }
}
