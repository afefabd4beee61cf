//! Database migration runner for Curio.
//!
//! Usage:
//!   migrator up      - Create the contents table
//!   migrator down    - Drop the contents table
//!   migrator status  - Show migration status
//!   migrator fresh   - Drop all tables and re-run migrations
//!
//! The database is taken from the same configuration the server loads
//! (`config/default.toml`, `config/{RUN_MODE}.toml`, `CURIO__DATABASE__URL`).

use anyhow::{Context, bail};
use sea_orm_migration::MigratorTrait;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use curio_db::{connect, migration::Migrator};
use curio_shared::AppConfig;

const DEFAULT_LOG_FILTER: &str = "curio_migrator=info,sea_orm_migration=info";

/// Migration command selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Up,
    Down,
    Status,
    Fresh,
}

impl Command {
    /// Parse a command name. No argument means `up`.
    fn parse(arg: Option<&str>) -> Option<Self> {
        match arg {
            None | Some("up") => Some(Self::Up),
            Some("down") => Some(Self::Down),
            Some("status") => Some(Self::Status),
            Some("fresh") => Some(Self::Fresh),
            Some(_) => None,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let arg = std::env::args().nth(1);
    let Some(command) = Command::parse(arg.as_deref()) else {
        bail!(
            "unknown command `{}` (expected up, down, status or fresh)",
            arg.unwrap_or_default()
        );
    };

    let config = AppConfig::load().context("Failed to load configuration")?;
    let db = connect(&config.database)
        .await
        .context("Failed to connect to database")?;

    match command {
        Command::Up => Migrator::up(&db, None).await?,
        Command::Down => Migrator::down(&db, Some(1)).await?,
        Command::Status => Migrator::status(&db).await?,
        Command::Fresh => Migrator::fresh(&db).await?,
    }

    info!(?command, "Migration command finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None, Some(Command::Up))]
    #[case(Some("up"), Some(Command::Up))]
    #[case(Some("down"), Some(Command::Down))]
    #[case(Some("status"), Some(Command::Status))]
    #[case(Some("fresh"), Some(Command::Fresh))]
    #[case(Some("refresh"), None)]
    #[case(Some("UP"), None)]
    fn test_parse_command(#[case] arg: Option<&str>, #[case] expected: Option<Command>) {
        assert_eq!(Command::parse(arg), expected);
    }
}
