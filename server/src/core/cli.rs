use clap::{Parser, Subcommand};

use std::path::PathBuf;

use super::constants::{
    ENV_CONFIG, ENV_CORS_ORIGINS, ENV_DB_PATH, ENV_DEFAULT_LIMIT, ENV_HOST, ENV_MAX_LIMIT,
    ENV_PORT,
};

#[derive(Parser)]
#[command(name = "sieve")]
#[command(version, about = "Filtered, paginated listing over an embedded catalog", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Server host address
    #[arg(long, short = 'H', global = true, env = ENV_HOST)]
    pub host: Option<String>,

    /// Server port
    #[arg(long, short = 'p', global = true, env = ENV_PORT)]
    pub port: Option<u16>,

    /// Path to config file
    #[arg(long, short = 'c', global = true, env = ENV_CONFIG)]
    pub config: Option<PathBuf>,

    /// SQLite database file (defaults to the data directory)
    #[arg(long, global = true, env = ENV_DB_PATH)]
    pub db_path: Option<String>,

    /// Page size when a request has no `limit`
    #[arg(long, global = true, env = ENV_DEFAULT_LIMIT)]
    pub default_limit: Option<u32>,

    /// Largest accepted `limit`; larger values are clamped
    #[arg(long, global = true, env = ENV_MAX_LIMIT)]
    pub max_limit: Option<u32>,

    /// Extra allowed CORS origins
    #[arg(long, global = true, env = ENV_CORS_ORIGINS, value_delimiter = ',')]
    pub cors_origins: Vec<String>,
}

#[derive(Subcommand, Clone, Debug)]
pub enum Commands {
    /// Start the server (default command)
    Start,
    /// System maintenance commands
    System {
        #[command(subcommand)]
        command: SystemCommands,
    },
}

#[derive(Subcommand, Clone, Debug)]
pub enum SystemCommands {
    /// Delete local data directory (database included). Requires confirmation.
    Prune {
        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Insert the demo catalog (authors, books, reviews) into an empty database
    Seed,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub config: Option<PathBuf>,
    pub db_path: Option<String>,
    pub default_limit: Option<u32>,
    pub max_limit: Option<u32>,
    pub cors_origins: Vec<String>,
}

impl From<Cli> for CliConfig {
    fn from(cli: Cli) -> Self {
        Self {
            host: cli.host,
            port: cli.port,
            config: cli.config,
            db_path: cli.db_path,
            default_limit: cli.default_limit,
            max_limit: cli.max_limit,
            cors_origins: cli.cors_origins,
        }
    }
}

/// Parse CLI arguments and return config with command
pub fn parse() -> (CliConfig, Option<Commands>) {
    let mut cli = Cli::parse();
    let command = cli.command.take();
    (cli.into(), command)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "sieve",
            "start",
            "--port",
            "9000",
            "--max-limit",
            "50",
            "--cors-origins",
            "https://a.example,https://b.example",
        ])
        .unwrap();
        assert!(matches!(cli.command, Some(Commands::Start)));

        let config = CliConfig::from(cli);
        assert_eq!(config.port, Some(9000));
        assert_eq!(config.max_limit, Some(50));
        assert_eq!(config.cors_origins.len(), 2);
    }

    #[test]
    fn test_parse_system_commands() {
        let cli = Cli::try_parse_from(["sieve", "system", "prune", "-y"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::System {
                command: SystemCommands::Prune { yes: true }
            })
        ));

        let cli = Cli::try_parse_from(["sieve", "system", "seed"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::System {
                command: SystemCommands::Seed
            })
        ));
    }

    #[test]
    fn test_no_command_defaults_to_none() {
        let cli = Cli::try_parse_from(["sieve"]).unwrap();
        assert!(cli.command.is_none());
    }
}
