use crate::config::AppConfig;
use crate::utils::error::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "tarot-api")]
#[command(about = "Tarot card catalog and reading service")]
pub struct Cli {
    /// Path to TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Run the HTTP API (default)
    Serve(ServeArgs),
    /// Print a walkthrough of the deck service to stdout
    Demo(DemoArgs),
    /// Perform a single three-card reading and print it
    Read(ReadArgs),
}

#[derive(Debug, Clone, Default, Args)]
pub struct ServeArgs {
    /// Override server.host
    #[arg(long)]
    pub host: Option<String>,

    /// Override server.port
    #[arg(long)]
    pub port: Option<u16>,

    /// Override server.api_prefix, e.g. "/api"
    #[arg(long)]
    pub api_prefix: Option<String>,

    /// Seed the deck RNG for reproducible draws
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Default, Args)]
pub struct DemoArgs {
    /// Seed the deck RNG for reproducible draws
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Default, Args)]
pub struct ReadArgs {
    /// Print the reading as the JSON the API would return
    #[arg(long)]
    pub json: bool,

    /// Seed the deck RNG for reproducible draws
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Cli {
    /// Loads the config file if one was given, otherwise the defaults, and
    /// folds in the global flags.
    pub fn load_config(&self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::from_file(path)?,
            None => AppConfig::default(),
        };
        if self.verbose {
            config.logging.verbose = true;
        }
        Ok(config)
    }
}

impl ServeArgs {
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(prefix) = &self.api_prefix {
            config.server.api_prefix = prefix.clone();
        }
        if self.seed.is_some() {
            config.deck.seed = self.seed;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_no_subcommand() {
        let cli = Cli::parse_from(["tarot-api"]);
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_serve_overrides() {
        let cli = Cli::parse_from([
            "tarot-api",
            "-v",
            "serve",
            "--port",
            "9999",
            "--api-prefix",
            "/api",
            "--seed",
            "3",
        ]);
        let mut config = cli.load_config().unwrap();
        assert!(config.logging.verbose);

        let Some(Command::Serve(args)) = &cli.command else {
            panic!("expected serve subcommand");
        };
        args.apply(&mut config);

        assert_eq!(config.server.port, 9999);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.api_prefix, "/api");
        assert_eq!(config.deck.seed, Some(3));
    }

    #[test]
    fn test_read_json_flag() {
        let cli = Cli::parse_from(["tarot-api", "read", "--json"]);
        assert!(matches!(cli.command, Some(Command::Read(ReadArgs { json: true, .. }))));
    }
}
