//! Command-line interface: flag source and subcommands.

use crate::config::{ConfigSources, Configuration, CONFIG_FILE_NAME};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::error::Error;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

// Command-line arguments
#[derive(Parser, Debug)]
#[command(
    name = "theme",
    version,
    about = "Resolve and check the configuration used to sync storefront theme assets."
)]
pub struct Cli {
    /// Path to the configuration file.
    #[arg(short, long, global = true, default_value = CONFIG_FILE_NAME)]
    pub config: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(flatten)]
    pub flags: FlagArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the resolved configuration and its API endpoints.
    Show {
        /// Print as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Resolve the configuration and report any problems.
    Validate,
    /// Write flags and environment (no file) to the configuration file.
    Configure,
}

/// One flag per configuration field. Anything left off stays unset.
#[derive(Args, Debug, Clone, Default)]
pub struct FlagArgs {
    /// API password / access token.
    #[arg(long, global = true)]
    pub password: Option<String>,

    /// Theme id, or "live" for the published theme.
    #[arg(long = "themeid", global = true)]
    pub theme_id: Option<String>,

    /// Storefront domain, e.g. my-shop.myshopify.com.
    #[arg(long = "store", global = true)]
    pub domain: Option<String>,

    /// Local theme directory.
    #[arg(long = "dir", global = true)]
    pub directory: Option<PathBuf>,

    /// File to exclude from sync (repeatable).
    #[arg(long = "ignored-file", global = true)]
    pub ignored_files: Vec<String>,

    /// Glob pattern to exclude from sync (repeatable).
    #[arg(long, global = true)]
    pub ignores: Vec<String>,

    /// Token-bucket capacity for API requests.
    #[arg(long, global = true)]
    pub bucket_size: Option<u32>,

    /// Token-bucket refill rate.
    #[arg(long, global = true)]
    pub refill_rate: Option<u32>,

    /// Number of concurrent workers.
    #[arg(long, global = true)]
    pub concurrency: Option<u32>,

    /// Outbound proxy URL.
    #[arg(long, global = true)]
    pub proxy: Option<String>,

    /// Request timeout, e.g. 30s or "1m 30s".
    #[arg(long, global = true, value_parser = humantime::parse_duration)]
    pub timeout: Option<Duration>,
}

impl FlagArgs {
    /// The flag source for resolution.
    pub fn to_configuration(&self) -> Configuration {
        Configuration {
            password: self.password.clone().unwrap_or_default(),
            theme_id: self.theme_id.clone().unwrap_or_default(),
            domain: self.domain.clone().unwrap_or_default(),
            directory: self.directory.clone().unwrap_or_default(),
            ignored_files: self.ignored_files.clone(),
            bucket_size: self.bucket_size.unwrap_or_default(),
            refill_rate: self.refill_rate.unwrap_or_default(),
            concurrency: self.concurrency.unwrap_or_default(),
            proxy: self.proxy.clone().unwrap_or_default(),
            ignores: self.ignores.clone(),
            timeout: self.timeout.unwrap_or_default(),
        }
    }
}

/// Printable view of a resolved configuration; the password never appears.
#[derive(Debug, Serialize)]
struct Summary<'a> {
    domain: &'a str,
    theme_id: &'a str,
    live: bool,
    directory: String,
    admin_url: String,
    asset_path: String,
    bucket_size: u32,
    refill_rate: u32,
    concurrency: u32,
    timeout: String,
    #[serde(skip_serializing_if = "str::is_empty")]
    proxy: &'a str,
    ignored_files: &'a [String],
    ignores: &'a [String],
}

impl<'a> Summary<'a> {
    fn new(config: &'a Configuration) -> Self {
        Self {
            domain: &config.domain,
            theme_id: &config.theme_id,
            live: config.is_live(),
            directory: config.directory().display().to_string(),
            admin_url: config.admin_url(),
            asset_path: config.asset_path(),
            bucket_size: config.bucket_size,
            refill_rate: config.refill_rate,
            concurrency: config.concurrency,
            timeout: humantime::format_duration(config.timeout).to_string(),
            proxy: &config.proxy,
            ignored_files: &config.ignored_files,
            ignores: &config.ignores,
        }
    }
}

/// Run a parsed command against the given sources, printing to `out`.
pub fn run<W: Write>(cli: &Cli, sources: &ConfigSources, out: &mut W) -> Result<(), Box<dyn Error>> {
    match &cli.command {
        Command::Show { json } => {
            let file = Configuration::load_optional(&cli.config)?;
            let config = sources.resolve(&file)?;
            let summary = Summary::new(&config);
            if *json {
                writeln!(out, "{}", serde_json::to_string_pretty(&summary)?)?;
            } else {
                writeln!(out, "{config}")?;
                writeln!(out, "directory:  {}", summary.directory)?;
                writeln!(out, "admin url:  {}", summary.admin_url)?;
                writeln!(out, "assets:     {}", summary.asset_path)?;
                writeln!(out, "workers:    {}", summary.concurrency)?;
                writeln!(out, "timeout:    {}", summary.timeout)?;
            }
        }
        Command::Validate => {
            let file = Configuration::load_optional(&cli.config)?;
            sources.resolve(&file)?;
            writeln!(out, "Configuration is valid")?;
        }
        Command::Configure => {
            let config = sources.resolve(&Configuration::default())?;
            config.save(&cli.config)?;
            writeln!(out, "Wrote {}", cli.config.display())?;
        }
    }
    Ok(())
}
