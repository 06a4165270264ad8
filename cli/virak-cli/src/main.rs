// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Virak CLI - command-line interface for the Virak Cloud public API

use std::io;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use virak_flags::Flags;

mod commands;
mod config;
mod context;
mod logging;
mod output;
mod preflight;
mod prompt;

use commands::login::LoginOptions;
use commands::{
    BucketCommand, ClusterCommand, DnsCommand, FinanceCommand, InstanceCommand, NetworkCommand,
    UserCommand, ZoneCommand,
};
use context::Context;

#[derive(Parser)]
#[command(
    name = "virak",
    version,
    about = "Virak Cloud management CLI",
    long_about = "Command-line interface for the Virak Cloud public API"
)]
struct Cli {
    /// Do not write the log file
    #[arg(long, global = true)]
    disable_log: bool,

    /// Output as JSON
    #[arg(short, long, global = true)]
    json: bool,

    /// Verbose output (logs to stderr)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// API base URL
    #[arg(long, global = true, env = "VIRAK_API_URL", default_value = virak_client::DEFAULT_BASE_URL)]
    api_url: String,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "VIRAK_TIMEOUT", default_value_t = 30)]
    timeout: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Store an API token
    Login(Flags<LoginOptions>),

    /// Forget the stored API token
    Logout,

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        shell: Shell,
    },

    /// Manage zones
    Zone {
        #[command(subcommand)]
        command: ZoneCommand,
    },

    /// Account profile and SSH keys
    User {
        #[command(subcommand)]
        command: UserCommand,
    },

    /// Wallet, invoices, payments and expenses
    Finance {
        #[command(subcommand)]
        command: FinanceCommand,
    },

    /// Manage DNS domains and records
    Dns {
        #[command(subcommand)]
        command: DnsCommand,
    },

    /// Manage object storage buckets
    Bucket {
        #[command(subcommand)]
        command: BucketCommand,
    },

    /// Manage Kubernetes clusters
    #[command(alias = "k8s")]
    Cluster {
        #[command(subcommand)]
        command: ClusterCommand,
    },

    /// Manage networks
    Network {
        #[command(subcommand)]
        command: NetworkCommand,
    },

    /// Manage instances
    #[command(alias = "inst")]
    Instance {
        #[command(subcommand)]
        command: InstanceCommand,
    },
}

async fn run(cli: Cli) -> Result<()> {
    let ctx = Context::new(cli.json, cli.api_url, Duration::from_secs(cli.timeout));
    match cli.command {
        Commands::Login(flags) => commands::login::login(&ctx, flags).await,
        Commands::Logout => commands::login::logout(),
        Commands::Completion { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "virak", &mut io::stdout());
            Ok(())
        }
        Commands::Zone { command } => command.run(&ctx).await,
        Commands::User { command } => command.run(&ctx).await,
        Commands::Finance { command } => command.run(&ctx).await,
        Commands::Dns { command } => command.run(&ctx).await,
        Commands::Bucket { command } => command.run(&ctx).await,
        Commands::Cluster { command } => command.run(&ctx).await,
        Commands::Network { command } => command.run(&ctx).await,
        Commands::Instance { command } => command.run(&ctx).await,
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.disable_log, cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %format!("{err:#}"), "command failed");
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }
}
