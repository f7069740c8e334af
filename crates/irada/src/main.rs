// SPDX-FileCopyrightText: 2026 Irada Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Irada - browse a blog from the terminal.
//!
//! This is the binary entry point for the Irada widgets library.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod commands;
mod render;

use std::io::IsTerminal;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use irada_client::HttpContentClient;
use irada_config::IradaConfig;
use irada_core::ContentClient;

/// Irada - browse a blog from the terminal.
#[derive(Parser, Debug)]
#[command(name = "irada", version, about, long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the standard locations.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Disable colored output.
    #[arg(long, global = true)]
    plain: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// List blogs, newest first.
    List(ListArgs),
    /// Read one blog with its outline and related posts.
    Read {
        /// Slug of the blog to open.
        slug: String,
    },
    /// Show the featured carousel.
    Featured,
    /// Send a message through the contact form.
    Message {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        message: String,
    },
    /// Validate and print the effective configuration.
    Config,
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
struct ListArgs {
    /// Number of pages to load.
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    page_limit: u32,

    /// Only blogs in this category.
    #[arg(long)]
    category: Option<String>,

    /// Keep loading until the last page.
    #[arg(long, conflicts_with = "page_limit")]
    all: bool,

    /// Filter the loaded blogs by title, summary, category, or tag.
    #[arg(long)]
    search: Option<String>,

    /// Print JSON instead of a table.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => irada_config::load_and_validate_path(path),
        None => irada_config::load_and_validate(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(errors) => {
            irada_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.log.level);
    let use_color = !cli.plain && std::io::stdout().is_terminal();

    if let Err(e) = run(cli.command, &config, use_color).await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run(
    command: Commands,
    config: &IradaConfig,
    use_color: bool,
) -> Result<(), commands::CommandError> {
    if let Commands::Config = command {
        return commands::print_config(config);
    }

    let client: Arc<dyn ContentClient> = Arc::new(HttpContentClient::from_config(&config.api)?);
    match command {
        Commands::List(args) => {
            commands::run_list(client, config, &args.into(), use_color).await
        }
        Commands::Read { slug } => commands::run_read(client, config, &slug, use_color).await,
        Commands::Featured => commands::run_featured(client.as_ref(), use_color).await,
        Commands::Message {
            name,
            email,
            message,
        } => commands::run_message(client.as_ref(), name, email, message, use_color).await,
        Commands::Config => Ok(()),
    }
}

impl From<ListArgs> for commands::ListOptions {
    fn from(args: ListArgs) -> Self {
        Self {
            pages: if args.all { None } else { Some(args.page_limit) },
            category: args.category,
            search: args.search,
            json: args.json,
        }
    }
}

fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("irada={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .init();
}
