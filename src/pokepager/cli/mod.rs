//! # CLI
//!
//! Startup happens in a fixed order: parse arguments, install logging, bind
//! the configuration, then hand off to a command on a single-threaded tokio
//! runtime. The name index is loaded inside each command, so a config or
//! argument error never touches the network.
//!
//! With no subcommand the interactive browser runs.

mod browse;
mod commands;
mod render;
mod setup;
mod styles;
mod templates;

use clap::Parser;
use pokepager::error::Result;
use setup::{init_context, init_tracing, runtime, AppContext, Cli, Commands};

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let ctx = init_context(&cli)?;
    let command = cli.command.unwrap_or(Commands::Browse);

    runtime()?.block_on(dispatch(&ctx, command))
}

async fn dispatch(ctx: &AppContext, command: Commands) -> Result<()> {
    match command {
        Commands::Browse => browse::run(ctx).await,
        Commands::Page { number } => commands::page(ctx, number).await,
        Commands::Index => commands::index(ctx).await,
        Commands::Config { write } => commands::config(ctx, write),
    }
}
