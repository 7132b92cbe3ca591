mod bmc;
mod cli;
mod commands;
mod config;
mod hardware;
mod output;

use clap::Parser;
use cli::Cli;
use commands::handle_command;
use config::AppConfig;
use output::print_error;

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&cli) {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load(cli.config.as_deref())?;
    handle_command(&cli.command, &config)
}
