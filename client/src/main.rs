use std::env;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt::format;

use self::args::{Args, Command};
use self::combine::run_combine;
use self::map::run_map;
use self::stats::run_stats;

mod args;
mod combine;
mod io;
mod map;
mod stats;

fn main() -> ExitCode {
    let args = Args::parse();

    set_default_logging();

    let event_format = format().with_target(false).without_time();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .event_format(event_format)
        .with_writer(std::io::stderr)
        .init();

    match args.command {
        Command::Stats(config) => run_stats(config),
        Command::Map(config) => run_map(config),
        Command::Combine(config) => run_combine(config),
    }
}

fn set_default_logging() {
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
}
