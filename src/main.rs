//! `dots` command-line entry point.
use anyhow::Result;
use clap::Parser;

use dots::{cli, commands, logging};

fn main() -> Result<()> {
    let _ = enable_ansi_support::enable_ansi_support();
    let args = cli::Cli::parse();
    logging::init_subscriber(args.verbose, args.command.name());
    let log = logging::Logger::new(args.command.name());

    match &args.command {
        cli::Command::Init(opts) => commands::init::run(&args.global, opts, &log),
        cli::Command::Add(opts) => commands::add::run(&args.global, opts, &log),
        cli::Command::Status => commands::status::run(&args.global, &log),
        cli::Command::Apply => commands::apply::run(&args.global, &log),
        cli::Command::List => commands::list::run(&args.global, &log),
        cli::Command::Remove(opts) => commands::remove::run(&args.global, opts, &log),
        cli::Command::Diff(opts) => commands::diff::run(&args.global, opts, &log),
        cli::Command::Completions(opts) => {
            commands::completions::run(opts.shell);
            Ok(())
        }
        cli::Command::Version => {
            commands::version::run();
            Ok(())
        }
    }
}
