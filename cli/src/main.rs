mod commands;
mod terminal;

use std::process::ExitCode;

use commands::{CommandLine, Commands, check, generate, run};
use pregame_common::critical;
use pregame_core::vendors::MacOuiRepo;
use terminal::{logging, print};

fn main() -> ExitCode {
    let commands = CommandLine::parse_args();

    let cfg = match commands.config() {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = logging::init(&cfg.log_file) {
        eprintln!("error: {err:#}");
        return ExitCode::FAILURE;
    }

    print::banner(cfg.no_banner, cfg.quiet);
    let quiet = cfg.quiet;

    let result = match commands.command.unwrap_or_else(|| Commands::Run(Default::default())) {
        Commands::Run(args) => run::run(args, cfg),
        Commands::Check { address } => Ok(check::exit_code(check::check(address, &cfg, &MacOuiRepo))),
        Commands::Generate { prefix, count } => generate::generate(prefix, count, &cfg).map(|_| ExitCode::SUCCESS),
    };

    match result {
        Ok(code) => {
            if quiet == 0 {
                print::end_of_program();
            }
            code
        }
        Err(err) => {
            critical!("Fatal error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
