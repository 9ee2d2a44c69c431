use clap::Parser;
use colored::Colorize;
use ranker_core::cli::{self, Cli};
use ranker_core::exit::RankerExit;
use ranker_core::logging;

fn main() -> RankerExit {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = if let Some(cmd) = cli.command {
        cli::dispatch::execute(cmd)
    } else {
        use clap::CommandFactory;
        let _ = Cli::command().print_help();
        Ok(RankerExit::Success)
    };

    match result {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red(), e);
            RankerExit::for_error(&e)
        }
    }
}
