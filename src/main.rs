use clap::Parser;

use shell_guard::cli::{Cli, Commands};
use shell_guard::commands::{run_check, run_checks, run_fmt, run_init};
use shell_guard::logging::init_logging;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let exit_code = match &cli.command {
        Commands::Check(args) => run_check(args, &cli),
        Commands::Fmt(args) => run_fmt(args, &cli),
        Commands::Init(args) => run_init(args, &cli),
        Commands::Checks => run_checks(&cli),
    };

    std::process::exit(exit_code);
}
