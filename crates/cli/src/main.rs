use std::env;
use std::io::stdout;
use std::process::ExitCode;

use log::debug;

use cat_cli::cli_args::Args;
use cat_cli::execution::execute;

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse_tokens(env::args_os().skip(1));
    debug!("Raw arguments: {:?}", args.arguments);

    let mut stdout = stdout().lock();
    match execute(args.arguments, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
