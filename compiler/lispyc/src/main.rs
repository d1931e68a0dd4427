use std::process::ExitCode;

use clap::Parser;
use lispyc::{init_tracing, process_line, run_file, run_repl, Cli, PrintHandler, ReplConfig};

fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();
    let config = ReplConfig::from(&cli);
    let out = PrintHandler::stdout();

    let result = if let Some(expr) = &cli.eval {
        let mut interp = config.interpreter();
        Ok(process_line(&mut interp, expr, &out).succeeded())
    } else if let Some(path) = &cli.file {
        run_file(path, &mut config.interpreter(), &out).map(|failures| failures == 0)
    } else {
        run_repl(&config, &out).map(|()| true)
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("lispy: {err}");
            ExitCode::FAILURE
        }
    }
}
