use anyhow::Context;

use rookctl::cli::{self, usage, Outcome};
use rookctl::config::Config;
use rookctl::{exec, logging};

fn main() {
    logging::init();
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("ERROR: {err:#}");
            std::process::exit(1);
        }
    }
}

/// Parse, dispatch, and either print or execute the outcome.
///
/// This is the only place that renders diagnostics and decides exit codes:
/// usage on stdout with code 0 for help, usage plus `ERROR:` on stderr with
/// code 1 for every parse or dispatch failure, and the child's own code for
/// executed invocations.
fn run() -> anyhow::Result<i32> {
    let config = Config::load().context("failed to load configuration")?;
    let args: Vec<String> = std::env::args().skip(1).collect();

    match cli::dispatch(&config, &args) {
        Ok(Outcome::Usage) => {
            print!("{}", usage::TEXT);
            Ok(0)
        }
        Ok(Outcome::Version) => {
            println!("rookctl {}", env!("CARGO_PKG_VERSION"));
            Ok(0)
        }
        Ok(Outcome::Exec(invocation)) => {
            let code = exec::run(&config.defaults.kubectl_program, &invocation)?;
            Ok(code)
        }
        Err(err) => {
            eprint!("{}", usage::TEXT);
            eprintln!("ERROR: {err}");
            Ok(1)
        }
    }
}
