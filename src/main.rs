//! Binary entrypoint for the `ta-uuidgen` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    match ta_uuidgen::run(std::env::args_os()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
