use std::process::ExitCode;

mod cli;

fn main() -> ExitCode {
    match cli::cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("netscope: {err}");
            ExitCode::FAILURE
        }
    }
}
