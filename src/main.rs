use std::process::ExitCode;

use utilkit::error_ext::format_anyhow;

fn main() -> ExitCode {
    match utilkit::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", format_anyhow(&e));
            ExitCode::from(utilkit::errors::get_exit_code(&e))
        }
    }
}
