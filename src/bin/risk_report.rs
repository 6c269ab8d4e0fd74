use std::process::ExitCode;

fn main() -> ExitCode {
    match streetrisk::app::run_risk_report(std::env::args().skip(1)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
