use std::process::ExitCode;

fn main() -> ExitCode {
    match fincause::apps::run_build_evaluation_data(std::env::args().skip(1)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("build_evaluation_data: {err}");
            ExitCode::FAILURE
        }
    }
}
