use std::process::ExitCode;

fn main() -> ExitCode {
    match fincause::apps::run_build_annotated_data(std::env::args().skip(1)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("build_annotated_data: {err}");
            ExitCode::FAILURE
        }
    }
}
