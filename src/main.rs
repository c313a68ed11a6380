use std::process::ExitCode;

fn main() -> ExitCode {
    match spark_widgets::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("spark: {e}");
            ExitCode::FAILURE
        }
    }
}
