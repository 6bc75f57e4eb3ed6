use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    // Startup failures are logged by the bootstrap before they surface here.
    match movers::run_with_config().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("movers: {e}");
            ExitCode::FAILURE
        }
    }
}
