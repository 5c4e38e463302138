//! `folio` binary: parses the command line, runs one loader, maps the outcome to an exit code

use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    folio_cli::init_tracing();

    let matches = folio_cli::build_cli().get_matches();
    let mut stdout = std::io::stdout().lock();

    match folio_cli::run(&matches, &mut stdout).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            tracing::error!(error = %format!("{e:#}"), "folio failed");
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
