//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

#[expect(
    clippy::print_stderr,
    reason = "the binary reports fatal errors on stderr before exiting"
)]
fn main() {
    match routecheck_cli::run() {
        Ok(()) => {}
        Err(routecheck_cli::CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("routecheck: {err}");
            std::process::exit(1);
        }
    }
}
