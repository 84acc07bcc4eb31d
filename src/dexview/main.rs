//! # dexview
//!
//! Terminal browser for a paginated entity catalog (PokeAPI by default).
//!
//! The binary is thin: it runs `cli::run()` and turns its result into a process
//! exit code. All catalog state and fetching lives in the library crate; see
//! the `dexview` crate docs for the layering.

use std::process::ExitCode;

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    match cli::run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
