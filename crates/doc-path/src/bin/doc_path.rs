//! `doc-path` — read or write a dot-notation path in a JSON document.
//!
//! Usage:
//!   doc-path get '<key-path>'
//!   doc-path set '<key-path>' '<value>'
//!
//! The document is read from stdin and the result is written to stdout.
//! Log verbosity follows `RUST_LOG`.

use doc_path::cli::run;
use std::io::{self, Read, Write};
use tracing_subscriber::EnvFilter;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("doc_path=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    match run(&args, &buf) {
        Ok(result) => {
            let mut stdout = io::stdout();
            if let Err(e) = stdout
                .write_all(result.as_bytes())
                .and_then(|_| stdout.write_all(b"\n"))
            {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
