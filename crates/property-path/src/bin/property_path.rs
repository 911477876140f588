//! `property-path`: resolve a property path in a JSON document.
//!
//! Usage:
//!   property-path [--typed] [--pretty] '<path>'
//!
//! The document is read from stdin. `--typed` compares filter literals as
//! JSON scalars instead of text. Set `RUST_LOG=debug` to trace resolution.

use property_path::cli::{run, Args};
use std::io::{self, Read, Write};

fn main() {
    env_logger::init();

    let args = match Args::parse(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{}", e.message());
            std::process::exit(2);
        }
    };

    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    match run(&args, buf.trim()) {
        Ok(result) => {
            let mut stdout = io::stdout();
            if writeln!(stdout, "{result}").is_err() {
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("{}", e.message());
            std::process::exit(1);
        }
    }
}
