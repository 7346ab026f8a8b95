//! Prints the security requirements extracted from a spec as JSON.

use oas_authgen::{extract_security_requirements, load_document};
use std::path::PathBuf;

fn main() {
    let Some(path) = std::env::args_os().nth(1).map(PathBuf::from) else {
        eprintln!("usage: spec_helper <openapi.yaml>");
        std::process::exit(2);
    };
    match load_document(&path) {
        Ok(doc) => {
            let requirements = extract_security_requirements(&doc);
            match serde_json::to_string_pretty(&requirements) {
                Ok(json) => println!("{json}"),
                Err(err) => {
                    eprintln!("error: {err}");
                    std::process::exit(1);
                }
            }
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            std::process::exit(1);
        }
    }
}
