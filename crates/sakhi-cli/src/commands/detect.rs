//! Language detection diagnostic

use colored::*;
use sakhi_core::detect;
use std::process::ExitCode;

pub fn execute(text: &str) -> ExitCode {
    let language = detect(text);
    println!("{}", language.to_string().cyan().bold());
    if !language.is_specified() {
        println!(
            "{}",
            "No supported script found; replies will follow the user's language.".dimmed()
        );
    }
    ExitCode::SUCCESS
}
