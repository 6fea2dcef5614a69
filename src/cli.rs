// File: ./src/cli.rs
//! Shared command-line interface logic, like printing help.

use crate::help;

pub fn print_help(binary_name: &str) {
    println!(
        "Crewbook v{} - A roster of members, their tasks and events",
        env!("CARGO_PKG_VERSION"),
    );
    println!();
    println!("USAGE:");
    println!("    {} [--root <path>]", binary_name);
    println!("    {} --help", binary_name);
    println!();
    println!("OPTIONS:");
    println!("    -r, --root <path>     Use a different directory for config and data.");
    println!("    -h, --help            Show this help message.");
    println!();
    println!("Commands are read one per line from standard input.");
    println!();
    print!("{}", help::render_help());
}
