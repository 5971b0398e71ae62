#!/usr/bin/env run-cargo-script
//! ```cargo
//! [package]
//! name = "randgen-make"
//! version = "1.0.0"
//! edition = "2021"
//!
//! [dependencies]
//! nob = { git = "https://gitlab.isae-supaero.fr/a.stevan/nob.rs", rev = "7ea6be855cf5600558440def6e59a83f78b8b543" }
//! clap = { version = "4.5.17", features = ["derive"] }
//! ```
extern crate clap;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Formats the code.
    Fmt {
        /// Only checks instead of really formatting.
        #[arg(short, long)]
        check: bool,
    },
    /// Checks the code.
    Check,
    /// Runs Clippy.
    Clippy,
    /// Runs the tests.
    Test {
        /// Be extra verbose with the output of the tests.
        #[arg(short, long)]
        verbose: bool,
        /// Only run the documentation tests.
        #[arg(short, long)]
        doc: bool,
    },
    /// Runs the sampling benchmarks.
    Bench,
    /// Builds the documentation
    Doc {
        /// Open the documentation in the browser.
        #[arg(short, long)]
        open: bool,
        /// Document private items.
        #[arg(short, long)]
        private: bool,
    },
}

#[rustfmt::skip]
fn main() {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Fmt { check }) => {
            if *check {
                nob::run_cmd_and_fail!("cargo", "fmt", "--all", "--", "--check");
            } else {
                nob::run_cmd_and_fail!("cargo", "fmt", "--all");
            }
        }
        Some(Commands::Check) => {
            nob::run_cmd_and_fail!("cargo", "check", "--all-targets");
        }
        Some(Commands::Clippy) => {
            nob::run_cmd_and_fail!("cargo", "clippy", "--all-targets", "--", "-D", "warnings");
        }
        Some(Commands::Test { verbose, doc }) => {
            let mut cmd = vec!["cargo", "test"];

            if *verbose { cmd.push("--verbose") }
            if *doc { cmd.push("--doc") }

            nob::run_cmd_as_vec_and_fail!(cmd);
        }
        Some(Commands::Bench) => {
            nob::run_cmd_and_fail!("cargo", "bench", "--bench", "sampling");
        }
        Some(Commands::Doc { open, private }) => {
            let mut cmd = vec!["cargo", "doc", "--no-deps"];
            if *open { cmd.push("--open") }
            if *private { cmd.push("--document-private-items") }
            nob::run_cmd_as_vec_and_fail!(cmd);
        }
        None => {}
    }
}
