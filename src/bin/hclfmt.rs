//! `hclfmt` reads an HCL file, parses it, and prints it back out through the
//! stringifier (or, with `--validate`, runs the structural validator and
//! prints its issues instead). Outer convenience tool only — this is the
//! only place in the crate that touches the filesystem, CLI args, or calls
//! `std::process::exit`.

use std::fs;
use std::process;

use clap::Parser;
use log::error;

use hcl_native::{parse, stringify, validate};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// The HCL file to format.
    file: std::path::PathBuf,

    /// Run the structural validator instead of printing the formatted file.
    #[arg(long)]
    validate: bool,
}

fn main() {
    simple_logger::init_with_level(log::Level::Warn).expect("a logger is not already installed");

    let args = Cli::parse();

    let source = fs::read_to_string(&args.file).unwrap_or_else(|err| {
        error!("could not read {}: {err}", args.file.display());
        process::exit(1);
    });

    let ast = parse(&source).unwrap_or_else(|err| {
        error!("{err}");
        process::exit(1);
    });

    if args.validate {
        match validate(&ast) {
            Ok(()) => println!("{}: ok", args.file.display()),
            Err(issues) => {
                for issue in issues {
                    println!("{}", issue.message);
                }
                process::exit(1);
            }
        }
        return;
    }

    println!("{}", stringify(&ast));
}
