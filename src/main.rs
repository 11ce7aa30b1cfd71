use clap::Parser;
use openfast_geometry::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(()) => {
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", anyhow::Error::from(error));
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("OpenFAST Geometry Extractor");
    println!("===========================");
    println!();
    println!("Extract simplified blade, tower, hub and rotor geometry from a bundle");
    println!("of OpenFAST input files for lightweight visualization tooling.");
    println!();
    println!("USAGE:");
    println!("    openfast-geometry <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    extract     Extract geometry from a bundle of input files");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Extract from a model directory, human-readable summary:");
    println!("    openfast-geometry extract ./models/NREL5MW/");
    println!();
    println!("    # Extract from explicit files, JSON to stdout:");
    println!("    openfast-geometry extract turbine.fst ElastoDyn.dat Blade.dat --format json");
    println!();
    println!("    # Write a pretty-printed JSON report:");
    println!("    openfast-geometry extract ./bundle/ --format json --pretty -o geometry.json");
    println!();
    println!("For detailed help on any command, use:");
    println!("    openfast-geometry extract --help");
}
