use clap::Parser;
use code_archiver::config::DEFAULT_OUTPUT_FILE;
use code_archiver::create_code_archive;
use code_archiver::logger::initialize_logger;
use code_archiver::reporting::print_stats;
use code_archiver::ArchiverConfig;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, error};

/// Bundles the source files of a project into a single text archive.
///
/// The project path is read interactively from stdin.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct CliArgs {}

fn prompt_for_path() -> io::Result<String> {
    print!("Enter path to your React project: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_owned())
}

fn main() {
    let _ = CliArgs::parse();
    initialize_logger();

    let project_path = match prompt_for_path() {
        Ok(path) => path,
        Err(e) => {
            error!("Failed to read project path: {}", e);
            std::process::exit(1);
        }
    };
    debug!("Project path: {:?}", project_path);

    let root = Path::new(&project_path);
    if !root.exists() {
        println!("Invalid project path. Please try again.");
        return;
    }

    let output = PathBuf::from(DEFAULT_OUTPUT_FILE);
    match create_code_archive(ArchiverConfig::default(), root, &output) {
        Ok(report) => {
            print_stats(&report);
            println!(
                "Successfully created {} with all project files!",
                DEFAULT_OUTPUT_FILE
            );
        }
        Err(e) => {
            error!("Archiving failed: {}", e);
            eprintln!("Error creating {}: {}", DEFAULT_OUTPUT_FILE, e);
            std::process::exit(1);
        }
    }
}
