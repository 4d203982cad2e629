//! This program inspects SageMaker request and result documents offline. It
//! lists the supported operations, reads a JSON document through the shape of
//! an operation and prints the allowed values of enumerations.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::exit;

use clap::{Parser, Subcommand};
use colored::Colorize;
use log::{debug, info};
use sagemaker_model::catalog::{self, RenderStyle, ShapeKind};
use sagemaker_model::API_VERSION;

#[derive(Clone, Debug, clap::ValueEnum)]
enum OutputFormat {
    Display,
    Debug,
    Json,
}

impl From<OutputFormat> for RenderStyle {
    fn from(value: OutputFormat) -> Self {
        match value {
            OutputFormat::Display => RenderStyle::Display,
            OutputFormat::Debug => RenderStyle::Debug,
            OutputFormat::Json => RenderStyle::Json,
        }
    }
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// List the supported operations with their target header and shapes.
    Operations,
    /// Parse a JSON document as the request (or result) of an operation.
    Inspect {
        /// Operation name, e.g. CreateTrainingJob or SageMaker.CreateTrainingJob.
        operation: String,
        /// Read the document from this file instead of stdin.
        #[arg(short = 'F', long)]
        file: Option<PathBuf>,
        /// Treat the document as the operation's result.
        #[arg(short, long)]
        result: bool,
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Display)]
        format: OutputFormat,
    },
    /// Print the allowed values of an enumeration, e.g. TrainingInstanceType.
    Values { name: String },
}

#[derive(Parser, Debug, Clone)]
#[command(
    version,
    about = "Inspects SageMaker API documents without calling the service.",
    long_about = "Inspects SageMaker API documents without calling the service. Documents are read through the crate's request and result shapes, so unknown members are dropped and enumeration values are checked."
)]
struct Options {
    #[command(subcommand)]
    command: Command,
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
}

fn read_document(file: &Option<PathBuf>) -> io::Result<String> {
    match file {
        Some(path) => {
            debug!("Reading document from {}", path.display());
            fs::read_to_string(path)
        }
        None => {
            debug!("Reading document from stdin");
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn list_operations() {
    info!("SageMaker API version {}", API_VERSION);
    for op in catalog::operations() {
        println!(
            "{:<32} {:<44} {} -> {}",
            op.name.bold(),
            op.target().cyan(),
            op.request_shape,
            op.result_shape
        );
    }
}

fn main() {
    let options = Options::parse();
    env_logger::Builder::new()
        .filter_level(options.verbose.log_level_filter())
        .init();

    match options.command {
        Command::Operations => list_operations(),
        Command::Inspect {
            operation,
            file,
            result,
            format,
        } => {
            let document = match read_document(&file) {
                Ok(document) => document,
                Err(e) => {
                    eprintln!("{} {}", "Could not read document:".red(), e);
                    exit(1);
                }
            };
            let kind = if result {
                ShapeKind::Result
            } else {
                ShapeKind::Request
            };
            match catalog::render(&operation, &document, kind, format.into()) {
                Ok(rendered) => println!("{}", rendered),
                Err(e) => {
                    eprintln!("{}", e.to_string().red());
                    exit(1);
                }
            }
        }
        Command::Values { name } => match catalog::enum_values(&name) {
            Ok(values) => {
                for value in values {
                    println!("{}", value);
                }
            }
            Err(e) => {
                eprintln!("{}", e.to_string().red());
                exit(1);
            }
        },
    }
}
