//! whamo-diagram CLI entry point.

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process;
use std::str::FromStr;

use clap::Parser;
use log::{debug, error, info, LevelFilter};

use whamo_diagram::{render_json_with_options, DiagramOptions, Error, Result};

/// Render a WHAMO network model (JSON) as a standalone HTML diagram
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Model JSON file; reads stdin when omitted or "-"
    input: Option<PathBuf>,

    /// Output HTML file; writes stdout when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Browser tab title
    #[arg(long)]
    title: Option<String>,

    /// Page heading above the drawing
    #[arg(long)]
    heading: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() {
    let args = Args::parse();

    let log_level = LevelFilter::from_str(&args.log_level).unwrap_or_else(|_| {
        eprintln!("Invalid log level: {}. Using 'warn' instead.", args.log_level);
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    debug!(args:?; "Parsed arguments");

    if let Err(err) = run(&args) {
        error!("{err}");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let input = read_input(args.input.as_ref())?;

    let mut options = DiagramOptions::default();
    if let Some(title) = &args.title {
        options.title = title.clone();
    }
    if let Some(heading) = &args.heading {
        options.heading = heading.clone();
    }

    let doc = render_json_with_options(&input, &options)?;

    match &args.output {
        Some(path) => {
            fs::write(path, doc.as_str()).map_err(|source| Error::Write {
                path: path.clone(),
                source,
            })?;
            info!(output = path.display().to_string(), bytes = doc.len(); "Diagram written");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(doc.as_str().as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(p) if p.as_os_str() != "-" => {
            info!(input = p.display().to_string(); "Reading model");
            fs::read_to_string(p).map_err(|source| Error::Read {
                path: p.clone(),
                source,
            })
        }
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}
