use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use graphkinds::classify::classify;
use graphkinds::io::LoadFromFile;
use graphkinds::report::{format_error, format_report};
use graphkinds::simplegraph::SimpleGraph;

/// Determine which textbook families a graph belongs to.
#[derive(Debug, Parser)]
#[command(name = "graphkinds", version)]
struct Args {
    /// Graph files or directories containing graph files
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Directory for the `.out` reports (default: next to each input)
    #[arg(long)]
    out_dir: Option<PathBuf>,
}

/// Expands directories into the regular files they contain, sorted by name.
fn input_files(paths:&[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut res = Vec::new();
    for path in paths {
        if path.is_dir() {
            let mut files = Vec::new();
            for entry in fs::read_dir(path).with_context(|| format!("reading {}", path.display()))? {
                let entry = entry?;
                if entry.file_type()?.is_file() {
                    files.push(entry.path());
                }
            }
            files.sort();
            res.extend(files);
        } else {
            res.push(path.clone());
        }
    }
    Ok(res)
}

fn output_path(input:&Path, out_dir:Option<&Path>) -> PathBuf {
    let mut name = input.file_name().unwrap_or_default().to_os_string();
    name.push(".out");
    match out_dir {
        Some(dir) => dir.join(name),
        None => input.with_file_name(name),
    }
}

fn process(input:&Path) -> String {
    let name = input.file_name().unwrap_or_default().to_string_lossy();
    match SimpleGraph::from_file(input) {
        Ok(graph) => format_report(&name, &graph, &classify(&graph)),
        Err(err) => {
            tracing::warn!(path = %input.display(), %err, "could not load graph");
            format_error(&name, &err)
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let files = input_files(&args.paths)?;
    if files.is_empty() {
        println!("No input files");
        return Ok(());
    }

    if let Some(dir) = &args.out_dir {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }

    for input in files {
        let text = process(&input);
        let out = output_path(&input, args.out_dir.as_deref());
        fs::write(&out, text).with_context(|| format!("writing {}", out.display()))?;
        println!("Done: {}", out.display());
    }

    Ok(())
}


//  #######
//     #    ######  ####  #####  ####
//     #    #      #        #   #
//     #    #####   ####    #    ####
//     #    #           #   #        #
//     #    #      #    #   #   #    #
//     #    ######  ####    #    ####
