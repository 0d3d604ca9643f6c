// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line solver for one-stroke drawing puzzles.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use tracing::info;

use stroke_search::catalog::PuzzleCatalog;
use stroke_search::graph::Puzzle;
use stroke_search::loader::load_puzzle;
use stroke_search::logging::init_tracing;
use stroke_search::render::{print_count, OutputFormat};
use stroke_search::solver::{Solver, SolverConfig};

fn usage() -> &'static str {
    "stroke - find every one-stroke drawing of a puzzle\n\n\
USAGE:\n\
  stroke --solve FILE [OPTIONS]\n\
  stroke --catalog DIR --puzzle NAME [OPTIONS]\n\
  stroke --catalog DIR --list\n\n\
OPTIONS:\n\
  --count-only         print the number of solutions only\n\
  --output FORMAT      clean (default) or json\n\
  --threads N          size of the search thread pool\n\
  --sequential         search one starting vertex at a time\n\
  -h, --help           show this message\n\n\
ENVIRONMENT:\n\
  STROKE_OUTPUT, STROKE_THREADS   defaults for --output and --threads\n\
  STROKE_LOG                      log filter, e.g. stroke_search=debug\n"
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum PuzzleSource {
    File(PathBuf),
    Catalog { dir: PathBuf, name: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Help,
    List {
        catalog: PathBuf,
    },
    Solve {
        source: PuzzleSource,
        count_only: bool,
        output: OutputFormat,
        config: SolverConfig,
    },
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_threads(raw: &str) -> Result<usize, String> {
    match raw.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(format!("--threads must be a positive integer, got {raw:?}")),
    }
}

fn parse_args(args: &[String]) -> Result<Command, String> {
    if args.iter().any(|a| a == "-h" || a == "--help") {
        return Ok(Command::Help);
    }

    let mut solve: Option<PathBuf> = None;
    let mut catalog: Option<PathBuf> = None;
    let mut puzzle: Option<String> = None;
    let mut list = false;
    let mut count_only = false;
    let mut output = env_var("STROKE_OUTPUT")
        .map(|v| OutputFormat::from_name(&v))
        .unwrap_or_default();
    let mut config = SolverConfig::default();
    if let Some(threads) = env_var("STROKE_THREADS") {
        config = config.with_threads(parse_threads(&threads)?);
    }

    let mut i = 0usize;
    while i < args.len() {
        let a = args[i].as_str();
        match a {
            "--solve" => {
                i += 1;
                let v = args.get(i).ok_or("--solve requires FILE")?;
                solve = Some(PathBuf::from(v));
            }
            "--catalog" => {
                i += 1;
                let v = args.get(i).ok_or("--catalog requires DIR")?;
                catalog = Some(PathBuf::from(v));
            }
            "--puzzle" => {
                i += 1;
                let v = args.get(i).ok_or("--puzzle requires NAME")?;
                puzzle = Some(v.clone());
            }
            "--list" => list = true,
            "--count-only" => count_only = true,
            "--output" => {
                i += 1;
                let v = args.get(i).ok_or("--output requires FORMAT")?;
                output = OutputFormat::from_name(v);
            }
            "--threads" => {
                i += 1;
                let v = args.get(i).ok_or("--threads requires N")?;
                config = config.with_threads(parse_threads(v)?);
            }
            "--sequential" => config = config.sequential(),
            other => return Err(format!("unknown argument {other:?}\n\n{}", usage())),
        }
        i += 1;
    }

    let source = match (solve, catalog, puzzle) {
        (Some(_), Some(_), _) | (Some(_), _, Some(_)) => {
            return Err("--solve cannot be combined with --catalog or --puzzle".to_string())
        }
        (None, Some(catalog), None) if list => return Ok(Command::List { catalog }),
        (Some(file), None, None) => PuzzleSource::File(file),
        (None, Some(dir), Some(name)) => PuzzleSource::Catalog { dir, name },
        (None, None, Some(_)) => return Err("--puzzle requires --catalog DIR".to_string()),
        _ => return Err(usage().to_string()),
    };
    if list {
        return Err("--list cannot be combined with a puzzle to solve".to_string());
    }

    Ok(Command::Solve {
        source,
        count_only,
        output,
        config,
    })
}

fn load(source: &PuzzleSource) -> anyhow::Result<Puzzle> {
    match source {
        PuzzleSource::File(path) => {
            load_puzzle(path).with_context(|| format!("loading {}", path.display()))
        }
        PuzzleSource::Catalog { dir, name } => {
            let catalog = PuzzleCatalog::open(dir)?;
            catalog
                .load(name)
                .with_context(|| format!("loading puzzle {name:?} from {}", dir.display()))
        }
    }
}

fn run(command: Command) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        Command::Help => out.write_all(usage().as_bytes())?,
        Command::List { catalog } => {
            let catalog = PuzzleCatalog::open(&catalog)?;
            for entry in catalog.entries()? {
                writeln!(out, "{}\t{}", entry.name, entry.json_file)?;
            }
        }
        Command::Solve {
            source,
            count_only,
            output,
            config,
        } => {
            let puzzle = load(&source)?;
            let solver = Solver::new(config)?;
            info!(?source, count_only, %output, "Solving");
            if count_only {
                print_count(solver.count(&puzzle), &mut out)?;
            } else {
                solver
                    .solve(&puzzle)
                    .print_with(output.printer(), &mut out)?;
            }
        }
    }
    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    init_tracing();

    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let command = match parse_args(&args) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::from(2);
        }
    };

    match run(command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
