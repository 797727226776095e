//! Example catalog entry point — name lookup, node summaries and CSV export.

use std::path::Path;
use std::process;

use esm_examples::catalog::{self, EXAMPLES};
use esm_examples::io::export::export_nodes_csv;
use esm_examples::model::{EnergySystem, ModelError};
use esm_examples::scenarios::{self, GridParams, HamburgParams};

/// Parsed CLI arguments.
struct CliArgs {
    list: bool,
    example: Option<String>,
    nodes_out: Option<String>,
    params_path: Option<String>,
}

fn print_help() {
    eprintln!("esm-examples — catalog of ready-made energy system models");
    eprintln!();
    eprintln!("Usage: esm-examples [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --list                 List every example name");
    eprintln!("  --example <name>       Build the named example and print a node summary");
    eprintln!("  --nodes-out <path>     Export the node table to CSV");
    eprintln!("  --params <path>        TOML parameter file for the grid scenarios");
    eprintln!("  --help                 Show this help message");
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut cli = CliArgs {
        list: false,
        example: None,
        nodes_out: None,
        params_path: None,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                process::exit(0);
            }
            "--list" => {
                cli.list = true;
            }
            "--example" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --example requires a name argument");
                    process::exit(1);
                }
                cli.example = Some(args[i].clone());
            }
            "--nodes-out" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --nodes-out requires a path argument");
                    process::exit(1);
                }
                cli.nodes_out = Some(args[i].clone());
            }
            "--params" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --params requires a path argument");
                    process::exit(1);
                }
                cli.params_path = Some(args[i].clone());
            }
            other => {
                eprintln!("error: unknown argument \"{other}\"");
                print_help();
                process::exit(1);
            }
        }
        i += 1;
    }

    cli
}

/// Builds the named example, routing a `--params` file to the builders
/// that take one.
fn build_example(name: &str, params_path: Option<&str>) -> Result<EnergySystem, String> {
    let Some(path) = params_path else {
        return catalog::create(name).map_err(|e| e.to_string());
    };

    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read \"{path}\": {e}"))?;

    let grid = |build: fn(&GridParams) -> Result<EnergySystem, ModelError>| {
        let params = GridParams::from_toml_str(&content).map_err(|e| e.to_string())?;
        let errors = params.validate();
        if !errors.is_empty() {
            return Err(errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("\n"));
        }
        build(&params).map_err(|e| e.to_string())
    };

    match name {
        "grid_kp_es" => grid(scenarios::create_grid_kp_es),
        "grid_cs_es" => grid(scenarios::create_grid_cs_es),
        "grid_cp_es" => grid(scenarios::create_grid_cp_es),
        "grid_ts_es" => grid(scenarios::create_grid_ts_es),
        "grid_tp_es" => grid(scenarios::create_grid_tp_es),
        "hhes" => {
            let params = HamburgParams::from_toml_str(&content).map_err(|e| e.to_string())?;
            let errors = params.validate();
            if !errors.is_empty() {
                return Err(errors
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("\n"));
            }
            scenarios::create_hhes(params.periods).map_err(|e| e.to_string())
        }
        _ => Err(format!("--params is not supported for example \"{name}\"")),
    }
}

fn print_summary(es: &EnergySystem) {
    println!("{}", es.uid);
    println!(
        "  {} nodes over {} hourly steps starting {}",
        es.node_count(),
        es.timeframe.periods,
        es.timeframe.start,
    );
    println!(
        "  busses: {}  sources: {}  sinks: {}  transformers: {}  chps: {}  storages: {}  connectors: {}",
        es.busses.len(),
        es.sources.len(),
        es.sinks.len(),
        es.transformers.len(),
        es.chps.len(),
        es.storages.len(),
        es.connectors.len(),
    );
}

fn main() {
    let cli = parse_args();

    if cli.list {
        for name in EXAMPLES {
            println!("{name}");
        }
        return;
    }

    let Some(ref name) = cli.example else {
        eprintln!("error: nothing to do (pass --list or --example <name>)");
        print_help();
        process::exit(1);
    };

    let es = match build_example(name, cli.params_path.as_deref()) {
        Ok(es) => es,
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    };

    let errors = es.validate();
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("{e}");
        }
        process::exit(1);
    }

    print_summary(&es);

    if let Some(ref path) = cli.nodes_out {
        if let Err(e) = export_nodes_csv(&es, Path::new(path)) {
            eprintln!("error: failed to write CSV: {e}");
            process::exit(1);
        }
        eprintln!("Node table written to {path}");
    }
}
