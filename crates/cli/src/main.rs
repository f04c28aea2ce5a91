mod catalog;

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};

use reprise_eval::{reconstruct, Resolver, TypeSpec, Value};
use reprise_interchange::{from_value, to_value, Expr};

/// Typed expression recording and reconstruction.
#[derive(Parser)]
#[command(
    name = "reprise",
    version,
    about = "Typed expression recording and reconstruction"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a named catalog expression and print its interchange JSON
    Demo {
        /// Name of the catalog expression
        name: String,
    },

    /// Pretty-print a serialized expression tree
    Show {
        /// Path to the interchange JSON file
        file: PathBuf,
    },

    /// Rebuild a serialized tree at a type and apply arguments
    Eval {
        /// Path to the interchange JSON file
        file: PathBuf,
        /// Type descriptor as kind-tagged JSON
        #[arg(long = "type")]
        ty: String,
        /// Plain JSON argument to apply to the rebuilt value (repeatable)
        #[arg(long = "arg")]
        args: Vec<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Demo { name } => cmd_demo(&name),
        Commands::Show { file } => cmd_show(&file),
        Commands::Eval { file, ty, args } => cmd_eval(&file, &ty, &args),
    }
}

/// Read a file, parse it as JSON, and decode the expression tree.
fn load_tree(path: &Path) -> Expr {
    let text = match std::fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error reading '{}': {}", path.display(), e);
            process::exit(1);
        }
    };
    let wire: serde_json::Value = match serde_json::from_str(&text) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("error parsing JSON in '{}': {}", path.display(), e);
            process::exit(1);
        }
    };
    match from_value(&wire) {
        Ok(tree) => tree,
        Err(e) => {
            eprintln!("error in '{}': {}", path.display(), e);
            process::exit(1);
        }
    }
}

fn cmd_demo(name: &str) {
    let tree = match catalog::build_demo(name) {
        Some(tree) => tree,
        None => {
            eprintln!(
                "error: unknown demo '{}'. Valid: {}",
                name,
                catalog::NAMES.join(", ")
            );
            process::exit(1);
        }
    };
    match to_value(&tree) {
        Ok(wire) => {
            let pretty = serde_json::to_string_pretty(&wire)
                .unwrap_or_else(|e| format!("serialization error: {}", e));
            println!("{}", pretty);
        }
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    }
}

fn cmd_show(path: &Path) {
    let tree = load_tree(path);
    println!("{}", tree);

    let names = tree.var_names();
    if names.is_empty() {
        println!("no variables");
    } else {
        let names: Vec<&str> = names.iter().map(|s| s.as_str()).collect();
        println!("variables: {}", names.join(", "));
    }
}

fn cmd_eval(path: &Path, ty: &str, args: &[String]) {
    let tree = load_tree(path);

    let ty_wire: serde_json::Value = match serde_json::from_str(ty) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("error parsing JSON in --type: {}", e);
            process::exit(1);
        }
    };
    let ty = match TypeSpec::from_json(&ty_wire) {
        Some(ty) => ty,
        None => {
            eprintln!("error: not a type descriptor: {}", ty_wire);
            process::exit(1);
        }
    };

    let mut result = match reconstruct(&ty, &tree, &Resolver::standard()) {
        Ok(value) => value,
        Err(e) => {
            eprintln!("reconstruction error: {}", e);
            process::exit(1);
        }
    };

    for raw in args {
        let wire: serde_json::Value = match serde_json::from_str(raw) {
            Ok(v) => v,
            Err(e) => {
                eprintln!("error parsing JSON in --arg '{}': {}", raw, e);
                process::exit(1);
            }
        };
        let arg = match Value::from_json(&wire) {
            Some(v) => v,
            None => {
                eprintln!("error: not a plain value: {}", wire);
                process::exit(1);
            }
        };
        result = match result.into_func().and_then(|f| f.call(arg)) {
            Ok(value) => value,
            Err(e) => {
                eprintln!("application error: {}", e);
                process::exit(1);
            }
        };
    }

    println!(
        "{}",
        serde_json::to_string_pretty(&result.to_json())
            .unwrap_or_else(|e| format!("serialization error: {}", e))
    );
}
