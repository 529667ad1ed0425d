//! recipe-router
//!
//! Command-line front end for the recipe application's route table.
//!
//! # Architecture Overview
//!
//! ```text
//!   --config (TOML)  ──▶ config::loader ──▶ RouterConfig
//!                                             │
//!                          ┌──────────────────┼───────────────────┐
//!                          ▼                  ▼                   ▼
//!                     RouteTable        MemoryHistory(base)   ViewRegistry
//!                          │                  │                   │
//!                          └──────────▶ Navigator ◀───────────────┘
//!                                          │
//!   resolve / href / navigate  ───────────▶│──▶ JSON on stdout
//!                                          │
//!   logs (tracing) ──▶ stderr      metrics ──▶ Prometheus text (--metrics)
//! ```

use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde::Serialize;

use recipe_router::config::loader::{load_config, ConfigError};
use recipe_router::navigation::Navigated;
use recipe_router::observability::{logging, metrics};
use recipe_router::{
    MemoryHistory, NavigationTarget, Navigator, RouteParams, RouteTable, RouterConfig,
    ViewRegistry,
};

#[derive(Parser)]
#[command(name = "recipe-router")]
#[command(about = "Resolve and navigate the recipe application's routes", long_about = None)]
struct Cli {
    /// Route table configuration (TOML). The built-in recipe routes are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print Prometheus metrics after the command
    #[arg(long)]
    metrics: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List declared routes in precedence order
    Routes,
    /// Resolve a path to its route and parameters
    Resolve { path: String },
    /// Build the path of a named route
    Href {
        name: String,
        /// Parameters as KEY=VALUE
        #[arg(value_parser = parse_key_val)]
        params: Vec<(String, String)>,
    },
    /// Navigate through targets: a path, `@name,key=value`, `back` or `forward`
    Navigate {
        #[arg(required = true, value_parser = parse_step)]
        targets: Vec<Step>,
    },
}

/// One line of `navigate` output.
#[derive(Serialize)]
struct StepOutput {
    step: String,
    navigated: Option<Navigated>,
}

#[derive(Debug, Clone)]
enum Step {
    Target(NavigationTarget),
    Back,
    Forward,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => RouterConfig::default(),
    };

    logging::init(&config.logging)?;
    let prometheus = if cli.metrics {
        Some(metrics::install_prometheus()?)
    } else {
        None
    };

    tracing::info!(
        routes = config.routes.len(),
        base = %config.history.base,
        "Configuration loaded"
    );

    let table = RouteTable::from_config(&config.routes).map_err(ConfigError::Validation)?;
    let result = run(cli.command, Arc::new(table), &config);
    if let Err(e) = &result {
        tracing::error!(error = %e, "Command failed");
    }

    if let Some(handle) = prometheus {
        print!("{}", handle.render());
    }
    result
}

fn run(
    command: Commands,
    table: Arc<RouteTable>,
    config: &RouterConfig,
) -> Result<(), Box<dyn Error>> {
    match command {
        Commands::Routes => {
            print_json(table.entries())?;
        }
        Commands::Resolve { path } => {
            let resolution = table.resolve_by_path(&path)?;
            print_json(&resolution)?;
        }
        Commands::Href { name, params } => {
            let params: RouteParams = params.into_iter().collect();
            let resolution = table.resolve_by_name(&name, &params)?;
            print_json(&resolution)?;
        }
        Commands::Navigate { targets } => {
            let views = Arc::new(ViewRegistry::with_recipe_views());
            let history = MemoryHistory::new(&config.history.base);
            let mut navigator = Navigator::new(table, views, history)?;

            for step in targets {
                let (label, navigated) = match step {
                    Step::Target(target) => {
                        let label = target.to_string();
                        (label, Some(navigator.push(target)?))
                    }
                    Step::Back => ("back".to_string(), navigator.back()?),
                    Step::Forward => ("forward".to_string(), navigator.forward()?),
                };
                print_json(&StepOutput {
                    step: label,
                    navigated,
                })?;
            }
        }
    }
    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn parse_key_val(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got `{raw}`"))?;
    if key.is_empty() {
        return Err(format!("empty key in `{raw}`"));
    }
    Ok((key.to_string(), value.to_string()))
}

fn parse_step(raw: &str) -> Result<Step, String> {
    match raw {
        "back" => Ok(Step::Back),
        "forward" => Ok(Step::Forward),
        _ => match raw.strip_prefix('@') {
            Some(named) => {
                let mut parts = named.split(',');
                let name = parts
                    .next()
                    .filter(|name| !name.is_empty())
                    .ok_or_else(|| format!("missing route name in `{raw}`"))?;
                let mut target = NavigationTarget::named(name);
                for pair in parts {
                    let (key, value) = parse_key_val(pair)?;
                    target = target.param(key, value);
                }
                Ok(Step::Target(target))
            }
            None => Ok(Step::Target(NavigationTarget::from(raw))),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_step() {
        assert!(matches!(parse_step("back"), Ok(Step::Back)));
        assert!(matches!(
            parse_step("/recipe/1"),
            Ok(Step::Target(NavigationTarget::Path(p))) if p == "/recipe/1"
        ));
        match parse_step("@recipe,id=42").unwrap() {
            Step::Target(target) => {
                assert_eq!(target, NavigationTarget::named("recipe").param("id", "42"))
            }
            other => panic!("unexpected step: {other:?}"),
        }
        assert!(parse_step("@").is_err());
        assert!(parse_step("@recipe,id").is_err());
    }

    #[test]
    fn test_parse_key_val() {
        assert_eq!(parse_key_val("id=42"), Ok(("id".into(), "42".into())));
        assert_eq!(parse_key_val("q=a=b"), Ok(("q".into(), "a=b".into())));
        assert!(parse_key_val("=1").is_err());
    }

    #[test]
    fn test_cli_parses() {
        let cli = Cli::try_parse_from(["recipe-router", "href", "recipe", "id=42"]).unwrap();
        match cli.command {
            Commands::Href { name, params } => {
                assert_eq!(name, "recipe");
                assert_eq!(params, vec![("id".to_string(), "42".to_string())]);
            }
            _ => panic!("expected href"),
        }
    }
}
