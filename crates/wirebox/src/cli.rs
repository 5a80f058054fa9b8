//! Command line interface
//!
//! Inspects a catalog document: dependency sets per type and factory
//! method resolution.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use wirebox_application::ports::ResolutionServiceInterface;
use wirebox_domain::error::Result;
use wirebox_domain::value_objects::{Dependency, Type};
use wirebox_infrastructure::bootstrap::ResolverContext;
use wirebox_infrastructure::config::{AppConfig, ConfigLoader};

/// Command line interface for wirebox
#[derive(Parser, Debug)]
#[command(name = "wirebox")]
#[command(about = "wirebox - Inspect dependency injection metadata")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the dependency set of one or every catalog type
    Dependencies {
        /// Catalog document, overrides `catalog.path`
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Only this type
        #[arg(long = "type", value_name = "NAME")]
        type_name: Option<String>,
    },

    /// Resolve the factory method producing a type
    Factory {
        /// Catalog document, overrides `catalog.path`
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Type to produce
        #[arg(long)]
        target: String,

        /// Type whose methods are searched
        #[arg(long)]
        factory: String,
    },
}

/// Rendered command output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Text for stdout
    pub output: String,
    /// False when any type failed to resolve
    pub success: bool,
}

impl Cli {
    /// Load the configuration this invocation points at
    pub fn load_config(&self) -> Result<AppConfig> {
        match &self.config {
            Some(path) => ConfigLoader::new().with_config_path(path).load(),
            None => ConfigLoader::new().load(),
        }
    }
}

/// Run a parsed command against a loaded configuration
///
/// Resolution failures are reported in the output and flip
/// [`Outcome::success`]; configuration and catalog failures are returned.
pub fn execute(command: &Command, config: &AppConfig) -> Result<Outcome> {
    match command {
        Command::Dependencies { catalog, type_name } => {
            let context = ResolverContext::from_config(config, catalog.as_deref())?;
            let types = match type_name {
                Some(name) => vec![context.type_named(name)?],
                None => context.resolver().known_types().all().to_vec(),
            };
            Ok(render_dependencies(&context, &types))
        }
        Command::Factory {
            catalog,
            target,
            factory,
        } => {
            let context = ResolverContext::from_config(config, catalog.as_deref())?;
            let target = context.type_named(target)?;
            let factory = context.type_named(factory)?;
            Ok(match context.resolver().factory_method(&target, &factory) {
                Ok(factory_method) => Outcome {
                    output: format!("{factory_method}\n"),
                    success: true,
                },
                Err(e) => Outcome {
                    output: format!("error: {e}\n"),
                    success: false,
                },
            })
        }
    }
}

fn render_dependencies(context: &ResolverContext, types: &[Type]) -> Outcome {
    let mut lines = Vec::new();
    let mut success = true;

    for t in types {
        lines.push(t.to_string());
        match context.resolver().dependencies(t) {
            Ok(dependencies) => {
                let mut sorted: Vec<&Dependency> = dependencies.iter().collect();
                sorted.sort_by(|a, b| {
                    a.required_type()
                        .cmp(b.required_type())
                        .then_with(|| a.setter().signature().cmp(&b.setter().signature()))
                });
                lines.extend(sorted.into_iter().map(|dependency| format!("  {dependency}")));
            }
            Err(e) => {
                success = false;
                lines.push(format!("  error: {e}"));
            }
        }
    }

    let mut output = lines.join("\n");
    if !output.is_empty() {
        output.push('\n');
    }
    Outcome { output, success }
}
