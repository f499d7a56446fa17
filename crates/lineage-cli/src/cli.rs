//! Command-line interface for the lineage utility
//!
//! Loads a declared type model from JSON and prints the class diagram of one
//! of its classes, either as raw Mermaid markup or wrapped in an HTML page.

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

use lineage::plugins::class::{ClassDiagram, TypeModel};
use lineage::{
    Direction, FileTemplateRenderer, Graph, GraphStrategy, Template, TemplateRenderer,
};

/// Lineage - Render class hierarchies as Mermaid.js class diagrams
#[derive(Parser)]
#[command(name = "lineage")]
#[command(about = "Render a declared class hierarchy as a Mermaid.js class diagram")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Set log level (trace|debug|info|warn|error|off)
    #[arg(long, value_enum, global = true)]
    pub log_level: Option<LogLevel>,

    /// Set log format (compact|pretty|json)
    #[arg(long, value_enum, global = true)]
    pub log_format: Option<LogFormat>,
}

/// Log level options
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Off,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Off => "off",
        }
    }
}

/// Log format options
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }
}

/// Ancestry ordering choices
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq, Default)]
pub enum DirectionChoice {
    /// Leaf first, arrows point at the base
    Up,
    /// Root first, arrows point back at the base
    #[default]
    Down,
}

impl From<DirectionChoice> for Direction {
    fn from(value: DirectionChoice) -> Self {
        match value {
            DirectionChoice::Up => Direction::Up,
            DirectionChoice::Down => Direction::Down,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the class diagram of one class in a model
    Diagram {
        /// JSON model file declaring the classes
        #[arg(short, long)]
        model: PathBuf,

        /// Name of the class to diagram
        #[arg(short, long)]
        class: String,

        /// Ancestry ordering
        #[arg(short, long, value_enum, default_value_t = DirectionChoice::Down)]
        direction: DirectionChoice,

        /// Wrap the diagram in an HTML document
        #[arg(long)]
        html: bool,

        /// Directory holding `<template>.html` files (implies --html)
        #[arg(long)]
        template_dir: Option<PathBuf>,

        /// Output file (use - for stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the classes declared in a model
    Classes {
        /// JSON model file declaring the classes
        #[arg(short, long)]
        model: PathBuf,

        /// Show in JSON format
        #[arg(long)]
        json: bool,
    },
}

/// One entry of `classes --json`
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ClassSummary {
    pub name: String,
    pub bases: Vec<String>,
    pub members: usize,
}

/// Main CLI application
#[derive(Debug, Default)]
pub struct LineageApp {
    template: Template,
}

impl LineageApp {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the application with the given CLI arguments
    pub fn run(&self, cli: Cli) -> Result<()> {
        if cli.verbose {
            eprintln!("Lineage v{}", env!("CARGO_PKG_VERSION"));
        }

        match cli.command {
            Commands::Diagram {
                model,
                class,
                direction,
                html,
                template_dir,
                output,
            } => {
                let rendered = self.diagram_command(
                    &model,
                    &class,
                    direction.into(),
                    html,
                    template_dir,
                    cli.verbose,
                )?;
                self.write_output(output, &rendered)
            }
            Commands::Classes { model, json } => {
                let listing = self.classes_command(&model, json)?;
                self.write_output(None, &listing)
            }
        }
    }

    /// Build the diagram (or HTML page) for `class`
    pub fn diagram_command(
        &self,
        model: &Path,
        class: &str,
        direction: Direction,
        html: bool,
        template_dir: Option<PathBuf>,
        verbose: bool,
    ) -> Result<String> {
        let model = self.load_model(model)?;
        if verbose {
            eprintln!("Loaded {} classes", model.len());
        }

        let target = model.require(class)?;
        let strategy = ClassDiagram::with_direction(target, direction);

        let rendered = match template_dir {
            Some(dir) => {
                debug!(dir = %dir.display(), "Using template directory");
                self.render(strategy, FileTemplateRenderer::new(dir))?
            }
            None if html => Graph::new(strategy).with_template(self.template).generate()?,
            None => strategy.build()?,
        };

        if verbose {
            eprintln!("Rendered diagram for {}", class);
        }
        Ok(rendered)
    }

    fn render<R: TemplateRenderer>(&self, strategy: ClassDiagram, renderer: R) -> Result<String> {
        let graph = Graph::with_renderer(strategy, renderer).with_template(self.template);
        Ok(graph.generate()?)
    }

    /// List the classes in a model, one per line or as JSON
    pub fn classes_command(&self, model: &Path, json: bool) -> Result<String> {
        let model = self.load_model(model)?;
        let summaries: Vec<ClassSummary> = model
            .names()
            .filter_map(|name| model.get(name))
            .map(|ty| ClassSummary {
                name: ty.name().to_string(),
                bases: ty.bases().iter().map(|b| b.name().to_string()).collect(),
                members: ty.members().len(),
            })
            .collect();

        if json {
            let listing = serde_json::json!({
                "classes": summaries,
                "total": summaries.len(),
            });
            return Ok(serde_json::to_string_pretty(&listing)?);
        }

        let mut listing = String::new();
        for summary in &summaries {
            if summary.bases.is_empty() {
                listing.push_str(&summary.name);
            } else {
                listing.push_str(&format!("{}({})", summary.name, summary.bases.join(", ")));
            }
            listing.push('\n');
        }
        listing.push_str(&format!("\nTotal: {} classes", summaries.len()));
        Ok(listing)
    }

    fn load_model(&self, path: &Path) -> Result<TypeModel> {
        TypeModel::load(path)
            .with_context(|| format!("Failed to load model '{}'", path.display()))
    }

    /// Write output to file or stdout
    pub fn write_output(&self, output: Option<PathBuf>, content: &str) -> Result<()> {
        let stdout_content = if content.is_empty() || content.ends_with('\n') {
            content.to_string()
        } else {
            format!("{}\n", content)
        };

        match output {
            Some(path) if path.to_string_lossy() != "-" => {
                fs::write(&path, content).map_err(|e| {
                    anyhow!("Failed to write output file '{}': {}", path.display(), e)
                })?;
            }
            _ => {
                print!("{}", stdout_content);
                io::stdout().flush()?;
            }
        }
        Ok(())
    }
}
