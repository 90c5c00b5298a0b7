// ABOUTME: Command line argument definitions and parsing using Clap
// ABOUTME: Defines the main CLI structure and subcommands for appset-render

use clap::{Parser, Subcommand};
use std::collections::HashMap;
use std::path::PathBuf;

use super::config::OutputFormat;

#[derive(Parser)]
#[command(name = "appset-render")]
#[command(about = "Render Argo CD ApplicationSet templates into Applications")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(short, long, global = true, help = "Path to configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Disable colored output")]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the Application template of an ApplicationSet
    Render {
        #[arg(help = "Path to ApplicationSet YAML file")]
        appset: PathBuf,

        #[arg(short = 'p', long = "param", help = "Template parameter (key=value)")]
        params: Vec<String>,

        #[arg(long, help = "YAML file with a flat map of template parameters")]
        params_file: Option<PathBuf>,

        #[arg(long, value_enum, help = "Output format for the rendered Application")]
        format: Option<OutputFormat>,

        #[arg(short, long, help = "Write the rendered Application to a file")]
        output: Option<PathBuf>,
    },

    /// Check an ApplicationSet for unrecognized generators
    Check {
        #[arg(help = "Path to ApplicationSet YAML file")]
        appset: PathBuf,
    },
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parse parameters from key=value format
    pub fn parse_params(params: &[String]) -> anyhow::Result<HashMap<String, String>> {
        let mut parsed = HashMap::new();

        for param in params {
            if let Some((key, value)) = param.split_once('=') {
                parsed.insert(key.to_string(), value.to_string());
            } else {
                return Err(anyhow::anyhow!(
                    "Invalid parameter format '{}'. Expected 'key=value'",
                    param
                ));
            }
        }

        Ok(parsed)
    }
}
