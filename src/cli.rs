use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "career-ai")]
#[command(about = "Skill-based career matching and guidance reports", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Match your skills against the career catalog and show ranked guidance
    Advise {
        /// Comma-separated skills (prompts interactively when omitted)
        skills: Option<String>,

        /// Custom career catalog JSON file
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        /// Number of top matches to detail (default from config)
        #[arg(short, long)]
        top: Option<usize>,

        /// Save the session JSON for a later `export`
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Skip the deeper guidance section
        #[arg(long)]
        brief: bool,
    },

    /// Generate a PDF/Excel report from a saved session
    Export {
        /// Session JSON file written by `advise --output`
        #[arg(required = true)]
        input: PathBuf,

        /// Output format (pdf/excel/both)
        #[arg(short, long, default_value = "both")]
        format: ExportFormat,

        /// Output file or directory
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Report title
        #[arg(short, long)]
        title: Option<String>,

        /// Custom career catalog JSON file (for the guidance sections)
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        /// Number of top matches to detail
        #[arg(long)]
        top: Option<usize>,
    },

    /// Match, render and export in one step
    Run {
        /// Comma-separated skills (prompts interactively when omitted)
        skills: Option<String>,

        /// Custom career catalog JSON file
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        /// Output format (pdf/excel/both)
        #[arg(short, long, default_value = "pdf")]
        format: ExportFormat,

        /// Output file or directory
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Report title
        #[arg(short, long)]
        title: Option<String>,

        /// Number of top matches to detail
        #[arg(long)]
        top: Option<usize>,

        /// Skip the deeper guidance section
        #[arg(long)]
        brief: bool,
    },

    /// List the careers in the catalog
    Careers {
        /// Custom career catalog JSON file
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        /// Show the full required-skill sets
        #[arg(short, long)]
        detail: bool,
    },

    /// Show or edit the configuration
    Config {
        /// Set how many top matches are detailed by default
        #[arg(long)]
        set_top: Option<usize>,

        /// Set the default report title
        #[arg(long)]
        set_title: Option<String>,

        /// Show the configuration
        #[arg(long)]
        show: bool,
    },
}

#[derive(Clone, Debug, Default)]
pub enum ExportFormat {
    Pdf,
    Excel,
    #[default]
    Both,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pdf" => Ok(ExportFormat::Pdf),
            "excel" | "xlsx" => Ok(ExportFormat::Excel),
            "both" => Ok(ExportFormat::Both),
            _ => Err(format!("Unknown format: {}. Use pdf, excel, or both", s)),
        }
    }
}
