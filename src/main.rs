use career_ai_rust::{catalog, cli, config, error, export, matcher, render, session};
use catalog::Catalog;
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use dialoguer::Input;
use error::{CareerAiError, Result};
use export::ReportOptions;
use session::AdvisorSession;
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Advise { skills, catalog, top, output, brief } => {
            println!("🎓 career-ai - skill analysis\n");

            let catalog = load_catalog(catalog.as_deref())?;
            let input = resolve_skills_input(skills)?;
            let top = top.unwrap_or(config.top_matches);

            println!("[1/2] Matching skills against {} careers...", catalog.len());
            let Some(session) = build_session(&input, &catalog)? else {
                return Ok(());
            };
            println!("✔ Ranked {} careers\n", session.results.len());

            println!("[2/2] Rendering results...\n");
            render::print_match_cards(&session, top);
            if !brief {
                render::print_guidance(&session, &catalog, &config.advice_note, top);
            }

            if let Some(output) = output {
                session.save(&output)?;
                println!("✔ Session saved: {}", output.display());
            }
        }

        Commands::Export { input, format, output, title, catalog, top } => {
            println!("📄 career-ai - report export\n");

            let session = AdvisorSession::load(&input)?;
            let catalog = load_catalog(catalog.as_deref())?;
            let title = title.unwrap_or_else(|| config.report_title.clone());
            let options = ReportOptions {
                title: &title,
                advice_note: &config.advice_note,
                top: top.unwrap_or(config.top_matches),
            };

            let output_dir = output.unwrap_or_else(|| PathBuf::from("."));
            export::export_session(&session, &catalog, &format, &output_dir, &options)?;

            println!("\n✅ Export complete");
        }

        Commands::Run { skills, catalog, format, output, title, top, brief } => {
            println!("🚀 career-ai - one-shot analysis\n");

            let catalog = load_catalog(catalog.as_deref())?;
            let input = resolve_skills_input(skills)?;
            let top = top.unwrap_or(config.top_matches);

            println!("[1/3] Matching skills against {} careers...", catalog.len());
            let Some(session) = build_session(&input, &catalog)? else {
                return Ok(());
            };
            println!("✔ Ranked {} careers\n", session.results.len());

            println!("[2/3] Rendering results...\n");
            render::print_match_cards(&session, top);
            if !brief {
                render::print_guidance(&session, &catalog, &config.advice_note, top);
            }

            println!("[3/3] Exporting report...");
            let title = title.unwrap_or_else(|| config.report_title.clone());
            let options = ReportOptions {
                title: &title,
                advice_note: &config.advice_note,
                top,
            };
            let output_dir = output.unwrap_or_else(|| PathBuf::from("."));
            export::export_session(&session, &catalog, &format, &output_dir, &options)?;

            println!("\n✅ Done");
        }

        Commands::Careers { catalog, detail } => {
            let catalog = load_catalog(catalog.as_deref())?;
            render::print_catalog(&catalog, detail);
        }

        Commands::Config { set_top, set_title, show } => {
            let mut config = config;

            if let Some(top) = set_top {
                config.set_top_matches(top)?;
                println!("✔ Default top matches set to {}", top);
            }

            if let Some(title) = set_title {
                config.set_report_title(title)?;
                println!("✔ Report title updated");
            }

            if show {
                println!("Configuration:");
                println!("  Top matches:  {}", config.top_matches);
                println!("  Report title: {}", config.report_title);
                println!("  Advice note:  {}", config.advice_note);
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(if verbose { "debug" } else { "warn" }));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) => {
            let catalog = Catalog::from_file(path)?;
            println!("✔ Loaded catalog: {} ({} careers)\n", path.display(), catalog.len());
            Ok(catalog)
        }
        None => Ok(Catalog::builtin()),
    }
}

/// Use the skills argument, or prompt for one interactively.
fn resolve_skills_input(skills: Option<String>) -> Result<String> {
    match skills {
        Some(skills) => Ok(skills),
        None => {
            let input: String = Input::new()
                .with_prompt("Your skills (comma separated, e.g. Python, SQL, problem solving)")
                .allow_empty(true)
                .interact_text()
                .map_err(|e| CareerAiError::Prompt(e.to_string()))?;
            Ok(input)
        }
    }
}

/// Match and wrap into a session. An empty skill list is a warning, not a
/// failure; `None` means the caller should stop quietly.
fn build_session(input: &str, catalog: &Catalog) -> Result<Option<AdvisorSession>> {
    match matcher::match_skills(input, catalog) {
        Ok(results) => Ok(Some(AdvisorSession::new(
            matcher::normalize_skills(input),
            results,
        ))),
        Err(CareerAiError::EmptyInput) => {
            println!("⚠ {}", CareerAiError::EmptyInput);
            Ok(None)
        }
        Err(e) => Err(e),
    }
}
