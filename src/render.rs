//! Terminal rendering of ranked match cards and career guidance.

use crate::catalog::Catalog;
use crate::directory;
use crate::session::AdvisorSession;
use std::collections::BTreeSet;

const BAR_WIDTH: usize = 20;

/// Textual score bar, e.g. `████████░░░░░░░░░░░░` for 40%.
fn score_bar(score: u8) -> String {
    let filled = score as usize * BAR_WIDTH / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

/// Comma-join a skill set in sorted order, or "None".
pub(crate) fn join_or_none(skills: &BTreeSet<String>) -> String {
    if skills.is_empty() {
        "None".to_string()
    } else {
        skills.iter().cloned().collect::<Vec<_>>().join(", ")
    }
}

/// Print the ranked match cards for the top `top` results.
pub fn print_match_cards(session: &AdvisorSession, top: usize) {
    println!("🚀 Top Career Matches\n");

    for (rank, result) in session.top(top).iter().enumerate() {
        println!("🎯 {}. {} — {}%", rank + 1, result.career, result.score);
        println!("   [{}]", score_bar(result.score));
        println!("   Matched skills:    {}", join_or_none(&result.matched_skills));
        println!("   Skills to improve: {}", join_or_none(&result.missing_skills));
        println!();
    }
}

/// Print the deeper guidance section for the top `top` results, resolving
/// company/hackathon/competition names through the directory.
pub fn print_guidance(session: &AdvisorSession, catalog: &Catalog, advice_note: &str, top: usize) {
    println!("🎓 Deeper Career Guidance\n");

    for result in session.top(top) {
        let Some(profile) = catalog.get(&result.career) else {
            // Session was computed against a different catalog.
            println!("⚠ No catalog entry for '{}', skipping guidance", result.career);
            continue;
        };
        let insight = &profile.insight;

        println!("📌 Career Guidance: {}", profile.name);
        println!("  📊 Present demand: {}", insight.present);
        println!("  🚀 Future scope:   {}", insight.future);
        println!("  💡 Advice:         {}", advice_note);

        println!("  🏢 Companies to apply:");
        for name in &insight.companies {
            let entry = directory::company(name);
            println!("     - {} — {} ({})", name, entry.description, entry.url);
        }

        println!("  🏆 Hackathons to participate:");
        for name in &insight.hackathons {
            let entry = directory::hackathon(name);
            println!("     - {} — {} ({})", name, entry.description, entry.url);
        }

        println!("  💻 Coding competitions:");
        for name in &insight.competitions {
            let entry = directory::competition(name);
            println!("     - {} — {} ({})", name, entry.description, entry.url);
        }

        println!("  ⚡ Missing skills: {}", join_or_none(&result.missing_skills));
        println!();
    }
}

/// Print the catalog listing for the `careers` command.
pub fn print_catalog(catalog: &Catalog, detail: bool) {
    println!("Career catalog ({} careers):\n", catalog.len());

    for profile in catalog.iter() {
        println!("  {} ({} skills)", profile.name, profile.required_skills.len());
        if detail {
            println!("    Required: {}", join_or_none(&profile.required_skills));
            println!("    Demand:   {}", profile.insight.present);
        }
    }
}
