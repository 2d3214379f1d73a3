//! `docscore models` - show what an analysis checks for

use anyhow::Result;
use console::style;
use docscore::config::AnalyzerConfig;
use docscore::scorers::ScorerSet;

pub fn run(config: &AnalyzerConfig) -> Result<()> {
    let scorers = ScorerSet::from_config(config);

    println!("\n{}", style("Scorers").bold());
    for (name, description) in scorers.describe() {
        println!("  {:<10} {}", style(name).cyan(), description);
    }

    println!("\n{} {}", style("Model Registry").bold(), style("(first match wins)").dim());
    if config.models.is_empty() {
        println!("  {}", style("(empty)").dim());
    }
    for (i, entry) in config.models.iter().enumerate() {
        println!("  {}. {:<12} → {}", i + 1, style(&entry.key).yellow(), entry.name);
    }
    println!("  {}  {:<12} → {}", style("-").dim(), style("(none)").dim(), config.unknown_model);

    println!("\n{}", style("Known Mistakes").bold());
    if config.spelling.mistakes.is_empty() {
        println!("  {}", style("(empty)").dim());
    }
    for entry in &config.spelling.mistakes {
        println!("  {:<12} → {}", style(&entry.wrong).red(), entry.correct);
    }
    println!();
    Ok(())
}
