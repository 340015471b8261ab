//! Display functions for command results

use super::formatters::create_progress_bar;
use crate::commands::AutoplayResult;
use crate::core::WordList;
use colored::Colorize;

/// Print the word list in play order
pub fn print_word_list(words: &WordList) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "WORD LIST".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!();

    for (i, entry) in words.iter().enumerate() {
        println!(
            "  {:>2}. {} {:<12} {}",
            i + 1,
            entry.emoji(),
            entry.word().bright_yellow().bold(),
            entry.hint().bright_black()
        );
    }

    println!("\n  {} words", words.len());
}

/// Print the result of an autoplay run
pub fn print_autoplay_result(result: &AutoplayResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "AUTOPLAY RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let longest = result
        .steps
        .iter()
        .map(|step| step.hints_used)
        .max()
        .unwrap_or(0);

    for (i, step) in result.steps.iter().enumerate() {
        println!(
            "\n{}. {} {}",
            i + 1,
            step.emoji,
            step.word.bright_yellow().bold()
        );
        println!(
            "   Hints: {} {:>2}  order: {}",
            create_progress_bar(step.hints_used, longest, 20).green(),
            step.hints_used,
            step.reveal_order
        );
    }

    let total_hints: usize = result.steps.iter().map(|step| step.hints_used).sum();
    println!("\n📊 {}", "Summary:".bright_cyan().bold());
    println!("   Words solved:  {}", result.steps.len());
    println!("   Hints used:    {total_hints}");
    if let Some(total) = &result.total_time {
        println!("   Total time:    {}", total.bright_yellow());
    }
}
