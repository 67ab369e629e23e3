//! Display functions for command results

use super::formatters::{colored_row, create_progress_bar};
use crate::commands::{AnalysisResult, CheckResult};
use crate::game::Row;
use colored::Colorize;

/// Print the result of checking a guess
pub fn print_check_result(result: &CheckResult) {
    let row = Row {
        guess: result.guess.clone(),
        feedback: result.feedback.clone(),
    };

    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Answer: {}",
        result.answer.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(40).cyan());
    println!("\n  {}", colored_row(&row));
    println!("  {}", result.feedback.to_emoji());

    if result.feedback.is_solved() {
        println!("\n{}", "✅ Solved!".green().bold());
    }
}

/// Print the result of guess analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "GUESS ANALYSIS:".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let max_bits = (result.total_answers as f64).log2();
    let bar = create_progress_bar(result.entropy, max_bits, 30);

    println!("\n📊 Against {} possible answers:", result.total_answers);
    println!(
        "   Entropy:        [{}] {}",
        bar.green(),
        format!("{:.3} bits", result.entropy).bright_yellow()
    );
    println!("   Feedback rows:  {}", result.distinct_feedback);
    println!(
        "   Expected:       {:.1} answers remain",
        result.expected_remaining
    );
    println!("   Worst case:     {} answers remain", result.largest_bucket);
}
