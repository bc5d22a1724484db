//! Display functions for command results

use super::formatters::{create_progress_bar, format_letters, format_solutions};
use crate::commands::{BenchmarkResult, DictionarySummary, LetterStats, RoundResult, WordScore};
use colored::Colorize;

fn banner(title: &str) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", title.bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
}

/// Print the letters of a round and its best words
pub fn print_round_result(result: &RoundResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Letters: {}",
        format_letters(&result.letters).bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());
    println!("{}", format_solutions(&result.solutions, result.mode));
}

/// Print per-letter usages and occurrences
pub fn print_letter_statistics(stats: &[LetterStats]) {
    banner("LETTER STATISTICS");
    println!("\n   {:<8}{:>8}{:>14}", "Letter", "Usages", "Occurrences");
    for row in stats {
        println!(
            "   {:<8}{:>8}{:>14}",
            row.letter.to_ascii_uppercase().to_string().bright_white().bold(),
            row.usages,
            row.occurrences
        );
    }
}

/// Print word count, letter count and the length histogram
pub fn print_dictionary_summary(summary: &DictionarySummary) {
    banner("DICTIONARY");

    println!("\n📊 {}", "Summary:".bright_cyan().bold());
    println!("   Words:            {}", summary.words);
    println!("   Total letters:    {}", summary.total_letters);
    println!("   Trie nodes:       {}", summary.nodes);
    println!(
        "   Average length:   {}",
        format!("{:.2}", summary.average_length()).bright_yellow()
    );

    let Some(&largest) = summary.length_distribution.values().max() else {
        return;
    };

    println!("\n📈 {}", "Lengths:".bright_cyan().bold());
    for (&length, &count) in &summary.length_distribution {
        let bar = create_progress_bar(count as f64, largest as f64, 40);
        println!("   {length:>2}: {} {count:5}", bar.green());
    }
}

/// Print the score breakdown of a word
pub fn print_word_score(result: &WordScore) {
    let status = if result.in_dictionary {
        "in dictionary".green()
    } else {
        "not in dictionary".red()
    };
    println!(
        "\n{} ({status})",
        result.word.to_uppercase().bright_yellow().bold()
    );

    let breakdown = result
        .letters
        .iter()
        .map(|(c, points)| format!("{}={points}", c.to_ascii_uppercase()))
        .collect::<Vec<_>>()
        .join(" + ");
    println!("   Letters: {}", result.length);
    println!(
        "   Score:   {} = {}",
        breakdown,
        result.score.to_string().bright_white().bold()
    );
}

/// Print a list of words under a heading
pub fn print_words(heading: &str, words: &[String]) {
    println!("\n{} ({})", heading.bright_cyan().bold(), words.len());
    for word in words {
        println!("  • {word}");
    }
}

/// Print every tile drawn from the bag
pub fn print_drawn(letters: &[char]) {
    println!(
        "\n{} ({} tiles)",
        "Drawn:".bright_cyan().bold(),
        letters.len()
    );
    for chunk in letters.chunks(20) {
        println!("   {}", format_letters(chunk));
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    banner("BENCHMARK RESULTS");

    println!("\n📊 {}", "Setup:".bright_cyan().bold());
    println!("   Rounds:           {}", result.rounds);
    println!("   Letters/round:    {}", result.letters_per_round);
    println!("   Mode:             {}", result.mode);

    println!("\n⏱  {}", "Timing (avg per round):".bright_cyan().bold());
    println!(
        "   Naive:            {:.1} µs (slowest {:.1} µs)",
        result.naive.average_micros(result.rounds),
        result.naive.slowest.as_secs_f64() * 1e6
    );
    println!(
        "   Efficient:        {:.1} µs (slowest {:.1} µs)",
        result.efficient.average_micros(result.rounds),
        result.efficient.slowest.as_secs_f64() * 1e6
    );
    println!(
        "   Speedup:          {}",
        format!("{:.1}x", result.speedup()).bright_yellow().bold()
    );

    println!("\n🌳 {}", "Pruning:".bright_cyan().bold());
    println!("   Trie nodes:       {}", result.dictionary_nodes);
    println!(
        "   Visited/round:    {:.1}%",
        result.visited_fraction() * 100.0
    );

    println!();
    if result.disagreements.is_empty() {
        println!(
            "{}",
            format!("✅ Strategies agreed on all {} rounds", result.agreements)
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!(
                "❌ Strategies disagreed on {} rounds",
                result.disagreements.len()
            )
            .red()
            .bold()
        );
        for draw in &result.disagreements {
            println!("   {}", format_letters(draw));
        }
    }
}
