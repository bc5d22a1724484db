//! Simple interactive CLI mode
//!
//! Text-based letters game without TUI

use super::play::{PlayConfig, RoundResult, Verdict, judge_answer, play_round};
use crate::output::formatters::{format_letters, format_solutions};
use crate::solver::{Solver, Strategy};
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails, or if the letter
/// set cannot supply a round.
pub fn run_simple<S: Strategy, R: Rng + ?Sized>(
    config: PlayConfig,
    solver: &Solver<S>,
    rng: &mut R,
) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(config, solver, rng, &mut stdin.lock(), &mut stdout.lock())
}

/// Play rounds reading answers from `input` until it ends or the player quits
///
/// # Errors
///
/// Returns an error on I/O failure or when a round cannot be drawn.
pub fn run_session<S, R, I, O>(
    config: PlayConfig,
    solver: &Solver<S>,
    rng: &mut R,
    input: &mut I,
    output: &mut O,
) -> Result<()>
where
    S: Strategy,
    R: Rng + ?Sized,
    I: BufRead,
    O: Write,
{
    writeln!(output, "\n{}", "═".repeat(60).cyan())?;
    writeln!(
        output,
        " {} ",
        format!("LETTERS GAME ({} mode, {} letters)", config.mode, config.count)
            .bright_cyan()
            .bold()
    )?;
    writeln!(output, "{}", "═".repeat(60).cyan())?;
    writeln!(output, "Type a word using the letters shown.")?;
    writeln!(output, "Commands: 'skip' to see the answers, 'quit' to exit\n")?;

    let mut round_number = 1;
    loop {
        let round = play_round(config, solver, rng)?;

        writeln!(output, "{}", "─".repeat(60))?;
        writeln!(output, "Round {round_number}: {}", format_letters(&round.letters))?;

        let Some(answer) = prompt(input, output, "Your word")? else {
            writeln!(output)?;
            return Ok(());
        };

        match answer.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                writeln!(output, "\nThanks for playing!\n")?;
                return Ok(());
            }
            "skip" | "" => {}
            word => report_answer(solver, &round, word, output)?,
        }

        writeln!(output, "{}", format_solutions(&round.solutions, round.mode))?;
        round_number += 1;
    }
}

fn report_answer<S: Strategy, O: Write>(
    solver: &Solver<S>,
    round: &RoundResult,
    word: &str,
    output: &mut O,
) -> io::Result<()> {
    let label = word.to_uppercase();
    match judge_answer(solver, round, word) {
        Verdict::Unknown => writeln!(output, "{}", format!("✗ {label} is not in the dictionary").red()),
        Verdict::NotFormable => writeln!(
            output,
            "{}",
            format!("✗ {label} cannot be formed from these letters").red()
        ),
        Verdict::Valid { metric, best: true } => writeln!(
            output,
            "{}",
            format!("✓ {label} is a best answer ({} {metric})", round.mode.metric_name())
                .green()
                .bold()
        ),
        Verdict::Valid { metric, best: false } => writeln!(
            output,
            "{}",
            format!(
                "~ {label} is valid ({} {metric}, best is {})",
                round.mode.metric_name(),
                round.solutions.metric
            )
            .yellow()
        ),
    }
}

/// Get user input with a prompt; `None` once input is exhausted
fn prompt<I: BufRead, O: Write>(
    input: &mut I,
    output: &mut O,
    message: &str,
) -> io::Result<Option<String>> {
    write!(output, "{message}: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Dictionary, LetterInfo, LettersSet};
    use crate::solver::{EfficientSolver, GameMode};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;

    fn setup_solver() -> EfficientSolver {
        let dictionary: Dictionary = ["cat", "act", "at", "a"].into_iter().collect();
        let letters: LettersSet = [
            ('a', LetterInfo::new(1, 1)),
            ('c', LetterInfo::new(1, 3)),
            ('t', LetterInfo::new(1, 1)),
        ]
        .into_iter()
        .collect();
        EfficientSolver::efficient(&dictionary, &letters)
    }

    fn run(answers: &str) -> String {
        let solver = setup_solver();
        let mut config = PlayConfig::new(GameMode::Length);
        config.count = 3;
        let mut rng = StdRng::seed_from_u64(3);
        let mut input = Cursor::new(answers.as_bytes().to_vec());
        let mut output = Vec::new();

        run_session(config, &solver, &mut rng, &mut input, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn best_answer_is_recognized() {
        let transcript = run("cat\nquit\n");
        assert!(transcript.contains("CAT is a best answer"));
        assert!(transcript.contains("Round 2"));
        assert!(transcript.contains("Thanks for playing"));
    }

    #[test]
    fn weaker_and_unknown_answers() {
        let transcript = run("at\ntac\n");
        assert!(transcript.contains("AT is valid"));
        assert!(transcript.contains("TAC is not in the dictionary"));
        assert!(transcript.contains("Round 3"));
    }

    #[test]
    fn skip_shows_solutions() {
        let transcript = run("skip\n");
        assert!(transcript.contains("ACT"));
        assert!(transcript.contains("CAT"));
    }
}
