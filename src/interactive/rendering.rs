//! TUI rendering with ratatui
//!
//! Layout for the letters game: drawn tiles, the player's answers, the solver's
//! best words once revealed, and a message log.

use super::app::{App, InputMode, MessageStyle};
use crate::commands::Verdict;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);
    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = format!(
        "🔤 LETTERS - {} mode, {} letters",
        app.config.mode, app.config.count
    );
    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(3)])
        .split(area);

    render_tiles(f, app, chunks[0]);
    render_history(f, app, chunks[1]);
}

fn render_tiles(f: &mut Frame, app: &App, area: Rect) {
    let content = app.round.as_ref().map_or_else(
        || Line::from("No letters drawn (Ctrl-N)"),
        |round| {
            let spans: Vec<Span> = round
                .letters
                .iter()
                .flat_map(|&c| {
                    let score = app.solver.letters_set().info(c).score;
                    [
                        Span::styled(
                            format!(" {}{score} ", c.to_ascii_uppercase()),
                            Style::default()
                                .fg(Color::Black)
                                .bg(Color::Yellow)
                                .add_modifier(Modifier::BOLD),
                        ),
                        Span::raw(" "),
                    ]
                })
                .collect();
            Line::from(spans)
        },
    );

    let paragraph = Paragraph::new(vec![Line::default(), content])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Letters ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(paragraph, area);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .history
        .iter()
        .rev()
        .map(|entry| {
            let (detail, color) = match entry.verdict {
                Verdict::Unknown => ("not a word".to_string(), Color::Red),
                Verdict::NotFormable => ("letters missing".to_string(), Color::Red),
                Verdict::Valid { metric, best: true } => (format!("{metric} ★"), Color::Green),
                Verdict::Valid { metric, best: false } => (metric.to_string(), Color::Yellow),
            };
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<12}", entry.word.to_uppercase()),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(detail, Style::default().fg(color)),
            ]))
        })
        .collect();

    let history =
        List::new(items).block(Block::default().title(" Your Words ").borders(Borders::ALL));
    f.render_widget(history, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // Best-so-far gauge
            Constraint::Percentage(50), // Solutions
            Constraint::Min(3),         // Messages
        ])
        .split(area);

    render_progress(f, app, chunks[0]);
    render_solutions(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_progress(f: &mut Frame, app: &App, area: Rect) {
    let best = app.round.as_ref().map_or(0, |round| round.solutions.metric);
    let yours = app
        .history
        .iter()
        .filter_map(|entry| match entry.verdict {
            Verdict::Valid { metric, .. } => Some(metric),
            _ => None,
        })
        .max()
        .unwrap_or(0);
    let percent = if best == 0 {
        0
    } else {
        (u64::from(yours.min(best)) * 100 / u64::from(best)) as u16
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Your Best ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{yours}/{best} {}", app.config.mode.metric_name()));
    f.render_widget(gauge, area);
}

fn render_solutions(f: &mut Frame, app: &App, area: Rect) {
    let content = match (&app.round, app.input_mode) {
        (Some(round), InputMode::Revealed) if round.solutions.is_empty() => {
            vec![Line::from("No word can be formed")]
        }
        (Some(round), InputMode::Revealed) => {
            let mut lines = vec![Line::from(format!(
                "{} {}:",
                app.config.mode.metric_name(),
                round.solutions.metric
            ))];
            lines.extend(round.solutions.words.iter().map(|word| {
                Line::from(Span::styled(
                    format!("  {}", word.to_uppercase()),
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ))
            }));
            lines
        }
        (Some(round), InputMode::Answering) => vec![Line::from(format!(
            "{} word(s) score {} (TAB to reveal)",
            round.solutions.words.len(),
            round.solutions.metric
        ))],
        (None, _) => Vec::new(),
    };

    let paragraph = Paragraph::new(content)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(" Best Words ")
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::Green)),
        );
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(10)
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));
    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::Answering => (
            " Type a word | Enter to submit | TAB to reveal ",
            app.input_buffer.to_uppercase(),
            Color::Yellow,
        ),
        InputMode::Revealed => (" Round over | Enter for next round ", String::new(), Color::Green),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );
    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(35),
            Constraint::Percentage(40),
        ])
        .split(area);

    let strategy = Paragraph::new(format!("Solver: {}", app.solver.strategy().name()))
        .alignment(Alignment::Center);
    f.render_widget(strategy, chunks[0]);

    let stats = Paragraph::new(format!(
        "Rounds: {} | Best found: {} | Points: {}",
        app.stats.rounds, app.stats.best_found, app.stats.points
    ))
    .alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help = Paragraph::new("Esc/Ctrl-C: Quit | Ctrl-N: New Round")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::PlayConfig;
    use crate::core::{Dictionary, LetterInfo, LettersSet};
    use crate::solver::{GameMode, Solver, StrategyType};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn renders_round_without_panicking() {
        let dictionary: Dictionary = ["cat", "act"].into_iter().collect();
        let letters: LettersSet = [
            ('a', LetterInfo::new(1, 1)),
            ('c', LetterInfo::new(1, 3)),
            ('t', LetterInfo::new(1, 1)),
        ]
        .into_iter()
        .collect();
        let solver = Solver::new(StrategyType::default(), &dictionary, &letters);
        let mut config = PlayConfig::new(GameMode::Score);
        config.count = 3;
        let mut app = App::new(solver, config, StdRng::seed_from_u64(1));
        app.new_round();
        app.reveal();

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("ACT"));
        assert!(text.contains("CAT"));
    }
}
