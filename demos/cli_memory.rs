//! CLI memory game example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use memrs::{Card, Face, Game, MemoryStore, Settings, Transition, VirtualScheduler};

const CARDS_PER_ROW: usize = 8;

fn main() {
    // Set RUST_LOG=debug to trace every transition.
    let _logger = flexi_logger::Logger::try_with_env_or_str("warn")
        .and_then(flexi_logger::Logger::start)
        .ok();

    println!("Memory CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let game = match Game::from_settings(Settings::new(MemoryStore::new()), seed) {
        Ok(game) => game,
        Err(err) => {
            println!("Setup error: {err}");
            return;
        }
    };

    let mut stdin = io::stdin().lock();
    let Some(name) = prompt_line(&mut stdin, "Player name (blank for guest): ") else {
        return;
    };
    let Some(count) = prompt_usize(&mut stdin, "Cards (8, 16, 24, 32, 40, 48): ") else {
        return;
    };
    if let Err(err) = game.save_settings(&name, count) {
        println!("Settings error: {err}. Keeping {} cards.", game.card_count().get());
    }

    let options = game.options();
    let reveal_ms = u64::from(options.reveal_delay_ms);
    let settle_ms = u64::from(options.settle_delay_ms);
    let mut timers = VirtualScheduler::new();

    loop {
        print_board(&game);
        let stats = game.stats();
        println!(
            "Attempts: {}  Matched: {}/{}  High score: {}%",
            stats.attempts,
            stats.matched_pairs,
            game.card_count().pairs(),
            game.best_score()
        );

        let Some(index) = prompt_usize(&mut stdin, "Card number: ") else {
            println!("Goodbye.");
            break;
        };

        if game.click(index, &mut timers).is_ignored() {
            println!("That card cannot be picked.");
            continue;
        }

        let transitions = game.advance(&mut timers, reveal_ms);
        if !transitions
            .iter()
            .any(|t| matches!(t, Transition::PairSelected { .. }))
        {
            continue;
        }

        print_board(&game);
        thread::sleep(Duration::from_millis(settle_ms));

        for transition in game.advance(&mut timers, settle_ms) {
            match transition {
                Transition::Matched { .. } => println!("{}", colorize("Match!", "32")),
                Transition::Mismatched { .. } => println!("{}", colorize("No match.", "31")),
                Transition::RoundComplete { score, .. } => {
                    println!("{}", colorize("Board cleared!", "32"));
                    println!("Correct: {}%", score.accuracy);
                    println!("High score: {}%", score.best);

                    match prompt_line(&mut stdin, "Play again? (y/n): ").as_deref() {
                        Some("y" | "yes") => {
                            if let Err(err) = game.new_round() {
                                println!("Deal error: {err}");
                                return;
                            }
                        }
                        _ => return,
                    }
                }
                _ => {}
            }
        }
    }
}

/// Reads one trimmed line; `None` once input is closed or unreadable.
fn prompt_line<R: BufRead>(reader: &mut R, prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match reader.read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_string()),
    }
}

fn prompt_usize<R: BufRead>(reader: &mut R, prompt: &str) -> Option<usize> {
    loop {
        let input = prompt_line(reader, prompt)?.to_lowercase();
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<usize>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn print_board(game: &Game) {
    println!();
    for row in game.cards().chunks(CARDS_PER_ROW) {
        let line: Vec<String> = row.iter().map(format_card).collect();
        println!("{}", line.join(" "));
    }
    println!();
}

fn format_card(card: &Card) -> String {
    match card.face() {
        Face::Down => format!("[{:>2}]", card.index),
        Face::Up => colorize(&format!(" {:>2} ", card.symbol.id()), "33"),
        Face::Cleared => colorize("  ..", "90"),
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

#[cfg(test)]
mod tests {
    use super::{prompt_line, prompt_usize};

    #[test]
    fn prompts_give_up_at_end_of_input() {
        let mut input: &[u8] = b"";
        assert_eq!(prompt_line(&mut input, ""), None);
        assert_eq!(prompt_usize(&mut input, ""), None);

        let mut input: &[u8] = b"lots\n";
        assert_eq!(prompt_usize(&mut input, ""), None);
    }

    #[test]
    fn prompts_retry_until_a_number_arrives() {
        let mut input: &[u8] = b"lots\n 16 \n";
        assert_eq!(prompt_usize(&mut input, ""), Some(16));

        let mut input: &[u8] = b"q\n8\n";
        assert_eq!(prompt_usize(&mut input, ""), None);
        assert_eq!(prompt_line(&mut input, "").as_deref(), Some("8"));
    }
}
