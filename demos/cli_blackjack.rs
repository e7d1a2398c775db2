//! CLI blackjack example.
//!
//! Usage: `cargo run --example cli_blackjack -- [muted|print|log|<file>]`

use std::io::{self, BufRead, Write};

use bjenv::{Action, Game, GameOptions, LogOption, StepResult};

fn main() {
    let log_option = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<LogOption>().ok())
        .unwrap_or_default();
    let options = GameOptions::default().with_log_option(log_option);

    let mut game = match Game::from_entropy(options) {
        Ok(game) => game,
        Err(err) => {
            eprintln!("Setup error: {err}");
            return;
        }
    };

    if let Err(err) = game.reset() {
        eprintln!("Deal error: {err}");
        return;
    }

    let names: Vec<&str> = Action::ALL.iter().map(|action| action.name()).collect();
    println!("Player's Actions: {names:?}");

    loop {
        let Some(action) = prompt_action() else {
            break;
        };
        if action == Action::Exit {
            break;
        }

        match game.dispatch(action) {
            Ok(Some(StepResult::Finished(outcome))) => {
                println!("Round over: {outcome} (reward {})", outcome.reward());
            }
            Ok(_) => {}
            Err(err) => {
                println!("Game error: {err}. Starting a new round.");
                if let Err(err) = game.reset() {
                    eprintln!("Deal error: {err}");
                    return;
                }
            }
        }
    }
}

/// Reads lines until one names an action. Returns `None` at end of input.
fn prompt_action() -> Option<Action> {
    let stdin = io::stdin();
    loop {
        let _ = io::stdout().flush();

        let mut input = String::new();
        match stdin.lock().read_line(&mut input) {
            Ok(0) | Err(_) => return None,
            Ok(_) => {}
        }

        match input.parse() {
            Ok(action) => return Some(action),
            Err(_) => println!("Invalid Input! Please retry"),
        }
    }
}
