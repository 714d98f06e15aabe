use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use boggle::{config::Config, Boggle, Dictionary, Session};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const HELP: &str = "\
Commands:
  roll              shake the board (clears all word lists)
  pick <i> [<i>..]  add dice to the current word (0-15, row by row)
  clear             start the current word over
  submit            check the current word
  words             show correct and incorrect words
  prefix <p>        list dictionary words starting with <p>
  json              print the board as JSON
  help              show this message
  quit              leave the game";

/// A line typed at the prompt
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Roll,
    Pick(Vec<usize>),
    Clear,
    Submit,
    Words,
    Prefix(String),
    Json,
    Help,
    Quit,
}

impl Command {
    /// `None` for anything that is not a recognised command
    fn parse(line: &str) -> Option<Self> {
        let mut parts = line.split_whitespace();
        let command = match parts.next()?.to_lowercase().as_str() {
            "roll" => Command::Roll,
            "pick" => {
                let indices = parts
                    .map(str::parse)
                    .collect::<std::result::Result<Vec<usize>, _>>()
                    .ok()?;
                if indices.is_empty() {
                    return None;
                }
                Command::Pick(indices)
            }
            "clear" => Command::Clear,
            "submit" => Command::Submit,
            "words" => Command::Words,
            "prefix" => Command::Prefix(parts.next()?.to_string()),
            "json" => Command::Json,
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => return None,
        };
        Some(command)
    }
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "boggle=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    tracing::info!("Starting Boggle...");

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    // A missing word list is fatal
    let dictionary = Dictionary::load(config.dictionary_path())
        .with_context(|| format!("Cannot start without a dictionary at {}", config.dictionary_path()))?;

    let game = match config.game.seed {
        Some(seed) => {
            tracing::info!("Using fixed seed {}", seed);
            Boggle::with_seed(dictionary, seed)
        }
        None => Boggle::new(dictionary),
    };
    let mut session = Session::new(game);

    println!("{}", HELP);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let Some(command) = Command::parse(&line) else {
            tracing::debug!("Ignoring unrecognised input {:?}", line.trim());
            continue;
        };

        match command {
            Command::Roll => {
                println!("{}", session.roll());
            }
            Command::Pick(indices) => {
                for index in indices {
                    if let Err(e) = session.select(index) {
                        println!("{}", e);
                        break;
                    }
                }
                println!("Word: {}", session.current_word());
            }
            Command::Clear => session.clear_word(),
            Command::Submit => {
                let word = session.current_word();
                match session.submit() {
                    Ok(true) => println!("{} is a Boggle word", word),
                    Ok(false) => println!("{} is not a Boggle word", word),
                    Err(e) => println!("{}", e),
                }
            }
            Command::Words => {
                println!("Correct words:   {}", session.correct_words().join(", "));
                println!("Incorrect words: {}", session.incorrect_words().join(", "));
            }
            Command::Prefix(prefix) => {
                let words = session.service().dictionary().words_starting_with(&prefix);
                let shown: Vec<&str> = words.iter().take(50).map(String::as_str).collect();
                println!("{} words: {}", words.len(), shown.join(" "));
            }
            Command::Json => match session.board() {
                Some(board) => println!("{}", serde_json::to_string(board)?),
                None => println!("{}", boggle::BoggleError::NotRolled),
            },
            Command::Help => println!("{}", HELP),
            Command::Quit => break,
        }
    }

    tracing::info!(
        "Session finished with {} correct words",
        session.correct_words().len()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("roll"), Some(Command::Roll));
        assert_eq!(Command::parse("  SUBMIT \n"), Some(Command::Submit));
        assert_eq!(Command::parse("pick 0 1 5"), Some(Command::Pick(vec![0, 1, 5])));
        assert_eq!(
            Command::parse("prefix Ca"),
            Some(Command::Prefix("Ca".to_string()))
        );
        assert_eq!(Command::parse("exit"), Some(Command::Quit));
    }

    #[test]
    fn test_unrecognised_input_is_ignored() {
        assert_eq!(Command::parse(""), None);
        assert_eq!(Command::parse("dance"), None);
        assert_eq!(Command::parse("pick"), None);
        assert_eq!(Command::parse("pick one"), None);
        assert_eq!(Command::parse("prefix"), None);
    }
}
