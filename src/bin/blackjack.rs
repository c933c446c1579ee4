//! Interactive console blackjack.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::{ArgAction, Parser};
use colored::{ColoredString, Colorize};
use log::LevelFilter;
use simplejack::prompt::{self, Decision};
use simplejack::{ActionError, Card, Game, GameState, Outcome, ShowdownError, Suit};
use thiserror::Error;

/// Play one game of simplified blackjack against the dealer.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Seed for shuffling the deck. Defaults to the current time.
    #[arg(long)]
    seed: Option<u64>,
    /// Raise log verbosity (repeat for more).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
    /// Disable coloured output.
    #[arg(long)]
    plain: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("action error: {0}")]
    Action(#[from] ActionError),
    #[error("dealer error: {0}")]
    Showdown(#[from] ShowdownError),
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logger(args.verbose);

    if args.plain {
        colored::control::set_override(false);
    }

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    log::info!("shuffling with seed {seed}");

    let stdin = io::stdin();
    let stdout = io::stdout();
    match play(Game::with_seed(seed), &mut stdin.lock(), &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn play<R: BufRead, W: Write>(
    mut game: Game,
    input: &mut R,
    out: &mut W,
) -> Result<(), CliError> {
    writeln!(out, "Welcome to Blackjack.")?;
    writeln!(out, "Rules: Face cards are 10 points. Aces are 11 points.")?;
    writeln!(out, "       All other cards are at face value.")?;
    writeln!(out)?;

    writeln!(out, "Your hand:")?;
    print_cards(out, game.player_hand().cards())?;
    writeln!(out)?;
    writeln!(out, "Dealer's hand:")?;
    print_cards(out, game.dealer_hand().cards())?;
    writeln!(out)?;

    while game.state() == GameState::PlayerTurn {
        let Some(decision) = prompt::ask(
            input,
            out,
            "Type h for new card, s to stop: ",
            Decision::parse,
        )?
        else {
            writeln!(out)?;
            writeln!(out, "Goodbye.")?;
            return Ok(());
        };

        match decision {
            Decision::Hit => {
                let card = game.hit()?;
                writeln!(out, "You drew the {}", paint(&card))?;
                writeln!(out)?;
            }
            Decision::Stand => game.stand()?,
        }
    }

    if game.player_bust() {
        writeln!(out, "You went bust, dealer wins.")?;
    } else {
        for card in game.dealer_play()? {
            writeln!(out, "Dealer drew the {}", paint(&card))?;
        }
        writeln!(out)?;
        if let Some(verdict) = game.outcome().map(verdict) {
            writeln!(out, "{verdict}")?;
        }
    }

    writeln!(out)?;
    let result = game.showdown()?;
    writeln!(
        out,
        "The final scores were player: {}; dealer: {}",
        result.player_score, result.dealer_score
    )?;
    Ok(())
}

const fn verdict(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::PlayerBust => "You went bust, dealer wins.",
        Outcome::DealerBust => "Dealer went bust, you win!",
        Outcome::DealerWins => "Dealer outscored you, dealer wins.",
        Outcome::PlayerWins => "You outscored dealer, you win!",
        Outcome::Tie => "The game was a tie.",
    }
}

fn print_cards<W: Write>(out: &mut W, cards: &[Card]) -> io::Result<()> {
    for card in cards {
        writeln!(out, "{}", paint(card))?;
    }
    Ok(())
}

fn paint(card: &Card) -> ColoredString {
    let text = card.to_string();
    match card.suit {
        Suit::Hearts | Suit::Diamonds => text.red(),
        Suit::Clubs => text.green(),
        Suit::Spades => text.blue(),
    }
}
