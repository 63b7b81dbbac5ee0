//! Terminal front end: the player against rule-based bots.

use core::time::Duration;
use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjtable::{
    Card, Controller, ControllerState, EndGameStats, EntityStatus, EntitySummary, Frame,
    FrameError, FrameUpdate, GameOptions, StartupInputs, Suit, ThreadSleep, UpdateCommand, View,
};
use log::{info, warn};
use pico_args::Arguments;

const HELP: &str = "\
Play blackjack against bots in the terminal

USAGE:
  bjtable [OPTIONS]

OPTIONS:
  --seed       N           Shuffle seed               [default: env BJTABLE_SEED or clock]
  --threshold  N           Bots hit below this total  [default: 17]
  --delay-ms   MS          Pause before bot actions   [default: 1000]
  --max-bots   N           Largest table allowed      [default: 7]

FLAGS:
  -h, --help               Print help information

ENVIRONMENT:
  RUST_LOG                 Log level (e.g. info, debug)
";

/// Stdin/stdout view. Frames are registered by name when it is built.
struct TerminalView {
    frames: Vec<&'static str>,
    current: Option<Frame>,
    max_bots: u8,
}

impl TerminalView {
    fn new(frames: &[Frame], max_bots: u8) -> Self {
        let frames = frames
            .iter()
            .map(|frame| {
                info!("Creating [{}] frame", frame.name());
                frame.name()
            })
            .collect();

        Self {
            frames,
            current: None,
            max_bots,
        }
    }

    const fn current(&self) -> Option<Frame> {
        self.current
    }
}

impl View for TerminalView {
    fn show_frame(&mut self, frame: Frame) -> Result<(), FrameError> {
        if !self.frames.contains(&frame.name()) {
            return Err(FrameError::Unknown(frame.name()));
        }
        info!("Displaying frame ({})", frame.name());
        self.current = Some(frame);

        match frame {
            Frame::Startup => println!("\n=== Blackjack ==="),
            Frame::Game => println!("\n=== Table ==="),
            Frame::End => println!("\n=== Round over ==="),
        }
        Ok(())
    }

    fn update_frame(&mut self, update: FrameUpdate) {
        match update {
            FrameUpdate::Table(commands) => print_table(&commands),
            FrameUpdate::EndGame(stats) => print_end_game(&stats),
        }
    }

    fn get_inputs(&mut self) -> StartupInputs {
        let amount_of_bots = loop {
            let prompt = format!("Number of bots (0-{}): ", self.max_bots);
            match prompt_line(&prompt).parse::<u8>() {
                Ok(value) => break value,
                Err(_) => println!("Please enter a number."),
            }
        };
        let bot_delay_enabled = matches!(
            prompt_line("Pause before bot moves? (y/n): ").as_str(),
            "y" | "yes"
        );

        StartupInputs {
            amount_of_bots,
            bot_delay_enabled,
        }
    }

    fn request_quit(&mut self) -> bool {
        matches!(
            prompt_line("Do you want to quit? (y/n): ").as_str(),
            "y" | "yes"
        )
    }

    fn show_error(&mut self, title: &str, text: &str) {
        warn!("{title}: {text}");
        println!("{}", colorize(&format!("[{title}] {text}"), "31"));
    }
}

fn main() {
    let mut pargs = Arguments::from_env();

    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        return;
    }

    let seed = pargs.value_from_str("--seed").unwrap_or_else(|_| {
        std::env::var("BJTABLE_SEED")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(|| {
                SystemTime::now()
                    .duration_since(UNIX_EPOCH)
                    .unwrap_or_default()
                    .as_secs()
            })
    });
    let defaults = GameOptions::default();
    let options = GameOptions::default()
        .with_seed(seed)
        .with_bot_hit_below(
            pargs
                .value_from_str("--threshold")
                .unwrap_or(defaults.bot_hit_below),
        )
        .with_bot_delay(
            pargs
                .value_from_str("--delay-ms")
                .map_or(defaults.bot_delay, Duration::from_millis),
        )
        .with_max_bots(pargs.value_from_str("--max-bots").unwrap_or(defaults.max_bots));

    env_logger::builder().format_target(false).init();
    info!("Seed {seed}");

    let view = TerminalView::new(&Frame::ALL, options.max_bots);
    let mut controller = Controller::new(view, ThreadSleep, options);
    if let Err(err) = controller.launch() {
        eprintln!("{err}");
        return;
    }

    while controller.state() != ControllerState::Terminated {
        let frame = controller.view().current();
        let line = match frame {
            Some(Frame::Game) => prompt_line("[h]it [s]tand [q]uit: "),
            Some(Frame::End) => prompt_line("[n]ew game [m]enu [q]uit: "),
            _ => prompt_line("[p]lay [q]uit: "),
        };

        let result = match (frame, line.as_str()) {
            (_, "q" | "quit") => {
                controller.quit_program();
                Ok(())
            }
            (Some(Frame::Game), "h" | "hit") => controller.on_hit(),
            (Some(Frame::Game), "s" | "stand") => controller.on_stand(),
            (Some(Frame::End), "m" | "menu") => controller.goto_start_frame(),
            (Some(Frame::End), "n" | "new") | (Some(Frame::Startup) | None, "p" | "play") => {
                controller.start_game()
            }
            _ => {
                println!("Unknown action.");
                Ok(())
            }
        };

        if let Err(err) = result {
            println!("Error: {err}");
            if controller.state() == ControllerState::RoundEnd
                && controller.view().current() != Some(Frame::End)
            {
                // The round was aborted before the end frame could be shown.
                let _ = controller.goto_start_frame();
            }
        }
    }

    println!("Goodbye.");
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) => {
            println!();
            std::process::exit(0);
        }
        Ok(_) => input.trim().to_lowercase(),
        Err(_) => String::new(),
    }
}

fn print_table(commands: &[UpdateCommand]) {
    let mut current = None;
    let mut remaining = 0;
    let mut seats = Vec::new();

    for command in commands {
        match command {
            UpdateCommand::ShowEntity(summary) => seats.push(summary),
            UpdateCommand::SetCurrent(seat) => current = *seat,
            UpdateCommand::SetCardsRemaining(count) => remaining = *count,
        }
    }

    println!("\nDeck: {remaining} cards remaining");
    for summary in seats {
        let marker = if Some(summary.id) == current { "*" } else { " " };
        println!("{marker} {}", format_seat(summary));
    }
    println!();
}

fn print_end_game(stats: &EndGameStats) {
    for summary in &stats.entities {
        println!("  {}", format_seat(summary));
    }

    if stats.winners.is_empty() {
        println!("\nEverybody busted. Nobody wins.");
    } else if stats.player_won() {
        println!("\n{}", colorize("You win!", "32"));
    } else {
        let names: Vec<&str> = stats
            .entities
            .iter()
            .filter(|e| stats.winners.contains(&e.id))
            .map(|e| e.label.as_str())
            .collect();
        println!("\nWinner: {}", names.join(", "));
    }
    println!();
}

fn format_seat(summary: &EntitySummary) -> String {
    let cards = if summary.cards.is_empty() {
        "(empty)".to_string()
    } else {
        summary
            .cards
            .iter()
            .map(format_card)
            .collect::<Vec<_>>()
            .join(" ")
    };

    format!(
        "{:<8} {} | value {} | {}",
        summary.label,
        cards,
        summary.total,
        format_status(summary.status)
    )
}

fn format_status(status: EntityStatus) -> String {
    match status {
        EntityStatus::Active => colorize("playing", "90"),
        EntityStatus::Stood => colorize("stood", "34"),
        EntityStatus::Bust => colorize("bust", "31"),
        EntityStatus::Won => colorize("won", "32"),
    }
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs | Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
