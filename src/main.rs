//! Terminal Rock-Paper-Scissors (default binary).
//!
//! Prompts for a name, then loops over a move menu until the player quits.
//! Typed phrases stand in for voice commands.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use dialoguer::{Input, Select};

use rust_rps::input::parse_transcript;
use rust_rps::{
    Choice, GameConfig, GameError, JsonFileStore, Leaderboard, Outcome,
    RoundController, RoundResult, SessionState,
};

#[derive(Parser, Debug)]
#[command(name = "rps", version, about = "Rock-Paper-Scissors with a local leaderboard")]
struct Args {
    /// Player name (prompted for when omitted)
    #[arg(short, long)]
    name: Option<String>,

    /// Seed for the computer's moves and commentary
    #[arg(long)]
    seed: Option<u64>,

    /// Directory holding the leaderboard
    #[arg(long, env = "RPS_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Print the leaderboard and exit
    #[arg(long)]
    leaderboard: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn config(&self) -> GameConfig {
        let mut config = GameConfig::new();
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(dir) = &self.data_dir {
            config = config.with_data_dir(dir);
        }
        config
    }
}

const MENU: [&str; 7] = [
    "✊  Rock",
    "✋  Paper",
    "✌️  Scissors",
    "🎤  Say it",
    "🏆  Leaderboard",
    "👤  New player",
    "    Quit",
];

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(match args.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        })
        .parse_default_env()
        .init();

    let config = args.config();
    let mut controller = RoundController::from_config(&config);

    if args.leaderboard {
        print_leaderboard(&controller.leaderboard());
        return Ok(());
    }

    print_leaderboard(&controller.leaderboard());
    let mut session = match args.name.as_deref().map(|n| controller.start_session(n)) {
        Some(Ok(session)) => session,
        Some(Err(e)) => {
            eprintln!("{}", e.to_string().red());
            register(&controller)?
        }
        None => register(&controller)?,
    };

    loop {
        println!(
            "\n{} {}   {} {}",
            "player".dimmed(),
            session.player_name.to_string().bold(),
            "score".dimmed(),
            session.current_score.to_string().bold(),
        );
        let selection = Select::new()
            .with_prompt("Choose your move")
            .items(&MENU)
            .default(0)
            .interact()
            .context("menu selection failed")?;
        session = match selection {
            0 => play(&mut controller, session, Choice::Rock),
            1 => play(&mut controller, session, Choice::Paper),
            2 => play(&mut controller, session, Choice::Scissors),
            3 => match listen()? {
                Some(choice) => play(&mut controller, session, choice),
                None => session,
            },
            4 => {
                print_leaderboard(&controller.leaderboard());
                session
            }
            5 => register(&controller)?,
            _ => break,
        };
    }

    print_leaderboard(&controller.leaderboard());
    Ok(())
}

/// Ask for a name until a usable one is given.
fn register(controller: &RoundController<JsonFileStore>) -> Result<SessionState> {
    loop {
        let raw = Input::<String>::new()
            .with_prompt("Enter your name")
            .allow_empty(true)
            .interact_text()
            .context("name prompt failed")?;
        match controller.start_session(&raw) {
            Ok(session) => return Ok(session),
            Err(GameError::EmptyName) => {
                eprintln!("{}", "Please enter your name to start the game!".red());
            }
            Err(e) => return Err(e.into()),
        }
    }
}

/// Read a spoken-style phrase. Phrases naming no move are ignored.
fn listen() -> Result<Option<Choice>> {
    let transcript = Input::<String>::new()
        .with_prompt("🎤")
        .allow_empty(true)
        .interact_text()
        .context("voice prompt failed")?;
    let choice = parse_transcript(&transcript);
    if choice.is_none() {
        log::debug!("ignored transcript {:?}", transcript);
    }
    Ok(choice)
}

fn play(controller: &mut RoundController<JsonFileStore>, session: SessionState, choice: Choice) -> SessionState {
    let result = controller.play_round(session, choice);
    render(&result);
    result.session
}

fn render(result: &RoundResult) {
    println!(
        "\n   {}   vs   {}",
        result.player_choice.glyph(),
        result.computer_choice.glyph()
    );
    let headline = match result.outcome {
        Outcome::Win => result.headline().green().bold(),
        Outcome::Lose => result.headline().red().bold(),
        Outcome::Tie => result.headline().yellow().bold(),
    };
    println!("   {}", headline);
    if result.is_win() {
        println!("   {}", celebrate(result.session.win_streak));
    }
    println!("   {}", result.commentary.italic().dimmed());
    if let Some(rank) = result.leaderboard.rank_of(&result.session.player_name) {
        println!("   {} #{}", "leaderboard".dimmed(), rank);
    }
}

fn celebrate(streak: u32) -> String {
    let palette = ["🎊", "✨", "🎉", "⭐"];
    let width = 8 + 2 * streak.min(8) as usize;
    (0..width).map(|i| palette[i % palette.len()]).collect()
}

fn print_leaderboard(board: &Leaderboard) {
    println!("\n{}", "🏆 Leaderboard".bold());
    if board.is_empty() {
        println!("{}", "   no scores yet".dimmed());
    } else {
        print!("{}", board);
    }
}
