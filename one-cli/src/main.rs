mod commands;
mod render;

use std::io::{self, BufRead, Write};

use clap::Parser;
use color_eyre::Result;
use one_engine::{GameRng, GameState, RuleSet};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::commands::{help_text, parse_command, Command};

/// Hot-seat terminal round of the card game.
#[derive(Debug, Parser)]
#[command(name = "one", version)]
struct Args {
    /// Number of players at the table
    #[arg(short, long, default_value_t = 2)]
    players: usize,

    /// Shuffle seed, random when omitted
    #[arg(short, long)]
    seed: Option<u64>,

    /// Cards dealt to every player
    #[arg(long, default_value_t = 7)]
    hand_size: usize,

    #[arg(long)]
    no_black_on_black: bool,
    #[arg(long)]
    no_zero_passes: bool,
    #[arg(long)]
    no_seven_swaps: bool,
    #[arg(long)]
    no_add_2_stacking: bool,
    #[arg(long)]
    no_add_4_challenge: bool,
    #[arg(long)]
    no_draw_until_play: bool,
    #[arg(long)]
    no_mandatory_playing: bool,
}

impl Args {
    fn rules(&self) -> RuleSet {
        RuleSet {
            player_card_count: self.hand_size,
            black_on_black: !self.no_black_on_black,
            zero_passes_on: !self.no_zero_passes,
            seven_swaps: !self.no_seven_swaps,
            add_2_stackable: !self.no_add_2_stacking,
            add_4_challengeable: !self.no_add_4_challenge,
            draw_until_play: !self.no_draw_until_play,
            mandatory_playing: !self.no_mandatory_playing,
            ..RuleSet::default()
        }
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let rng = args.seed.map(GameRng::new).unwrap_or_else(GameRng::from_entropy);
    info!(seed = rng.seed(), players = args.players, "starting round");

    let mut game = GameState::with_rng(args.players, args.rules(), None, rng)?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        println!("\n{}", render::table(&game));
        println!("Player {}, your hand:\n{}", game.current_turn_index(), render::hand(&game));
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };

        match parse_command(&line?) {
            Ok(Command::Turn(turn_action)) => {
                let outcome = game.play_turn(turn_action);
                println!("{}", render::outcome(&outcome));
                if game.is_round_over() {
                    break;
                }
            }
            Ok(Command::Hand) => println!("{}", render::hand(&game)),
            Ok(Command::Help) => println!("{}", help_text()),
            Ok(Command::Quit) => break,
            Err(error) => println!("{error}"),
        }
    }

    Ok(())
}
