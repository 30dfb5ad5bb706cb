use std::str::FromStr;

use color_eyre::{eyre::eyre, Result};
use one_engine::{Color, PlayAction, TurnAction};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

#[derive(Clone, Copy, Debug, Display, EnumString, EnumIter, PartialEq, Eq)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum CommandType {
    Play,
    Draw,
    Hand,
    Help,
    Quit,
}

impl CommandType {
    fn usage(&self) -> &'static str {
        match self {
            CommandType::Play => "play <index> [color] [swap seat] [challenge]",
            CommandType::Draw => "draw",
            CommandType::Hand => "hand",
            CommandType::Help => "help",
            CommandType::Quit => "quit",
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Turn(TurnAction),
    Hand,
    Help,
    Quit,
}

pub fn help_text() -> String {
    CommandType::iter()
        .map(|command| format!("  {}", command.usage()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parses one input line. Extra `play` arguments may come in any order: a color
/// name selects a wild color, a bare number is the seat to swap with, and the
/// word `challenge` challenges an Add Four.
pub fn parse_command(line: &str) -> Result<Command> {
    let mut words = line.split_whitespace();
    let Some(first) = words.next() else {
        return Err(eyre!("Type a command, `help` lists them"));
    };
    let command_type =
        CommandType::from_str(first).map_err(|_| eyre!("Unknown command `{first}`"))?;

    let command = match command_type {
        CommandType::Draw => Command::Turn(TurnAction::Draw),
        CommandType::Hand => Command::Hand,
        CommandType::Help => Command::Help,
        CommandType::Quit => Command::Quit,
        CommandType::Play => {
            let index = words
                .next()
                .ok_or_else(|| eyre!("Which card? Usage: {}", command_type.usage()))?
                .parse::<usize>()?;
            let mut play_action = PlayAction::card(index);

            for word in words {
                if word.eq_ignore_ascii_case("challenge") {
                    play_action = play_action.challenged(true);
                } else if let Ok(seat) = word.parse::<usize>() {
                    play_action = play_action.with_swap_target(seat);
                } else {
                    let color = Color::from_str(word)
                        .map_err(|_| eyre!("`{word}` is not a color, seat or `challenge`"))?;
                    play_action = play_action.with_color(color);
                }
            }

            Command::Turn(TurnAction::Play(play_action))
        }
    };

    Ok(command)
}
