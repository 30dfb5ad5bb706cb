use crate::card::Color;

/// Seating order in which turns advance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Clockwise,
    CounterClockwise,
}

impl Direction {
    pub fn flipped(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }

    /// Seat offset of one step in this direction.
    pub fn step(self) -> isize {
        match self {
            Direction::Clockwise => 1,
            Direction::CounterClockwise => -1,
        }
    }
}

/// Everything a player may attach to playing a card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlayAction {
    /// Position of the card in the current hand.
    pub index: usize,
    /// Required for wild cards.
    pub color_selection: Option<Color>,
    /// Required for a 7 when sevens swap.
    pub swap_target: Option<usize>,
    /// Set when the next player challenges an Add Four.
    pub add_4_challenged: bool,
}

impl PlayAction {
    pub fn card(index: usize) -> Self {
        Self {
            index,
            ..Self::default()
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color_selection = Some(color);
        self
    }

    pub fn with_swap_target(mut self, seat: usize) -> Self {
        self.swap_target = Some(seat);
        self
    }

    pub fn challenged(mut self, challenged: bool) -> Self {
        self.add_4_challenged = challenged;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnAction {
    Draw,
    Play(PlayAction),
}

impl TurnAction {
    /// Builds an action from the loose arguments of [`crate::game::GameState::step`].
    pub fn from_parts(
        played_index: Option<usize>,
        color_selection: Option<Color>,
        swap_target: Option<usize>,
        add_4_challenged: bool,
    ) -> Self {
        match played_index {
            None => TurnAction::Draw,
            Some(index) => TurnAction::Play(PlayAction {
                index,
                color_selection,
                swap_target,
                add_4_challenged,
            }),
        }
    }
}

/// Why an action was refused. A refused action never changes the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rejection {
    CardNotInHand,
    NotPlayable,
    MustPlay,
    InvalidColorSelection,
    InvalidSwapTarget,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    Applied,
    Rejected(Rejection),
    RoundOver,
}

impl TurnOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, TurnOutcome::Applied)
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, TurnOutcome::Rejected(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_flips_back_and_forth() {
        assert_eq!(Direction::Clockwise.flipped(), Direction::CounterClockwise);
        assert_eq!(Direction::Clockwise.flipped().flipped(), Direction::Clockwise);
        assert_eq!(Direction::Clockwise.step(), 1);
        assert_eq!(Direction::CounterClockwise.step(), -1);
    }

    #[test]
    fn missing_index_means_draw() {
        assert_eq!(
            TurnAction::from_parts(None, Some(Color::Red), Some(1), true),
            TurnAction::Draw
        );
        assert_eq!(
            TurnAction::from_parts(Some(2), Some(Color::Red), None, true),
            TurnAction::Play(PlayAction::card(2).with_color(Color::Red).challenged(true))
        );
    }
}
