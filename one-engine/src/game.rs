use tracing::{debug, warn};

use crate::card::{Card, CardKind, Color};
use crate::compat::{filter_playable, is_playable_after, playable_indices};
use crate::constants::{ADD_2_PENALTY, ADD_4_PENALTY, FAILED_ADD_4_PENALTY};
use crate::deck::{Deck, DiscardPile};
use crate::error::{EngineError, Result};
use crate::hand::Hand;
use crate::rng::GameRng;
use crate::rules::{ChallengeBasis, RuleSet};
use crate::turn::{Direction, PlayAction, Rejection, TurnAction, TurnOutcome};

/// One round: every card is in exactly one of the draw pile, the discard pile, a
/// hand, or the cards set aside while flipping the starter.
#[derive(Clone, Debug)]
pub struct GameState {
    rules: RuleSet,
    draw_pile: Deck,
    discard_pile: DiscardPile,
    burned: Vec<Card>,
    hands: Vec<Hand>,
    current_turn: usize,
    direction: Direction,
    active_wild_color: Option<Color>,
    rng: GameRng,
}

impl GameState {
    /// Deals a standard deck shuffled from entropy.
    pub fn new(player_count: usize, rules: RuleSet) -> Result<Self> {
        Self::with_rng(player_count, rules, None, GameRng::from_entropy())
    }

    pub fn with_seed(player_count: usize, rules: RuleSet, seed: u64) -> Result<Self> {
        Self::with_rng(player_count, rules, None, GameRng::new(seed))
    }

    /// Shuffles `deck` (the standard deck when `None`), flips the starter and deals.
    pub fn with_rng(
        player_count: usize,
        rules: RuleSet,
        deck: Option<Vec<Card>>,
        mut rng: GameRng,
    ) -> Result<Self> {
        if player_count == 0 {
            return Err(EngineError::NotEnoughPlayers);
        }

        let mut draw_pile = deck.map(Deck::from).unwrap_or_else(Deck::standard);
        draw_pile.shuffle(&mut rng);

        let (starter, burned) = draw_pile
            .draw_starting_card()
            .ok_or(EngineError::NoStartingCard)?;

        // An impossible deal saturates instead of wrapping.
        let needed = rules.player_card_count.saturating_mul(player_count);
        if draw_pile.cards_count() < needed {
            return Err(EngineError::DeckExhausted {
                needed,
                available: draw_pile.cards_count(),
            });
        }

        let mut hands = vec![Hand::default(); player_count];
        for _ in 0..rules.player_card_count {
            for hand in hands.iter_mut() {
                if let Some(card) = draw_pile.draw() {
                    hand.add_card(card);
                }
            }
        }

        debug!(
            player_count,
            seed = rng.seed(),
            %starter,
            draw_pile = draw_pile.cards_count(),
            "dealt a new round"
        );

        Ok(GameState {
            rules,
            draw_pile,
            discard_pile: DiscardPile::new(starter),
            burned,
            hands,
            current_turn: 0,
            direction: Direction::Clockwise,
            active_wild_color: None,
            rng,
        })
    }

    /// Applies one action for the current player.
    ///
    /// `played_index` of `None` draws a card. The other arguments only matter for
    /// the cards that need them.
    pub fn step(
        &mut self,
        played_index: Option<usize>,
        color_selection: Option<Color>,
        swap_target: Option<usize>,
        add_4_challenged: bool,
    ) -> TurnOutcome {
        self.play_turn(TurnAction::from_parts(
            played_index,
            color_selection,
            swap_target,
            add_4_challenged,
        ))
    }

    pub fn play_turn(&mut self, turn_action: TurnAction) -> TurnOutcome {
        if self.is_round_over() {
            return TurnOutcome::RoundOver;
        }

        let seat = self.current_turn;
        let outcome = match turn_action {
            TurnAction::Draw => self.perform_draw(),
            TurnAction::Play(play_action) => self.perform_play(play_action),
        };

        debug!(seat, ?turn_action, ?outcome, next = self.current_turn, "turn");
        outcome
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn player_count(&self) -> usize {
        self.hands.len()
    }

    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    pub fn hand(&self, seat: usize) -> Option<&Hand> {
        self.hands.get(seat)
    }

    pub fn hand_sizes(&self) -> Vec<usize> {
        self.hands.iter().map(Hand::cards_count).collect()
    }

    pub fn current_hand(&self) -> &[Card] {
        self.hands[self.current_turn].cards()
    }

    pub fn top_of_discard(&self) -> &Card {
        self.discard_pile.top()
    }

    pub fn discard_pile(&self) -> &DiscardPile {
        &self.discard_pile
    }

    pub fn draw_pile(&self) -> &[Card] {
        self.draw_pile.cards()
    }

    /// Cards flipped and set aside while looking for the starting card.
    pub fn burned_cards(&self) -> &[Card] {
        &self.burned
    }

    pub fn current_turn_index(&self) -> usize {
        self.current_turn
    }

    pub fn next_turn_index(&self) -> usize {
        self.nth_seat(1)
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn active_wild_color(&self) -> Option<Color> {
        self.active_wild_color
    }

    /// Positions in the current hand that may be played right now.
    pub fn playable_indices(&self) -> Vec<usize> {
        playable_indices(
            self.top_of_discard(),
            self.current_hand(),
            &self.rules,
            self.active_wild_color,
        )
    }

    pub fn is_round_over(&self) -> bool {
        self.hands.iter().all(Hand::is_empty)
    }

    fn perform_draw(&mut self) -> TurnOutcome {
        if self.rules.mandatory_playing && !self.playable_indices().is_empty() {
            return TurnOutcome::Rejected(Rejection::MustPlay);
        }

        self.draw_cards_to_player(self.current_turn, 1);

        if !self.rules.draw_until_play {
            self.end_turn();
        }
        TurnOutcome::Applied
    }

    fn perform_play(&mut self, play_action: PlayAction) -> TurnOutcome {
        let Some(card) = self.hands[self.current_turn].get(play_action.index).copied() else {
            return TurnOutcome::Rejected(Rejection::CardNotInHand);
        };

        if !is_playable_after(
            self.top_of_discard(),
            &card,
            &self.rules,
            self.active_wild_color,
        ) {
            return TurnOutcome::Rejected(Rejection::NotPlayable);
        }

        if let Err(rejection) = self.check_play(&card, &play_action) {
            return TurnOutcome::Rejected(rejection);
        }

        // Nothing below can refuse the play any more.
        self.hands[self.current_turn].remove_card(play_action.index);

        if self.is_round_over() {
            if card.is_wild() {
                self.active_wild_color = play_action.color_selection;
            }
            self.place_on_discard_pile(card);
            return TurnOutcome::RoundOver;
        }

        self.apply_card_effect(&card, &play_action);
        self.end_turn();
        self.place_on_discard_pile(card);

        if self.is_round_over() {
            TurnOutcome::RoundOver
        } else {
            TurnOutcome::Applied
        }
    }

    /// Validates the inputs a card needs before the card leaves the hand.
    fn check_play(&self, card: &Card, play_action: &PlayAction) -> Result<(), Rejection> {
        match card.kind() {
            CardKind::Number7 if self.rules.seven_swaps => match play_action.swap_target {
                Some(target) if target != self.current_turn && target < self.hands.len() => Ok(()),
                _ => Err(Rejection::InvalidSwapTarget),
            },
            CardKind::ColorSelect | CardKind::AddFour => match play_action.color_selection {
                Some(color) if !color.is_wild() => Ok(()),
                _ => Err(Rejection::InvalidColorSelection),
            },
            _ => Ok(()),
        }
    }

    fn apply_card_effect(&mut self, card: &Card, play_action: &PlayAction) {
        match card.kind() {
            CardKind::Number0 if self.rules.zero_passes_on => self.pass_hands(),
            CardKind::Number7 if self.rules.seven_swaps => {
                if let Some(target) = play_action.swap_target {
                    self.hands.swap(self.current_turn, target);
                    debug!(seat = self.current_turn, target, "swapped hands");
                }
            }
            CardKind::Block => self.move_turn_n_players_ahead(1),
            CardKind::Rotate => self.direction = self.direction.flipped(),
            CardKind::Add2 => {
                let victim = self.nth_seat(1);
                self.draw_cards_to_player(victim, ADD_2_PENALTY);
            }
            CardKind::ColorSelect => self.active_wild_color = play_action.color_selection,
            CardKind::AddFour => self.resolve_add_four(play_action),
            CardKind::Number0
            | CardKind::Number1
            | CardKind::Number2
            | CardKind::Number3
            | CardKind::Number4
            | CardKind::Number5
            | CardKind::Number6
            | CardKind::Number7
            | CardKind::Number8
            | CardKind::Number9 => {}
        }
    }

    fn resolve_add_four(&mut self, play_action: &PlayAction) {
        let previous_selection = self.active_wild_color;
        self.active_wild_color = play_action.color_selection;

        let challenge_upheld = play_action.add_4_challenged
            && self.rules.add_4_challengeable
            && self.had_alternative_to_add_four(previous_selection);

        if challenge_upheld {
            debug!(seat = self.current_turn, "add four challenge upheld");
            self.draw_cards_to_player(self.current_turn, FAILED_ADD_4_PENALTY);
        } else {
            let victim = self.nth_seat(1);
            self.draw_cards_to_player(victim, ADD_4_PENALTY);
        }
    }

    /// Whether the current hand (the Add Four already removed) holds another card
    /// that could have gone on the discard pile instead.
    fn had_alternative_to_add_four(&self, previous_selection: Option<Color>) -> bool {
        let selection = match self.rules.challenge_basis {
            ChallengeBasis::PreviousSelection => previous_selection,
            ChallengeBasis::NewSelection => self.active_wild_color,
        };

        filter_playable(
            self.top_of_discard(),
            self.current_hand(),
            &self.rules,
            selection,
        )
        .iter()
        .any(|card| card.kind() != CardKind::AddFour)
    }

    fn pass_hands(&mut self) {
        match self.direction {
            Direction::Clockwise => self.hands.rotate_right(1),
            Direction::CounterClockwise => self.hands.rotate_left(1),
        }
        debug!(direction = ?self.direction, "passed every hand one seat");
    }

    fn place_on_discard_pile(&mut self, card: Card) {
        self.discard_pile.push(card);
        if !card.is_wild() {
            self.active_wild_color = None;
        }
    }

    /// Moves to the next seat that still holds cards.
    fn end_turn(&mut self) {
        self.move_turn_n_players_ahead(1);
        if self.is_round_over() {
            return;
        }
        while self.hands[self.current_turn].is_empty() {
            self.move_turn_n_players_ahead(1);
        }
    }

    fn draw_cards_to_player(&mut self, seat: usize, count: usize) {
        for _ in 0..count {
            match self.draw_card() {
                Some(card) => self.hands[seat].add_card(card),
                None => {
                    warn!(seat, "no cards left to draw");
                    break;
                }
            }
        }
    }

    fn draw_card(&mut self) -> Option<Card> {
        if self.draw_pile.is_empty() {
            self.reshuffle_discard_pile();
        }
        self.draw_pile.draw()
    }

    /// Turns everything below the top of the discard pile into a new draw pile.
    fn reshuffle_discard_pile(&mut self) {
        let cards = self.discard_pile.take_below();
        if cards.is_empty() {
            return;
        }

        debug!(cards = cards.len(), "reshuffling the discard pile");
        self.draw_pile.refill(cards, &mut self.rng);
    }

    fn nth_seat(&self, n: usize) -> usize {
        let seats = self.hands.len() as isize;
        let offset = self.direction.step() * n as isize;
        (self.current_turn as isize + offset).rem_euclid(seats) as usize
    }

    fn move_turn_n_players_ahead(&mut self, n: usize) {
        self.current_turn = self.nth_seat(n);
    }
}
