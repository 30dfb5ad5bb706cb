/// Which wild color an AddFour challenge is judged against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ChallengeBasis {
    /// The color that was active before the AddFour was played.
    #[default]
    PreviousSelection,
    /// The color chosen together with the AddFour.
    NewSelection,
}

/// House rule selection for one round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RuleSet {
    /// Cards dealt to every player at the start of the round.
    pub player_card_count: usize,
    /// A wild card may be placed on another wild card.
    pub black_on_black: bool,
    /// Playing a 0 passes every hand one seat in the current direction.
    pub zero_passes_on: bool,
    /// Playing a 7 swaps hands with a chosen player.
    pub seven_swaps: bool,
    /// An Add Two may be placed on any other Add Two.
    pub add_2_stackable: bool,
    /// The victim of an Add Four may challenge it.
    pub add_4_challengeable: bool,
    /// Drawing does not end the turn.
    pub draw_until_play: bool,
    /// Drawing is refused while the hand holds a playable card.
    pub mandatory_playing: bool,
    pub challenge_basis: ChallengeBasis,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            player_card_count: 7,
            black_on_black: true,
            zero_passes_on: true,
            seven_swaps: true,
            add_2_stackable: true,
            add_4_challengeable: true,
            draw_until_play: true,
            mandatory_playing: true,
            challenge_basis: ChallengeBasis::default(),
        }
    }
}

impl RuleSet {
    /// Plain rules: every optional behaviour switched off.
    pub fn classic() -> Self {
        Self {
            black_on_black: false,
            zero_passes_on: false,
            seven_swaps: false,
            add_2_stackable: false,
            add_4_challengeable: false,
            draw_until_play: false,
            mandatory_playing: false,
            ..Self::default()
        }
    }

    /// Every combination of the seven boolean options, keeping the other fields.
    pub fn combinations(self) -> impl Iterator<Item = RuleSet> {
        (0u8..1 << 7).map(move |bits| RuleSet {
            black_on_black: bits & 1 != 0,
            zero_passes_on: bits & (1 << 1) != 0,
            seven_swaps: bits & (1 << 2) != 0,
            add_2_stackable: bits & (1 << 3) != 0,
            add_4_challengeable: bits & (1 << 4) != 0,
            draw_until_play: bits & (1 << 5) != 0,
            mandatory_playing: bits & (1 << 6) != 0,
            ..self
        })
    }
}
