use crate::card::Color;

pub(crate) const NUMBER_CARDS_PER_COLOR: &[u8] =
    &[0, 1, 1, 2, 2, 3, 3, 4, 4, 5, 5, 6, 6, 7, 7, 8, 8, 9, 9];
pub(crate) const BLOCK_CARDS_PER_COLOR: u8 = 2;
pub(crate) const ROTATE_CARDS_PER_COLOR: u8 = 2;
pub(crate) const ADD_2_CARDS_PER_COLOR: u8 = 2;

const PLAYABLE_COLORS: usize = Color::PLAYABLE.len();

pub(crate) const NUMBER_CARDS_IN_DECK: u8 = (NUMBER_CARDS_PER_COLOR.len() * PLAYABLE_COLORS) as u8;
pub(crate) const BLOCK_CARDS_IN_DECK: u8 = BLOCK_CARDS_PER_COLOR * PLAYABLE_COLORS as u8;
pub(crate) const ROTATE_CARDS_IN_DECK: u8 = ROTATE_CARDS_PER_COLOR * PLAYABLE_COLORS as u8;
pub(crate) const ADD_2_CARDS_IN_DECK: u8 = ADD_2_CARDS_PER_COLOR * PLAYABLE_COLORS as u8;

pub(crate) const COLOR_SELECT_CARDS_IN_DECK: u8 = 4;
pub(crate) const ADD_4_CARDS_IN_DECK: u8 = 4;

pub const TOTAL_CARDS_IN_DECK: u8 = NUMBER_CARDS_IN_DECK
    + BLOCK_CARDS_IN_DECK
    + ROTATE_CARDS_IN_DECK
    + ADD_2_CARDS_IN_DECK
    + COLOR_SELECT_CARDS_IN_DECK
    + ADD_4_CARDS_IN_DECK;

pub(crate) const ADD_2_PENALTY: usize = 2;
pub(crate) const ADD_4_PENALTY: usize = 4;
pub(crate) const FAILED_ADD_4_PENALTY: usize = 6;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correct_card_count_constants() {
        assert_eq!(NUMBER_CARDS_PER_COLOR.len(), 19);
        assert_eq!(NUMBER_CARDS_IN_DECK, 76);

        assert_eq!(BLOCK_CARDS_IN_DECK, 8);

        assert_eq!(ROTATE_CARDS_IN_DECK, 8);

        assert_eq!(ADD_2_CARDS_IN_DECK, 8);

        assert_eq!(TOTAL_CARDS_IN_DECK, 108);
    }
}
