//! Whether one card may legally be placed on another.

use tracing::trace;

use crate::card::{Card, CardKind, Color};
use crate::rules::RuleSet;

/// Decides whether `candidate` may be placed on `bottom`.
///
/// `active_wild_color` is the color selected when `bottom` was played, if it is a wild
/// card. It is ignored for every other bottom card.
pub fn is_playable_after(
    bottom: &Card,
    candidate: &Card,
    rules: &RuleSet,
    active_wild_color: Option<Color>,
) -> bool {
    let playable = match bottom.kind() {
        CardKind::Number0
        | CardKind::Number1
        | CardKind::Number2
        | CardKind::Number3
        | CardKind::Number4
        | CardKind::Number5
        | CardKind::Number6
        | CardKind::Number7
        | CardKind::Number8
        | CardKind::Number9
        | CardKind::Block
        | CardKind::Rotate => {
            candidate.kind() == bottom.kind()
                || candidate.color() == bottom.color()
                || candidate.color().is_wild()
        }
        CardKind::Add2 => {
            (candidate.color() == bottom.color() && candidate.kind() != CardKind::Add2)
                || (candidate.kind() == CardKind::Add2 && rules.add_2_stackable)
        }
        CardKind::ColorSelect | CardKind::AddFour => {
            if bottom.color().is_wild() {
                Some(candidate.color()) == active_wild_color
                    || (candidate.color().is_wild() && rules.black_on_black)
            } else {
                // Unreachable while wild kinds are always wild-colored.
                rules.black_on_black
            }
        }
    };

    trace!(%bottom, %candidate, ?active_wild_color, playable, "compatibility");
    playable
}

/// The cards of `hand` that may be placed on `bottom`, in hand order.
pub fn filter_playable(
    bottom: &Card,
    hand: &[Card],
    rules: &RuleSet,
    active_wild_color: Option<Color>,
) -> Vec<Card> {
    hand.iter()
        .filter(|card| is_playable_after(bottom, card, rules, active_wild_color))
        .copied()
        .collect()
}

/// Positions in `hand` of the cards that may be placed on `bottom`.
pub fn playable_indices(
    bottom: &Card,
    hand: &[Card],
    rules: &RuleSet,
    active_wild_color: Option<Color>,
) -> Vec<usize> {
    hand.iter()
        .enumerate()
        .filter(|(_, card)| is_playable_after(bottom, card, rules, active_wild_color))
        .map(|(index, _)| index)
        .collect()
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    fn card(color: Color, kind: CardKind) -> Card {
        Card::new(color, kind).unwrap()
    }

    fn every_card() -> Vec<Card> {
        CardKind::iter()
            .flat_map(|kind| Color::iter().filter_map(move |color| Card::new(color, kind).ok()))
            .collect()
    }

    fn all_rules() -> impl Iterator<Item = RuleSet> {
        RuleSet::default().combinations()
    }

    #[test]
    fn number_cards_match_on_kind_or_color() {
        for rules in all_rules() {
            let blue_0 = card(Color::Blue, CardKind::Number0);

            assert!(is_playable_after(&blue_0, &card(Color::Blue, CardKind::Number7), &rules, None));
            assert!(is_playable_after(&blue_0, &card(Color::Green, CardKind::Number0), &rules, None));
            assert!(is_playable_after(&blue_0, &card(Color::Blue, CardKind::Number0), &rules, None));
            assert!(!is_playable_after(&blue_0, &card(Color::Green, CardKind::Number7), &rules, None));
        }
    }

    #[test]
    fn plain_bottom_accepts_same_kind_same_color_or_wild() {
        let cards = every_card();
        for rules in all_rules() {
            for bottom in cards.iter().filter(|c| c.rank() <= CardKind::LAST_PLAIN_RANK) {
                for candidate in &cards {
                    let expected = candidate.kind() == bottom.kind()
                        || candidate.color() == bottom.color()
                        || candidate.is_wild();
                    assert_eq!(
                        is_playable_after(bottom, candidate, &rules, None),
                        expected,
                        "{candidate} on {bottom}"
                    );
                }
            }
        }
    }

    #[test]
    fn add_2_stacks_only_when_allowed() {
        for rules in all_rules() {
            for bottom_color in Color::PLAYABLE {
                for candidate_color in Color::PLAYABLE {
                    let bottom = card(bottom_color, CardKind::Add2);
                    let candidate = card(candidate_color, CardKind::Add2);
                    assert_eq!(
                        is_playable_after(&bottom, &candidate, &rules, None),
                        rules.add_2_stackable,
                        "{candidate} on {bottom}"
                    );
                }
            }
        }
    }

    #[test]
    fn add_2_accepts_other_kinds_of_its_color() {
        let rules = RuleSet::classic();
        let green_add_2 = card(Color::Green, CardKind::Add2);

        assert!(is_playable_after(&green_add_2, &card(Color::Green, CardKind::Number4), &rules, None));
        assert!(!is_playable_after(&green_add_2, &card(Color::Red, CardKind::Number4), &rules, None));
        assert!(!is_playable_after(&green_add_2, &Card::wild(CardKind::ColorSelect).unwrap(), &rules, None));
    }

    #[test]
    fn add_2_on_plain_and_wild_cards() {
        for rules in all_rules() {
            let green_add_2 = card(Color::Green, CardKind::Add2);
            let add_four = Card::wild(CardKind::AddFour).unwrap();

            assert!(is_playable_after(&card(Color::Green, CardKind::Number1), &green_add_2, &rules, None));
            assert!(!is_playable_after(&card(Color::Blue, CardKind::Number1), &green_add_2, &rules, None));
            assert!(is_playable_after(&add_four, &green_add_2, &rules, Some(Color::Green)));
            assert!(!is_playable_after(&add_four, &green_add_2, &rules, Some(Color::Red)));
        }
    }

    #[test]
    fn wild_on_wild_requires_black_on_black() {
        let wild_kinds = [CardKind::ColorSelect, CardKind::AddFour];
        for rules in all_rules() {
            for bottom_kind in wild_kinds {
                for candidate_kind in wild_kinds {
                    let bottom = Card::wild(bottom_kind).unwrap();
                    let candidate = Card::wild(candidate_kind).unwrap();
                    assert_eq!(
                        is_playable_after(&bottom, &candidate, &rules, Some(Color::Red)),
                        rules.black_on_black,
                        "{candidate} on {bottom}"
                    );
                }
            }
        }
    }

    #[test]
    fn colored_card_follows_the_selected_color() {
        for rules in all_rules() {
            let color_select = Card::wild(CardKind::ColorSelect).unwrap();
            let green_rotate = card(Color::Green, CardKind::Rotate);

            assert!(is_playable_after(&color_select, &green_rotate, &rules, Some(Color::Green)));
            assert!(!is_playable_after(&color_select, &green_rotate, &rules, Some(Color::Blue)));
            assert!(!is_playable_after(&color_select, &green_rotate, &rules, None));
        }
    }

    #[test]
    fn filter_keeps_hand_order() {
        let rules = RuleSet::classic();
        let bottom = card(Color::Red, CardKind::Number5);
        let hand = vec![
            card(Color::Blue, CardKind::Number1),
            card(Color::Red, CardKind::Block),
            card(Color::Yellow, CardKind::Number2),
            Card::wild(CardKind::AddFour).unwrap(),
            card(Color::Green, CardKind::Number5),
        ];

        assert_eq!(
            filter_playable(&bottom, &hand, &rules, None),
            vec![hand[1], hand[3], hand[4]]
        );
        assert_eq!(playable_indices(&bottom, &hand, &rules, None), vec![1, 3, 4]);
        assert!(filter_playable(&bottom, &[], &rules, None).is_empty());
    }
}
