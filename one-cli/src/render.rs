use one_engine::{GameState, TurnOutcome};

pub fn table(game: &GameState) -> String {
    let top = game.top_of_discard();
    let mut lines = vec![
        match game.active_wild_color() {
            Some(color) => format!("Top card: {top} (playing {color})"),
            None => format!("Top card: {top}"),
        },
        format!(
            "Draw pile: {} | Direction: {:?}",
            game.draw_pile().len(),
            game.direction()
        ),
    ];
    for (seat, size) in game.hand_sizes().into_iter().enumerate() {
        let marker = if seat == game.current_turn_index() { ">" } else { " " };
        lines.push(format!("{marker} Player {seat}: {size} cards"));
    }
    lines.join("\n")
}

pub fn hand(game: &GameState) -> String {
    let playable = game.playable_indices();
    game.current_hand()
        .iter()
        .enumerate()
        .map(|(index, card)| {
            let marker = if playable.contains(&index) { "*" } else { " " };
            format!("{marker} [{index}] {card}")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn outcome(outcome: &TurnOutcome) -> String {
    match outcome {
        TurnOutcome::Applied => "Done.".to_string(),
        TurnOutcome::Rejected(rejection) => format!("Not allowed: {rejection:?}"),
        TurnOutcome::RoundOver => "Every hand is empty, the round is over.".to_string(),
    }
}
