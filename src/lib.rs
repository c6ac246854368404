//! Crate root module declarations for the Ember Chess rules core.
//!
//! Exposes the board model, per-piece movement geometry, legal move
//! generation, search/evaluation, the selectable engines and the game
//! controller that a presentation layer drives.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_controller;
    pub mod game_state;
    pub mod position_key;

    #[cfg(test)]
    pub(crate) mod test_support;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_descriptions;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod perft;
}

pub mod search {
    pub mod board_scoring;
    pub mod learned_scorer;
    pub mod minimax;
    pub mod move_ordering;
    pub mod negamax;
}

pub mod engines {
    pub mod engine_greedy;
    pub mod engine_minimax;
    pub mod engine_negamax;
    pub mod engine_select;
    pub mod engine_trait;
}

pub mod utils {
    pub mod engine_match_harness;
    pub mod render_board;
}
