//! Session module - the caller-side game loop around the pure rules
//!
//! [`GameSession`] wires the pieces together the way a front end does: check the
//! drop, apply it, bank the points, take the shape out of the hand, deal a new
//! hand when it runs dry and ask the oracle whether the game is over. Every
//! successful placement first pushes the previous [`SessionSnapshot`] onto a
//! bounded [`History`] so it can be undone.

use std::collections::VecDeque;

use crate::board::Board;
use crate::catalog::{Hand, HandDealer};
use crate::oracle::{can_place_anywhere, find_placement, MoveHint};
use crate::placement::{apply_placement, can_place, PlacementOutcome};
use crate::rng::{RandomSource, SimpleRng};
use crate::shapes::rotate;
use crate::snapshot::SessionSnapshot;
use crate::types::HISTORY_LIMIT;

/// Why a session rejected a move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceError {
    GameOver,
    NoSuchShape,
    Blocked,
}

impl PlaceError {
    pub fn code(self) -> &'static str {
        match self {
            PlaceError::GameOver => "game_over",
            PlaceError::NoSuchShape => "no_such_shape",
            PlaceError::Blocked => "invalid_place",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            PlaceError::GameOver => "game is over",
            PlaceError::NoSuchShape => "no shape at that hand index",
            PlaceError::Blocked => "shape does not fit at that anchor",
        }
    }
}

impl std::fmt::Display for PlaceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for PlaceError {}

/// Bounded stack of past snapshots; the oldest entry is evicted when full
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<SessionSnapshot>,
    limit: usize,
}

impl History {
    pub fn new(limit: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(limit),
            limit,
        }
    }

    pub fn push(&mut self, snapshot: SessionSnapshot) {
        if self.limit == 0 {
            return;
        }
        if self.entries.len() == self.limit {
            self.entries.pop_front();
        }
        self.entries.push_back(snapshot);
    }

    pub fn pop(&mut self) -> Option<SessionSnapshot> {
        self.entries.pop_back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(HISTORY_LIMIT)
    }
}

/// One game in progress
#[derive(Debug, Clone)]
pub struct GameSession<R = SimpleRng> {
    state: SessionSnapshot,
    dealer: HandDealer<R>,
    difficulty: u32,
    history: History,
}

impl GameSession<SimpleRng> {
    /// Start a new game on an empty board with a freshly dealt hand
    pub fn new(seed: u32, difficulty: u32) -> Self {
        Self::with_dealer(HandDealer::new(seed), difficulty)
    }
}

impl<R: RandomSource> GameSession<R> {
    pub fn with_dealer(mut dealer: HandDealer<R>, difficulty: u32) -> Self {
        let hand = dealer.deal(difficulty);
        let board = Board::new();
        let game_over = !can_place_anywhere(&board, &hand);
        Self {
            state: SessionSnapshot {
                board,
                hand,
                game_over,
                ..SessionSnapshot::default()
            },
            dealer,
            difficulty,
            history: History::default(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.state.board
    }

    pub fn hand(&self) -> &Hand {
        &self.state.hand
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn turn(&self) -> u32 {
        self.state.turn
    }

    pub fn combo(&self) -> u32 {
        self.state.combo
    }

    pub fn game_over(&self) -> bool {
        self.state.game_over
    }

    pub fn difficulty(&self) -> u32 {
        self.difficulty
    }

    /// Number of moves that can currently be undone
    pub fn undo_depth(&self) -> usize {
        self.history.len()
    }

    /// Copy of the current state
    pub fn snapshot(&self) -> SessionSnapshot {
        self.state.clone()
    }

    /// Replace the current state (e.g. a loaded save). Clears undo history.
    pub fn restore(&mut self, snapshot: SessionSnapshot) {
        if let Some(max_id) = snapshot.hand.iter().map(|s| s.id.0).max() {
            self.dealer.resume_ids(max_id.wrapping_add(1));
        }
        self.state = snapshot;
        self.history.clear();
    }

    /// Place the shape at `hand_index` with its anchor on (x, y)
    pub fn place(
        &mut self,
        hand_index: usize,
        x: i8,
        y: i8,
    ) -> Result<PlacementOutcome, PlaceError> {
        if self.state.game_over {
            return Err(PlaceError::GameOver);
        }
        let shape = self
            .state
            .hand
            .get(hand_index)
            .ok_or(PlaceError::NoSuchShape)?;
        if !can_place(&self.state.board, shape, x, y) {
            return Err(PlaceError::Blocked);
        }

        let outcome = apply_placement(&self.state.board, shape, x, y, self.state.combo);
        self.history.push(self.state.clone());

        self.state.board = outcome.board.clone();
        self.state.score = self.state.score.saturating_add(outcome.points);
        self.state.combo = outcome.combo_out;
        self.state.turn = self.state.turn.saturating_add(1);
        self.state.hand.remove(hand_index);

        if self.state.hand.is_empty() {
            self.state.hand = self.dealer.deal(self.difficulty);
        }
        self.state.game_over = !can_place_anywhere(&self.state.board, &self.state.hand);

        Ok(outcome)
    }

    /// Rotate the shape at `hand_index` a quarter turn clockwise.
    ///
    /// Not a turn: the turn counter and undo history are left alone.
    pub fn rotate(&mut self, hand_index: usize) -> Result<(), PlaceError> {
        if self.state.game_over {
            return Err(PlaceError::GameOver);
        }
        let shape = self
            .state
            .hand
            .get_mut(hand_index)
            .ok_or(PlaceError::NoSuchShape)?;
        *shape = rotate(shape);
        Ok(())
    }

    /// Step back to the state before the last placement
    pub fn undo(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                self.state = previous;
                true
            }
            None => false,
        }
    }

    /// A legal move for the current hand, if any
    pub fn hint(&self) -> Option<MoveHint> {
        find_placement(&self.state.board, &self.state.hand)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::HAND_SIZE;

    #[test]
    fn test_history_evicts_oldest() {
        let mut history = History::new(2);
        for turn in 0..3 {
            history.push(SessionSnapshot {
                turn,
                ..SessionSnapshot::default()
            });
        }
        assert_eq!(history.len(), 2);
        assert_eq!(history.pop().map(|s| s.turn), Some(2));
        assert_eq!(history.pop().map(|s| s.turn), Some(1));
        assert!(history.pop().is_none());
    }

    #[test]
    fn test_zero_limit_history_keeps_nothing() {
        let mut history = History::new(0);
        history.push(SessionSnapshot::default());
        assert!(history.is_empty());
    }

    #[test]
    fn test_new_session() {
        let session = GameSession::new(1, 0);
        assert_eq!(session.hand().len(), HAND_SIZE);
        assert_eq!(session.score(), 0);
        assert_eq!(session.turn(), 0);
        assert!(!session.game_over());
        assert_eq!(session.undo_depth(), 0);
    }

    #[test]
    fn test_place_errors() {
        let mut session = GameSession::new(1, 0);
        assert_eq!(session.place(7, 0, 0), Err(PlaceError::NoSuchShape));
        assert_eq!(session.place(0, -1, 0), Err(PlaceError::Blocked));
        assert_eq!(session.turn(), 0);
        assert_eq!(PlaceError::Blocked.code(), "invalid_place");
    }

    #[test]
    fn test_rotate_keeps_id_and_turn() {
        let mut session = GameSession::new(4, 0);
        let before = session.hand()[0].clone();
        session.rotate(0).unwrap();
        let after = &session.hand()[0];
        assert_eq!(after.id, before.id);
        assert_eq!(after, &rotate(&before));
        assert_eq!(session.turn(), 0);
        assert_eq!(session.undo_depth(), 0);
        assert_eq!(session.rotate(5), Err(PlaceError::NoSuchShape));
    }

    #[test]
    fn test_place_then_undo() {
        let mut session = GameSession::new(8, 0);
        let before = session.snapshot();
        let outcome = session.place(0, 0, 0).unwrap();

        assert_eq!(session.turn(), 1);
        assert_eq!(session.score(), outcome.points);
        assert_eq!(session.hand().len(), HAND_SIZE - 1);
        assert_eq!(session.undo_depth(), 1);

        assert!(session.undo());
        assert_eq!(session.snapshot(), before);
        assert!(!session.undo());
    }

    #[test]
    fn test_empty_hand_is_refilled_with_fresh_ids() {
        let mut session = GameSession::new(3, 0);
        let first_ids: Vec<_> = session.hand().iter().map(|s| s.id).collect();

        // No catalog shape is wider or taller than 3, so disjoint quadrants always fit.
        for (x, y) in [(0, 0), (3, 0), (0, 3)] {
            session.place(0, x, y).unwrap();
        }

        assert_eq!(session.hand().len(), HAND_SIZE);
        for shape in session.hand() {
            assert!(!first_ids.contains(&shape.id));
        }
    }

    #[test]
    fn test_game_over_blocks_moves() {
        let mut session = GameSession::new(1, 0);
        let mut snap = session.snapshot();
        snap.board = Board::from_ascii(&["xxxxxx"; 6]).unwrap();
        snap.game_over = true;
        session.restore(snap);

        assert!(session.game_over());
        assert_eq!(session.place(0, 0, 0), Err(PlaceError::GameOver));
        assert_eq!(session.rotate(0), Err(PlaceError::GameOver));
        assert_eq!(session.hint(), None);
    }
}
