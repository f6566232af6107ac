use std::time::{Duration, Instant};

use sodo_client::Level;
use sodo_core::{Board, Budget, CellGrid};

/// Identifies one game session.
///
/// Replies are tagged with the game that issued them; a reply for an older
/// game is dropped.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct GameId(u64);

impl GameId {
    #[must_use]
    fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// Whether the current game still takes input.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub(crate) enum GameStatus {
    #[default]
    Playing,
    /// A full-board check found no wrong entry.
    Solved { score: u32 },
    /// The solution was shown; the game cannot be won any more.
    Revealed,
}

// AppState holds the current game session. Nothing is persisted; a restart
// starts a new session on the server.
#[derive(Debug)]
pub(crate) struct AppState {
    pub(crate) grid: CellGrid,
    pub(crate) mistakes: Budget,
    pub(crate) hints: Budget,
    pub(crate) level: Level,
    pub(crate) game_id: GameId,
    pub(crate) status: GameStatus,
    started_at: Instant,
    finished_at: Option<Instant>,
}

impl AppState {
    /// An empty board shown until the first puzzle arrives.
    #[must_use]
    pub(crate) fn new(level: Level, now: Instant) -> Self {
        Self {
            grid: CellGrid::new(),
            mistakes: Budget::mistakes(),
            hints: Budget::hints(),
            level,
            game_id: GameId::default(),
            status: GameStatus::Playing,
            started_at: now,
            finished_at: None,
        }
    }

    /// Replaces the session with a fresh puzzle and resets budgets, focus and
    /// the timer.
    pub(crate) fn start_game(&mut self, level: Level, givens: &Board, now: Instant) {
        self.grid = CellGrid::from_givens(givens);
        self.mistakes = Budget::mistakes();
        self.hints = Budget::hints();
        self.level = level;
        self.game_id = self.game_id.next();
        self.status = GameStatus::Playing;
        self.started_at = now;
        self.finished_at = None;
    }

    #[must_use]
    pub(crate) fn is_over(&self) -> bool {
        !self.status.is_playing()
    }

    /// Ends the game and stops the timer.
    pub(crate) fn finish(&mut self, status: GameStatus, now: Instant) {
        self.status = status;
        self.finished_at.get_or_insert(now);
    }

    /// Time spent on the game; frozen once it is over.
    #[must_use]
    pub(crate) fn elapsed(&self, now: Instant) -> Duration {
        self.finished_at
            .unwrap_or(now)
            .saturating_duration_since(self.started_at)
    }
}

#[cfg(test)]
mod tests {
    use sodo_core::{Digit, Position};

    use super::*;

    #[test]
    fn start_game_resets_session() {
        let now = Instant::now();
        let mut app_state = AppState::new(Level::Beginner, now);
        app_state.mistakes.record();
        app_state.hints.record();
        app_state.grid.set_focus(Position::new(1, 1));
        let before = app_state.game_id;

        let mut givens = Board::new();
        givens.set(Position::new(0, 0), Some(Digit::D3));
        let later = now + Duration::from_secs(90);
        app_state.start_game(Level::Expert, &givens, later);

        assert_ne!(app_state.game_id, before);
        assert_eq!(app_state.level, Level::Expert);
        assert_eq!(app_state.mistakes.count(), 0);
        assert_eq!(app_state.hints.count(), 0);
        assert_eq!(app_state.grid.focus(), None);
        assert!(app_state.grid.cell(Position::new(0, 0)).is_given());
        assert_eq!(app_state.elapsed(later), Duration::ZERO);
    }

    #[test]
    fn finished_game_freezes_the_timer() {
        let now = Instant::now();
        let mut app_state = AppState::new(Level::Beginner, now);
        app_state.start_game(Level::Beginner, &Board::new(), now);

        let end = now + Duration::from_secs(42);
        app_state.finish(GameStatus::Revealed, end);
        assert!(app_state.is_over());
        assert_eq!(app_state.elapsed(end + Duration::from_secs(60)), Duration::from_secs(42));

        app_state.start_game(Level::Beginner, &Board::new(), end);
        assert!(!app_state.is_over());
        assert_eq!(app_state.elapsed(end + Duration::from_secs(5)), Duration::from_secs(5));
    }
}
