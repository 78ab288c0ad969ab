//! Puzzle session: the single owner of the game state.
//!
//! A session loads its state from storage (or starts fresh), and routes
//! every click through the same cycle:
//!
//! 1. Rotate the clicked cube
//! 2. Revalidate every goal
//! 3. Save the state
//!
//! ## Usage
//!
//! ```
//! use instant_insanity::core::{Orientation, PuzzleConfig};
//! use instant_insanity::session::Session;
//! use instant_insanity::storage::MemoryStorage;
//!
//! let mut session = Session::open(MemoryStorage::new(), PuzzleConfig::classic());
//! session.click(0, Orientation::Left).unwrap();
//! assert_eq!(session.moves(), 1);
//! ```

use tracing::{debug, info};

use crate::core::{Click, GameState, Orientation, PuzzleConfig, ScrambleRng};
use crate::error::{InsanityError, Result};
use crate::rules::{is_solved, rotate, validate};
use crate::storage::{load_state, save_state, Storage};

/// A running puzzle bound to a storage backend.
#[derive(Debug)]
pub struct Session<S: Storage> {
    config: PuzzleConfig,
    storage: S,
    state: GameState,
    /// Clicks applied since the session was opened or reset.
    history: Vec<Click>,
}

impl<S: Storage> Session<S> {
    /// Open a session, restoring saved state when there is any.
    ///
    /// Missing or malformed saved state falls back to the configured initial
    /// cubes. Goals are always revalidated, whatever the source.
    pub fn open(storage: S, config: PuzzleConfig) -> Self {
        let state = match load_state(&storage, &config.storage_key) {
            Some(state) => {
                info!(key = %config.storage_key, "restored saved state");
                state
            }
            None => {
                info!(key = %config.storage_key, "starting from initial state");
                config.initial_state()
            }
        };

        let mut session = Self {
            config,
            storage,
            state,
            history: Vec::new(),
        };
        session.revalidate();
        session
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Session configuration.
    #[must_use]
    pub fn config(&self) -> &PuzzleConfig {
        &self.config
    }

    /// The storage backend.
    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Number of clicks applied in this session.
    #[must_use]
    pub fn moves(&self) -> usize {
        self.history.len()
    }

    /// Clicks applied in this session, oldest first.
    #[must_use]
    pub fn history(&self) -> &[Click] {
        &self.history
    }

    /// Check if every goal holds.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        is_solved(&self.state.goals)
    }

    /// Click the face at `clicked` on cube `cube`.
    ///
    /// Rotates the cube, revalidates all goals, and saves.
    pub fn click(&mut self, cube: usize, clicked: Orientation) -> Result<&GameState> {
        self.apply(Click::new(cube, clicked))?;
        Ok(&self.state)
    }

    /// Apply a click action. See [`Session::click`].
    pub fn apply(&mut self, click: Click) -> Result<()> {
        let count = self.state.cube_count();
        let target = self
            .state
            .cube_mut(click.cube)
            .ok_or(InsanityError::UnknownCube {
                index: click.cube,
                count,
            })?;

        rotate(target, click.clicked);
        self.revalidate();
        self.history.push(click);

        debug!(%click, solved = self.is_solved(), "applied click");

        self.save()
    }

    /// Apply `clicks` random clicks drawn from `seed`.
    ///
    /// The same seed on the same starting state always lands in the same
    /// position. Clicks go through the normal cycle, so they are saved and
    /// counted as moves.
    pub fn scramble(&mut self, seed: u64, clicks: usize) -> Result<()> {
        let count = self.state.cube_count();
        if count == 0 {
            return Ok(());
        }

        let mut rng = ScrambleRng::new(seed);
        for _ in 0..clicks {
            self.apply(rng.next_click(count))?;
        }

        info!(seed, clicks, "scrambled");
        Ok(())
    }

    /// Write the current state to storage.
    pub fn save(&mut self) -> Result<()> {
        save_state(&mut self.storage, &self.config.storage_key, &self.state)
    }

    /// Clear the saved state and return to the initial cubes.
    pub fn reset(&mut self) -> Result<()> {
        self.storage.remove(&self.config.storage_key)?;
        self.state = self.config.initial_state();
        self.history.clear();
        self.revalidate();

        info!(key = %self.config.storage_key, "reset to initial state");
        Ok(())
    }

    /// Give up the session, returning its storage.
    pub fn into_storage(self) -> S {
        self.storage
    }

    fn revalidate(&mut self) {
        validate(&self.state.cubes, &mut self.state.goals);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FaceValue, Validity};
    use crate::storage::MemoryStorage;

    fn session() -> Session<MemoryStorage> {
        Session::open(MemoryStorage::new(), PuzzleConfig::classic())
    }

    #[test]
    fn test_open_fresh_is_validated() {
        let session = session();

        assert_eq!(session.moves(), 0);
        assert_eq!(
            session.state().goal(Orientation::Up).unwrap().valid,
            Validity::Invalid
        );
        assert!(!session.is_solved());
    }

    #[test]
    fn test_click_saves() {
        let mut session = session();
        session.click(0, Orientation::Left).unwrap();

        let storage = session.storage();
        assert!(storage.get("mrhen-insanity").unwrap().is_some());
    }

    #[test]
    fn test_click_rotates_only_target_cube() {
        let mut session = session();
        let before = session.state().clone();

        session.click(2, Orientation::Up).unwrap();

        assert_eq!(session.state().cubes[0], before.cubes[0]);
        assert_eq!(session.state().cubes[1], before.cubes[1]);
        assert_ne!(session.state().cubes[2], before.cubes[2]);
        assert_eq!(session.state().cubes[3], before.cubes[3]);
    }

    #[test]
    fn test_unknown_cube() {
        let mut session = session();
        let err = session.click(4, Orientation::Up).unwrap_err();

        assert!(matches!(err, InsanityError::UnknownCube { index: 4, count: 4 }));
        assert_eq!(session.moves(), 0);
    }

    #[test]
    fn test_reset() {
        let mut session = session();
        session.click(1, Orientation::Down).unwrap();
        session.reset().unwrap();

        assert_eq!(session.moves(), 0);
        assert_eq!(session.state().cubes, PuzzleConfig::classic().initial_cubes);
        assert!(session.storage().is_empty());
    }

    #[test]
    fn test_reopen_restores_state() {
        let mut session = session();
        session.click(0, Orientation::Up).unwrap();
        session.click(3, Orientation::Right).unwrap();
        let expected = session.state().clone();

        let reopened = Session::open(session.into_storage(), PuzzleConfig::classic());

        assert_eq!(reopened.state(), &expected);
        assert_eq!(reopened.moves(), 0);
    }

    #[test]
    fn test_scramble_counts_moves() {
        let mut session = session();
        session.scramble(11, 25).unwrap();

        assert_eq!(session.moves(), 25);
        assert!(session.state().is_well_formed());
    }

    #[test]
    fn test_left_click_moves_left_face_to_front() {
        let mut session = session();
        session.click(0, Orientation::Left).unwrap();

        // Cube 1 had A on its left.
        assert_eq!(
            session.state().cubes[0].value_at(Orientation::Front),
            Some(FaceValue::A)
        );
    }
}
