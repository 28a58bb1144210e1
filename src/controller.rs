//! Session controller
//!
//! Owns the current session, its one-second timer and the progress adapter
//! for one game mode. Every player action and every elapsed time slice comes
//! through here and is processed to completion before the next one. The
//! timer is started and stopped only by these methods and goes away with the
//! session on `home`.

use std::time::Duration;

use thiserror::Error;

use crate::progress::ProgressStore;
use crate::routing::Pos;
use crate::session::{Phase, Puzzle, RoutingPuzzle, SecondTimer, Session, SessionEvent, TilePuzzle};
use crate::share::level_complete_message;
use crate::store::KeyValueStore;
use crate::GameMode;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("{mode:?} level {level} does not exist (1..={total})")]
    OutOfRange { mode: GameMode, level: u32, total: u32 },
    #[error("{mode:?} level {level} is locked (unlocked up to {unlocked})")]
    Locked {
        mode: GameMode,
        level: u32,
        unlocked: u32,
    },
    #[error("no level is open")]
    NoSession,
}

/// Controller for one mini-game
#[derive(Debug)]
pub struct GameController<P: Puzzle, S: KeyValueStore> {
    progress: ProgressStore<S>,
    session: Option<Session<P>>,
    timer: SecondTimer,
}

pub type RoutingController<S> = GameController<RoutingPuzzle, S>;
pub type TileController<S> = GameController<TilePuzzle, S>;

impl<P: Puzzle, S: KeyValueStore> GameController<P, S> {
    pub fn new(store: S) -> Self {
        Self {
            progress: ProgressStore::new(store),
            session: None,
            timer: SecondTimer::new(),
        }
    }

    pub fn mode(&self) -> GameMode {
        P::MODE
    }

    pub fn progress(&self) -> &ProgressStore<S> {
        &self.progress
    }

    /// Highest level the player may open
    pub fn unlocked(&self) -> u32 {
        self.progress.unlocked(P::MODE)
    }

    pub fn session(&self) -> Option<&Session<P>> {
        self.session.as_ref()
    }

    pub fn timer_running(&self) -> bool {
        self.timer.is_running()
    }

    /// Open a level from the level list, replacing any current session
    pub fn open(&mut self, level: u32) -> Result<&Session<P>, SessionError> {
        let mode = P::MODE;
        if !mode.contains(level) {
            return Err(SessionError::OutOfRange {
                mode,
                level,
                total: mode.total(),
            });
        }
        if !self.progress.is_unlocked(mode, level) {
            return Err(SessionError::Locked {
                mode,
                level,
                unlocked: self.unlocked(),
            });
        }
        Ok(self.install(Session::new(level)))
    }

    fn install(&mut self, session: Session<P>) -> &Session<P> {
        self.timer.stop();
        log::info!("Opened {} level {}", P::MODE.as_str(), session.level());
        let running = session.phase() == Phase::Running;
        if running {
            self.timer.start();
        }
        self.session.insert(session)
    }

    fn current(&mut self) -> Result<&mut Session<P>, SessionError> {
        self.session.as_mut().ok_or(SessionError::NoSession)
    }

    /// Start the clock on an idle session (tile puzzle "Start")
    pub fn start(&mut self) -> Result<bool, SessionError> {
        let started = self.current()?.start();
        if started {
            self.timer.start();
        }
        Ok(started)
    }

    pub fn pause(&mut self) -> Result<bool, SessionError> {
        let paused = self.current()?.pause();
        if paused {
            self.timer.stop();
        }
        Ok(paused)
    }

    /// Continue a paused session
    pub fn resume(&mut self) -> Result<bool, SessionError> {
        let resumed = self.current()?.resume();
        if resumed {
            self.timer.start();
        }
        Ok(resumed)
    }

    /// Restart the current level with a fresh board and full clock
    pub fn retry(&mut self) -> Result<bool, SessionError> {
        let retried = self.current()?.retry();
        if retried {
            self.timer.start();
            log::debug!("Retrying {} level", P::MODE.as_str());
        }
        Ok(retried)
    }

    /// Open the level after the current one (capped at the last level).
    /// From a won session this does not wait for the unlock record, which
    /// may have failed to save.
    pub fn next_level(&mut self) -> Result<&Session<P>, SessionError> {
        let session = self.current()?;
        let won = session.phase() == Phase::Won;
        let next = (session.level() + 1).min(P::MODE.total());
        if won {
            return Ok(self.install(Session::new(next)));
        }
        self.open(next)
    }

    /// Player tap on the board
    pub fn tap(&mut self, mv: P::Move) -> Result<Option<SessionEvent>, SessionError> {
        let event = self.current()?.tap(mv);
        self.settle(event);
        Ok(event)
    }

    /// Feed elapsed wall time; runs one session tick per whole second
    pub fn advance(&mut self, elapsed: Duration) -> Option<SessionEvent> {
        let ticks = self.timer.advance(elapsed);
        let session = self.session.as_mut()?;
        let mut event = None;
        for _ in 0..ticks.min(session.remaining_secs()) {
            event = session.tick();
            if event.is_some() {
                break;
            }
        }
        self.settle(event);
        event
    }

    /// Leave the game screen: stop the clock and drop the session
    pub fn home(&mut self) {
        self.timer.stop();
        if let Some(session) = self.session.take() {
            log::debug!("Closed {} level {}", P::MODE.as_str(), session.level());
        }
    }

    fn settle(&mut self, event: Option<SessionEvent>) {
        match event {
            Some(SessionEvent::Won { mode, level }) => {
                self.timer.stop();
                log::info!("Won {} level {}", mode.as_str(), level);
                self.progress.unlock_next(mode, level);
            }
            Some(SessionEvent::Lost { mode, level }) => {
                self.timer.stop();
                log::info!("Time up on {} level {}", mode.as_str(), level);
            }
            None => {}
        }
    }
}

impl<S: KeyValueStore> RoutingController<S> {
    /// Tap the arrow at (row, col)
    pub fn tap_cell(
        &mut self,
        row: usize,
        col: usize,
    ) -> Result<Option<SessionEvent>, SessionError> {
        self.tap(Pos::new(row, col))
    }

    /// Share text for a won level
    pub fn share_message(&self) -> Option<String> {
        self.session
            .as_ref()
            .filter(|s| s.phase() == Phase::Won)
            .map(|s| level_complete_message(s.level()))
    }
}
