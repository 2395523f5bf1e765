use demine_core as game;
use demine_protocol::{CompletedRun, Initials};
use game::BoardGenerator;

use crate::{GameClock, ScoreSink};

/// Game status as seen by the player, with the final time attached to
/// terminal outcomes. The elapsed payload comes from the session's clock at
/// the moment the deciding reveal completed.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RunOutcome {
    InProgress,
    Won { elapsed_seconds: f64 },
    Lost { elapsed_seconds: f64 },
}

impl RunOutcome {
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won { .. } | Self::Lost { .. })
    }
}

/// Thin sequencer over one exclusively-owned board: generator on start,
/// reveal engine on input, clock stop plus leaderboard hand-off on a
/// terminal outcome.
#[derive(Debug)]
pub struct GameSession<C, S> {
    config: game::GameConfig,
    board: Option<game::Board>,
    clock: C,
    sink: S,
    initials: Option<Initials>,
    final_time: Option<f64>,
}

impl<C: GameClock, S: ScoreSink> GameSession<C, S> {
    pub fn new(config: game::GameConfig, clock: C, sink: S) -> Self {
        Self {
            config,
            board: None,
            clock,
            sink,
            initials: None,
            final_time: None,
        }
    }

    /// Initials submitted with completed runs. Without them, runs are played
    /// locally but never reported to the leaderboard.
    pub fn set_initials(&mut self, initials: Option<Initials>) {
        self.initials = initials;
    }

    /// Discards any previous board and deals a fresh one. The clock returns
    /// to zero and starts again on the first reveal.
    pub fn start_game(&mut self, generator: impl BoardGenerator) {
        log::debug!("starting new game: {:?}", self.config);
        self.board = Some(generator.generate(self.config));
        self.clock.reset();
        self.final_time = None;
    }

    pub fn outcome(&self) -> RunOutcome {
        let outcome = self
            .board
            .as_ref()
            .map(game::Board::outcome)
            .unwrap_or_default();

        match outcome {
            game::GameOutcome::InProgress => RunOutcome::InProgress,
            game::GameOutcome::Won => RunOutcome::Won {
                elapsed_seconds: self.final_time.unwrap_or_default(),
            },
            game::GameOutcome::Lost => RunOutcome::Lost {
                elapsed_seconds: self.final_time.unwrap_or_default(),
            },
        }
    }

    pub fn mines_remaining(&self) -> i32 {
        self.board
            .as_ref()
            .map(game::Board::mines_remaining)
            .unwrap_or_else(|| i32::from(self.config.mines))
    }

    /// Mine-hidden cell view for rendering. Before the first deal every cell
    /// renders hidden.
    pub fn view_at(&self, coords: game::Coord2) -> game::Result<game::CellView> {
        match self.board.as_ref() {
            Some(board) => {
                let coords = board.validate_coords(coords)?;
                Ok(board.view_at(coords))
            }
            None if game::in_bounds(coords, self.config.size) => Ok(game::CellView::Hidden),
            None => Err(game::GameError::OutOfBounds),
        }
    }

    pub fn board(&self) -> Option<&game::Board> {
        self.board.as_ref()
    }

    /// Reveal input. `propagate` selects the flood-fill variant. Ignored
    /// once the game has ended; the terminal outcome is simply returned.
    pub fn on_cell_activate(
        &mut self,
        coords: game::Coord2,
        propagate: bool,
    ) -> game::Result<RunOutcome> {
        let Some(board) = self.board.as_mut() else {
            log::debug!("reveal ignored, no game in progress");
            return Ok(RunOutcome::InProgress);
        };

        if board.is_terminal() {
            log::debug!("reveal ignored, game already ended");
            return Ok(self.outcome());
        }

        if !self.clock.is_running() {
            self.clock.start();
        }

        let outcome = if propagate {
            board.reveal_flood(coords)?
        } else {
            board.reveal_single(coords)?
        };

        if outcome.is_terminal() {
            let elapsed = self.clock.stop();
            self.final_time = Some(elapsed);
            self.submit_run(elapsed);
        }

        Ok(self.outcome())
    }

    /// Flag input. Ignored once the game has ended.
    pub fn on_cell_flag_toggle(&mut self, coords: game::Coord2) -> game::Result<game::MarkOutcome> {
        let Some(board) = self.board.as_mut() else {
            log::debug!("flag toggle ignored, no game in progress");
            return Ok(game::MarkOutcome::NoChange);
        };

        if board.is_terminal() {
            log::debug!("flag toggle ignored, game already ended");
            return Ok(game::MarkOutcome::NoChange);
        }

        board.toggle_flag(coords)
    }

    fn submit_run(&mut self, elapsed_seconds: f64) {
        let Some(initials) = self.initials else {
            log::debug!("no initials set, completed run not submitted");
            return;
        };

        match CompletedRun::new(initials, elapsed_seconds) {
            Ok(run) => {
                if let Err(err) = self.sink.submit(&run) {
                    // best effort: the local game state is already final
                    log::warn!("leaderboard submission failed: {err}");
                }
            }
            Err(err) => log::warn!("completed run dropped: {err}"),
        }
    }
}
