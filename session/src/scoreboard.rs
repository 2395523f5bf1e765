use core::convert::Infallible;
use core::fmt;

use demine_protocol::CompletedRun;

/// Leaderboard collaborator seam. Submission is fire-and-forget from the
/// session's point of view: errors are logged, never acted on.
pub trait ScoreSink {
    type Error: fmt::Display;

    fn submit(&mut self, run: &CompletedRun) -> Result<(), Self::Error>;
}

/// Sink for sessions with no leaderboard attached.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl ScoreSink for NullSink {
    type Error = Infallible;

    fn submit(&mut self, _run: &CompletedRun) -> Result<(), Self::Error> {
        Ok(())
    }
}
