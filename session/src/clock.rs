use web_time::Instant;

/// Passive elapsed-time collaborator. The session queries it at start/stop
/// boundaries only; it never drives game logic.
pub trait GameClock {
    /// Starts timing. No-op when already running.
    fn start(&mut self);

    /// Stops the clock and returns elapsed seconds. Idempotent once stopped.
    fn stop(&mut self) -> f64;

    /// Returns the clock to its pristine unstarted state.
    fn reset(&mut self);

    fn is_running(&self) -> bool;
}

/// Wall-clock implementation backed by a monotonic instant.
#[derive(Debug, Default)]
pub struct MonotonicClock {
    started_at: Option<Instant>,
    final_elapsed: Option<f64>,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GameClock for MonotonicClock {
    fn start(&mut self) {
        if self.started_at.is_none() && self.final_elapsed.is_none() {
            self.started_at = Some(Instant::now());
        }
    }

    fn stop(&mut self) -> f64 {
        if let Some(elapsed) = self.final_elapsed {
            return elapsed;
        }

        let elapsed = self
            .started_at
            .map(|started_at| started_at.elapsed().as_secs_f64())
            .unwrap_or(0.0);
        self.final_elapsed = Some(elapsed);
        elapsed
    }

    fn reset(&mut self) {
        self.started_at = None;
        self.final_elapsed = None;
    }

    fn is_running(&self) -> bool {
        self.started_at.is_some() && self.final_elapsed.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_runs_between_start_and_stop() {
        let mut clock = MonotonicClock::new();
        assert!(!clock.is_running());

        clock.start();
        assert!(clock.is_running());

        let elapsed = clock.stop();
        assert!(elapsed >= 0.0);
        assert!(!clock.is_running());
    }

    #[test]
    fn stop_is_idempotent() {
        let mut clock = MonotonicClock::new();
        clock.start();

        let first = clock.stop();
        let second = clock.stop();

        assert_eq!(first, second);
    }

    #[test]
    fn reset_allows_a_fresh_run() {
        let mut clock = MonotonicClock::new();
        clock.start();
        clock.stop();

        clock.reset();

        assert!(!clock.is_running());
        clock.start();
        assert!(clock.is_running());
    }

    #[test]
    fn stop_without_start_reports_zero() {
        let mut clock = MonotonicClock::new();

        assert_eq!(clock.stop(), 0.0);
    }
}
