//! Widget content models
//!
//! Logic for the stock widgets a session registers at scene start. These are
//! content values carried by registry windows; the rendering collaborator
//! owns how they look, this module only owns what they say. Methods that
//! depend on time take an explicit `now` so behavior stays deterministic
//! under test.

use std::time::{Duration, Instant};

/// Wall-clock readout. Formats pre-split time components; whoever drives the
/// frame loop supplies them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClockWidget {
    /// Render `HH:MM` instead of `HH:MM:SS`.
    pub disable_seconds: bool,
}

impl ClockWidget {
    pub fn new(disable_seconds: bool) -> Self {
        Self { disable_seconds }
    }

    /// Format a time of day. Components wrap into range, so feeding raw
    /// counters is safe.
    pub fn format_hms(&self, hours: u32, minutes: u32, seconds: u32) -> String {
        let hours = hours % 24;
        let minutes = minutes % 60;
        let seconds = seconds % 60;
        if self.disable_seconds {
            format!("{hours:02}:{minutes:02}")
        } else {
            format!("{hours:02}:{minutes:02}:{seconds:02}")
        }
    }
}

/// Start/stop stopwatch accumulating elapsed time across pauses.
#[derive(Debug, Clone, Copy, Default)]
pub struct StopwatchWidget {
    accumulated: Duration,
    started_at: Option<Instant>,
}

impl StopwatchWidget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// Start (or resume) counting. Starting a running stopwatch is a no-op.
    pub fn start(&mut self, now: Instant) {
        if self.started_at.is_none() {
            self.started_at = Some(now);
        }
    }

    /// Pause counting, banking the elapsed time so far.
    pub fn stop(&mut self, now: Instant) {
        if let Some(started_at) = self.started_at.take() {
            self.accumulated += now.saturating_duration_since(started_at);
        }
    }

    pub fn reset(&mut self) {
        self.accumulated = Duration::ZERO;
        self.started_at = None;
    }

    /// Total elapsed time, including the in-flight run if counting.
    pub fn elapsed(&self, now: Instant) -> Duration {
        match self.started_at {
            Some(started_at) => self.accumulated + now.saturating_duration_since(started_at),
            None => self.accumulated,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PomodoroPhase {
    Work,
    Rest,
}

/// Work/rest cycle timer. Phases repeat until stopped.
#[derive(Debug, Clone, Copy)]
pub struct PomodoroWidget {
    work: Duration,
    rest: Duration,
    started_at: Option<Instant>,
}

impl Default for PomodoroWidget {
    fn default() -> Self {
        Self::new(Duration::from_secs(25 * 60), Duration::from_secs(5 * 60))
    }
}

impl PomodoroWidget {
    pub fn new(work: Duration, rest: Duration) -> Self {
        Self {
            work,
            rest,
            started_at: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn start(&mut self, now: Instant) {
        self.started_at = Some(now);
    }

    pub fn stop(&mut self) {
        self.started_at = None;
    }

    /// Current phase, or `None` when the timer is not running.
    pub fn phase(&self, now: Instant) -> Option<PomodoroPhase> {
        self.cycle_offset(now).map(|offset| {
            if offset < self.work {
                PomodoroPhase::Work
            } else {
                PomodoroPhase::Rest
            }
        })
    }

    /// Time left in the current phase, or `None` when not running.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.cycle_offset(now).map(|offset| {
            if offset < self.work {
                self.work - offset
            } else {
                self.work + self.rest - offset
            }
        })
    }

    fn cycle_offset(&self, now: Instant) -> Option<Duration> {
        let started_at = self.started_at?;
        let cycle = self.work + self.rest;
        if cycle.is_zero() {
            return Some(Duration::ZERO);
        }
        let elapsed = now.saturating_duration_since(started_at);
        let cycles = elapsed.as_nanos() / cycle.as_nanos();
        Some(elapsed - cycle * cycles as u32)
    }
}

/// Content payload for the demo registry, one variant per stock widget.
#[derive(Debug, Clone, Copy)]
pub enum WidgetContent {
    Clock(ClockWidget),
    Stopwatch(StopwatchWidget),
    Pomodoro(PomodoroWidget),
}

impl WidgetContent {
    pub fn kind_name(&self) -> &'static str {
        match self {
            WidgetContent::Clock(_) => "clock",
            WidgetContent::Stopwatch(_) => "stopwatch",
            WidgetContent::Pomodoro(_) => "pomodoro",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ClockWidget, PomodoroPhase, PomodoroWidget, StopwatchWidget};
    use std::time::{Duration, Instant};

    #[test]
    fn clock_formats_with_and_without_seconds() {
        let full = ClockWidget::new(false);
        assert_eq!(full.format_hms(9, 5, 7), "09:05:07");
        let short = ClockWidget::new(true);
        assert_eq!(short.format_hms(9, 5, 7), "09:05");
    }

    #[test]
    fn clock_wraps_out_of_range_components() {
        let clock = ClockWidget::new(false);
        assert_eq!(clock.format_hms(25, 61, 61), "01:01:01");
    }

    #[test]
    fn stopwatch_accumulates_across_pauses() {
        let t0 = Instant::now();
        let mut stopwatch = StopwatchWidget::new();
        assert!(!stopwatch.is_running());

        stopwatch.start(t0);
        let t1 = t0 + Duration::from_secs(5);
        stopwatch.stop(t1);
        assert_eq!(stopwatch.elapsed(t1), Duration::from_secs(5));

        let t2 = t1 + Duration::from_secs(60);
        stopwatch.start(t2);
        let t3 = t2 + Duration::from_secs(3);
        assert_eq!(stopwatch.elapsed(t3), Duration::from_secs(8));

        stopwatch.reset();
        assert_eq!(stopwatch.elapsed(t3), Duration::ZERO);
        assert!(!stopwatch.is_running());
    }

    #[test]
    fn starting_a_running_stopwatch_is_a_noop() {
        let t0 = Instant::now();
        let mut stopwatch = StopwatchWidget::new();
        stopwatch.start(t0);
        stopwatch.start(t0 + Duration::from_secs(10));
        assert_eq!(
            stopwatch.elapsed(t0 + Duration::from_secs(20)),
            Duration::from_secs(20)
        );
    }

    #[test]
    fn pomodoro_cycles_between_work_and_rest() {
        let t0 = Instant::now();
        let mut pomodoro =
            PomodoroWidget::new(Duration::from_secs(25 * 60), Duration::from_secs(5 * 60));
        assert_eq!(pomodoro.phase(t0), None);

        pomodoro.start(t0);
        assert_eq!(
            pomodoro.phase(t0 + Duration::from_secs(10 * 60)),
            Some(PomodoroPhase::Work)
        );
        assert_eq!(
            pomodoro.remaining(t0 + Duration::from_secs(10 * 60)),
            Some(Duration::from_secs(15 * 60))
        );
        assert_eq!(
            pomodoro.phase(t0 + Duration::from_secs(26 * 60)),
            Some(PomodoroPhase::Rest)
        );
        assert_eq!(
            pomodoro.remaining(t0 + Duration::from_secs(26 * 60)),
            Some(Duration::from_secs(4 * 60))
        );
        // Second cycle wraps back into work.
        assert_eq!(
            pomodoro.phase(t0 + Duration::from_secs(31 * 60)),
            Some(PomodoroPhase::Work)
        );

        pomodoro.stop();
        assert_eq!(pomodoro.phase(t0 + Duration::from_secs(31 * 60)), None);
    }
}
