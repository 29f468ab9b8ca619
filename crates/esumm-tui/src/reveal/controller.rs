//! Reveal animation controller.
//!
//! Owns the queue of scheduled reveal steps and drives them from the main
//! loop. Call `start()` to begin revealing a string, `tick()` each frame to
//! execute the steps that have come due, and `cancel()` to stop without
//! touching the sink again.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use super::config::{RevealConfig, RevealConfigExt};
use super::sink::TextSink;
use super::timing::is_due;

/// One run of the reveal animation for one string
#[derive(Debug, Clone)]
struct RevealSession {
    /// Full text to reveal, immutable for the session's lifetime
    text: Vec<char>,
    /// Index of the next character to append, 0 <= cursor <= text.len()
    cursor: usize,
    /// Delay between successive characters
    interval: Duration,
    /// Token identifying this session; steps from older sessions are stale
    generation: u64,
}

/// A scheduled reveal step
#[derive(Debug, Clone, Copy)]
struct ScheduledStep {
    due: Instant,
    generation: u64,
}

/// Reveal animation controller.
///
/// At most one session is active at any instant. Every scheduled step
/// belongs to the current session or has been revoked; a step that fires
/// anyway is stopped by the clearing flag and the generation check before
/// it can mutate the sink.
#[derive(Debug, Clone)]
pub struct RevealController {
    /// Current active session (if any)
    session: Option<RevealSession>,
    /// Outstanding scheduled steps, in due order
    pending: VecDeque<ScheduledStep>,
    /// Set by cancel(); any step observing it performs no sink mutation
    clearing: bool,
    /// Bumped on every start(), invalidating steps from prior sessions
    generation: u64,
    /// Configuration
    config: RevealConfig,
}

impl Default for RevealController {
    fn default() -> Self {
        Self {
            session: None,
            pending: VecDeque::new(),
            clearing: false,
            generation: 0,
            config: RevealConfig::default(),
        }
    }
}

impl RevealController {
    /// Create a new reveal controller with configuration
    pub fn new(config: RevealConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Create with default configuration
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Get current configuration
    pub fn config(&self) -> &RevealConfig {
        &self.config
    }

    /// Check if a reveal session is currently active
    #[inline]
    pub fn is_revealing(&self) -> bool {
        self.session.is_some()
    }

    /// Check if there are scheduled steps left to run.
    /// Use this to determine if we need high frame rate.
    #[inline]
    pub fn needs_update(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Start revealing `text` into `sink`.
    ///
    /// Cancel-before-start: every step scheduled by a previous session is
    /// revoked first, so no character from a prior session can ever reach
    /// the sink after this call returns. The sink is cleared exactly once.
    /// With the animation disabled the text still flows through the same
    /// session machinery at a zero interval and drains on the next tick.
    pub fn start<S: TextSink>(&mut self, text: &str, sink: &mut S) {
        let interval = if self.config.is_animated() {
            self.config.char_interval()
        } else {
            Duration::ZERO
        };
        self.start_with_interval(text, sink, interval);
    }

    /// Start revealing with an explicit per-character interval
    pub fn start_with_interval<S: TextSink>(
        &mut self,
        text: &str,
        sink: &mut S,
        interval: Duration,
    ) {
        self.pending.clear();
        self.generation += 1;
        self.clearing = false;
        sink.clear();

        let generation = self.generation;
        self.session = Some(RevealSession {
            text: text.chars().collect(),
            cursor: 0,
            interval,
            generation,
        });
        self.pending.push_back(ScheduledStep {
            due: Instant::now(),
            generation,
        });
    }

    /// Cancel the active session.
    ///
    /// Sets the clearing flag and revokes every pending step. A stale step
    /// that fires after this point observes the flag and does nothing, even
    /// if it escaped revocation.
    pub fn cancel(&mut self) {
        self.clearing = true;
        self.pending.clear();
        self.session = None;
    }

    /// Execute every step that has come due.
    ///
    /// Call this every frame. Steps run in cursor order because each step
    /// schedules only its successor after appending its own character.
    pub fn tick<S: TextSink>(&mut self, sink: &mut S) {
        self.tick_at(Instant::now(), sink);
    }

    fn tick_at<S: TextSink>(&mut self, now: Instant, sink: &mut S) {
        while let Some(step) = self.pending.front().copied() {
            if !is_due(step.due, now) {
                break;
            }
            self.pending.pop_front();
            self.reveal_one(step, sink);
        }
    }

    /// Execute a single reveal step.
    fn reveal_one<S: TextSink>(&mut self, step: ScheduledStep, sink: &mut S) {
        // Race-safety backstop: a cancelled run never touches the sink
        if self.clearing {
            return;
        }
        let Some(session) = self.session.as_mut() else {
            return;
        };
        // Stale step from a superseded session
        if step.generation != session.generation {
            return;
        }

        if session.cursor < session.text.len() {
            sink.append(session.text[session.cursor]);
            session.cursor += 1;
            // Chain from the step's own deadline so catch-up ticks reveal
            // at the configured average rate
            self.pending.push_back(ScheduledStep {
                due: step.due + session.interval,
                generation: session.generation,
            });
        } else {
            // Cursor reached the end: terminate without rescheduling
            self.session = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reveal::sink::BufferSink;

    /// Sink that records every operation for assertions
    #[derive(Default)]
    struct RecordingSink {
        content: String,
        appended: Vec<char>,
        clears: usize,
    }

    impl TextSink for RecordingSink {
        fn append(&mut self, ch: char) {
            self.content.push(ch);
            self.appended.push(ch);
        }

        fn clear(&mut self) {
            self.content.clear();
            self.clears += 1;
        }
    }

    const HOUR: Duration = Duration::from_secs(3600);

    #[test]
    fn test_full_reveal_after_all_steps_due() {
        let mut reveal = RevealController::with_defaults();
        let mut sink = RecordingSink::default();

        reveal.start_with_interval("cat", &mut sink, Duration::from_millis(10));
        let now = Instant::now();

        reveal.tick_at(now + Duration::from_millis(35), &mut sink);

        assert_eq!(sink.content, "cat");
        assert_eq!(sink.appended, vec!['c', 'a', 't']);
        assert!(!reveal.is_revealing());
        assert!(!reveal.needs_update());
    }

    #[test]
    fn test_one_character_per_interval() {
        let mut reveal = RevealController::with_defaults();
        let mut sink = BufferSink::new();

        reveal.start_with_interval("hello", &mut sink, HOUR);
        reveal.tick(&mut sink);
        assert_eq!(sink.content(), "h");

        // Next step is an hour away; repeated ticks reveal nothing more
        reveal.tick(&mut sink);
        reveal.tick(&mut sink);
        assert_eq!(sink.content(), "h");
        assert!(reveal.is_revealing());
        assert!(reveal.needs_update());
    }

    #[test]
    fn test_zero_interval_drains_in_one_tick() {
        let mut reveal = RevealController::with_defaults();
        let mut sink = RecordingSink::default();

        reveal.start_with_interval("hello", &mut sink, Duration::ZERO);
        reveal.tick(&mut sink);

        assert_eq!(sink.content, "hello");
        assert_eq!(sink.appended.len(), 5);
        assert!(!reveal.is_revealing());
    }

    #[test]
    fn test_cancel_prevents_further_mutations() {
        let mut reveal = RevealController::with_defaults();
        let mut sink = RecordingSink::default();

        reveal.start_with_interval("hello", &mut sink, HOUR);
        reveal.tick(&mut sink);
        assert_eq!(sink.content, "h");

        reveal.cancel();
        let far_future = Instant::now() + HOUR * 3;
        reveal.tick_at(far_future, &mut sink);

        assert_eq!(sink.content, "h");
        assert_eq!(sink.appended.len(), 1);
        assert!(!reveal.needs_update());
    }

    #[test]
    fn test_clearing_flag_blocks_unrevoked_step() {
        let mut reveal = RevealController::with_defaults();
        let mut sink = RecordingSink::default();

        reveal.start_with_interval("hello", &mut sink, Duration::ZERO);
        reveal.cancel();

        // Simulate a step that escaped revocation: same generation, already due
        reveal.session = Some(RevealSession {
            text: "hello".chars().collect(),
            cursor: 0,
            interval: Duration::ZERO,
            generation: reveal.generation,
        });
        reveal.pending.push_back(ScheduledStep {
            due: Instant::now(),
            generation: reveal.generation,
        });

        reveal.tick(&mut sink);
        assert!(sink.appended.is_empty(), "clearing flag must block the step");
    }

    #[test]
    fn test_stale_generation_is_ignored() {
        let mut reveal = RevealController::with_defaults();
        let mut sink = RecordingSink::default();

        reveal.start_with_interval("new", &mut sink, HOUR);

        // A leftover step from a previous session must not append
        reveal.pending.push_front(ScheduledStep {
            due: Instant::now(),
            generation: reveal.generation - 1,
        });

        reveal.tick(&mut sink);
        // Only the current session's first step ran
        assert_eq!(sink.content, "n");
    }

    #[test]
    fn test_restart_supersedes_previous_session() {
        let mut reveal = RevealController::with_defaults();
        let mut sink = RecordingSink::default();

        reveal.start_with_interval("hello", &mut sink, HOUR);
        reveal.tick(&mut sink);
        assert_eq!(sink.content, "h");

        reveal.start_with_interval("bye", &mut sink, Duration::ZERO);
        let far_future = Instant::now() + HOUR * 3;
        reveal.tick_at(far_future, &mut sink);

        assert_eq!(sink.content, "bye");
        // No character of the first string after the restart
        assert!(!sink.content.contains('h'));
        assert!(!reveal.is_revealing());
    }

    #[test]
    fn test_start_clears_sink_exactly_once() {
        let mut reveal = RevealController::with_defaults();
        let mut sink = RecordingSink::default();
        sink.content.push_str("leftover");

        reveal.start_with_interval("ab", &mut sink, Duration::ZERO);
        assert_eq!(sink.clears, 1);

        reveal.tick(&mut sink);
        reveal.tick(&mut sink);
        assert_eq!(sink.clears, 1);
        assert_eq!(sink.content, "ab");

        reveal.start_with_interval("cd", &mut sink, Duration::ZERO);
        assert_eq!(sink.clears, 2);
    }

    #[test]
    fn test_empty_text_completes_without_appends() {
        let mut reveal = RevealController::with_defaults();
        let mut sink = RecordingSink::default();

        reveal.start_with_interval("", &mut sink, Duration::ZERO);
        assert!(reveal.is_revealing());

        reveal.tick(&mut sink);
        assert!(sink.appended.is_empty());
        assert!(sink.content.is_empty());
        assert!(!reveal.is_revealing());
        assert!(!reveal.needs_update());
    }

    #[test]
    fn test_multibyte_characters_reveal_whole() {
        let mut reveal = RevealController::with_defaults();
        let mut sink = RecordingSink::default();

        reveal.start_with_interval("héllo ← ok", &mut sink, Duration::ZERO);
        reveal.tick(&mut sink);

        assert_eq!(sink.content, "héllo ← ok");
        assert_eq!(sink.appended.len(), "héllo ← ok".chars().count());
    }

    #[test]
    fn test_disabled_animation_uses_zero_interval() {
        let config = RevealConfig {
            enabled: false,
            ..Default::default()
        };
        let mut reveal = RevealController::new(config);
        let mut sink = BufferSink::new();

        reveal.start("instant", &mut sink);
        reveal.tick(&mut sink);
        assert_eq!(sink.content(), "instant");
    }

    #[test]
    fn test_appends_follow_text_order() {
        let mut reveal = RevealController::with_defaults();
        let mut sink = RecordingSink::default();

        reveal.start_with_interval("ordered", &mut sink, Duration::ZERO);
        reveal.tick(&mut sink);

        let text: Vec<char> = "ordered".chars().collect();
        assert_eq!(sink.appended, text);
    }
}
