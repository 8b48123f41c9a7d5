//! Typewriter reveal with a blinking caret.
//!
//! Two tasks run per engine: the reveal task adds one grapheme per interval and
//! stops rescheduling itself once the whole text is visible; the caret task
//! toggles caret visibility on its own period for as long as the engine runs.

use std::time::Duration;

use tracing::trace;
use unicode_segmentation::UnicodeSegmentation;

use crate::schedule::{ScheduledTask, next_deadline};

pub const DEFAULT_REVEAL_INTERVAL: Duration = Duration::from_millis(100);
pub const DEFAULT_CARET_BLINK: Duration = Duration::from_millis(500);
pub const UNICODE_CARET: &str = "▌";
pub const ASCII_CARET: &str = "|";

const MIN_INTERVAL: Duration = Duration::from_millis(1);

#[derive(Debug, Clone)]
pub struct TypewriterEngine {
    source: String,
    /// `ends[n]` is the byte offset just past the n-th grapheme.
    ends: Vec<usize>,
    revealed: usize,
    interval: Duration,
    caret_period: Duration,
    caret_glyph: &'static str,
    caret_visible: bool,
    reveal_task: ScheduledTask,
    caret_task: ScheduledTask,
}

impl Default for TypewriterEngine {
    fn default() -> Self {
        Self::new(DEFAULT_CARET_BLINK, UNICODE_CARET)
    }
}

impl TypewriterEngine {
    /// An idle engine. Nothing is displayed and no task runs until [`start`](Self::start).
    #[must_use]
    pub fn new(caret_period: Duration, caret_glyph: &'static str) -> Self {
        Self {
            source: String::new(),
            ends: Vec::new(),
            revealed: 0,
            interval: DEFAULT_REVEAL_INTERVAL,
            caret_period: clamp_interval(caret_period),
            caret_glyph,
            caret_visible: false,
            reveal_task: ScheduledTask::idle(),
            caret_task: ScheduledTask::idle(),
        }
    }

    /// Begin revealing `text` from its first grapheme, one per `interval`.
    ///
    /// Any reveal in progress is discarded, including one for the same text.
    pub fn start(&mut self, text: impl Into<String>, interval: Duration) {
        debug_assert!(!interval.is_zero(), "typewriter interval must be positive");
        self.load(text.into());
        self.interval = clamp_interval(interval);
        if self.ends.is_empty() {
            self.reveal_task.cancel();
        } else {
            self.reveal_task.schedule(self.interval);
        }
        self.restart_caret();
    }

    /// Show `text` in full immediately. The caret still blinks.
    pub fn start_revealed(&mut self, text: impl Into<String>) {
        self.load(text.into());
        self.revealed = self.ends.len();
        self.reveal_task.cancel();
        self.restart_caret();
    }

    /// Cancel every pending task. Revealed text stays as it is.
    pub fn cancel(&mut self) {
        self.reveal_task.cancel();
        self.caret_task.cancel();
    }

    /// Advance the clock by `delta`, firing due tasks in deadline order.
    pub fn advance(&mut self, delta: Duration) {
        let mut left = delta;
        while let Some(due) = next_deadline(&[&self.reveal_task, &self.caret_task]) {
            if due > left {
                break;
            }
            self.elapse(due);
            left -= due;
            self.fire_due();
        }
        self.elapse(left);
    }

    fn elapse(&mut self, delta: Duration) {
        self.reveal_task.elapse(delta);
        self.caret_task.elapse(delta);
    }

    fn fire_due(&mut self) {
        if self.reveal_task.take_due() {
            self.revealed = (self.revealed + 1).min(self.ends.len());
            if self.is_complete() {
                trace!(len = self.revealed, "Typewriter reveal complete");
            } else {
                self.reveal_task.schedule(self.interval);
            }
        }
        if self.caret_task.take_due() {
            self.caret_visible = !self.caret_visible;
            self.caret_task.schedule(self.caret_period);
        }
    }

    fn load(&mut self, source: String) {
        self.ends = source
            .grapheme_indices(true)
            .map(|(offset, grapheme)| offset + grapheme.len())
            .collect();
        self.source = source;
        self.revealed = 0;
    }

    fn restart_caret(&mut self) {
        self.caret_visible = true;
        self.caret_task.schedule(self.caret_period);
    }

    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The visible prefix of the source, without the caret.
    #[must_use]
    pub fn revealed(&self) -> &str {
        match self.revealed.checked_sub(1) {
            Some(last) => &self.source[..self.ends[last]],
            None => "",
        }
    }

    /// Number of graphemes revealed so far.
    #[must_use]
    pub fn revealed_len(&self) -> usize {
        self.revealed
    }

    /// Source length in graphemes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ends.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ends.is_empty()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.revealed == self.ends.len()
    }

    /// Whether any task is pending.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.reveal_task.is_pending() || self.caret_task.is_pending()
    }

    #[must_use]
    pub fn is_revealing(&self) -> bool {
        self.reveal_task.is_pending()
    }

    #[must_use]
    pub fn caret_visible(&self) -> bool {
        self.caret_visible
    }

    /// Revealed text followed by the caret, or a blank cell in the caret's
    /// place while it is hidden so the line width stays stable.
    #[must_use]
    pub fn current_display(&self) -> String {
        let caret = if self.caret_visible {
            self.caret_glyph
        } else {
            " "
        };
        format!("{}{caret}", self.revealed())
    }
}

fn clamp_interval(interval: Duration) -> Duration {
    interval.max(MIN_INTERVAL)
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_CARET_BLINK, TypewriterEngine, UNICODE_CARET};
    use std::time::Duration;

    const INTERVAL: Duration = Duration::from_millis(100);

    fn engine() -> TypewriterEngine {
        TypewriterEngine::new(DEFAULT_CARET_BLINK, UNICODE_CARET)
    }

    #[test]
    fn reveals_one_grapheme_per_tick_then_stops() {
        let mut tw = engine();
        tw.start("Deependra", INTERVAL);
        assert_eq!(tw.revealed(), "");

        let mut seen_full = 0;
        for _ in 0..9 {
            tw.advance(INTERVAL);
            if tw.revealed() == "Deependra" {
                seen_full += 1;
            }
        }
        assert_eq!(seen_full, 1);
        assert!(tw.is_complete());
        assert!(!tw.is_revealing());

        for _ in 0..20 {
            tw.advance(INTERVAL);
            assert_eq!(tw.revealed(), "Deependra");
        }
    }

    #[test]
    fn prefixes_grow_monotonically() {
        let mut tw = engine();
        tw.start("abc", INTERVAL);
        let mut prefixes = vec![tw.revealed().to_owned()];
        for _ in 0..3 {
            tw.advance(INTERVAL);
            prefixes.push(tw.revealed().to_owned());
        }
        assert_eq!(prefixes, ["", "a", "ab", "abc"]);
    }

    #[test]
    fn large_delta_fires_every_due_reveal() {
        let mut tw = engine();
        tw.start("hello world", INTERVAL);
        tw.advance(INTERVAL * 5);
        assert_eq!(tw.revealed(), "hello");
        tw.advance(Duration::from_secs(60));
        assert_eq!(tw.revealed(), "hello world");
    }

    #[test]
    fn partial_ticks_accumulate() {
        let mut tw = engine();
        tw.start("ab", INTERVAL);
        tw.advance(Duration::from_millis(60));
        assert_eq!(tw.revealed(), "");
        tw.advance(Duration::from_millis(40));
        assert_eq!(tw.revealed(), "a");
    }

    #[test]
    fn restart_mid_reveal_never_mixes_sources() {
        let mut tw = engine();
        tw.start("first", INTERVAL);
        tw.advance(INTERVAL * 3);
        assert_eq!(tw.revealed(), "fir");

        tw.start("SECOND", INTERVAL);
        assert_eq!(tw.revealed(), "");
        for _ in 0..6 {
            tw.advance(INTERVAL);
            assert!("SECOND".starts_with(tw.revealed()));
        }
        assert_eq!(tw.revealed(), "SECOND");
    }

    #[test]
    fn restart_drops_stale_partial_deadline() {
        let mut tw = engine();
        tw.start("abc", INTERVAL);
        tw.advance(Duration::from_millis(90));
        tw.start("xyz", INTERVAL);
        tw.advance(Duration::from_millis(10));
        assert_eq!(tw.revealed(), "");
        tw.advance(Duration::from_millis(90));
        assert_eq!(tw.revealed(), "x");
    }


    #[test]
    fn empty_text_shows_only_caret() {
        let mut tw = engine();
        tw.start("", INTERVAL);
        assert!(tw.is_complete());
        assert!(!tw.is_revealing());
        assert_eq!(tw.current_display(), UNICODE_CARET);
    }

    #[test]
    fn reveal_respects_grapheme_clusters() {
        let mut tw = engine();
        tw.start("e\u{301}👍🏽!", INTERVAL);
        assert_eq!(tw.len(), 3);
        tw.advance(INTERVAL);
        assert_eq!(tw.revealed(), "e\u{301}");
        tw.advance(INTERVAL);
        assert_eq!(tw.revealed(), "e\u{301}👍🏽");
    }

    #[test]
    fn caret_blinks_independently_of_reveal() {
        let mut tw = engine();
        tw.start("ab", INTERVAL);
        assert!(tw.caret_visible());
        tw.advance(Duration::from_millis(499));
        assert!(tw.caret_visible());
        assert!(tw.is_complete());
        tw.advance(Duration::from_millis(1));
        assert!(!tw.caret_visible());
        assert_eq!(tw.current_display(), "ab ");
        tw.advance(DEFAULT_CARET_BLINK);
        assert!(tw.caret_visible());
        assert_eq!(tw.current_display(), format!("ab{UNICODE_CARET}"));
    }

    #[test]
    fn cancel_stops_all_tasks() {
        let mut tw = engine();
        tw.start("abcdef", INTERVAL);
        tw.advance(INTERVAL * 2);
        tw.cancel();
        assert!(!tw.is_running());
        let caret = tw.caret_visible();
        tw.advance(Duration::from_secs(10));
        assert_eq!(tw.revealed(), "ab");
        assert_eq!(tw.caret_visible(), caret);
    }

    #[test]
    fn start_revealed_skips_animation() {
        let mut tw = engine();
        tw.start_revealed("instant");
        assert_eq!(tw.revealed(), "instant");
        assert!(!tw.is_revealing());
        assert!(tw.is_running());
    }

    #[test]
    fn zero_interval_is_clamped_in_release() {
        let interval = super::clamp_interval(Duration::ZERO);
        assert_eq!(interval, Duration::from_millis(1));
    }
}
