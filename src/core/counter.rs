//! Counter animation for the hero statistics
//!
//! A statistic such as `"150+"` is split into a numeric target (`150`) and a
//! suffix (`"+"`). Once the element becomes visible the displayed number runs
//! from zero to the target over [`COUNTER_DURATION_MS`], one frame every
//! [`COUNTER_TICK_MS`].
//!
//! The interpolation law lives in [`interpolate`]; [`CounterRun`] only keeps
//! the elapsed time, so a timer driving it never accumulates rounding error.

/// Total animation time in milliseconds
pub const COUNTER_DURATION_MS: u32 = 2000;

/// Interval between two frames in milliseconds
pub const COUNTER_TICK_MS: u32 = 16;

/// Visibility ratio that starts a counter
pub const COUNTER_THRESHOLD: f64 = 0.5;

/// Target and suffix parsed from a statistic's text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterSpec {
    /// Value shown when the animation ends
    pub target: u64,
    /// Every non-digit character of the original text, in order
    pub suffix: String,
}

impl CounterSpec {
    /// Parse the text of a statistic element.
    ///
    /// Digits form the target, everything else the suffix. Text without
    /// digits has a target of zero; a digit run too large for `u64`
    /// saturates.
    pub fn parse(text: &str) -> Self {
        let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
        let suffix: String = text.chars().filter(|c| !c.is_ascii_digit()).collect();

        let target = if digits.is_empty() {
            0
        } else {
            digits.parse::<u64>().unwrap_or(u64::MAX)
        };

        Self { target, suffix }
    }

    /// Amount added per frame, in real arithmetic
    pub fn increment(&self) -> f64 {
        self.target as f64 / (COUNTER_DURATION_MS as f64 / COUNTER_TICK_MS as f64)
    }

    /// Text shown for a given numeric value
    pub fn render(&self, value: u64) -> String {
        format!("{}{}", value, self.suffix)
    }
}

/// Accumulated (unfloored) value after `elapsed_ms` of a run towards `target`.
///
/// Returns `None` once the run has reached the target.
fn accumulated(elapsed_ms: u64, target: u64, duration_ms: u32) -> Option<f64> {
    if duration_ms == 0 {
        return None;
    }
    let value = target as f64 * elapsed_ms as f64 / duration_ms as f64;
    if value >= target as f64 {
        None
    } else {
        Some(value)
    }
}

/// Displayed integer after `elapsed_ms` of a run towards `target`.
///
/// Linear from zero, floored only here, and clamped to exactly `target`
/// once the accumulated value reaches it.
pub fn interpolate(elapsed_ms: u64, target: u64, duration_ms: u32) -> u64 {
    match accumulated(elapsed_ms, target, duration_ms) {
        Some(value) => (value.floor() as u64).min(target),
        None => target,
    }
}

/// One rendered frame of a counter run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterFrame {
    pub text: String,
    /// True for the final frame; the driver stops its timer afterwards
    pub done: bool,
}

/// A single counter animation, advanced one tick at a time
#[derive(Debug, Clone)]
pub struct CounterRun {
    spec: CounterSpec,
    elapsed_ms: u64,
    finished: bool,
}

impl CounterRun {
    /// Start a run from the element's current text
    pub fn start(text: &str) -> Self {
        Self {
            spec: CounterSpec::parse(text),
            elapsed_ms: 0,
            finished: false,
        }
    }

    pub fn spec(&self) -> &CounterSpec {
        &self.spec
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advance by one tick and return the frame to render.
    ///
    /// Frame `n` shows `floor(n * increment())`, computed from the elapsed
    /// time instead of a running sum. Ticking a finished run keeps returning
    /// the final frame.
    pub fn tick(&mut self) -> CounterFrame {
        if !self.finished {
            self.elapsed_ms += COUNTER_TICK_MS as u64;
            if accumulated(self.elapsed_ms, self.spec.target, COUNTER_DURATION_MS).is_none() {
                self.finished = true;
            }
        }

        let value = if self.finished {
            self.spec.target
        } else {
            interpolate(self.elapsed_ms, self.spec.target, COUNTER_DURATION_MS)
        };

        CounterFrame {
            text: self.spec.render(value),
            done: self.finished,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_end(text: &str) -> (Vec<CounterFrame>, CounterRun) {
        let mut run = CounterRun::start(text);
        let mut frames = Vec::new();
        loop {
            let frame = run.tick();
            let done = frame.done;
            frames.push(frame);
            if done {
                break;
            }
            assert!(frames.len() < 1000, "counter never finished");
        }
        (frames, run)
    }

    #[test]
    fn test_parse_plain_number() {
        let spec = CounterSpec::parse("150");
        assert_eq!(spec.target, 150);
        assert_eq!(spec.suffix, "");
    }

    #[test]
    fn test_parse_keeps_every_non_digit_in_suffix() {
        let spec = CounterSpec::parse("1,200+");
        assert_eq!(spec.target, 1200);
        assert_eq!(spec.suffix, ",+");

        let spec = CounterSpec::parse("98%");
        assert_eq!(spec.target, 98);
        assert_eq!(spec.suffix, "%");
    }

    #[test]
    fn test_parse_without_digits() {
        let spec = CounterSpec::parse("Many");
        assert_eq!(spec.target, 0);
        assert_eq!(spec.suffix, "Many");
    }

    #[test]
    fn test_parse_overflow_saturates() {
        let spec = CounterSpec::parse("99999999999999999999999 clients");
        assert_eq!(spec.target, u64::MAX);
        assert_eq!(spec.suffix, " clients");
    }

    #[test]
    fn test_increment_uses_real_division() {
        let spec = CounterSpec::parse("50");
        assert!((spec.increment() - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_frames_follow_the_per_tick_increment() {
        for text in ["50", "150+", "98%", "7"] {
            let mut run = CounterRun::start(text);
            let increment = run.spec().increment();
            let mut tick = 0u32;
            while !run.is_finished() {
                run.tick();
                tick += 1;
                let shown = interpolate(
                    u64::from(tick * COUNTER_TICK_MS),
                    run.spec().target,
                    COUNTER_DURATION_MS,
                );
                let exact = (increment * f64::from(tick)).min(run.spec().target as f64);
                assert!((exact - shown as f64).abs() < 1.0, "{text} at tick {tick}");
            }
            assert_eq!(tick, COUNTER_DURATION_MS / COUNTER_TICK_MS);
        }
    }

    #[test]
    fn test_interpolate_is_linear_and_floored() {
        assert_eq!(interpolate(0, 100, 2000), 0);
        assert_eq!(interpolate(1000, 100, 2000), 50);
        assert_eq!(interpolate(16, 100, 2000), 0);
        assert_eq!(interpolate(32, 100, 2000), 1);
        assert_eq!(interpolate(2000, 100, 2000), 100);
        assert_eq!(interpolate(5000, 100, 2000), 100);
    }

    #[test]
    fn test_interpolate_with_zero_duration_jumps_to_target() {
        assert_eq!(interpolate(0, 42, 0), 42);
    }

    #[test]
    fn test_zero_target_finishes_on_first_tick() {
        let mut run = CounterRun::start("0+");
        let frame = run.tick();
        assert_eq!(frame.text, "0+");
        assert!(frame.done);
        assert!(run.is_finished());
    }

    #[test]
    fn test_text_without_digits_finishes_immediately() {
        let (frames, _) = run_to_end("Awards");
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].text, "0Awards");
    }

    #[test]
    fn test_run_ends_exactly_on_target() {
        for target in [1u64, 7, 99, 125, 150, 1200, 50_000, 1_000_003] {
            let text = format!("{}+", target);
            let (frames, run) = run_to_end(&text);
            let last = frames.last().unwrap();
            assert_eq!(last.text, format!("{}+", target));
            assert_eq!(run.spec().suffix, "+");
            assert_eq!(frames.len(), 125, "target {}", target);
        }
    }

    #[test]
    fn test_frames_never_overshoot_and_never_decrease() {
        let (frames, _) = run_to_end("37 projects");
        let mut previous = 0u64;
        for frame in &frames {
            let value: u64 = frame
                .text
                .trim_end_matches(" projects")
                .parse()
                .unwrap();
            assert!(value <= 37);
            assert!(value >= previous);
            previous = value;
        }
        assert_eq!(previous, 37);
    }

    #[test]
    fn test_tick_after_finish_repeats_final_frame() {
        let mut run = CounterRun::start("0");
        let first = run.tick();
        let again = run.tick();
        assert_eq!(first, again);
    }

    #[test]
    fn test_huge_target_ends_exactly() {
        let (frames, _) = run_to_end("18446744073709551615");
        assert_eq!(frames.last().unwrap().text, "18446744073709551615");
    }
}
