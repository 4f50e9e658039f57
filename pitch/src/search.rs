//! Conversion from a frequency to the nearest MIDI note number. Rather than computing a logarithm
//! this walks semitone by semitone from C_5 (523.251Hz, MIDI note 72) until the frequency is
//! bracketed, truncating the reference pitch to 3 decimal places after every step. The
//! truncation is part of the observable behaviour: it decides which way frequencies close to the
//! midpoint between two notes are rounded.
use crate::error::PitchError;

/// Ratio between the frequencies of adjacent semitones (approximately the 12th root of 2).
pub const SEMITONE_RATIO: f64 = 1.05946309436;

pub const ANCHOR_FREQ_HZ: f64 = 523.251;
pub const ANCHOR_MIDI_NOTE: i32 = 72;

/// Enough to walk from the anchor to the highest frequency the search can bracket.
pub const DEFAULT_MAX_STEPS: usize = 16_384;

// The multiplication by 1000 comes first. Reordering changes the rounding of the result.
fn step_down(reference_hz: f64) -> f64 {
    (1000.0 * reference_hz / SEMITONE_RATIO).floor() / 1000.0
}

fn step_up(reference_hz: f64) -> f64 {
    (1000.0 * reference_hz * SEMITONE_RATIO).floor() / 1000.0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Down,
    Up,
}

impl Direction {
    fn sign(self) -> i32 {
        match self {
            Self::Down => -1,
            Self::Up => 1,
        }
    }
}

/// Search state after walking towards the target frequency. Unset brackets are 0, so a target
/// that was never passed on one side reads as being its own distance away from that side.
struct Walk {
    reference_hz: f64,
    steps: i32,
    direction: Option<Direction>,
    lower_hz: f64,
    upper_hz: f64,
    descended: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SemitoneSearch {
    max_steps: usize,
}

impl Default for SemitoneSearch {
    fn default() -> Self {
        Self {
            max_steps: DEFAULT_MAX_STEPS,
        }
    }
}

impl SemitoneSearch {
    pub fn with_max_steps(self, max_steps: usize) -> Self {
        Self { max_steps }
    }

    pub fn max_steps(&self) -> usize {
        self.max_steps
    }

    fn walk(&self, freq_hz: f64) -> Result<Walk, PitchError> {
        let exhausted = || PitchError::SearchExhausted {
            freq_hz,
            max_steps: self.max_steps,
        };
        let mut walk = Walk {
            reference_hz: ANCHOR_FREQ_HZ,
            steps: 0,
            direction: None,
            lower_hz: 0.0,
            upper_hz: 0.0,
            descended: false,
        };
        let mut num_steps = 0;
        while freq_hz < walk.reference_hz {
            num_steps += 1;
            if num_steps > self.max_steps {
                return Err(exhausted());
            }
            walk.reference_hz = step_down(walk.reference_hz);
            walk.steps += 1;
            walk.direction = Some(Direction::Down);
            walk.descended = true;
            walk.lower_hz = walk.reference_hz;
        }
        while freq_hz > walk.reference_hz {
            num_steps += 1;
            if num_steps > self.max_steps {
                return Err(exhausted());
            }
            walk.reference_hz = step_up(walk.reference_hz);
            if !walk.reference_hz.is_finite() {
                return Err(PitchError::FrequencyTooHigh(freq_hz));
            }
            walk.steps -= 1;
            walk.direction = Some(Direction::Up);
            walk.upper_hz = walk.reference_hz;
        }
        log::trace!(
            "semitone search for {}Hz stopped at {}Hz after {} steps",
            freq_hz,
            walk.reference_hz,
            num_steps
        );
        Ok(walk)
    }

    /// Returns the MIDI note number nearest to `freq_hz`. The result isn't clamped to the MIDI
    /// range; frequencies below C_-1 give negative numbers and those above G_9 give numbers above
    /// 127.
    pub fn midi_note(&self, freq_hz: f64) -> Result<i32, PitchError> {
        if !freq_hz.is_finite() || freq_hz <= 0.0 {
            log::warn!("rejecting frequency {} in semitone search", freq_hz);
            return Err(PitchError::InvalidFrequency(freq_hz));
        }
        let Walk {
            reference_hz,
            mut steps,
            mut direction,
            lower_hz,
            upper_hz,
            descended,
        } = self.walk(freq_hz).inspect_err(|e| log::warn!("{}", e))?;
        if freq_hz == reference_hz {
            // landed exactly on a reference pitch
            let sign = direction.map_or(0, Direction::sign);
            return Ok(ANCHOR_MIDI_NOTE + sign * steps.abs());
        }
        let upper_distance = (freq_hz - upper_hz).abs();
        if (freq_hz - lower_hz).abs() < upper_distance {
            direction = Some(Direction::Down);
            steps += 1;
        } else if descended {
            direction = Some(Direction::Down);
        }
        if !descended {
            let probe_hz = step_down(reference_hz);
            if (freq_hz - probe_hz).abs() < upper_distance {
                steps += 1;
                direction = Some(Direction::Up);
            }
        }
        let sign = direction.map_or(0, Direction::sign);
        let midi_note = ANCHOR_MIDI_NOTE + sign * steps.abs();
        log::debug!("{}Hz is nearest to MIDI note {}", freq_hz, midi_note);
        Ok(midi_note)
    }
}

/// Returns the MIDI note number nearest to `freq_hz` (523.251Hz is 72). Fails if `freq_hz` isn't
/// a positive finite number.
pub fn frequency_to_midi_note(freq_hz: f64) -> Result<i32, PitchError> {
    SemitoneSearch::default().midi_note(freq_hz)
}
