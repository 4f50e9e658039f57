use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PitchError {
    #[error("frequency must be finite and greater than 0 Hz (got {0})")]
    InvalidFrequency(f64),

    /// The truncated stepping stalls for extremely low frequencies, where a step is smaller than
    /// the 1/1000 Hz resolution of the search.
    #[error("semitone search for {freq_hz} Hz did not settle within {max_steps} steps")]
    SearchExhausted { freq_hz: f64, max_steps: usize },

    /// Stepping up from a reference pitch this high would overflow `f64`.
    #[error("frequency {0} Hz is too high to bracket with semitone steps")]
    FrequencyTooHigh(f64),

    #[error("failed to parse note name: {0:?}")]
    UnknownNote(String),

    #[cfg(feature = "midi")]
    #[error("MIDI note {0} is out of range (expected 0 to 127)")]
    OutOfMidiRange(i32),
}
