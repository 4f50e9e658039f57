//! Conversions between note names, frequencies and MIDI note numbers in 12-tone equal
//! temperament, with A_4 at 440Hz and C_4 as middle C.
//!
//! Note names are converted to frequencies by looking up a table of pitches in the 4th octave and
//! doubling or halving once per octave. Frequencies are converted to MIDI note numbers by
//! walking semitone by semitone from C_5 (MIDI note 72).
mod error;
#[cfg(feature = "midi")]
mod midi;
pub mod note;
pub mod search;
pub mod table;

pub use error::PitchError;
#[cfg(feature = "midi")]
pub use midi::frequency_to_u7;
pub use note::{Accidental, NoteSymbol, note_to_frequency, scale_to_octave};
pub use search::{SemitoneSearch, frequency_to_midi_note};
