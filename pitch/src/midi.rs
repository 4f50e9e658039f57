use crate::{error::PitchError, search::frequency_to_midi_note};
use midly::num::u7;

const MAX_MIDI_NOTE: i32 = 127;

/// Like `frequency_to_midi_note` but for passing directly to midly, so fails if the nearest note
/// is outside the MIDI range.
pub fn frequency_to_u7(freq_hz: f64) -> Result<u7, PitchError> {
    let midi_note = frequency_to_midi_note(freq_hz)?;
    if (0..=MAX_MIDI_NOTE).contains(&midi_note) {
        Ok(u7::new(midi_note as u8))
    } else {
        Err(PitchError::OutOfMidiRange(midi_note))
    }
}
