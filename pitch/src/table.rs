//! Reference pitches of the 4th octave (the octave containing middle C and A_440Hz). Every other
//! octave is derived from these by repeated doubling or halving rather than by computing powers
//! of the semitone ratio, since the deviations introduced by the latter become more apparent the
//! further a pitch is from the centre of the range.

pub const NOTES_PER_OCTAVE: usize = 12;

/// The octave in which the reference pitches are defined.
pub const REFERENCE_OCTAVE: i32 = 4;

pub const C_4_FREQ_HZ: f64 = 261.626;
pub const C_SHARP_4_FREQ_HZ: f64 = 277.183;
pub const D_4_FREQ_HZ: f64 = 293.665;
pub const D_SHARP_4_FREQ_HZ: f64 = 311.127;
pub const E_4_FREQ_HZ: f64 = 329.628;
pub const F_4_FREQ_HZ: f64 = 349.228;
pub const F_SHARP_4_FREQ_HZ: f64 = 369.994;
pub const G_4_FREQ_HZ: f64 = 391.995;
pub const G_SHARP_4_FREQ_HZ: f64 = 415.305;
pub const A_4_FREQ_HZ: f64 = 440.0;
pub const A_SHARP_4_FREQ_HZ: f64 = 466.164;
pub const B_4_FREQ_HZ: f64 = 493.883;

/// Frequencies of the chromatic scale starting at C_4. Index i corresponds to index i of
/// `OCTAVE_4_SYMBOLS`.
pub const OCTAVE_4_FREQS_HZ: [f64; NOTES_PER_OCTAVE] = [
    C_4_FREQ_HZ,
    C_SHARP_4_FREQ_HZ,
    D_4_FREQ_HZ,
    D_SHARP_4_FREQ_HZ,
    E_4_FREQ_HZ,
    F_4_FREQ_HZ,
    F_SHARP_4_FREQ_HZ,
    G_4_FREQ_HZ,
    G_SHARP_4_FREQ_HZ,
    A_4_FREQ_HZ,
    A_SHARP_4_FREQ_HZ,
    B_4_FREQ_HZ,
];

/// Names of the notes in `OCTAVE_4_FREQS_HZ`. Accidentals are always written as sharps.
pub const OCTAVE_4_SYMBOLS: [&str; NOTES_PER_OCTAVE] =
    ["C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B"];

/// Returns the index of `symbol` within the octave, if it is one of the 12 symbols.
pub fn symbol_index(symbol: &str) -> Option<usize> {
    OCTAVE_4_SYMBOLS.iter().position(|&s| s == symbol)
}

/// Resolves a base letter (already upper-cased) and an enharmonic shift (-1 for flat, 0, +1 for
/// sharp) to a frequency in the 4th octave. Shifting past either end of the octave wraps around
/// without changing octave, so "B#" gives C_4 and "Cb" gives B_4. Returns 0 if the letter is not
/// a note name.
pub(crate) fn lookup_base_frequency(letter: &str, enharmonic_shift: i32) -> f64 {
    let Some(i) = symbol_index(letter) else {
        return 0.0;
    };
    let k = i as i32 + enharmonic_shift;
    if k >= NOTES_PER_OCTAVE as i32 {
        OCTAVE_4_FREQS_HZ[0]
    } else if k < 0 {
        OCTAVE_4_FREQS_HZ[NOTES_PER_OCTAVE - 1]
    } else {
        OCTAVE_4_FREQS_HZ[k as usize]
    }
}
