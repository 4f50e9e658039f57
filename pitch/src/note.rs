//! Parsing of note symbols like "A", "c#" or "Eb" and conversion of a symbol in a given octave to
//! a frequency.
use crate::{
    error::PitchError,
    table::{self, REFERENCE_OCTAVE},
};
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Accidental {
    #[default]
    Natural,
    Sharp,
    Flat,
}

impl Accidental {
    const SHARP_MARKER: char = '#';
    /// Only a lower-case 'b' means flat so it can't be mistaken for the note B.
    const FLAT_MARKER: char = 'b';

    fn from_marker(c: char) -> Option<Self> {
        match c {
            Self::SHARP_MARKER => Some(Self::Sharp),
            Self::FLAT_MARKER => Some(Self::Flat),
            _ => None,
        }
    }

    /// Number of semitones to move from the base letter.
    pub const fn shift(self) -> i32 {
        match self {
            Self::Natural => 0,
            Self::Sharp => 1,
            Self::Flat => -1,
        }
    }

    fn marker(self) -> Option<char> {
        match self {
            Self::Natural => None,
            Self::Sharp => Some(Self::SHARP_MARKER),
            Self::Flat => Some(Self::FLAT_MARKER),
        }
    }
}

/// A note name without an octave, as written by a user. The base isn't validated, so a symbol
/// can name a note that doesn't exist, in which case its frequency is 0.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NoteSymbol {
    base: String,
    accidental: Accidental,
}

impl NoteSymbol {
    /// Never fails. An accidental is only recognized as the second character, in which case the
    /// first character is the base letter and anything after the accidental is ignored.
    /// Otherwise the entire (upper-cased) string is taken to be the base letter.
    pub fn parse(s: &str) -> Self {
        let mut chars = s.chars();
        let letter = chars.next();
        let accidental = chars.next().and_then(Accidental::from_marker);
        match (letter, accidental) {
            (Some(letter), Some(accidental)) => Self {
                base: letter.to_uppercase().collect(),
                accidental,
            },
            _ => Self {
                base: s.to_uppercase(),
                accidental: Accidental::Natural,
            },
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn accidental(&self) -> Accidental {
        self.accidental
    }

    /// True if the base is one of the note letters.
    pub fn is_known(&self) -> bool {
        table::symbol_index(&self.base).is_some()
    }

    /// Frequency of this note in the 4th octave, or 0 if the base is unknown.
    pub fn base_freq_hz(&self) -> f64 {
        table::lookup_base_frequency(&self.base, self.accidental.shift())
    }

    pub fn freq_hz(&self, octave: i32) -> f64 {
        scale_to_octave(self.base_freq_hz(), octave)
    }
}

/// Example formats: "C", "C#", "Eb"
impl Display for NoteSymbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.base)?;
        if let Some(marker) = self.accidental.marker() {
            write!(f, "{}", marker)?;
        }
        Ok(())
    }
}

/// Unlike `NoteSymbol::parse`, rejects anything that isn't a note letter optionally followed by a
/// single accidental.
impl FromStr for NoteSymbol {
    type Err = PitchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbol = Self::parse(s);
        if symbol.is_known() && s.chars().count() <= 2 {
            Ok(symbol)
        } else {
            Err(PitchError::UnknownNote(s.to_string()))
        }
    }
}

/// Moves a frequency from the 4th octave to `octave` by doubling or halving once per octave.
/// Octaves far outside the usual range give 0 or infinity.
pub fn scale_to_octave(freq_hz: f64, octave: i32) -> f64 {
    let num_octaves = octave.saturating_sub(REFERENCE_OCTAVE);
    let factor = if num_octaves > 0 { 2.0 } else { 0.5 };
    let mut freq_hz = freq_hz;
    for _ in 0..num_octaves.unsigned_abs() {
        // both are fixed points of further scaling
        if freq_hz == 0.0 || freq_hz.is_infinite() {
            break;
        }
        freq_hz *= factor;
    }
    freq_hz
}

/// Returns the frequency in Hz of `note` (e.g. "A", "C#", "Eb") in `octave` (typically 0 to 9).
/// Returns 0 if the note can't be recognized.
pub fn note_to_frequency(note: &str, octave: i32) -> f64 {
    let symbol = NoteSymbol::parse(note);
    if !symbol.is_known() {
        log::debug!("unknown note symbol {:?}", note);
    }
    symbol.freq_hz(octave)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::table::OCTAVE_4_SYMBOLS;
    use itertools::iproduct;

    #[test]
    fn a_4_is_440() {
        assert_eq!(note_to_frequency("A", 4), 440.0);
    }

    #[test]
    fn middle_c() {
        assert_eq!(note_to_frequency("C", 4), 261.626);
    }

    #[test]
    fn each_octave_doubles() {
        for (symbol, octave) in iproduct!(OCTAVE_4_SYMBOLS, 0..9) {
            assert_eq!(
                note_to_frequency(symbol, octave + 1),
                2.0 * note_to_frequency(symbol, octave),
                "{}{}",
                symbol,
                octave
            );
        }
    }

    #[test]
    fn octave_scaling() {
        assert_eq!(note_to_frequency("A", 0), 27.5);
        assert_eq!(note_to_frequency("A", 9), 14080.0);
        assert_eq!(note_to_frequency("C", 0), 16.351625);
        assert_eq!(scale_to_octave(440.0, 4), 440.0);
    }

    #[test]
    fn extreme_octaves() {
        assert_eq!(note_to_frequency("A", i32::MIN), 0.0);
        assert_eq!(note_to_frequency("A", i32::MIN + 3), 0.0);
        assert_eq!(note_to_frequency("A", i32::MAX), f64::INFINITY);
        assert_eq!(note_to_frequency("H", i32::MAX), 0.0);
    }

    #[test]
    fn serde_round_trip() {
        for s in ["C", "c#", "Eb", "H"] {
            let symbol = NoteSymbol::parse(s);
            let json = serde_json::to_string(&symbol).unwrap();
            assert_eq!(serde_json::from_str::<NoteSymbol>(&json).unwrap(), symbol);
        }
        assert_eq!(
            serde_json::to_string(&NoteSymbol::parse("Eb")).unwrap(),
            r#"{"base":"E","accidental":"Flat"}"#
        );
    }

    #[test]
    fn sharps_and_flats_use_neighbouring_entries() {
        assert_eq!(note_to_frequency("C#", 4), 277.183);
        assert_eq!(note_to_frequency("Db", 4), 277.183);
        assert_eq!(note_to_frequency("Eb", 4), 311.127);
        assert_eq!(note_to_frequency("Bb", 3), 233.082);
        assert_eq!(note_to_frequency("E#", 4), 349.228);
    }

    #[test]
    fn accidentals_wrap_within_the_octave() {
        assert_eq!(note_to_frequency("B#", 4), 261.626);
        assert_eq!(note_to_frequency("Cb", 4), 493.883);
    }

    #[test]
    fn letters_are_case_insensitive() {
        assert_eq!(note_to_frequency("a", 4), 440.0);
        assert_eq!(note_to_frequency("c#", 4), 277.183);
        assert_eq!(note_to_frequency("b", 4), 493.883);
        assert_eq!(note_to_frequency("bb", 4), 466.164);
    }

    #[test]
    fn flat_marker_is_case_sensitive() {
        assert_eq!(note_to_frequency("BB", 4), 0.0);
        assert_eq!(note_to_frequency("DB", 4), 0.0);
    }

    #[test]
    fn unknown_notes_are_zero() {
        assert_eq!(note_to_frequency("H", 4), 0.0);
        assert_eq!(note_to_frequency("H", 7), 0.0);
        assert_eq!(note_to_frequency("", 4), 0.0);
        assert_eq!(note_to_frequency("CD", 4), 0.0);
        assert_eq!(note_to_frequency("#", 4), 0.0);
        assert_eq!(note_to_frequency("C x#", 4), 0.0);
    }

    #[test]
    fn trailing_characters_after_accidental_are_ignored() {
        assert_eq!(note_to_frequency("C#x", 4), 277.183);
    }

    #[test]
    fn parse_fields() {
        let symbol = NoteSymbol::parse("eb");
        assert_eq!(symbol.base(), "E");
        assert_eq!(symbol.accidental(), Accidental::Flat);
        assert!(symbol.is_known());
        assert!(!NoteSymbol::parse("H#").is_known());
    }

    #[test]
    fn string_round_trip() {
        for s in ["C", "C#", "Eb", "A"] {
            assert_eq!(s.parse::<NoteSymbol>().unwrap().to_string(), s);
        }
    }

    #[test]
    fn strict_parse_rejects_unknown() {
        assert_eq!(
            "H".parse::<NoteSymbol>(),
            Err(PitchError::UnknownNote("H".to_string()))
        );
        assert!("C#x".parse::<NoteSymbol>().is_err());
        assert!("".parse::<NoteSymbol>().is_err());
        assert!("BB".parse::<NoteSymbol>().is_err());
    }
}
