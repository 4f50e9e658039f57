use clap::Parser;
use itertools::iproduct;
use pitch_convert::{NoteSymbol, SemitoneSearch, note_to_frequency, table::OCTAVE_4_SYMBOLS};

#[derive(Parser, Debug)]
struct Args {
    /// Notes to print (e.g. "A", "C#", "Eb"). Defaults to every note.
    notes: Vec<String>,
    #[arg(long, default_value_t = 0)]
    min_octave: i32,
    #[arg(long, default_value_t = 8)]
    max_octave: i32,
    /// Also convert this frequency to a MIDI note number.
    #[arg(short, long)]
    freq_hz: Option<f64>,
    #[arg(long, default_value_t = pitch_convert::search::DEFAULT_MAX_STEPS)]
    max_steps: usize,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let notes = if args.notes.is_empty() {
        OCTAVE_4_SYMBOLS.iter().map(|s| s.to_string()).collect()
    } else {
        args.notes
            .iter()
            .map(|s| s.parse::<NoteSymbol>().map(|symbol| symbol.to_string()))
            .collect::<Result<Vec<_>, _>>()?
    };
    let search = SemitoneSearch::default().with_max_steps(args.max_steps);
    for (note, octave) in iproduct!(notes, args.min_octave..=args.max_octave) {
        let freq_hz = note_to_frequency(&note, octave);
        let midi_note = search.midi_note(freq_hz)?;
        println!("{}{}\t{:.3}Hz\tMIDI {}", note, octave, freq_hz, midi_note);
    }
    if let Some(freq_hz) = args.freq_hz {
        println!("{}Hz\tMIDI {}", freq_hz, search.midi_note(freq_hz)?);
    }
    Ok(())
}
