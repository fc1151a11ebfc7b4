use proc_macro::TokenStream;
use quote::quote;
use syn::punctuated::Punctuated;
use syn::{LitStr, Token, parse_macro_input};

/// Converts a note name to its frequency in Hz at compile time.
///
/// The literal is parsed during macro expansion, so an invalid note name is a
/// compile error and the expanded code is a plain `f64` literal with no
/// runtime cost.
///
/// # Format
///
/// The format is: `<pitch>[octave]` where:
/// - `pitch` can be: C, D, E, F, G, A, B with optional # or b
/// - `octave` is optional, defaults to 4 (middle octave)
/// - When provided, octave must be -1 to 9
///
/// # Examples
///
/// ```ignore
/// use blipforge::note;
///
/// // With octave
/// let a4: f64 = note!("A4");
/// assert!((a4 - 440.0).abs() < 0.01);
///
/// // Without octave (defaults to 4)
/// let middle_c: f64 = note!("C");
///
/// // With sharps and flats
/// let csharp = note!("C#4");
/// let bflat = note!("Bb3");
/// ```
#[proc_macro]
pub fn note(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as LitStr);

    match note_frequency(&input.value()) {
        Ok(frequency) => TokenStream::from(quote! { #frequency }),
        Err(e) => {
            let error_msg = format!("Invalid note string '{}': {}", input.value(), e);
            TokenStream::from(quote! { compile_error!(#error_msg) })
        }
    }
}

/// Converts a list of note names to a fixed-size `[f64; N]` of frequencies.
///
/// Each element follows the `note!` format; `"_"` or `"."` marks a rest and
/// expands to `0.0`. The result feeds directly into `NoteSequence::new`.
///
/// # Examples
///
/// ```ignore
/// use blipforge::notes;
///
/// let line = notes!["C4", "_", "E4", "_"];
/// assert_eq!(line.len(), 4);
/// assert_eq!(line[1], 0.0);
/// ```
#[proc_macro]
pub fn notes(input: TokenStream) -> TokenStream {
    let entries =
        parse_macro_input!(input with Punctuated::<LitStr, Token![,]>::parse_terminated);

    let mut frequencies = Vec::with_capacity(entries.len());
    for entry in &entries {
        let name = entry.value();
        if name == "_" || name == "." {
            frequencies.push(0.0);
            continue;
        }
        match note_frequency(&name) {
            Ok(frequency) => frequencies.push(frequency),
            Err(e) => {
                let error_msg = format!("Invalid note string '{}': {}", name, e);
                return TokenStream::from(quote! { compile_error!(#error_msg) });
            }
        }
    }

    TokenStream::from(quote! { [#(#frequencies),*] })
}

#[derive(Debug, Clone, Copy)]
enum Pitch {
    C = 0,
    CSharp = 1,
    D = 2,
    DSharp = 3,
    E = 4,
    F = 5,
    FSharp = 6,
    G = 7,
    GSharp = 8,
    A = 9,
    ASharp = 10,
    B = 11,
}

impl Pitch {
    fn semitone_offset(&self) -> u8 {
        *self as u8
    }
}

fn note_frequency(s: &str) -> Result<f64, String> {
    let (pitch, octave) = parse_note(s)?;
    Ok(midi_to_freq(pitch_to_midi(pitch, octave)))
}

fn parse_pitch(s: &str) -> Result<Pitch, String> {
    let s = s.to_uppercase();
    match s.as_str() {
        "C" => Ok(Pitch::C),
        "C#" | "DB" => Ok(Pitch::CSharp),
        "D" => Ok(Pitch::D),
        "D#" | "EB" => Ok(Pitch::DSharp),
        "E" | "FB" => Ok(Pitch::E),
        "F" | "E#" => Ok(Pitch::F),
        "F#" | "GB" => Ok(Pitch::FSharp),
        "G" => Ok(Pitch::G),
        "G#" | "AB" => Ok(Pitch::GSharp),
        "A" => Ok(Pitch::A),
        "A#" | "BB" => Ok(Pitch::ASharp),
        "B" | "CB" => Ok(Pitch::B),
        _ => Err(format!("invalid pitch '{}'", s)),
    }
}

fn parse_note(s: &str) -> Result<(Pitch, i8), String> {
    if s.is_empty() {
        return Err("empty string".to_string());
    }

    // Find where the octave number starts
    let octave_start = s.chars().position(|c| c.is_numeric() || c == '-');

    let (pitch_str, octave) = match octave_start {
        Some(0) => {
            return Err("string starts with number".to_string());
        }
        Some(pos) => {
            let pitch_str = &s[..pos];
            let octave_str = &s[pos..];

            let octave = octave_str
                .parse::<i8>()
                .map_err(|_| format!("invalid octave '{}'", octave_str))?;

            if !(-1..=9).contains(&octave) {
                return Err(format!("octave {} out of range (-1 to 9)", octave));
            }

            (pitch_str, octave)
        }
        None => {
            // No octave specified, default to 4
            (s, 4)
        }
    };

    let pitch = parse_pitch(pitch_str)?;
    Ok((pitch, octave))
}

fn pitch_to_midi(pitch: Pitch, octave: i8) -> u8 {
    // MIDI note 0 is C-1, so C4 (middle C) is 60
    let base = (octave + 1) as u8 * 12;
    base + pitch.semitone_offset()
}

fn midi_to_freq(midi_note: u8) -> f64 {
    // f = 440 * 2^((n - 69) / 12)
    440.0 * 2.0_f64.powf((f64::from(midi_note) - 69.0) / 12.0)
}
