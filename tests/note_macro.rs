#![cfg(feature = "notes")]

use blipforge::{NoteSequence, note, notes};

#[test]
fn test_note_macro_with_octave() {
    let c4: f64 = note!("C4");
    assert!((c4 - 261.63).abs() < 0.01);
}

#[test]
fn test_note_macro_without_octave() {
    // Defaults to octave 4
    let c: f64 = note!("C");
    assert!((c - 261.63).abs() < 0.01);
}

#[test]
fn test_note_macro_sharps() {
    let csharp: f64 = note!("C#4");
    assert!((csharp - 277.18).abs() < 0.01);
}

#[test]
fn test_note_macro_flats() {
    let bflat: f64 = note!("Bb3");
    assert!((bflat - 233.08).abs() < 0.01);
}

#[test]
fn test_note_macro_a4() {
    let a4: f64 = note!("A4");
    assert!((a4 - 440.0).abs() < 0.01);
}

#[test]
fn test_notes_macro_length_and_rests() {
    let line = notes!["C4", "_", "E4", "."];
    assert_eq!(line.len(), 4);
    assert_eq!(line[1], 0.0);
    assert_eq!(line[3], 0.0);
    assert!(line[0] > 0.0);
    assert!(line[2] > 0.0);
}

#[test]
fn test_notes_macro_feeds_note_sequence() {
    let track = NoteSequence::new(notes!["C4", "_", "E4"], 0.4)
        .assemble()
        .unwrap();
    // Three 0.4s slots at 44.1 kHz, rest in the middle.
    assert_eq!(track.frames(), 3 * 17640);
    for i in 17640..35280 {
        assert_eq!(track.frame(i), (0, 0));
    }
}
