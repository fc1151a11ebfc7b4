//! Interactive scene menu: arrow keys navigate, Enter starts the scene's
//! looping track, and every keypress goes through the same registry lookups
//! a game loop would make.
//!
//! Run with: cargo run --example menu
//!
//! Keys: Up/Down select, Enter play, s stop, q quit.

mod common;

use anyhow::Result;
use blipforge::{AudioRegistry, LoopCount, Mixer};
use common::CpalMixer;
use crossterm::event::{self, Event, KeyCode};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use std::time::Duration;

const SCENES: [&str; 7] = [
    "menu", "field", "throne", "carnival", "city", "palace", "bazaar",
];

fn main() -> Result<()> {
    let mut registry = AudioRegistry::new();
    registry.initialize()?;
    let mut mixer = CpalMixer::new()?;

    let mut selected: usize = 0;
    println!("Up/Down: select scene | Enter: play | s: stop | q: quit");
    draw(selected);

    enable_raw_mode()?;
    let result = run(&registry, &mut mixer, &mut selected);
    disable_raw_mode()?;
    result
}

fn run(registry: &AudioRegistry, mixer: &mut CpalMixer, selected: &mut usize) -> Result<()> {
    loop {
        if !event::poll(Duration::from_millis(50))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };

        match key.code {
            KeyCode::Up => {
                *selected = selected.checked_sub(1).unwrap_or(SCENES.len() - 1);
                mixer.play(registry.effect("menu_move")?, LoopCount::from(0));
                draw(*selected);
            }
            KeyCode::Down => {
                *selected = (*selected + 1) % SCENES.len();
                mixer.play(registry.effect("menu_move")?, LoopCount::from(0));
                draw(*selected);
            }
            KeyCode::Enter => {
                mixer.stop_all();
                mixer.play(registry.effect("menu_select")?, LoopCount::from(0));
                mixer.play(registry.track(SCENES[*selected])?, LoopCount::Forever);
            }
            KeyCode::Char('s') => mixer.stop_all(),
            KeyCode::Char('q') | KeyCode::Esc => {
                mixer.stop_all();
                return Ok(());
            }
            _ => {}
        }
    }
}

fn draw(selected: usize) {
    // Raw mode needs explicit carriage returns.
    print!("\r\n");
    for (i, scene) in SCENES.iter().enumerate() {
        let marker = if i == selected { ">" } else { " " };
        print!("{} {}\r\n", marker, scene);
    }
}
