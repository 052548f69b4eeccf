//! Lilyhop entry point
//!
//! Headless demo driver: runs a scripted session against the engine and
//! prints a short summary. Everything here talks to the core exactly the
//! way a real drawing layer would, just without pixels.

use clap::{Parser, ValueEnum};
use glam::Vec2;

use lilyhop::consts::HOME_SLOT_COUNT;
use lilyhop::engine::GameEngine;
use lilyhop::input::Keyboard;
use lilyhop::schedule::TickScheduler;
use lilyhop::sim::event::{GameEvent, MoveKey};
use lilyhop::sim::state::GamePhase;
use lilyhop::view::GameView;

/// Command-line options for a demo session.
#[derive(Debug, Parser)]
#[command(name = "lilyhop", about = "Headless lane-crossing demo session")]
struct Args {
    /// Number of 15 ms ticks to simulate (2000 empties the clock)
    #[arg(long, default_value_t = 2400)]
    ticks: u64,
    /// Scripted input to feed the engine
    #[arg(long, value_enum, default_value = "cross")]
    script: Script,
    /// Restart automatically whenever a run is lost
    #[arg(long)]
    auto_restart: bool,
    /// Print the final state as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Script {
    /// Tap Up every 600 ms and march into traffic
    Cross,
    /// Stand still and let the countdown run out
    Idle,
}

/// View that keeps score of what a drawing layer would have shown.
#[derive(Debug, Default)]
struct TerminalView {
    end_overlays: u32,
    win_overlays: u32,
    overlay_up: bool,
}

impl GameView for TerminalView {
    fn set_player(&mut self, _pos: Vec2, _radius: f32) {}
    fn set_vehicle(&mut self, _index: usize, _pos: Vec2) {}
    fn set_floater(&mut self, _index: usize, _pos: Vec2) {}
    fn set_turtle(&mut self, _index: usize, _pos: Vec2) {}
    fn set_turtle_visible(&mut self, _index: usize, _visible: bool) {}
    fn set_crocodile(&mut self, _pos: Vec2) {}
    fn set_home_marker_visible(&mut self, _slot: u8, _visible: bool) {}
    fn set_time_percent(&mut self, _fraction: f32) {}

    fn show_end_overlay(&mut self) {
        if !self.overlay_up {
            log::info!("run lost");
            self.end_overlays += 1;
            self.overlay_up = true;
        }
    }

    fn show_win_overlay(&mut self) {
        if !self.overlay_up {
            log::info!("run won");
            self.win_overlays += 1;
            self.overlay_up = true;
        }
    }

    fn clear_overlays(&mut self) {
        self.overlay_up = false;
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    log::info!("lilyhop session: {:?} for {} ticks", args.script, args.ticks);

    let mut engine = GameEngine::new(TerminalView::default());
    let mut scheduler = TickScheduler::new();
    let mut keyboard = Keyboard::new();
    let mut first_terminal: Option<(GamePhase, u64)> = None;

    for _ in 0..args.ticks {
        for event in scheduler.advance() {
            engine.submit(event);
        }
        let now = scheduler.elapsed_ms();

        if args.script == Script::Cross && now % 600 == 0 {
            // A tap is a press and an immediate release; no repeats queue up.
            if let Some(event) = keyboard.press(MoveKey::Up, now) {
                engine.submit(event);
            }
            keyboard.release(MoveKey::Up);
        }
        for event in keyboard.poll(now) {
            engine.submit(event);
        }

        let phase = engine.state().status.phase;
        if matches!(phase, GamePhase::End | GamePhase::Win) {
            if first_terminal.is_none() {
                first_terminal = Some((phase, now));
            }
            if args.auto_restart && phase == GamePhase::End {
                engine.submit(GameEvent::Status { phase: GamePhase::Restart });
            }
        }
    }

    let state = engine.state();
    println!("session over after {} ms of game time", scheduler.elapsed_ms());
    match first_terminal {
        Some((phase, at_ms)) => println!("first terminal phase: {phase:?} at {at_ms} ms"),
        None => println!("no terminal phase reached"),
    }
    println!(
        "slots filled: {}/{}  time left: {:.3}  overlays: {} end, {} win",
        state.finished_slots.len(),
        HOME_SLOT_COUNT,
        state.time_remaining.max(0.0),
        engine.view().end_overlays,
        engine.view().win_overlays,
    );

    if args.json {
        match serde_json::to_string_pretty(state) {
            Ok(dump) => println!("{dump}"),
            Err(err) => log::error!("state dump failed: {err}"),
        }
    }
}
