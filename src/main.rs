//! Combo Brawl Simulation Runner
//!
//! Headless demo driver: builds a match from an optional JSON settings
//! file, runs it tick-by-tick with a scripted player 1 against the AI,
//! and logs the fight as it unfolds.

use std::collections::VecDeque;
use std::fs;

use anyhow::Context;
use tracing::{info, Level};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use combo_brawl::game::archetype::ArchetypeTable;
use combo_brawl::game::input::InputFrame;
use combo_brawl::game::state::{MatchSettings, MatchState};
use combo_brawl::game::tick::{tick, TickInputs};
use combo_brawl::{GameEvent, TICK_RATE, VERSION};

fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::default().add_directive(Level::INFO.into())),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    info!("Combo Brawl Simulation Core v{}", VERSION);
    info!("Tick Rate: {} Hz", TICK_RATE);

    // Optional settings file as the first argument
    let settings = match std::env::args().nth(1) {
        Some(path) => {
            let raw = fs::read_to_string(&path)
                .with_context(|| format!("failed to read settings file {path}"))?;
            serde_json::from_str::<MatchSettings>(&raw)
                .with_context(|| format!("invalid match settings in {path}"))?
        }
        None => MatchSettings::default(),
    };

    run_demo_match(&settings)
}

/// Run one match to completion and report the result.
fn run_demo_match(settings: &MatchSettings) -> anyhow::Result<()> {
    let table = ArchetypeTable::builtin();
    let mut state = MatchState::new(settings, &table).context("match setup failed")?;

    info!(
        match_id = %state.match_id,
        stage = %state.stage_name,
        p1 = %state.fighters[0].display_name,
        p2 = %state.fighters[1].display_name,
        difficulty = ?settings.difficulty,
        "=== Starting Match ==="
    );

    state.start();

    let dt = 1.0 / TICK_RATE as f32;
    let mut script = player_one_script();
    let mut total_events = 0usize;

    // Hard cap well past any realistic fight length
    for t in 0..(TICK_RATE * 600) {
        let inputs = TickInputs {
            player1: script.pop_front().unwrap_or_default(),
            player2: InputFrame::new(),
        };
        // Recycle the script so player 1 keeps fighting
        if script.is_empty() {
            script = player_one_script();
        }

        let result = tick(&mut state, &inputs, dt);
        total_events += result.events.len();

        for event in &result.events {
            match event {
                GameEvent::FighterHit {
                    attacker,
                    victim,
                    kind,
                    damage,
                    victim_health,
                } => {
                    info!(
                        attacker = ?attacker,
                        victim = ?victim,
                        kind = ?kind,
                        damage = *damage,
                        health = *victim_health,
                        "hit"
                    );
                }
                GameEvent::EmoteShown { slot, icon } => {
                    info!(?slot, icon = %icon, "emote");
                }
                GameEvent::MatchEnded { .. } => {}
            }
        }

        if result.match_ended {
            info!("Match ended at tick {} ({:.1}s)", t, state.elapsed);
            break;
        }
    }

    info!("=== Match Results ===");
    let outcome = state
        .outcome
        .clone()
        .context("match hit the tick cap without producing a result")?;
    info!("Winner: {} ({:?})", outcome.winner_label(), outcome.reason);
    for fighter in &state.fighters {
        info!(
            "{}: {:.1} health, {:.1}% damage taken",
            fighter.display_name,
            fighter.health(),
            fighter.damage_taken
        );
    }
    info!("Total events: {}", total_events);

    println!("{}", serde_json::to_string_pretty(&outcome)?);
    Ok(())
}

/// A looping input script for player 1: close in, swing, mix in jumps
/// and the occasional special.
fn player_one_script() -> VecDeque<InputFrame> {
    let mut frames = VecDeque::new();

    // Advance on the opponent for a second
    for _ in 0..60 {
        frames.push_back(InputFrame::with_movement(1));
    }

    // Jump-approach
    let mut jump = InputFrame::with_movement(1);
    jump.set_flag(InputFrame::FLAG_JUMP);
    frames.push_back(jump);
    for _ in 0..30 {
        frames.push_back(InputFrame::with_movement(1));
    }

    // Swing, wait out the cooldown, swing again
    for _ in 0..4 {
        let mut attack = InputFrame::new();
        attack.set_flag(InputFrame::FLAG_ATTACK);
        frames.push_back(attack);
        for _ in 0..20 {
            frames.push_back(InputFrame::new());
        }
    }

    // One special attempt per cycle
    let mut special = InputFrame::new();
    special.set_flag(InputFrame::FLAG_SPECIAL);
    frames.push_back(special);
    for _ in 0..45 {
        frames.push_back(InputFrame::new());
    }

    frames
}
