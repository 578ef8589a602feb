//! Fixed-step frame update
//!
//! Core game loop that advances the simulation by exactly one frame.

use rand::Rng;

use super::collision::{Contact, scan_contacts};
use super::command::Command;
use super::state::{Bullet, Direction, GamePhase, GameState, SoundEffect, Target};

/// Advance the game state by one frame.
///
/// Does nothing once the game is over. Otherwise, in order: apply commands,
/// move bullets, resolve collisions, drop removed entities, maybe spawn a
/// target, count the frame. The frame counter advances even on the frame that
/// ends the game.
pub fn tick(state: &mut GameState, commands: &[Command]) {
    if state.is_over() {
        return;
    }

    state.requested_sounds.clear();

    handle_commands(state, commands);

    let field = state.config.playfield;
    for bullet in &mut state.bullets {
        bullet.advance(&field);
    }

    resolve_contacts(state);

    state.bullets.retain(|b| !b.pending_removal);
    state.targets.retain(|t| !t.pending_removal);

    maybe_spawn_target(state);

    state.frame += 1;
}

fn handle_commands(state: &mut GameState, commands: &[Command]) {
    let field = state.config.playfield;
    for command in commands {
        match command {
            Command::Left => state.player.step_left(&field),
            Command::Right => state.player.step_right(&field),
            Command::Shoot => {
                let bullet = Bullet::new(state.player.muzzle(), Direction::Up);
                state.bullets.push(bullet);
            }
            // Handled by the frame driver before the update runs
            Command::Restart | Command::Quit => {}
        }
    }
}

fn resolve_contacts(state: &mut GameState) {
    let contacts = scan_contacts(&state.player, &state.bullets, &state.targets);
    let mut split = Vec::new();

    for contact in contacts {
        match contact {
            Contact::Player { .. } => {
                if !state.is_over() {
                    log::info!(
                        "Game over at frame {} (score {}, high score {})",
                        state.frame,
                        state.score,
                        state.high_score
                    );
                }
                state.phase = GamePhase::GameOver;
                state.request_sound(SoundEffect::Crash);
            }
            Contact::Target { bullet, target } => {
                state.add_point();
                state.bullets[bullet].pending_removal = true;
                state.targets[target].pending_removal = true;

                let cell = state.targets[target].cell();
                log::debug!("Target hit at ({}, {}), score {}", cell.x, cell.y, state.score);
                split.extend(Direction::ALL.map(|dir| Bullet::new(cell, dir)));
                state.request_sound(SoundEffect::Hit);
            }
        }
    }

    // Split bullets join after the scan and only start moving next frame
    state.bullets.extend(split);
}

fn maybe_spawn_target(state: &mut GameState) {
    let roll: f64 = state.rng.random();
    if roll >= state.config.spawn_chance {
        return;
    }

    let field = state.config.playfield;
    let columns = field.target_columns();
    let rows = field.target_rows();
    if columns.is_empty() || rows.is_empty() {
        return;
    }

    let x = state.rng.random_range(columns);
    let y = state.rng.random_range(rows);
    log::debug!("Target spawned at ({x}, {y}) on frame {}", state.frame);
    state.targets.push(Target::new(glam::IVec2::new(x, y)));
}
