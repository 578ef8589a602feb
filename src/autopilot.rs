//! Demo-mode command source
//!
//! Plays the game from the state alone so the headless binary has something to
//! drive. Priorities: restart when over, dodge a falling bullet, line the muzzle
//! up with the nearest target, shoot.

use crate::sim::{Command, Direction, GameState};

/// Rows above the player at which a falling bullet counts as a threat
const DANGER_ROWS: i32 = 6;

/// Commands for the next frame
pub fn plan(state: &GameState) -> Vec<Command> {
    if state.is_over() {
        return vec![Command::Restart];
    }

    let field = &state.config.playfield;
    let player = &state.player;

    // A falling bullet near the footprint: step away from it
    let threat = state
        .bullets
        .iter()
        .filter(|b| b.direction == Direction::Down)
        .filter(|b| b.y >= player.y - DANGER_ROWS)
        .find(|b| (player.x - 1..=player.x + 3).contains(&b.x));
    if let Some(bullet) = threat {
        let go_left = bullet.x >= player.x + 1 && player.x > field.min.x;
        let go_left = go_left || player.x >= field.player_x_max();
        return vec![if go_left { Command::Left } else { Command::Right }];
    }

    let muzzle = player.muzzle();
    let Some(target) = state
        .targets
        .iter()
        .min_by_key(|t| ((t.x - muzzle.x).abs(), -t.y))
    else {
        return Vec::new();
    };

    if target.x < muzzle.x {
        vec![Command::Left]
    } else if target.x > muzzle.x {
        vec![Command::Right]
    } else {
        let shot_in_flight = state
            .bullets
            .iter()
            .any(|b| b.direction == Direction::Up && b.x == muzzle.x);
        if shot_in_flight {
            Vec::new()
        } else {
            vec![Command::Shoot]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Bullet, GamePhase, SimConfig, Target};
    use glam::IVec2;

    fn state() -> GameState {
        GameState::new(
            3,
            SimConfig {
                spawn_chance: 0.0,
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_restarts_when_over() {
        let mut state = state();
        state.phase = GamePhase::GameOver;
        assert_eq!(plan(&state), vec![Command::Restart]);
    }

    #[test]
    fn test_idle_without_targets() {
        assert!(plan(&state()).is_empty());
    }

    #[test]
    fn test_moves_toward_nearest_target() {
        let mut state = state();
        state.targets.push(Target::new(IVec2::new(30, 5)));
        state.targets.push(Target::new(IVec2::new(15, 5)));
        assert_eq!(plan(&state), vec![Command::Left]);
    }

    #[test]
    fn test_shoots_once_aligned() {
        let mut state = state();
        state.targets.push(Target::new(IVec2::new(19, 5)));
        assert_eq!(plan(&state), vec![Command::Shoot]);

        state
            .bullets
            .push(Bullet::new(IVec2::new(19, 12), Direction::Up));
        assert!(plan(&state).is_empty());
    }

    #[test]
    fn test_dodges_falling_bullet() {
        let mut state = state();
        state.targets.push(Target::new(IVec2::new(19, 5)));
        state
            .bullets
            .push(Bullet::new(IVec2::new(20, 18), Direction::Down));
        assert_eq!(plan(&state), vec![Command::Left]);

        state.bullets[0].x = 17;
        assert_eq!(plan(&state), vec![Command::Right]);
    }

    #[test]
    fn test_demo_run_stays_consistent() {
        let mut state = GameState::new(77, SimConfig::default());
        for _ in 0..2_000 {
            let commands = plan(&state);
            if commands.first() == Some(&Command::Restart) {
                state = state.restart_with_seed(state.seed + 1);
                continue;
            }
            state.update(&commands);
            assert!(state.score <= state.high_score);
        }
    }
}
