//! Collision detection on the cell grid
//!
//! Detection is pure: it reports contacts in scan order and leaves the
//! response (scoring, removal, splitting) to the frame update. Positions are
//! all that matter here, so bullets already marked for removal still collide.

use super::state::{Bullet, Player, Target};

/// A contact found during one scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    /// Bullet at `bullet` landed on the player's footprint
    Player { bullet: usize },
    /// Bullet at `bullet` shares a cell with target at `target`
    Target { bullet: usize, target: usize },
}

/// Check whether a bullet sits on the player's footprint
#[inline]
pub fn bullet_hits_player(player: &Player, bullet: &Bullet) -> bool {
    player.covers(bullet.cell())
}

/// Scan every bullet against the player and every target.
///
/// Bullet-major, target-minor. Each bullet/target pair on the same cell is its
/// own contact, so one bullet can hit several stacked targets in one scan.
pub fn scan_contacts(player: &Player, bullets: &[Bullet], targets: &[Target]) -> Vec<Contact> {
    let mut contacts = Vec::new();
    for (bi, bullet) in bullets.iter().enumerate() {
        if bullet_hits_player(player, bullet) {
            contacts.push(Contact::Player { bullet: bi });
        }
        for (ti, target) in targets.iter().enumerate() {
            if bullet.cell() == target.cell() {
                contacts.push(Contact::Target {
                    bullet: bi,
                    target: ti,
                });
            }
        }
    }
    contacts
}
