//! Battle resolution.
//!
//! Pure functions comparing two entities attribute by attribute. All logic
//! here is deterministic and side-effect free; the runtime calls
//! [`resolve`] exactly once per contest, at the moment the battle
//! completes, and the presentation layer only reads the stored result.

use strum::IntoEnumIterator;

use crate::entity::{AttributeKind, Entity};

/// Which side an individual attribute comparison favors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Advantage {
    Player,
    Cpu,
    /// Equal values award neither side.
    Even,
}

/// Overall winner of a contest.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Winner {
    Player,
    Cpu,
    Tie,
}

/// Per-attribute comparison results.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttributeResults {
    pub attack: Advantage,
    pub defense: Advantage,
    pub speed: Advantage,
}

impl AttributeResults {
    /// Result of a single attribute comparison.
    pub fn get(&self, kind: AttributeKind) -> Advantage {
        match kind {
            AttributeKind::Attack => self.attack,
            AttributeKind::Defense => self.defense,
            AttributeKind::Speed => self.speed,
        }
    }
}

/// Complete outcome of a contest.
///
/// Derived once by [`resolve`] and never mutated afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Outcome {
    pub attributes: AttributeResults,
    pub winner: Winner,
}

/// Resolves a contest between the player's pick and the CPU's fighter.
///
/// Each attribute goes to the side with the strictly greater value; equal
/// values are even. The winner is the side that took strictly more
/// attributes, otherwise the contest is a tie (including the all-even
/// case).
pub fn resolve(player: &Entity, cpu: &Entity) -> Outcome {
    let attributes = AttributeResults {
        attack: compare(player, cpu, AttributeKind::Attack),
        defense: compare(player, cpu, AttributeKind::Defense),
        speed: compare(player, cpu, AttributeKind::Speed),
    };

    let mut player_wins = 0u32;
    let mut cpu_wins = 0u32;
    for kind in AttributeKind::iter() {
        match attributes.get(kind) {
            Advantage::Player => player_wins += 1,
            Advantage::Cpu => cpu_wins += 1,
            Advantage::Even => {}
        }
    }

    let winner = if player_wins > cpu_wins {
        Winner::Player
    } else if cpu_wins > player_wins {
        Winner::Cpu
    } else {
        Winner::Tie
    };

    Outcome { attributes, winner }
}

fn compare(player: &Entity, cpu: &Entity, kind: AttributeKind) -> Advantage {
    let ours = player.attributes.get(kind);
    let theirs = cpu.attributes.get(kind);
    if ours > theirs {
        Advantage::Player
    } else if theirs > ours {
        Advantage::Cpu
    } else {
        Advantage::Even
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{AttributeSet, EntityId};

    fn entity(id: u32, attack: u32, defense: u32, speed: u32) -> Entity {
        Entity::new(
            EntityId(id),
            format!("entity-{id}"),
            "http://example.test/sprite.png",
            AttributeSet::new(attack, defense, speed),
        )
    }

    #[test]
    fn sweep_wins_all_three_attributes() {
        let player = entity(1, 120, 80, 90);
        let cpu = entity(2, 90, 70, 60);

        let outcome = resolve(&player, &cpu);

        assert_eq!(outcome.winner, Winner::Player);
        assert_eq!(outcome.attributes.attack, Advantage::Player);
        assert_eq!(outcome.attributes.defense, Advantage::Player);
        assert_eq!(outcome.attributes.speed, Advantage::Player);
    }

    #[test]
    fn split_with_drawn_speed_is_tie() {
        // attack to player, defense to cpu, speed even: 1-1 overall.
        let player = entity(1, 100, 50, 70);
        let cpu = entity(2, 80, 60, 70);

        let outcome = resolve(&player, &cpu);

        assert_eq!(outcome.attributes.attack, Advantage::Player);
        assert_eq!(outcome.attributes.defense, Advantage::Cpu);
        assert_eq!(outcome.attributes.speed, Advantage::Even);
        assert_eq!(outcome.winner, Winner::Tie);
    }

    #[test]
    fn identical_attributes_resolve_to_tie() {
        let player = entity(1, 55, 55, 55);
        let cpu = entity(2, 55, 55, 55);

        let outcome = resolve(&player, &cpu);

        assert_eq!(outcome.winner, Winner::Tie);
        for kind in AttributeKind::iter() {
            assert_eq!(outcome.attributes.get(kind), Advantage::Even);
        }
    }

    #[test]
    fn resolve_is_antisymmetric_under_role_swap() {
        let cases = [
            (entity(1, 120, 80, 90), entity(2, 90, 70, 60)),
            (entity(3, 10, 200, 30), entity(4, 40, 10, 30)),
            (entity(5, 1, 2, 3), entity(6, 1, 2, 3)),
            (entity(7, 0, 0, 100), entity(8, 100, 0, 0)),
        ];

        for (a, b) in cases {
            let forward = resolve(&a, &b).winner;
            let swapped = resolve(&b, &a).winner;
            let expected = match forward {
                Winner::Player => Winner::Cpu,
                Winner::Cpu => Winner::Player,
                Winner::Tie => Winner::Tie,
            };
            assert_eq!(swapped, expected, "swap disagreed for {:?} vs {:?}", a, b);
        }
    }
}
