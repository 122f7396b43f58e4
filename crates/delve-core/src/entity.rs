//! Entity model: attributes, derived stats, attack/damage/death rules.
//!
//! Characters and enemies share one struct with a kind discriminator;
//! capability differences (ghost passage, spellcasting) are explicit flags
//! dispatched by the engine, not subclassing.

use crate::error::AttackError;
use crate::rng::Dice;
use crate::vector::Vec2;

/// Base armor class before the level bonus.
pub const AC_BASE: i32 = 10;
/// Sides of the hit-roll die (the "D20").
pub const HIT_ROLL_SIDES: u32 = 20;
/// Sides of the per-level damage die (the "D8").
pub const HIT_DIE_SIDES: u32 = 8;
/// Maximum Euclidean distance at which a melee attack can land.
pub const ATTACK_RANGE: f64 = 2.0;

/// Kind discriminator for entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Character,
    Enemy,
}

impl EntityKind {
    /// Glyph stamped on the rendered snapshot.
    pub const fn glyph(self) -> char {
        match self {
            EntityKind::Character => 'C',
            EntityKind::Enemy => 'E',
        }
    }
}

/// Result of a resolved attack attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackOutcome {
    /// Whether the hit roll met the target's armor class.
    pub hit: bool,
    /// The hit roll: one D20 draw plus the attacker's level.
    pub roll: i32,
    /// Total damage dealt; 0 on a miss.
    pub damage: i32,
}

/// A creature on the map.
///
/// Created once at load time from the level configuration; mutated by
/// movement and combat; never destroyed. A dead enemy is filtered out of
/// the living-enemy set, a dead character becomes a ghost.
#[derive(Debug, Clone)]
pub struct Entity {
    pub kind: EntityKind,
    pub name: String,
    pub level: u32,
    pub health: i32,
    pub position: Vec2,
    /// Flavor only, no mechanical effect.
    pub favorite_place: String,
    /// Reserved capability flag; spellcasting is an extension point.
    pub spellcaster: bool,
}

impl Entity {
    pub fn new(
        kind: EntityKind,
        name: impl Into<String>,
        level: u32,
        health: i32,
        position: Vec2,
        favorite_place: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            name: name.into(),
            level,
            health,
            position,
            favorite_place: favorite_place.into(),
            spellcaster: false,
        }
    }

    pub fn alive(&self) -> bool {
        self.health > 0
    }

    pub fn armor_class(&self) -> i32 {
        AC_BASE + self.level as i32
    }

    /// Shift the position by a movement vector.
    ///
    /// No collision or bounds checking — the engine enforces those before
    /// calling.
    pub fn move_by(&mut self, vector: Vec2) {
        self.position = self.position + vector;
    }

    /// Reduce health by `amount`. Health may go negative; no clamping.
    pub fn take_damage(&mut self, amount: i32) {
        self.health -= amount;
    }

    /// Attempt a melee attack against `target`.
    ///
    /// The hit roll is one D20 draw plus the attacker's level; the attack
    /// lands when the roll meets or exceeds the target's armor class. On a
    /// hit, damage is the sum of `level` independent D8 draws. On a miss
    /// the target is unaffected.
    pub fn attack(
        &self,
        target: &mut Entity,
        dice: &mut dyn Dice,
    ) -> Result<AttackOutcome, AttackError> {
        if !self.alive() {
            return Err(AttackError::DeadAttacker);
        }
        if self.position.distance_to(target.position) > ATTACK_RANGE {
            return Err(AttackError::OutOfRange);
        }

        let roll = dice.roll(HIT_ROLL_SIDES) as i32 + self.level as i32;
        if roll < target.armor_class() {
            return Ok(AttackOutcome {
                hit: false,
                roll,
                damage: 0,
            });
        }

        let damage: i32 = (0..self.level).map(|_| dice.roll(HIT_DIE_SIDES) as i32).sum();
        target.take_damage(damage);
        Ok(AttackOutcome {
            hit: true,
            roll,
            damage,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedDice;
    use proptest::prelude::*;

    fn attacker() -> Entity {
        Entity::new(
            EntityKind::Character,
            "Izaura",
            5,
            100,
            Vec2::new(1, 2),
            "in the kitchen",
        )
    }

    fn target() -> Entity {
        Entity::new(
            EntityKind::Enemy,
            "Leoncio",
            10,
            50,
            Vec2::new(2, 2),
            "in the bar",
        )
    }

    #[test]
    fn test_take_damage() {
        let mut entity = attacker();
        let before = entity.health;
        entity.take_damage(10);
        assert_eq!(entity.health, before - 10);
    }

    #[test]
    fn test_take_damage_past_zero() {
        let mut entity = attacker();
        entity.take_damage(200);
        assert_eq!(entity.health, -100);
        assert!(!entity.alive());
    }

    #[test]
    fn test_move() {
        let mut entity = attacker();
        entity.move_by(Vec2::new(3, 2));
        assert_eq!(entity.position, Vec2::new(4, 4));
    }

    #[test]
    fn test_move_zero_is_noop() {
        let mut entity = attacker();
        let before = entity.position;
        entity.move_by(Vec2::new(0, 0));
        assert_eq!(entity.position, before);
    }

    #[test]
    fn test_armor_class() {
        assert_eq!(attacker().armor_class(), 15);
        assert_eq!(target().armor_class(), 20);
    }

    #[test]
    fn test_attack_while_dead() {
        let mut entity = attacker();
        entity.health = 0;
        let mut victim = target();
        let before = victim.health;
        let mut dice = ScriptedDice::new([20]);
        assert_eq!(
            entity.attack(&mut victim, &mut dice),
            Err(AttackError::DeadAttacker)
        );
        assert_eq!(victim.health, before);
    }

    #[test]
    fn test_attack_out_of_range() {
        let entity = attacker();
        let mut victim = target();
        victim.position = Vec2::new(10, 10);
        let before = victim.health;
        let mut dice = ScriptedDice::new([20]);
        assert_eq!(
            entity.attack(&mut victim, &mut dice),
            Err(AttackError::OutOfRange)
        );
        assert_eq!(victim.health, before);
    }

    #[test]
    fn test_attack_forced_maximum_rolls() {
        // Level-5 attacker, forced D20 max then five forced D8 maxes.
        let entity = attacker();
        let mut victim = target();
        let mut dice = ScriptedDice::new([20, 8, 8, 8, 8, 8]);
        let outcome = entity.attack(&mut victim, &mut dice).unwrap();
        assert_eq!(
            outcome,
            AttackOutcome {
                hit: true,
                roll: 25,
                damage: 40
            }
        );
        assert_eq!(victim.health, 10);
    }

    #[test]
    fn test_attack_forced_minimum_roll_misses() {
        let entity = attacker();
        let mut victim = target();
        let before = victim.health;
        let mut dice = ScriptedDice::new([1]);
        let outcome = entity.attack(&mut victim, &mut dice).unwrap();
        assert_eq!(
            outcome,
            AttackOutcome {
                hit: false,
                roll: 6,
                damage: 0
            }
        );
        assert_eq!(victim.health, before);
    }

    #[test]
    fn test_worked_example() {
        // Character at (2,2), level 5, health 100; enemy at (2,3), level 1,
        // health 10; all dice forced to their maximum.
        let mut character = attacker();
        character.position = Vec2::new(2, 2);
        let mut enemy = Entity::new(
            EntityKind::Enemy,
            "Grukk",
            1,
            10,
            Vec2::new(2, 3),
            "under the bridge",
        );
        let mut dice = ScriptedDice::new([20, 8, 8, 8, 8, 8]);
        let outcome = character.attack(&mut enemy, &mut dice).unwrap();
        assert_eq!(
            outcome,
            AttackOutcome {
                hit: true,
                roll: 25,
                damage: 40
            }
        );
        assert_eq!(enemy.health, -30);
        assert!(!enemy.alive());
    }

    proptest! {
        #[test]
        fn take_damage_is_exact(start in -1000i32..1000, amount in -1000i32..1000) {
            let mut entity = attacker();
            entity.health = start;
            entity.take_damage(amount);
            prop_assert_eq!(entity.health, start - amount);
        }

        #[test]
        fn moves_compose(a in -100i32..100, b in -100i32..100,
                         c in -100i32..100, d in -100i32..100) {
            let mut one = attacker();
            one.move_by(Vec2::new(a, b));
            one.move_by(Vec2::new(c, d));

            let mut combined = attacker();
            combined.move_by(Vec2::new(a, b) + Vec2::new(c, d));

            prop_assert_eq!(one.position, combined.position);
        }
    }
}
