//! Turn engine.
//!
//! Consumes one command per turn, dispatches to the movement, attack, and
//! spellcasting handlers, then recomputes the rendered snapshot. Expected
//! failures (collisions, out-of-range, dead attacker) are converted to
//! buffered messages here; nothing propagates past a turn boundary.

use strum::{Display, EnumIter};

use crate::entity::{AttackOutcome, Entity};
use crate::error::AttackError;
use crate::map::GameMap;
use crate::rng::Dice;
use crate::vector::Vec2;

pub const WALL_COLLISION_MESSAGE: &str =
    "Oh no, you can't move through walls, unless you're a ghost.";
pub const ENEMY_COLLISION_MESSAGE: &str = "Something hostile blocks your way.";
pub const NO_TARGET_MESSAGE: &str = "There is no one left to attack.";
pub const OUT_OF_RANGE_MESSAGE: &str = "There is nothing within reach.";
pub const DEAD_ATTACKER_MESSAGE: &str = "The dead cannot fight.";
pub const NOTHING_HAPPENS_MESSAGE: &str = "You wave your hands. Nothing happens.";
pub const FIZZLE_MESSAGE: &str = "You trace the sigils, but the magic fizzles.";
pub const DEATH_MESSAGE: &str = "You crumple to the ground, slain.";
pub const GHOST_MESSAGE: &str = "You feel strangely weightless. Walls no longer concern you.";
pub const FAREWELL_MESSAGE: &str = "Farewell, adventurer.";

/// Movement directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    North,
    South,
    West,
    East,
}

impl Direction {
    /// The (row, col) delta for a single step.
    pub const fn delta(self) -> Vec2 {
        match self {
            Direction::North => Vec2::new(-1, 0),
            Direction::South => Vec2::new(1, 0),
            Direction::West => Vec2::new(0, -1),
            Direction::East => Vec2::new(0, 1),
        }
    }
}

/// Player command types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Attack,
    CastSpell,
    Quit,
}

impl Command {
    /// Map one input symbol to a command.
    ///
    /// Unrecognized symbols map to `None` and are tolerated as no-ops by
    /// the caller; they must never crash the turn loop.
    pub fn from_symbol(symbol: char) -> Option<Command> {
        match symbol {
            'w' => Some(Command::Move(Direction::North)),
            's' => Some(Command::Move(Direction::South)),
            'a' => Some(Command::Move(Direction::West)),
            'd' => Some(Command::Move(Direction::East)),
            'x' => Some(Command::Attack),
            'c' => Some(Command::CastSpell),
            'q' => Some(Command::Quit),
            _ => None,
        }
    }
}

/// Result of one engine step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnResult {
    /// Continue playing.
    Continue,
    /// Player quit; the control loop should terminate.
    Quit,
}

/// Engine lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineStatus {
    Running,
    Exited,
}

/// Outcome of a movement attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved,
    WallBlocked,
    EnemyBlocked,
}

/// Configurable game rules.
#[derive(Debug, Clone, Copy)]
pub struct Rules {
    /// When set, a dead character bypasses collision checks entirely.
    pub ghost_passage: bool,
}

impl Default for Rules {
    fn default() -> Self {
        Self { ghost_passage: true }
    }
}

/// Turn controller: one command in, one resolved and rendered turn out.
pub struct Engine {
    pub map: GameMap,
    dice: Box<dyn Dice>,
    rules: Rules,
    status: EngineStatus,
    messages: Vec<String>,
    turns: u64,
}

impl Engine {
    pub fn new(map: GameMap, dice: Box<dyn Dice>, rules: Rules) -> Self {
        Self {
            map,
            dice,
            rules,
            status: EngineStatus::Running,
            messages: Vec::new(),
            turns: 0,
        }
    }

    pub fn status(&self) -> EngineStatus {
        self.status
    }

    pub fn turns(&self) -> u64 {
        self.turns
    }

    pub fn rules(&self) -> Rules {
        self.rules
    }

    /// The rendered snapshot as printable lines.
    pub fn frame(&self) -> Vec<String> {
        self.map.rows()
    }

    /// Drain the per-turn message buffer.
    pub fn take_messages(&mut self) -> Vec<String> {
        core::mem::take(&mut self.messages)
    }

    /// Resolve one command.
    ///
    /// Every transition except the quit one ends with a map refresh so the
    /// caller can hand the rendered snapshot plus the buffered messages to
    /// the presentation layer.
    pub fn step(&mut self, command: Command) -> TurnResult {
        match command {
            Command::Move(direction) => {
                self.handle_move(direction);
            }
            Command::Attack => self.handle_attack(),
            Command::CastSpell => self.handle_cast(),
            Command::Quit => {
                self.status = EngineStatus::Exited;
                self.messages.push(FAREWELL_MESSAGE.to_string());
                return TurnResult::Quit;
            }
        }
        self.turns += 1;
        self.map.refresh();
        TurnResult::Continue
    }

    /// Move the character one step, rejecting walls and occupied cells.
    ///
    /// When the character is dead and ghost passage is enabled, collision
    /// checks are skipped entirely and movement is unconditional. Private:
    /// only `step` may mutate, so the per-turn refresh always follows.
    fn handle_move(&mut self, direction: Direction) -> MoveOutcome {
        let target = self.map.character.position + direction.delta();
        let ghost = self.rules.ghost_passage && !self.map.character.alive();
        if !ghost {
            if self.map.is_wall(self.map.cell_at(target)) {
                self.messages.push(WALL_COLLISION_MESSAGE.to_string());
                return MoveOutcome::WallBlocked;
            }
            if self.map.living_enemies().any(|enemy| enemy.position == target) {
                self.messages.push(ENEMY_COLLISION_MESSAGE.to_string());
                return MoveOutcome::EnemyBlocked;
            }
        }
        self.map.character.move_by(direction.delta());
        MoveOutcome::Moved
    }

    /// Attack the nearest living enemy; on a hit that leaves the target
    /// alive, the target retaliates once.
    fn handle_attack(&mut self) {
        let Some(index) = self.nearest_living_enemy() else {
            self.messages.push(NO_TARGET_MESSAGE.to_string());
            return;
        };

        let outcome = self
            .map
            .character
            .attack(&mut self.map.enemies[index], self.dice.as_mut());
        match outcome {
            Err(error) => self.push_attack_error(error),
            Ok(outcome) => {
                let summary =
                    attack_summary(&outcome, &self.map.character, &self.map.enemies[index]);
                self.messages.push(summary);
                if !self.map.enemies[index].alive() {
                    self.messages
                        .push(format!("{} is slain!", self.map.enemies[index].name));
                    return;
                }
                if outcome.hit {
                    self.retaliate(index);
                }
            }
        }
    }

    /// Single automatic counter-attack, not chained further.
    fn retaliate(&mut self, index: usize) {
        let outcome = self.map.enemies[index]
            .attack(&mut self.map.character, self.dice.as_mut());
        match outcome {
            Err(error) => self.push_attack_error(error),
            Ok(outcome) => {
                let summary =
                    attack_summary(&outcome, &self.map.enemies[index], &self.map.character);
                self.messages.push(summary);
                if !self.map.character.alive() {
                    self.messages.push(DEATH_MESSAGE.to_string());
                    if self.rules.ghost_passage {
                        self.messages.push(GHOST_MESSAGE.to_string());
                    }
                }
            }
        }
    }

    /// Spellcasting is a reserved capability: a flavor message, not an
    /// error surfaced as a failure.
    fn handle_cast(&mut self) {
        let message = if self.map.character.spellcaster {
            FIZZLE_MESSAGE
        } else {
            NOTHING_HAPPENS_MESSAGE
        };
        self.messages.push(message.to_string());
    }

    /// Index of the nearest living enemy by Euclidean distance.
    ///
    /// Ties break to the first enemy in list order, so the scan keeps a
    /// candidate only on a strictly smaller distance.
    fn nearest_living_enemy(&self) -> Option<usize> {
        let from = self.map.character.position;
        let mut best: Option<(usize, f64)> = None;
        for (index, enemy) in self.map.enemies.iter().enumerate() {
            if !enemy.alive() {
                continue;
            }
            let distance = from.distance_to(enemy.position);
            match best {
                Some((_, nearest)) if distance >= nearest => {}
                _ => best = Some((index, distance)),
            }
        }
        best.map(|(index, _)| index)
    }

    fn push_attack_error(&mut self, error: AttackError) {
        let message = match error {
            AttackError::DeadAttacker => DEAD_ATTACKER_MESSAGE,
            AttackError::OutOfRange => OUT_OF_RANGE_MESSAGE,
        };
        self.messages.push(message.to_string());
    }
}

/// Format one attack attempt for the message buffer.
fn attack_summary(outcome: &AttackOutcome, attacker: &Entity, target: &Entity) -> String {
    if outcome.hit {
        format!(
            "{} hits {} for {} damage! (rolled {} vs AC {}, {} HP left)",
            attacker.name,
            target.name,
            outcome.damage,
            outcome.roll,
            target.armor_class(),
            target.health,
        )
    } else {
        format!(
            "{} misses {}. (rolled {} vs AC {})",
            attacker.name,
            target.name,
            outcome.roll,
            target.armor_class(),
        )
    }
}
