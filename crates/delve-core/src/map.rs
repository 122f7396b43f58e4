//! The map / field of the game.
//!
//! A blank terrain snapshot is parsed once from a plain-text grid and never
//! mutated afterwards; a rendered snapshot is recomputed every turn by
//! copying the blank terrain and stamping the character plus every living
//! enemy. Full copy-and-stamp is cheap at this scale.

use crate::entity::{Entity, EntityKind};
use crate::error::LoadError;
use crate::level::LevelConfig;
use crate::vector::Vec2;

/// Glyphs that block movement.
pub const WALL_GLYPHS: [char; 3] = ['=', '|', '#'];
/// Passable empty terrain.
pub const EMPTY_GLYPH: char = ' ';

type Grid = Vec<Vec<char>>;

/// Static terrain plus the dynamic overlay of live entities.
#[derive(Debug, Clone)]
pub struct GameMap {
    blank: Grid,
    rendered: Grid,
    pub character: Entity,
    pub enemies: Vec<Entity>,
}

impl GameMap {
    /// Parse the terrain grid and level configuration into a playable map.
    ///
    /// Fails with [`LoadError::NoPlayableCharacter`] when the character
    /// record is unusable, with [`LoadError::InvalidEnemy`] for a bad enemy
    /// record, and with [`LoadError::EmptyTerrain`] when the terrain has no
    /// cells.
    pub fn load(terrain: &str, config: LevelConfig) -> Result<Self, LoadError> {
        let blank = parse_terrain(terrain)?;

        if !config.character.is_valid() {
            return Err(LoadError::NoPlayableCharacter);
        }
        for enemy in &config.enemies {
            if !enemy.is_valid() {
                return Err(LoadError::InvalidEnemy {
                    name: enemy.name.clone(),
                });
            }
        }

        let character = config.character.into_entity(EntityKind::Character);
        let enemies = config
            .enemies
            .into_iter()
            .map(|record| record.into_entity(EntityKind::Enemy))
            .collect();

        let mut map = Self {
            rendered: blank.clone(),
            blank,
            character,
            enemies,
        };
        map.refresh();
        Ok(map)
    }

    pub fn height(&self) -> usize {
        self.blank.len()
    }

    pub fn width(&self) -> usize {
        self.blank.first().map_or(0, Vec::len)
    }

    /// Terrain glyph at `pos` on the rendered snapshot.
    ///
    /// Cells outside the grid read as empty; the playable area is expected
    /// to be enclosed by wall glyphs.
    pub fn cell_at(&self, pos: Vec2) -> char {
        let (Ok(row), Ok(col)) = (usize::try_from(pos.row), usize::try_from(pos.col)) else {
            return EMPTY_GLYPH;
        };
        self.rendered
            .get(row)
            .and_then(|cells| cells.get(col))
            .copied()
            .unwrap_or(EMPTY_GLYPH)
    }

    fn set_cell_at(&mut self, pos: Vec2, glyph: char) {
        let (Ok(row), Ok(col)) = (usize::try_from(pos.row), usize::try_from(pos.col)) else {
            return;
        };
        if let Some(cell) = self.rendered.get_mut(row).and_then(|cells| cells.get_mut(col)) {
            *cell = glyph;
        }
    }

    /// Membership test against the fixed wall-glyph set.
    pub fn is_wall(&self, glyph: char) -> bool {
        WALL_GLYPHS.contains(&glyph)
    }

    /// Recompute the rendered snapshot from the blank terrain plus the
    /// character and every living enemy.
    ///
    /// Must be called once per turn, after all mutations for that turn.
    pub fn refresh(&mut self) {
        self.rendered = self.blank.clone();
        let enemy_stamps: Vec<(Vec2, char)> = self
            .living_enemies()
            .map(|enemy| (enemy.position, enemy.kind.glyph()))
            .collect();
        for (pos, glyph) in enemy_stamps {
            self.set_cell_at(pos, glyph);
        }
        let (pos, glyph) = (self.character.position, self.character.kind.glyph());
        self.set_cell_at(pos, glyph);
    }

    /// Currently-alive enemies, in list order.
    pub fn living_enemies(&self) -> impl Iterator<Item = &Entity> {
        self.enemies.iter().filter(|enemy| enemy.alive())
    }

    /// The rendered snapshot as printable lines.
    pub fn rows(&self) -> Vec<String> {
        self.rendered.iter().map(|row| row.iter().collect()).collect()
    }
}

/// Parse a plain-text grid into a rectangular character matrix.
///
/// Rows are lines, columns are characters; ragged rows are right-padded
/// with spaces to the widest row.
fn parse_terrain(terrain: &str) -> Result<Grid, LoadError> {
    let mut grid: Grid = terrain.lines().map(|line| line.chars().collect()).collect();
    let width = grid.iter().map(Vec::len).max().unwrap_or(0);
    if grid.is_empty() || width == 0 {
        return Err(LoadError::EmptyTerrain);
    }
    for row in &mut grid {
        row.resize(width, EMPTY_GLYPH);
    }
    Ok(grid)
}
