//! Tile grid the player slides around on.
//!
//! Levels are plain text, one character per tile:
//!
//! | Char | Tile |
//! |------|------|
//! | `#` | wall, stops a slide |
//! | `.` | path |
//! | `*` | path with a star |
//! | `P` | path, player start |
//! | space, `~` | void, the player falls off |
//!
//! Rows may be ragged; missing tiles are void. Leading and trailing blank
//! lines are ignored.

use std::fmt;

pub type GridPos = (i32, i32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    Void,
    Wall,
    Path,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LevelError {
    Empty,
    NoPlayer,
    MultiplePlayers { first: GridPos, second: GridPos },
    NoStars,
    UnknownTile { ch: char, pos: GridPos },
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelError::Empty => write!(f, "level has no rows"),
            LevelError::NoPlayer => write!(f, "level has no player start"),
            LevelError::MultiplePlayers { first, second } => {
                write!(f, "level has two player starts at {:?} and {:?}", first, second)
            }
            LevelError::NoStars => write!(f, "level has no stars"),
            LevelError::UnknownTile { ch, pos } => write!(f, "unknown tile {:?} at {:?}", ch, pos),
        }
    }
}

impl std::error::Error for LevelError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    width: i32,
    height: i32,
    tiles: Vec<Tile>,
    stars: Vec<bool>,
    start: GridPos,
}

impl Level {
    pub fn parse(text: &str) -> Result<Self, LevelError> {
        let mut rows: Vec<&str> = text.lines().collect();
        while rows.first().is_some_and(|r| r.trim().is_empty()) {
            rows.remove(0);
        }
        while rows.last().is_some_and(|r| r.trim().is_empty()) {
            rows.pop();
        }
        if rows.is_empty() {
            return Err(LevelError::Empty);
        }

        let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0) as i32;
        let height = rows.len() as i32;
        let mut tiles = vec![Tile::Void; (width * height) as usize];
        let mut stars = vec![false; tiles.len()];
        let mut start: Option<GridPos> = None;

        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                let pos = (x as i32, y as i32);
                let i = y * width as usize + x;
                tiles[i] = match ch {
                    '#' => Tile::Wall,
                    '.' => Tile::Path,
                    '*' => {
                        stars[i] = true;
                        Tile::Path
                    }
                    'P' => {
                        if let Some(first) = start {
                            return Err(LevelError::MultiplePlayers { first, second: pos });
                        }
                        start = Some(pos);
                        Tile::Path
                    }
                    ' ' | '~' => Tile::Void,
                    _ => return Err(LevelError::UnknownTile { ch, pos }),
                };
            }
        }

        let start = start.ok_or(LevelError::NoPlayer)?;
        if !stars.iter().any(|s| *s) {
            return Err(LevelError::NoStars);
        }

        Ok(Self {
            width,
            height,
            tiles,
            stars,
            start,
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn start(&self) -> GridPos {
        self.start
    }

    fn index(&self, (x, y): GridPos) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            None
        } else {
            Some((y * self.width + x) as usize)
        }
    }

    /// Tile at `pos`; everything outside the grid is void.
    pub fn tile(&self, pos: GridPos) -> Tile {
        self.index(pos).map(|i| self.tiles[i]).unwrap_or(Tile::Void)
    }

    pub fn has_star(&self, pos: GridPos) -> bool {
        self.index(pos).map(|i| self.stars[i]).unwrap_or(false)
    }

    /// Remove the star at `pos`, returning whether there was one.
    pub fn take_star(&mut self, pos: GridPos) -> bool {
        match self.index(pos) {
            Some(i) if self.stars[i] => {
                self.stars[i] = false;
                true
            }
            _ => false,
        }
    }

    pub fn stars_left(&self) -> usize {
        self.stars.iter().filter(|s| **s).count()
    }

    pub fn star_positions(&self) -> impl Iterator<Item = GridPos> + '_ {
        self.positions().filter(|p| self.has_star(*p))
    }

    pub fn positions(&self) -> impl Iterator<Item = GridPos> {
        let (w, h) = (self.width, self.height);
        (0..h).flat_map(move |y| (0..w).map(move |x| (x, y)))
    }
}
