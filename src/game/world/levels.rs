//! Built-in levels, played in order and then from the start again.

use super::level::{Level, LevelError};

const LEVELS: &[&str] = &[
    "
#########
#P..*..*#
#.#####.#
#*.....*#
#########
",
    "
#######
#P..*.#
#.#.#.#
#*  ..#
#######
",
    "
###########
#*.......P#
#.####.##.#
#.#*...*#.#
#.#.###.#.#
#...#*....#
###.#######
  #*#
  ###
",
    "
 ##########
 #P.  ...*#
 #.#.#.##.#
 #...*.#..#
 ##.##...*#
 #*.......#
 ##########
",
    "
#############
#*....#....*#
#.###.P.###.#
#.#*.....*#.#
#.#.##..#.#.#
#...#*.*#...#
#####...#####
    #.*.#
    #####
",
];

pub fn count() -> usize {
    LEVELS.len()
}

/// Level `index`, wrapping around past the last one.
pub fn load(index: usize) -> Result<Level, LevelError> {
    Level::parse(LEVELS[index % LEVELS.len()])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_level_parses() {
        for i in 0..count() {
            assert!(load(i).is_ok(), "level {} failed: {:?}", i, load(i).err());
        }
    }

    #[test]
    fn index_wraps() {
        assert_eq!(load(count()).unwrap(), load(0).unwrap());
    }
}
