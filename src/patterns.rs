//! Named seed patterns that can be placed onto a grid with `Grid::place_pattern`.

/// A set of live cell offsets, as (x, y) pairs relative to the pattern's top left corner.
#[derive(Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(u32, u32)],
}

impl Pattern {
    /// The (width, height) of the bounding box of the pattern's cells.
    pub fn extent(&self) -> (u32, u32) {
        let width = self.cells.iter().map(|&(x, _)| x + 1).max().unwrap_or(0);
        let height = self.cells.iter().map(|&(_, y)| y + 1).max().unwrap_or(0);
        (width, height)
    }
}

pub const BLINKER: Pattern = Pattern {
    name: "blinker",
    cells: &[(0, 0), (1, 0), (2, 0)],
};

pub const TOAD: Pattern = Pattern {
    name: "toad",
    cells: &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
};

pub const BEACON: Pattern = Pattern {
    name: "beacon",
    cells: &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (3, 2), (2, 3), (3, 3)],
};

pub const GLIDER: Pattern = Pattern {
    name: "glider",
    cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
};

pub const R_PENTOMINO: Pattern = Pattern {
    name: "r-pentomino",
    cells: &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)],
};

pub const PATTERNS: &[Pattern] = &[BLINKER, TOAD, BEACON, GLIDER, R_PENTOMINO];

/// Look up a built in pattern by name, ignoring case.
pub fn find_pattern(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|pattern| pattern.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn lookup_ignores_case() {
        assert_eq!(find_pattern("Glider").map(|p| p.name), Some("glider"));
        assert_eq!(find_pattern("R-PENTOMINO").map(|p| p.name), Some("r-pentomino"));
        assert!(find_pattern("gosper").is_none());
    }

    #[test]
    fn extents() {
        assert_eq!(BLINKER.extent(), (3, 1));
        assert_eq!(TOAD.extent(), (4, 2));
        assert_eq!(BEACON.extent(), (4, 4));
        assert_eq!(GLIDER.extent(), (3, 3));
        assert_eq!(R_PENTOMINO.extent(), (3, 3));
    }

    #[test]
    fn no_duplicate_cells() {
        for pattern in PATTERNS {
            let mut cells = pattern.cells.to_vec();
            cells.sort();
            cells.dedup();
            assert_eq!(cells.len(), pattern.cells.len(), "{}", pattern.name);
        }
    }
}
