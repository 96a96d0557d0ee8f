use super::SeedError;

/// A named arrangement of live cells that can be seeded onto the grid.
/// Offsets are `(dx, dy)` from the anchor, which is the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub cells: &'static [(usize, usize)],
}

impl Pattern {
    /// Bounding box width, measured from the anchor
    pub fn width(&self) -> usize {
        self.cells.iter().map(|(x, _)| *x + 1).max().unwrap_or(0)
    }

    /// Bounding box height, measured from the anchor
    pub fn height(&self) -> usize {
        self.cells.iter().map(|(_, y)| *y + 1).max().unwrap_or(0)
    }
}

const SPECIES: &[Pattern] = &[
    // Still lifes
    Pattern {
        name: "block",
        description: "Still life",
        cells: &[
            (0, 0), (1, 0),
            (0, 1), (1, 1),
        ],
    },
    Pattern {
        name: "beehive",
        description: "Still life",
        cells: &[
            (1, 0), (2, 0),
            (0, 1), (3, 1),
            (1, 2), (2, 2),
        ],
    },
    Pattern {
        name: "loaf",
        description: "Still life",
        cells: &[
            (1, 0), (2, 0),
            (0, 1), (3, 1),
            (1, 2), (3, 2),
            (2, 3),
        ],
    },
    // Oscillators
    Pattern {
        name: "blinker",
        description: "Oscillator (period 2)",
        cells: &[(1, 0), (1, 1), (1, 2)],
    },
    Pattern {
        name: "toad",
        description: "Oscillator (period 2)",
        cells: &[
            (1, 0), (2, 0), (3, 0),
            (0, 1), (1, 1), (2, 1),
        ],
    },
    Pattern {
        name: "beacon",
        description: "Oscillator (period 2)",
        cells: &[
            (0, 0), (1, 0),
            (0, 1),
            (3, 2),
            (2, 3), (3, 3),
        ],
    },
    // Spaceships
    Pattern {
        name: "glider",
        description: "Moves diagonally (period 4)",
        cells: &[
            (1, 0),
            (2, 1),
            (0, 2), (1, 2), (2, 2),
        ],
    },
    // Filled 3x3, inset one cell from the anchor
    Pattern {
        name: "square",
        description: "Filled 3x3 block",
        cells: &[
            (1, 1), (1, 2), (1, 3),
            (2, 1), (2, 2), (2, 3),
            (3, 1), (3, 2), (3, 3),
        ],
    },
];

/// Fixed, read-only mapping from species name to its offsets.
pub struct PatternCatalog;

impl PatternCatalog {
    /// Exact-match lookup by name
    pub fn lookup(name: &str) -> Result<&'static Pattern, SeedError> {
        SPECIES
            .iter()
            .find(|pattern| pattern.name == name)
            .ok_or_else(|| SeedError::UnknownPattern(name.to_owned()))
    }

    /// Every pattern in catalog order
    pub fn all() -> &'static [Pattern] {
        SPECIES
    }

    pub fn names() -> impl Iterator<Item = &'static str> {
        SPECIES.iter().map(|pattern| pattern.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_species() {
        for name in ["block", "beehive", "loaf", "blinker", "toad", "beacon", "glider", "square"] {
            let pattern = PatternCatalog::lookup(name).unwrap();
            assert_eq!(pattern.name, name);
            assert!(!pattern.cells.is_empty());
        }
    }

    #[test]
    fn test_lookup_unknown() {
        assert_eq!(
            PatternCatalog::lookup("pulsar"),
            Err(SeedError::UnknownPattern("pulsar".to_owned()))
        );
        // Names are case sensitive
        assert!(PatternCatalog::lookup("Glider").is_err());
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<_> = PatternCatalog::names().collect();
        let total = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), total);
    }

    #[test]
    fn test_offsets_are_distinct() {
        for pattern in PatternCatalog::all() {
            let mut cells = pattern.cells.to_vec();
            cells.sort();
            cells.dedup();
            assert_eq!(cells.len(), pattern.cells.len(), "{}", pattern.name);
        }
    }

    #[test]
    fn test_bounding_boxes() {
        let square = PatternCatalog::lookup("square").unwrap();
        assert_eq!((square.width(), square.height()), (4, 4));
        assert_eq!(square.cells.len(), 9);

        let blinker = PatternCatalog::lookup("blinker").unwrap();
        assert_eq!((blinker.width(), blinker.height()), (2, 3));
    }
}
