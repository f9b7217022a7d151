use crate::error::GridError;
use crate::grid::Grid;

/// Predefined patterns for seeding the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// A small stationary pattern
    Block,
    /// A period-2 oscillator
    Blinker,
    /// A period-2 oscillator
    Toad,
    /// A period-2 oscillator made of two blocks
    Beacon,
    /// A diagonal spaceship
    Glider,
    /// A horizontal spaceship
    LightweightSpaceship,
    /// A methuselah that settles after 1103 generations on an unbounded plane
    RPentomino,
    /// A pattern that grows indefinitely
    GosperGliderGun,
}

impl Pattern {
    pub const ALL: [Pattern; 8] = [
        Pattern::Block,
        Pattern::Blinker,
        Pattern::Toad,
        Pattern::Beacon,
        Pattern::Glider,
        Pattern::LightweightSpaceship,
        Pattern::RPentomino,
        Pattern::GosperGliderGun,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Pattern::Block => "Block",
            Pattern::Blinker => "Blinker",
            Pattern::Toad => "Toad",
            Pattern::Beacon => "Beacon",
            Pattern::Glider => "Glider",
            Pattern::LightweightSpaceship => "Lightweight spaceship",
            Pattern::RPentomino => "R-pentomino",
            Pattern::GosperGliderGun => "Gosper glider gun",
        }
    }

    /// Live cells as `(x, y)` offsets from the pattern's top-left corner
    #[rustfmt::skip]
    pub fn cells(&self) -> &'static [(usize, usize)] {
        match self {
            Pattern::Block => &[(0, 0), (1, 0), (0, 1), (1, 1)],
            Pattern::Blinker => &[(0, 0), (1, 0), (2, 0)],
            Pattern::Toad => &[
                (1, 0), (2, 0), (3, 0),
                (0, 1), (1, 1), (2, 1),
            ],
            Pattern::Beacon => &[
                (0, 0), (1, 0), (0, 1),
                (3, 2), (2, 3), (3, 3),
            ],
            Pattern::Glider => &[
                (1, 0),
                (2, 1),
                (0, 2), (1, 2), (2, 2),
            ],
            Pattern::LightweightSpaceship => &[
                (1, 0), (4, 0),
                (0, 1),
                (0, 2), (4, 2),
                (0, 3), (1, 3), (2, 3), (3, 3),
            ],
            Pattern::RPentomino => &[
                (1, 0), (2, 0),
                (0, 1), (1, 1),
                (1, 2),
            ],
            Pattern::GosperGliderGun => &[
                (24, 0),
                (22, 1), (24, 1),
                (12, 2), (13, 2), (20, 2), (21, 2), (34, 2), (35, 2),
                (11, 3), (15, 3), (20, 3), (21, 3), (34, 3), (35, 3),
                (0, 4), (1, 4), (10, 4), (16, 4), (20, 4), (21, 4),
                (0, 5), (1, 5), (10, 5), (14, 5), (16, 5), (17, 5), (22, 5), (24, 5),
                (10, 6), (16, 6), (24, 6),
                (11, 7), (15, 7),
                (12, 8), (13, 8),
            ],
        }
    }

    /// `(width, height)` of the pattern's bounding box
    pub fn size(&self) -> (usize, usize) {
        self.cells().iter().fold((0, 0), |(w, h), &(x, y)| {
            (w.max(x + 1), h.max(y + 1))
        })
    }
}

impl Grid {
    /// Set the pattern's cells alive with its top-left corner at `(x, y)`.
    ///
    /// Cells that fall past an edge wrap around to the opposite side.
    pub fn place(&mut self, pattern: Pattern, x: usize, y: usize) -> Result<(), GridError> {
        let (width, height) = self.dimensions();
        // Only the anchor is checked; the offsets always wrap.
        if x >= width || y >= height {
            return Err(GridError::OutOfBounds { x, y, width, height });
        }
        for &(dx, dy) in pattern.cells() {
            let (cx, cy) = self.wrap((x + dx) as isize, (y + dy) as isize);
            self.set(cx, cy, true)?;
        }
        Ok(())
    }

    /// Place the pattern so its bounding box is centred on the grid.
    pub fn place_centered(&mut self, pattern: Pattern) -> Result<(), GridError> {
        let (width, height) = self.dimensions();
        let (pw, ph) = pattern.size();
        let (x, y) = self.wrap(
            (width / 2) as isize - (pw / 2) as isize,
            (height / 2) as isize - (ph / 2) as isize,
        );
        self.place(pattern, x, y)
    }
}
