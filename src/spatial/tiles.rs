//! The fixed catalog of renderable tile kinds
//!
//! Tiles are plain values, shared freely between grid cells. The catalog is
//! closed: the generator only ever needs the `Nothing` default plus a uniform
//! pick among the six decorative kinds.

/// One renderable cell kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    /// Empty space, the grid default
    Nothing,
    /// Flower tile
    Flower,
    /// Tree tile
    Tree,
    /// Sand tile
    Sand,
    /// Locked door tile
    LockedDoor,
    /// Grass tile
    Grass,
    /// Floor tile
    Floor,
}

/// The six decorative kinds, in draw-index order
///
/// A uniform draw in `[0, 6)` indexes this table; `Nothing` is deliberately
/// absent so it is never chosen as a fill tile.
pub const DECORATIVE_TILES: [Tile; 6] = [
    Tile::Flower,
    Tile::Tree,
    Tile::Sand,
    Tile::LockedDoor,
    Tile::Grass,
    Tile::Floor,
];

impl Tile {
    /// RGBA color used by the PNG exporter
    pub const fn color(self) -> [u8; 4] {
        match self {
            Self::Nothing => [0, 0, 0, 0],
            Self::Flower => [221, 102, 153, 255],
            Self::Tree => [34, 139, 34, 255],
            Self::Sand => [237, 201, 175, 255],
            Self::LockedDoor => [139, 90, 43, 255],
            Self::Grass => [124, 200, 88, 255],
            Self::Floor => [128, 128, 128, 255],
        }
    }

    /// Single-character glyph used by the ASCII renderer
    pub const fn glyph(self) -> char {
        match self {
            Self::Nothing => ' ',
            Self::Flower => '*',
            Self::Tree => '^',
            Self::Sand => '~',
            Self::LockedDoor => '#',
            Self::Grass => '"',
            Self::Floor => '.',
        }
    }

    /// Whether this kind is one of the six decorative fills
    pub const fn is_decorative(self) -> bool {
        !matches!(self, Self::Nothing)
    }
}
