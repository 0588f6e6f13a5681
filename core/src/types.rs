/// Single coordinate axis used for board size and positions.
pub type Coord = u8;

/// Count type used for mine, flag, and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(x, y)`.
///
/// Positions are plain values; two positions are equal iff both axes match.
pub type Coord2 = (Coord, Coord);

pub trait AsIndex {
    type Output;
    fn as_index(self) -> Self::Output;
}

impl AsIndex for Coord2 {
    type Output = [usize; 2];

    fn as_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

/// Cell count of a square board with the given side length.
pub const fn area(size: Coord) -> CellCount {
    let size = size as CellCount;
    size.saturating_mul(size)
}

const DISPLACEMENTS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Enumerates the up-to-8 neighbors of `center` on a square board with side
/// `size`, silently clipping at the border.
pub fn neighbors(center: Coord2, size: Coord) -> impl Iterator<Item = Coord2> {
    DISPLACEMENTS.iter().filter_map(move |&(dx, dy)| {
        let x = center.0.checked_add_signed(dx)?;
        let y = center.1.checked_add_signed(dy)?;
        (x < size && y < size).then_some((x, y))
    })
}
