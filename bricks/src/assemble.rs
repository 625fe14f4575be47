use crate::{
    cell::{Cell, CellSet},
    layout::WordPlacement,
};

/// Merges word placements into one cell set. Where words cross, the letter
/// of the earlier placement is kept; crossings are not checked for agreement.
pub fn assemble(placements: &[WordPlacement]) -> CellSet {
    let mut cells = CellSet::new();
    for p in placements {
        for (at, letter) in p.letters() {
            cells.insert(Cell::new(at.x, at.y, letter));
        }
    }
    cells
}
