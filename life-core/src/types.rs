/// A cell coordinate on the simulation grid.
///
/// Raw neighbour-scan coordinates may lie outside the grid bounds; they
/// are brought back in range (or resolved to no cell at all) by a
/// [`crate::boundary::BoundaryPolicy`].
pub type Coord = glam::IVec2;
