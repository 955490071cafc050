use glam::{Vec2, Vec3, Vec4};

/// Immutable inputs to the grid mesh builder, supplied once at startup.
///
/// Caller contract: `cells >= 1`, `world_size` positive and finite,
/// `thickness` non-negative and finite. The builder does not validate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridParams {
    /// Number of grid divisions along each axis.
    pub cells: u32,
    /// Total span of the grid in world units.
    pub world_size: f32,
    /// Half-width of each line stroke in world units.
    pub thickness: f32,
}

impl Default for GridParams {
    fn default() -> Self {
        Self {
            cells: 20,
            world_size: 1.0,
            thickness: 0.005,
        }
    }
}

/// Flat, unlit, vertex-colored triangle mesh. `positions` and `colors`
/// are parallel arrays; `indices` references them in triples with
/// front-face winding equal to generation order. No normals, no UVs.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshData {
    pub positions: Vec<Vec3>,
    pub colors: Vec<Vec4>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Accepts generated mesh data for display. Decouples generation from
/// any concrete rendering backend: implementors own whatever resources
/// `accept` allocates until `release` tears them down.
pub trait MeshConsumer {
    /// Take ownership of a backend copy of `mesh`, replacing any
    /// previously accepted data.
    fn accept(&mut self, mesh: &MeshData);

    /// Tear down resources held from a previous `accept`. Safe to call
    /// repeatedly, and before any `accept` has happened.
    fn release(&mut self);
}

/// Selects one of the five reusable endpoint offsets. `Zero` is the
/// grid-centering translation alone; the other four add a shift of one
/// stroke thickness along a single axis on top of it.
#[derive(Debug, Clone, Copy)]
enum Offset {
    Zero,
    Up,
    Down,
    Left,
    Right,
}

use Offset::{Down, Left, Right, Up, Zero};

/// Fixed vertex/face layout for one block of the mesh. Per vertex:
/// `corners` selects one of the block's four corner points, `offsets`
/// one of the five stroke offsets, `opaque` whether the vertex gets the
/// line color or is fully transparent (a fading stroke tip). `faces`
/// indexes into the block's own vertices; `append_block` rebases them
/// onto the shared buffers.
struct BlockLayout {
    corners: &'static [usize],
    offsets: &'static [Offset],
    opaque: &'static [bool],
    faces: &'static [u32],
}

/// Crosshair through the grid center: two arm pairs of 6 vertices each.
/// Each pair starts at an opaque outer corner, fades through two
/// transparent tips, then repeats from the opposite corner.
const CROSSHAIR_LAYOUT: BlockLayout = BlockLayout {
    corners: &[
        0, 0, 1, 1, 1, 0, //
        2, 2, 3, 3, 3, 2,
    ],
    offsets: &[
        Zero, Right, Up, Zero, Left, Down, //
        Zero, Down, Right, Zero, Up, Left,
    ],
    opaque: &[
        true, false, false, true, false, false, //
        true, false, false, true, false, false,
    ],
    // 4 triangles per arm pair, stitching the 6 vertices into two quads.
    faces: &[
        0, 1, 2, //
        2, 3, 0, //
        0, 3, 5, //
        3, 4, 5, //
        6, 7, 8, //
        8, 9, 6, //
        6, 9, 11, //
        9, 10, 11,
    ],
};

/// One tick ring: 3 stroke vertices per diamond corner (opaque start
/// plus two transparent fades), then 4 transparent anchor vertices (one
/// per corner) that miter adjacent strokes into a closed outline.
const RING_LAYOUT: BlockLayout = BlockLayout {
    corners: &[
        0, 0, 1, 1, 1, 2, //
        2, 2, 3, 3, 3, 0, //
        0, 1, 2, 3,
    ],
    offsets: &[
        Zero, Right, Up, Zero, Down, Right, //
        Zero, Left, Down, Zero, Up, Left, //
        Down, Left, Up, Right,
    ],
    opaque: &[
        true, false, false, true, false, false, //
        true, false, false, true, false, false, //
        false, false, false, false,
    ],
    // 4 triangles per corner: the stroke quad plus two anchor triangles
    // connecting it to the neighboring corners.
    faces: &[
        0, 1, 2, //
        3, 0, 2, //
        0, 3, 12, //
        12, 3, 13, //
        3, 4, 5, //
        5, 6, 3, //
        3, 6, 13, //
        13, 6, 14, //
        6, 7, 8, //
        8, 9, 6, //
        6, 9, 14, //
        9, 15, 14, //
        9, 10, 11, //
        11, 0, 9, //
        9, 0, 15, //
        0, 12, 15,
    ],
};

const LINE_COLOR: Vec4 = Vec4::new(1.0, 1.0, 1.0, 1.0);
const CLEAR: Vec4 = Vec4::ZERO;

/// Build the grid overlay mesh: a crosshair through the center and the
/// outer corners, plus one diamond ring of tick strokes per
/// intermediate grid division. Pure and deterministic; every call with
/// the same parameters yields identical buffers.
pub fn build_grid_mesh(params: &GridParams) -> MeshData {
    let cells = params.cells as f32;
    let cell_size = params.world_size / cells;
    let center = -params.world_size / 2.0;
    let t = params.thickness;

    // The five reusable endpoint offsets, indexed by `Offset`. Adding
    // these instead of scaling stroke width by `cell_size` is what
    // keeps every stroke at constant world-space width.
    let offsets = [
        Vec3::new(center, center, 0.0),     // Zero
        Vec3::new(center, center + t, 0.0), // Up
        Vec3::new(center, center - t, 0.0), // Down
        Vec3::new(center - t, center, 0.0), // Left
        Vec3::new(center + t, center, 0.0), // Right
    ];

    let rings = params.cells as usize - 1;
    let mut mesh = MeshData {
        positions: Vec::with_capacity(12 + 16 * rings),
        colors: Vec::with_capacity(12 + 16 * rings),
        indices: Vec::with_capacity(24 + 48 * rings),
    };

    // Crosshair corner points, in unit-cell space: the four outer
    // corners of the grid.
    let corners = [
        Vec2::new(0.0, cells),
        Vec2::new(cells, 0.0),
        Vec2::new(cells, cells),
        Vec2::new(0.0, 0.0),
    ];
    append_block(&mut mesh, &corners, cell_size, &offsets, &CROSSHAIR_LAYOUT);

    // One ring per intermediate division, tracing a diamond inscribed
    // at distance `idx` from two adjacent grid corners.
    for idx in 1..params.cells {
        let idx = idx as f32;
        let corners = [
            Vec2::new(cells - idx, cells),
            Vec2::new(cells, cells - idx),
            Vec2::new(idx, 0.0),
            Vec2::new(0.0, idx),
        ];
        append_block(&mut mesh, &corners, cell_size, &offsets, &RING_LAYOUT);
    }

    mesh
}

/// Append one table-driven block. Each layout entry picks a corner
/// point (scaled into world units) plus one of the five offsets; face
/// indices are rebased by the vertex count accumulated before this
/// block, so blocks never share vertices.
fn append_block(
    mesh: &mut MeshData,
    corners: &[Vec2; 4],
    cell_size: f32,
    offsets: &[Vec3; 5],
    layout: &BlockLayout,
) {
    let base = mesh.positions.len() as u32;

    for i in 0..layout.corners.len() {
        let p = corners[layout.corners[i]] * cell_size;
        mesh.positions
            .push(Vec3::new(p.x, p.y, 0.0) + offsets[layout.offsets[i] as usize]);
        mesh.colors
            .push(if layout.opaque[i] { LINE_COLOR } else { CLEAR });
    }
    for &face_index in layout.faces {
        mesh.indices.push(base + face_index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(cells: u32, world_size: f32, thickness: f32) -> MeshData {
        build_grid_mesh(&GridParams {
            cells,
            world_size,
            thickness,
        })
    }

    mod counts {
        use super::*;

        #[test]
        fn vertex_and_triangle_counts_follow_cell_count() {
            for cells in [1u32, 2, 5, 20] {
                let mesh = build(cells, 1.0, 0.005);
                let rings = (cells - 1) as usize;
                assert_eq!(mesh.vertex_count(), 12 + 16 * rings);
                assert_eq!(mesh.colors.len(), mesh.positions.len());
                assert_eq!(mesh.indices.len(), 3 * (8 + 16 * rings));
            }
        }

        #[test]
        fn single_cell_is_crosshair_only() {
            let mesh = build(1, 1.0, 0.005);
            assert_eq!(mesh.vertex_count(), 12);
            assert_eq!(mesh.triangle_count(), 8);
        }

        #[test]
        fn two_cells_two_world_units() {
            let mesh = build(2, 2.0, 0.01);
            assert_eq!(mesh.vertex_count(), 28);
            assert_eq!(mesh.triangle_count(), 40);
        }
    }

    mod indices {
        use super::*;

        #[test]
        fn all_indices_in_range() {
            for cells in [1u32, 2, 5, 20] {
                let mesh = build(cells, 1.0, 0.005);
                let n = mesh.vertex_count() as u32;
                assert_eq!(mesh.indices.len() % 3, 0);
                assert!(mesh.indices.iter().all(|&i| i < n));
            }
        }

        #[test]
        fn blocks_own_disjoint_vertex_ranges() {
            // Crosshair owns vertices [0, 12); the ring at division
            // idx owns [12 + 16*(idx-1), 12 + 16*idx).
            let mesh = build(5, 1.0, 0.005);
            let crosshair = &mesh.indices[..24];
            assert!(crosshair.iter().all(|&i| i < 12));
            for ring in 0..4usize {
                let faces = &mesh.indices[24 + 48 * ring..24 + 48 * (ring + 1)];
                let lo = (12 + 16 * ring) as u32;
                let hi = lo + 16;
                assert!(faces.iter().all(|&i| i >= lo && i < hi));
            }
        }
    }

    mod geometry {
        use super::*;

        #[test]
        fn zero_thickness_crosshair_collapses_to_corners() {
            let mesh = build(1, 1.0, 0.0);
            for p in &mesh.positions {
                assert!(p.x.abs() == 0.5 && p.y.abs() == 0.5, "unexpected vertex {p}");
                assert_eq!(p.z, 0.0);
                assert!(p.is_finite());
            }
        }

        #[test]
        fn doubling_world_size_scales_every_position() {
            let a = build(4, 1.0, 0.0);
            let b = build(4, 2.0, 0.0);
            for (pa, pb) in a.positions.iter().zip(&b.positions) {
                assert_eq!(*pb, *pa * 2.0);
            }
        }

        #[test]
        fn thickness_shifts_each_vertex_along_at_most_one_axis() {
            // Power-of-two inputs so the comparison is exact.
            let t = 0.25;
            let flat = build(4, 1.0, 0.0);
            let thick = build(4, 1.0, t);
            for (a, b) in flat.positions.iter().zip(&thick.positions) {
                let d = *b - *a;
                assert_eq!(d.z, 0.0);
                assert!(d.x == 0.0 || d.x.abs() == t);
                assert!(d.y == 0.0 || d.y.abs() == t);
                assert!(d.x == 0.0 || d.y == 0.0);
            }
        }

        #[test]
        fn deterministic_across_calls() {
            let params = GridParams {
                cells: 7,
                world_size: 3.0,
                thickness: 0.02,
            };
            let a = build_grid_mesh(&params);
            let b = build_grid_mesh(&params);
            assert_eq!(a, b);
        }
    }

    mod colors {
        use super::*;

        #[test]
        fn every_color_is_opaque_line_or_fully_clear() {
            let mesh = build(5, 1.0, 0.005);
            for c in &mesh.colors {
                assert!(*c == LINE_COLOR || *c == CLEAR);
            }
        }

        #[test]
        fn opaque_vertices_are_the_stroke_starts() {
            // 4 opaque corner starts in the crosshair, 4 per ring.
            let mesh = build(5, 1.0, 0.005);
            let opaque = mesh.colors.iter().filter(|c| c.w == 1.0).count();
            assert_eq!(opaque, 4 + 4 * 4);
        }
    }

    mod consumer {
        use super::*;

        struct CountingConsumer {
            accepted: usize,
            released: usize,
            live: bool,
        }

        impl MeshConsumer for CountingConsumer {
            fn accept(&mut self, _mesh: &MeshData) {
                self.accepted += 1;
                self.live = true;
            }

            fn release(&mut self) {
                self.released += 1;
                self.live = false;
            }
        }

        #[test]
        fn release_is_safe_before_and_after_accept() {
            let mut consumer = CountingConsumer {
                accepted: 0,
                released: 0,
                live: false,
            };
            consumer.release();
            consumer.release();
            assert!(!consumer.live);

            consumer.accept(&build(2, 1.0, 0.005));
            assert!(consumer.live);
            consumer.release();
            assert!(!consumer.live);
            assert_eq!(consumer.accepted, 1);
            assert_eq!(consumer.released, 3);
        }
    }
}
