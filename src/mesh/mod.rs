use crate::triangulation::Triangle;

/// Options applied while flattening triangles into buffers.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MeshOptions {
    /// Shift X and Y by half the grid size so the surface is centered on the origin.
    pub center: bool,
    /// Flip triangles whose normal points to negative Z.
    pub face_up: bool,
}

/// Flat-shaded vertex buffers, ready to be uploaded as GPU vertex attributes.
///
/// Both arrays hold three `f32` components per vertex and three vertices per triangle, so
/// their length is always `9 * triangle_count`. Vertices are not shared between triangles.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshBuffers {
    pub positions: Vec<f32>,
    pub normals: Vec<f32>,
}

impl MeshBuffers {
    /// Builds buffers for `triangles` in their emitted winding.
    pub fn build(points: &[[f64; 3]], triangles: &[Triangle]) -> Self {
        Self::build_with_offset(points, triangles, [0.0; 3], false)
    }

    /// Builds buffers with every position translated by `offset`.
    ///
    /// With `face_up` set, triangles facing down are emitted with `b` and `c` swapped.
    pub fn build_with_offset(
        points: &[[f64; 3]],
        triangles: &[Triangle],
        offset: [f64; 3],
        face_up: bool,
    ) -> Self {
        let _span = tracing::debug_span!("build_buffers", triangles = triangles.len()).entered();

        let mut positions = Vec::with_capacity(triangles.len() * 9);
        let mut normals = Vec::with_capacity(triangles.len() * 9);

        for triangle in triangles {
            let mut normal = face_normal(&points[triangle.a], &points[triangle.b], &points[triangle.c]);
            let triangle = if face_up && normal[2] < 0.0 {
                normal = [-normal[0], -normal[1], -normal[2]];
                triangle.flipped()
            } else {
                *triangle
            };

            for v in triangle.vertices() {
                let p = points[v];
                positions.push((p[0] + offset[0]) as f32);
                positions.push((p[1] + offset[1]) as f32);
                positions.push((p[2] + offset[2]) as f32);
                normals.push(normal[0] as f32);
                normals.push(normal[1] as f32);
                normals.push(normal[2] as f32);
            }
        }

        Self { positions, normals }
    }

    /// Builds buffers for a grid of `grid_size` points per side according to `options`.
    pub fn build_for_grid(
        points: &[[f64; 3]],
        triangles: &[Triangle],
        grid_size: usize,
        options: MeshOptions,
    ) -> Self {
        let offset = if options.center {
            let half = grid_size as f64 / 2.0;
            [-half, -half, 0.0]
        } else {
            [0.0; 3]
        };
        Self::build_with_offset(points, triangles, offset, options.face_up)
    }

    pub fn triangle_count(&self) -> usize {
        self.positions.len() / 9
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Position of every vertex as `[x, y, z]`.
    pub fn vertices(&self) -> impl Iterator<Item = [f32; 3]> + '_ {
        self.positions.chunks_exact(3).map(|c| [c[0], c[1], c[2]])
    }
}

/// Unit normal of triangle `(a, b, c)`, computed as `normalize((c - b) x (a - b))`.
///
/// Degenerate triangles yield the zero vector.
pub fn face_normal(a: &[f64; 3], b: &[f64; 3], c: &[f64; 3]) -> [f64; 3] {
    let cb = [c[0] - b[0], c[1] - b[1], c[2] - b[2]];
    let ab = [a[0] - b[0], a[1] - b[1], a[2] - b[2]];

    let nx = cb[1] * ab[2] - cb[2] * ab[1];
    let ny = cb[2] * ab[0] - cb[0] * ab[2];
    let nz = cb[0] * ab[1] - cb[1] * ab[0];

    let len = (nx * nx + ny * ny + nz * nz).sqrt();
    if len == 0.0 {
        return [0.0; 3];
    }
    [nx / len, ny / len, nz / len]
}

#[cfg(test)]
mod tests {
    use super::*;

    const POINTS: [[f64; 3]; 4] = [
        [0.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [1.0, 1.0, 0.5],
    ];

    #[test]
    fn test_face_normal_counter_clockwise() {
        let n = face_normal(&POINTS[0], &POINTS[1], &POINTS[2]);
        assert_eq!(n, [0.0, 0.0, 1.0]);

        let n = face_normal(&POINTS[0], &POINTS[2], &POINTS[1]);
        assert_eq!(n, [0.0, 0.0, -1.0]);
    }

    #[test]
    fn test_face_normal_degenerate() {
        let n = face_normal(&[0.0, 0.0, 0.0], &[1.0, 1.0, 1.0], &[2.0, 2.0, 2.0]);
        assert_eq!(n, [0.0; 3]);
    }

    #[test]
    fn test_build_lengths_and_flat_normals() {
        let triangles = [Triangle::new(0, 1, 2), Triangle::new(1, 3, 2)];
        let buffers = MeshBuffers::build(&POINTS, &triangles);

        assert_eq!(buffers.positions.len(), 18);
        assert_eq!(buffers.normals.len(), 18);
        assert_eq!(buffers.triangle_count(), 2);
        assert_eq!(buffers.vertex_count(), 6);

        for face in buffers.normals.chunks_exact(9) {
            assert_eq!(face[0..3], face[3..6]);
            assert_eq!(face[3..6], face[6..9]);
        }
    }

    #[test]
    fn test_build_empty() {
        let buffers = MeshBuffers::build(&POINTS, &[]);
        assert!(buffers.is_empty());
        assert!(buffers.normals.is_empty());
    }

    #[test]
    fn test_face_up_flips_downward_triangles() {
        let triangles = [Triangle::new(0, 2, 1)];
        let buffers = MeshBuffers::build_for_grid(&POINTS, &triangles, 2, MeshOptions { center: false, face_up: true });

        assert_eq!(&buffers.normals[0..3], &[0.0, 0.0, 1.0]);
        let vertices: Vec<[f32; 3]> = buffers.vertices().collect();
        assert_eq!(vertices, vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]);
    }

    #[test]
    fn test_center_offset() {
        let triangles = [Triangle::new(0, 1, 2)];
        let buffers = MeshBuffers::build_for_grid(&POINTS, &triangles, 2, MeshOptions { center: true, face_up: false });

        assert_eq!(&buffers.positions[0..3], &[-1.0, -1.0, 0.0]);
        assert_eq!(&buffers.positions[6..9], &[-1.0, 0.0, 0.0]);
    }
}
