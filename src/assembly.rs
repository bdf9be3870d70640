//! Primitive assembly: turning the flat vertex stream of one batch into triangles.

use crate::error::{GlError, GlResult};
use crate::gl::DrawMode;
use crate::vertex::Triangle;

/// Splits the batch into triangles according to `mode`, appending them to `triangles`.
///
/// Batches too short for a single primitive produce nothing. Trailing vertices that do not
/// complete a primitive are dropped, except for quads, where a count that is not a multiple
/// of 4 is `InvalidOperation` and nothing is appended.
pub fn assemble<V: Copy>(mode: DrawMode, vertices: &[V], triangles: &mut Vec<Triangle<V>>) -> GlResult<()> {
    match mode {
        DrawMode::Triangles => {
            let chunks = vertices.chunks_exact(3);
            if !chunks.remainder().is_empty() {
                log::warn!("dropping {} trailing vertices of a triangle batch", chunks.remainder().len());
            }
            triangles.extend(chunks.map(|t| [t[0], t[1], t[2]]));
        }
        DrawMode::Quads => {
            if vertices.len() % 4 != 0 {
                return Err(GlError::InvalidOperation);
            }
            for q in vertices.chunks_exact(4) {
                push_quad(triangles, q[0], q[1], q[2], q[3]);
            }
        }
        DrawMode::QuadStrip => {
            // Every new pair of vertices closes a quad with the previous pair.
            // Pairs are (0, 1), (2, 3)..., so the quad outline is 0, 1, 3, 2.
            for q in vertices.windows(4).step_by(2) {
                push_quad(triangles, q[0], q[1], q[3], q[2]);
            }
        }
        DrawMode::TriangleFan | DrawMode::Polygon => {
            // Vertex 0 is the root of the fan.
            if let Some((&root, rest)) = vertices.split_first() {
                triangles.extend(rest.windows(2).map(|e| [root, e[0], e[1]]));
            }
        }
        DrawMode::TriangleStrip => {
            triangles.extend(vertices.windows(3).map(|t| [t[0], t[1], t[2]]));
        }
    }

    return Ok(());
}

/// Quad a, b, c, d split into (a, b, c) and (c, d, a).
fn push_quad<V: Copy>(triangles: &mut Vec<Triangle<V>>, a: V, b: V, c: V, d: V) {
    triangles.push([a, b, c]);
    triangles.push([c, d, a]);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(mode: DrawMode, n: usize) -> GlResult<Vec<Triangle<usize>>> {
        let vertices: Vec<usize> = (0..n).collect();
        let mut triangles = Vec::new();
        assemble(mode, &vertices, &mut triangles)?;
        return Ok(triangles);
    }

    #[test]
    fn triangles_are_consecutive_triples() {
        assert_eq!(run(DrawMode::Triangles, 6).unwrap(), vec![[0, 1, 2], [3, 4, 5]]);
        // Incomplete trailing triangle is dropped.
        assert_eq!(run(DrawMode::Triangles, 5).unwrap(), vec![[0, 1, 2]]);
    }

    #[test]
    fn quads_split_into_two_triangles_each() {
        assert_eq!(
            run(DrawMode::Quads, 8).unwrap(),
            vec![[0, 1, 2], [2, 3, 0], [4, 5, 6], [6, 7, 4]]
        );
    }

    #[test]
    fn quads_need_a_multiple_of_four() {
        let vertices = [0, 1, 2, 3, 4, 5];
        let mut triangles = Vec::new();
        assert_eq!(assemble(DrawMode::Quads, &vertices, &mut triangles), Err(GlError::InvalidOperation));
        assert!(triangles.is_empty());
    }

    #[test]
    fn fan_shares_the_root() {
        let triangles = run(DrawMode::TriangleFan, 5).unwrap();
        assert_eq!(triangles, vec![[0, 1, 2], [0, 2, 3], [0, 3, 4]]);
        assert!(triangles.iter().all(|t| t[0] == 0));
        assert_eq!(run(DrawMode::Polygon, 5).unwrap(), triangles);
    }

    #[test]
    fn strip_is_a_sliding_window() {
        assert_eq!(run(DrawMode::TriangleStrip, 5).unwrap(), vec![[0, 1, 2], [1, 2, 3], [2, 3, 4]]);
    }

    #[test]
    fn quad_strip_pairs() {
        assert_eq!(
            run(DrawMode::QuadStrip, 6).unwrap(),
            vec![[0, 1, 3], [3, 2, 0], [2, 3, 5], [5, 4, 2]]
        );
        assert_eq!(run(DrawMode::QuadStrip, 3).unwrap(), Vec::<Triangle<usize>>::new());
    }

    #[test]
    fn short_batches_produce_nothing() {
        for mode in [DrawMode::TriangleFan, DrawMode::TriangleStrip, DrawMode::Polygon, DrawMode::Triangles] {
            for n in 0..3 {
                assert!(run(mode, n).unwrap().is_empty(), "{:?} with {} vertices", mode, n);
            }
        }
        assert!(run(DrawMode::Quads, 0).unwrap().is_empty());
    }
}
