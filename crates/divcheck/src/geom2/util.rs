use nalgebra::Vector2;

/// Ray-casting containment test against the vertices of a closed polygon.
///
/// Casts a horizontal ray to the right of `p` and counts edge crossings.
/// The half-open `(a.y > p.y) != (b.y > p.y)` test makes each vertex count
/// exactly once, so horizontal edges and repeated vertices are skipped
/// rather than double-counted. Points exactly on an edge may land on either
/// side; the quadrature callers tolerate that.
///
/// Complexity: O(n) per query.
pub fn contains_point(verts: &[Vector2<f64>], p: Vector2<f64>) -> bool {
    let n = verts.len();
    if n < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let a = verts[i];
        let b = verts[j];
        if (a.y > p.y) != (b.y > p.y) {
            let t = (p.y - a.y) / (b.y - a.y);
            let x_cross = a.x + t * (b.x - a.x);
            if p.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}
