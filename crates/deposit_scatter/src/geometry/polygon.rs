//! Closed polygon with even-odd point membership.
use crate::error::{Error, Result};
use crate::geometry::Point2;

/// Axis-aligned bounding box of a vertex set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Point2,
    pub max: Point2,
}

impl Bounds {
    fn of(vertices: &[Point2]) -> Self {
        let mut min = Point2::new(f64::INFINITY, f64::INFINITY);
        let mut max = Point2::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
        for v in vertices {
            min.x = min.x.min(v.x);
            min.y = min.y.min(v.y);
            max.x = max.x.max(v.x);
            max.y = max.y.max(v.y);
        }
        Self { min, max }
    }

    /// Inclusive containment test.
    #[inline]
    pub fn contains(&self, p: Point2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

/// An implicitly closed vertex loop; the last vertex connects back to the first.
///
/// Vertices are kept in the order given. No convexity or angular ordering is assumed.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point2>,
    bounds: Bounds,
}

impl Polygon {
    /// Build a polygon from a copy of `vertices`.
    pub fn new(vertices: &[Point2]) -> Result<Self> {
        Self::from_vec(vertices.to_vec())
    }

    pub(crate) fn from_vec(vertices: Vec<Point2>) -> Result<Self> {
        if vertices.len() < 3 {
            return Err(Error::DegeneratePolygon {
                vertex_count: vertices.len(),
            });
        }
        let bounds = Bounds::of(&vertices);
        Ok(Self { vertices, bounds })
    }

    #[inline]
    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Never true for a constructed polygon.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Even-odd ray casting test.
    ///
    /// Casts a ray along +x from `p` and counts edge crossings. Points exactly on an
    /// edge get a deterministic but unspecified answer.
    pub fn contains(&self, p: Point2) -> bool {
        // A closed loop always has an even number of straddling edges outside its box.
        if !self.bounds.contains(p) {
            return false;
        }

        let verts = &self.vertices;
        let mut inside = false;
        let mut j = verts.len() - 1;
        for i in 0..verts.len() {
            let vi = verts[i];
            let vj = verts[j];
            if (vi.y > p.y) != (vj.y > p.y)
                && p.x < (vj.x - vi.x) * (p.y - vi.y) / (vj.y - vi.y) + vi.x
            {
                inside = !inside;
            }
            j = i;
        }
        inside
    }
}
