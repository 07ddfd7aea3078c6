//! Axis-aligned boxes on the integer lattice.
//!
//! Bounds are inclusive on both ends, so a box with `min_x == max_x` is one
//! column wide and two boxes sharing an edge intersect along that edge.
//! `min <= max` on every axis is assumed, not checked.

use num_traits::PrimInt;

use super::{Point2D, Point3D};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoundingBox2D<T> {
    pub min_x: T,
    pub max_x: T,
    pub min_y: T,
    pub max_y: T,
}

impl<T: PrimInt> BoundingBox2D<T> {
    pub fn new(min_x: T, max_x: T, min_y: T, max_y: T) -> Self {
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    /// Smallest box enclosing every point, or `None` for no points.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point2D<T>>,
    {
        let mut points = points.into_iter();
        let first = points.next()?;
        let start = Self::new(first.x, first.x, first.y, first.y);
        Some(points.fold(start, |b, p| {
            Self::new(
                b.min_x.min(p.x),
                b.max_x.max(p.x),
                b.min_y.min(p.y),
                b.max_y.max(p.y),
            )
        }))
    }

    pub fn contains(&self, x: T, y: T) -> bool {
        self.min_x <= x && x <= self.max_x && self.min_y <= y && y <= self.max_y
    }

    pub fn contains_point(&self, p: &Point2D<T>) -> bool {
        self.contains(p.x, p.y)
    }

    /// The overlapping box, or `None` when the boxes are disjoint.
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        let (min_x, max_x) = overlap(self.min_x, self.max_x, other.min_x, other.max_x)?;
        let (min_y, max_y) = overlap(self.min_y, self.max_y, other.min_y, other.max_y)?;
        Some(Self::new(min_x, max_x, min_y, max_y))
    }

    /// Number of lattice columns covered.
    pub fn width(&self) -> T {
        self.max_x - self.min_x + T::one()
    }

    /// Number of lattice rows covered.
    pub fn height(&self) -> T {
        self.max_y - self.min_y + T::one()
    }

    /// Number of lattice cells covered.
    pub fn area(&self) -> T {
        self.width() * self.height()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoundingBox3D<T> {
    pub min_x: T,
    pub max_x: T,
    pub min_y: T,
    pub max_y: T,
    pub min_z: T,
    pub max_z: T,
}

impl<T: PrimInt> BoundingBox3D<T> {
    pub fn new(min_x: T, max_x: T, min_y: T, max_y: T, min_z: T, max_z: T) -> Self {
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
            min_z,
            max_z,
        }
    }

    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point3D<T>>,
    {
        let mut points = points.into_iter();
        let first = points.next()?;
        let start = Self::new(first.x, first.x, first.y, first.y, first.z, first.z);
        Some(points.fold(start, |b, p| {
            Self::new(
                b.min_x.min(p.x),
                b.max_x.max(p.x),
                b.min_y.min(p.y),
                b.max_y.max(p.y),
                b.min_z.min(p.z),
                b.max_z.max(p.z),
            )
        }))
    }

    pub fn contains(&self, x: T, y: T, z: T) -> bool {
        self.min_x <= x
            && x <= self.max_x
            && self.min_y <= y
            && y <= self.max_y
            && self.min_z <= z
            && z <= self.max_z
    }

    pub fn contains_point(&self, p: &Point3D<T>) -> bool {
        self.contains(p.x, p.y, p.z)
    }

    pub fn intersection(&self, other: &Self) -> Option<Self> {
        let (min_x, max_x) = overlap(self.min_x, self.max_x, other.min_x, other.max_x)?;
        let (min_y, max_y) = overlap(self.min_y, self.max_y, other.min_y, other.max_y)?;
        let (min_z, max_z) = overlap(self.min_z, self.max_z, other.min_z, other.max_z)?;
        Some(Self::new(min_x, max_x, min_y, max_y, min_z, max_z))
    }

    pub fn width(&self) -> T {
        self.max_x - self.min_x + T::one()
    }

    pub fn height(&self) -> T {
        self.max_y - self.min_y + T::one()
    }

    pub fn depth(&self) -> T {
        self.max_z - self.min_z + T::one()
    }

    /// Number of lattice cells covered.
    pub fn volume(&self) -> T {
        self.width() * self.height() * self.depth()
    }
}

fn overlap<T: PrimInt>(min_a: T, max_a: T, min_b: T, max_b: T) -> Option<(T, T)> {
    let lo = min_a.max(min_b);
    let hi = max_a.min(max_b);
    (lo <= hi).then_some((lo, hi))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bbox2d_contains() {
        let bbox = BoundingBox2D::new(0, 5, 0, 5);
        let cases = [
            ("outside point", -2, 3, false),
            ("corner point", 0, 0, true),
            ("edge point", 0, 2, true),
            ("inside point", 1, 2, true),
        ];
        for (name, x, y, expected) in cases {
            assert_eq!(bbox.contains(x, y), expected, "{name}");
        }
        assert!(bbox.contains_point(&Point2D::new(5, 5)));
    }

    #[test]
    fn test_bbox2d_intersection() {
        let bbox = BoundingBox2D::new(5, 15, 5, 15);
        let cases = [
            ("does not intersect #1", BoundingBox2D::new(0, 4, 2, 8), None),
            ("does not intersect #2", BoundingBox2D::new(10, 18, 18, 22), None),
            (
                "intersect at bottom left corner",
                BoundingBox2D::new(3, 9, 4, 10),
                Some(BoundingBox2D::new(5, 9, 5, 10)),
            ),
            (
                "intersect at top right corner",
                BoundingBox2D::new(11, 18, 14, 20),
                Some(BoundingBox2D::new(11, 15, 14, 15)),
            ),
            (
                "intersect at left edge",
                BoundingBox2D::new(2, 10, 5, 15),
                Some(BoundingBox2D::new(5, 10, 5, 15)),
            ),
            (
                "intersect at bottom edge",
                BoundingBox2D::new(5, 15, 3, 9),
                Some(BoundingBox2D::new(5, 15, 5, 9)),
            ),
            (
                "fully contained within",
                BoundingBox2D::new(8, 12, 6, 9),
                Some(BoundingBox2D::new(8, 12, 6, 9)),
            ),
        ];
        for (name, other, expected) in cases {
            assert_eq!(bbox.intersection(&other), expected, "{name}");
        }
    }

    #[test]
    fn test_bbox2d_touching_corner() {
        let a = BoundingBox2D::new(0, 5, 0, 5);
        let b = BoundingBox2D::new(5, 10, 5, 10);
        let corner = a.intersection(&b).unwrap();
        assert!(corner.contains(5, 5));
        assert_eq!(corner.area(), 1);
    }

    #[test]
    fn test_bbox2d_area() {
        let bbox = BoundingBox2D::new(1, 4, 2, 7);
        assert_eq!(bbox.width(), 4);
        assert_eq!(bbox.height(), 6);
        assert_eq!(bbox.area(), 24);
    }

    #[test]
    fn test_bbox2d_from_points() {
        let points = [Point2D::new(3, -1), Point2D::new(-2, 4), Point2D::new(0, 0)];
        let bbox = BoundingBox2D::from_points(points).unwrap();
        assert_eq!(bbox, BoundingBox2D::new(-2, 3, -1, 4));
        assert!(points.iter().all(|p| bbox.contains_point(p)));
        assert_eq!(BoundingBox2D::<i32>::from_points([]), None);
    }

    #[test]
    fn test_bbox3d_contains() {
        let bbox = BoundingBox3D::new(0, 5, 0, 5, 0, 5);
        let cases = [
            ("outside point", 2, 3, 8, false),
            ("corner point", 0, 0, 0, true),
            ("edge point", 0, 2, 0, true),
            ("inside point", 1, 2, 3, true),
        ];
        for (name, x, y, z, expected) in cases {
            assert_eq!(bbox.contains(x, y, z), expected, "{name}");
        }
    }

    #[test]
    fn test_bbox3d_intersection() {
        let a = BoundingBox3D::new(0, 5, 0, 5, 0, 5);
        assert_eq!(
            a.intersection(&BoundingBox3D::new(3, 8, -2, 2, 5, 9)),
            Some(BoundingBox3D::new(3, 5, 0, 2, 5, 5))
        );
        assert_eq!(a.intersection(&BoundingBox3D::new(0, 5, 0, 5, 6, 9)), None);
    }

    #[test]
    fn test_bbox3d_volume() {
        let bbox = BoundingBox3D::new(1, 4, 2, 7, 3, 5);
        assert_eq!(bbox.depth(), 3);
        assert_eq!(bbox.volume(), 72);
    }

    #[test]
    fn test_bbox3d_from_points() {
        let bbox = BoundingBox3D::from_points([
            Point3D::new(1, 2, 3),
            Point3D::new(-1, 5, 0),
        ])
        .unwrap();
        assert_eq!(bbox, BoundingBox3D::new(-1, 1, 2, 5, 0, 3));
        assert!(bbox.contains_point(&Point3D::new(0, 3, 2)));
    }

    #[test]
    fn test_unsigned_coordinates() {
        let bbox: BoundingBox2D<u32> = BoundingBox2D::new(0, 9, 0, 9);
        assert_eq!(bbox.area(), 100);
    }
}
