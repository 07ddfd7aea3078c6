use std::fmt;
use std::ops::{Add, Sub};

use num_traits::{PrimInt, Signed};

/// Unit steps in 2D, clockwise from up: up, right, down, left.
pub const DIRECTIONS_2D: [Point2D<i64>; 4] = [
    Point2D { x: 0, y: -1 },
    Point2D { x: 1, y: 0 },
    Point2D { x: 0, y: 1 },
    Point2D { x: -1, y: 0 },
];

/// Unit steps in 3D: the four of [`DIRECTIONS_2D`] followed by front
/// (`z + 1`) and back (`z - 1`).
pub const DIRECTIONS_3D: [Point3D<i64>; 6] = [
    Point3D { x: 0, y: -1, z: 0 },
    Point3D { x: 1, y: 0, z: 0 },
    Point3D { x: 0, y: 1, z: 0 },
    Point3D { x: -1, y: 0, z: 0 },
    Point3D { x: 0, y: 0, z: 1 },
    Point3D { x: 0, y: 0, z: -1 },
];

/// A point on the 2D integer lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Point2D<T> {
    pub x: T,
    pub y: T,
}

impl<T: PrimInt + Signed> Point2D<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    pub fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }

    pub fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }

    /// Sum of the absolute coordinate differences.
    pub fn manhattan_distance(self, other: Self) -> T {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// The four axis-aligned neighbors, clockwise from up.
    pub fn neighbors(self) -> [Self; 4] {
        let one = T::one();
        [
            Self::new(self.x, self.y - one),
            Self::new(self.x + one, self.y),
            Self::new(self.x, self.y + one),
            Self::new(self.x - one, self.y),
        ]
    }
}

impl<T: PrimInt + Signed> Add for Point2D<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Point2D::add(self, rhs)
    }
}

impl<T: PrimInt + Signed> Sub for Point2D<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Point2D::sub(self, rhs)
    }
}

impl<T: fmt::Display> fmt::Display for Point2D<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A point on the 3D integer lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Point3D<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T: PrimInt + Signed> Point3D<T> {
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    pub fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }

    pub fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }

    pub fn manhattan_distance(self, other: Self) -> T {
        (self.x - other.x).abs() + (self.y - other.y).abs() + (self.z - other.z).abs()
    }

    /// The six axis-aligned neighbors in [`DIRECTIONS_3D`] order.
    pub fn neighbors(self) -> [Self; 6] {
        let one = T::one();
        [
            Self::new(self.x, self.y - one, self.z),
            Self::new(self.x + one, self.y, self.z),
            Self::new(self.x, self.y + one, self.z),
            Self::new(self.x - one, self.y, self.z),
            Self::new(self.x, self.y, self.z + one),
            Self::new(self.x, self.y, self.z - one),
        ]
    }
}

impl<T: PrimInt + Signed> Add for Point3D<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Point3D::add(self, rhs)
    }
}

impl<T: PrimInt + Signed> Sub for Point3D<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Point3D::sub(self, rhs)
    }
}

impl<T: fmt::Display> fmt::Display for Point3D<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
