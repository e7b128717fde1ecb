//! Viewport coordinates.

/// A point in CSS pixels relative to the viewport.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct XY {
    pub x: f64,
    pub y: f64,
}

impl XY {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: XY) -> f64 {
        let d = *self - other;
        (d.x * d.x + d.y * d.y).sqrt()
    }
}

impl std::ops::Add for XY {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        XY::new(self.x + other.x, self.y + other.y)
    }
}

impl std::ops::AddAssign for XY {
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
    }
}

impl std::ops::Sub for XY {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        XY::new(self.x - other.x, self.y - other.y)
    }
}

impl std::ops::Mul<f64> for XY {
    type Output = Self;
    fn mul(self, scalar: f64) -> Self {
        XY::new(self.x * scalar, self.y * scalar)
    }
}
