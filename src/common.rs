use std::ops::{Add, Sub, Mul};

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Point {
        Point { x, y, }
    }

    pub fn distance(&self, other: &Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Stays finite for any two finite points whose difference is finite.
    pub fn midpoint(&self, other: &Point) -> Point {
        *self + (*other - *self) * 0.5
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, other: Point) -> Point {
        Point { x: self.x + other.x, y: self.y + other.y, }
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, other: Point) -> Point {
        Point { x: self.x - other.x, y: self.y - other.y, }
    }
}

impl Mul<f32> for Point {
    type Output = Point;

    fn mul(self, factor: f32) -> Point {
        Point { x: self.x * factor, y: self.y * factor, }
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Segment {
    pub src: Point,
    pub dst: Point,
}

impl Segment {
    pub fn length(&self) -> f32 {
        self.src.distance(&self.dst)
    }
}

/// Rejected snowflake parameters. Detected before any geometry is produced.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum InvalidInput {
    NonPositiveSideLength(f32),
    SideLengthTooLarge(f32),
    NegativeDepth(i64),
    DegenerateSegment(Point),
    NonFiniteSegment(Segment),
    DepthTooLarge(u32),
}

pub fn check_side_length(side_length: f32) -> Result<f32, InvalidInput> {
    if side_length.is_finite() && side_length > 0.0 {
        Ok(side_length)
    } else {
        Err(InvalidInput::NonPositiveSideLength(side_length))
    }
}

pub fn depth_from_signed(depth: i64) -> Result<u32, InvalidInput> {
    if depth < 0 {
        Err(InvalidInput::NegativeDepth(depth))
    } else if depth > u32::max_value() as i64 {
        Err(InvalidInput::DepthTooLarge(u32::max_value()))
    } else {
        Ok(depth as u32)
    }
}
