use std::fmt;

use common::{InvalidInput, check_side_length};

/// Closed-form snowflake statistics, computed from the side length and
/// depth only (the generated geometry is never measured).
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Metrics {
    pub depth: u32,
    pub segment_count: u64,
    pub perimeter: f64,
    pub area: f64,
}

/// `3 * 4^depth`, or `None` if it does not fit.
pub fn segment_count(depth: u32) -> Option<u64> {
    4u64.checked_pow(depth)
        .and_then(|sides| sides.checked_mul(3))
}

pub fn initial_area(side_length: f32) -> f64 {
    let s = side_length as f64;
    3f64.sqrt() / 4.0 * s * s
}

/// Area the snowflake converges to as depth goes to infinity.
pub fn area_limit(side_length: f32) -> f64 {
    initial_area(side_length) * 8.0 / 5.0
}

impl Metrics {
    pub fn compute(side_length: f32, depth: u32) -> Result<Metrics, InvalidInput> {
        let side_length = check_side_length(side_length)?;
        let segment_count = segment_count(depth)
            .ok_or(InvalidInput::DepthTooLarge(depth))?;

        let piece_length = side_length as f64 / 3f64.powi(depth as i32);
        let perimeter = segment_count as f64 * piece_length;
        let area = initial_area(side_length) / 5.0 * (8.0 - 3.0 * (4.0f64 / 9.0).powi(depth as i32));

        Ok(Metrics { depth, segment_count, perimeter, area, })
    }

    pub fn summary(&self) -> String {
        format!(
            "n = {}, segments = {}, perimeter = {:.4}, area = {:.4}",
            self.depth,
            self.segment_count,
            self.perimeter,
            self.area,
        )
    }
}

impl fmt::Display for Metrics {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "The value of n is: {}", self.depth)?;
        writeln!(f, "The number of segments is: {}", self.segment_count)?;
        writeln!(f, "The length of the perimeter is: {}", self.perimeter)?;
        write!(f, "The total area is: {}", self.area)
    }
}
