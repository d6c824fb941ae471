use common::{Point, Segment, InvalidInput, check_side_length};

/// Distance of the bump apex from the segment midpoint, relative to the
/// segment length.
const APEX_HEIGHT: f32 = 0.28867513; // sqrt(3) / 6

/// Deepest generated curve: 3 * 4^12 segments, about 800 MB for a snowflake.
pub const MAX_DEPTH: u32 = 12;

/// Equilateral triangle centered at the origin, seeding the three Koch curves.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Triangle {
    pub top: Point,
    pub bottom_right: Point,
    pub bottom_left: Point,
}

impl Triangle {
    pub fn equilateral(side_length: f32) -> Result<Triangle, InvalidInput> {
        let s = check_side_length(side_length)?;
        let sqrt3 = 3f32.sqrt();
        let triangle = Triangle {
            top: Point::new(0.0, s * sqrt3 / 3.0),
            bottom_right: Point::new(0.5 * s, -sqrt3 * s / 6.0),
            bottom_left: Point::new(-0.5 * s, -sqrt3 * s / 6.0),
        };
        if triangle.sides().iter().all(|&(start, end)| (end - start).is_finite() && start.is_finite()) {
            Ok(triangle)
        } else {
            Err(InvalidInput::SideLengthTooLarge(side_length))
        }
    }

    /// Sides in traversal order: top, bottom right, bottom left, back to top.
    pub fn sides(&self) -> [(Point, Point); 3] {
        [
            (self.top, self.bottom_right),
            (self.bottom_right, self.bottom_left),
            (self.bottom_left, self.top),
        ]
    }
}

/// Expands a single segment into a Koch curve of the given depth.
pub fn koch_curve(start: Point, end: Point, depth: u32) -> Result<Vec<Segment>, InvalidInput> {
    // the whole curve lies inside the triangle start, apex, end
    if !(start.is_finite() && end.is_finite() && (end - start).is_finite() && apex(start, end).is_finite()) {
        return Err(InvalidInput::NonFiniteSegment(Segment { src: start, dst: end, }));
    }
    if start == end {
        return Err(InvalidInput::DegenerateSegment(start));
    }
    check_depth(depth)?;
    let mut segments = Vec::with_capacity(4usize.pow(depth));
    subdivide(start, end, depth, &mut segments);
    Ok(segments)
}

/// Full snowflake: the three sides of `Triangle::equilateral(side_length)`
/// expanded one after another.
pub fn snowflake(side_length: f32, depth: u32) -> Result<Vec<Segment>, InvalidInput> {
    let triangle = Triangle::equilateral(side_length)?;
    check_depth(depth)?;
    let mut segments = Vec::with_capacity(3 * 4usize.pow(depth));
    for &(start, end) in triangle.sides().iter() {
        segments.extend(koch_curve(start, end, depth)?);
    }
    debug!("generated {} segments for depth {}", segments.len(), depth);
    Ok(segments)
}

/// Flat `x0, y0, x1, y1, ...` coordinates, every four values forming one
/// disjoint line segment.
pub fn flatten(segments: &[Segment]) -> Vec<f32> {
    let mut coords = Vec::with_capacity(segments.len() * 4);
    for &Segment { src, dst, } in segments {
        coords.extend_from_slice(&[src.x, src.y, dst.x, dst.y]);
    }
    coords
}

fn check_depth(depth: u32) -> Result<u32, InvalidInput> {
    if depth > MAX_DEPTH {
        Err(InvalidInput::DepthTooLarge(depth))
    } else {
        Ok(depth)
    }
}

/// Tip of the bump over `a -> e`. It lies to the left of the segment, which
/// is outward for the clockwise triangle traversal.
fn apex(a: Point, e: Point) -> Point {
    let delta = e - a;
    a.midpoint(&e) + Point::new(-delta.y, delta.x) * APEX_HEIGHT
}

fn subdivide(a: Point, e: Point, depth: u32, segments: &mut Vec<Segment>) {
    if depth == 0 {
        segments.push(Segment { src: a, dst: e, });
        return;
    }

    let delta = e - a;
    let b = a + delta * (1.0 / 3.0);
    let d = a + delta * (2.0 / 3.0);
    let c = apex(a, e);

    subdivide(a, b, depth - 1, segments);
    subdivide(b, c, depth - 1, segments);
    subdivide(c, d, depth - 1, segments);
    subdivide(d, e, depth - 1, segments);
}
