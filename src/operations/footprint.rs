use crate::error::{GeometryError, Result};
use crate::geometry::Segment;
use crate::math::{LengthUnit, Point3, TOLERANCE};

/// Which building axis a footprint edge runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallAxis {
    /// The edge is one of the two longer sides.
    Long,
    /// The edge is one of the two shorter sides.
    Short,
}

/// A closed rectangular footprint centred on the origin at `Z = 0`.
#[derive(Debug, Clone, PartialEq)]
pub struct Footprint {
    points: [Point3; 5],
    segments: [Segment; 4],
    axes: [WallAxis; 4],
}

impl Footprint {
    /// The closed corner sequence; the last point repeats the first.
    #[must_use]
    pub fn points(&self) -> &[Point3; 5] {
        &self.points
    }

    /// The four edges in order: front, right, back, left.
    #[must_use]
    pub fn segments(&self) -> &[Segment; 4] {
        &self.segments
    }

    /// The axis classification of each edge.
    #[must_use]
    pub fn axes(&self) -> &[WallAxis; 4] {
        &self.axes
    }

    /// Width along X in internal units.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.points[1].x - self.points[0].x
    }

    /// Depth along Y in internal units.
    #[must_use]
    pub fn depth(&self) -> f64 {
        self.points[2].y - self.points[1].y
    }
}

/// Computes the wall centerlines of a `width` x `depth` rectangle.
#[derive(Debug, Clone, Copy)]
pub struct RectangularFootprint {
    width: f64,
    depth: f64,
    unit: LengthUnit,
}

impl RectangularFootprint {
    /// Creates a new footprint operation. `width` runs along X, `depth`
    /// along Y, both in `unit`.
    #[must_use]
    pub fn new(width: f64, depth: f64, unit: LengthUnit) -> Self {
        Self { width, depth, unit }
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns a unit error for non-finite or oversized input,
    /// [`GeometryError::NonPositive`] if either dimension is not positive and
    /// [`GeometryError::Degenerate`] if one is too small to build walls on.
    pub fn execute(&self) -> Result<Footprint> {
        let width = check_extent("footprint width", self.width, self.unit)?;
        let depth = check_extent("footprint depth", self.depth, self.unit)?;

        let dx = width / 2.0;
        let dy = depth / 2.0;
        let points = [
            Point3::new(-dx, -dy, 0.0),
            Point3::new(dx, -dy, 0.0),
            Point3::new(dx, dy, 0.0),
            Point3::new(-dx, dy, 0.0),
            Point3::new(-dx, -dy, 0.0),
        ];
        let segments = [
            Segment::new(points[0], points[1])?,
            Segment::new(points[1], points[2])?,
            Segment::new(points[2], points[3])?,
            Segment::new(points[3], points[4])?,
        ];
        let axes = classify_axes(&segments)?;

        tracing::debug!(width, depth, "footprint computed");
        Ok(Footprint {
            points,
            segments,
            axes,
        })
    }
}

/// Converts one footprint dimension to internal units.
fn check_extent(parameter: &'static str, value: f64, unit: LengthUnit) -> Result<f64> {
    let internal = unit.to_internal(value)?;
    if value <= 0.0 {
        return Err(GeometryError::NonPositive { parameter, value }.into());
    }
    if internal <= TOLERANCE {
        return Err(GeometryError::Degenerate(format!(
            "{parameter} of {internal} ft is below the geometric tolerance"
        ))
        .into());
    }
    Ok(internal)
}

/// Tags the four edges of a rectangle as long-axis or short-axis.
///
/// Opposite edges share a class. The pair containing edge 0 is `Long`
/// unless edge 1 is strictly longer, so a square keeps edge 0 as long.
///
/// # Errors
///
/// Returns [`GeometryError::Degenerate`] unless exactly four segments are
/// given.
pub fn classify_axes(segments: &[Segment]) -> Result<[WallAxis; 4]> {
    let [first, second, _, _] = segments else {
        return Err(GeometryError::Degenerate(format!(
            "a rectangular footprint has 4 edges, got {}",
            segments.len()
        ))
        .into());
    };
    let axes = if second.length() > first.length() + TOLERANCE {
        [WallAxis::Short, WallAxis::Long, WallAxis::Short, WallAxis::Long]
    } else {
        [WallAxis::Long, WallAxis::Short, WallAxis::Long, WallAxis::Short]
    };
    Ok(axes)
}
