mod reference_plane;
mod segment;

pub use reference_plane::ReferencePlane;
pub use segment::Segment;
