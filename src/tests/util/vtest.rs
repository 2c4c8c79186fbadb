use std::fmt;

use crate::inputs::Vertex;

/// A vertex type of the caller's own, with `f32` coordinates
#[derive(Default, Copy, Clone, PartialEq)]
pub struct VTest([f32; 2]);

impl fmt::Debug for VTest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0[0], self.0[1])
    }
}

impl Vertex for VTest {
    type Coordinate = f32;

    #[inline(always)]
    fn x(&self) -> Self::Coordinate { self.0[0] }

    #[inline(always)]
    fn y(&self) -> Self::Coordinate { self.0[1] }
}

impl From<(f32, f32)> for VTest {
    fn from((x, y): (f32, f32)) -> Self {
        Self([x, y])
    }
}
