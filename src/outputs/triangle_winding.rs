/// The order the vertices of each output triangle are listed in
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Default)]
pub enum TriangleWinding {
    /// Positive signed area in a y-up coordinate system
    #[default]
    Counterclockwise,
    Clockwise,
}

impl TriangleWinding {
    pub fn reversed(self) -> Self {
        match self {
            Self::Counterclockwise => Self::Clockwise,
            Self::Clockwise => Self::Counterclockwise,
        }
    }

    /// Reorder a counterclockwise triangle to this winding
    pub fn orient<V>(self, [a, b, c]: [V; 3]) -> [V; 3] {
        match self {
            Self::Counterclockwise => [a, b, c],
            Self::Clockwise => [a, c, b],
        }
    }
}
