use std::{error, fmt};

use backtrace::Backtrace;

/// Describes an error which occurred while building or triangulating a [ContourSet](crate::ContourSet)
#[derive(Debug)]
#[non_exhaustive]
pub enum TriangulationError {
    /// No vertices were included within the input
    NoVertices,
    /// A contour was encountered with fewer than 3 distinct vertices
    NotEnoughVertices(usize),
    /// A vertex coordinate could not be represented as a finite `f64`
    InvalidCoordinate,
    /// The contour at this index encloses no area
    DegenerateContour(usize),
    /// A polygon handed to the monotone triangulator is not a monotone mountain
    NotMonotone {
        vertices: usize,
    },
    /// A precondition was violated by the input (e.g. crossing edges), or a bug was encountered.
    InternalError(InternalError),
}

impl TriangulationError {
    #[inline(always)]
    pub(crate) fn internal(msg: impl Into<String>) -> Self {
        Self::InternalError(InternalError::new(msg))
    }
}

impl From<InternalError> for TriangulationError {
    fn from(e: InternalError) -> Self {
        Self::InternalError(e)
    }
}

impl fmt::Display for TriangulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoVertices => write!(f, "Polygon set contains no vertices"),
            Self::NotEnoughVertices(vertices) => write!(f, "Polygon only contains {} vertices", vertices),
            Self::InvalidCoordinate => write!(f, "Vertex coordinate is not a finite number"),
            Self::DegenerateContour(contour) => write!(f, "Contour {} has no area", contour),
            Self::NotMonotone { vertices } => write!(f, "Polygon of {} vertices is not monotone", vertices),
            Self::InternalError(error) => fmt::Display::fmt(error, f),
        }
    }
}

impl error::Error for TriangulationError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::InternalError(error) => Some(error),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct InternalError {
    pub msg: String,
    pub backtrace: Backtrace,
}

impl InternalError {
    #[cold]
    #[inline(always)]
    pub(crate) fn new(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            backtrace: Backtrace::new_unresolved(),
        }
    }
}

impl fmt::Display for InternalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{:?}", self.msg, self.backtrace)
    }
}

impl error::Error for InternalError { }
