mod contour_set;
pub use contour_set::{Contour, ContourSet};
mod polygon_list;
pub use polygon_list::{Polygon, PolygonList, SinglePolygon};
pub(crate) mod vertex;
pub use vertex::Vertex;
