mod list;
pub use list::List;
mod triangle_winding;
pub use triangle_winding::TriangleWinding;
