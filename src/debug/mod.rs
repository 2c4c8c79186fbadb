//! Svg snapshots of the trapezoidation while it is built, configured through `TRAPEZOIDAL_SVG_*`
//! environment variables

pub(crate) mod env;
pub(crate) mod svg;
