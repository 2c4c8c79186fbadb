pub mod util;

#[cfg(test)]
mod point_order;
#[cfg(test)]
mod monotone;
#[cfg(test)]
mod triangulate;
#[cfg(test)]
mod negative;
#[cfg(test)]
mod regression;
#[cfg(test)]
mod handles;
