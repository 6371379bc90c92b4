//! Navigation: traversal costs and weighted shortest paths.
//!
//! [`CostField`] is rebuilt per query from static walkability plus a flat
//! penalty for every blocking occupant, and [`find_path`] runs a
//! deterministic Dijkstra search over it.
mod cost;
mod path;

pub use cost::CostField;
pub use path::find_path;
