//! Load types

mod plate_load;

pub use plate_load::{LoadingKind, PlateLoad};
