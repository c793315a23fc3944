//! Composite materials: specification, homogenization and stiffness

mod catalog;
pub mod homogenization;
mod moduli;
mod spec;
mod stiffness;

pub use catalog::{load_catalog, parse_catalog, CatalogEntry};
pub use homogenization::{moduli, moduli_for};
pub use moduli::EngineeringModuli;
pub use spec::{Constituent, MaterialSpec, Topology};
pub use stiffness::{stiffness, StiffnessTensor};
