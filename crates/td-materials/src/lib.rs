//! td-materials: design-rule tables and classification enums.
//!
//! Everything in here is static data: the standards/material/cooling
//! enumerations with their per-member design values, the wire-gauge
//! catalog, and the MaterialParams join over all of them.

pub mod connection;
pub mod cooling;
pub mod material;
pub mod params;
pub mod shape;
pub mod standard;
pub mod transformer;
pub mod winding;
pub mod wire;

pub use connection::{ConnectionType, Phase};
pub use cooling::{CoolingFamily, CoolingType};
pub use material::CoreMaterial;
pub use params::MaterialParams;
pub use shape::CoreShape;
pub use standard::DesignStandard;
pub use transformer::TransformerType;
pub use winding::WindingType;
pub use wire::{WireGauge, nearest_gauge, swg_catalog};
