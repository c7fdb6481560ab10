//! Restaurant discovery library modules.

pub mod domain;
pub mod outbound;
pub mod settings;

pub use settings::OverpassSettings;
