//! Procedurally drawn map-pin icons for the Maps Tab browser extension.

pub mod icon_gen;
pub mod pin;
