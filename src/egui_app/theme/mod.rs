//! ChemCycle visual theme
//!
//! Green/blue light theme matching the ChemCycle web application.

pub mod colors;
pub mod styles;
