//! Swingby - Gravity Assist Sandbox
//!
//! A library crate providing the two-body swing-by simulation components
//! for testing and integration purposes.

pub mod camera;
pub mod history;
pub mod input;
pub mod outcome;
pub mod physics;
pub mod profile;
pub mod render;
pub mod session;
pub mod types;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
