//! Orrery - Interactive Solar System Viewer
//!
//! A library crate providing the scene, animation, and interaction components
//! for testing and integration purposes.

pub mod animation;
pub mod camera;
pub mod catalog;
pub mod picking;
pub mod render;
pub mod types;
pub mod ui;
