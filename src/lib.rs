//! Core plugins for the Vancourier driving game.
//!
//! The player drives a courier van around a fixed city grid. Movement is
//! integrated per frame from keyboard intent and constrained to the road
//! network; everything else (camera, pickups, scenery) only consumes the
//! van's transform.

pub mod camera;
pub mod input;
pub mod interaction;
pub mod render;
pub mod roads;
pub mod vehicle;
