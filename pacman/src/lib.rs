//! Pac-Man game library crate.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

#[cfg_attr(coverage_nightly, coverage(off))]
pub mod audio;
#[cfg_attr(coverage_nightly, coverage(off))]
pub mod formatter;
#[cfg_attr(coverage_nightly, coverage(off))]
pub mod render;

pub mod collectable;
pub mod config;
pub mod constants;
pub mod direction;
pub mod error;
pub mod events;
pub mod ghost;
pub mod input;
pub mod maze;
pub mod player;
pub mod score;
pub mod session;
pub mod star;
pub mod state;
pub mod timer;
pub mod update;
