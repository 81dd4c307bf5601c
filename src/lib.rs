#![allow(clippy::bool_assert_comparison)]

mod error;
mod evolve;
mod grid;
mod iter;
mod read;
mod rule;
mod world;

pub use ca_formats;
pub use error::Error;
pub use grid::Grid;
pub use world::World;
