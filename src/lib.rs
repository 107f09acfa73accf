#![warn(clippy::all, clippy::cargo)]

mod cell;
pub mod codec;
mod config;
mod error;
mod grid;
mod rule;
mod simulation;
mod utils;

pub use cell::Cell;
pub use codec::MAX_COORDINATE;
pub use config::Config;
pub use error::LifeError;
pub use grid::{Bounds, CellKey, Grid, KeyScheme, PairedKey};
pub use rule::Rule;
pub use simulation::{PlayState, Simulation};
pub use utils::{parse_rle, to_rle, RlePattern};

pub type DefaultGrid = Grid<PairedKey>;
pub type DefaultSimulation = Simulation<PairedKey>;
