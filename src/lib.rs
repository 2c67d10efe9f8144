#[macro_use]
extern crate failure;
extern crate itertools;
#[macro_use]
extern crate log;

#[cfg(test)]
extern crate env_logger;

pub mod game;
pub mod input;
pub mod ring;
pub mod scores;
