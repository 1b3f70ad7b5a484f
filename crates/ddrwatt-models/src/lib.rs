#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

pub mod breakdown;
pub mod core;
pub mod core_models;
pub mod device;
pub mod dimm;
pub mod interface;
pub mod interface_models;

#[cfg(test)]
mod tests;
