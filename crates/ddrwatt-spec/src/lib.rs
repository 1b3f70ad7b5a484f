#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

pub mod error;
pub mod memspec;
pub mod workload;

mod parse;
