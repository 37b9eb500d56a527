pub mod accumulator;


pub use accumulator::{Contribution, OriginId, TypeAccumulator};
