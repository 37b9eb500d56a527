#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

extern crate alloc;

// Re-export for convenience so other modules don't need alloc:: prefix
#[allow(unused_imports)]
pub(crate) use alloc::{boxed::Box, format, string::String, string::ToString, vec, vec::Vec};

pub mod inference;
pub mod types;

pub use inference::{Contribution, OriginId, TypeAccumulator};
pub use types::{Type, manager::TypeManager};
