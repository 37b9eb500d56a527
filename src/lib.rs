//! Tyfold - an incremental type-accumulation core
//!
//! # Overview
//!
//! Tyfold is the convergence kernel of a static type-analysis engine. A
//! binding (a variable, or any expression result) hears about its
//! type from several origins, such as the branches flowing into a merge
//! point or repeated assignment sites. Tyfold folds those beliefs into one
//! combined type and reports after every submission whether the combined
//! type changed. That boolean is the primitive that drives the engine's
//! fixed-point loop: re-queue dependents on `true`, converge when every
//! submission reports `false`.
//!
//! # Quick Start
//!
//! ```
//! use tyfold::{OriginId, TypeAccumulator, TypeManager};
//! use bumpalo::Bump;
//!
//! // Create an arena owning all type values
//! let arena = Bump::new();
//! let types = TypeManager::new(&arena);
//!
//! // One accumulator per binding
//! let mut binding = TypeAccumulator::new(types);
//! assert!(binding.combined_type().is_unknown());
//!
//! // Two branches contribute different beliefs
//! assert!(binding.submit(types.int(), OriginId(1)));
//! assert!(binding.submit(types.str(), OriginId(2)));
//! assert_eq!(
//!     binding.combined_type(),
//!     types.union(&[types.int(), types.str()]),
//! );
//!
//! // Re-running a pass with unchanged facts never reports a change
//! assert!(!binding.submit(types.int(), OriginId(1)));
//! ```
//!
//! # Scope
//!
//! Tyfold owns the accumulation and change detection only. Assigning stable
//! origin identities, deciding when to re-analyze, and scheduling the
//! fixed-point iteration belong to the embedding engine.

pub use tyfold_core::{Contribution, OriginId, Type, TypeAccumulator, TypeManager};
