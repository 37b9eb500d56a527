//! Per-binding accumulation of type beliefs.
//!
//! During analysis, one binding hears about its type from several origins,
//! such as the branches flowing into a merge point, or successive passes
//! over the same assignment. The [`TypeAccumulator`] folds those beliefs
//! into one combined type and tells the caller whether the combined type
//! changed, which is the signal that drives the enclosing fixed-point loop:
//! re-queue the binding's dependents on `true`, stop when every submission
//! reports `false`.

use crate::types::{Type, manager::TypeManager};
use smallvec::SmallVec;
use static_assertions::assert_eq_size;
use tracing::trace;

/// Identifies one contributing origin: a syntactic location or analysis
/// event that produced a type belief for the binding.
///
/// Identifiers are assigned by the caller. They must be stable across
/// analysis passes and unique within one accumulator; neither property is
/// checked here, and an identifier that changes meaning between passes will
/// silently corrupt the combined type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OriginId(pub u32);

/// One origin's current belief about the binding's type.
#[derive(Debug, Clone, Copy)]
pub struct Contribution<'types> {
    pub origin: OriginId,
    pub ty: &'types Type<'types>,
}

assert_eq_size!(Contribution<'_>, [usize; 2]);

// Bindings rarely hear from more origins than branches at a merge point.
const INLINE_CONTRIBUTIONS: usize = 4;

/// Accumulates per-origin type contributions for one binding.
///
/// The combined type is recomputed on every mutation and never read stale:
/// it is the [`union`](TypeManager::union) of all contribution types in
/// insertion order, or `Unknown` while no contribution exists. The
/// accumulator lives exactly as long as the binding it describes and is
/// mutated only through [`submit`](Self::submit).
///
/// There is no removal operation. An origin that must retract its belief
/// (say, a branch proven unreachable) resubmits `Never`, which the union
/// drops from the summary.
///
/// Not synchronized: share one instance across threads only behind external
/// mutual exclusion.
pub struct TypeAccumulator<'types> {
    manager: &'types TypeManager<'types>,
    contributions: SmallVec<[Contribution<'types>; INLINE_CONTRIBUTIONS]>,
    combined: &'types Type<'types>,
}

impl<'types> TypeAccumulator<'types> {
    /// Creates an empty accumulator; its combined type starts as `Unknown`.
    pub fn new(manager: &'types TypeManager<'types>) -> Self {
        Self {
            manager,
            contributions: SmallVec::new(),
            combined: manager.unknown(),
        }
    }

    /// The current combined type.
    ///
    /// `Unknown` while no contribution has been submitted; once beliefs
    /// exist the result is their union, which is `Unknown` again only if a
    /// submitted belief is itself still unresolved.
    pub fn combined_type(&self) -> &'types Type<'types> {
        self.combined
    }

    /// The current contributions, in insertion order.
    ///
    /// Replacing an origin's type keeps its position; new origins append.
    pub fn contributions(&self) -> &[Contribution<'types>] {
        &self.contributions
    }

    pub fn len(&self) -> usize {
        self.contributions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contributions.is_empty()
    }

    /// Records `ty` as `origin`'s current belief and returns whether the
    /// combined type changed as a result.
    ///
    /// Resubmitting an origin's unchanged type always returns `false`, so a
    /// re-run pass that rediscovers the same facts never re-queues
    /// downstream work. Accepts any type value for any origin and cannot
    /// fail; the accumulator is never left partially updated.
    pub fn submit(&mut self, ty: &'types Type<'types>, origin: OriginId) -> bool {
        match self.contributions.iter().position(|c| c.origin == origin) {
            // Same origin, same belief: nothing can have changed. Keyed on
            // the entry's prior type, not the combined result, so a
            // replacement that collapses into an equal union still falls
            // through to the recombination below.
            Some(i) if self.contributions[i].ty == ty => return false,
            Some(i) => self.contributions[i].ty = ty,
            None => self.contributions.push(Contribution { origin, ty }),
        }

        let member_types: SmallVec<[&'types Type<'types>; INLINE_CONTRIBUTIONS]> =
            self.contributions.iter().map(|c| c.ty).collect();
        let combined = self.manager.union(&member_types);

        if combined == self.combined {
            return false;
        }
        trace!(origin = origin.0, %combined, "combined type changed");
        self.combined = combined;
        true
    }
}
