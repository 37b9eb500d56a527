use crate::{Vec, types::types::Type};
use bumpalo::Bump;
use core::cell::{Ref, RefCell};
use hashbrown::{DefaultHashBuilder, HashMap};

pub struct TypeManager<'a> {
    // Arena holding all types from this TypeManager.
    arena: &'a Bump,
    interned: RefCell<HashMap<Type<'a>, &'a Type<'a>, DefaultHashBuilder, &'a Bump>>,
}

impl<'a> TypeManager<'a> {
    pub fn new(arena: &'a Bump) -> &'a Self {
        arena.alloc(Self {
            arena,
            interned: RefCell::new(HashMap::new_in(arena)),
        })
    }

    fn intern_map(&self) -> Ref<'_, HashMap<Type<'a>, &'a Type<'a>, DefaultHashBuilder, &'a Bump>> {
        self.interned.borrow()
    }

    fn intern(&self, ty: Type<'a>) -> &'a Type<'a> {
        if let Some(&interned_ty) = self.intern_map().get(&ty) {
            return interned_ty;
        }
        let arena_ty: &'a Type<'a> = self.arena.alloc(ty.clone());
        self.interned.borrow_mut().insert(ty, arena_ty);
        arena_ty
    }

    // Factory methods for types.
    pub fn unknown(&self) -> &'a Type<'a> {
        self.intern(Type::Unknown)
    }
    pub fn never(&self) -> &'a Type<'a> {
        self.intern(Type::Never)
    }
    pub fn int(&self) -> &'a Type<'a> {
        self.intern(Type::Int)
    }
    pub fn float(&self) -> &'a Type<'a> {
        self.intern(Type::Float)
    }
    pub fn bool(&self) -> &'a Type<'a> {
        self.intern(Type::Bool)
    }
    pub fn str(&self) -> &'a Type<'a> {
        self.intern(Type::Str)
    }
    pub fn array(&self, elem_ty: &'a Type<'a>) -> &'a Type<'a> {
        self.intern(Type::Array(elem_ty))
    }
    pub fn map(&self, key_ty: &'a Type<'a>, val_ty: &'a Type<'a>) -> &'a Type<'a> {
        self.intern(Type::Map(key_ty, val_ty))
    }

    /// Combines an ordered sequence of types into one summary type.
    ///
    /// Union members of the inputs are flattened in place and `Never` arms
    /// are dropped; duplicates are eliminated by structural equality, keeping
    /// the first occurrence. The surviving members stay in first-occurrence
    /// order, so the result is deterministic but order-sensitive:
    /// `union([Int, Str])` and `union([Str, Int])` are distinct types.
    ///
    /// A single surviving member is returned unchanged, an `Unknown` member
    /// makes the whole result `Unknown`, and no survivors (all arms `Never`,
    /// or an empty input) yields `Never`.
    pub fn union(&self, members: &[&'a Type<'a>]) -> &'a Type<'a> {
        let mut flat: Vec<&'a Type<'a>> = Vec::with_capacity(members.len());
        for &member in members {
            match member {
                Type::Unknown => return self.unknown(),
                Type::Never => {}
                // Nested unions hold no Unknown/Never/Union members, so
                // their arms only need the duplicate check.
                Type::Union(inner) => {
                    for &inner_member in *inner {
                        if !flat.contains(&inner_member) {
                            flat.push(inner_member);
                        }
                    }
                }
                _ => {
                    if !flat.contains(&member) {
                        flat.push(member);
                    }
                }
            }
        }

        match flat.len() {
            0 => self.never(),
            1 => flat[0],
            _ => {
                let arena_members = self.arena.alloc_slice_copy(&flat);
                self.intern(Type::Union(arena_members))
            }
        }
    }
}
