use crate::{String, Vec, format};
use core::fmt::Display;

/// A structural type value.
///
/// Types are allocated in a `bumpalo` arena and interned by the
/// [`TypeManager`](crate::types::manager::TypeManager), so two handles from
/// the same manager are pointer-equal exactly when they are structurally
/// equal. Everything in this crate still compares types through the derived
/// structural equality, so the contracts hold even across managers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[repr(C, u8)]
pub enum Type<'a> {
    /// No information yet. A binding with no contributions has this type.
    Unknown = 0,
    /// The empty type. A union drops `Never` arms, so resubmitting it for
    /// an origin retracts that origin's earlier belief.
    Never = 1,

    // Primitives.
    Int = 2,
    Float = 3,
    Bool = 4,
    Str = 5,

    // Collections.
    Array(&'a Type<'a>) = 6,
    Map(&'a Type<'a>, &'a Type<'a>) = 7,

    // Members are kept in first-occurrence order, never sorted.
    // Never nested, never Never/Unknown, never duplicated, length >= 2.
    Union(&'a [&'a Type<'a>]) = 8,
}

impl Type<'_> {
    pub fn is_unknown(&self) -> bool {
        matches!(self, Type::Unknown)
    }

    pub fn is_never(&self) -> bool {
        matches!(self, Type::Never)
    }
}

impl Display for Type<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Type::Unknown => write!(f, "Unknown"),
            Type::Never => write!(f, "Never"),
            Type::Int => write!(f, "Int"),
            Type::Float => write!(f, "Float"),
            Type::Bool => write!(f, "Bool"),
            Type::Str => write!(f, "Str"),
            Type::Array(elem_ty) => write!(f, "Array[{}]", elem_ty),
            Type::Map(key_ty, val_ty) => write!(f, "Map[{}, {}]", key_ty, val_ty),
            Type::Union(members) => {
                let member_strs: Vec<String> = members.iter().map(|ty| format!("{}", ty)).collect();
                write!(f, "{}", member_strs.join(" | "))
            }
        }
    }
}
