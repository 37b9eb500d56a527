use super::Type;
use super::manager::TypeManager;
use crate::ToString;
use bumpalo::Bump;
use pretty_assertions::assert_eq;

#[test]
fn test_interning_primitives() {
    let bump = Bump::new();
    let manager = TypeManager::new(&bump);

    let int_type = manager.int();
    let float_type = manager.float();

    assert!(core::ptr::eq(int_type, manager.int()));
    assert!(core::ptr::eq(float_type, manager.float()));
    assert!(core::ptr::eq(manager.bool(), manager.bool()));
    assert!(core::ptr::eq(manager.str(), manager.str()));
    assert!(core::ptr::eq(manager.unknown(), manager.unknown()));
    assert!(core::ptr::eq(manager.never(), manager.never()));
}

#[test]
fn test_interning_array() {
    let bump = Bump::new();
    let manager = TypeManager::new(&bump);

    let int_array = manager.array(manager.int());
    let same_int_array = manager.array(manager.int());
    assert!(core::ptr::eq(int_array, same_int_array));

    let float_array = manager.array(manager.float());
    assert!(!core::ptr::eq(int_array, float_array));

    // Nested arrays
    let nested = manager.array(int_array);
    let same_nested = manager.array(manager.array(manager.int()));
    assert!(core::ptr::eq(nested, same_nested));
}

#[test]
fn test_interning_map() {
    let bump = Bump::new();
    let manager = TypeManager::new(&bump);

    let str_to_int = manager.map(manager.str(), manager.int());
    assert!(core::ptr::eq(str_to_int, manager.map(manager.str(), manager.int())));
    assert!(!core::ptr::eq(str_to_int, manager.map(manager.int(), manager.str())));
}

#[test]
fn test_interning_union() {
    let bump = Bump::new();
    let manager = TypeManager::new(&bump);

    let int_or_str = manager.union(&[manager.int(), manager.str()]);
    let same = manager.union(&[manager.int(), manager.str()]);
    assert!(core::ptr::eq(int_or_str, same));
}

#[test]
fn test_union_singleton_is_identity() {
    let bump = Bump::new();
    let manager = TypeManager::new(&bump);

    let int_type = manager.int();
    assert!(core::ptr::eq(manager.union(&[int_type]), int_type));

    let array_type = manager.array(manager.str());
    assert!(core::ptr::eq(manager.union(&[array_type]), array_type));
}

#[test]
fn test_union_is_order_sensitive() {
    let bump = Bump::new();
    let manager = TypeManager::new(&bump);

    let int_or_str = manager.union(&[manager.int(), manager.str()]);
    let str_or_int = manager.union(&[manager.str(), manager.int()]);
    assert!(!core::ptr::eq(int_or_str, str_or_int));
    assert_ne!(int_or_str, str_or_int);

    match int_or_str {
        Type::Union(members) => {
            assert_eq!(members.len(), 2);
            assert!(core::ptr::eq(members[0], manager.int()));
            assert!(core::ptr::eq(members[1], manager.str()));
        }
        other => panic!("Expected Union, got {:?}", other),
    }
}

#[test]
fn test_union_deduplicates_keeping_first_occurrence() {
    let bump = Bump::new();
    let manager = TypeManager::new(&bump);

    let combined = manager.union(&[manager.int(), manager.str(), manager.int()]);
    assert_eq!(combined, manager.union(&[manager.int(), manager.str()]));

    // All duplicates collapse to the single member itself.
    let collapsed = manager.union(&[manager.int(), manager.int()]);
    assert!(core::ptr::eq(collapsed, manager.int()));
}

#[test]
fn test_union_flattens_nested_unions() {
    let bump = Bump::new();
    let manager = TypeManager::new(&bump);

    let int_or_str = manager.union(&[manager.int(), manager.str()]);
    let combined = manager.union(&[manager.bool(), int_or_str]);

    assert_eq!(
        combined,
        manager.union(&[manager.bool(), manager.int(), manager.str()])
    );

    // Flattening an arm that overlaps existing members deduplicates too.
    let overlapping = manager.union(&[manager.int(), int_or_str]);
    assert_eq!(overlapping, int_or_str);
}

#[test]
fn test_union_drops_never() {
    let bump = Bump::new();
    let manager = TypeManager::new(&bump);

    let combined = manager.union(&[manager.never(), manager.int(), manager.never()]);
    assert!(core::ptr::eq(combined, manager.int()));

    assert!(core::ptr::eq(
        manager.union(&[manager.never(), manager.never()]),
        manager.never()
    ));
    assert!(core::ptr::eq(manager.union(&[]), manager.never()));
}

#[test]
fn test_union_unknown_absorbs() {
    let bump = Bump::new();
    let manager = TypeManager::new(&bump);

    let combined = manager.union(&[manager.int(), manager.unknown(), manager.str()]);
    assert!(core::ptr::eq(combined, manager.unknown()));
}

#[test]
fn test_structural_equality_across_managers() {
    let bump1 = Bump::new();
    let bump2 = Bump::new();
    let mgr1 = TypeManager::new(&bump1);
    let mgr2 = TypeManager::new(&bump2);

    let a = mgr1.union(&[mgr1.array(mgr1.int()), mgr1.str()]);
    let b = mgr2.union(&[mgr2.array(mgr2.int()), mgr2.str()]);
    assert!(!core::ptr::eq(a, b));
    assert_eq!(a, b);
}

#[test]
fn test_display() {
    let bump = Bump::new();
    let manager = TypeManager::new(&bump);

    assert_eq!(manager.unknown().to_string(), "Unknown");
    assert_eq!(manager.never().to_string(), "Never");
    assert_eq!(manager.array(manager.int()).to_string(), "Array[Int]");
    assert_eq!(
        manager.map(manager.str(), manager.float()).to_string(),
        "Map[Str, Float]"
    );
    assert_eq!(
        manager
            .union(&[manager.int(), manager.str(), manager.array(manager.bool())])
            .to_string(),
        "Int | Str | Array[Bool]"
    );
}
