use crate::global;
use crate::tests::utils;
use crate::Namespace;
use crate::ResolveError;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::MutexGuard;
use std::sync::PoisonError;

// The namespace table is process-wide, so tests that touch it take turns.
fn serial() -> MutexGuard<'static, ()> {
    static SERIAL: Mutex<()> = Mutex::new(());
    SERIAL.lock().unwrap_or_else(PoisonError::into_inner)
}

#[test]
fn defined_namespaces_can_be_looked_up_and_removed() {
    let _serial = serial();
    global::reset();

    let defined = global::define_namespace(utils::metaphysics());
    let found = global::lookup_namespace("Metaphysics").unwrap();
    assert!(Arc::ptr_eq(&defined, &found));

    let removed = global::remove_namespace("Metaphysics").unwrap();
    assert!(Arc::ptr_eq(&defined, &removed));
    assert!(global::lookup_namespace("Metaphysics").is_none());
}

#[test]
fn resolves_namespaced_paths() {
    let _serial = serial();
    global::reset();
    global::define_namespace(utils::metaphysics());

    let artist = global::resolve_path("Metaphysics::Artist").unwrap();

    assert_eq!(artist.to_query_string(), utils::ARTIST_QUERY);
    assert!(global::lookup_namespace("Metaphysics").unwrap().is_loaded("Artist"));
}

#[test]
fn same_named_top_level_binding_does_not_shadow_namespaced_lookup() {
    let _serial = serial();
    global::reset();
    global::define_namespace(utils::metaphysics());
    // An unrelated top-level `Artist` with nothing in it.
    global::define_namespace(Namespace::builder("Artist").build().unwrap());

    let artist = global::resolve_path("Metaphysics::Artist").unwrap();

    assert_eq!(artist.qualified_name(), "Metaphysics__Artist");
    assert_eq!(artist.to_query_string(), utils::ARTIST_QUERY);
    global::reset();
}

#[test]
fn unknown_namespaces_and_bare_names_are_name_errors() {
    let _serial = serial();
    global::reset();

    let err = global::resolve_path("Nowhere::Artist").unwrap_err();
    assert!(matches!(
        &err,
        ResolveError::UndefinedConstant { name, .. } if name == "Nowhere",
    ));
    assert_eq!(err.to_string(), "uninitialized constant Nowhere");

    let err = global::resolve_path("Artist").unwrap_err();
    assert!(err.is_name_error());
}

#[test]
fn redefining_a_namespace_starts_with_an_empty_registry() {
    let _serial = serial();
    global::reset();
    global::define_namespace(utils::metaphysics());
    global::resolve_path("Metaphysics::Artist").unwrap();

    global::define_namespace(utils::metaphysics());

    let metaphysics = global::lookup_namespace("Metaphysics").unwrap();
    assert!(!metaphysics.is_loaded("Artist"));
    global::reset();
}
