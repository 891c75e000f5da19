use crate::ast;
use crate::DocumentRegistry;
use crate::ResolvedDocument;
use std::sync::Arc;

fn document(name: &str) -> Arc<ResolvedDocument> {
    let ast_doc = ast::parse("{ artist { name } }").unwrap();
    Arc::new(
        ResolvedDocument::from_ast("Metaphysics", name, "inline", ast_doc)
            .unwrap(),
    )
}

#[test]
fn empty_registry_has_no_names() {
    let registry = DocumentRegistry::new();

    assert!(registry.is_empty());
    assert!(registry.get("Artist").is_none());
}

#[test]
fn caches_successful_loads() {
    let registry = DocumentRegistry::new();
    let mut loads = 0;

    let first = registry.get_or_try_insert_with::<()>("Artist", || {
        loads += 1;
        Ok(document("Artist"))
    }).unwrap();
    let second = registry.get_or_try_insert_with::<()>("Artist", || {
        loads += 1;
        Ok(document("Artist"))
    }).unwrap();

    assert_eq!(loads, 1);
    assert!(Arc::ptr_eq(&first, &second));
    assert!(registry.contains("Artist"));
    assert_eq!(registry.names(), vec!["Artist"]);
}

#[test]
fn failed_loads_leave_no_entry() {
    let registry = DocumentRegistry::new();

    let result = registry.get_or_try_insert_with("Artist", || Err("boom"));

    assert_eq!(result.unwrap_err(), "boom");
    assert!(!registry.contains("Artist"));
    assert!(registry.names().is_empty());
    assert_eq!(registry.len(), 0);
}

#[test]
fn reset_clears_every_entry() {
    let registry = DocumentRegistry::new();
    registry.get_or_try_insert_with::<()>("Artist", || Ok(document("Artist"))).unwrap();
    registry.get_or_try_insert_with::<()>("Artwork", || Ok(document("Artwork"))).unwrap();
    assert_eq!(registry.len(), 2);

    registry.reset();

    assert!(registry.is_empty());
}
