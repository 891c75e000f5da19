use crate::tests::utils;
use crate::Namespace;
use crate::NamespaceBuildError;

#[test]
fn discovers_graphql_files_in_file_name_order() {
    let metaphysics = utils::metaphysics();

    assert_eq!(metaphysics.graphql_file_paths(), vec![
        "metaphysics/artist.graphql",
        "metaphysics/artist_fragment.graphql",
        "metaphysics/artwork.graphql",
        "metaphysics/nested/show.graphql",
    ]);
}

#[test]
fn explicit_paths_come_before_discovered_ones() {
    let metaphysics = Namespace::builder("Metaphysics")
        .root_dir(utils::get_fixtures_dir())
        .add_graphql_file_path("metaphysics/removed.graphql")
        .add_graphql_file_path("metaphysics/artwork.graphql")
        .discover_graphql_files()
        .build()
        .unwrap();

    let paths = metaphysics.graphql_file_paths();
    assert_eq!(paths[0], "metaphysics/removed.graphql");
    assert_eq!(paths[1], "metaphysics/artwork.graphql");
    assert_eq!(paths.len(), 5);
}

#[test]
fn without_discovery_only_explicit_paths_are_known() {
    let metaphysics = Namespace::builder("Metaphysics")
        .root_dir(utils::get_fixtures_dir())
        .add_graphql_file_paths(["metaphysics/artist.graphql"])
        .build()
        .unwrap();

    assert!(metaphysics.resolve_by_name("Artist").is_ok());
    assert!(metaphysics.resolve_by_name("Artwork").unwrap_err().is_name_error());
}

#[test]
fn discovery_only_picks_configured_extensions() {
    let metaphysics = Namespace::builder("Metaphysics")
        .root_dir(utils::get_fixtures_dir())
        .graphql_file_exts([".md"])
        .discover_graphql_files()
        .build()
        .unwrap();

    assert_eq!(metaphysics.graphql_file_paths(), vec!["metaphysics/README.md"]);
    assert_eq!(metaphysics.path_matcher().graphql_file_exts(), ["md"]);
}

#[test]
fn rejects_invalid_namespace_names() {
    let errors = Namespace::builder("metaphysics").build().unwrap_err();

    assert_eq!(errors.len(), 1);
    assert!(matches!(
        &errors[0],
        NamespaceBuildError::InvalidNamespaceName(name) if name == "metaphysics",
    ));
}

#[test]
fn rejects_empty_extension_list() {
    let errors = Namespace::builder("Metaphysics")
        .graphql_file_exts(Vec::<String>::new())
        .build()
        .unwrap_err();

    assert!(matches!(errors[0], NamespaceBuildError::NoGraphQLFileExtensions));
}

#[test]
fn reports_missing_namespace_directory_during_discovery() {
    let errors = Namespace::builder("DoesNotExist")
        .root_dir(utils::get_fixtures_dir())
        .discover_graphql_files()
        .build()
        .unwrap_err();

    assert!(matches!(errors[0], NamespaceBuildError::DirectoryWalk { .. }));
}
