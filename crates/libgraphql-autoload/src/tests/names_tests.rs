use crate::names;
use proptest::prelude::*;

#[test]
fn converts_between_constant_and_file_stem_names() {
    assert_eq!(names::to_snake_case("Artist"), "artist");
    assert_eq!(names::to_snake_case("ArtistFragment"), "artist_fragment");
    assert_eq!(names::to_pascal_case("artist_fragment"), "ArtistFragment");
    assert_eq!(names::to_pascal_case("artwork"), "Artwork");
}

#[test]
fn recognizes_constant_names() {
    assert!(names::is_constant_name("Artist"));
    assert!(names::is_constant_name("Artist2"));
    assert!(!names::is_constant_name("artist"));
    assert!(!names::is_constant_name("Artist_Fragment"));
    assert!(!names::is_constant_name("Artist::Show"));
    assert!(!names::is_constant_name(""));
}

#[test]
fn recognizes_method_names() {
    assert!(names::is_method_name("artist"));
    assert!(names::is_method_name("artist_fragment"));
    assert!(!names::is_method_name("Artist"));
    assert!(!names::is_method_name("_artist"));
    assert!(!names::is_method_name("artist?"));
    assert!(!names::is_method_name(""));
}

#[test]
fn recognizes_fragment_names() {
    assert!(names::is_fragment_constant_name("ArtistFragment"));
    assert!(!names::is_fragment_constant_name("Artist"));
    assert!(names::is_fragment_method_name("artist_fragment"));
    assert!(names::is_fragment_method_name("fragment"));
    assert!(!names::is_fragment_method_name("fragments"));
}

#[test]
fn qualified_names_join_namespace_and_name() {
    assert_eq!(
        names::qualified_name("Metaphysics", "ArtistFragment"),
        "Metaphysics__ArtistFragment",
    );
}

#[test]
fn lossy_method_names_map_onto_no_constant() {
    assert_eq!(
        names::constant_name_for_method("artist").as_deref(),
        Some("Artist"),
    );
    // `ArtistShow` would look for `artist_show`, not `artist__show`.
    assert_eq!(names::constant_name_for_method("artist__show"), None);
    assert_eq!(names::constant_name_for_method("artist_"), None);
}

proptest! {
    #[test]
    fn snake_case_method_names_survive_the_constant_round_trip(
        method_name in "[a-z]{2,8}(_[a-z]{2,8}){0,3}"
    ) {
        let constant_name = names::constant_name_for_method(&method_name);
        prop_assert!(constant_name.is_some());
        let constant_name = constant_name.unwrap();
        prop_assert!(names::is_constant_name(&constant_name));
        prop_assert_eq!(names::to_snake_case(&constant_name), method_name);
    }
}
