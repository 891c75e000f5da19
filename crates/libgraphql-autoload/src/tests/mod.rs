mod global_tests;
mod names_tests;
mod namespace_builder_tests;
mod registry_tests;
mod utils;
