pub mod classifiers;
pub mod clustering;
pub mod config;
pub mod evaluation;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;
