pub mod dummies;

pub use dummies::{measurements, two_blobs, votes};
