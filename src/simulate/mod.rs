pub mod generator;
pub mod profiles;
pub mod rng;

pub use generator::LoadSimulator;
pub use profiles::LoadProfile;
pub use rng::{Midpoint, RandomSource, ThreadRandom};
