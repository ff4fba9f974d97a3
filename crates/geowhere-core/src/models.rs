pub mod names;
pub mod region;
pub mod set;

pub use names::{continents, providers};
pub use region::{Code, Region, Status};
pub use set::{eq_fold, RegionSet};
