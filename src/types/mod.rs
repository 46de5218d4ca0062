pub mod series;
pub mod signal;

pub use series::*;
pub use signal::*;
