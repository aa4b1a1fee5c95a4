pub mod surface;
pub mod utils;
