mod client_utils;
mod errors;
mod generator;
pub mod google;
mod types;

pub use errors::*;
pub use generator::ContentGenerator;
pub use types::*;
