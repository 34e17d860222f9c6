pub mod api;
mod model;

pub use model::{GoogleGenerator, GoogleGeneratorOptions};
