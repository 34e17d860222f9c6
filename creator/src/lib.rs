mod errors;
mod export;
mod orchestrator;
mod store;

pub use errors::CreatorError;
pub use export::{
    clipboard_text, decode_image_data_uri, image_file_name, save_image, DecodedImage, SAMPLE_IDEAS,
};
pub use orchestrator::{Orchestrator, IMAGE_FAILURE_MESSAGE, TEXT_FAILURE_MESSAGE};
pub use store::{PlatformPatch, PlatformResult, ResultStore};
