use crate::{AspectRatio, GenerationResponse, GenerationResult, Tone};

/// The seam between the orchestration layer and a concrete generation
/// backend. One implementation talks to the real Google APIs; the mock in
/// [`crate::sdk_test`] scripts responses for tests.
#[async_trait::async_trait]
pub trait ContentGenerator: Send + Sync {
    fn provider(&self) -> &'static str;

    /// Generate the post text and paired image prompt for all three
    /// platforms in a single structured-output call.
    async fn generate_post_content(
        &self,
        idea: &str,
        tone: Tone,
    ) -> GenerationResult<GenerationResponse>;

    /// Generate exactly one image for a prompt and return it as a directly
    /// displayable `data:` URI.
    async fn generate_image(
        &self,
        prompt: &str,
        aspect_ratio: AspectRatio,
    ) -> GenerationResult<String>;
}
