use super::api::{
    Candidate, Content, GenerateContentConfig, GenerateContentParameters, GenerateContentResponse,
    Part as GooglePart, PredictConfig, PredictInstance, PredictParameters, PredictResponse,
};
use crate::{
    client_utils, AspectRatio, ContentGenerator, GenerationError, GenerationResponse,
    GenerationResult, Tone,
};
use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue},
    Client,
};
use serde_json::{json, Value};
use std::collections::HashMap;
use tracing::debug;

const PROVIDER: &str = "google";

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_TEXT_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_IMAGE_MODEL: &str = "imagen-4.0-generate-001";

const SYSTEM_INSTRUCTION: &str = "You are a world-class social media strategist and content \
creator. Your goal is to create cohesive content where the text and visuals are perfectly \
aligned.";

/// Generation client backed by the Google APIs: Gemini `generateContent` for
/// the structured post content and Imagen `predict` for the visuals.
pub struct GoogleGenerator {
    text_model: String,
    image_model: String,
    api_key: String,
    base_url: String,
    client: Client,
    headers: HashMap<String, String>,
}

#[derive(Clone, Default)]
pub struct GoogleGeneratorOptions {
    pub api_key: String,
    pub text_model: Option<String>,
    pub image_model: Option<String>,
    pub base_url: Option<String>,
    pub headers: Option<HashMap<String, String>>,
    pub client: Option<Client>,
}

impl GoogleGenerator {
    #[must_use]
    pub fn new(options: GoogleGeneratorOptions) -> Self {
        let GoogleGeneratorOptions {
            api_key,
            text_model,
            image_model,
            base_url,
            headers,
            client,
        } = options;

        let base_url = base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let client = client.unwrap_or_else(Client::new);
        let headers = headers.unwrap_or_default();

        Self {
            text_model: text_model.unwrap_or_else(|| DEFAULT_TEXT_MODEL.to_string()),
            image_model: image_model.unwrap_or_else(|| DEFAULT_IMAGE_MODEL.to_string()),
            api_key,
            base_url,
            client,
            headers,
        }
    }

    fn request_headers(&self) -> GenerationResult<HeaderMap> {
        let mut headers = HeaderMap::new();

        for (key, value) in &self.headers {
            let header_name = HeaderName::from_bytes(key.as_bytes()).map_err(|error| {
                GenerationError::InvalidInput(format!("Invalid Google header name '{key}': {error}"))
            })?;
            let header_value = HeaderValue::from_str(value).map_err(|error| {
                GenerationError::InvalidInput(format!(
                    "Invalid Google header value for '{key}': {error}"
                ))
            })?;
            headers.insert(header_name, header_value);
        }

        Ok(headers)
    }
}

#[async_trait::async_trait]
impl ContentGenerator for GoogleGenerator {
    fn provider(&self) -> &'static str {
        PROVIDER
    }

    async fn generate_post_content(
        &self,
        idea: &str,
        tone: Tone,
    ) -> GenerationResult<GenerationResponse> {
        let params = build_content_request(idea, tone);

        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.text_model, self.api_key
        );

        debug!(provider = PROVIDER, model = %self.text_model, %tone, "generating post content");
        let headers = self.request_headers()?;
        let response: GenerateContentResponse =
            client_utils::send_json(&self.client, &url, &params, headers).await?;

        parse_content_response(response)
    }

    async fn generate_image(
        &self,
        prompt: &str,
        aspect_ratio: AspectRatio,
    ) -> GenerationResult<String> {
        let params = build_image_request(prompt, aspect_ratio);

        let url = format!(
            "{}/models/{}:predict?key={}",
            self.base_url, self.image_model, self.api_key
        );

        debug!(provider = PROVIDER, model = %self.image_model, %aspect_ratio, "generating image");
        let headers = self.request_headers()?;
        let response: PredictResponse =
            client_utils::send_json(&self.client, &url, &params, headers).await?;

        parse_image_response(response)
    }
}

/// The per-platform formatting rules and the grounding contract tying each
/// image prompt to the concrete subject matter of its post text. The
/// grounding rules are a prompt-engineering contract, not machine-checkable;
/// they live in the instruction text verbatim.
fn build_user_prompt(idea: &str, tone: Tone) -> String {
    format!(
        r#"Act as an expert social media manager.
I have an idea: "{idea}".
Please generate 3 distinct social media posts for this idea using a "{tone}" tone.

1. LinkedIn: Professional, insightful, structure with paragraphs.
2. Twitter/X: Short, punchy, under 280 chars, 1-2 hashtags max.
3. Instagram: Visual-first, engaging caption, include 10-15 relevant hashtags.

For EACH platform, write a specific, high-quality image generation prompt that is STRICTLY related to the content of the post you just wrote.
- CRITICAL: The image MUST visually represent the specific nouns, verbs, or core metaphors used in your generated post text.
- Do NOT generate generic "social media" images.
- If the post is about "coffee", the image MUST show coffee.
- If the post is about "coding", the image MUST show code or a computer.
- The LinkedIn image prompt should be professional (e.g. modern office, specific industry equipment).
- The Twitter image prompt should be bold and high-contrast.
- The Instagram image prompt should be aesthetic and photography-style.

Ensure the image prompts are descriptive, visual, and optimized for a text-to-image model."#
    )
}

/// JSON schema for the structured response: a `postText`/`imagePrompt` pair
/// is required for every platform.
fn build_response_schema() -> Value {
    let platform_schema = |post_description: &str, prompt_description: &str| {
        json!({
            "type": "object",
            "properties": {
                "postText": { "type": "string", "description": post_description },
                "imagePrompt": { "type": "string", "description": prompt_description }
            },
            "required": ["postText", "imagePrompt"]
        })
    };

    json!({
        "type": "object",
        "properties": {
            "linkedin": platform_schema(
                "The actual post content for LinkedIn.",
                "A highly specific image generation prompt based directly on the content of \
                 postText. If postText mentions specific objects (e.g., coffee, laptop, \
                 sneakers), include them. If abstract, use a matching visual metaphor. \
                 Professional style.",
            ),
            "twitter": platform_schema(
                "The tweet content. Short, punchy, with hashtags.",
                "A specific image generation prompt that visually depicts the subject matter \
                 of the tweet. Bold, high-contrast style.",
            ),
            "instagram": platform_schema(
                "The Instagram caption with a block of relevant hashtags.",
                "A specific image generation prompt that visually depicts the subject matter \
                 of the caption. Aesthetic, photography-style.",
            )
        },
        "required": ["linkedin", "twitter", "instagram"]
    })
}

fn build_content_request(idea: &str, tone: Tone) -> GenerateContentParameters {
    GenerateContentParameters {
        contents: vec![Content {
            role: Some("user".to_string()),
            parts: Some(vec![GooglePart {
                text: Some(build_user_prompt(idea, tone)),
            }]),
        }],
        system_instruction: Some(Content {
            role: Some("system".to_string()),
            parts: Some(vec![GooglePart {
                text: Some(SYSTEM_INSTRUCTION.to_string()),
            }]),
        }),
        generation_config: Some(GenerateContentConfig {
            response_mime_type: Some("application/json".to_string()),
            response_json_schema: Some(build_response_schema()),
        }),
    }
}

fn parse_content_response(
    response: GenerateContentResponse,
) -> GenerationResult<GenerationResponse> {
    if let Some(block_reason) = response
        .prompt_feedback
        .and_then(|feedback| feedback.block_reason)
    {
        return Err(GenerationError::Refusal(format!(
            "Prompt blocked: {block_reason}"
        )));
    }

    let candidate: Candidate = response
        .candidates
        .and_then(|c| c.into_iter().next())
        .ok_or_else(|| {
            GenerationError::Invariant(PROVIDER, "No candidate in response".to_string())
        })?;

    if let Some(reason) = candidate.finish_reason.filter(|r| r.is_safety_block()) {
        return Err(GenerationError::Refusal(format!(
            "Generation stopped by content filter ({reason:?})"
        )));
    }

    let text = candidate
        .content
        .and_then(|content| content.parts)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|part| part.text)
        .collect::<String>();

    if text.is_empty() {
        return Err(GenerationError::Invariant(
            PROVIDER,
            "No content generated".to_string(),
        ));
    }

    serde_json::from_str(&text).map_err(|error| {
        GenerationError::Invariant(
            PROVIDER,
            format!("Response did not match the post content schema: {error}"),
        )
    })
}

fn build_image_request(prompt: &str, aspect_ratio: AspectRatio) -> PredictParameters {
    PredictParameters {
        instances: vec![PredictInstance {
            prompt: prompt.to_string(),
        }],
        parameters: Some(PredictConfig {
            sample_count: Some(1),
            aspect_ratio: Some(aspect_ratio.as_str().to_string()),
            output_mime_type: Some("image/jpeg".to_string()),
        }),
    }
}

/// Use only the first prediction; wrap its bytes in a displayable data URI.
fn parse_image_response(response: PredictResponse) -> GenerationResult<String> {
    let prediction = response
        .predictions
        .and_then(|p| p.into_iter().next())
        .ok_or_else(|| {
            GenerationError::Invariant(PROVIDER, "No image generated".to_string())
        })?;

    if let Some(reason) = prediction.rai_filtered_reason {
        return Err(GenerationError::Refusal(format!(
            "Image blocked by content filter: {reason}"
        )));
    }

    let bytes = prediction.bytes_base64_encoded.ok_or_else(|| {
        GenerationError::Invariant(PROVIDER, "Prediction missing image bytes".to_string())
    })?;
    let mime_type = prediction
        .mime_type
        .unwrap_or_else(|| "image/jpeg".to_string());

    Ok(format!("data:{mime_type};base64,{bytes}"))
}
