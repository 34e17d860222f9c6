use socialsync_creator::{
    Orchestrator, PlatformResult, IMAGE_FAILURE_MESSAGE, TEXT_FAILURE_MESSAGE,
};
use socialsync_sdk::{
    sdk_test::MockGenerator, AspectRatio, ContentGenerator, GeneratedPostContent, GenerationError,
    GenerationResponse, GenerationResult, Platform, Tone,
};
use std::sync::Arc;
use tokio::sync::Notify;

fn sample_content() -> GenerationResponse {
    GenerationResponse {
        linkedin: GeneratedPostContent {
            post_text: "Announcing our eco-friendly coffee cup line.".to_string(),
            image_prompt: "A reusable coffee cup on a modern office desk".to_string(),
        },
        twitter: GeneratedPostContent {
            post_text: "Eco cups are here! #sustainability".to_string(),
            image_prompt: "Bold high-contrast shot of a coffee cup".to_string(),
        },
        instagram: GeneratedPostContent {
            post_text: "Sip sustainably \u{2615} #eco #coffee".to_string(),
            image_prompt: "Aesthetic photograph of a coffee cup in morning light".to_string(),
        },
    }
}

fn data_uri(tag: &str) -> String {
    format!("data:image/jpeg;base64,{tag}")
}

/// Generator whose text call parks until released, to observe mid-run state.
struct ParkedGenerator {
    release: Notify,
}

impl ParkedGenerator {
    fn new() -> Self {
        Self {
            release: Notify::new(),
        }
    }
}

#[async_trait::async_trait]
impl ContentGenerator for ParkedGenerator {
    fn provider(&self) -> &'static str {
        "parked"
    }

    async fn generate_post_content(
        &self,
        _idea: &str,
        _tone: Tone,
    ) -> GenerationResult<GenerationResponse> {
        self.release.notified().await;
        Err(GenerationError::Invariant("parked", "released".to_string()))
    }

    async fn generate_image(
        &self,
        _prompt: &str,
        _aspect_ratio: AspectRatio,
    ) -> GenerationResult<String> {
        unreachable!("text call never succeeds")
    }
}

#[tokio::test]
async fn submitting_marks_all_platforms_loading_before_any_response() {
    let generator = Arc::new(ParkedGenerator::new());
    let orchestrator = Arc::new(Orchestrator::new(generator.clone()));

    let handle = {
        let orchestrator = orchestrator.clone();
        tokio::spawn(async move { orchestrator.run("A new idea", Tone::Professional).await })
    };

    // Let the run reach the parked text call.
    for _ in 0..10 {
        tokio::task::yield_now().await;
    }

    assert!(orchestrator.is_running());
    for result in orchestrator.store().snapshot() {
        assert!(result.is_loading_text, "{} not loading text", result.platform);
        assert!(result.is_loading_image, "{} not loading image", result.platform);
        assert!(result.text.is_none());
        assert!(result.error.is_none());
    }

    // Re-submission is rejected while the run is in flight.
    assert!(matches!(
        orchestrator.run("Another idea", Tone::Witty).await,
        Err(socialsync_creator::CreatorError::RunInProgress)
    ));

    generator.release.notify_one();
    handle.await.unwrap().unwrap();

    assert!(!orchestrator.is_running());
    for result in orchestrator.store().snapshot() {
        assert!(!result.is_loading_text);
        assert!(!result.is_loading_image);
        assert_eq!(result.error.as_deref(), Some(TEXT_FAILURE_MESSAGE));
    }
}

#[tokio::test]
async fn text_failure_fails_all_platforms_and_skips_image_calls() {
    let generator = Arc::new(MockGenerator::new());
    generator.enqueue_content(GenerationError::Invariant("mock", "boom".to_string()));

    let orchestrator = Orchestrator::new(generator.clone());
    orchestrator
        .run("Launching a new eco-friendly coffee cup line", Tone::Professional)
        .await
        .unwrap();

    for result in orchestrator.store().snapshot() {
        assert!(!result.is_loading_text);
        assert!(!result.is_loading_image);
        assert_eq!(result.error.as_deref(), Some(TEXT_FAILURE_MESSAGE));
        assert!(result.text.is_none());
        assert!(result.image_url.is_none());
    }
    assert!(generator.tracked_image_inputs().is_empty());
}

#[tokio::test]
async fn completed_run_populates_every_platform() {
    let generator = Arc::new(MockGenerator::new());
    generator.enqueue_content(sample_content());
    generator.enqueue_image(data_uri("linkedin"));
    generator.enqueue_image(data_uri("twitter"));
    generator.enqueue_image(data_uri("instagram"));

    let orchestrator = Orchestrator::new(generator.clone());
    let idea = "Launching a new eco-friendly coffee cup line";
    orchestrator.run(idea, Tone::Professional).await.unwrap();

    let content = sample_content();
    for result in orchestrator.store().snapshot() {
        let expected = content.get(result.platform);
        assert_eq!(result.text.as_deref(), Some(expected.post_text.as_str()));
        assert_eq!(
            result.image_prompt.as_deref(),
            Some(expected.image_prompt.as_str())
        );
        assert!(!result.is_loading_text);
        assert!(!result.is_loading_image);
        assert!(result.error.is_none());
        assert!(result
            .image_url
            .as_deref()
            .unwrap()
            .starts_with("data:image/jpeg;base64,"));
    }

    assert_eq!(
        generator.tracked_content_inputs(),
        vec![(idea.to_string(), Tone::Professional)]
    );
    // The fan-out carries each platform's own prompt at its fixed ratio.
    assert_eq!(
        generator.tracked_image_inputs(),
        vec![
            (
                content.linkedin.image_prompt.clone(),
                AspectRatio::Landscape16x9
            ),
            (
                content.twitter.image_prompt.clone(),
                AspectRatio::Landscape16x9
            ),
            (
                content.instagram.image_prompt.clone(),
                AspectRatio::Portrait3x4
            ),
        ]
    );
}

#[tokio::test]
async fn image_failure_is_isolated_to_its_own_platform() {
    let generator = Arc::new(MockGenerator::new());
    generator.enqueue_content(sample_content());
    generator.enqueue_image(data_uri("linkedin"));
    generator.enqueue_image(data_uri("twitter"));
    generator.enqueue_image(GenerationError::Refusal(
        "Image blocked by content filter: person_generation".to_string(),
    ));

    let orchestrator = Orchestrator::new(generator);
    orchestrator
        .run("Launching a new eco-friendly coffee cup line", Tone::Professional)
        .await
        .unwrap();

    for platform in [Platform::LinkedIn, Platform::Twitter] {
        let result = orchestrator.store().get(platform);
        assert!(result.image_url.is_some(), "{platform} should have an image");
        assert!(result.error.is_none());
        assert!(!result.is_loading_image);
    }

    let instagram = orchestrator.store().get(Platform::Instagram);
    assert_eq!(instagram.error.as_deref(), Some(IMAGE_FAILURE_MESSAGE));
    assert!(instagram.image_url.is_none());
    assert!(!instagram.is_loading_image);
    // Text from the successful first stage survives the image failure.
    assert!(instagram.text.is_some());
}

#[tokio::test]
async fn resubmission_fully_replaces_previous_results() {
    let generator = Arc::new(MockGenerator::new());
    generator.enqueue_content(GenerationError::Invariant("mock", "boom".to_string()));

    let orchestrator = Orchestrator::new(generator.clone());
    orchestrator.run("First idea", Tone::Urgent).await.unwrap();
    assert!(orchestrator
        .store()
        .get(Platform::LinkedIn)
        .error
        .is_some());

    generator.enqueue_content(sample_content());
    generator.enqueue_image(data_uri("linkedin"));
    generator.enqueue_image(data_uri("twitter"));
    generator.enqueue_image(data_uri("instagram"));
    orchestrator.run("Second idea", Tone::Empathetic).await.unwrap();

    for result in orchestrator.store().snapshot() {
        assert!(result.error.is_none(), "stale error leaked into new run");
        assert!(result.text.is_some());
        assert!(result.image_url.is_some());
    }
}

#[tokio::test]
async fn blank_ideas_are_rejected_without_touching_the_store() {
    let generator = Arc::new(MockGenerator::new());
    let orchestrator = Orchestrator::new(generator.clone());

    for idea in ["", "   ", "\n\t"] {
        assert!(matches!(
            orchestrator.run(idea, Tone::Professional).await,
            Err(socialsync_creator::CreatorError::EmptyIdea)
        ));
    }

    for platform in Platform::ALL {
        assert_eq!(
            orchestrator.store().get(platform),
            PlatformResult::idle(platform)
        );
    }
    assert!(generator.tracked_content_inputs().is_empty());
}
