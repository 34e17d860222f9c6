use crate::{CreatorError, PlatformPatch, PlatformResult, ResultStore};
use socialsync_sdk::{ContentGenerator, Platform, Tone};
use std::sync::{
    atomic::{AtomicBool, AtomicU64, Ordering},
    Arc,
};
use tracing::warn;

/// Uniform error shown on every platform when the text call fails.
pub const TEXT_FAILURE_MESSAGE: &str = "Failed to generate content.";
/// Error shown on a single platform when its image call fails.
pub const IMAGE_FAILURE_MESSAGE: &str = "Image generation failed. Likely safety filter.";

/// Coordinates one run of the two-stage pipeline: a single structured text
/// call whose result fans out into three independent image calls, with the
/// [`ResultStore`] updated incrementally as each stage resolves.
///
/// The orchestrator is the store's only writer. One run at a time: a submit
/// while a run is in flight is rejected, and the in-flight run always
/// resolves to completion.
pub struct Orchestrator {
    generator: Arc<dyn ContentGenerator>,
    store: Arc<ResultStore>,
    running: AtomicBool,
    run_seq: AtomicU64,
}

impl Orchestrator {
    #[must_use]
    pub fn new(generator: Arc<dyn ContentGenerator>) -> Self {
        Self {
            generator,
            store: Arc::new(ResultStore::new()),
            running: AtomicBool::new(false),
            run_seq: AtomicU64::new(0),
        }
    }

    /// Read-only view of the per-platform results.
    #[must_use]
    pub fn store(&self) -> &ResultStore {
        &self.store
    }

    /// Whether a run is currently in flight. The presentation layer uses
    /// this to disable re-submission.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Execute one full run. Returns `Ok(())` once every platform has
    /// resolved, regardless of the per-platform success/failure mix;
    /// generation failures land in the store, not in the return value.
    ///
    /// Rejected submissions (`EmptyIdea`, `RunInProgress`) leave the store
    /// untouched.
    pub async fn run(&self, idea: &str, tone: Tone) -> Result<(), CreatorError> {
        let idea = idea.trim();
        if idea.is_empty() {
            return Err(CreatorError::EmptyIdea);
        }
        if self.running.swap(true, Ordering::SeqCst) {
            return Err(CreatorError::RunInProgress);
        }

        let run = self.run_seq.fetch_add(1, Ordering::SeqCst) + 1;
        self.store
            .set_all(run, Platform::ALL.map(PlatformResult::loading));

        self.drive(run, idea, tone).await;

        self.running.store(false, Ordering::SeqCst);
        Ok(())
    }

    async fn drive(&self, run: u64, idea: &str, tone: Tone) {
        let content = match self.generator.generate_post_content(idea, tone).await {
            Ok(content) => content,
            Err(error) => {
                // Critical-path failure: no image call is made.
                warn!(provider = self.generator.provider(), %error, "text generation failed");
                for platform in Platform::ALL {
                    self.store.patch(
                        run,
                        platform,
                        PlatformPatch::Failed {
                            message: TEXT_FAILURE_MESSAGE.to_string(),
                        },
                    );
                }
                return;
            }
        };

        for platform in Platform::ALL {
            let generated = content.get(platform);
            self.store.patch(
                run,
                platform,
                PlatformPatch::TextReady {
                    text: generated.post_text.clone(),
                    image_prompt: generated.image_prompt.clone(),
                },
            );
        }

        // Independently-awaited, independently-caught fan-out: each future
        // patches only its own platform, so one rejection never aborts or
        // delays the siblings.
        let image_jobs = Platform::ALL.map(|platform| {
            let prompt = content.get(platform).image_prompt.clone();
            async move {
                match self
                    .generator
                    .generate_image(&prompt, platform.aspect_ratio())
                    .await
                {
                    Ok(image_url) => {
                        self.store
                            .patch(run, platform, PlatformPatch::ImageReady { image_url });
                    }
                    Err(error) => {
                        warn!(
                            provider = self.generator.provider(),
                            %platform,
                            %error,
                            "image generation failed"
                        );
                        self.store.patch(
                            run,
                            platform,
                            PlatformPatch::ImageFailed {
                                message: IMAGE_FAILURE_MESSAGE.to_string(),
                            },
                        );
                    }
                }
            }
        });
        futures::future::join_all(image_jobs).await;
    }
}
