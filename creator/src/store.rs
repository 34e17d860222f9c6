use serde::Serialize;
use socialsync_sdk::Platform;
use std::sync::Mutex;
use tracing::debug;

/// The mutable per-platform record tracked across one generation run.
///
/// Lifecycle: idle (all fields empty, flags false) → loading (both flags
/// true) → text-ready → image-ready or image-failed. Loading flags are only
/// ever cleared within a run; starting a new run replaces the whole record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformResult {
    pub platform: Platform,
    pub text: Option<String>,
    pub image_prompt: Option<String>,
    pub image_url: Option<String>,
    pub is_loading_text: bool,
    pub is_loading_image: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PlatformResult {
    /// The record as it exists before any run has started.
    #[must_use]
    pub fn idle(platform: Platform) -> Self {
        Self {
            platform,
            text: None,
            image_prompt: None,
            image_url: None,
            is_loading_text: false,
            is_loading_image: false,
            error: None,
        }
    }

    /// The record at the start of a run: everything cleared, both stages
    /// loading.
    #[must_use]
    pub fn loading(platform: Platform) -> Self {
        Self {
            is_loading_text: true,
            is_loading_image: true,
            ..Self::idle(platform)
        }
    }
}

/// A partial update to one platform's record. The variants are the legal
/// transitions of the per-platform state machine; loading flags can only be
/// cleared, never re-set.
#[derive(Debug, Clone)]
pub enum PlatformPatch {
    /// Text generation completed: populate the copy and its image prompt,
    /// keep the image stage loading.
    TextReady { text: String, image_prompt: String },
    /// This platform's image call resolved with an image.
    ImageReady { image_url: String },
    /// This platform's image call failed; the failure is isolated to this
    /// platform.
    ImageFailed { message: String },
    /// Critical failure before any image call: stop both stages and record
    /// the error.
    Failed { message: String },
}

impl PlatformPatch {
    fn apply(self, result: &mut PlatformResult) {
        match self {
            Self::TextReady { text, image_prompt } => {
                result.text = Some(text);
                result.image_prompt = Some(image_prompt);
                result.is_loading_text = false;
            }
            Self::ImageReady { image_url } => {
                result.image_url = Some(image_url);
                result.is_loading_image = false;
            }
            Self::ImageFailed { message } => {
                result.error = Some(message);
                result.is_loading_image = false;
            }
            Self::Failed { message } => {
                result.error = Some(message);
                result.is_loading_text = false;
                result.is_loading_image = false;
            }
        }
    }
}

struct StoreInner {
    /// Id of the run the records belong to. Patches tagged with any other
    /// run id are dropped, so a late completion from a superseded run can
    /// never clobber a newer run's records.
    run: u64,
    results: [PlatformResult; 3],
}

/// In-memory map of one [`PlatformResult`] per platform, with single-writer
/// discipline: the orchestrator mutates it, everyone else reads cloned
/// snapshots. Patches are atomic per platform; a reader never observes a
/// half-applied update.
pub struct ResultStore {
    inner: Mutex<StoreInner>,
}

impl Default for ResultStore {
    fn default() -> Self {
        Self {
            inner: Mutex::new(StoreInner {
                run: 0,
                results: Platform::ALL.map(PlatformResult::idle),
            }),
        }
    }
}

impl ResultStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, platform: Platform) -> PlatformResult {
        let inner = self.inner.lock().expect("result store poisoned");
        inner.results[index_of(platform)].clone()
    }

    /// All records in the fixed [`Platform::ALL`] order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<PlatformResult> {
        let inner = self.inner.lock().expect("result store poisoned");
        inner.results.to_vec()
    }

    /// Install the records for a new run, replacing everything from prior
    /// runs and making `run` the current run.
    pub fn set_all(&self, run: u64, records: [PlatformResult; 3]) {
        let mut inner = self.inner.lock().expect("result store poisoned");
        inner.run = run;
        inner.results = records;
    }

    /// Apply a patch to one platform's record. Ignored when `run` is not the
    /// current run.
    pub fn patch(&self, run: u64, platform: Platform, patch: PlatformPatch) {
        let mut inner = self.inner.lock().expect("result store poisoned");
        if inner.run != run {
            debug!(run, current = inner.run, %platform, "dropping stale patch");
            return;
        }
        patch.apply(&mut inner.results[index_of(platform)]);
    }
}

fn index_of(platform: Platform) -> usize {
    match platform {
        Platform::LinkedIn => 0,
        Platform::Twitter => 1,
        Platform::Instagram => 2,
    }
}
