#![allow(dead_code)]

use blog_generator::entities::models::{ModelError, ModelProvider, TextGenerator};
use blog_generator::entities::{GenerationRequest, GenerationResult};
use blog_generator::service::{BlogService, ModelManager};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Deterministic generator that records every request it receives.
#[derive(Default)]
pub struct RecordingGenerator {
    pub requests: Mutex<Vec<GenerationRequest>>,
}

impl RecordingGenerator {
    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl TextGenerator for RecordingGenerator {
    fn generate(&self, request: &GenerationRequest) -> Result<Vec<GenerationResult>, ModelError> {
        self.requests.lock().unwrap().push(request.clone());
        Ok(vec![
            GenerationResult::new(format!("{} Stub post.", request.prompt)),
            GenerationResult::new("second candidate"),
        ])
    }
}

/// Provider that counts acquisitions and hands out one shared generator.
pub struct CountingProvider {
    pub loads: AtomicUsize,
    pub generator: Arc<RecordingGenerator>,
    pub delay: Duration,
    pub failures_left: AtomicUsize,
}

impl CountingProvider {
    pub fn new() -> Self {
        Self {
            loads: AtomicUsize::new(0),
            generator: Arc::new(RecordingGenerator::default()),
            delay: Duration::ZERO,
            failures_left: AtomicUsize::new(0),
        }
    }

    pub fn slow(delay: Duration) -> Self {
        Self { delay, ..Self::new() }
    }

    pub fn failing(times: usize) -> Self {
        Self { failures_left: AtomicUsize::new(times), ..Self::new() }
    }

    pub fn loads(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

impl ModelProvider for CountingProvider {
    fn model_id(&self) -> &str {
        "stub/llama"
    }

    fn load(&self) -> Result<Arc<dyn TextGenerator>, ModelError> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        std::thread::sleep(self.delay);
        let remaining = self.failures_left.load(Ordering::SeqCst);
        if remaining > 0 {
            self.failures_left.store(remaining - 1, Ordering::SeqCst);
            return Err(ModelError::AcquisitionFailed("invalid credential".into()));
        }
        Ok(self.generator.clone())
    }
}

pub fn service_with(provider: Arc<CountingProvider>) -> BlogService {
    BlogService::new(Arc::new(ModelManager::new(provider)))
}
