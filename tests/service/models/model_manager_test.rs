#[path = "../../common/mod.rs"]
mod common;

use blog_generator::entities::models::ModelError;
use blog_generator::service::ModelManager;
use common::CountingProvider;
use std::sync::{Arc, Barrier};
use std::thread;
use std::time::Duration;

#[test]
fn test_model_manager_is_lazy() {
    let provider = Arc::new(CountingProvider::new());
    let manager = ModelManager::new(provider.clone());

    assert!(!manager.is_loaded());
    assert_eq!(provider.loads(), 0);
    assert_eq!(manager.status().model_id, "stub/llama");
}

#[test]
fn test_generator_loaded_once() {
    let provider = Arc::new(CountingProvider::new());
    let manager = ModelManager::new(provider.clone());

    let first = manager.generator().unwrap();
    for _ in 0..10 {
        let next = manager.generator().unwrap();
        assert!(Arc::ptr_eq(&first, &next));
    }
    assert_eq!(provider.loads(), 1);
    assert!(manager.is_loaded());
}

#[test]
fn test_concurrent_first_access_loads_once() {
    let provider = Arc::new(CountingProvider::slow(Duration::from_millis(50)));
    let manager = Arc::new(ModelManager::new(provider.clone()));
    let barrier = Arc::new(Barrier::new(8));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let manager = manager.clone();
            let barrier = barrier.clone();
            thread::spawn(move || {
                barrier.wait();
                manager.generator().unwrap()
            })
        })
        .collect();

    let generators: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(provider.loads(), 1);
    assert!(generators.windows(2).all(|pair| Arc::ptr_eq(&pair[0], &pair[1])));
}

#[test]
fn test_failed_acquisition_is_retried() {
    let provider = Arc::new(CountingProvider::failing(2));
    let manager = ModelManager::new(provider.clone());

    for _ in 0..2 {
        let err = manager.generator().err().unwrap();
        assert!(matches!(err, ModelError::AcquisitionFailed(_)));
        assert!(!manager.is_loaded());
    }

    assert!(manager.generator().is_ok());
    assert!(manager.generator().is_ok());
    assert_eq!(provider.loads(), 3);
}

#[test]
fn test_busy_guard_tracks_in_flight() {
    let manager = ModelManager::new(Arc::new(CountingProvider::new()));
    assert_eq!(manager.status().in_flight, 0);
    {
        let _a = manager.busy();
        let _b = manager.busy();
        assert_eq!(manager.status().in_flight, 2);
    }
    assert_eq!(manager.status().in_flight, 0);
}
