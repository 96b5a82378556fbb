mod common;

use std::collections::HashSet;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_shorten_same_url() {
    let state = common::create_test_state();

    let handles: Vec<_> = (0..64)
        .map(|_| {
            let state = state.clone();
            tokio::spawn(async move { state.shortener.shorten("https://example.com/hot") })
        })
        .collect();

    let mut ids = HashSet::new();
    for handle in handles {
        ids.insert(handle.await.unwrap().unwrap().identifier);
    }

    assert_eq!(ids.len(), 1);

    let stats = state.shortener.stats().unwrap();
    assert_eq!(stats.entries, 1);
    assert_eq!(stats.reserved, 0);

    let id = ids.into_iter().next().unwrap();
    assert_eq!(
        state.shortener.resolve(id.as_str()).unwrap().url,
        "https://example.com/hot"
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_shorten_distinct_urls_fill_small_space() {
    // 36^2 = 1296 identifiers; fill most of them from many tasks at once.
    let state = common::create_test_state_with_length(2);

    let handles: Vec<_> = (0..1200)
        .map(|i| {
            let state = state.clone();
            tokio::spawn(async move {
                state
                    .shortener
                    .shorten(&format!("https://example.com/{i}"))
            })
        })
        .collect();

    let mut ids = HashSet::new();
    for handle in handles {
        ids.insert(handle.await.unwrap().unwrap().identifier);
    }

    assert_eq!(ids.len(), 1200);

    let stats = state.shortener.stats().unwrap();
    assert_eq!(stats.entries, 1200);
    assert_eq!(stats.reserved, 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_overflow_is_an_error_not_a_hang() {
    let state = common::create_test_state_with_length(1);

    let handles: Vec<_> = (0..100)
        .map(|i| {
            let state = state.clone();
            tokio::spawn(async move {
                state
                    .shortener
                    .shorten(&format!("https://example.com/{i}"))
            })
        })
        .collect();

    let mut ok = 0;
    let mut exhausted = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => ok += 1,
            Err(quicklink::AppError::ExhaustedIdSpace { .. }) => exhausted += 1,
            Err(other) => panic!("unexpected error: {other}"),
        }
    }

    assert_eq!(ok, 36);
    assert_eq!(exhausted, 64);

    let stats = state.shortener.stats().unwrap();
    assert_eq!(stats.entries, 36);
    assert_eq!(stats.reserved, 0);
}
