//! Fallback chain behaviour against in-memory and on-disk sites.

use folio_fetch::{FetchError, FileFetcher, SourceChain};
use folio_test_utils::{write_site, MemoryFetcher};

fn site_chain() -> SourceChain {
    SourceChain::new("assets/data/projects.json").with_fallbacks([
        "./assets/data/projects.json",
        "../assets/data/projects.json",
        "/assets/data/projects.json",
    ])
}

#[tokio::test]
async fn primary_success_skips_fallbacks() {
    let fetcher = MemoryFetcher::new().with_file("assets/data/projects.json", "[]");

    let fetched = site_chain().fetch_first(&fetcher).await.unwrap();

    assert_eq!(fetched.attempt, 0);
    assert_eq!(fetched.value, "[]");
    assert_eq!(fetcher.requests(), vec!["assets/data/projects.json"]);
}

#[tokio::test]
async fn stops_at_first_success() {
    let fetcher = MemoryFetcher::new()
        .with_status("assets/data/projects.json", 500)
        .with_file("../assets/data/projects.json", "[1]")
        .with_file("/assets/data/projects.json", "[2]");

    let fetched = site_chain().fetch_first(&fetcher).await.unwrap();

    assert_eq!(fetched.path, "../assets/data/projects.json");
    assert_eq!(fetched.attempt, 2);
    assert_eq!(
        fetcher.requests(),
        vec![
            "assets/data/projects.json",
            "./assets/data/projects.json",
            "../assets/data/projects.json",
        ]
    );
}

#[tokio::test]
async fn exhaustion_reports_every_attempt_in_order() {
    let fetcher = MemoryFetcher::new();

    let err = site_chain().fetch_first(&fetcher).await.unwrap_err();

    assert_eq!(
        err.attempted_paths(),
        vec![
            "assets/data/projects.json",
            "./assets/data/projects.json",
            "../assets/data/projects.json",
            "/assets/data/projects.json",
        ]
    );
    match err {
        FetchError::Exhausted { attempts } => {
            assert!(attempts.iter().all(|a| a.error.is_not_found()));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn undecodable_body_falls_through() {
    let fetcher = MemoryFetcher::new()
        .with_file("assets/data/projects.json", "{truncated")
        .with_file("./assets/data/projects.json", "[]");

    let fetched = site_chain()
        .fetch_first_with(&fetcher, bracketed_len)
        .await
        .unwrap();

    assert_eq!(fetched.attempt, 1);
    assert_eq!(fetched.value, 0);
}

fn bracketed_len(body: &str) -> Result<usize, String> {
    if body.starts_with('[') && body.ends_with(']') {
        Ok(body.len() - 2)
    } else {
        Err(format!("not an array: {body}"))
    }
}

#[tokio::test]
async fn file_site_resolves_parent_paths_at_root() {
    let dir = tempfile::tempdir().unwrap();
    write_site(dir.path(), &[("assets/data/projects.json", "[]")]);

    let fetcher = FileFetcher::new(dir.path()).with_page_dir("portfolio");
    let chain = SourceChain::new("assets/data/projects.json")
        .with_fallbacks(["../assets/data/projects.json"]);

    let fetched = chain.fetch_first(&fetcher).await.unwrap();
    assert_eq!(fetched.path, "../assets/data/projects.json");
}
