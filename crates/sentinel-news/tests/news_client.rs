//! Integration tests for `NewsClient` using wiremock HTTP mocks.

use sentinel_news::{NewsClient, NewsError, MAX_RAW_ITEMS, MAX_UNIQUE_ITEMS};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> NewsClient {
    NewsClient::with_base_url(5, base_url).expect("client construction should not fail")
}

fn rss(titles: &[&str]) -> String {
    let items: String = titles
        .iter()
        .enumerate()
        .map(|(i, t)| {
            format!(
                "<item><title>{t}</title><link>https://example.com/{i}</link>\
                 <pubDate>Mon, 19 Oct 2026 0{}:00:00 GMT</pubDate>\
                 <source url=\"https://example.com\">Wire {i}</source></item>",
                i % 10
            )
        })
        .collect();
    format!("<?xml version=\"1.0\"?><rss version=\"2.0\"><channel>{items}</channel></rss>")
}

#[tokio::test]
async fn recent_news_sends_encoded_query_and_dedupes() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rss/search"))
        .and(query_param("q", "gold price"))
        .and(query_param("hl", "en-US"))
        .and(query_param("ceid", "US:en"))
        .respond_with(ResponseTemplate::new(200).set_body_string(rss(&[
            "Gold hits record high",
            "Gold Hits Record High",
            "Silver slumps on strong dollar",
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let items = test_client(&server.uri())
        .recent_news("gold price")
        .await
        .expect("should fetch news");

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].title, "Gold hits record high");
    assert_eq!(items[0].link, "https://example.com/0");
    assert_eq!(items[0].source, "Wire 0");
    assert_eq!(items[1].title, "Silver slumps on strong dollar");
}

#[tokio::test]
async fn raw_fetch_is_capped_before_dedup() {
    let server = MockServer::start().await;
    let titles: Vec<String> = (0..20).map(|i| format!("Distinct headline number {i}")).collect();
    let refs: Vec<&str> = titles.iter().map(String::as_str).collect();

    Mock::given(method("GET"))
        .and(path("/rss/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string(rss(&refs)))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let raw = client.fetch_raw("anything").await.unwrap();
    assert_eq!(raw.len(), MAX_RAW_ITEMS);

    let unique = client.recent_news("anything").await.unwrap();
    assert!(unique.len() <= MAX_UNIQUE_ITEMS);
    assert_eq!(unique[0].title, "Distinct headline number 0");
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rss/search"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = test_client(&server.uri())
        .recent_news("gold price")
        .await
        .unwrap_err();
    assert!(
        matches!(err, NewsError::UnexpectedStatus { status: 503, .. }),
        "got: {err:?}"
    );
}

#[tokio::test]
async fn empty_feed_yields_no_items() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rss/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string(rss(&[])))
        .mount(&server)
        .await;

    let items = test_client(&server.uri()).recent_news("gold").await.unwrap();
    assert!(items.is_empty());
}
