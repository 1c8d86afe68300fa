use crate::error::{CrawlError, Result};
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::debug;
use url::Url;

/// Retrieves HTML documents, validating transport and content type.
///
/// Every failure maps to one of three error kinds: `Network` for transport
/// problems, `HttpStatus` for responses with a status of 400 or above, and
/// `UnsupportedContentType` when the response is not an HTML document. The
/// body of a non-HTML response is never read. No retries happen here; a
/// failed fetch simply ends that branch of the traversal.
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    pub fn new() -> Self {
        Self::with_timeout(10)
    }

    pub fn with_timeout(timeout_secs: u64) -> Self {
        let client = Client::builder()
            .user_agent(concat!("linktally/", env!("CARGO_PKG_VERSION")))
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .connect_timeout(std::time::Duration::from_secs(timeout_secs.div_ceil(2)))
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }

    pub async fn fetch(&self, url: &Url) -> Result<String> {
        debug!("fetching {}", url);

        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        if status.as_u16() >= 400 {
            return Err(CrawlError::HttpStatus {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("unknown").to_string(),
            });
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());

        let is_html = content_type
            .as_ref()
            .map(|ct| ct.contains("text/html"))
            .unwrap_or(false);
        if !is_html {
            return Err(CrawlError::UnsupportedContentType { content_type });
        }

        let body = response.text().await?;
        Ok(body)
    }
}

impl Default for PageFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn success_returns_the_full_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/page"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_raw("<html><body>hello</body></html>", "text/html; charset=utf-8"),
            )
            .mount(&server)
            .await;

        let fetcher = PageFetcher::new();
        let url = Url::parse(&format!("{}/page", server.uri())).unwrap();
        let body = fetcher.fetch(&url).await.unwrap();
        assert_eq!(body, "<html><body>hello</body></html>");
    }

    #[tokio::test]
    async fn status_404_carries_code_and_reason() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let fetcher = PageFetcher::new();
        let url = Url::parse(&format!("{}/missing", server.uri())).unwrap();
        let err = fetcher.fetch(&url).await.unwrap_err();
        match err {
            CrawlError::HttpStatus { status, reason } => {
                assert_eq!(status, 404);
                assert_eq!(reason, "Not Found");
            }
            other => panic!("expected HttpStatus, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn status_500_is_a_failure_too() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/boom"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let fetcher = PageFetcher::new();
        let url = Url::parse(&format!("{}/boom", server.uri())).unwrap();
        let err = fetcher.fetch(&url).await.unwrap_err();
        assert!(matches!(err, CrawlError::HttpStatus { status: 500, .. }));
    }

    #[tokio::test]
    async fn pdf_content_type_is_rejected_unread() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/doc.pdf"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "application/pdf")
                    .set_body_bytes(b"%PDF-1.4".to_vec()),
            )
            .mount(&server)
            .await;

        let fetcher = PageFetcher::new();
        let url = Url::parse(&format!("{}/doc.pdf", server.uri())).unwrap();
        let err = fetcher.fetch(&url).await.unwrap_err();
        match err {
            CrawlError::UnsupportedContentType { content_type } => {
                assert_eq!(content_type.as_deref(), Some("application/pdf"));
            }
            other => panic!("expected UnsupportedContentType, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn non_html_content_type_is_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/untyped"))
            .respond_with(ResponseTemplate::new(200).set_body_raw("anything", "text/plain"))
            .mount(&server)
            .await;

        let fetcher = PageFetcher::new();
        let url = Url::parse(&format!("{}/untyped", server.uri())).unwrap();
        let err = fetcher.fetch(&url).await.unwrap_err();
        assert!(matches!(err, CrawlError::UnsupportedContentType { .. }));
    }

    #[tokio::test]
    async fn connection_refused_is_a_network_error() {
        // Port 1 is essentially guaranteed to refuse connections.
        let fetcher = PageFetcher::with_timeout(2);
        let url = Url::parse("http://127.0.0.1:1/").unwrap();
        let err = fetcher.fetch(&url).await.unwrap_err();
        assert!(matches!(err, CrawlError::Network(_)));
    }
}
