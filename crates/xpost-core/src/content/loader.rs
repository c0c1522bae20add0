use std::time::Duration;

use bytes::BytesMut;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, USER_AGENT};
use reqwest::{Client, Proxy, Response, StatusCode};
use url::Url;

use super::events::{ContentEvent, ContentEventSink};
use super::page::Page;
use crate::config::ContentConfig;
use crate::{Error, Result};

const MAX_PAGE_BYTES: usize = 5 * 1024 * 1024;
const MAX_RETRIES: u32 = 3;
const INITIAL_RETRY_DELAY_MS: u64 = 500;
/// Progress step per chunk when the server sends no Content-Length
const UNKNOWN_LENGTH_STEP: u8 = 10;
/// Progress is held below this until the body is complete
const MAX_STREAMING_PROGRESS: u8 = 95;

/// Downloads pages for the content view and reports progress as events
#[derive(Debug, Clone)]
pub struct PageLoader {
    client: Client,
    user_agent: String,
}

impl PageLoader {
    pub fn new(config: &ContentConfig) -> Result<Self> {
        let client = Self::build_client(config.request_timeout_secs, &config.proxy_url)?;
        Ok(Self {
            client,
            user_agent: config.user_agent.clone(),
        })
    }

    /// Build HTTP client with optional proxy
    fn build_client(timeout_secs: u64, proxy_url: &Option<String>) -> Result<Client> {
        let mut builder = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .gzip(true)
            .deflate(true)
            .brotli(true)
            .redirect(reqwest::redirect::Policy::limited(10));

        if let Some(ref proxy) = proxy_url {
            let proxy = Proxy::all(proxy)
                .map_err(|e| Error::Config(format!("Invalid proxy URL: {}", e)))?;
            builder = builder.proxy(proxy);
            tracing::info!("Using HTTP proxy for page loading");
        }

        builder.build().map_err(Error::Http)
    }

    fn build_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8"),
        );
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
        if let Ok(ua) = HeaderValue::from_str(&self.user_agent) {
            headers.insert(USER_AGENT, ua);
        }
        headers
    }

    /// Run one content session: emits `LoadStarted`, progress updates and then
    /// exactly one of `LoadFinished` / `LoadError`. Stops early once the viewer
    /// has unsubscribed.
    pub async fn load(&self, url: String, sink: ContentEventSink) {
        tracing::info!("Loading page {} (session {})", url, sink.session().0);
        sink.emit(ContentEvent::LoadStarted);

        match self.fetch(&url, &sink).await {
            Ok(page) => {
                tracing::debug!("Loaded {} ({} bytes)", page.url, page.html.len());
                sink.emit(ContentEvent::ProgressChanged(100));
                sink.emit(ContentEvent::LoadFinished(page));
            }
            Err(e) => {
                if sink.is_detached() {
                    tracing::debug!("Abandoned load of {}: {}", url, e);
                } else {
                    tracing::warn!("Failed to load {}: {}", url, e);
                    sink.emit(ContentEvent::LoadError(e.to_string()));
                }
            }
        }
    }

    /// Fetch a page, streaming the body and emitting progress through `sink`
    pub async fn fetch(&self, url: &str, sink: &ContentEventSink) -> Result<Page> {
        let parsed = Url::parse(url)?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::ContentLoad(format!(
                "unsupported scheme '{}' in {}",
                parsed.scheme(),
                url
            )));
        }

        let response = self.send_with_retry(parsed.as_str()).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::ContentLoad(format!("HTTP {} for URL: {}", status, url)));
        }

        let final_url = response.url().to_string();
        let body = self.read_body(response, url, sink).await?;
        Ok(Page::new(final_url, String::from_utf8_lossy(&body).into_owned()))
    }

    /// Send with retry and exponential backoff on 429 / 503
    async fn send_with_retry(&self, url: &str) -> Result<Response> {
        let mut last_error = None;
        let mut delay_ms = INITIAL_RETRY_DELAY_MS;

        for attempt in 0..MAX_RETRIES {
            tracing::debug!("Request attempt {} for {}", attempt + 1, url);

            match self.client.get(url).headers(self.build_headers()).send().await {
                Ok(response) => {
                    let status = response.status();
                    if status != StatusCode::TOO_MANY_REQUESTS
                        && status != StatusCode::SERVICE_UNAVAILABLE
                    {
                        return Ok(response);
                    }
                    tracing::warn!("Received {} for {}, retrying after {}ms...", status, url, delay_ms);
                    last_error = Some(Error::ContentLoad(format!("HTTP {} for URL: {}", status, url)));
                }
                Err(e) => {
                    tracing::warn!("Request failed for {} (attempt {}): {}", url, attempt + 1, e);
                    last_error = Some(Error::Http(e));
                }
            }

            if attempt < MAX_RETRIES - 1 {
                tokio::time::sleep(Duration::from_millis(delay_ms)).await;
                delay_ms *= 2;
            }
        }

        Err(last_error.unwrap_or_else(|| {
            Error::ContentLoad(format!("Failed to load URL after {} retries: {}", MAX_RETRIES, url))
        }))
    }

    async fn read_body(
        &self,
        mut response: Response,
        url: &str,
        sink: &ContentEventSink,
    ) -> Result<BytesMut> {
        let total = response.content_length().filter(|len| *len > 0);
        if let Some(total) = total {
            ensure_page_size(total as usize, url)?;
        }

        let mut body = BytesMut::new();
        let mut last_progress = 0u8;

        while let Some(chunk) = response.chunk().await? {
            body.extend_from_slice(&chunk);
            ensure_page_size(body.len(), url)?;

            let progress = streaming_progress(body.len() as u64, total, last_progress);
            if progress != last_progress {
                last_progress = progress;
                if !sink.emit(ContentEvent::ProgressChanged(progress)) {
                    return Err(Error::ContentLoad("viewer closed".to_string()));
                }
            }
        }

        Ok(body)
    }
}

fn ensure_page_size(size: usize, url: &str) -> Result<()> {
    if size > MAX_PAGE_BYTES {
        return Err(Error::PageTooLarge {
            size,
            url: url.to_string(),
        });
    }
    Ok(())
}

/// Percentage of the body received. Without a known length the value advances
/// in fixed steps. Never reports 100 before the body is complete.
fn streaming_progress(received: u64, total: Option<u64>, last: u8) -> u8 {
    let progress = match total {
        Some(total) => ((received.min(total) * 100) / total) as u8,
        None => last.saturating_add(UNKNOWN_LENGTH_STEP),
    };
    progress.min(MAX_STREAMING_PROGRESS).max(last)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{subscribe, SessionId};

    #[test]
    fn test_streaming_progress_with_length() {
        assert_eq!(streaming_progress(50, Some(100), 0), 50);
        assert_eq!(streaming_progress(100, Some(100), 50), 95);
        assert_eq!(streaming_progress(10, Some(100), 50), 50);
    }

    #[test]
    fn test_streaming_progress_without_length() {
        assert_eq!(streaming_progress(1, None, 0), 10);
        assert_eq!(streaming_progress(1, None, 90), 95);
    }

    #[test]
    fn test_page_size_limit() {
        assert!(ensure_page_size(MAX_PAGE_BYTES, "u").is_ok());
        assert!(matches!(
            ensure_page_size(MAX_PAGE_BYTES + 1, "u"),
            Err(Error::PageTooLarge { .. })
        ));
    }

    #[tokio::test]
    async fn test_invalid_url_reports_load_error() {
        let loader = PageLoader::new(&ContentConfig::default()).unwrap();
        let (sink, mut sub) = subscribe(SessionId(9));

        loader.load("not a url".to_string(), sink).await;

        let events = sub.drain();
        assert!(matches!(events.first(), Some((SessionId(9), ContentEvent::LoadStarted))));
        assert!(matches!(events.last(), Some((_, ContentEvent::LoadError(_)))));
    }

    #[tokio::test]
    async fn test_unsupported_scheme_is_rejected() {
        let loader = PageLoader::new(&ContentConfig::default()).unwrap();
        let (sink, _sub) = subscribe(SessionId(1));
        let err = loader.fetch("ftp://example.com/", &sink).await.unwrap_err();
        assert!(matches!(err, Error::ContentLoad(_)));
    }
}
