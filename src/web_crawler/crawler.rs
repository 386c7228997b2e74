// src/web_crawler/crawler.rs - Bounded per-site email discovery
use crate::web_crawler::contact_links::ContactLinkFinder;
use crate::web_crawler::page_scan::PageScanner;
use crate::web_crawler::rate_limit::HostRateLimiter;
use crate::web_crawler::types::{CrawlConfig, PageResult};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

/// Seam between the orchestrator and the network: anything that can turn a
/// website URL into a contact email. Lets pipeline tests stub the crawl.
#[async_trait]
pub trait EmailFinder: Send + Sync {
    async fn find_email(&self, raw_url: &str) -> Option<String>;
}

pub struct EmailCrawler {
    client: Client,
    scanner: PageScanner,
    link_finder: ContactLinkFinder,
    rate_limiter: HostRateLimiter,
}

impl EmailCrawler {
    pub fn new(config: &CrawlConfig) -> Self {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            scanner: PageScanner::new(),
            link_finder: ContactLinkFinder::new(config.max_contact_pages),
            rate_limiter: HostRateLimiter::new(Duration::from_millis(
                config.politeness_delay_ms,
            )),
        }
    }

    /// Crawls the homepage and up to `max_contact_pages` contact/about
    /// subpages for one email. A homepage hit short-circuits the rest.
    /// Every page failure is swallowed - the worst outcome is `None`.
    pub async fn find_email(&self, raw_url: &str) -> Option<String> {
        let url = Self::clean_url(raw_url);
        let base = match Url::parse(&url) {
            Ok(base) => base,
            Err(e) => {
                warn!("Skipping unparseable URL {}: {}", url, e);
                return None;
            }
        };
        let host = base.host_str()?.to_string();

        info!("🕷️  Crawling {}...", url);

        self.rate_limiter.acquire(&host).await;
        let homepage = self.fetch_page(&url).await;

        if let Ok(html) = &homepage {
            if let Some(email) = self.scanner.scan(html) {
                debug!("Homepage hit on {}: {}", url, email);
                return Some(email);
            }
        }

        // Link discovery reuses the homepage HTML when the fetch succeeded;
        // after a failed fetch one more attempt is made purely to discover
        // subpages, so a flaky homepage does not kill the whole site.
        let html = match homepage {
            Ok(html) => html,
            Err(reason) => {
                debug!("Homepage fetch failed ({}), refetching for links", reason);
                self.rate_limiter.acquire(&host).await;
                match self.fetch_page(&url).await {
                    Ok(html) => html,
                    Err(_) => return None,
                }
            }
        };

        for page in self.link_finder.find(&html, &base) {
            self.rate_limiter.acquire(&host).await;
            match self.scan_page(page.as_str()).await {
                PageResult::Found(email) => {
                    debug!("Subpage hit on {}: {}", page, email);
                    return Some(email);
                }
                PageResult::NoEmail => {}
                PageResult::Failed(reason) => {
                    warn!("Failed to scan {}: {}", page, reason);
                }
            }
        }

        None
    }

    /// Prefixes `https://` when the URL carries no scheme.
    fn clean_url(raw_url: &str) -> String {
        if raw_url.starts_with("http") {
            raw_url.to_string()
        } else {
            format!("https://{}", raw_url)
        }
    }

    async fn scan_page(&self, url: &str) -> PageResult {
        match self.fetch_page(url).await {
            Ok(html) => match self.scanner.scan(&html) {
                Some(email) => PageResult::Found(email),
                None => PageResult::NoEmail,
            },
            Err(reason) => PageResult::Failed(reason),
        }
    }

    async fn fetch_page(&self, url: &str) -> Result<String, String> {
        debug!("Fetching: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if response.status() != reqwest::StatusCode::OK {
            return Err(format!("HTTP {}", response.status()));
        }

        response.text().await.map_err(|e| e.to_string())
    }
}

#[async_trait]
impl EmailFinder for EmailCrawler {
    async fn find_email(&self, raw_url: &str) -> Option<String> {
        EmailCrawler::find_email(self, raw_url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config() -> CrawlConfig {
        CrawlConfig {
            timeout_seconds: 1,
            politeness_delay_ms: 0,
            ..CrawlConfig::default()
        }
    }

    fn html(body: &str) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_string(body.to_string())
    }

    #[test]
    fn clean_url_prefixes_missing_scheme() {
        assert_eq!(EmailCrawler::clean_url("acme.test"), "https://acme.test");
        assert_eq!(
            EmailCrawler::clean_url("http://acme.test"),
            "http://acme.test"
        );
    }

    #[tokio::test]
    async fn homepage_mailto_short_circuits_subpages() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(html(
                r#"<a href="mailto:hello@acme.test">Mail</a>
                   <a href="/contact">Contact</a>"#,
            ))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/contact"))
            .respond_with(html("should never be fetched"))
            .expect(0)
            .mount(&server)
            .await;

        let crawler = EmailCrawler::new(&test_config());
        let email = crawler.find_email(&server.uri()).await;
        assert_eq!(email.as_deref(), Some("hello@acme.test"));
    }

    #[tokio::test]
    async fn subpage_email_found_when_homepage_is_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(html(r#"<h1>Welcome</h1><a href="/kontakt">Kontakt</a>"#))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/kontakt"))
            .respond_with(html("<p>Schreiben Sie an office@firma.example</p>"))
            .mount(&server)
            .await;

        let crawler = EmailCrawler::new(&test_config());
        let email = crawler.find_email(&server.uri()).await;
        assert_eq!(email.as_deref(), Some("office@firma.example"));
    }

    #[tokio::test]
    async fn failed_subpage_is_skipped_not_fatal() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(html(
                r#"<a href="/contact-sales">Contact sales</a>
                   <a href="/contact-support">Contact support</a>"#,
            ))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/contact-sales"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/contact-support"))
            .respond_with(html(r#"<a href="mailto:support@acme.test">mail</a>"#))
            .mount(&server)
            .await;

        let crawler = EmailCrawler::new(&test_config());
        let email = crawler.find_email(&server.uri()).await;
        assert_eq!(email.as_deref(), Some("support@acme.test"));
    }

    #[tokio::test]
    async fn homepage_timeout_still_reaches_contact_subpage() {
        let server = MockServer::start().await;
        // First homepage request exceeds the 1s client timeout; the
        // discovery refetch gets a normal response.
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(
                html(r#"<a href="/contact">Contact</a>"#)
                    .set_delay(Duration::from_millis(1500)),
            )
            .up_to_n_times(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(html(r#"<a href="/contact">Contact</a>"#))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/contact"))
            .respond_with(html(r#"<a href="mailto:hi@site.test">Email</a>"#))
            .mount(&server)
            .await;

        let crawler = EmailCrawler::new(&test_config());
        let email = crawler.find_email(&server.uri()).await;
        assert_eq!(email.as_deref(), Some("hi@site.test"));
    }

    #[tokio::test]
    async fn dead_site_yields_none() {
        let server = MockServer::start().await;
        // Scan fetch plus one discovery refetch, nothing more.
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(503))
            .expect(2)
            .mount(&server)
            .await;

        let crawler = EmailCrawler::new(&test_config());
        assert!(crawler.find_email(&server.uri()).await.is_none());
    }

    #[tokio::test]
    async fn no_email_anywhere_yields_none() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(html(r#"<a href="/about">About</a>"#))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/about"))
            .respond_with(html("<p>We are a company.</p>"))
            .mount(&server)
            .await;

        let crawler = EmailCrawler::new(&test_config());
        assert!(crawler.find_email(&server.uri()).await.is_none());
    }
}
