//! HTTP template fetcher using a blocking reqwest client.
//!
//! The three template GETs are independent, so they run on scoped threads
//! sharing one client; the adapter joins all three before returning. A
//! failure on any of them produces one combined `FetchFailed` naming every
//! resource that could not be retrieved. No retries.

use std::thread;
use std::time::Duration;

use tracing::{debug, instrument};

use wcgen_core::{
    application::{
        ApplicationError,
        ports::{TemplateFetcher, TemplateUrls},
    },
    domain::TemplateSet,
    error::WcgenResult,
};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Production template fetcher.
pub struct HttpTemplateFetcher {
    client: reqwest::blocking::Client,
}

impl HttpTemplateFetcher {
    /// Build the fetcher with its HTTP client (user-agent + request timeout).
    pub fn new() -> WcgenResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("wcgen/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ApplicationError::FetchFailed {
                reasons: vec![format!("failed to build HTTP client: {e}")],
            })?;
        Ok(Self { client })
    }

    /// GET one resource as text; errors carry the URL so the combined
    /// failure message stays attributable.
    fn get_text(&self, url: &str) -> Result<String, String> {
        debug!(url, "GET template resource");
        let response = self.client.get(url).send().map_err(|e| format!("{url}: {e}"))?;
        if !response.status().is_success() {
            return Err(format!("{url}: HTTP {}", response.status()));
        }
        response.text().map_err(|e| format!("{url}: {e}"))
    }
}

impl TemplateFetcher for HttpTemplateFetcher {
    #[instrument(skip_all)]
    fn fetch(&self, urls: &TemplateUrls) -> WcgenResult<TemplateSet> {
        let [main, css, template] = thread::scope(|scope| {
            [
                scope.spawn(|| self.get_text(&urls.main)),
                scope.spawn(|| self.get_text(&urls.css)),
                scope.spawn(|| self.get_text(&urls.template)),
            ]
            .map(|handle| {
                handle
                    .join()
                    .unwrap_or_else(|_| Err("template fetch thread panicked".to_string()))
            })
        });

        match (main, css, template) {
            (Ok(main), Ok(css), Ok(template)) => Ok(TemplateSet {
                main,
                css,
                template,
            }),
            (main, css, template) => {
                let reasons = [main.err(), css.err(), template.err()]
                    .into_iter()
                    .flatten()
                    .collect();
                Err(ApplicationError::FetchFailed { reasons }.into())
            }
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use wcgen_core::application::ports::{MAIN_RESOURCE, STYLE_RESOURCE, TEMPLATE_RESOURCE};

    fn mock_resource<'a>(
        server: &'a mut mockito::ServerGuard,
        name: &str,
        status: usize,
        body: &str,
    ) -> mockito::Mock {
        server
            .mock("GET", format!("/base/{name}").as_str())
            .with_status(status)
            .with_body(body)
            .create()
    }

    #[test]
    fn fetches_all_three_resources() {
        let mut server = mockito::Server::new();
        let _main = mock_resource(&mut server, MAIN_RESOURCE, 200, "class __ComponentName__ {}");
        let _css = mock_resource(&mut server, STYLE_RESOURCE, 200, ":host { display: block; }");
        let _tpl = mock_resource(&mut server, TEMPLATE_RESOURCE, 200, "<h1>###</h1>");

        let urls = TemplateUrls::from_base(&format!("{}/base", server.url()));
        let set = HttpTemplateFetcher::new().unwrap().fetch(&urls).unwrap();

        assert_eq!(set.main, "class __ComponentName__ {}");
        assert_eq!(set.css, ":host { display: block; }");
        assert_eq!(set.template, "<h1>###</h1>");
    }

    #[test]
    fn non_success_status_fails_the_whole_fetch() {
        let mut server = mockito::Server::new();
        let _main = mock_resource(&mut server, MAIN_RESOURCE, 200, "ok");
        let _css = mock_resource(&mut server, STYLE_RESOURCE, 404, "missing");
        let _tpl = mock_resource(&mut server, TEMPLATE_RESOURCE, 200, "ok");

        let urls = TemplateUrls::from_base(&format!("{}/base", server.url()));
        let err = HttpTemplateFetcher::new()
            .unwrap()
            .fetch(&urls)
            .unwrap_err();

        let msg = err.to_string();
        assert!(msg.contains("404"), "message should name the status: {msg}");
        assert!(
            msg.contains(STYLE_RESOURCE),
            "message should name the failed resource: {msg}"
        );
    }

    #[test]
    fn multiple_failures_are_combined_into_one_error() {
        let mut server = mockito::Server::new();
        let _main = mock_resource(&mut server, MAIN_RESOURCE, 500, "boom");
        let _css = mock_resource(&mut server, STYLE_RESOURCE, 200, "ok");
        let _tpl = mock_resource(&mut server, TEMPLATE_RESOURCE, 503, "down");

        let urls = TemplateUrls::from_base(&format!("{}/base", server.url()));
        let err = HttpTemplateFetcher::new()
            .unwrap()
            .fetch(&urls)
            .unwrap_err();

        let msg = err.to_string();
        assert!(msg.contains("500"), "both failures must be reported: {msg}");
        assert!(msg.contains("503"), "both failures must be reported: {msg}");
    }

    #[test]
    fn transport_failure_is_reported_per_url() {
        // Nothing listens on this port; connections are refused immediately.
        let urls = TemplateUrls::from_base("http://127.0.0.1:9/base");
        let err = HttpTemplateFetcher::new()
            .unwrap()
            .fetch(&urls)
            .unwrap_err();
        assert!(err.to_string().contains("127.0.0.1:9"));
    }
}
