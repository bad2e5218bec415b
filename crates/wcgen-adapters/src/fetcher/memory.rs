//! In-memory template fetcher for testing.

use wcgen_core::{
    application::{
        ApplicationError,
        ports::{TemplateFetcher, TemplateUrls},
    },
    domain::TemplateSet,
    error::WcgenResult,
};

/// Canned fetcher: returns a fixed template set, or a fixed failure.
#[derive(Debug, Clone)]
pub struct InMemoryFetcher {
    outcome: Outcome,
}

#[derive(Debug, Clone)]
enum Outcome {
    Set(TemplateSet),
    Failure(Vec<String>),
}

impl InMemoryFetcher {
    /// Fetcher that always returns the given texts.
    pub fn new(
        main: impl Into<String>,
        css: impl Into<String>,
        template: impl Into<String>,
    ) -> Self {
        Self {
            outcome: Outcome::Set(TemplateSet {
                main: main.into(),
                css: css.into(),
                template: template.into(),
            }),
        }
    }

    /// Fetcher that always fails with the given reasons.
    pub fn failing(reasons: Vec<String>) -> Self {
        Self {
            outcome: Outcome::Failure(reasons),
        }
    }
}

impl TemplateFetcher for InMemoryFetcher {
    fn fetch(&self, _urls: &TemplateUrls) -> WcgenResult<TemplateSet> {
        match &self.outcome {
            Outcome::Set(set) => Ok(set.clone()),
            Outcome::Failure(reasons) => Err(ApplicationError::FetchFailed {
                reasons: reasons.clone(),
            }
            .into()),
        }
    }
}
