//! Reconstruction pipeline: the one operation both delivery surfaces share.
//!
//! Flow: build_prompt → completion → parse_response → compose_query →
//!       search → Report::assemble.
//!
//! All-or-nothing: a collaborator failure fails the run and no partial report
//! is produced. Unconfigured search is handled inside the search client and
//! simply yields no links.

use std::sync::Arc;

use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::config::Config;
use crate::errors::AppError;
use crate::llm_client::{CompletionClient, GeminiClient};
use crate::models::report::Report;
use crate::reconstruction::parser::parse_response;
use crate::reconstruction::prompts::build_prompt;
use crate::reconstruction::query::compose_query;
use crate::search_client::{GoogleSearchClient, SearchClient};

/// Links requested per report unless configured otherwise.
pub const DEFAULT_SEARCH_LIMIT: usize = 5;

/// Holds the two collaborators. Stateless between runs, so one instance can
/// serve concurrent requests.
#[derive(Clone)]
pub struct Pipeline {
    completion: Arc<dyn CompletionClient>,
    search: Arc<dyn SearchClient>,
    search_limit: usize,
}

impl Pipeline {
    pub fn new(completion: Arc<dyn CompletionClient>, search: Arc<dyn SearchClient>) -> Self {
        Self {
            completion,
            search,
            search_limit: DEFAULT_SEARCH_LIMIT,
        }
    }

    /// Wires the Gemini and Google Custom Search clients from startup config.
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let completion = GeminiClient::new(&config.completion)
            .map_err(|e| AppError::Internal(anyhow::Error::from(e)))?;
        let search = GoogleSearchClient::new(&config.search)
            .map_err(|e| AppError::Internal(anyhow::Error::from(e)))?;

        info!(
            "Pipeline ready (model: {}, search configured: {})",
            completion.model(),
            search.is_configured()
        );

        Ok(Self::new(Arc::new(completion), Arc::new(search))
            .with_search_limit(config.search_result_limit))
    }

    pub fn with_search_limit(mut self, search_limit: usize) -> Self {
        self.search_limit = search_limit;
        self
    }

    /// Runs one fragment start to finish.
    pub async fn process(&self, fragment: &str) -> Result<Report, AppError> {
        let request_id = Uuid::new_v4();
        self.run(fragment)
            .instrument(info_span!("reconstruct", %request_id))
            .await
    }

    async fn run(&self, fragment: &str) -> Result<Report, AppError> {
        info!("Reconstructing fragment ({} chars)", fragment.chars().count());

        let prompt = build_prompt(fragment);
        let raw = self.completion.generate(&prompt).await?;

        let parsed = parse_response(&raw);
        info!(
            "Parsed reply: {} explanations, {} keywords",
            parsed.explanations.len(),
            parsed.keywords.len()
        );

        let query = compose_query(&parsed);
        let links = self.search.search(&query, self.search_limit).await?;
        info!("Collected {} contextual links", links.len());

        Ok(Report::assemble(fragment, parsed, links))
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Scripted collaborators shared by pipeline and handler tests.

    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::llm_client::{CompletionClient, LlmError};
    use crate::models::report::SearchLink;
    use crate::search_client::{SearchClient, SearchError};

    /// Returns a fixed reply (or an API error) and records the prompts it saw.
    pub struct ScriptedCompletion {
        reply: Result<String, u16>,
        pub prompts: Mutex<Vec<String>>,
    }

    impl ScriptedCompletion {
        pub fn replying(reply: &str) -> Self {
            Self {
                reply: Ok(reply.to_string()),
                prompts: Mutex::new(Vec::new()),
            }
        }

        pub fn failing(status: u16) -> Self {
            Self {
                reply: Err(status),
                prompts: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl CompletionClient for ScriptedCompletion {
        async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(status) => Err(LlmError::Api {
                    status: *status,
                    message: "scripted failure".to_string(),
                }),
            }
        }
    }

    /// Returns fixed links (or an API error) and records queries and limits.
    pub struct ScriptedSearch {
        links: Result<Vec<SearchLink>, u16>,
        pub queries: Mutex<Vec<(String, usize)>>,
    }

    impl ScriptedSearch {
        pub fn returning(links: Vec<SearchLink>) -> Self {
            Self {
                links: Ok(links),
                queries: Mutex::new(Vec::new()),
            }
        }

        pub fn failing(status: u16) -> Self {
            Self {
                links: Err(status),
                queries: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl SearchClient for ScriptedSearch {
        async fn search(&self, query: &str, limit: usize) -> Result<Vec<SearchLink>, SearchError> {
            self.queries.lock().unwrap().push((query.to_string(), limit));
            match &self.links {
                Ok(links) => Ok(links.iter().take(limit).cloned().collect()),
                Err(status) => Err(SearchError::Api {
                    status: *status,
                    message: "scripted failure".to_string(),
                }),
            }
        }
    }

    pub fn link(title: &str, url: &str) -> SearchLink {
        SearchLink {
            title: Some(title.to_string()),
            link: Some(url.to_string()),
        }
    }
}
