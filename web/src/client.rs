use jeopardy_core::{CategoryId, GameError, PoolSize, Result};
use jeopardy_protocol::{self as protocol, CategoryPayload, ProtocolError};

/// Where categories and their clues come from.
#[allow(async_fn_in_trait)]
pub(crate) trait TriviaSource {
    /// Fetches a pool of category ids, unfiltered.
    async fn fetch_category_ids(&self, pool_size: PoolSize) -> Result<Vec<CategoryId>>;

    /// Fetches one category with all of its clues.
    async fn fetch_category(&self, id: CategoryId) -> Result<CategoryPayload>;
}

fn malformed(err: ProtocolError) -> GameError {
    GameError::MalformedResponse(err.to_string())
}

/// Anything outside 2xx is a failed request.
fn check_status(url: &str, status: u16, status_text: &str) -> Result<()> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(GameError::Network(format!(
            "{} answered {} {}",
            url, status, status_text
        )))
    }
}

fn read_category_ids(body: &str) -> Result<Vec<CategoryId>> {
    let ids = protocol::parse_category_ids(body).map_err(malformed)?;
    log::debug!("got {} category ids", ids.len());
    Ok(ids)
}

fn read_category(id: CategoryId, body: &str) -> Result<CategoryPayload> {
    let category = protocol::parse_category(body).map_err(malformed)?;
    if category.id.is_some_and(|got| got != id) {
        log::warn!("asked for category {} but got {:?}", id, category.id);
    }
    log::debug!(
        "category {} {:?} has {} clues",
        id,
        category.title,
        category.clues.len()
    );
    Ok(category)
}

/// Trivia source backed by the service's HTTP API, using the browser's fetch.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct HttpTriviaSource {
    api_base: String,
}

impl HttpTriviaSource {
    pub(crate) const DEFAULT_API_BASE: &'static str = "https://jservice.io";

    pub(crate) fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
        }
    }

    async fn get_text(&self, url: &str) -> Result<String> {
        use gloo::net::http::Request;

        log::debug!("GET {}", url);
        let response = Request::get(url)
            .send()
            .await
            .map_err(|err| GameError::Network(err.to_string()))?;
        check_status(url, response.status(), &response.status_text())?;
        response
            .text()
            .await
            .map_err(|err| GameError::Network(err.to_string()))
    }
}

impl Default for HttpTriviaSource {
    fn default() -> Self {
        Self::new(Self::DEFAULT_API_BASE)
    }
}

impl TriviaSource for HttpTriviaSource {
    async fn fetch_category_ids(&self, pool_size: PoolSize) -> Result<Vec<CategoryId>> {
        let body = self
            .get_text(&protocol::categories_url(&self.api_base, pool_size))
            .await?;
        read_category_ids(&body)
    }

    async fn fetch_category(&self, id: CategoryId) -> Result<CategoryPayload> {
        let body = self
            .get_text(&protocol::category_url(&self.api_base, id))
            .await?;
        read_category(id, &body)
    }
}
