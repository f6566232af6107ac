//! Blocking HTTP implementation of [`SolverService`].

use std::time::Duration;

use reqwest::{
    blocking::{Client, RequestBuilder},
    header::{self, HeaderValue},
};
use serde::de::DeserializeOwned;
use sodo_core::{Board, Digit, Position, Trace, Verdict};

use crate::{
    Level, ServiceError, SolverService,
    protocol::{
        HintReply, PuzzleReply, SolutionReply, TraceReply, ValidateReply, ValidateRequest,
    },
};

/// Talks to the solving service over HTTP.
///
/// The underlying client keeps a cookie store, so the session cookie set by
/// [`new_game`](SolverService::new_game) travels with every later request.
///
/// `/game/<level>` and `/solve` may answer with an HTML page instead of JSON.
/// The session is still set up in that case, and the board is read from the
/// solver trace instead: its first snapshot is the puzzle and its last one,
/// with the final placement applied, is the solution.
#[derive(Debug, Clone)]
pub struct HttpService {
    client: Client,
    base_url: String,
}

impl HttpService {
    /// Creates a client for the server at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Transport`] if the HTTP client cannot be
    /// initialized.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ServiceError> {
        let client = Client::builder()
            .cookie_store(true)
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    /// The server root, without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for `path`, which must start with `/`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn get(&self, path: &str) -> RequestBuilder {
        self.client
            .get(self.url(path))
            .header(header::ACCEPT, "application/json")
    }
}

fn read_json<T>(request: RequestBuilder) -> Result<T, ServiceError>
where
    T: DeserializeOwned,
{
    let response = request.send()?.error_for_status()?;
    response.json().map_err(ServiceError::from)
}

/// Like [`read_json`], but yields `None` when the server answered with
/// something other than JSON.
fn read_json_if_served<T>(request: RequestBuilder) -> Result<Option<T>, ServiceError>
where
    T: DeserializeOwned,
{
    let response = request.send()?.error_for_status()?;
    if !is_json(response.headers().get(header::CONTENT_TYPE)) {
        return Ok(None);
    }
    response.json().map(Some).map_err(ServiceError::from)
}

fn is_json(content_type: Option<&HeaderValue>) -> bool {
    content_type
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .is_some_and(|mime| {
            let mime = mime.trim();
            mime.eq_ignore_ascii_case("application/json") || mime.ends_with("+json")
        })
}

impl SolverService for HttpService {
    fn new_game(&self, level: Level) -> Result<Board, ServiceError> {
        log::debug!("starting {level} game at {}", self.base_url);
        let path = format!("/game/{}", level.number());
        if let Some(reply) = read_json_if_served::<PuzzleReply>(self.get(&path))? {
            return reply.try_into();
        }
        log::debug!("game page served, reading givens from the solver trace");
        Ok(self.visualize()?.puzzle().clone())
    }

    fn validate(&self, pos: Position, digit: Digit) -> Result<Verdict, ServiceError> {
        let request = self
            .client
            .post(self.url("/validate"))
            .json(&ValidateRequest::new(pos, digit));
        read_json::<ValidateReply>(request)?.try_into()
    }

    fn hint(&self, pos: Position) -> Result<Digit, ServiceError> {
        let request = self
            .get("/hint")
            .query(&[("row", pos.row()), ("col", pos.col())]);
        read_json::<HintReply>(request)?.try_into()
    }

    fn visualize(&self) -> Result<Trace, ServiceError> {
        read_json::<TraceReply>(self.get("/visualize"))?.try_into()
    }

    fn solution(&self) -> Result<Board, ServiceError> {
        if let Some(reply) = read_json_if_served::<SolutionReply>(self.get("/solve"))? {
            return reply.try_into();
        }
        log::debug!("solution page served, reading the board from the solver trace");
        self.visualize()?
            .solution()
            .ok_or_else(|| ServiceError::decode("solver trace does not end with a solved board"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_without_double_slash() {
        let service =
            HttpService::new("http://127.0.0.1:5000/", Duration::from_secs(1)).unwrap();
        assert_eq!(service.base_url(), "http://127.0.0.1:5000");
        assert_eq!(service.url("/solve"), "http://127.0.0.1:5000/solve");
    }

    #[test]
    fn json_content_types() {
        let json = |value: &'static str| is_json(Some(&HeaderValue::from_static(value)));
        assert!(json("application/json"));
        assert!(json("application/json; charset=utf-8"));
        assert!(json("application/problem+json"));
        assert!(!json("text/html; charset=utf-8"));
        assert!(!is_json(None));
    }
}
