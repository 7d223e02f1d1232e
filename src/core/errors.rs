/*-------------------------------------------------------------------------------------------------
  Errors and Results
-------------------------------------------------------------------------------------------------*/

/// Errors returned by the crate's operations.
///
/// `Network`, `Status`, `InvalidUrl` and `Parse` end the current operation without a result;
/// nothing is partially returned. Malformed IP prefixes and unexpected service areas are not
/// errors; they are recovered where they occur and reported through the log.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Transport failure: DNS, connection refused, TLS, timeout.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The endpoint web service answered with a non-success status code.
    #[error("unexpected HTTP status {status} from {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    /// The configured base URL cannot be turned into a request URI.
    #[error("invalid endpoint URL: {0}")]
    InvalidUrl(String),

    /// The response body is not JSON, or is not an array of endpoint-set objects.
    #[error("unable to parse the endpoint directory: {0}")]
    Parse(#[from] serde_json::Error),

    /// A result could not be serialized to JSON text.
    #[error("unable to render result: {0}")]
    Render(#[source] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Interactive menu input that does not name an operation.
    #[error("{0}")]
    Selection(String),
}

// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/*--------------------------------------------------------------------------------------
  Log Error Function
--------------------------------------------------------------------------------------*/

#[cfg(test)]
pub(crate) fn log_error(error: &Error) {
    log::error!("{}", error);
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
