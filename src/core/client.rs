use crate::core::endpoints::Endpoints;
use crate::core::errors::{Error, Result};
use crate::core::source::EndpointSource;
use log::{debug, info, warn};
use reqwest::Url;
use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use uuid::Uuid;

/*-------------------------------------------------------------------------------------------------
  Simple Interface
-------------------------------------------------------------------------------------------------*/

/// _**Simple library interface**_ retrieves and parses the endpoint directory using the default
/// client configuration (see [ClientBuilder::new] for the environment variables it reads).
///
/// ```no_run
/// use o365endpoints::{PrefixType, ServiceArea};
///
/// let endpoints = o365endpoints::get_endpoints()?;
/// let exchange = endpoints.prefixes(ServiceArea::Exchange, PrefixType::IPv4);
/// println!("{}", o365endpoints::render(&exchange)?);
/// # Ok::<(), o365endpoints::Error>(())
/// ```
pub fn get_endpoints() -> Result<Endpoints> {
    Client::new().fetch()
}

/*-------------------------------------------------------------------------------------------------
  Instance
-------------------------------------------------------------------------------------------------*/

/// The Microsoft 365 cloud instance whose endpoint directory is requested.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Instance {
    Worldwide,
    USGovDoD,
    #[default]
    USGovGCCHigh,
    China,
}

impl Instance {
    pub const ALL: [Instance; 4] = [
        Instance::Worldwide,
        Instance::USGovDoD,
        Instance::USGovGCCHigh,
        Instance::China,
    ];

    /// Path segment used by the endpoint web service.
    pub fn path(&self) -> &'static str {
        match self {
            Instance::Worldwide => "Worldwide",
            Instance::USGovDoD => "USGovDoD",
            Instance::USGovGCCHigh => "USGovGCCHigh",
            Instance::China => "China",
        }
    }
}

impl fmt::Display for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for Instance {
    type Err = String;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        Instance::ALL
            .into_iter()
            .find(|instance| instance.path().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| format!("Unknown instance: {value}"))
    }
}

/*-------------------------------------------------------------------------------------------------
  Client Builder
-------------------------------------------------------------------------------------------------*/

/// A builder for the [Client] struct that allows you to customize the client configuration.
///
/// ```
/// use o365endpoints::Instance;
///
/// let client = o365endpoints::ClientBuilder::default()
///     .url("https://endpoints.office.com/endpoints")
///     .instance(Instance::Worldwide)
///     .timeout(10) // 10 seconds
///     .build();
///
/// assert_eq!(client.instance(), Instance::Worldwide);
/// ```
///
/// The [ClientBuilder::new] method attempts to source configuration values from environment
/// variables when set and uses default values when the environment variables are not set.
///
/// If you want to use the default configuration values, ignoring any environment variables, use
/// the [ClientBuilder::default] method to create a new [ClientBuilder] instance.
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    url: String,
    instance: Instance,
    timeout: u64,
}

/*--------------------------------------------------------------------------------------
  Client Builder Implementation
--------------------------------------------------------------------------------------*/

impl Default for ClientBuilder {
    /// Create a new [ClientBuilder] with default configuration values.
    ///
    /// ```
    /// let client = o365endpoints::ClientBuilder::default().build();
    ///
    /// assert_eq!(client.url(), "https://endpoints.office.com/endpoints");
    /// assert_eq!(client.instance(), o365endpoints::Instance::USGovGCCHigh);
    /// assert_eq!(client.timeout(), 30);
    /// ```
    fn default() -> Self {
        Self {
            url: "https://endpoints.office.com/endpoints".to_string(),
            instance: Instance::default(),
            timeout: 30, // 30 seconds
        }
    }
}

impl ClientBuilder {
    /// Create a new [ClientBuilder] reading initial configuration values from
    /// environment variables when set and default values when the environment
    /// variables are not set.
    ///
    /// The environment variables used to set the initial configuration values
    /// are:
    /// - `O365ENDPOINTS_URL`
    /// - `O365ENDPOINTS_INSTANCE`
    /// - `O365ENDPOINTS_TIMEOUT`
    pub fn new() -> Self {
        let default = ClientBuilder::default();

        Self {
            url: get_env_var("O365ENDPOINTS_URL", default.url),
            instance: get_env_var("O365ENDPOINTS_INSTANCE", default.instance),
            timeout: get_env_var("O365ENDPOINTS_TIMEOUT", default.timeout),
        }
    }

    /*-------------------------------------------------------------------------
      Setters
    -------------------------------------------------------------------------*/

    /// Set the root URL of the endpoint web service; defaults to
    /// `https://endpoints.office.com/endpoints`. The instance path and the
    /// `clientrequestid` query parameter are appended per request.
    pub fn url(&mut self, url: &str) -> &mut Self {
        self.url = url.to_string();
        self
    }

    /// Set the cloud instance; defaults to [Instance::USGovGCCHigh].
    pub fn instance(&mut self, instance: Instance) -> &mut Self {
        self.instance = instance;
        self
    }

    /// Set the request timeout in seconds; defaults to `30`.
    pub fn timeout(&mut self, timeout: u64) -> &mut Self {
        self.timeout = timeout;
        self
    }

    /*-------------------------------------------------------------------------
      Build Method
    -------------------------------------------------------------------------*/

    pub fn build(&self) -> Client {
        Client {
            url: self.url.clone(),
            instance: self.instance,
            timeout: self.timeout,
        }
    }
}

/*-------------------------------------------------------------------------------------------------
  Client
-------------------------------------------------------------------------------------------------*/

/// A client for the Microsoft 365 endpoint web service. Every call to [Client::fetch] performs
/// one GET request with a new client request ID; nothing is cached between calls.
///
/// ```no_run
/// let client = o365endpoints::Client::new();
/// let endpoints = client.fetch().unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    url: String,
    instance: Instance,
    timeout: u64,
}

/*--------------------------------------------------------------------------------------
  Client Implementation
--------------------------------------------------------------------------------------*/

impl Default for Client {
    fn default() -> Self {
        ClientBuilder::default().build()
    }
}

impl Client {
    pub fn new() -> Self {
        ClientBuilder::new().build()
    }

    /*-------------------------------------------------------------------------
      Getters
    -------------------------------------------------------------------------*/

    /// Get the root URL of the endpoint web service.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get the cloud instance.
    pub fn instance(&self) -> Instance {
        self.instance
    }

    /// Get the request timeout in seconds.
    pub fn timeout(&self) -> u64 {
        self.timeout
    }

    /*-------------------------------------------------------------------------
      Fetch
    -------------------------------------------------------------------------*/

    /// Retrieve and parse the endpoint directory.
    pub fn fetch(&self) -> Result<Endpoints> {
        let json = self.get_json()?;
        Endpoints::from_json(&json)
    }

    /// Build the request URI for a client request ID.
    pub fn request_url(&self, client_request_id: &Uuid) -> Result<Url> {
        let base = format!("{}/{}/", self.url.trim_end_matches('/'), self.instance);
        Url::parse_with_params(
            &base,
            &[("clientrequestid", client_request_id.to_string())],
        )
        .map_err(|error| Error::InvalidUrl(format!("{base}: {error}")))
    }

    /*-------------------------------------------------------------------------
      Private Methods
    -------------------------------------------------------------------------*/

    /// Get the endpoint directory JSON from the web service.
    fn get_json(&self) -> Result<String> {
        let client_request_id = Uuid::new_v4();
        let url = self.request_url(&client_request_id)?;

        info!("Get endpoint directory: GET {url}");

        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(self.timeout))
            .build()?;

        let response = http.get(url.clone()).send()?;
        let status = response.status();
        debug!("Response status: {status}");

        if !status.is_success() {
            return Err(Error::Status {
                status,
                url: url.to_string(),
            });
        }

        Ok(response.text()?)
    }
}

impl EndpointSource for Client {
    fn endpoints(&self) -> Result<Endpoints> {
        self.fetch()
    }
}

/*-------------------------------------------------------------------------------------------------
  Helper Functions
-------------------------------------------------------------------------------------------------*/

/// Get and parse an environment variable value or return a default value.
fn get_env_var<T: FromStr>(env_var: &str, default: T) -> T {
    env::var(env_var)
        .ok()
        .and_then(|value| {
            value
                .parse::<T>()
                .inspect(|_| info!("Using {}: {}", env_var, value))
                .inspect_err(|_| warn!("Invalid {}: {}", env_var, value))
                .ok()
        })
        .unwrap_or(default)
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
