//! Query the Microsoft 365 network endpoint directory.
//!
//! The endpoint web service publishes, per cloud instance, a JSON array of endpoint sets: the
//! service area, URLs, ports and IP prefixes of each group of Microsoft 365 endpoints. This
//! crate retrieves the directory and re-shapes it into purpose-specific views: per-service-area
//! IPv4/IPv6 prefix lists, Express Route exceptions, and the endpoint sets that carry IP
//! prefixes. Every view renders to indented JSON with sorted keys.
//!
//! ```no_run
//! use o365endpoints::{PrefixType, ServiceArea, View};
//!
//! // Get the endpoint directory
//! let endpoints = o365endpoints::get_endpoints()?;
//!
//! // Query it directly
//! let skype = endpoints.prefixes(ServiceArea::Skype, PrefixType::IPv6);
//! println!("{} Skype IPv6 prefixes", skype.prefixes().len());
//!
//! // Or render a named view
//! println!("{}", View::ExpressRouteExceptions.apply(&endpoints)?);
//! # Ok::<(), o365endpoints::Error>(())
//! ```
//!
//! Nothing is cached: every call to [get_endpoints] or [Client::fetch] requests a fresh copy
//! of the directory with a new client request ID.

/*-------------------------------------------------------------------------------------------------
  Modules
-------------------------------------------------------------------------------------------------*/

mod core;

/*-------------------------------------------------------------------------------------------------
  Library Interface
-------------------------------------------------------------------------------------------------*/

pub use crate::core::client::{get_endpoints, Client, ClientBuilder, Instance};
pub use crate::core::endpoints::Endpoints;
pub use crate::core::errors::{Error, Result};
pub use crate::core::filter::{Filter, FilterBuilder};
pub use crate::core::json::EndpointSet;
pub use crate::core::prefix_type::{parse_prefix, PrefixType};
pub use crate::core::render::render;
pub use crate::core::results::{AreaPrefixes, EndpointSetList, ServiceAreaInfo};
pub use crate::core::service_area::ServiceArea;
pub use crate::core::source::{EndpointSource, FileSource};
pub use crate::core::views::View;

// Re-export the IP network crate used in the public API
pub use ipnetwork;
