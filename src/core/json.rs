use crate::core::errors::Result;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/*-------------------------------------------------------------------------------------------------
  Parse JSON
-------------------------------------------------------------------------------------------------*/

/// Parse the endpoint directory; the top level must be an array of endpoint-set objects.
pub fn parse(json: &str) -> Result<Vec<EndpointSet>> {
    Ok(serde_json::from_str(json)?)
}

/*-------------------------------------------------------------------------------------------------
  JSON Data Structures
-------------------------------------------------------------------------------------------------*/

/*--------------------------------------------------------------------------------------
  Endpoint Set
--------------------------------------------------------------------------------------*/

/// One record of the endpoint directory.
///
/// Only `serviceArea` is required. The fields the filters use are typed; every other field
/// (`urls`, `tcpPorts`, `category`, `required`, `notes`, ...) is kept in `other` and serialized
/// back unchanged. Optional fields distinguish absent (`None`) from an explicit `null`
/// (`Some(None)`), so neither is synthesized nor dropped on output.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointSet {
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<Option<u64>>,

    pub service_area: String,

    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub service_area_display_name: Option<Option<String>>,

    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub express_route: Option<Option<bool>>,

    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub ips: Option<Option<Vec<String>>>,

    #[serde(flatten)]
    pub other: Map<String, Value>,
}

impl EndpointSet {
    pub fn id(&self) -> Option<u64> {
        self.id.flatten()
    }

    pub fn service_area_display_name(&self) -> Option<&str> {
        self.service_area_display_name
            .as_ref()
            .and_then(|name| name.as_deref())
    }

    /// Reachable over Express Route; an absent or `null` flag counts as an exception.
    pub fn is_express_route(&self) -> bool {
        self.express_route.flatten().unwrap_or(false)
    }

    pub fn ips(&self) -> Option<&[String]> {
        self.ips.as_ref().and_then(|ips| ips.as_deref())
    }

    pub fn has_ips(&self) -> bool {
        self.ips().is_some()
    }
}

// A field that is present in the source, `null` included.
fn present<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
