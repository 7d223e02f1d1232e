use crate::core::json::EndpointSet;
use crate::core::prefix_type::PrefixType;
use crate::core::service_area::ServiceArea;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::collections::BTreeSet;

/*-------------------------------------------------------------------------------------------------
  Service Area Info
-------------------------------------------------------------------------------------------------*/

/// Distinct service areas and display names observed in an endpoint directory, plus the
/// differences from the known service-area set.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ServiceAreaInfo {
    /// Observed `serviceArea` codes.
    pub service_areas: BTreeSet<String>,

    /// Observed `serviceAreaDisplayName` labels.
    pub display_names: BTreeSet<String>,

    /// Observed codes that are not known service areas.
    pub unknown: BTreeSet<String>,

    /// Known service areas that were not observed.
    pub missing: BTreeSet<ServiceArea>,
}

impl ServiceAreaInfo {
    /// `true` when the observed areas are exactly the known set.
    pub fn is_consistent(&self) -> bool {
        self.unknown.is_empty() && self.missing.is_empty()
    }
}

// Each entry renders as a single-key object, e.g. `{"serviceAreas": [...]}`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
enum ServiceAreaInfoEntry<'a> {
    ServiceAreas(&'a BTreeSet<String>),
    ServiceAreaDisplayNames(&'a BTreeSet<String>),
}

impl Serialize for ServiceAreaInfo {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let info = [
            ServiceAreaInfoEntry::ServiceAreas(&self.service_areas),
            ServiceAreaInfoEntry::ServiceAreaDisplayNames(&self.display_names),
        ];

        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry("serviceAreaInfo", &info)?;
        map.end()
    }
}

/*-------------------------------------------------------------------------------------------------
  Endpoint Set List
-------------------------------------------------------------------------------------------------*/

/// A subset of the endpoint directory wrapped under a result key.
#[derive(Clone, Debug, PartialEq)]
pub struct EndpointSetList {
    key: &'static str,
    endpoint_sets: Vec<EndpointSet>,
}

impl EndpointSetList {
    pub(crate) fn new(key: &'static str, endpoint_sets: Vec<EndpointSet>) -> Self {
        Self { key, endpoint_sets }
    }

    /// Top-level key of the rendered result.
    pub fn key(&self) -> &'static str {
        self.key
    }

    pub fn endpoint_sets(&self) -> &[EndpointSet] {
        &self.endpoint_sets
    }
}

impl Serialize for EndpointSetList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.key, &self.endpoint_sets)?;
        map.end()
    }
}

/*-------------------------------------------------------------------------------------------------
  Area Prefixes
-------------------------------------------------------------------------------------------------*/

/// Deduplicated IP prefixes of one address family for one service area.
#[derive(Clone, Debug, PartialEq)]
pub struct AreaPrefixes {
    pub(crate) service_area: ServiceArea,
    pub(crate) prefix_type: PrefixType,
    pub(crate) prefixes: BTreeSet<String>,
    pub(crate) skipped: usize,
}

impl AreaPrefixes {
    pub fn service_area(&self) -> ServiceArea {
        self.service_area
    }

    pub fn prefix_type(&self) -> PrefixType {
        self.prefix_type
    }

    pub fn prefixes(&self) -> &BTreeSet<String> {
        &self.prefixes
    }

    /// Number of prefix strings skipped because they did not parse as a network. Counted over
    /// every matching endpoint set, regardless of address family.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Top-level key of the rendered result, e.g. `exchangeOnlineIPv4`.
    pub fn key(&self) -> String {
        format!("{}{}", self.service_area.key_stem(), self.prefix_type)
    }
}

impl Serialize for AreaPrefixes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.key(), &self.prefixes)?;
        map.end()
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_service_area_info_shape() {
        let info = ServiceAreaInfo {
            service_areas: ["Exchange".to_string()].into_iter().collect(),
            display_names: ["Exchange Online".to_string()].into_iter().collect(),
            ..ServiceAreaInfo::default()
        };

        let value = serde_json::to_value(&info).unwrap();
        assert_eq!(
            value,
            json!({"serviceAreaInfo": [
                {"serviceAreas": ["Exchange"]},
                {"serviceAreaDisplayNames": ["Exchange Online"]}
            ]})
        );
    }

    #[test]
    fn test_area_prefixes_key() {
        let prefixes = AreaPrefixes {
            service_area: ServiceArea::SharePoint,
            prefix_type: PrefixType::IPv6,
            prefixes: BTreeSet::new(),
            skipped: 0,
        };
        assert_eq!(prefixes.key(), "sharePointOnlineAndOneDriveForBusinessIPv6");

        let value = serde_json::to_value(&prefixes).unwrap();
        assert_eq!(
            value["sharePointOnlineAndOneDriveForBusinessIPv6"],
            Value::Array(vec![])
        );
    }

    #[test]
    fn test_skipped_count_is_not_serialized() {
        let prefixes = AreaPrefixes {
            service_area: ServiceArea::Skype,
            prefix_type: PrefixType::IPv4,
            prefixes: ["52.112.0.0/14".to_string()].into_iter().collect(),
            skipped: 3,
        };
        let value = serde_json::to_value(&prefixes).unwrap();
        assert_eq!(value.as_object().unwrap().len(), 1);
    }
}
