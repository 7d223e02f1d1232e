use crate::core::errors::Result;
use crate::core::filter::{Filter, FilterBuilder};
use crate::core::json::{self, EndpointSet};
use crate::core::prefix_type::{self, PrefixType};
use crate::core::results::{AreaPrefixes, EndpointSetList, ServiceAreaInfo};
use crate::core::service_area::ServiceArea;
use log::{debug, trace, warn};
use serde::Serialize;
use std::collections::BTreeSet;

/*-------------------------------------------------------------------------------------------------
  Endpoints
-------------------------------------------------------------------------------------------------*/

/// The endpoint sets of one directory fetch, in source order.
///
/// An [Endpoints] value is built fresh for every fetch and never mutated; each query returns a
/// new result structure ready for [render](crate::render).
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Endpoints {
    endpoint_sets: Vec<EndpointSet>,
}

impl Endpoints {
    /// Parse an endpoint directory JSON document.
    pub fn from_json(json: &str) -> Result<Endpoints> {
        let endpoint_sets = json::parse(json)?;
        debug!("Parsed {} endpoint sets", endpoint_sets.len());
        Ok(Endpoints::from(endpoint_sets))
    }

    pub fn endpoint_sets(&self) -> &[EndpointSet] {
        &self.endpoint_sets
    }

    pub fn len(&self) -> usize {
        self.endpoint_sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.endpoint_sets.is_empty()
    }

    /*-------------------------------------------------------------------------
      Filter
    -------------------------------------------------------------------------*/

    /// Endpoint sets included by the provided [Filter], in source order.
    pub fn filter(&self, filter: &Filter) -> Vec<EndpointSet> {
        self.endpoint_sets
            .iter()
            .filter(|endpoint_set| filter.include(endpoint_set))
            .cloned()
            .collect()
    }

    /*-------------------------------------------------------------------------
      Views
    -------------------------------------------------------------------------*/

    /// Distinct service areas and display names. Logs a warning when the observed service
    /// areas differ from the known set; the observed data is returned either way.
    pub fn service_area_info(&self) -> ServiceAreaInfo {
        let mut info = ServiceAreaInfo::default();

        for endpoint_set in &self.endpoint_sets {
            info.service_areas.insert(endpoint_set.service_area.clone());
            if let Some(display_name) = endpoint_set.service_area_display_name() {
                info.display_names.insert(display_name.to_string());
            }
        }

        info.unknown = info
            .service_areas
            .iter()
            .filter(|code| code.parse::<ServiceArea>().is_err())
            .cloned()
            .collect();

        info.missing = ServiceArea::ALL
            .into_iter()
            .filter(|area| !info.service_areas.contains(area.code()))
            .collect();

        if !info.is_consistent() {
            warn!(
                "Known service areas do not match available service areas; unknown: {:?}, missing: {:?}",
                info.unknown, info.missing
            );
        }

        info
    }

    /// Endpoint sets that are not reachable over Express Route.
    pub fn express_route_exceptions(&self) -> EndpointSetList {
        let filter = FilterBuilder::new().express_route(false).build();
        EndpointSetList::new("expressRoutesExceptions", self.filter(&filter))
    }

    /// Endpoint sets that carry IP prefixes.
    pub fn items_with_ips(&self) -> EndpointSetList {
        let filter = FilterBuilder::new().with_ips().build();
        EndpointSetList::new("allItemsWithIPs", self.filter(&filter))
    }

    /// Deduplicated prefixes of one address family, taken from the Express Route endpoint sets
    /// of a service area.
    ///
    /// Prefix strings that do not parse as a network are skipped and counted; they never fail
    /// the query.
    pub fn prefixes(&self, service_area: ServiceArea, prefix_type: PrefixType) -> AreaPrefixes {
        let filter = FilterBuilder::new()
            .service_area(service_area)
            .express_route(true)
            .with_ips()
            .build();

        let mut prefixes: BTreeSet<String> = BTreeSet::new();
        let mut skipped: usize = 0;

        for endpoint_set in self
            .endpoint_sets
            .iter()
            .filter(|endpoint_set| filter.include(endpoint_set))
        {
            for prefix in endpoint_set.ips().into_iter().flatten() {
                let prefix = prefix.trim();
                match prefix_type::parse_prefix(prefix) {
                    Ok(network) if prefix_type.matches(&network) => {
                        trace!("Endpoint set {:?}: include {}", endpoint_set.id(), prefix);
                        prefixes.insert(prefix.to_string());
                    }
                    Ok(_) => {}
                    Err(error) => {
                        debug!("Endpoint set {:?}: {}", endpoint_set.id(), error);
                        skipped += 1;
                    }
                }
            }
        }

        if skipped > 0 {
            warn!(
                "Skipped {skipped} malformed IP prefix(es) in the {service_area} service area"
            );
        }

        AreaPrefixes {
            service_area,
            prefix_type,
            prefixes,
            skipped,
        }
    }
}

/*--------------------------------------------------------------------------------------
  Create Endpoints from a Vec of Endpoint Sets
--------------------------------------------------------------------------------------*/

impl From<Vec<EndpointSet>> for Endpoints {
    fn from(endpoint_sets: Vec<EndpointSet>) -> Self {
        Self { endpoint_sets }
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
