use crate::core::json::EndpointSet;
use crate::core::service_area::ServiceArea;
use log::trace;

/*-------------------------------------------------------------------------------------------------
  FilterBuilder
-------------------------------------------------------------------------------------------------*/

/// Builder used to construct a [Filter] object with the desired filter parameters.
#[derive(Debug, Default)]
pub struct FilterBuilder {
    service_area: Option<ServiceArea>,
    express_route: Option<bool>,
    with_ips: bool,
}

/*--------------------------------------------------------------------------------------
  Filter Builder Implementation
--------------------------------------------------------------------------------------*/

impl FilterBuilder {
    /// Create a new [FilterBuilder]. By default, no filter parameters are set and the
    /// resulting [Filter] includes every endpoint set.
    ///
    /// ```rust
    /// use o365endpoints::{FilterBuilder, ServiceArea};
    ///
    /// let filter = FilterBuilder::new()
    ///     .service_area(ServiceArea::Exchange)
    ///     .express_route(true)
    ///     .with_ips()
    ///     .build();
    /// assert_eq!(filter.service_area(), Some(ServiceArea::Exchange));
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /*-------------------------------------------------------------------------
      Setters
    -------------------------------------------------------------------------*/

    /// Include endpoint sets from this service area.
    pub fn service_area(mut self, service_area: ServiceArea) -> Self {
        self.service_area = Some(service_area);
        self
    }

    /// Include endpoint sets whose Express Route flag equals `express_route`. A missing flag
    /// is treated as `false`.
    pub fn express_route(mut self, express_route: bool) -> Self {
        self.express_route = Some(express_route);
        self
    }

    /// Include endpoint sets that carry an `ips` field.
    pub fn with_ips(mut self) -> Self {
        self.with_ips = true;
        self
    }

    /*-------------------------------------------------------------------------
      Build Method
    -------------------------------------------------------------------------*/

    pub fn build(self) -> Filter {
        Filter {
            service_area: self.service_area,
            express_route: self.express_route,
            with_ips: self.with_ips,
        }
    }
}

/*-------------------------------------------------------------------------------------------------
  Filter
-------------------------------------------------------------------------------------------------*/

/// Filter used to include endpoint sets based on their service area, Express Route flag, and
/// whether they carry IP prefixes. Use the [FilterBuilder] to construct one.
#[derive(Clone, Debug, Default)]
pub struct Filter {
    service_area: Option<ServiceArea>,
    express_route: Option<bool>,
    with_ips: bool,
}

/*--------------------------------------------------------------------------------------
  Filter Implementation
--------------------------------------------------------------------------------------*/

impl Filter {
    /*-------------------------------------------------------------------------
      Getters
    -------------------------------------------------------------------------*/

    pub fn service_area(&self) -> Option<ServiceArea> {
        self.service_area
    }

    pub fn express_route(&self) -> Option<bool> {
        self.express_route
    }

    pub fn with_ips(&self) -> bool {
        self.with_ips
    }

    /*-------------------------------------------------------------------------
      Filter Functions
    -------------------------------------------------------------------------*/

    pub(crate) fn match_service_area(&self, endpoint_set: &EndpointSet) -> bool {
        if let Some(service_area) = self.service_area {
            endpoint_set.service_area == service_area.code()
        } else {
            trace!("No `service_area` filter");
            true
        }
    }

    pub(crate) fn match_express_route(&self, endpoint_set: &EndpointSet) -> bool {
        if let Some(express_route) = self.express_route {
            endpoint_set.is_express_route() == express_route
        } else {
            trace!("No `express_route` filter");
            true
        }
    }

    pub(crate) fn match_ips(&self, endpoint_set: &EndpointSet) -> bool {
        !self.with_ips || endpoint_set.has_ips()
    }

    /// Check an endpoint set against every filter parameter.
    pub fn include(&self, endpoint_set: &EndpointSet) -> bool {
        let filters = [
            Filter::match_ips,
            Filter::match_service_area,
            Filter::match_express_route,
        ];
        filters.iter().all(|filter| filter(self, endpoint_set))
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::json::tests::test_endpoint_sets;

    #[test]
    fn test_getter_and_setter_methods() {
        let filter1 = FilterBuilder::new()
            .service_area(ServiceArea::Skype)
            .express_route(true)
            .with_ips()
            .build();

        assert_eq!(filter1.service_area(), Some(ServiceArea::Skype));
        assert_eq!(filter1.express_route(), Some(true));
        assert!(filter1.with_ips());

        let filter2 = FilterBuilder::new().build();

        assert!(filter2.service_area().is_none());
        assert!(filter2.express_route().is_none());
        assert!(!filter2.with_ips());
    }

    #[test]
    fn test_filter_match_service_area() {
        let endpoint_sets = test_endpoint_sets();
        let exchange = &endpoint_sets[0];
        let skype = &endpoint_sets[2];

        let filter = FilterBuilder::new()
            .service_area(ServiceArea::Exchange)
            .build();

        assert!(filter.match_service_area(exchange));
        assert!(!filter.match_service_area(skype));
        assert!(Filter::default().match_service_area(skype)); // No filter matches any area
    }

    #[test]
    fn test_filter_match_express_route() {
        let endpoint_sets = test_endpoint_sets();
        let express_route = &endpoint_sets[0];
        let exception = &endpoint_sets[3];

        let er_filter = FilterBuilder::new().express_route(true).build();
        let exception_filter = FilterBuilder::new().express_route(false).build();

        assert!(er_filter.match_express_route(express_route));
        assert!(!er_filter.match_express_route(exception));
        assert!(exception_filter.match_express_route(exception));
        assert!(!exception_filter.match_express_route(express_route));
    }

    #[test]
    fn test_filter_match_ips() {
        let endpoint_sets = test_endpoint_sets();
        let with_ips = &endpoint_sets[0];
        let url_only = &endpoint_sets[5];

        let filter = FilterBuilder::new().with_ips().build();

        assert!(filter.match_ips(with_ips));
        assert!(!filter.match_ips(url_only));
        assert!(Filter::default().match_ips(url_only));
    }

    #[test]
    fn test_filter_include() {
        let filter = FilterBuilder::new()
            .service_area(ServiceArea::Common)
            .express_route(true)
            .with_ips()
            .build();

        let included: Vec<u64> = test_endpoint_sets()
            .iter()
            .filter(|endpoint_set| filter.include(endpoint_set))
            .filter_map(|endpoint_set| endpoint_set.id())
            .collect();

        assert_eq!(included, vec![5]);
    }
}
