use crate::core::endpoints::Endpoints;
use crate::core::errors::{Error, Result};
use crate::core::prefix_type::PrefixType;
use crate::core::render::render;
use crate::core::service_area::ServiceArea;
use std::fmt;
use std::str::FromStr;

/*-------------------------------------------------------------------------------------------------
  Views
-------------------------------------------------------------------------------------------------*/

/// The named views of the endpoint directory. Each view is numbered (1-12) for the interactive
/// menu and has a kebab-case name for the command line (`service-areas`, `exchange-ipv4`, ...).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum View {
    ServiceAreas,
    AllItems,
    ExpressRouteExceptions,
    ItemsWithIps,
    Prefixes(ServiceArea, PrefixType),
}

impl View {
    /// All views in menu order.
    pub const ALL: [View; 12] = [
        View::ServiceAreas,
        View::AllItems,
        View::ExpressRouteExceptions,
        View::ItemsWithIps,
        View::Prefixes(ServiceArea::Common, PrefixType::IPv4),
        View::Prefixes(ServiceArea::Common, PrefixType::IPv6),
        View::Prefixes(ServiceArea::Exchange, PrefixType::IPv4),
        View::Prefixes(ServiceArea::Exchange, PrefixType::IPv6),
        View::Prefixes(ServiceArea::SharePoint, PrefixType::IPv4),
        View::Prefixes(ServiceArea::SharePoint, PrefixType::IPv6),
        View::Prefixes(ServiceArea::Skype, PrefixType::IPv4),
        View::Prefixes(ServiceArea::Skype, PrefixType::IPv6),
    ];

    /// Menu number, starting at 1.
    pub fn number(&self) -> usize {
        View::ALL
            .iter()
            .position(|view| view == self)
            .map_or(0, |index| index + 1)
    }

    /// Look up a view by its menu number.
    pub fn from_number(number: usize) -> Option<View> {
        number
            .checked_sub(1)
            .and_then(|index| View::ALL.get(index).copied())
    }

    /// Command-line name.
    pub fn name(&self) -> String {
        match self {
            View::ServiceAreas => "service-areas".to_string(),
            View::AllItems => "all-items".to_string(),
            View::ExpressRouteExceptions => "express-route-exceptions".to_string(),
            View::ItemsWithIps => "items-with-ips".to_string(),
            View::Prefixes(service_area, prefix_type) => format!(
                "{}-{}",
                service_area.code().to_lowercase(),
                prefix_type.to_string().to_lowercase()
            ),
        }
    }

    /// Menu title.
    pub fn title(&self) -> String {
        match self {
            View::ServiceAreas => "Available service areas and display names.".to_string(),
            View::AllItems => "Raw and complete source JSON.".to_string(),
            View::ExpressRouteExceptions => "Express Route exceptions.".to_string(),
            View::ItemsWithIps => "All items from source JSON containing IPs.".to_string(),
            View::Prefixes(service_area, prefix_type) => format!(
                "{prefix_type} networks for {}.",
                service_area.display_name()
            ),
        }
    }

    /// Apply the view to an endpoint directory and render the result as JSON text.
    ///
    /// ```
    /// use o365endpoints::{Endpoints, PrefixType, ServiceArea, View};
    ///
    /// let endpoints = Endpoints::from_json(
    ///     r#"[{"serviceArea":"Exchange","expressRoute":true,"ips":["13.107.6.152/31","2a01:111:f400::/48"]}]"#,
    /// )?;
    ///
    /// let view = View::Prefixes(ServiceArea::Exchange, PrefixType::IPv4);
    /// let text = view.apply(&endpoints)?;
    /// assert_eq!(text, "{\n    \"exchangeOnlineIPv4\": [\n        \"13.107.6.152/31\"\n    ]\n}");
    /// # Ok::<(), o365endpoints::Error>(())
    /// ```
    pub fn apply(&self, endpoints: &Endpoints) -> Result<String> {
        match self {
            View::ServiceAreas => render(&endpoints.service_area_info()),
            View::AllItems => render(endpoints),
            View::ExpressRouteExceptions => render(&endpoints.express_route_exceptions()),
            View::ItemsWithIps => render(&endpoints.items_with_ips()),
            View::Prefixes(service_area, prefix_type) => {
                render(&endpoints.prefixes(*service_area, *prefix_type))
            }
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

/// Parse a view from its menu number or its command-line name (case-insensitive).
impl FromStr for View {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        let value = value.trim();

        if let Ok(number) = value.parse::<usize>() {
            return View::from_number(number)
                .ok_or_else(|| Error::Selection("Not a valid selection!".to_string()));
        }

        View::ALL
            .into_iter()
            .find(|view| view.name().eq_ignore_ascii_case(value))
            .ok_or_else(|| Error::Selection(format!("Unknown view: {value}")))
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
