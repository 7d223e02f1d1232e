use ipnetwork::IpNetwork;
use std::fmt;

/*-------------------------------------------------------------------------------------------------
  Prefix Type
-------------------------------------------------------------------------------------------------*/

/// IP prefix type (IPv4 or IPv6) used to split a service area's prefixes by address family.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum PrefixType {
    IPv4,
    IPv6,
}

impl PrefixType {
    pub fn is_ipv4(&self) -> bool {
        match self {
            PrefixType::IPv4 => true,
            PrefixType::IPv6 => false,
        }
    }

    pub fn is_ipv6(&self) -> bool {
        match self {
            PrefixType::IPv4 => false,
            PrefixType::IPv6 => true,
        }
    }

    /// Check if a parsed network belongs to this address family.
    pub fn matches(&self, network: &IpNetwork) -> bool {
        PrefixType::of(network) == *self
    }

    /// The address family of a parsed network.
    pub fn of(network: &IpNetwork) -> PrefixType {
        match network {
            IpNetwork::V4(_) => PrefixType::IPv4,
            IpNetwork::V6(_) => PrefixType::IPv6,
        }
    }
}

impl fmt::Display for PrefixType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrefixType::IPv4 => f.write_str("IPv4"),
            PrefixType::IPv6 => f.write_str("IPv6"),
        }
    }
}

/*-------------------------------------------------------------------------------------------------
  Prefix Parsing
-------------------------------------------------------------------------------------------------*/

/// Parse a CIDR prefix string into a network.
///
/// A bare address is accepted as a host network (`/32` or `/128`). A prefix with host bits set
/// beyond its length (`10.0.0.1/8`) is rejected; the directory only publishes network prefixes.
pub fn parse_prefix(value: &str) -> Result<IpNetwork, String> {
    let network: IpNetwork = value
        .trim()
        .parse()
        .map_err(|error| format!("Invalid IP prefix {value:?}: {error}"))?;

    if network.ip() != network.network() {
        return Err(format!("Invalid IP prefix {value:?}: host bits set"));
    }

    Ok(network)
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/

#[cfg(test)]
mod tests {
    use super::*;

    /*----------------------------------------------------------------------------------
      PrefixType
    ----------------------------------------------------------------------------------*/

    #[test]
    fn test_prefix_type_is_ipv4() {
        let ipv4 = PrefixType::IPv4;
        assert!(ipv4.is_ipv4());
        assert!(!ipv4.is_ipv6());
    }

    #[test]
    fn test_prefix_type_is_ipv6() {
        let ipv6 = PrefixType::IPv6;
        assert!(!ipv6.is_ipv4());
        assert!(ipv6.is_ipv6());
    }

    #[test]
    fn test_prefix_type_matches() {
        let ipv4: IpNetwork = "13.107.6.152/31".parse().unwrap();
        let ipv6: IpNetwork = "2a01:111:f400::/48".parse().unwrap();

        assert!(PrefixType::IPv4.matches(&ipv4));
        assert!(!PrefixType::IPv4.matches(&ipv6));
        assert!(PrefixType::IPv6.matches(&ipv6));
        assert!(!PrefixType::IPv6.matches(&ipv4));
    }

    /*----------------------------------------------------------------------------------
      parse_prefix
    ----------------------------------------------------------------------------------*/

    #[test]
    fn test_parse_prefix() {
        assert!(parse_prefix("13.107.6.152/31").is_ok());
        assert!(parse_prefix("2a01:111:f400::/48").is_ok());
        assert!(parse_prefix("40.92.0.0/15").is_ok());
        assert!(parse_prefix("52.100.0.1").is_ok()); // Host network

        assert!(parse_prefix("not-a-prefix").is_err());
        assert!(parse_prefix("10.0.0.0/33").is_err());
        assert!(parse_prefix("10.0.0.1/8").is_err()); // Host bits set
        assert!(parse_prefix("").is_err());
    }
}
