use std::fmt;
use std::str::FromStr;

/*-------------------------------------------------------------------------------------------------
  Service Area
-------------------------------------------------------------------------------------------------*/

/// The known Microsoft 365 service areas. Endpoint sets carry the short code
/// (`serviceArea`) as a string; codes outside this set are tolerated and reported.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum ServiceArea {
    Common,
    Exchange,
    SharePoint,
    Skype,
}

impl ServiceArea {
    /// All known service areas, in menu order.
    pub const ALL: [ServiceArea; 4] = [
        ServiceArea::Common,
        ServiceArea::Exchange,
        ServiceArea::SharePoint,
        ServiceArea::Skype,
    ];

    /// Short code used in the `serviceArea` field.
    pub fn code(&self) -> &'static str {
        match self {
            ServiceArea::Common => "Common",
            ServiceArea::Exchange => "Exchange",
            ServiceArea::SharePoint => "SharePoint",
            ServiceArea::Skype => "Skype",
        }
    }

    /// Product name published in the `serviceAreaDisplayName` field.
    pub fn display_name(&self) -> &'static str {
        match self {
            ServiceArea::Common => "Microsoft 365 Common and Office Online",
            ServiceArea::Exchange => "Exchange Online",
            ServiceArea::SharePoint => "SharePoint Online and OneDrive for Business",
            ServiceArea::Skype => "Skype for Business Online and Microsoft Teams",
        }
    }

    // Output-key stem for the prefix views; the family suffix is appended.
    pub(crate) fn key_stem(&self) -> &'static str {
        match self {
            ServiceArea::Common => "microsoft365CommonAndOfficeOnline",
            ServiceArea::Exchange => "exchangeOnline",
            ServiceArea::SharePoint => "sharePointOnlineAndOneDriveForBusiness",
            ServiceArea::Skype => "skypeForBusinessOnlineAndMicrosoftTeams",
        }
    }
}

impl fmt::Display for ServiceArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for ServiceArea {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        ServiceArea::ALL
            .into_iter()
            .find(|area| area.code() == value)
            .ok_or_else(|| format!("Unknown service area: {value}"))
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_area_from_str() {
        for area in ServiceArea::ALL {
            assert_eq!(area.code().parse::<ServiceArea>().unwrap(), area);
        }
        assert!("Teams".parse::<ServiceArea>().is_err());
        assert!("exchange".parse::<ServiceArea>().is_err()); // Codes are case-sensitive
    }

    #[test]
    fn test_service_area_key_stems() {
        assert_eq!(ServiceArea::Exchange.key_stem(), "exchangeOnline");
        assert_eq!(
            ServiceArea::Common.key_stem(),
            "microsoft365CommonAndOfficeOnline"
        );
    }
}
