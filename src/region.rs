use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown region: {0}")]
pub struct RegionError(pub String);

/// Platform routing values for the Riot API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    BR1,
    EUN1,
    EUW1,
    JP1,
    KR,
    LA1,
    LA2,
    NA1,
    OC1,
    TR1,
    RU,
    PBE1,
}

impl Region {
    pub const ALL: [Region; 12] = [
        Self::BR1,
        Self::EUN1,
        Self::EUW1,
        Self::JP1,
        Self::KR,
        Self::LA1,
        Self::LA2,
        Self::NA1,
        Self::OC1,
        Self::TR1,
        Self::RU,
        Self::PBE1,
    ];

    /// Host label used in `https://<label>.api.riotgames.com`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BR1 => "br1",
            Self::EUN1 => "eun1",
            Self::EUW1 => "euw1",
            Self::JP1 => "jp1",
            Self::KR => "kr",
            Self::LA1 => "la1",
            Self::LA2 => "la2",
            Self::NA1 => "na1",
            Self::OC1 => "oc1",
            Self::TR1 => "tr1",
            Self::RU => "ru",
            Self::PBE1 => "pbe1",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::BR1 => "Brazil",
            Self::EUN1 => "EU Nordic & East",
            Self::EUW1 => "EU West",
            Self::JP1 => "Japan",
            Self::KR => "Korea",
            Self::LA1 => "Latin America North",
            Self::LA2 => "Latin America South",
            Self::NA1 => "North America",
            Self::OC1 => "Oceania",
            Self::TR1 => "Turkey",
            Self::RU => "Russia",
            Self::PBE1 => "Public Beta Environment",
        }
    }
}

impl FromStr for Region {
    type Err = RegionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "BR" | "BR1" => Ok(Self::BR1),
            "EUNE" | "EUN" | "EUN1" => Ok(Self::EUN1),
            "EUW" | "EUW1" => Ok(Self::EUW1),
            "JP" | "JP1" => Ok(Self::JP1),
            "KR" => Ok(Self::KR),
            "LAN" | "LA1" => Ok(Self::LA1),
            "LAS" | "LA2" => Ok(Self::LA2),
            "NA" | "NA1" => Ok(Self::NA1),
            "OCE" | "OC" | "OC1" => Ok(Self::OC1),
            "TR" | "TR1" => Ok(Self::TR1),
            "RU" => Ok(Self::RU),
            "PBE" | "PBE1" => Ok(Self::PBE1),
            _ => Err(RegionError(s.to_string())),
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_parses_short_and_platform_names() {
        assert_eq!("euw".parse::<Region>(), Ok(Region::EUW1));
        assert_eq!("EUW1".parse::<Region>(), Ok(Region::EUW1));
        assert_eq!("eune".parse::<Region>(), Ok(Region::EUN1));
        assert_eq!(" kr ".parse::<Region>(), Ok(Region::KR));
        assert_eq!(
            "mars".parse::<Region>(),
            Err(RegionError("mars".to_string()))
        );
    }

    #[test]
    fn every_region_round_trips_through_display() {
        for region in Region::ALL {
            assert_eq!(region.to_string().parse::<Region>(), Ok(region));
        }
    }
}
