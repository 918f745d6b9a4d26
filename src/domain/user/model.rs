use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};

/// Brazilian state (UF) an address belongs to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Region {
    #[default]
    RS,
    SP,
    RJ,
    BA,
    PA,
    SC,
}

impl Region {
    pub const ALL: [Region; 6] = [
        Region::RS,
        Region::SP,
        Region::RJ,
        Region::BA,
        Region::PA,
        Region::SC,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Region::RS => "RS",
            Region::SP => "SP",
            Region::RJ => "RJ",
            Region::BA => "BA",
            Region::PA => "PA",
            Region::SC => "SC",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Region {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Region::ALL
            .into_iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown region code '{}'", s))
    }
}

/// Kind of address stored for a user
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AddressType {
    #[default]
    House,
    Apartment,
    Job,
}

impl AddressType {
    pub const ALL: [AddressType; 3] = [AddressType::House, AddressType::Apartment, AddressType::Job];

    pub fn as_str(&self) -> &'static str {
        match self {
            AddressType::House => "House",
            AddressType::Apartment => "Apartment",
            AddressType::Job => "Job",
        }
    }
}

impl fmt::Display for AddressType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AddressType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AddressType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown address type '{}'", s))
    }
}

/// User model
#[derive(Clone, Debug, PartialEq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Region,
    pub postal_code: Option<String>,
    pub address_type: AddressType,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_parses_case_insensitively() {
        assert_eq!("sp".parse::<Region>(), Ok(Region::SP));
        assert_eq!("SC".parse::<Region>(), Ok(Region::SC));
        assert!("MG".parse::<Region>().is_err());
    }

    #[test]
    fn address_type_parses_case_insensitively() {
        assert_eq!("apartment".parse::<AddressType>(), Ok(AddressType::Apartment));
        assert!("Castle".parse::<AddressType>().is_err());
    }

    #[test]
    fn defaults_are_first_members() {
        assert_eq!(Region::default(), Region::RS);
        assert_eq!(AddressType::default(), AddressType::House);
    }
}
