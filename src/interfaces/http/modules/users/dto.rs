//! User DTOs

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::domain::{AddressType, CreateUserDto, Region, UpdateUserDto, User};

/// An enum value as older clients may send it: the code (`"SP"`) or its
/// zero-based position in the declaration order (`1`).
#[derive(Deserialize)]
#[serde(untagged)]
enum WireEnum {
    Index(u64),
    Code(String),
}

fn enum_from_wire<'de, D, T>(deserializer: D, all: &[T]) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Copy + FromStr<Err = String>,
{
    match WireEnum::deserialize(deserializer)? {
        WireEnum::Index(index) => usize::try_from(index)
            .ok()
            .and_then(|i| all.get(i).copied())
            .ok_or_else(|| D::Error::custom(format!("enum index {} out of range", index))),
        WireEnum::Code(code) => code.parse().map_err(D::Error::custom),
    }
}

/// State (UF) code on the wire. Serialized as the code; the numeric
/// index is also accepted on input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ToSchema)]
pub enum StateCode {
    #[default]
    RS,
    SP,
    RJ,
    BA,
    PA,
    SC,
}

impl From<StateCode> for Region {
    fn from(code: StateCode) -> Self {
        match code {
            StateCode::RS => Region::RS,
            StateCode::SP => Region::SP,
            StateCode::RJ => Region::RJ,
            StateCode::BA => Region::BA,
            StateCode::PA => Region::PA,
            StateCode::SC => Region::SC,
        }
    }
}

impl From<Region> for StateCode {
    fn from(region: Region) -> Self {
        match region {
            Region::RS => StateCode::RS,
            Region::SP => StateCode::SP,
            Region::RJ => StateCode::RJ,
            Region::BA => StateCode::BA,
            Region::PA => StateCode::PA,
            Region::SC => StateCode::SC,
        }
    }
}

impl<'de> Deserialize<'de> for StateCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        enum_from_wire(deserializer, &Region::ALL).map(StateCode::from)
    }
}

/// Address type on the wire. Serialized by name; the numeric index is
/// also accepted on input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ToSchema)]
pub enum AddressTypeDto {
    #[default]
    House,
    Apartment,
    Job,
}

impl From<AddressTypeDto> for AddressType {
    fn from(kind: AddressTypeDto) -> Self {
        match kind {
            AddressTypeDto::House => AddressType::House,
            AddressTypeDto::Apartment => AddressType::Apartment,
            AddressTypeDto::Job => AddressType::Job,
        }
    }
}

impl From<AddressType> for AddressTypeDto {
    fn from(kind: AddressType) -> Self {
        match kind {
            AddressType::House => AddressTypeDto::House,
            AddressType::Apartment => AddressTypeDto::Apartment,
            AddressType::Job => AddressTypeDto::Job,
        }
    }
}

impl<'de> Deserialize<'de> for AddressTypeDto {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        enum_from_wire(deserializer, &AddressType::ALL).map(AddressTypeDto::from)
    }
}

/// User API representation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: StateCode,
    pub postal_code: Option<String>,
    pub address_type: AddressTypeDto,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            name: u.name,
            email: u.email,
            street: u.street,
            city: u.city,
            state: u.state.into(),
            postal_code: u.postal_code,
            address_type: u.address_type.into(),
            created_at: u.created_at,
        }
    }
}

/// User payload for create and full replacement.
///
/// `id` is ignored on create and must equal the path id on update.
/// `createdAt`, if sent, is ignored.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserRequest {
    #[serde(default)]
    pub id: Option<i32>,
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: StateCode,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub address_type: AddressTypeDto,
}

impl From<UserRequest> for CreateUserDto {
    fn from(r: UserRequest) -> Self {
        Self {
            name: r.name,
            email: r.email,
            street: r.street,
            city: r.city,
            state: r.state.into(),
            postal_code: r.postal_code,
            address_type: r.address_type.into(),
        }
    }
}

impl From<UserRequest> for UpdateUserDto {
    fn from(r: UserRequest) -> Self {
        CreateUserDto::from(r).into()
    }
}

/// Query string of the legacy `GET /api/User/id?id=N` route
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LegacyIdQuery {
    /// User ID
    pub id: i32,
}
