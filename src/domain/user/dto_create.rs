use super::{AddressType, Region};

/// Fields accepted when inserting a user. The id and creation
/// timestamp are assigned by the store.
#[derive(Debug, Clone, Default)]
pub struct CreateUserDto {
    pub name: String,
    pub email: String,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Region,
    pub postal_code: Option<String>,
    pub address_type: AddressType,
}
