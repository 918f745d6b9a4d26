use super::{AddressType, CreateUserDto, Region};

/// Full replacement of a user's mutable fields.
///
/// Every field is written; `None` clears the optional address parts.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserDto {
    pub name: String,
    pub email: String,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Region,
    pub postal_code: Option<String>,
    pub address_type: AddressType,
}

impl From<CreateUserDto> for UpdateUserDto {
    fn from(dto: CreateUserDto) -> Self {
        Self {
            name: dto.name,
            email: dto.email,
            street: dto.street,
            city: dto.city,
            state: dto.state,
            postal_code: dto.postal_code,
            address_type: dto.address_type,
        }
    }
}
