//! DTOs for decoding the remote user list.
//!
//! The adapter decodes into these transport DTOs first, then maps them into
//! domain records in one pass. Fields the directory does not use (such as
//! `address.geo`) are ignored. Optional text fields may be absent or `null`
//! and decode as empty strings.

use serde::Deserialize;

use crate::domain::{Address, Company, Contact, User, UserId};

#[derive(Debug, Deserialize)]
pub(super) struct UserDto {
    pub(super) id: u64,
    pub(super) name: String,
    pub(super) username: String,
    #[serde(default)]
    pub(super) email: Option<String>,
    #[serde(default)]
    pub(super) phone: Option<String>,
    #[serde(default)]
    pub(super) website: Option<String>,
    pub(super) address: AddressDto,
    pub(super) company: CompanyDto,
}

#[derive(Debug, Deserialize)]
pub(super) struct AddressDto {
    #[serde(default)]
    pub(super) street: Option<String>,
    #[serde(default)]
    pub(super) suite: Option<String>,
    pub(super) city: String,
    #[serde(default)]
    pub(super) zipcode: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct CompanyDto {
    pub(super) name: String,
    #[serde(default)]
    pub(super) catch_phrase: Option<String>,
    #[serde(default)]
    pub(super) bs: Option<String>,
}

impl From<UserDto> for User {
    fn from(dto: UserDto) -> Self {
        Self::new(UserId::new(dto.id), dto.name, dto.username)
            .with_contact(Contact {
                email: dto.email.unwrap_or_default(),
                phone: dto.phone.unwrap_or_default(),
                website: dto.website.unwrap_or_default(),
            })
            .with_address(Address {
                street: dto.address.street.unwrap_or_default(),
                suite: dto.address.suite.unwrap_or_default(),
                city: dto.address.city,
                zipcode: dto.address.zipcode.unwrap_or_default(),
            })
            .with_company(Company {
                name: dto.company.name,
                catch_phrase: dto.company.catch_phrase.unwrap_or_default(),
                bs: dto.company.bs.unwrap_or_default(),
            })
    }
}

/// Decode a JSON array of user records, preserving source order.
pub(super) fn decode_users(body: &[u8]) -> Result<Vec<User>, serde_json::Error> {
    let decoded: Vec<UserDto> = serde_json::from_slice(body)?;
    Ok(decoded.into_iter().map(User::from).collect())
}
