use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;
use crate::validation::{self, FieldRule, Rule};
use models::address::{MAX_LEN, POSTAL_CODE_MAX_LEN, STREET_MAX_LEN};

const CREATE: &[FieldRule] = &[
    FieldRule::new("street", &[Rule::NotBlank, Rule::MaxLen(STREET_MAX_LEN)]),
    FieldRule::new("city", &[Rule::NotBlank, Rule::MaxLen(MAX_LEN)]),
    FieldRule::new("province", &[Rule::NotBlank, Rule::MaxLen(MAX_LEN)]),
    FieldRule::new("country", &[Rule::Required, Rule::MaxLen(MAX_LEN)]),
    FieldRule::new("postal_code", &[Rule::Required, Rule::MaxLen(POSTAL_CODE_MAX_LEN)]),
];

const UPDATE: &[FieldRule] = &[
    FieldRule::new("street", &[Rule::NotBlank, Rule::MaxLen(STREET_MAX_LEN)]),
    FieldRule::new("city", &[Rule::NotBlank, Rule::MaxLen(MAX_LEN)]),
    FieldRule::new("province", &[Rule::NotBlank, Rule::MaxLen(MAX_LEN)]),
    FieldRule::new("country", &[Rule::NotBlank, Rule::MaxLen(MAX_LEN)]),
    FieldRule::new("postal_code", &[Rule::NotBlank, Rule::MaxLen(POSTAL_CODE_MAX_LEN)]),
];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateAddressRequest {
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub province: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateAddressRequest {
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub province: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressResponse {
    pub id: i32,
    pub street: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,
    pub country: String,
    pub postal_code: String,
}

impl From<models::address::Model> for AddressResponse {
    fn from(m: models::address::Model) -> Self {
        Self {
            id: m.id,
            street: m.street,
            city: m.city,
            province: m.province,
            country: m.country,
            postal_code: m.postal_code,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAddress {
    pub street: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,
    pub country: String,
    pub postal_code: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressChanges {
    pub street: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,
    pub country: Option<String>,
    pub postal_code: Option<String>,
}

impl CreateAddressRequest {
    pub fn validate(self) -> Result<NewAddress, ServiceError> {
        validation::validate(
            CREATE,
            &[
                ("street", self.street.as_deref()),
                ("city", self.city.as_deref()),
                ("province", self.province.as_deref()),
                ("country", self.country.as_deref()),
                ("postal_code", self.postal_code.as_deref()),
            ],
        )?;
        Ok(NewAddress {
            street: self.street,
            city: self.city,
            province: self.province,
            country: self.country.unwrap_or_default(),
            postal_code: self.postal_code.unwrap_or_default(),
        })
    }
}

impl UpdateAddressRequest {
    pub fn validate(self) -> Result<AddressChanges, ServiceError> {
        validation::validate(
            UPDATE,
            &[
                ("street", self.street.as_deref()),
                ("city", self.city.as_deref()),
                ("province", self.province.as_deref()),
                ("country", self.country.as_deref()),
                ("postal_code", self.postal_code.as_deref()),
            ],
        )?;
        Ok(AddressChanges {
            street: self.street,
            city: self.city,
            province: self.province,
            country: self.country,
            postal_code: self.postal_code,
        })
    }
}
