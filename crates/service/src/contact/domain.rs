use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;
use crate::validation::{self, FieldRule, Rule};
use models::contact::MAX_LEN;

const CREATE: &[FieldRule] = &[
    FieldRule::new("first_name", &[Rule::Required, Rule::MaxLen(MAX_LEN)]),
    FieldRule::new("last_name", &[Rule::NotBlank, Rule::MaxLen(MAX_LEN)]),
    FieldRule::new("email", &[Rule::NotBlank, Rule::MaxLen(MAX_LEN), Rule::Email]),
    FieldRule::new("phone", &[Rule::NotBlank, Rule::MaxLen(MAX_LEN)]),
];

const UPDATE: &[FieldRule] = &[
    FieldRule::new("first_name", &[Rule::NotBlank, Rule::MaxLen(MAX_LEN)]),
    FieldRule::new("last_name", &[Rule::NotBlank, Rule::MaxLen(MAX_LEN)]),
    FieldRule::new("email", &[Rule::NotBlank, Rule::MaxLen(MAX_LEN), Rule::Email]),
    FieldRule::new("phone", &[Rule::NotBlank, Rule::MaxLen(MAX_LEN)]),
];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateContactRequest {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    /// Accepted for compatibility and ignored: the owner is always the caller.
    #[serde(default)]
    pub username: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateContactRequest {
    /// Target contact; filled from the request path.
    #[serde(default)]
    pub id: i32,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactResponse {
    pub id: i32,
    pub first_name: String,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl From<models::contact::Model> for ContactResponse {
    fn from(m: models::contact::Model) -> Self {
        Self { id: m.id, first_name: m.first_name, last_name: m.last_name, email: m.email, phone: m.phone }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    pub first_name: String,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Partial update; `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactChanges {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl CreateContactRequest {
    pub fn validate(self) -> Result<NewContact, ServiceError> {
        validation::validate(
            CREATE,
            &[
                ("first_name", self.first_name.as_deref()),
                ("last_name", self.last_name.as_deref()),
                ("email", self.email.as_deref()),
                ("phone", self.phone.as_deref()),
            ],
        )?;
        Ok(NewContact {
            first_name: self.first_name.unwrap_or_default(),
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
        })
    }
}

impl UpdateContactRequest {
    pub fn validate(self) -> Result<(i32, ContactChanges), ServiceError> {
        if self.id <= 0 {
            return Err(ServiceError::Validation("id must be a positive integer".into()));
        }
        validation::validate(
            UPDATE,
            &[
                ("first_name", self.first_name.as_deref()),
                ("last_name", self.last_name.as_deref()),
                ("email", self.email.as_deref()),
                ("phone", self.phone.as_deref()),
            ],
        )?;
        let changes = ContactChanges {
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
        };
        Ok((self.id, changes))
    }
}
