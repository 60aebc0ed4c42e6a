use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;
use crate::validation::{self, FieldRule, Rule};
use models::user::MAX_LEN;

const REGISTER: &[FieldRule] = &[
    FieldRule::new("username", &[Rule::Required, Rule::MaxLen(MAX_LEN)]),
    FieldRule::new("password", &[Rule::Required, Rule::MaxLen(MAX_LEN)]),
    FieldRule::new("name", &[Rule::Required, Rule::MaxLen(MAX_LEN)]),
];

const LOGIN: &[FieldRule] = &[
    FieldRule::new("username", &[Rule::Required, Rule::MaxLen(MAX_LEN)]),
    FieldRule::new("password", &[Rule::Required, Rule::MaxLen(MAX_LEN)]),
];

const UPDATE: &[FieldRule] = &[
    FieldRule::new("name", &[Rule::NotBlank, Rule::MaxLen(MAX_LEN)]),
    FieldRule::new("password", &[Rule::NotBlank, Rule::MaxLen(MAX_LEN)]),
];

/// The authenticated caller, resolved from a session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub username: String,
    pub name: String,
}

impl From<models::user::Model> for CurrentUser {
    fn from(m: models::user::Model) -> Self {
        Self { username: m.username, name: m.name }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisterUserRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginUserRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub username: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl UserResponse {
    pub fn from_model(m: models::user::Model) -> Self {
        Self { username: m.username, name: m.name, token: None }
    }
}

/// Validated registration: plaintext password, hashed by the service.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Column changes applied by the repository; `None` leaves a column as is.
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub name: Option<String>,
    pub password_hash: Option<String>,
    /// `Some(None)` clears the token.
    pub token: Option<Option<String>>,
}

impl RegisterUserRequest {
    pub fn validate(self) -> Result<NewUser, ServiceError> {
        validation::validate(
            REGISTER,
            &[
                ("username", self.username.as_deref()),
                ("password", self.password.as_deref()),
                ("name", self.name.as_deref()),
            ],
        )?;
        Ok(NewUser {
            username: self.username.unwrap_or_default(),
            password: self.password.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
        })
    }
}

impl LoginUserRequest {
    pub fn validate(self) -> Result<Credentials, ServiceError> {
        validation::validate(
            LOGIN,
            &[("username", self.username.as_deref()), ("password", self.password.as_deref())],
        )?;
        Ok(Credentials {
            username: self.username.unwrap_or_default(),
            password: self.password.unwrap_or_default(),
        })
    }
}

impl UpdateUserRequest {
    pub fn validate(self) -> Result<Self, ServiceError> {
        validation::validate(
            UPDATE,
            &[("name", self.name.as_deref()), ("password", self.password.as_deref())],
        )?;
        Ok(self)
    }
}
