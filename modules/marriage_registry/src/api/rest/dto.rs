use std::collections::BTreeMap;
use std::fmt;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::contract::model::{
    Application, ApplicationPatch, ApplicationSubmission, Registration, UserId, UserSummary,
};

/// Body of `POST /registration`
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationReq {
    #[serde(default)]
    pub husband_name: String,
    #[serde(default)]
    pub wife_name: String,
    #[serde(default)]
    pub contact_number: String,
    #[serde(default)]
    pub login: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub marriage_place: String,
}

/// Body of `POST /addApplication`. A `password` key sent by the form is ignored.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationReq {
    #[serde(default)]
    pub husband_name: String,
    #[serde(default)]
    pub wife_name: String,
    #[serde(default)]
    pub contact_number: String,
    #[serde(default)]
    pub login: String,
    #[serde(default)]
    pub marriage_place: String,
}

/// Body of `POST /editApplication`: the target id plus the fields to overwrite
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EditApplicationReq {
    pub application_id: ApplicationIdParam,
    pub husband_name: Option<String>,
    pub wife_name: Option<String>,
    pub contact_number: Option<String>,
    pub marriage_place: Option<String>,
}

/// Body of `POST /getApplication`: either `{"applicationId": ..}` or the bare id
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum GetApplicationReq {
    Wrapped {
        #[serde(rename = "applicationId")]
        application_id: ApplicationIdParam,
    },
    Bare(ApplicationIdParam),
}

impl GetApplicationReq {
    pub fn application_id(&self) -> UserId {
        match self {
            Self::Wrapped { application_id } | Self::Bare(application_id) => application_id.0,
        }
    }
}

/// Application id as sent by clients: a JSON number or a numeric string
/// (the browser keeps it in local storage, which only holds strings).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct ApplicationIdParam(pub u64);

impl<'de> Deserialize<'de> for ApplicationIdParam {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct IdVisitor;

        impl de::Visitor<'_> for IdVisitor {
            type Value = ApplicationIdParam;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a non-negative integer or a string holding one")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(ApplicationIdParam(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                u64::try_from(v)
                    .map(ApplicationIdParam)
                    .map_err(|_| E::invalid_value(de::Unexpected::Signed(v), &self))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                v.trim()
                    .parse()
                    .map(ApplicationIdParam)
                    .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
            }
        }

        deserializer.deserialize_any(IdVisitor)
    }
}

/// Body of `POST /login`
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct LoginReq {
    #[serde(default)]
    pub login: String,
    #[serde(default)]
    pub password: String,
}

/// Public user view carried by the envelope
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct UserSummaryDto {
    pub id: u64,
    pub login: String,
    pub visits: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationDto {
    pub husband_name: String,
    pub wife_name: String,
    pub contact_number: String,
    pub login: String,
    pub marriage_place: String,
}

/// JSON object returned by every endpoint
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Envelope {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Field name to error message, present on validation failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserSummaryDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application: Option<ApplicationDto>,
}

impl Envelope {
    fn new(success: bool) -> Self {
        Self {
            success,
            message: None,
            errors: None,
            user: None,
            application: None,
        }
    }

    pub fn ok() -> Self {
        Self::new(true)
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(false).with_message(message)
    }

    pub fn invalid(errors: BTreeMap<String, String>) -> Self {
        Self {
            errors: Some(errors),
            ..Self::new(false)
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_user(mut self, user: UserSummaryDto) -> Self {
        self.user = Some(user);
        self
    }

    pub fn with_application(mut self, application: ApplicationDto) -> Self {
        self.application = Some(application);
        self
    }
}

// Conversion implementations between REST DTOs and contract models

impl From<RegistrationReq> for Registration {
    fn from(req: RegistrationReq) -> Self {
        Self {
            husband_name: req.husband_name,
            wife_name: req.wife_name,
            contact_number: req.contact_number,
            login: req.login,
            password: req.password,
            marriage_place: req.marriage_place,
        }
    }
}

impl From<ApplicationReq> for ApplicationSubmission {
    fn from(req: ApplicationReq) -> Self {
        Self {
            husband_name: req.husband_name,
            wife_name: req.wife_name,
            contact_number: req.contact_number,
            login: req.login,
            marriage_place: req.marriage_place,
        }
    }
}

impl EditApplicationReq {
    pub fn into_parts(self) -> (UserId, ApplicationPatch) {
        let patch = ApplicationPatch {
            husband_name: self.husband_name,
            wife_name: self.wife_name,
            contact_number: self.contact_number,
            marriage_place: self.marriage_place,
        };
        (self.application_id.0, patch)
    }
}

impl From<UserSummary> for UserSummaryDto {
    fn from(user: UserSummary) -> Self {
        Self {
            id: user.id,
            login: user.login,
            visits: user.visits,
        }
    }
}

impl From<Application> for ApplicationDto {
    fn from(a: Application) -> Self {
        Self {
            husband_name: a.husband_name,
            wife_name: a.wife_name,
            contact_number: a.contact_number,
            login: a.login,
            marriage_place: a.marriage_place,
        }
    }
}
