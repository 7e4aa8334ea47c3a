//! Field validation for registration and application forms.
//!
//! The validator is stateless apart from its limits. Format checks are pure;
//! the only lookup is the login uniqueness check against the repository, which
//! the caller can switch off through [`ValidationProfile`].

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::contract::model::{ApplicationPatch, ApplicationSubmission, Registration};
use crate::domain::repo::UsersRepository;

/// Wire names of the recognised form fields.
pub mod fields {
    pub const HUSBAND_NAME: &str = "husbandName";
    pub const WIFE_NAME: &str = "wifeName";
    pub const CONTACT_NUMBER: &str = "contactNumber";
    pub const LOGIN: &str = "login";
    pub const PASSWORD: &str = "password";
    pub const MARRIAGE_PLACE: &str = "marriagePlace";

    pub const ALL: [&str; 6] = [
        HUSBAND_NAME,
        WIFE_NAME,
        CONTACT_NUMBER,
        LOGIN,
        PASSWORD,
        MARRIAGE_PLACE,
    ];
}

const MSG_REQUIRED: &str = "This field is required";
const MSG_NAME_CHARS: &str = "Only letters, spaces, hyphens and apostrophes are allowed";
const MSG_CONTACT: &str = "Enter a phone number with 10 to 15 digits";
const MSG_LOGIN_FORMAT: &str = "Login must be 3-32 characters: letters, digits, '_', '.', '-'";
const MSG_LOGIN_TAKEN: &str = "This login is already taken";

const MIN_NAME_LENGTH: usize = 2;
const MIN_CONTACT_DIGITS: usize = 10;
const MAX_CONTACT_DIGITS: usize = 15;

static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\p{L}[\p{L} '\-]*$").expect("name pattern is valid"));
static CONTACT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9 ()\-]+$").expect("contact pattern is valid"));
static LOGIN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_.\-]{3,32}$").expect("login pattern is valid"));

/// Field name → error message, one entry per failing field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<String, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error for `field`. The first error reported for a field wins.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn remove(&mut self, field: &str) -> Option<String> {
        self.0.remove(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn into_inner(self) -> BTreeMap<String, String> {
        self.0
    }
}

/// Which checks apply to a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationProfile {
    /// New account: every field, password required, login must be unused.
    Registration,
    /// Application from a logged-in user: the login already exists, so the
    /// uniqueness check is skipped and the password is not part of the form.
    Application,
    /// Partial edit: only the fields present in the payload are checked.
    ApplicationPatch,
}

impl ValidationProfile {
    fn checks(self, field: &str) -> bool {
        match self {
            Self::Registration => true,
            Self::Application => field != fields::PASSWORD,
            Self::ApplicationPatch => field != fields::PASSWORD && field != fields::LOGIN,
        }
    }

    fn requires(self, field: &str, present: bool) -> bool {
        match self {
            Self::Registration | Self::Application => field != fields::MARRIAGE_PLACE,
            Self::ApplicationPatch => present && field != fields::MARRIAGE_PLACE,
        }
    }

    fn checks_login_uniqueness(self) -> bool {
        matches!(self, Self::Registration)
    }
}

/// Borrowed view over the submitted form fields, keyed by wire name.
#[derive(Debug, Clone, Default)]
pub struct FormData<'a> {
    values: BTreeMap<&'static str, &'a str>,
}

impl<'a> FormData<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: &'static str, value: &'a str) -> Self {
        self.values.insert(field, value);
        self
    }

    pub fn get(&self, field: &str) -> Option<&'a str> {
        self.values.get(field).copied()
    }
}

impl<'a> From<&'a Registration> for FormData<'a> {
    fn from(r: &'a Registration) -> Self {
        FormData::new()
            .with(fields::HUSBAND_NAME, &r.husband_name)
            .with(fields::WIFE_NAME, &r.wife_name)
            .with(fields::CONTACT_NUMBER, &r.contact_number)
            .with(fields::LOGIN, &r.login)
            .with(fields::PASSWORD, &r.password)
            .with(fields::MARRIAGE_PLACE, &r.marriage_place)
    }
}

impl<'a> From<&'a ApplicationSubmission> for FormData<'a> {
    fn from(s: &'a ApplicationSubmission) -> Self {
        FormData::new()
            .with(fields::HUSBAND_NAME, &s.husband_name)
            .with(fields::WIFE_NAME, &s.wife_name)
            .with(fields::CONTACT_NUMBER, &s.contact_number)
            .with(fields::LOGIN, &s.login)
            .with(fields::MARRIAGE_PLACE, &s.marriage_place)
    }
}

impl<'a> From<&'a ApplicationPatch> for FormData<'a> {
    fn from(p: &'a ApplicationPatch) -> Self {
        let mut data = FormData::new();
        let present = [
            (fields::HUSBAND_NAME, &p.husband_name),
            (fields::WIFE_NAME, &p.wife_name),
            (fields::CONTACT_NUMBER, &p.contact_number),
            (fields::MARRIAGE_PLACE, &p.marriage_place),
        ];
        for (field, value) in present {
            if let Some(v) = value {
                data = data.with(field, v);
            }
        }
        data
    }
}

/// Length limits applied by the format checks
#[derive(Debug, Clone)]
pub struct ValidationLimits {
    pub max_name_length: usize,
    pub max_place_length: usize,
    pub min_password_length: usize,
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self {
            max_name_length: 100,
            max_place_length: 200,
            min_password_length: 1,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Validator {
    limits: ValidationLimits,
}

impl Validator {
    pub fn new(limits: ValidationLimits) -> Self {
        Self { limits }
    }

    /// Run every check the profile enables and collect the failures.
    ///
    /// Only a repository failure is an `Err`; rejected fields are reported in
    /// the returned map.
    pub async fn validate_all(
        &self,
        data: &FormData<'_>,
        repo: &dyn UsersRepository,
        profile: ValidationProfile,
    ) -> anyhow::Result<ValidationErrors> {
        let mut errors = self.validate_fields(data, profile);

        if profile.checks_login_uniqueness() && !errors.contains(fields::LOGIN) {
            if let Some(login) = data.get(fields::LOGIN) {
                if repo.find_by_login(login).await?.is_some() {
                    errors.add(fields::LOGIN, MSG_LOGIN_TAKEN);
                }
            }
        }

        Ok(errors)
    }

    /// Presence and format checks only; never touches the repository.
    pub fn validate_fields(&self, data: &FormData<'_>, profile: ValidationProfile) -> ValidationErrors {
        let mut errors = ValidationErrors::new();

        for field in fields::ALL {
            if !profile.checks(field) {
                continue;
            }
            let raw = data.get(field);
            match raw.filter(|v| !v.trim().is_empty()) {
                None => {
                    if profile.requires(field, raw.is_some()) {
                        errors.add(field, MSG_REQUIRED);
                    }
                }
                Some(value) => {
                    if let Some(message) = self.check_format(field, value) {
                        errors.add(field, message);
                    }
                }
            }
        }

        errors
    }

    fn check_format(&self, field: &str, value: &str) -> Option<String> {
        match field {
            fields::HUSBAND_NAME | fields::WIFE_NAME => self.check_name(value.trim()),
            fields::CONTACT_NUMBER => check_contact(value.trim()),
            fields::LOGIN => (!LOGIN_RE.is_match(value)).then(|| MSG_LOGIN_FORMAT.to_string()),
            fields::PASSWORD => (value.chars().count() < self.limits.min_password_length).then(|| {
                format!(
                    "Password must be at least {} characters",
                    self.limits.min_password_length
                )
            }),
            fields::MARRIAGE_PLACE => (value.trim().chars().count() > self.limits.max_place_length)
                .then(|| format!("Must be at most {} characters", self.limits.max_place_length)),
            _ => None,
        }
    }

    fn check_name(&self, value: &str) -> Option<String> {
        let len = value.chars().count();
        if len < MIN_NAME_LENGTH || len > self.limits.max_name_length {
            return Some(format!(
                "Must be between {} and {} characters",
                MIN_NAME_LENGTH, self.limits.max_name_length
            ));
        }
        if !NAME_RE.is_match(value) {
            return Some(MSG_NAME_CHARS.to_string());
        }
        None
    }
}

fn check_contact(value: &str) -> Option<String> {
    let digits = value.chars().filter(char::is_ascii_digit).count();
    if !CONTACT_RE.is_match(value) || !(MIN_CONTACT_DIGITS..=MAX_CONTACT_DIGITS).contains(&digits) {
        return Some(MSG_CONTACT.to_string());
    }
    None
}
