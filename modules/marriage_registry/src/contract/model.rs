/// Identifier of a registered user.
///
/// Applications have no identity of their own: an application is addressed by
/// the id of the user that owns it.
pub type UserId = u64;

/// Pure user model for inter-module communication (no serde/utoipa)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub login: String,
    /// Stored verbatim; see `PlaintextCredentials`.
    pub password: String,
    pub visits: u64,
    pub application: Option<Application>,
}

/// Marriage registration request, nested under its owning user
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Application {
    pub husband_name: String,
    pub wife_name: String,
    pub contact_number: String,
    pub login: String,
    pub marriage_place: String,
}

/// Data for creating a new user. The repository assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub login: String,
    pub password: String,
    pub application: Option<Application>,
}

/// Shallow patch over a user's top-level attributes
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserPatch {
    pub login: Option<String>,
    pub password: Option<String>,
    pub visits: Option<u64>,
}

/// Shallow patch over an existing application
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ApplicationPatch {
    pub husband_name: Option<String>,
    pub wife_name: Option<String>,
    pub contact_number: Option<String>,
    pub marriage_place: Option<String>,
}

impl ApplicationPatch {
    pub fn is_empty(&self) -> bool {
        self.husband_name.is_none()
            && self.wife_name.is_none()
            && self.contact_number.is_none()
            && self.marriage_place.is_none()
    }
}

/// Registration form: credentials plus the initial application
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Registration {
    pub husband_name: String,
    pub wife_name: String,
    pub contact_number: String,
    pub login: String,
    pub password: String,
    pub marriage_place: String,
}

/// Application submitted by an already registered user
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ApplicationSubmission {
    pub husband_name: String,
    pub wife_name: String,
    pub contact_number: String,
    pub login: String,
    pub marriage_place: String,
}

/// Public view of a user returned after login or registration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSummary {
    pub id: UserId,
    pub login: String,
    pub visits: u64,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            login: user.login.clone(),
            visits: user.visits,
        }
    }
}

impl From<Registration> for Application {
    fn from(r: Registration) -> Self {
        Self {
            husband_name: r.husband_name,
            wife_name: r.wife_name,
            contact_number: r.contact_number,
            login: r.login,
            marriage_place: r.marriage_place,
        }
    }
}

impl From<ApplicationSubmission> for Application {
    fn from(s: ApplicationSubmission) -> Self {
        Self {
            husband_name: s.husband_name,
            wife_name: s.wife_name,
            contact_number: s.contact_number,
            login: s.login,
            marriage_place: s.marriage_place,
        }
    }
}
