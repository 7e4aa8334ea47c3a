use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::contract::model::{
    Application, ApplicationPatch, ApplicationSubmission, NewUser, Registration, User, UserId,
    UserPatch, UserSummary,
};
use crate::domain::error::DomainError;
use crate::domain::ports::CredentialVerifier;
use crate::domain::repo::UsersRepository;
use crate::domain::validator::{FormData, ValidationLimits, ValidationProfile, Validator};

/// Domain service with business rules for registrations and applications.
/// Depends only on the repository and credential ports, not on infra types.
#[derive(Clone)]
pub struct Service {
    repo: Arc<dyn UsersRepository>,
    credentials: Arc<dyn CredentialVerifier>,
    validator: Validator,
}

/// Configuration for the domain service
#[derive(Debug, Clone, Default)]
pub struct ServiceConfig {
    pub limits: ValidationLimits,
}

impl Service {
    /// Create a service with dependencies.
    pub fn new(
        repo: Arc<dyn UsersRepository>,
        credentials: Arc<dyn CredentialVerifier>,
        config: ServiceConfig,
    ) -> Self {
        Self {
            repo,
            credentials,
            validator: Validator::new(config.limits),
        }
    }

    #[instrument(
        name = "marriage_registry.service.register",
        skip(self, registration),
        fields(login = %registration.login.trim())
    )]
    pub async fn register(&self, registration: Registration) -> Result<User, DomainError> {
        info!("Registering new user");
        let registration = normalize_registration(registration);

        let errors = self
            .validator
            .validate_all(
                &FormData::from(&registration),
                self.repo.as_ref(),
                ValidationProfile::Registration,
            )
            .await
            .map_err(|e| DomainError::storage(&e))?;
        if !errors.is_empty() {
            debug!(fields = errors.len(), "Registration rejected by validator");
            return Err(DomainError::validation(errors));
        }

        let new_user = NewUser {
            login: registration.login.clone(),
            password: registration.password.clone(),
            application: Some(Application::from(registration)),
        };
        let user = self
            .repo
            .insert(new_user)
            .await
            .map_err(|e| DomainError::storage(&e))?;

        info!("Successfully registered user with id={}", user.id);
        Ok(user)
    }

    /// Check credentials and, on success, count the visit.
    ///
    /// Unknown login and wrong password are indistinguishable to the caller.
    #[instrument(name = "marriage_registry.service.login", skip(self, password))]
    pub async fn login(&self, login: &str, password: &str) -> Result<UserSummary, DomainError> {
        debug!("Authenticating user");

        let user = self
            .repo
            .find_by_login(login.trim())
            .await
            .map_err(|e| DomainError::storage(&e))?
            .ok_or_else(DomainError::invalid_credentials)?;

        if !self.credentials.verify(&user.password, password) {
            info!("Rejected login attempt");
            return Err(DomainError::invalid_credentials());
        }

        let patch = UserPatch {
            visits: Some(user.visits + 1),
            ..Default::default()
        };
        let updated = self
            .repo
            .update(user.id, patch)
            .await
            .map_err(|e| DomainError::storage(&e))?
            .ok_or_else(|| DomainError::user_not_found(&user.login))?;

        info!(user_id = updated.id, visits = updated.visits, "User logged in");
        Ok(UserSummary::from(&updated))
    }

    #[instrument(
        name = "marriage_registry.service.add_application",
        skip(self, submission),
        fields(login = %submission.login.trim())
    )]
    pub async fn add_application(&self, submission: ApplicationSubmission) -> Result<(), DomainError> {
        info!("Submitting application");
        let submission = normalize_submission(submission);

        // The login belongs to the submitting user, so uniqueness is not checked.
        let errors = self
            .validator
            .validate_all(
                &FormData::from(&submission),
                self.repo.as_ref(),
                ValidationProfile::Application,
            )
            .await
            .map_err(|e| DomainError::storage(&e))?;
        if !errors.is_empty() {
            debug!(fields = errors.len(), "Application rejected by validator");
            return Err(DomainError::validation(errors));
        }

        let owner = self
            .repo
            .find_by_login(&submission.login)
            .await
            .map_err(|e| DomainError::storage(&e))?
            .ok_or_else(|| DomainError::user_not_found(&submission.login))?;

        let login = submission.login.clone();
        let attached = self
            .repo
            .add_application(owner.id, Application::from(submission))
            .await
            .map_err(|e| DomainError::storage(&e))?;
        if !attached {
            return Err(DomainError::user_not_found(login));
        }

        info!("Successfully attached application to user id={}", owner.id);
        Ok(())
    }

    #[instrument(
        name = "marriage_registry.service.edit_application",
        skip(self, patch)
    )]
    pub async fn edit_application(
        &self,
        application_id: UserId,
        patch: ApplicationPatch,
    ) -> Result<(), DomainError> {
        info!("Editing application");
        let patch = normalize_patch(patch);

        let errors = self
            .validator
            .validate_fields(&FormData::from(&patch), ValidationProfile::ApplicationPatch);
        if !errors.is_empty() {
            debug!(fields = errors.len(), "Application patch rejected by validator");
            return Err(DomainError::validation(errors));
        }

        let edited = self
            .repo
            .edit_application(application_id, patch)
            .await
            .map_err(|e| DomainError::storage(&e))?;
        if !edited {
            info!("No application to edit");
            return Err(DomainError::application_not_found(application_id));
        }

        info!("Successfully edited application");
        Ok(())
    }

    #[instrument(name = "marriage_registry.service.get_application", skip(self))]
    pub async fn get_application(&self, application_id: UserId) -> Result<Application, DomainError> {
        debug!("Getting application by owner id");

        self.repo
            .find_by_id(application_id)
            .await
            .map_err(|e| DomainError::storage(&e))?
            .and_then(|user| user.application)
            .ok_or_else(|| DomainError::application_not_found(application_id))
    }
}

// --- input normalization ---
// Text fields are trimmed before validation and storage; passwords are kept verbatim.

fn normalize_registration(r: Registration) -> Registration {
    Registration {
        husband_name: r.husband_name.trim().to_string(),
        wife_name: r.wife_name.trim().to_string(),
        contact_number: r.contact_number.trim().to_string(),
        login: r.login.trim().to_string(),
        password: r.password,
        marriage_place: r.marriage_place.trim().to_string(),
    }
}

fn normalize_submission(s: ApplicationSubmission) -> ApplicationSubmission {
    ApplicationSubmission {
        husband_name: s.husband_name.trim().to_string(),
        wife_name: s.wife_name.trim().to_string(),
        contact_number: s.contact_number.trim().to_string(),
        login: s.login.trim().to_string(),
        marriage_place: s.marriage_place.trim().to_string(),
    }
}

fn normalize_patch(p: ApplicationPatch) -> ApplicationPatch {
    let trim = |v: Option<String>| v.map(|s| s.trim().to_string());
    ApplicationPatch {
        husband_name: trim(p.husband_name),
        wife_name: trim(p.wife_name),
        contact_number: trim(p.contact_number),
        marriage_place: trim(p.marriage_place),
    }
}
