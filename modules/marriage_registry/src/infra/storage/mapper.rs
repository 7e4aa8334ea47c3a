use crate::contract::model::{Application, ApplicationPatch, User, UserPatch};
use crate::infra::storage::entity::{ApplicationRecord, UserRecord};

/// Convert a stored record to a contract model
pub fn record_to_contract(record: &UserRecord) -> User {
    User {
        id: record.id,
        login: record.login.clone(),
        password: record.password.clone(),
        visits: record.visits,
        application: record.application.as_ref().map(application_to_contract),
    }
}

pub fn application_to_contract(record: &ApplicationRecord) -> Application {
    Application {
        husband_name: record.husband_name.clone(),
        wife_name: record.wife_name.clone(),
        contact_number: record.contact_number.clone(),
        login: record.login.clone(),
        marriage_place: record.marriage_place.clone(),
    }
}

/// Build a fresh application record; unknown attributes start empty.
pub fn application_to_record(application: Application) -> ApplicationRecord {
    ApplicationRecord {
        husband_name: application.husband_name,
        wife_name: application.wife_name,
        contact_number: application.contact_number,
        login: application.login,
        marriage_place: application.marriage_place,
        extra: Default::default(),
    }
}

/// Shallow merge: only the attributes present in the patch are overwritten.
pub fn apply_user_patch(record: &mut UserRecord, patch: UserPatch) {
    if let Some(login) = patch.login {
        record.login = login;
    }
    if let Some(password) = patch.password {
        record.password = password;
    }
    if let Some(visits) = patch.visits {
        record.visits = visits;
    }
}

pub fn apply_application_patch(record: &mut ApplicationRecord, patch: ApplicationPatch) {
    if let Some(husband_name) = patch.husband_name {
        record.husband_name = husband_name;
    }
    if let Some(wife_name) = patch.wife_name {
        record.wife_name = wife_name;
    }
    if let Some(contact_number) = patch.contact_number {
        record.contact_number = contact_number;
    }
    if let Some(marriage_place) = patch.marriage_place {
        record.marriage_place = marriage_place;
    }
}
