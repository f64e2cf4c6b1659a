//! In-memory implementations of `SchoolRepo` and `LicenceMailer`.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::{
    app_error::{AppError, AppResult},
    use_cases::school::{
        LicenceMailer, NewSchool, SCHOOL_ROLE, SchoolForSignin, SchoolProfile, SchoolRepo,
    },
};

/// Full stored record, digests included, so tests can assert on what the
/// store actually holds.
#[derive(Clone)]
pub struct StoredSchool {
    pub id: Uuid,
    pub school_name: String,
    pub email: String,
    pub phone_number: String,
    pub contact_address: String,
    pub admin_name: String,
    pub password_digest: String,
    pub licence_digest: String,
    pub role: String,
    pub active: bool,
    pub created_at: chrono::NaiveDateTime,
}

impl StoredSchool {
    fn profile(&self) -> SchoolProfile {
        SchoolProfile {
            id: self.id,
            school_name: self.school_name.clone(),
            email: self.email.clone(),
            phone_number: self.phone_number.clone(),
            contact_address: self.contact_address.clone(),
            admin_name: self.admin_name.clone(),
            role: self.role.clone(),
            active: self.active,
            created_at: Some(self.created_at),
        }
    }
}

/// In-memory school store mimicking the Postgres adapter, including the
/// unique-email constraint.
#[derive(Default)]
pub struct InMemorySchoolRepo {
    schools: Mutex<Vec<StoredSchool>>,
}

impl InMemorySchoolRepo {
    pub fn count(&self) -> usize {
        self.schools.lock().unwrap().len()
    }

    pub fn raw_record(&self, email: &str) -> Option<StoredSchool> {
        self.schools
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.email == email)
            .cloned()
    }
}

#[async_trait]
impl SchoolRepo for InMemorySchoolRepo {
    async fn create(&self, new: NewSchool) -> AppResult<SchoolProfile> {
        let mut schools = self.schools.lock().unwrap();
        if schools.iter().any(|s| s.email == new.email) {
            return Err(AppError::DuplicateEmail);
        }
        let stored = StoredSchool {
            id: Uuid::new_v4(),
            school_name: new.school_name,
            email: new.email,
            phone_number: new.phone_number,
            contact_address: new.contact_address,
            admin_name: new.admin_name,
            password_digest: new.password_digest,
            licence_digest: new.licence_digest,
            role: SCHOOL_ROLE.to_string(),
            active: false,
            created_at: Utc::now().naive_utc(),
        };
        let profile = stored.profile();
        schools.push(stored);
        Ok(profile)
    }

    async fn find_for_signin(&self, email: &str) -> AppResult<Option<SchoolForSignin>> {
        Ok(self
            .schools
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.email == email)
            .map(|s| SchoolForSignin {
                profile: s.profile(),
                password_digest: s.password_digest.clone(),
            }))
    }

    async fn activate_by_licence_digest(&self, digest: &str) -> AppResult<Option<Uuid>> {
        // Mirrors the single conditional statement of the Postgres adapter:
        // unknown digest and already-active both come back as None.
        let mut schools = self.schools.lock().unwrap();
        match schools
            .iter_mut()
            .find(|s| s.licence_digest == digest && !s.active)
        {
            Some(s) => {
                s.active = true;
                Ok(Some(s.id))
            }
            None => Ok(None),
        }
    }

    async fn get_profile_by_id(&self, id: Uuid) -> AppResult<Option<SchoolProfile>> {
        Ok(self
            .schools
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.id == id)
            .map(|s| s.profile()))
    }

    async fn delete_by_email(&self, email: &str) -> AppResult<()> {
        self.schools.lock().unwrap().retain(|s| s.email != email);
        Ok(())
    }
}

/// Records every licence mail instead of sending it.
#[derive(Default)]
pub struct RecordingLicenceMailer {
    sent: Mutex<Vec<(String, String)>>, // (recipient, licence)
}

impl RecordingLicenceMailer {
    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    pub fn last_licence(&self) -> Option<String> {
        self.sent.lock().unwrap().last().map(|(_, l)| l.clone())
    }

    pub fn last_recipient(&self) -> Option<String> {
        self.sent.lock().unwrap().last().map(|(r, _)| r.clone())
    }
}

#[async_trait]
impl LicenceMailer for RecordingLicenceMailer {
    async fn send_licence(&self, to: &str, _school_name: &str, licence: &str) -> AppResult<()> {
        self.sent
            .lock()
            .unwrap()
            .push((to.to_string(), licence.to_string()));
        Ok(())
    }
}

/// Always fails, for exercising the signup rollback path.
pub struct FailingLicenceMailer;

#[async_trait]
impl LicenceMailer for FailingLicenceMailer {
    async fn send_licence(&self, _to: &str, _school_name: &str, _licence: &str) -> AppResult<()> {
        Err(AppError::Delivery("mailbox unavailable".into()))
    }
}
