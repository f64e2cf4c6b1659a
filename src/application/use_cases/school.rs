use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDateTime;
use serde::Serialize;
use tracing::instrument;
use uuid::Uuid;

use crate::app_error::{AppError, AppResult};
use crate::application::{licence, password, validators};

pub const SCHOOL_ROLE: &str = "school";

/// Raw signup input as submitted by the registrant. `password_confirm` is
/// checked by the validation layer and discarded; it never reaches the store.
#[derive(Clone, serde::Deserialize)]
pub struct SignupRequest {
    pub school_name: String,
    pub email: String,
    pub phone_number: String,
    pub contact_address: String,
    pub admin_name: String,
    pub password: String,
    pub password_confirm: String,
}

/// Public view of a school. The password and licence digests are absent from
/// the type, so no response or log can carry them.
#[derive(Debug, Clone, Serialize)]
pub struct SchoolProfile {
    pub id: Uuid,
    pub school_name: String,
    pub email: String,
    pub phone_number: String,
    pub contact_address: String,
    pub admin_name: String,
    pub role: String,
    pub active: bool,
    pub created_at: Option<NaiveDateTime>,
}

/// Sign-in projection: the profile plus the password digest, opted into
/// explicitly by the one query that verifies credentials.
pub struct SchoolForSignin {
    pub profile: SchoolProfile,
    pub password_digest: String,
}

/// What the store needs to create a school. Role, active flag and creation
/// timestamp are set by the store itself.
pub struct NewSchool {
    pub school_name: String,
    pub email: String,
    pub phone_number: String,
    pub contact_address: String,
    pub admin_name: String,
    pub password_digest: String,
    pub licence_digest: String,
}

#[async_trait]
pub trait SchoolRepo: Send + Sync {
    /// Creates an inactive school record. The store's unique constraint on
    /// email is the only duplicate check; violations surface as
    /// `AppError::DuplicateEmail`.
    async fn create(&self, new: NewSchool) -> AppResult<SchoolProfile>;
    async fn find_for_signin(&self, email: &str) -> AppResult<Option<SchoolForSignin>>;
    /// Atomically flips the school matching the digest from inactive to
    /// active, returning its id only when this call performed the transition.
    /// An unknown digest and an already-active match both come back as `None`
    /// from the same single statement, so the two failure modes cost the same
    /// store traffic and concurrent duplicates resolve deterministically.
    async fn activate_by_licence_digest(&self, digest: &str) -> AppResult<Option<Uuid>>;
    async fn get_profile_by_id(&self, id: Uuid) -> AppResult<Option<SchoolProfile>>;
    /// Compensating delete for signup rollback.
    async fn delete_by_email(&self, email: &str) -> AppResult<()>;
}

#[async_trait]
pub trait LicenceMailer: Send + Sync {
    async fn send_licence(&self, to: &str, school_name: &str, licence: &str) -> AppResult<()>;
}

#[derive(Clone)]
pub struct AuthUseCases {
    repo: Arc<dyn SchoolRepo>,
    mailer: Arc<dyn LicenceMailer>,
}

impl AuthUseCases {
    pub fn new(repo: Arc<dyn SchoolRepo>, mailer: Arc<dyn LicenceMailer>) -> Self {
        Self { repo, mailer }
    }

    /// Registers a school: validate, generate licence, hash password, persist
    /// inactive, email the plaintext licence. Delivery failure deletes the
    /// just-created record so no unreachable account survives.
    #[instrument(skip(self, req), fields(email = %req.email))]
    pub async fn signup(&self, req: SignupRequest) -> AppResult<()> {
        validators::validate_signup(&req)?;

        let issued = licence::generate();
        let password_digest = password::hash(&req.password)?;

        let created = self
            .repo
            .create(NewSchool {
                school_name: req.school_name,
                email: req.email,
                phone_number: req.phone_number,
                contact_address: req.contact_address,
                admin_name: req.admin_name,
                password_digest,
                licence_digest: issued.digest,
            })
            .await?;

        if let Err(err) = self
            .mailer
            .send_licence(&created.email, &created.school_name, &issued.plaintext)
            .await
        {
            if let Err(rollback_err) = self.repo.delete_by_email(&created.email).await {
                tracing::error!(
                    error = ?rollback_err,
                    email = %created.email,
                    "rollback after failed licence delivery also failed"
                );
            }
            return Err(err);
        }
        Ok(())
    }

    /// Activates the school matching the presented licence. An already-active
    /// match fails with the same error as no match at all, so the response
    /// reveals nothing about whether a licence ever existed.
    #[instrument(skip(self, raw_licence))]
    pub async fn activate(&self, raw_licence: &str) -> AppResult<SchoolProfile> {
        validators::validate_licence(raw_licence)?;

        let digest = licence::digest(raw_licence);
        let Some(id) = self.repo.activate_by_licence_digest(&digest).await? else {
            return Err(AppError::InvalidLicence);
        };
        self.repo
            .get_profile_by_id(id)
            .await?
            .ok_or_else(|| AppError::Internal("school vanished during activation".into()))
    }

    /// Verifies credentials and activation status. The activation check runs
    /// only after the password verifies, and the unknown-email path burns an
    /// equivalent verification, so unauthenticated callers learn nothing.
    #[instrument(skip(self, password))]
    pub async fn signin(&self, email: &str, password: &str) -> AppResult<SchoolProfile> {
        validators::validate_signin(email, password)?;

        let Some(found) = self.repo.find_for_signin(email).await? else {
            password::dummy_verify(password);
            return Err(AppError::InvalidCredentials);
        };
        if !password::verify(password, &found.password_digest) {
            return Err(AppError::InvalidCredentials);
        }
        if !found.profile.active {
            return Err(AppError::AccountNotActivated);
        }
        Ok(found.profile)
    }
}
