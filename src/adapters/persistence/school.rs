use async_trait::async_trait;
use chrono::NaiveDateTime;
use uuid::Uuid;

use crate::{
    adapters::persistence::PostgresPersistence,
    app_error::{AppError, AppResult},
    use_cases::school::{NewSchool, SchoolForSignin, SchoolProfile, SchoolRepo},
};

// School row as stored in the db. Digest columns are only selected by the
// verification queries and never leave this module.
#[derive(sqlx::FromRow, Debug)]
struct SchoolRow {
    id: Uuid,
    school_name: String,
    email: String,
    phone_number: String,
    contact_address: String,
    admin_name: String,
    role: String,
    active: bool,
    created_at: Option<NaiveDateTime>,
}

#[derive(sqlx::FromRow)]
struct SchoolRowWithPassword {
    #[sqlx(flatten)]
    row: SchoolRow,
    password_digest: String,
}

const PROFILE_COLUMNS: &str =
    "id, school_name, email, phone_number, contact_address, admin_name, role, active, created_at";

impl From<SchoolRow> for SchoolProfile {
    fn from(r: SchoolRow) -> Self {
        SchoolProfile {
            id: r.id,
            school_name: r.school_name,
            email: r.email,
            phone_number: r.phone_number,
            contact_address: r.contact_address,
            admin_name: r.admin_name,
            role: r.role,
            active: r.active,
            created_at: r.created_at,
        }
    }
}

#[async_trait]
impl SchoolRepo for PostgresPersistence {
    async fn create(&self, new: NewSchool) -> AppResult<SchoolProfile> {
        let id = Uuid::new_v4();
        let row = sqlx::query_as::<_, SchoolRow>(&format!(
            r#"
                INSERT INTO schools
                    (id, school_name, email, phone_number, contact_address,
                     admin_name, password_digest, licence_digest)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                RETURNING {PROFILE_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&new.school_name)
        .bind(&new.email)
        .bind(&new.phone_number)
        .bind(&new.contact_address)
        .bind(&new.admin_name)
        .bind(&new.password_digest)
        .bind(&new.licence_digest)
        .fetch_one(self.pool())
        .await
        .map_err(AppError::from)?;
        Ok(row.into())
    }

    async fn find_for_signin(&self, email: &str) -> AppResult<Option<SchoolForSignin>> {
        let rec = sqlx::query_as::<_, SchoolRowWithPassword>(&format!(
            "SELECT {PROFILE_COLUMNS}, password_digest FROM schools WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(self.pool())
        .await
        .map_err(AppError::from)?;
        Ok(rec.map(|r| SchoolForSignin {
            profile: r.row.into(),
            password_digest: r.password_digest,
        }))
    }

    async fn activate_by_licence_digest(&self, digest: &str) -> AppResult<Option<Uuid>> {
        // One conditional statement covers every outcome: an unknown digest
        // and an already-active match both return zero rows, and under
        // concurrent duplicates exactly one caller gets the id back.
        let rec = sqlx::query_scalar::<_, Uuid>(
            "UPDATE schools SET active = TRUE WHERE licence_digest = $1 AND active = FALSE RETURNING id",
        )
        .bind(digest)
        .fetch_optional(self.pool())
        .await
        .map_err(AppError::from)?;
        Ok(rec)
    }

    async fn get_profile_by_id(&self, id: Uuid) -> AppResult<Option<SchoolProfile>> {
        let rec = sqlx::query_as::<_, SchoolRow>(&format!(
            "SELECT {PROFILE_COLUMNS} FROM schools WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool())
        .await
        .map_err(AppError::from)?;
        Ok(rec.map(Into::into))
    }

    async fn delete_by_email(&self, email: &str) -> AppResult<()> {
        sqlx::query("DELETE FROM schools WHERE email = $1")
            .bind(email)
            .execute(self.pool())
            .await
            .map_err(AppError::from)?;
        Ok(())
    }
}
