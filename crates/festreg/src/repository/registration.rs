//! Registration Repository
//!
//! Two-phase write of an accepted registration: one college row, then a
//! batch of participant rows referencing it.

use sqlx::{Connection, MySqlPool};
use tracing::info;

use crate::domain::Registration;
use crate::error::Result;

/// Outcome of a persisted registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistrationReceipt {
    /// Storage-generated college identifier.
    pub college_id: u64,
    /// Number of participant rows written. Always equals the length of the
    /// validated participant list.
    pub participants_count: usize,
}

pub struct MySqlRegistrationRepository {
    pool: MySqlPool,
}

impl MySqlRegistrationRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    pub async fn init_schema(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS colleges (
                id BIGINT UNSIGNED AUTO_INCREMENT PRIMARY KEY,
                college_name VARCHAR(255) NOT NULL,
                coordinator_name VARCHAR(255) NOT NULL,
                coordinator_contact VARCHAR(20) NOT NULL
            ) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4 COLLATE=utf8mb4_unicode_ci
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS participants (
                id BIGINT UNSIGNED AUTO_INCREMENT PRIMARY KEY,
                college_id BIGINT UNSIGNED NOT NULL,
                event_name VARCHAR(100) NOT NULL,
                participant_name VARCHAR(255) NOT NULL,
                INDEX idx_participants_college (college_id),
                CONSTRAINT fk_participants_college
                    FOREIGN KEY (college_id) REFERENCES colleges (id)
            ) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4 COLLATE=utf8mb4_unicode_ci
            "#,
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Persist one accepted registration.
    ///
    /// The college row commits on its own before any participant work; the
    /// participant batch then commits as one transaction. A batch failure
    /// leaves the college row in place with no compensating delete (parity
    /// with the original service's contract).
    pub async fn create(&self, registration: &Registration) -> Result<RegistrationReceipt> {
        let mut conn = self.pool.acquire().await?;

        let result = sqlx::query(
            r#"
            INSERT INTO colleges (college_name, coordinator_name, coordinator_contact)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(&registration.college.college_name)
        .bind(&registration.college.coordinator_name)
        .bind(&registration.college.coordinator_contact)
        .execute(&mut *conn)
        .await?;
        let college_id = result.last_insert_id();

        let mut tx = conn.begin().await?;
        for participant in &registration.participants {
            sqlx::query(
                r#"
                INSERT INTO participants (college_id, event_name, participant_name)
                VALUES (?, ?, ?)
                "#,
            )
            .bind(college_id)
            .bind(participant.event_name)
            .bind(&participant.participant_name)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;

        let participants_count = registration.participants.len();
        info!(
            college_id,
            participants_count, "Stored registration for {}", registration.college.college_name
        );

        Ok(RegistrationReceipt {
            college_id,
            participants_count,
        })
    }
}
