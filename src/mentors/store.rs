//! Mentor Storage
//! Mission: Persist the mentor directory with SQLite

use crate::mentors::models::{Mentor, NewMentor};
use crate::mentors::seed::default_mentors;
use anyhow::{Context, Result};
use chrono::Utc;
use rusqlite::{params, Connection};
use tracing::info;
use uuid::Uuid;

/// Mentor storage with SQLite backend. Skills are stored as a JSON text
/// column to preserve ordering.
pub struct MentorStore {
    db_path: String,
}

impl MentorStore {
    /// Create a new mentor store and initialize database
    pub fn new(db_path: &str) -> Result<Self> {
        let store = Self {
            db_path: db_path.to_string(),
        };
        store.init_db()?;
        Ok(store)
    }

    /// Initialize database schema
    fn init_db(&self) -> Result<()> {
        let conn = Connection::open(&self.db_path)?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS mentors (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                bio TEXT,
                skills TEXT NOT NULL,
                experience_years INTEGER,
                rating REAL NOT NULL DEFAULT 0,
                created_at TEXT NOT NULL
            )",
            [],
        )?;

        Ok(())
    }

    /// Seed the fixed default set if the directory is empty. Runs inside a
    /// transaction with the count re-checked, so concurrent first reads seed
    /// at most once. Returns whether seeding happened.
    pub fn ensure_defaults(&self) -> Result<bool> {
        let mut conn = Connection::open(&self.db_path)?;
        let tx = conn.transaction()?;

        let count: i64 = tx
            .query_row("SELECT COUNT(*) FROM mentors", [], |row| row.get(0))
            .context("Failed to count mentors")?;
        if count > 0 {
            return Ok(false);
        }

        let defaults = default_mentors();
        let seeded = defaults.len();
        for new in defaults {
            let skills_json =
                serde_json::to_string(&new.skills).context("Failed to encode skills")?;
            tx.execute(
                "INSERT INTO mentors (id, name, bio, skills, experience_years, rating, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    Uuid::new_v4().to_string(),
                    new.name,
                    new.bio,
                    skills_json,
                    new.experience_years,
                    new.rating,
                    Utc::now().to_rfc3339(),
                ],
            )
            .context("Failed to seed mentor")?;
        }
        tx.commit()?;

        info!("Seeded {} default mentors", seeded);
        Ok(true)
    }

    /// Insert a new mentor.
    pub fn create(&self, new: NewMentor) -> Result<Mentor> {
        let mentor = Mentor {
            id: Uuid::new_v4(),
            name: new.name,
            bio: new.bio,
            skills: new.skills,
            experience_years: new.experience_years,
            rating: new.rating,
            created_at: Utc::now().to_rfc3339(),
        };

        let skills_json =
            serde_json::to_string(&mentor.skills).context("Failed to encode skills")?;

        let conn = Connection::open(&self.db_path)?;
        conn.execute(
            "INSERT INTO mentors (id, name, bio, skills, experience_years, rating, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                mentor.id.to_string(),
                mentor.name,
                mentor.bio,
                skills_json,
                mentor.experience_years,
                mentor.rating,
                mentor.created_at,
            ],
        )
        .context("Failed to insert mentor")?;

        Ok(mentor)
    }

    /// List mentors sorted by rating descending then recency descending.
    pub fn list(&self, limit: usize) -> Result<Vec<Mentor>> {
        let conn = Connection::open(&self.db_path)?;

        let mut stmt = conn.prepare(
            "SELECT id, name, bio, skills, experience_years, rating, created_at
             FROM mentors ORDER BY rating DESC, created_at DESC LIMIT ?1",
        )?;

        let mentors = stmt
            .query_map(params![limit as i64], Self::map_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(mentors)
    }

    /// Get a mentor by id.
    pub fn get(&self, id: Uuid) -> Result<Option<Mentor>> {
        let conn = Connection::open(&self.db_path)?;

        let mut stmt = conn.prepare(
            "SELECT id, name, bio, skills, experience_years, rating, created_at
             FROM mentors WHERE id = ?1",
        )?;

        let mentor_result = stmt.query_row(params![id.to_string()], Self::map_row);

        match mentor_result {
            Ok(mentor) => Ok(Some(mentor)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Write back a mentor's mutable fields.
    pub fn update(&self, mentor: &Mentor) -> Result<()> {
        let skills_json =
            serde_json::to_string(&mentor.skills).context("Failed to encode skills")?;

        let conn = Connection::open(&self.db_path)?;
        let rows = conn.execute(
            "UPDATE mentors SET name = ?1, bio = ?2, skills = ?3, rating = ?4
             WHERE id = ?5",
            params![
                mentor.name,
                mentor.bio,
                skills_json,
                mentor.rating,
                mentor.id.to_string(),
            ],
        )?;

        if rows == 0 {
            anyhow::bail!("Mentor not found");
        }

        Ok(())
    }

    /// Delete a mentor by id.
    pub fn delete(&self, id: Uuid) -> Result<()> {
        let conn = Connection::open(&self.db_path)?;

        let rows = conn.execute("DELETE FROM mentors WHERE id = ?1", params![id.to_string()])?;

        if rows == 0 {
            anyhow::bail!("Mentor not found");
        }

        Ok(())
    }

    fn map_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Mentor> {
        let skills_json: String = row.get(3)?;
        Ok(Mentor {
            id: Uuid::parse_str(&row.get::<_, String>(0)?).unwrap(),
            name: row.get(1)?,
            bio: row.get(2)?,
            skills: serde_json::from_str(&skills_json).unwrap_or_default(),
            experience_years: row.get(4)?,
            rating: row.get(5)?,
            created_at: row.get(6)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn create_test_store() -> (MentorStore, NamedTempFile) {
        let temp_file = NamedTempFile::new().unwrap();
        let store = MentorStore::new(temp_file.path().to_str().unwrap()).unwrap();
        (store, temp_file)
    }

    fn test_mentor(name: &str, rating: f64) -> NewMentor {
        NewMentor {
            name: name.to_string(),
            bio: None,
            skills: vec!["Rust".to_string()],
            experience_years: Some(3),
            rating,
        }
    }

    #[test]
    fn test_seeding_populates_default_set_once() {
        let (store, _temp) = create_test_store();

        assert!(store.ensure_defaults().unwrap());
        let mentors = store.list(100).unwrap();
        assert_eq!(mentors.len(), 10);

        // Sorted by rating descending.
        assert_eq!(mentors[0].name, "Siddharth Rao");
        for pair in mentors.windows(2) {
            assert!(pair[0].rating >= pair[1].rating);
        }

        // Second call is a no-op.
        assert!(!store.ensure_defaults().unwrap());
        assert_eq!(store.list(100).unwrap().len(), 10);
    }

    #[test]
    fn test_seeding_skipped_when_nonempty() {
        let (store, _temp) = create_test_store();

        store.create(test_mentor("Solo", 4.0)).unwrap();
        assert!(!store.ensure_defaults().unwrap());
        assert_eq!(store.list(100).unwrap().len(), 1);
    }

    #[test]
    fn test_create_get_update_delete() {
        let (store, _temp) = create_test_store();

        let created = store.create(test_mentor("Mentor A", 4.2)).unwrap();
        let mut fetched = store.get(created.id).unwrap().unwrap();
        assert_eq!(fetched.name, "Mentor A");
        assert_eq!(fetched.skills, vec!["Rust"]);

        fetched.rating = 4.9;
        fetched.skills = vec!["Rust".to_string(), "SQL".to_string()];
        store.update(&fetched).unwrap();
        let updated = store.get(created.id).unwrap().unwrap();
        assert_eq!(updated.rating, 4.9);
        assert_eq!(updated.skills.len(), 2);

        store.delete(created.id).unwrap();
        assert!(store.get(created.id).unwrap().is_none());
    }

    #[test]
    fn test_list_orders_by_rating_then_recency_with_limit() {
        let (store, _temp) = create_test_store();

        store.create(test_mentor("Low", 3.0)).unwrap();
        std::thread::sleep(std::time::Duration::from_millis(5));
        let older_high = store.create(test_mentor("High older", 4.8)).unwrap();
        std::thread::sleep(std::time::Duration::from_millis(5));
        let newer_high = store.create(test_mentor("High newer", 4.8)).unwrap();

        let mentors = store.list(2).unwrap();
        assert_eq!(mentors.len(), 2);
        assert_eq!(mentors[0].id, newer_high.id);
        assert_eq!(mentors[1].id, older_high.id);
    }
}
