//! Goal Storage
//! Mission: Persist per-user learning goals with SQLite

use crate::goals::models::{Goal, GoalStatus};
use anyhow::{Context, Result};
use chrono::Utc;
use rusqlite::{params, Connection};
use uuid::Uuid;

/// Goal storage with SQLite backend
pub struct GoalStore {
    db_path: String,
}

impl GoalStore {
    /// Create a new goal store and initialize database
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
            "CREATE TABLE IF NOT EXISTS goals (
                id TEXT PRIMARY KEY,
                title TEXT NOT NULL,
                description TEXT,
                owner_id TEXT NOT NULL,
                status TEXT NOT NULL,
                progress INTEGER NOT NULL DEFAULT 0,
                created_at TEXT NOT NULL
            )",
            [],
        )?;

        Ok(())
    }

    /// Insert a new goal owned by `owner_id`, starting at zero progress.
    pub fn create(&self, owner_id: Uuid, title: &str, description: Option<String>) -> Result<Goal> {
        let goal = Goal {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description,
            owner_id,
            status: GoalStatus::NotStarted,
            progress: 0,
            created_at: Utc::now().to_rfc3339(),
        };

        let conn = Connection::open(&self.db_path)?;
        conn.execute(
            "INSERT INTO goals (id, title, description, owner_id, status, progress, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                goal.id.to_string(),
                goal.title,
                goal.description,
                goal.owner_id.to_string(),
                goal.status.as_str(),
                goal.progress as i64,
                goal.created_at,
            ],
        )
        .context("Failed to insert goal")?;

        Ok(goal)
    }

    /// List a user's goals, newest first.
    pub fn list_for_owner(&self, owner_id: Uuid) -> Result<Vec<Goal>> {
        let conn = Connection::open(&self.db_path)?;

        let mut stmt = conn.prepare(
            "SELECT id, title, description, owner_id, status, progress, created_at
             FROM goals WHERE owner_id = ?1 ORDER BY created_at DESC",
        )?;

        let goals = stmt
            .query_map(params![owner_id.to_string()], Self::map_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(goals)
    }

    /// Get a goal by id regardless of owner; the caller enforces ownership.
    pub fn get(&self, id: Uuid) -> Result<Option<Goal>> {
        let conn = Connection::open(&self.db_path)?;

        let mut stmt = conn.prepare(
            "SELECT id, title, description, owner_id, status, progress, created_at
             FROM goals WHERE id = ?1",
        )?;

        let goal_result = stmt.query_row(params![id.to_string()], Self::map_row);

        match goal_result {
            Ok(goal) => Ok(Some(goal)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Write back a goal's mutable fields. Last write wins; SQLite gives
    /// per-row atomicity for the single UPDATE.
    pub fn update(&self, goal: &Goal) -> Result<()> {
        let conn = Connection::open(&self.db_path)?;

        let rows = conn.execute(
            "UPDATE goals SET title = ?1, description = ?2, status = ?3, progress = ?4
             WHERE id = ?5",
            params![
                goal.title,
                goal.description,
                goal.status.as_str(),
                goal.progress as i64,
                goal.id.to_string(),
            ],
        )?;

        if rows == 0 {
            anyhow::bail!("Goal not found");
        }

        Ok(())
    }

    /// Delete a goal by id.
    pub fn delete(&self, id: Uuid) -> Result<()> {
        let conn = Connection::open(&self.db_path)?;

        let rows = conn.execute("DELETE FROM goals WHERE id = ?1", params![id.to_string()])?;

        if rows == 0 {
            anyhow::bail!("Goal not found");
        }

        Ok(())
    }

    fn map_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Goal> {
        let status_str: String = row.get(4)?;
        Ok(Goal {
            id: Uuid::parse_str(&row.get::<_, String>(0)?).unwrap(),
            title: row.get(1)?,
            description: row.get(2)?,
            owner_id: Uuid::parse_str(&row.get::<_, String>(3)?).unwrap(),
            status: GoalStatus::from_str(&status_str).unwrap_or(GoalStatus::NotStarted),
            progress: row.get::<_, i64>(5)? as u8,
            created_at: row.get(6)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn create_test_store() -> (GoalStore, NamedTempFile) {
        let temp_file = NamedTempFile::new().unwrap();
        let db_path = temp_file.path().to_str().unwrap();
        let store = GoalStore::new(db_path).unwrap();
        (store, temp_file)
    }

    #[test]
    fn test_create_and_get_goal() {
        let (store, _temp) = create_test_store();
        let owner = Uuid::new_v4();

        let goal = store
            .create(owner, "Learn Rust", Some("Ownership and borrowing".to_string()))
            .unwrap();
        assert_eq!(goal.status, GoalStatus::NotStarted);
        assert_eq!(goal.progress, 0);

        let fetched = store.get(goal.id).unwrap().unwrap();
        assert_eq!(fetched.title, "Learn Rust");
        assert_eq!(fetched.owner_id, owner);

        assert!(store.get(Uuid::new_v4()).unwrap().is_none());
    }

    #[test]
    fn test_list_scoped_to_owner_newest_first() {
        let (store, _temp) = create_test_store();
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();

        let first = store.create(alice, "First", None).unwrap();
        std::thread::sleep(std::time::Duration::from_millis(5));
        let second = store.create(alice, "Second", None).unwrap();
        store.create(bob, "Bob's goal", None).unwrap();

        let goals = store.list_for_owner(alice).unwrap();
        assert_eq!(goals.len(), 2);
        assert_eq!(goals[0].id, second.id);
        assert_eq!(goals[1].id, first.id);
    }

    #[test]
    fn test_update_goal() {
        let (store, _temp) = create_test_store();
        let owner = Uuid::new_v4();

        let mut goal = store.create(owner, "Learn Rust", None).unwrap();
        goal.progress = 57;
        goal.status = GoalStatus::InProgress;
        goal.title = "Learn Rust deeply".to_string();
        store.update(&goal).unwrap();

        let fetched = store.get(goal.id).unwrap().unwrap();
        assert_eq!(fetched.progress, 57);
        assert_eq!(fetched.status, GoalStatus::InProgress);
        assert_eq!(fetched.title, "Learn Rust deeply");
    }

    #[test]
    fn test_delete_goal() {
        let (store, _temp) = create_test_store();
        let owner = Uuid::new_v4();

        let goal = store.create(owner, "Temp", None).unwrap();
        store.delete(goal.id).unwrap();
        assert!(store.get(goal.id).unwrap().is_none());

        assert!(store.delete(goal.id).is_err());
    }
}
