//! SQLite-backed task repository.

use std::sync::{Arc, Mutex, MutexGuard};

use rusqlite::{Connection, OptionalExtension, Row, params};
use thiserror::Error;
use todo_core::{NewTask, Task, TaskId};

/// How many tasks `recent_incomplete` returns at most. Matches the page size
/// the original list endpoint used.
pub const RECENT_TASK_LIMIT: usize = 5;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Task not found with id {0}")]
    NotFound(TaskId),
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
    #[error("database connection lock poisoned")]
    Poisoned,
}

/// Repository over a single `tasks` table. Cloning shares the connection.
#[derive(Clone)]
pub struct TaskRepository {
    conn: Arc<Mutex<Connection>>,
}

impl TaskRepository {
    /// Opens (creating if necessary) the database at `path`.
    pub fn open(path: &str) -> Result<Self, Error> {
        Self::from_connection(Connection::open(path)?)
    }

    /// An in-memory database, used by tests.
    pub fn in_memory() -> Result<Self, Error> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self, Error> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS tasks (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                description TEXT,
                completed INTEGER NOT NULL DEFAULT 0,
                created_at TEXT NOT NULL
            )",
            [],
        )?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>, Error> {
        self.conn.lock().map_err(|_| Error::Poisoned)
    }

    /// Inserts a new, incomplete task stamped with the current time and
    /// returns the stored record.
    pub fn insert(&self, new_task: &NewTask) -> Result<Task, Error> {
        let conn = self.conn()?;
        let created_at = chrono::Utc::now().naive_utc();
        conn.execute(
            "INSERT INTO tasks (title, description, completed, created_at) VALUES (?1, ?2, 0, ?3)",
            params![new_task.title, new_task.description, created_at],
        )?;
        let id = conn.last_insert_rowid();
        Self::fetch(&conn, id)?.ok_or(Error::NotFound(id))
    }

    pub fn find(&self, id: TaskId) -> Result<Option<Task>, Error> {
        let conn = self.conn()?;
        Self::fetch(&conn, id)
    }

    /// The "recent tasks" result set: incomplete tasks only, newest first
    /// (id as tiebreak), capped at [`RECENT_TASK_LIMIT`].
    pub fn recent_incomplete(&self) -> Result<Vec<Task>, Error> {
        let conn = self.conn()?;
        let mut statement = conn.prepare(
            "SELECT id, title, description, completed, created_at FROM tasks
             WHERE completed = 0
             ORDER BY created_at DESC, id DESC
             LIMIT ?1",
        )?;
        let tasks = statement
            .query_map([RECENT_TASK_LIMIT], Self::row_to_task)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(tasks)
    }

    /// Marks the task completed and returns the updated record.
    pub fn mark_completed(&self, id: TaskId) -> Result<Task, Error> {
        let conn = self.conn()?;
        let updated = conn.execute("UPDATE tasks SET completed = 1 WHERE id = ?1", [id])?;
        if updated == 0 {
            return Err(Error::NotFound(id));
        }
        Self::fetch(&conn, id)?.ok_or(Error::NotFound(id))
    }

    pub fn delete(&self, id: TaskId) -> Result<(), Error> {
        let conn = self.conn()?;
        let deleted = conn.execute("DELETE FROM tasks WHERE id = ?1", [id])?;
        if deleted == 0 {
            return Err(Error::NotFound(id));
        }
        Ok(())
    }

    fn fetch(conn: &Connection, id: TaskId) -> Result<Option<Task>, Error> {
        let task = conn
            .query_row(
                "SELECT id, title, description, completed, created_at FROM tasks WHERE id = ?1",
                [id],
                Self::row_to_task,
            )
            .optional()?;
        Ok(task)
    }

    fn row_to_task(row: &Row<'_>) -> rusqlite::Result<Task> {
        Ok(Task {
            id: row.get(0)?,
            title: row.get(1)?,
            description: row.get(2)?,
            completed: row.get(3)?,
            created_at: row.get(4)?,
        })
    }
}
