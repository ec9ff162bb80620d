use crate::error::{DatabaseError, DatabaseErrorExt};
use fxhash::FxHashSet;
use serde::Deserialize;
use surrealdb::Surreal;
use surrealdb::engine::any::Any;

/// A built-in SurrealQL migration script, keyed by owning slice and version.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Migration {
    pub slice: &'static str,
    pub version: &'static str,
    pub script: &'static str,
}

/// Ordered list of every schema script shipped with the binary.
///
/// The `kernel` bootstrap must stay first: it defines the `migration`
/// ledger table the rest of the runner records into.
const MIGRATIONS: &[Migration] = &[
    Migration {
        slice: "kernel",
        version: "0001",
        script: include_str!("../migrations/kernel_0001_ledger.surql"),
    },
    Migration {
        slice: "timeline",
        version: "0001",
        script: include_str!("../migrations/timeline_0001_events.surql"),
    },
    Migration {
        slice: "gallery",
        version: "0001",
        script: include_str!("../migrations/gallery_0001_photos.surql"),
    },
    Migration {
        slice: "notes",
        version: "0001",
        script: include_str!("../migrations/notes_0001_notes.surql"),
    },
    Migration {
        slice: "settings",
        version: "0001",
        script: include_str!("../migrations/settings_0001_settings.surql"),
    },
];

impl Migration {
    fn key(&self) -> String {
        format!("{}:{}", self.slice, self.version)
    }

    fn to_applied(self) -> AppliedMigration {
        AppliedMigration { slice: self.slice.to_owned(), version: self.version.to_owned() }
    }
}

#[derive(Debug, Default)]
pub(crate) struct MigrationReport {
    pub applied: Vec<AppliedMigration>,
    pub skipped: Vec<AppliedMigration>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AppliedMigration {
    pub slice: String,
    pub version: String,
}

#[derive(Debug)]
pub(crate) struct MigrationRunner {
    db: Surreal<Any>,
}

impl MigrationRunner {
    #[must_use]
    pub(crate) const fn new(db: Surreal<Any>) -> Self {
        Self { db }
    }

    pub(crate) async fn run(&self) -> Result<MigrationReport, DatabaseError> {
        let mut report = MigrationReport::default();
        let applied = self.applied_set().await?;

        for migration in MIGRATIONS {
            if applied.contains(&migration.key()) {
                report.skipped.push(migration.to_applied());
                continue;
            }

            self.apply(migration).await?;
            report.applied.push(migration.to_applied());
        }

        Ok(report)
    }

    async fn applied_set(&self) -> Result<FxHashSet<String>, DatabaseError> {
        // Selecting from a table that does not exist yet yields an empty
        // result set, so a fresh database falls through to a full run.
        let entries = self
            .db
            .query("SELECT slice, version FROM migration")
            .await
            .context("Loading applied migrations")?
            .take::<Vec<AppliedMigration>>(0)
            .map_err(|e| DatabaseError::Migration {
                message: e.to_string().into(),
                context: Some("Parsing applied migrations".into()),
            })?;

        Ok(entries.into_iter().map(|entry| format!("{}:{}", entry.slice, entry.version)).collect())
    }

    async fn apply(&self, migration: &Migration) -> Result<(), DatabaseError> {
        let query = format!(
            "BEGIN TRANSACTION;
            {}
            CREATE migration SET slice = $slice, version = $version;
            COMMIT TRANSACTION;",
            migration.script,
        );

        self.db
            .query(&query)
            .bind(("slice", migration.slice))
            .bind(("version", migration.version))
            .await
            .context(format!("SQL execution failed at {}", migration.key()))?
            .check()
            .map_err(|e| DatabaseError::Migration {
                message: e.to_string().into(),
                context: Some(migration.key().into()),
            })?;

        Ok(())
    }
}
