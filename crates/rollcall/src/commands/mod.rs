mod check;
mod exec;
mod schema;

use crate::Cli;
use crate::CommandResult;
use anyhow::Context;
use check::CheckCmd;
use exec::ExecCmd;
use rollcall_core::schema::Schema;
use rollcall_roster::InMemoryStudentStore;
use rollcall_roster::Student;
use rollcall_roster::build_roster_schema;
use schema::SchemaCmd;
use std::path::Path;
use std::sync::Arc;

#[derive(Debug, clap::Parser)]
#[command(name = "rollcall")]
pub(crate) enum CommandEnum {
    /// Validate query documents against the roster schema without running them.
    Check(Box<CheckCmd>),

    /// Execute a single request and print the JSON response.
    Exec(Box<ExecCmd>),

    /// Print the roster schema in SDL form.
    Schema(Box<SchemaCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Check(cmd) => cmd.run(cli).await,
            Self::Exec(cmd) => cmd.run(cli).await,
            Self::Schema(cmd) => cmd.run(cli).await,
        }
    }
}

/// Builds the roster schema over `store`.
fn roster_schema(store: Arc<InMemoryStudentStore>) -> anyhow::Result<Schema> {
    build_roster_schema(store).context("failed to build the roster schema")
}

/// Loads a JSON array of student records into a fresh store.
async fn load_records(path: &Path) -> anyhow::Result<InMemoryStudentStore> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read records file {path:?}"))?;
    let records: Vec<Student> = serde_json::from_str(&contents)
        .with_context(|| format!("{path:?} is not a JSON array of student records"))?;
    log::debug!("Loaded {} records from {path:?}.", records.len());

    InMemoryStudentStore::from_records(records)
        .with_context(|| format!("invalid records in {path:?}"))
}
