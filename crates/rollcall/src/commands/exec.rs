use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::commands::load_records;
use crate::commands::roster_schema;
use anyhow::Context;
use rollcall_core::execution::ExecutionRequest;
use rollcall_core::parser::ast::OperationKind;
use rollcall_core::value::Variables;
use rollcall_roster::InMemoryStudentStore;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, clap::Args)]
#[command(group(
    clap::ArgGroup::new("source")
        .required(true)
        .args(["query", "file"]),
))]
pub(crate) struct ExecCmd {
    #[arg(
        help="Path to a file containing the query document.",
        long,
        short='f',
    )]
    file: Option<PathBuf>,

    #[arg(
        help="The name of the operation to run when the document has several.",
        long,
    )]
    operation_name: Option<String>,

    #[arg(
        help="Which kind of operation to run: `query` or `mutation`.",
        long,
    )]
    operation_kind: Option<OperationKind>,

    #[arg(
        help="The query document to run.",
        long,
        short='q',
    )]
    query: Option<String>,

    #[arg(
        help="Path to a JSON array of student records to preload into the \
             store. The store starts empty otherwise.",
        long,
    )]
    records: Option<PathBuf>,

    #[arg(
        help="A JSON object of variable values.",
        long,
    )]
    variables: Option<String>,
}
impl ExecCmd {
    async fn request(&self) -> anyhow::Result<ExecutionRequest> {
        let query = match (&self.query, &self.file) {
            (Some(query), _) => query.clone(),
            (None, Some(path)) => tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("failed to read query file {path:?}"))?,
            (None, None) => anyhow::bail!("either --query or --file is required"),
        };

        let mut request = ExecutionRequest::new(query);
        if let Some(name) = &self.operation_name {
            request = request.with_operation_name(name.as_str());
        }
        if let Some(kind) = self.operation_kind {
            request = request.with_operation_kind(kind);
        }
        if let Some(variables) = &self.variables {
            let variables: Variables = serde_json::from_str(variables)
                .context("--variables must be a JSON object of input values")?;
            request = request.with_variables(variables);
        }
        Ok(request)
    }

    async fn store(&self) -> anyhow::Result<InMemoryStudentStore> {
        match &self.records {
            Some(path) => load_records(path).await,
            None => Ok(InMemoryStudentStore::new()),
        }
    }

    async fn execute(&self) -> anyhow::Result<CommandResult> {
        let request = self.request().await?;
        let schema = roster_schema(Arc::new(self.store().await?))?;

        let result = schema.execute(&request);
        log::debug!(
            "Request finished with {} error(s).",
            result.errors.len(),
        );
        let json = serde_json::to_string_pretty(&result)
            .context("failed to serialize the response")?;

        let output = CommandResult::stdout(format_args!("{json}"));
        Ok(if result.is_ok() {
            output
        } else {
            output.with_failure()
        })
    }
}

#[inherent::inherent]
impl RunnableCommand for ExecCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        self.execute().await.unwrap_or_else(CommandResult::error)
    }
}
