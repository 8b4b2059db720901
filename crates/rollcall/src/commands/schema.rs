use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::commands::roster_schema;
use rollcall_roster::InMemoryStudentStore;
use std::sync::Arc;

#[derive(Debug, clap::Args)]
pub(crate) struct SchemaCmd {}

#[inherent::inherent]
impl RunnableCommand for SchemaCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        match roster_schema(Arc::new(InMemoryStudentStore::new())) {
            Ok(schema) => {
                let sdl = schema.to_sdl();
                CommandResult::stdout(format_args!("{}", sdl.trim_end()))
            },
            Err(err) => CommandResult::error(err),
        }
    }
}
