use clap::CommandFactory;
use crate::commands;
use crate::CommandResult;

#[derive(clap::Parser, Debug)]
#[command(
    name = "rollcall",
    version,
    about = "Run, check and describe queries against the student roster.",
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) cmd: Option<commands::CommandEnum>,

    #[arg(
        global=true,
        help="Enable verbose output.",
        long,
        short='v',
    )]
    pub verbose: bool,
}
impl Cli {
    pub(crate) async fn run_default(self) -> CommandResult {
        CommandResult::stdout(format_args!("{}", Self::command().render_help()))
    }
}
