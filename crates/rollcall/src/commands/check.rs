use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::commands::roster_schema;
use rollcall_core::error::GraphQLError;
use rollcall_core::parser::GraphQLParser;
use rollcall_roster::InMemoryStudentStore;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct CheckCmd {
    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "gql".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="Paths to one or more query documents or directories \
             containing query documents which need to be checked.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}
impl CheckCmd {
    /// Finds every matching file at or under each argument path. Returns the
    /// files plus a count of skipped entries, or the walk errors.
    fn collect_file_paths(&self) -> Result<(Vec<PathBuf>, usize), Vec<String>> {
        let graphql_file_exts: HashSet<&str> =
            self.graphql_file_exts.iter()
                .map(|ext| ext.trim_start_matches('.'))
                .collect();

        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        let mut errors = vec![];
        let mut num_skipped: usize = 0;
        let mut file_paths = vec![];
        for path in &self.file_or_dir_paths {
            for entry in WalkDir::new(path.as_path()).follow_links(true) {
                match entry {
                    Ok(entry) => {
                        let path = entry.path();
                        if !entry.file_type().is_file() {
                            log::trace!("Skipping non-file: {path:#?}.");
                            continue;
                        }
                        if path.extension()
                            .and_then(|ext| ext.to_str())
                            .is_some_and(|ext| graphql_file_exts.contains(ext)) {
                            log::trace!("Found file at {path:#?}.");
                            file_paths.push(path.to_path_buf());
                        } else {
                            num_skipped += 1;
                        }
                    },

                    Err(e) => {
                        log::trace!(
                            "Encountered an error while walking {path:#?}."
                        );
                        errors.push(e.to_string());
                    },
                }
            }
        }

        // A single file argument is checked even when its extension doesn't
        // match.
        if file_paths.is_empty()
            && let [only_path] = self.file_or_dir_paths.as_slice()
            && only_path.is_file() {
            log::warn!(
                "Proceeding to check {only_path:#?} even though it doesn't \
                match any of the --graphql-file-exts ({}).",
                self.graphql_file_exts.join(", "),
            );
            file_paths.push(only_path.clone());
            num_skipped = num_skipped.saturating_sub(1);
        }

        if errors.is_empty() {
            Ok((file_paths, num_skipped))
        } else {
            Err(errors)
        }
    }
}

#[inherent::inherent]
impl RunnableCommand for CheckCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let (file_paths, num_skipped) = match self.collect_file_paths() {
            Ok(found) => found,
            Err(errors) => return CommandResult::stderr(format_args!(
                "{} Failed to scan input paths:\n{}",
                output_utils::RED_X,
                errors.join("\n"),
            )),
        };
        log::debug!("Found {} query documents to check.", file_paths.len());

        let schema = match roster_schema(Arc::new(InMemoryStudentStore::new())) {
            Ok(schema) => schema,
            Err(err) => return CommandResult::error(err),
        };

        let mut reports = vec![];
        let mut num_operations = 0;
        for path in &file_paths {
            let source = match tokio::fs::read_to_string(path).await {
                Ok(source) => source,
                Err(err) => {
                    reports.push(format!("{}: {err}", path.display()));
                    continue;
                },
            };

            let parse_result =
                GraphQLParser::with_file_path(&source, path)
                    .parse_executable_document();
            if parse_result.has_errors() {
                reports.push(parse_result.format_errors(Some(&source)));
                continue;
            }
            let Some(document) = parse_result.valid_ast() else {
                continue;
            };

            num_operations += document.operations.len();
            reports.extend(
                schema.validate(document)
                    .iter()
                    .map(|err| format_validation_error(path, err)),
            );
        }

        if !reports.is_empty() {
            return CommandResult::stderr(format_args!(
                "{} Query documents failed to check:\n{}",
                output_utils::RED_X,
                reports.join("\n"),
            ));
        }

        CommandResult::stdout(format_args!(
            concat!(
                "{} All query documents checked successfully:\n",
                "  * Analyzed {} files.\n",
                "  * Skipped {} non-matching files.\n",
                "  * Checked {} operations.",
            ),
            output_utils::GREEN_CHECK,
            file_paths.len(),
            num_skipped,
            num_operations,
        ))
    }
}

fn format_validation_error(path: &Path, err: &GraphQLError) -> String {
    match err.locations.first() {
        Some(loc) => format!(
            "{}:{}:{}: {} [{}]",
            path.display(),
            loc.line,
            loc.column,
            err.message(),
            err.kind(),
        ),
        None => format!("{}: {} [{}]", path.display(), err.message(), err.kind()),
    }
}
