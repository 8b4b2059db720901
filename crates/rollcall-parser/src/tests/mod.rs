mod graphql_parser_operation_tests;
mod graphql_parser_selection_tests;
mod utils;
