//! Recursive-descent parser for nominal declarations and their stored members.
//!
//! `ParserState` is split across files by concern:
//! - `state.rs`: token cursor, diagnostics, balanced skipping
//! - `state_declarations.rs`: types, member blocks, `let`/`var` bindings
//! - `state_types.rs`: type annotations

mod state;
mod state_declarations;
mod state_types;

pub use state::ParserState;

#[cfg(test)]
#[path = "../tests/parser_tests.rs"]
mod parser_tests;

#[cfg(test)]
#[path = "../tests/type_parse_tests.rs"]
mod type_parse_tests;
