//! Memberwise initializer synthesis.
//!
//! Turns the stored members of a struct declaration into a widely-visible
//! initializer that assigns every member from a same-named parameter:
//!
//! ```swift
//! public struct MyStruct {
//!     let a, b: String
//!     let c = 1
//! }
//! ```
//!
//! synthesizes
//!
//! ```swift
//! public init(
//!     a: String,
//!     b: String
//! ) {
//!     self.a = a
//!     self.b = b
//! }
//! ```
//!
//! # Pipeline
//!
//! 1. [`collector`] picks the eligible entries in declaration order.
//! 2. [`backfill`] gives every entry a type, borrowing the trailing annotation
//!    of shorthand groups (`let a, b: String`).
//! 3. [`type_render`] spells each type back out.
//! 4. [`synthesize`] assembles the [`ir::SynthesizedInitializer`], which
//!    [`printer::InitializerPrinter`] renders as text.
//!
//! Every stage is a pure function of its input; nothing is cached or shared.

pub mod backfill;
pub mod collector;
pub mod error;
pub mod ir;
pub mod options;
pub mod printer;
pub mod synthesize;
pub mod type_render;

pub use error::{EngineError, UnsupportedShape};
pub use ir::{Assignment, InitParameter, SynthesizedInitializer};
pub use options::{AccessLevel, BackfillScope, EmitOptions, Layout, PrinterOptions};
pub use printer::InitializerPrinter;
pub use synthesize::synthesize_initializer;
pub use type_render::render_type;

#[cfg(test)]
#[path = "tests/collector_tests.rs"]
mod collector_tests;

#[cfg(test)]
#[path = "tests/backfill_tests.rs"]
mod backfill_tests;

#[cfg(test)]
#[path = "tests/type_render_tests.rs"]
mod type_render_tests;

#[cfg(test)]
#[path = "tests/printer_tests.rs"]
mod printer_tests;
