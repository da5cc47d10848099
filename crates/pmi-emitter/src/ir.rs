//! Intermediate representation of a synthesized initializer.
//!
//! The synthesizer decides *what* the initializer contains; the printer
//! decides how it looks. Keeping the two apart lets hosts that build their
//! own syntax trees consume the IR directly.

use crate::options::AccessLevel;
use serde::Serialize;

/// `name: Type` in the parameter list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InitParameter {
    pub name: String,
    pub type_text: String,
}

/// `self.member = value` in the body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Assignment {
    pub member: String,
    pub value: String,
}

/// A complete initializer. Parameters and assignments are parallel and in
/// member declaration order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SynthesizedInitializer {
    pub access: AccessLevel,
    pub parameters: Vec<InitParameter>,
    pub assignments: Vec<Assignment>,
}

impl SynthesizedInitializer {
    #[must_use]
    pub const fn new(access: AccessLevel) -> Self {
        Self {
            access,
            parameters: Vec::new(),
            assignments: Vec::new(),
        }
    }

    /// Add a member: one parameter and the assignment that stores it.
    pub fn push_member(&mut self, name: &str, type_text: String) {
        self.parameters.push(InitParameter {
            name: name.to_string(),
            type_text,
        });
        self.assignments.push(Assignment {
            member: name.to_string(),
            value: name.to_string(),
        });
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    #[must_use]
    pub fn parameter_names(&self) -> Vec<&str> {
        self.parameters.iter().map(|p| p.name.as_str()).collect()
    }
}
