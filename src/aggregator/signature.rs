//! Stack signatures used for duplicate detection.

use crate::parser::schema::Routine;
use crate::utils::config::SignaturePolicy;
use serde::Serialize;
use std::fmt;

/// Key summarizing a routine's whole stack
///
/// One frame per line: the function, then its location under the
/// `Exact` policy.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Signature(String);

impl Signature {
    pub fn of(routine: &Routine, policy: SignaturePolicy) -> Self {
        let mut key = String::new();

        for (index, frame) in routine.frames.iter().enumerate() {
            if index > 0 {
                key.push('\n');
            }
            key.push_str(&frame.function);

            if policy == SignaturePolicy::Exact {
                key.push_str(" @ ");
                match &frame.location {
                    Some(location) => key.push_str(&location.to_string()),
                    None => key.push('?'),
                }
            }
        }

        Self(key)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
