use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::models::user::NewUser;

pub const USER_NAME_PATTERN: &str = "^[a-zA-Z0-9]*$";

// Accepts anything of the shape local@domain without whitespace. Deliberately
// lenient about the domain part; the server is not in the business of
// resolving mailboxes.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+$").expect("valid regex"));

static USER_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(USER_NAME_PATTERN).expect("valid regex"));

/// Why a single candidate field failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub field: &'static str,
    pub message: String,
}

/// A single check against one field of a candidate. Rules are independent:
/// each either passes or contributes one violation, and the pipeline runs
/// all of them.
trait FieldRule: Send + Sync {
    fn check(&self, candidate: &NewUser) -> Option<Violation>;
}

struct NotEmpty {
    field: &'static str,
    value: fn(&NewUser) -> &str,
}

impl FieldRule for NotEmpty {
    fn check(&self, candidate: &NewUser) -> Option<Violation> {
        if (self.value)(candidate).is_empty() {
            Some(Violation {
                field: self.field,
                message: "must not be empty".to_string(),
            })
        } else {
            None
        }
    }
}

/// Format rule backed by a regex. The empty string satisfies any format
/// rule vacuously; emptiness is the `NotEmpty` rule's concern.
struct Matches {
    field: &'static str,
    value: fn(&NewUser) -> &str,
    regex: &'static Lazy<Regex>,
    message: fn() -> String,
}

impl FieldRule for Matches {
    fn check(&self, candidate: &NewUser) -> Option<Violation> {
        let value = (self.value)(candidate);
        if !value.is_empty() && !self.regex.is_match(value) {
            Some(Violation {
                field: self.field,
                message: (self.message)(),
            })
        } else {
            None
        }
    }
}

/// The fixed rule pipeline for user candidates: email rules first, then
/// userName rules, matching the field declaration order of the record.
pub struct Validator {
    rules: Vec<Box<dyn FieldRule>>,
}

impl Validator {
    pub fn new() -> Self {
        Self {
            rules: vec![
                Box::new(NotEmpty {
                    field: "email",
                    value: |c| &c.email,
                }),
                Box::new(Matches {
                    field: "email",
                    value: |c| &c.email,
                    regex: &EMAIL_RE,
                    message: || "must be a well-formed email address".to_string(),
                }),
                Box::new(NotEmpty {
                    field: "userName",
                    value: |c| &c.user_name,
                }),
                Box::new(Matches {
                    field: "userName",
                    value: |c| &c.user_name,
                    regex: &USER_NAME_RE,
                    message: || format!("must match \"{USER_NAME_PATTERN}\""),
                }),
            ],
        }
    }

    /// Runs every rule and accumulates violations; rules never short-circuit
    /// each other.
    pub fn validate(&self, candidate: &NewUser) -> Result<(), Vec<Violation>> {
        let violations: Vec<Violation> = self
            .rules
            .iter()
            .filter_map(|rule| rule.check(candidate))
            .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}
