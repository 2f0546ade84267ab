//! Command-line token parsing
//!
//! Turns a flat token list such as `["update", "Id:3", "Salary:42.50"]` into a
//! typed [`Command`]. Parameters are `Key:Value` pieces found anywhere after
//! the command name; a single token may pack several pieces separated by
//! whitespace (`"FirstName:John LastName:Doe Salary:100.50"`).

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use tracing::debug;

use crate::domain::{DomainError, EmployeeId, EmployeeUpdate};

pub const KEY_ID: &str = "Id";
pub const KEY_FIRST_NAME: &str = "FirstName";
pub const KEY_LAST_NAME: &str = "LastName";
pub const KEY_SALARY: &str = "Salary";

const KNOWN_KEYS: [&str; 4] = [KEY_ID, KEY_FIRST_NAME, KEY_LAST_NAME, KEY_SALARY];

/// Command selected by the first token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Add,
    Update,
    Get,
    Delete,
    List,
}

impl CommandKind {
    /// Match a command token. Accepts the plain names and the dash-prefixed
    /// spellings of earlier releases (`-add`, `-getall`, ...).
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "add" | "-add" => Some(Self::Add),
            "update" | "-update" => Some(Self::Update),
            "get" | "-get" => Some(Self::Get),
            "delete" | "-delete" => Some(Self::Delete),
            "list" | "-getall" => Some(Self::List),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Update => "update",
            Self::Get => "get",
            Self::Delete => "delete",
            Self::List => "list",
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A fully parsed and type-checked command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add {
        first_name: String,
        last_name: String,
        salary: Decimal,
    },
    Update {
        id: EmployeeId,
        changes: EmployeeUpdate,
    },
    Get {
        id: EmployeeId,
    },
    Delete {
        id: EmployeeId,
    },
    List,
}

impl Command {
    /// Parse a raw token list.
    ///
    /// # Errors
    /// - [`DomainError::NoArguments`] for an empty list
    /// - [`DomainError::UnknownCommand`] if the first token is not a command
    /// - [`DomainError::InvalidArguments`] if a required key is missing or a
    ///   numeric value does not parse
    pub fn parse<S: AsRef<str>>(tokens: &[S]) -> Result<Self, DomainError> {
        let (head, rest) = tokens.split_first().ok_or(DomainError::NoArguments)?;
        let head = head.as_ref();
        let kind = CommandKind::from_token(head)
            .ok_or_else(|| DomainError::UnknownCommand(head.to_string()))?;
        let params = Params::from_tokens(rest);
        debug!("parse: command={} params={:?}", kind, params.values);

        match kind {
            CommandKind::Add => Ok(Self::Add {
                first_name: params.required_text(kind, KEY_FIRST_NAME)?,
                last_name: params.required_text(kind, KEY_LAST_NAME)?,
                salary: params.required_salary(kind)?,
            }),
            CommandKind::Update => Ok(Self::Update {
                id: params.required_id(kind)?,
                changes: EmployeeUpdate {
                    first_name: params.text(KEY_FIRST_NAME),
                    last_name: params.text(KEY_LAST_NAME),
                    salary: params.salary(kind)?,
                },
            }),
            CommandKind::Get => Ok(Self::Get {
                id: params.required_id(kind)?,
            }),
            CommandKind::Delete => Ok(Self::Delete {
                id: params.required_id(kind)?,
            }),
            CommandKind::List => Ok(Self::List),
        }
    }

    pub fn kind(&self) -> CommandKind {
        match self {
            Self::Add { .. } => CommandKind::Add,
            Self::Update { .. } => CommandKind::Update,
            Self::Get { .. } => CommandKind::Get,
            Self::Delete { .. } => CommandKind::Delete,
            Self::List => CommandKind::List,
        }
    }
}

/// `Key:Value` parameters collected from the tokens after the command.
#[derive(Debug, Default)]
struct Params<'a> {
    values: HashMap<&'a str, &'a str>,
}

impl<'a> Params<'a> {
    fn from_tokens<S: AsRef<str>>(tokens: &'a [S]) -> Self {
        let mut values = HashMap::new();
        for piece in tokens.iter().flat_map(|t| t.as_ref().split_whitespace()) {
            match piece.split_once(':') {
                Some((key, value)) if KNOWN_KEYS.iter().any(|k| *k == key) => {
                    // first occurrence wins
                    values.entry(key).or_insert(value);
                }
                _ => debug!("ignoring parameter: {}", piece),
            }
        }
        Self { values }
    }

    fn text(&self, key: &str) -> Option<String> {
        self.values.get(key).map(|v| v.to_string())
    }

    fn required_text(&self, kind: CommandKind, key: &str) -> Result<String, DomainError> {
        match self.values.get(key) {
            Some(v) if !v.is_empty() => Ok(v.to_string()),
            Some(_) => Err(invalid(kind, format!("{key} must not be empty"))),
            None => Err(invalid(kind, format!("missing {key}"))),
        }
    }

    fn required_id(&self, kind: CommandKind) -> Result<EmployeeId, DomainError> {
        let raw = self
            .values
            .get(KEY_ID)
            .ok_or_else(|| invalid(kind, format!("missing {KEY_ID}")))?;
        raw.parse::<EmployeeId>()
            .map_err(|_| invalid(kind, format!("{KEY_ID} is not an integer: {raw:?}")))
    }

    fn salary(&self, kind: CommandKind) -> Result<Option<Decimal>, DomainError> {
        self.values
            .get(KEY_SALARY)
            .map(|raw| {
                Decimal::from_str(raw).map_err(|_| {
                    invalid(kind, format!("{KEY_SALARY} is not a decimal: {raw:?}"))
                })
            })
            .transpose()
    }

    fn required_salary(&self, kind: CommandKind) -> Result<Decimal, DomainError> {
        self.salary(kind)?
            .ok_or_else(|| invalid(kind, format!("missing {KEY_SALARY}")))
    }
}

fn invalid(kind: CommandKind, reason: String) -> DomainError {
    DomainError::InvalidArguments {
        command: kind.name(),
        reason,
    }
}
