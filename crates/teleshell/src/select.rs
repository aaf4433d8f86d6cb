//! Output projection.
//!
//! A [`Select`] chooses which part of a command's result becomes pipeline
//! output:
//!
//! - `*` selects the whole response record.
//! - `^Name` selects the value the caller bound to parameter `Name`.
//! - `Member` or `Member.Sub.Path` selects a member of the response record.
//!
//! Arrays are enumerated, so each element becomes its own pipeline object. A
//! member path that passes through an array is followed from every element,
//! so `Contacts.Alias` yields the alias of each contact.
//! Absent members (and unbound parameters) produce no output at all.
use std::str::FromStr;

use serde_json::Value;
use snafu::prelude::*;

use crate::{Error, SelectSnafu};

#[derive(Clone, Debug, PartialEq)]
pub enum Select {
    Response,
    Parameter(String),
    Member(Vec<String>),
}

impl core::fmt::Display for Select {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Select::Response => f.write_str("*"),
            Select::Parameter(name) => write!(f, "^{name}"),
            Select::Member(path) => f.write_str(&path.join(".")),
        }
    }
}

impl FromStr for Select {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ensure!(
            !s.is_empty(),
            SelectSnafu {
                selector: s,
                msg: "the selector is empty"
            }
        );
        if s == "*" {
            return Ok(Select::Response);
        }
        if let Some(name) = s.strip_prefix('^') {
            ensure!(
                !name.is_empty() && !name.contains('.'),
                SelectSnafu {
                    selector: s,
                    msg: "expected a parameter name after '^'"
                }
            );
            return Ok(Select::Parameter(name.to_owned()));
        }
        let path = s.split('.').map(str::to_owned).collect::<Vec<_>>();
        ensure!(
            path.iter().all(|segment| !segment.is_empty()),
            SelectSnafu {
                selector: s,
                msg: "member paths may not contain empty segments"
            }
        );
        Ok(Select::Member(path))
    }
}

/// Looks up `key` in `map`, falling back to a case-insensitive match.
fn lookup<'a>(map: &'a serde_json::Map<String, Value>, key: &str) -> Option<&'a Value> {
    map.get(key).or_else(|| {
        map.iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v)
    })
}

fn enumerate(value: &Value) -> Vec<Value> {
    match value {
        Value::Null => vec![],
        Value::Array(items) => items.iter().filter(|v| !v.is_null()).cloned().collect(),
        other => vec![other.clone()],
    }
}

/// Follows `path` from `value`. Arrays met along the way are enumerated and
/// the rest of the path is followed from each element.
fn walk(value: &Value, path: &[String]) -> Vec<Value> {
    let Some((segment, rest)) = path.split_first() else {
        return enumerate(value);
    };
    match value {
        Value::Object(map) => lookup(map, segment)
            .map(|next| walk(next, rest))
            .unwrap_or_default(),
        Value::Array(items) => items.iter().flat_map(|item| walk(item, path)).collect(),
        _ => vec![],
    }
}

impl Select {
    /// Resolve the projection for one invocation.
    ///
    /// `pass_thru` is shorthand for selecting the command's pass-through
    /// parameter, and cannot be combined with an explicit selector.
    pub fn resolve(
        command: &str,
        selector: Option<&str>,
        pass_thru: bool,
        default_select: &str,
        pass_thru_param: Option<&str>,
    ) -> Result<Self, Error> {
        match (selector, pass_thru) {
            (Some(selector), true) => SelectSnafu {
                selector,
                msg: "--select and --pass-thru cannot be used together",
            }
            .fail(),
            (None, true) => {
                let param = pass_thru_param.context(SelectSnafu {
                    selector: "--pass-thru",
                    msg: format!("{command} has no pass-through parameter"),
                })?;
                Ok(Select::Parameter(param.to_owned()))
            }
            (Some(selector), false) => selector.parse(),
            (None, false) => default_select.parse(),
        }
    }

    /// Project a response into zero or more pipeline objects.
    ///
    /// `context` is the serialized command context. Unbound parameters are
    /// expected to serialize as `null`, so that an unknown parameter name can
    /// be told apart from an unbound one.
    pub fn project(&self, context: &Value, response: &Value) -> Result<Vec<Value>, Error> {
        log::trace!("projecting {self} over {response}");
        match self {
            Select::Response => Ok(enumerate(response)),
            Select::Parameter(name) => {
                let value = context
                    .as_object()
                    .and_then(|map| lookup(map, name))
                    .context(SelectSnafu {
                        selector: self.to_string(),
                        msg: format!("there is no parameter named '{name}'"),
                    })?;
                Ok(enumerate(value))
            }
            Select::Member(path) => Ok(walk(response, path)),
        }
    }
}
