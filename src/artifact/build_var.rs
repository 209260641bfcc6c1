//! The make fragment: `NAME=<canonical uuid>`.

use uuid::Uuid;

use super::validate_name;
use crate::error::{Error, Result};

const WHAT: &str = "build variable";

/// Renders the single-line build variable assignment, newline included.
#[must_use]
pub fn render_build_var(name: &str, uuid: Uuid) -> String {
    format!("{name}={}\n", uuid.hyphenated())
}

/// Parses a build variable fragment back into its name and identifier.
///
/// The fragment must hold exactly one non-empty line and the value must be
/// in canonical lowercase hyphenated form.
///
/// # Errors
///
/// Returns [`Error::Parse`] for malformed content and [`Error::InvalidName`]
/// when the variable name is not an identifier.
pub fn parse_build_var(text: &str) -> Result<(String, Uuid)> {
    let mut lines = text.lines().filter(|line| !line.trim().is_empty());
    let line = lines.next().ok_or_else(|| Error::parse(WHAT, "file is empty"))?;
    if lines.next().is_some() {
        return Err(Error::parse(WHAT, "expected a single assignment line"));
    }

    let (name, value) =
        line.split_once('=').ok_or_else(|| Error::parse(WHAT, format!("no '=' in {line:?}")))?;
    let name = name.trim();
    validate_name(name)?;

    let value = value.trim();
    let uuid = Uuid::parse_str(value)
        .map_err(|err| Error::parse(WHAT, format!("{value:?} is not a UUID: {err}")))?;
    if uuid.hyphenated().to_string() != value {
        return Err(Error::parse(WHAT, format!("{value:?} is not in canonical form")));
    }

    Ok((name.to_string(), uuid))
}
