//! The C header fragment holding the identifier as a struct initializer.
//!
//! Rendered layout, with the trailing space after `#pragma once` kept for
//! byte compatibility with existing generated headers:
//!
//! ```text
//! #pragma once
//!
//! #define TA_UUID { \
//!   0x8aaaf200 , 0x2450, 0x11e4, \
//!   { 0xab, 0xe2, 0x00, 0x02, 0xa5, 0xd5, 0xc5, 0x1b } \
//! }
//! ```

use std::sync::LazyLock;

use regex::Regex;
use uuid::Uuid;

use super::{validate_name, TaUuid};
use crate::error::{Error, Result};

const WHAT: &str = "header";

static DEFINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*#[ \t]*define[ \t]+([A-Za-z_][A-Za-z0-9_]*)[ \t]*\{")
        .expect("define pattern is valid")
});

static HEX_LITERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"0[xX]([0-9a-fA-F]+)").expect("hex pattern is valid"));

/// Renders the header defining `macro_name` as the identifier's initializer.
#[must_use]
pub fn render_header(macro_name: &str, uuid: Uuid) -> String {
    let fields = TaUuid::from(uuid);
    let node = fields.node().iter().map(|byte| format!("{byte:#04x}")).collect::<Vec<_>>().join(", ");

    let mut out = String::from("#pragma once \n\n");
    out.push_str(&format!("#define {macro_name} {{ \\\n"));
    out.push_str(&format!(
        "  {:#x} , {:#x}, {:#x}, \\\n",
        fields.time_low, fields.time_mid, fields.time_hi_and_version
    ));
    out.push_str(&format!(
        "  {{ {:#x}, {:#x}, {node} }} \\\n",
        fields.clock_seq_hi_and_reserved(),
        fields.clock_seq_low()
    ));
    out.push_str("}\n");
    out
}

/// Parses a header fragment back into its macro name and identifier.
///
/// Accepts any whitespace and line continuations inside the initializer, but
/// requires the `#pragma once` guard, three outer literals and eight inner
/// ones, each fitting the width of its field.
///
/// # Errors
///
/// Returns [`Error::Parse`] when the structure or a literal is wrong.
pub fn parse_header(text: &str) -> Result<(String, Uuid)> {
    if !text.lines().any(|line| line.trim() == "#pragma once") {
        return Err(Error::parse(WHAT, "missing `#pragma once`"));
    }

    let define = DEFINE.captures(text).ok_or_else(|| Error::parse(WHAT, "no `#define NAME {`"))?;
    let name = define[1].to_string();
    validate_name(&name)?;

    let body_start = define.get(0).map_or(0, |m| m.end());
    let body = &text[body_start..];
    let (outer, rest) =
        body.split_once('{').ok_or_else(|| Error::parse(WHAT, "missing inner `{` list"))?;
    let (inner, tail) =
        rest.split_once('}').ok_or_else(|| Error::parse(WHAT, "unterminated inner list"))?;
    if !tail.contains('}') {
        return Err(Error::parse(WHAT, "unterminated initializer"));
    }

    let outer = hex_literals(outer)?;
    let [time_low, time_mid, time_hi_and_version] = outer.as_slice() else {
        return Err(Error::parse(WHAT, format!("expected 3 leading fields, found {}", outer.len())));
    };
    let inner = hex_literals(inner)?;
    if inner.len() != 8 {
        return Err(Error::parse(WHAT, format!("expected 8 trailing bytes, found {}", inner.len())));
    }

    let mut clock_seq_and_node = [0u8; 8];
    for (slot, value) in clock_seq_and_node.iter_mut().zip(&inner) {
        *slot = narrow(*value)?;
    }
    let fields = TaUuid {
        time_low: narrow(*time_low)?,
        time_mid: narrow(*time_mid)?,
        time_hi_and_version: narrow(*time_hi_and_version)?,
        clock_seq_and_node,
    };

    Ok((name, fields.into()))
}

fn hex_literals(text: &str) -> Result<Vec<u64>> {
    HEX_LITERAL
        .captures_iter(text)
        .map(|caps| {
            u64::from_str_radix(&caps[1], 16)
                .map_err(|err| Error::parse(WHAT, format!("bad literal {}: {err}", &caps[0])))
        })
        .collect()
}

fn narrow<T: TryFrom<u64>>(value: u64) -> Result<T> {
    T::try_from(value).map_err(|_| {
        Error::parse(
            WHAT,
            format!("literal {value:#x} does not fit in {} bits", std::mem::size_of::<T>() * 8),
        )
    })
}
