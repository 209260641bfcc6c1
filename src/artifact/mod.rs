//! The two build artifacts derived from one identifier.
//!
//! A trusted application is identified by a UUID that both the build system
//! (as a string variable) and the C sources (as a struct initializer) need.
//! [`build_var`] handles the make fragment, [`header`] the C header; both are
//! views of the same [`TaUuid`].

pub mod build_var;
pub mod header;

use uuid::Uuid;

use crate::error::{Error, Result};

pub use build_var::{parse_build_var, render_build_var};
pub use header::{parse_header, render_header};

/// Default name of the make variable and of the header macro.
pub const DEFAULT_NAME: &str = "TA_UUID";
/// File name of the build-variable fragment.
pub const BUILD_VAR_FILE: &str = "uuid.mk";
/// File name of the header fragment.
pub const HEADER_FILE: &str = "uuid.h";

/// Structural field view of a UUID, in the order C initializers expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaUuid {
    /// First 32-bit group.
    pub time_low: u32,
    /// Second 16-bit group.
    pub time_mid: u16,
    /// Third 16-bit group; its high nibble is the version.
    pub time_hi_and_version: u16,
    /// Clock sequence (variant byte first) followed by the 6-byte node.
    pub clock_seq_and_node: [u8; 8],
}

impl TaUuid {
    /// Clock-sequence high byte, carrying the variant bits.
    #[must_use]
    pub fn clock_seq_hi_and_reserved(&self) -> u8 {
        self.clock_seq_and_node[0]
    }

    /// Clock-sequence low byte.
    #[must_use]
    pub fn clock_seq_low(&self) -> u8 {
        self.clock_seq_and_node[1]
    }

    /// The 6-byte node field.
    #[must_use]
    pub fn node(&self) -> &[u8] {
        &self.clock_seq_and_node[2..]
    }
}

impl From<Uuid> for TaUuid {
    fn from(uuid: Uuid) -> Self {
        let (time_low, time_mid, time_hi_and_version, clock_seq_and_node) = uuid.as_fields();
        Self { time_low, time_mid, time_hi_and_version, clock_seq_and_node: *clock_seq_and_node }
    }
}

impl From<TaUuid> for Uuid {
    fn from(fields: TaUuid) -> Self {
        Uuid::from_fields(
            fields.time_low,
            fields.time_mid,
            fields.time_hi_and_version,
            &fields.clock_seq_and_node,
        )
    }
}

/// Checks that `name` can be used as both a make variable and a C macro.
///
/// # Errors
///
/// Returns [`Error::InvalidName`] unless `name` matches `[A-Za-z_][A-Za-z0-9_]*`.
pub fn validate_name(name: &str) -> Result<()> {
    let mut chars = name.chars();
    let valid_head = chars.next().is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
    if valid_head && chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        Ok(())
    } else {
        Err(Error::InvalidName(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_follow_the_canonical_grouping() {
        let uuid = Uuid::parse_str("8aaaf200-2450-11e4-abe2-0002a5d5c51b").unwrap();
        let fields = TaUuid::from(uuid);

        assert_eq!(fields.time_low, 0x8aaa_f200);
        assert_eq!(fields.time_mid, 0x2450);
        assert_eq!(fields.time_hi_and_version, 0x11e4);
        assert_eq!(fields.clock_seq_hi_and_reserved(), 0xab);
        assert_eq!(fields.clock_seq_low(), 0xe2);
        assert_eq!(fields.node(), &[0x00, 0x02, 0xa5, 0xd5, 0xc5, 0x1b]);
        assert_eq!(Uuid::from(fields), uuid);
    }

    #[test]
    fn trailing_bytes_are_the_last_eight_uuid_bytes() {
        let uuid = Uuid::new_v4();
        let fields = TaUuid::from(uuid);
        assert_eq!(&fields.clock_seq_and_node[..], &uuid.as_bytes()[8..]);
    }

    #[test]
    fn accepts_c_identifiers() {
        assert!(validate_name("TA_UUID").is_ok());
        assert!(validate_name("_private9").is_ok());
    }

    #[test]
    fn rejects_non_identifiers() {
        for name in ["", "9LIVES", "TA-UUID", "TA UUID", "TÄ"] {
            assert!(
                matches!(validate_name(name), Err(Error::InvalidName(_))),
                "{name:?} should be rejected"
            );
        }
    }
}
