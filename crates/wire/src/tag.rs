//! The fixed wire tag enumeration.

use std::fmt;
use std::str::FromStr;

use itemwire_core::Error;

/// A wire type tag.
///
/// The enumeration is closed: every tag maps to exactly one codec arm, and
/// every [`WireValue`](crate::WireValue) variant exposes exactly one tag.
/// Text that is not in the enumeration fails tag resolution with
/// [`Error::UnknownTag`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WireTag {
    /// Text
    S,
    /// Number as decimal text
    N,
    /// Binary as base64 text
    B,
    /// Boolean
    Bool,
    /// String set
    Ss,
    /// Number set
    Ns,
    /// Binary set
    Bs,
    /// Map of nested documents
    M,
    /// List of nested documents
    L,
}

impl WireTag {
    /// Every tag in the enumeration.
    pub const ALL: [WireTag; 9] = [
        WireTag::S,
        WireTag::N,
        WireTag::B,
        WireTag::Bool,
        WireTag::Ss,
        WireTag::Ns,
        WireTag::Bs,
        WireTag::M,
        WireTag::L,
    ];

    /// The tag's wire spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            WireTag::S => "S",
            WireTag::N => "N",
            WireTag::B => "B",
            WireTag::Bool => "BOOL",
            WireTag::Ss => "SS",
            WireTag::Ns => "NS",
            WireTag::Bs => "BS",
            WireTag::M => "M",
            WireTag::L => "L",
        }
    }
}

impl fmt::Display for WireTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WireTag {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "S" => Ok(WireTag::S),
            "N" => Ok(WireTag::N),
            "B" => Ok(WireTag::B),
            "BOOL" => Ok(WireTag::Bool),
            "SS" => Ok(WireTag::Ss),
            "NS" => Ok(WireTag::Ns),
            "BS" => Ok(WireTag::Bs),
            "M" => Ok(WireTag::M),
            "L" => Ok(WireTag::L),
            other => Err(Error::UnknownTag(other.to_string())),
        }
    }
}
