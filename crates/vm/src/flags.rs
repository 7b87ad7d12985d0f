//! Condition flags set by CMP.

use std::cmp::Ordering;

/// The Equal/Less/Greater flags.
///
/// All clear until the first comparison. After any comparison exactly one
/// is set, which is why the only way to set them is [`Flags::from_ordering`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Flags {
    equal: bool,
    less: bool,
    greater: bool,
}

impl Flags {
    /// Flags for `a.cmp(&b)`.
    pub fn from_ordering(ordering: Ordering) -> Self {
        Self {
            equal: ordering == Ordering::Equal,
            less: ordering == Ordering::Less,
            greater: ordering == Ordering::Greater,
        }
    }

    /// E flag.
    pub fn equal(&self) -> bool {
        self.equal
    }

    /// L flag.
    pub fn less(&self) -> bool {
        self.less
    }

    /// G flag.
    pub fn greater(&self) -> bool {
        self.greater
    }

    /// The ordering recorded by the last comparison, if any.
    pub fn ordering(&self) -> Option<Ordering> {
        match (self.less, self.equal, self.greater) {
            (true, _, _) => Some(Ordering::Less),
            (_, true, _) => Some(Ordering::Equal),
            (_, _, true) => Some(Ordering::Greater),
            _ => None,
        }
    }

    /// Packed `00000LGE` flag byte.
    pub fn bits(&self) -> u8 {
        ((self.less as u8) << 2) | ((self.greater as u8) << 1) | (self.equal as u8)
    }
}
