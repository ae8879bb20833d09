use std::fmt;
use std::str::FromStr;

use crate::error::DispatchError;

/// The closed set of palette backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendKind {
    ColorThief,
    Colorz,
    Haishoku,
    Schemer2,
    Wal,
}

impl BackendKind {
    /// Number of backends
    pub const COUNT: usize = 5;

    /// Every backend, in registry order.
    pub const ALL: [BackendKind; Self::COUNT] = [
        BackendKind::ColorThief,
        BackendKind::Colorz,
        BackendKind::Haishoku,
        BackendKind::Schemer2,
        BackendKind::Wal,
    ];

    /// Name used on the command line
    pub const fn name(self) -> &'static str {
        match self {
            BackendKind::ColorThief => "colorthief",
            BackendKind::Colorz => "colorz",
            BackendKind::Haishoku => "haishoku",
            BackendKind::Schemer2 => "schemer2",
            BackendKind::Wal => "wal",
        }
    }

    /// Slot in the registry table
    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BackendKind {
    type Err = DispatchError;

    /// Exact, case-sensitive match on the command-line name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BackendKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| DispatchError::UnknownBackend(s.to_string()))
    }
}
