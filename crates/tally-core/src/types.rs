//! The value type lattice of the language.
//!
//! Four types, no subtyping and no implicit conversions: two types are
//! compatible exactly when they are equal.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type of a declared variable or of an evaluated expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VarType {
    Num,
    Bool,
    ListNum,
    ListBool,
}

impl VarType {
    /// Type named by a scalar declaration keyword; anything but `num` is `bool`.
    #[must_use]
    pub fn from_scalar_keyword(keyword: &str) -> Self {
        if keyword == "num" { Self::Num } else { Self::Bool }
    }

    /// Type named by a list declaration keyword; anything but `listnum` is `listbool`.
    #[must_use]
    pub fn from_list_keyword(keyword: &str) -> Self {
        if keyword == "listnum" {
            Self::ListNum
        } else {
            Self::ListBool
        }
    }

    /// The list type holding elements of this type.
    ///
    /// Returns `None` for list types, lists of lists do not exist.
    #[must_use]
    pub const fn list_of(self) -> Option<Self> {
        match self {
            Self::Num => Some(Self::ListNum),
            Self::Bool => Some(Self::ListBool),
            Self::ListNum | Self::ListBool => None,
        }
    }

    #[must_use]
    pub const fn is_list(self) -> bool {
        matches!(self, Self::ListNum | Self::ListBool)
    }

    /// Keyword spelling of the type in source code.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Num => "num",
            Self::Bool => "bool",
            Self::ListNum => "listnum",
            Self::ListBool => "listbool",
        }
    }
}

impl fmt::Display for VarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}
