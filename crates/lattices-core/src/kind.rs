//! # Value Kinds
//!
//! Configuration documents arrive as `serde_json::Value` trees. A
//! [`ValueKind`] is the runtime type of one node; a [`KindSet`] is the set of
//! kinds a field accepts.
//!
//! Numbers are split into `int` (representable as `i64` or `u64`) and
//! `float` (everything else). Booleans are never numeric.

use std::fmt;

use serde_json::Value;

/// Runtime kind of a configuration value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ValueKind {
    /// `null` / `~`.
    Null,
    /// `true` / `false`.
    Bool,
    /// Integral number.
    Int,
    /// Non-integral number.
    Float,
    /// String.
    Str,
    /// Ordered sequence.
    List,
    /// String-keyed mapping.
    Mapping,
}

impl ValueKind {
    /// Name used in diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::Str => "str",
            Self::List => "list",
            Self::Mapping => "mapping",
        }
    }

    /// True for `int` and `float`.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Int | Self::Float)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Runtime kind of `value`.
pub fn kind_of(value: &Value) -> ValueKind {
    match value {
        Value::Null => ValueKind::Null,
        Value::Bool(_) => ValueKind::Bool,
        Value::Number(n) if n.is_i64() || n.is_u64() => ValueKind::Int,
        Value::Number(_) => ValueKind::Float,
        Value::String(_) => ValueKind::Str,
        Value::Array(_) => ValueKind::List,
        Value::Object(_) => ValueKind::Mapping,
    }
}

/// A set of acceptable kinds.
///
/// The empty set is special-cased to mean "any kind", which is what opaque
/// token lists such as `jumping` need.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindSet(&'static [ValueKind]);

impl KindSet {
    /// Accepts every kind.
    pub const ANY: KindSet = KindSet(&[]);
    /// `int` or `float`.
    pub const REAL: KindSet = KindSet(&[ValueKind::Int, ValueKind::Float]);
    /// `int` only.
    pub const INT: KindSet = KindSet(&[ValueKind::Int]);
    /// `float` only.
    pub const FLOAT: KindSet = KindSet(&[ValueKind::Float]);
    /// `bool` only.
    pub const BOOL: KindSet = KindSet(&[ValueKind::Bool]);
    /// `str` only.
    pub const STR: KindSet = KindSet(&[ValueKind::Str]);
    /// `list` only.
    pub const LIST: KindSet = KindSet(&[ValueKind::List]);
    /// `mapping` only.
    pub const MAPPING: KindSet = KindSet(&[ValueKind::Mapping]);

    /// Build a set from a static slice of kinds.
    pub const fn of(kinds: &'static [ValueKind]) -> Self {
        Self(kinds)
    }

    /// The kinds in this set; empty for [`KindSet::ANY`].
    pub fn kinds(&self) -> &'static [ValueKind] {
        self.0
    }

    /// True if the set accepts every kind.
    pub fn is_any(&self) -> bool {
        self.0.is_empty()
    }

    /// True if `kind` is acceptable.
    pub fn contains(&self, kind: ValueKind) -> bool {
        self.is_any() || self.0.contains(&kind)
    }

    /// True if the runtime kind of `value` is acceptable.
    pub fn admits(&self, value: &Value) -> bool {
        self.contains(kind_of(value))
    }

    /// True if every acceptable kind is numeric.
    pub fn is_numeric(&self) -> bool {
        !self.is_any() && self.0.iter().all(ValueKind::is_numeric)
    }
}

impl fmt::Display for KindSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_any() {
            return f.write_str("any");
        }
        for (i, kind) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" | ")?;
            }
            write!(f, "{kind}")?;
        }
        Ok(())
    }
}

/// Tuple-style rendering of the kinds of each element, e.g. `(int, str)`.
pub fn kinds_of(values: &[Value]) -> String {
    let kinds: Vec<&str> = values.iter().map(|v| kind_of(v).as_str()).collect();
    format!("({})", kinds.join(", "))
}
