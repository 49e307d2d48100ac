// Copyright (c) 2025 Nicholas D. Crosbie
use std::fmt;

/// How a value is expanded, decided once per value before any child is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// Key enumeration plus lookup by key.
    Mapping,
    /// Length plus integer indexing.
    Sequence,
    /// Atomic value (numbers, text, `None`); never expanded.
    Scalar,
    /// Everything else; expanded through its public, non-callable attributes.
    Object,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Mapping => "mapping",
            ValueKind::Sequence => "sequence",
            ValueKind::Scalar => "scalar",
            ValueKind::Object => "object",
        };
        f.write_str(name)
    }
}

/// Reflection capabilities the walker needs from a runtime value.
///
/// Only the methods matching the value's [`ValueKind`] are called: `keys` and
/// `lookup` for mappings, `length` and `item` for sequences,
/// `attribute_names` and `attribute` for objects.
pub trait Inspect: Sized {
    type Error: fmt::Display;

    /// Iterator over mapping keys. An `Err` item ends the enumeration.
    type Keys: Iterator<Item = Result<Self, Self::Error>>;

    /// Identity of the underlying object, stable while the value is alive.
    fn identity(&self) -> usize;

    fn type_name(&self) -> String;

    /// Full textual rendering; the walker truncates it.
    fn preview(&self) -> Result<String, Self::Error>;

    fn kind(&self) -> Result<ValueKind, Self::Error>;

    fn keys(&self) -> Result<Self::Keys, Self::Error>;

    /// Source literal for `self` used as a key, e.g. `'name'` or `3`.
    fn key_literal(&self) -> Result<String, Self::Error>;

    fn lookup(&self, key: &Self) -> Result<Self, Self::Error>;

    fn length(&self) -> Result<usize, Self::Error>;

    fn item(&self, index: usize) -> Result<Self, Self::Error>;

    /// Public, non-callable attribute names in listing order.
    fn attribute_names(&self) -> Result<Vec<String>, Self::Error>;

    fn attribute(&self, name: &str) -> Result<Self, Self::Error>;
}
