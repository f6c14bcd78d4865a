//! The seam between the resolver and whatever it writes into.

use std::fmt;

use crate::error::UnmarshalError;

/// Structural kind of a destination node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Unset,
    Text,
    Record,
    Map,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Unset => "unset",
            Self::Text => "text",
            Self::Record => "record",
            Self::Map => "map",
        })
    }
}

/// Something comment pairs can be resolved into.
///
/// Implemented by [`crate::Bound`] for typed records described by a
/// [`crate::Schema`] and by [`crate::DocValue`] for trees built at runtime.
pub trait Destination {
    /// Shape of the root node, checked once before any pair is resolved.
    fn shape(&self) -> Shape;

    /// Assign `text` to the one leaf addressed by `path`.
    ///
    /// Returns `Ok(false)` when nothing matches; the destination is then left
    /// untouched.
    ///
    /// # Errors
    /// Returns `UnmarshalError::UnsupportedShape` when resolution reaches a
    /// map whose values are not records.
    fn resolve(&mut self, path: &str, text: &str) -> Result<bool, UnmarshalError>;
}

/// Reject destinations that are not records.
///
/// # Errors
/// `InvalidTarget` for an unset destination, `UnsupportedShape` for any
/// other non-record shape.
pub fn check_destination<D: Destination + ?Sized>(destination: &D) -> Result<(), UnmarshalError> {
    match destination.shape() {
        Shape::Record => Ok(()),
        Shape::Unset => Err(UnmarshalError::InvalidTarget {
            shape: Shape::Unset,
        }),
        shape => Err(UnmarshalError::UnsupportedShape {
            position: "destination".to_string(),
            shape,
        }),
    }
}
