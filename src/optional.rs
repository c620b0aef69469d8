//! Optional value container
//!
//! `Optional<T>` holds zero or one value and owns it exclusively. Every read
//! goes through a checked accessor, so an empty container reports
//! [`AccessError::InvalidAccess`] instead of handing out a dangling value.

use crate::error::AccessError;

/// A box holding zero or one value of type `T`
#[derive(Debug, Clone)]
pub struct Optional<T> {
    slot: Option<T>,
}

impl<T> Optional<T> {
    /// Create an unoccupied container
    pub const fn empty() -> Self {
        Self { slot: None }
    }

    /// Create a container holding `value`
    pub const fn of(value: T) -> Self {
        Self { slot: Some(value) }
    }

    pub fn has_value(&self) -> bool {
        self.slot.is_some()
    }

    /// Borrow the contained value
    pub fn value(&self) -> Result<&T, AccessError> {
        self.slot
            .as_ref()
            .ok_or(AccessError::InvalidAccess { accessor: "value" })
    }

    /// Mutably borrow the contained value
    pub fn value_mut(&mut self) -> Result<&mut T, AccessError> {
        self.slot
            .as_mut()
            .ok_or(AccessError::InvalidAccess { accessor: "value_mut" })
    }

    /// Replace the contents with `value`
    ///
    /// A previous occupant is dropped before the new value is stored.
    pub fn set(&mut self, value: T) -> &mut Self {
        drop(self.slot.take());
        self.slot = Some(value);
        self
    }

    /// Move the contained value out, leaving the container empty
    pub fn take(&mut self) -> Result<T, AccessError> {
        self.slot
            .take()
            .ok_or(AccessError::InvalidAccess { accessor: "take" })
    }

    pub fn into_inner(self) -> Option<T> {
        self.slot
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(slot: Option<T>) -> Self {
        Self { slot }
    }
}

impl<T: PartialEq> PartialEq<T> for Optional<T> {
    fn eq(&self, other: &T) -> bool {
        matches!(&self.slot, Some(value) if value == other)
    }
}
