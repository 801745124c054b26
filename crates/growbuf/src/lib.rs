//! Append-only growable buffer with fallible, capacity-doubling growth.
//!
//! `GrowBuf` accumulates records of unknown count: capacity starts at 0,
//! becomes 1 on the first append, then doubles every time the buffer fills.
//! Growth goes through fallible reservation, so an allocator refusal or a
//! capacity overflow surfaces as a [`ReserveError`] instead of aborting the
//! process. A failed growth leaves the buffer unchanged and safe to drop.

use std::collections::TryReserveError;
use std::fmt;
use std::ops::{Deref, DerefMut};

/// Failure to grow a [`GrowBuf`]. Both variants are out-of-memory-class
/// and terminal: the caller is expected to discard the whole collection.
#[derive(Debug)]
pub enum ReserveError {
    /// Doubling the capacity would overflow `usize`.
    CapacityOverflow,
    /// The allocator could not satisfy the reservation.
    Alloc(TryReserveError),
}

impl fmt::Display for ReserveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityOverflow => write!(f, "buffer capacity overflow"),
            Self::Alloc(err) => write!(f, "buffer allocation failed: {}", err),
        }
    }
}

impl std::error::Error for ReserveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::CapacityOverflow => None,
            Self::Alloc(err) => Some(err),
        }
    }
}

impl From<TryReserveError> for ReserveError {
    fn from(err: TryReserveError) -> Self {
        Self::Alloc(err)
    }
}

/// Append-only collection of `T` with explicit, fallible capacity doubling.
///
/// `len() <= capacity()` always holds. `capacity()` reports the logical
/// capacity driven by the doubling policy; the backing storage never holds
/// fewer than `capacity()` slots.
#[derive(Debug)]
pub struct GrowBuf<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> GrowBuf<T> {
    /// Creates an empty buffer. Does not allocate.
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            capacity: 0,
        }
    }

    /// Creates a buffer with room for `capacity` elements, reserved
    /// fallibly up front.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, ReserveError> {
        let mut items = Vec::new();
        items.try_reserve_exact(capacity)?;
        Ok(Self { items, capacity })
    }

    /// Appends `value`, doubling the capacity first if the buffer is full.
    ///
    /// On error the buffer is unchanged: every previously appended element
    /// is still present and the buffer can be dropped or reused.
    pub fn try_push(&mut self, value: T) -> Result<(), ReserveError> {
        if self.items.len() == self.capacity {
            self.grow()?;
        }
        self.items.push(value);
        Ok(())
    }

    fn grow(&mut self) -> Result<(), ReserveError> {
        let new_capacity = if self.capacity == 0 {
            1
        } else {
            self.capacity
                .checked_mul(2)
                .ok_or(ReserveError::CapacityOverflow)?
        };
        self.items.try_reserve_exact(new_capacity - self.items.len())?;
        self.capacity = new_capacity;
        Ok(())
    }

    /// Number of appended elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Logical capacity under the doubling policy (0, 1, 2, 4, 8, …).
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items
    }

    /// Consumes the buffer, handing its storage to the caller.
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T> Default for GrowBuf<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for GrowBuf<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.items
    }
}

impl<T> DerefMut for GrowBuf<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        &mut self.items
    }
}

impl<'a, T> IntoIterator for &'a GrowBuf<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests;
