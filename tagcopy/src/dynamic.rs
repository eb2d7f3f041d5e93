//! Type-erased copies.
//!
//! Callers that only hold `dyn DynRecord` values (registries, handler
//! tables) cannot rely on the compiler to prove the destination is mutable
//! or that both sides are the same type, so both are checked at runtime.

use core::any::Any;
use core::fmt;

use facet_core::Shape;
use tracing::debug;

use crate::copier::{assign_fields, log_rejected};
use crate::errors::{Error, Result};
use crate::table::Tagged;

/// Object-safe view of a [`Tagged`] record.
pub trait DynRecord: Any {
    fn shape(&self) -> &'static Shape;

    fn as_any(&self) -> &dyn Any;

    /// Copy the fields of `src` selected by `tag` into `self`.
    ///
    /// Returns the number of fields copied.
    fn assign_tagged(&mut self, src: &dyn DynRecord, tag: &str) -> Result<usize>;
}

impl<T: Tagged> DynRecord for T {
    fn shape(&self) -> &'static Shape {
        T::SHAPE
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn assign_tagged(&mut self, src: &dyn DynRecord, tag: &str) -> Result<usize> {
        let mismatch = || Error::ShapeMismatch {
            dst_type: T::SHAPE.type_identifier,
            src_type: src.shape().type_identifier,
        };
        if src.shape().id != T::SHAPE.id {
            return Err(mismatch());
        }
        let src = src.as_any().downcast_ref::<T>().ok_or_else(mismatch)?;
        Ok(assign_fields(self, src, tag))
    }
}

/// Where a type-erased copy writes to.
///
/// Only [`Destination::Mut`] is addressable; the other variants exist so
/// that handing over a value that cannot be written back is reported as
/// [`Error::DestinationNotAddressable`] instead of silently discarding the
/// copy.
pub enum Destination<'a> {
    Mut(&'a mut (dyn DynRecord + 'static)),
    Ref(&'a (dyn DynRecord + 'static)),
    Owned(Box<dyn DynRecord>),
}

impl Destination<'_> {
    pub fn owned<T: Tagged>(value: T) -> Self {
        Destination::Owned(Box::new(value))
    }

    pub fn is_addressable(&self) -> bool {
        matches!(self, Destination::Mut(_))
    }

    pub fn shape(&self) -> &'static Shape {
        match self {
            Destination::Mut(record) => record.shape(),
            Destination::Ref(record) => record.shape(),
            Destination::Owned(record) => record.shape(),
        }
    }
}

impl fmt::Debug for Destination<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            Destination::Mut(_) => "Mut",
            Destination::Ref(_) => "Ref",
            Destination::Owned(_) => "Owned",
        };
        write!(f, "Destination::{kind}({})", self.shape().type_identifier)
    }
}

impl<'a, T: Tagged> From<&'a mut T> for Destination<'a> {
    fn from(value: &'a mut T) -> Self {
        Destination::Mut(value)
    }
}

impl<'a, T: Tagged> From<&'a T> for Destination<'a> {
    fn from(value: &'a T) -> Self {
        Destination::Ref(value)
    }
}

impl<'a> From<&'a mut (dyn DynRecord + 'static)> for Destination<'a> {
    fn from(value: &'a mut (dyn DynRecord + 'static)) -> Self {
        Destination::Mut(value)
    }
}

/// Type-erased [`copy`](crate::copy).
///
/// Checks run in order: addressability, then shape identity. Either failure
/// leaves the destination untouched.
pub fn copy_dyn<'a>(
    dst: impl Into<Destination<'a>>,
    src: &dyn DynRecord,
    tag: &str,
) -> Result<()> {
    let dst = match dst.into() {
        Destination::Mut(record) => record,
        other => {
            let err = Error::DestinationNotAddressable {
                type_name: other.shape().type_identifier,
            };
            log_rejected(&err);
            return Err(err);
        }
    };
    let copied = dst.assign_tagged(src, tag).inspect_err(log_rejected)?;
    debug!(
        shape = dst.shape().type_identifier,
        tag, copied, "copied tagged fields"
    );
    Ok(())
}
