use core::any::Any;

use tracing::{debug, trace};

use crate::errors::{Error, Result};
use crate::table::{Tagged, debug_assert_table_covers_shape};

/// Copy every field of `src` whose declaration contains `tag` into `dst`.
///
/// Fields not selected by `tag` keep their destination value. `D` and `S`
/// must be the same shape: two distinct structs with identical fields are
/// rejected with [`Error::ShapeMismatch`] before anything is written.
///
/// Field values are cloned as a unit, so a `Vec<Child>` field is carried over
/// whole regardless of the tags declared inside `Child`.
pub fn copy<D, S>(dst: &mut D, src: &S, tag: &str) -> Result<()>
where
    D: Tagged,
    S: Tagged,
{
    let src = same_shape_ref::<D, S>(src).inspect_err(log_rejected)?;
    let copied = assign_fields(dst, src, tag);
    debug!(shape = D::SHAPE.type_identifier, tag, copied, "copied tagged fields");
    Ok(())
}

/// Like [`copy`], but takes the source by value and moves the selected
/// field values instead of cloning them. The rest of `src` is dropped.
pub fn copy_owned<D, S>(dst: &mut D, mut src: S, tag: &str) -> Result<()>
where
    D: Tagged,
    S: Tagged,
{
    let src = same_shape_mut::<D, S>(&mut src).inspect_err(log_rejected)?;
    let copied = swap_fields(dst, src, tag);
    debug!(shape = D::SHAPE.type_identifier, tag, copied, "moved tagged fields");
    Ok(())
}

/// Materialise the `tag` view of `src`: a default record with only the
/// selected fields filled in.
pub fn view<T>(src: &T, tag: &str) -> T
where
    T: Tagged + Default,
{
    let mut out = T::default();
    let copied = assign_fields(&mut out, src, tag);
    debug!(shape = T::SHAPE.type_identifier, tag, copied, "materialised view");
    out
}

pub(crate) fn shape_mismatch<D, S>() -> Error
where
    D: Tagged,
    S: Tagged,
{
    Error::ShapeMismatch {
        dst_type: D::SHAPE.type_identifier,
        src_type: S::SHAPE.type_identifier,
    }
}

fn same_shape_ref<D, S>(src: &S) -> Result<&D>
where
    D: Tagged,
    S: Tagged,
{
    if D::SHAPE.id != S::SHAPE.id {
        return Err(shape_mismatch::<D, S>());
    }
    (src as &dyn Any)
        .downcast_ref::<D>()
        .ok_or_else(shape_mismatch::<D, S>)
}

fn same_shape_mut<D, S>(src: &mut S) -> Result<&mut D>
where
    D: Tagged,
    S: Tagged,
{
    if D::SHAPE.id != S::SHAPE.id {
        return Err(shape_mismatch::<D, S>());
    }
    (src as &mut dyn Any)
        .downcast_mut::<D>()
        .ok_or_else(shape_mismatch::<D, S>)
}

pub(crate) fn log_rejected(err: &Error) {
    debug!(code = err.code(), "tagged copy rejected: {err}");
}

/// Clone-assign every field selected by `tag`. Returns how many were copied.
pub(crate) fn assign_fields<T: Tagged>(dst: &mut T, src: &T, tag: &str) -> usize {
    debug_assert_table_covers_shape::<T>();
    let mut copied = 0;
    for field in T::FIELDS {
        if field.selected_by(tag) {
            trace!(field = field.name, "assign");
            (field.assign)(dst, src);
            copied += 1;
        }
    }
    copied
}

pub(crate) fn swap_fields<T: Tagged>(dst: &mut T, src: &mut T, tag: &str) -> usize {
    debug_assert_table_covers_shape::<T>();
    let mut copied = 0;
    for field in T::FIELDS {
        if field.selected_by(tag) {
            trace!(field = field.name, "move");
            (field.swap)(dst, src);
            copied += 1;
        }
    }
    copied
}
