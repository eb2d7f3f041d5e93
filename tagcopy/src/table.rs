//! Per-shape field tables.

use core::fmt;

use facet_core::{Facet, Type, UserType};

use crate::capability::CapabilitySet;

/// One field of a tagged record: its name, its capability declaration and
/// accessors that move the field's value between two instances.
pub struct FieldEntry<T> {
    /// Rust field name (`"0"`, `"1"`, ... for tuple structs).
    pub name: &'static str,
    /// Byte offset of the field, as given by `offset_of!`.
    pub offset: usize,
    /// Raw capability declaration, `""` when the field has none.
    pub tags: &'static str,
    /// Overwrite the field in `dst` with a clone of the field in `src`.
    pub assign: fn(&mut T, &T),
    /// Exchange the field between `dst` and `src` without cloning.
    pub swap: fn(&mut T, &mut T),
}

impl<T> FieldEntry<T> {
    pub fn capabilities(&self) -> CapabilitySet<'static> {
        CapabilitySet::parse(self.tags)
    }

    #[inline]
    pub fn selected_by(&self, tag: &str) -> bool {
        self.capabilities().contains(tag)
    }
}

impl<T> fmt::Debug for FieldEntry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldEntry")
            .field("name", &self.name)
            .field("offset", &self.offset)
            .field("tags", &self.capabilities().raw())
            .finish()
    }
}

impl<T> Clone for FieldEntry<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for FieldEntry<T> {}

/// A record whose fields carry capability declarations.
///
/// Usually derived:
///
/// ```
/// use facet::Facet;
/// use tagcopy::Tagged;
///
/// #[derive(Facet, Tagged, Clone, Default)]
/// struct Account {
///     #[tagcopy("user,admin")]
///     username: String,
///     #[tagcopy("admin")]
///     password_hash: String,
/// }
/// ```
///
/// `FIELDS` must list every field of the struct exactly once, in declaration
/// order. [`copy`](crate::copy) trusts the table: debug builds only assert
/// that it has as many entries as the struct has fields.
/// [`CopyPlan::compile`](crate::CopyPlan::compile) checks every entry's
/// offset against the reflected shape.
pub trait Tagged: Facet<'static> + Sized + 'static {
    const FIELDS: &'static [FieldEntry<Self>];
}

/// Number of fields facet reflects for `T`, `None` when `T` is not a struct.
pub(crate) fn reflected_field_count<T: Tagged>() -> Option<usize> {
    match &T::SHAPE.ty {
        Type::User(UserType::Struct(st)) => Some(st.fields.len()),
        _ => None,
    }
}

#[inline]
pub(crate) fn debug_assert_table_covers_shape<T: Tagged>() {
    debug_assert!(
        reflected_field_count::<T>().is_none_or(|count| count == T::FIELDS.len()),
        "{} has {} tagged entries but {:?} fields",
        T::SHAPE.type_identifier,
        T::FIELDS.len(),
        reflected_field_count::<T>(),
    );
}
