//! Capability declarations attached to record fields.
//!
//! A declaration is the raw string given to `#[tagcopy("...")]`. It is split
//! on [`TAG_DELIMITER`] into labels; order and duplicates do not matter.
//! Labels are compared byte-for-byte, so `"user, admin"` declares `"user"`
//! and `" admin"`.

/// Separator between labels in a field declaration.
pub const TAG_DELIMITER: char = ',';

/// The set of labels a field declares membership in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapabilitySet<'a> {
    raw: &'a str,
}

impl<'a> CapabilitySet<'a> {
    /// Wrap a raw declaration.
    ///
    /// An empty declaration yields a single empty label, which only matches
    /// the empty tag.
    pub const fn parse(raw: &'a str) -> Self {
        Self { raw }
    }

    /// The declaration as written on the field.
    pub fn raw(&self) -> &'a str {
        self.raw
    }

    #[inline]
    pub fn contains(&self, tag: &str) -> bool {
        self.raw.split(TAG_DELIMITER).any(|label| label == tag)
    }

    /// Labels in declaration order, duplicates included.
    pub fn iter(&self) -> impl Iterator<Item = &'a str> + 'a {
        self.raw.split(TAG_DELIMITER)
    }
}
