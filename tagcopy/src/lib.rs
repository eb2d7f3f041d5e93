//! # tagcopy
//!
//! Copy the fields of a record that carry a capability tag.
//!
//! Each field declares which access classes may see it. Copying an internal
//! record into an external one with a tag fills in exactly the fields that
//! declare that tag and leaves the rest alone:
//!
//! ```
//! use facet::Facet;
//! use tagcopy::Tagged;
//!
//! #[derive(Debug, Default, Clone, PartialEq, Facet, Tagged)]
//! struct Node {
//!     #[tagcopy("user,admin")]
//!     username: String,
//!     #[tagcopy("admin")]
//!     secret: String,
//! }
//!
//! let internal = Node {
//!     username: "ada".into(),
//!     secret: "hunter2".into(),
//! };
//! let mut external = Node::default();
//! tagcopy::copy(&mut external, &internal, "user")?;
//! assert_eq!(external.username, "ada");
//! assert_eq!(external.secret, "");
//! # Ok::<(), tagcopy::Error>(())
//! ```
//!
//! Fields are carried over whole: a nested record or a list of records is
//! cloned as one value, not filtered by its own tags.

// Lets the derive's `::tagcopy::` paths resolve inside this crate's tests.
extern crate self as tagcopy;

pub mod capability;
mod copier;
mod dynamic;
mod errors;
mod plan;
mod table;

pub use capability::CapabilitySet;
pub use copier::{copy, copy_owned, view};
pub use dynamic::{Destination, DynRecord, copy_dyn};
pub use errors::{CompileError, Error, Result};
pub use plan::{CopyInstr, CopyPlan, CopyProgram};
pub use table::{FieldEntry, Tagged};

pub use tagcopy_derive::Tagged;

#[doc(hidden)]
pub mod __private {
    pub use facet_core::Facet;
}
