//! Error types for tagged copies and plan compilation.

use thiserror::Error;

/// Why a copy was rejected. A rejected copy never touches the destination.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// The destination cannot be mutated in place.
    #[error("destination {type_name} is not addressable; pass it by mutable reference")]
    DestinationNotAddressable { type_name: &'static str },

    /// Source and destination are different shapes.
    #[error("cannot copy {src_type} into {dst_type}: source and destination must be the same shape")]
    ShapeMismatch {
        dst_type: &'static str,
        src_type: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn code(&self) -> &'static str {
        match self {
            Error::DestinationNotAddressable { .. } => "destination_not_addressable",
            Error::ShapeMismatch { .. } => "shape_mismatch",
        }
    }
}

/// A field table that does not describe the reflected shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CompileError {
    #[error("{type_name} is not a struct")]
    RootNotStruct { type_name: &'static str },

    #[error("{type_name} declares {declared} tagged fields but has {reflected}")]
    FieldCountMismatch {
        type_name: &'static str,
        declared: usize,
        reflected: usize,
    },

    #[error("field {field_index} ({name}) is declared at offset {declared} but reflected at {reflected}")]
    FieldOffsetMismatch {
        field_index: usize,
        name: &'static str,
        declared: usize,
        reflected: usize,
    },
}

impl CompileError {
    pub fn code(&self) -> &'static str {
        match self {
            CompileError::RootNotStruct { .. } => "root_not_struct",
            CompileError::FieldCountMismatch { .. } => "field_count_mismatch",
            CompileError::FieldOffsetMismatch { .. } => "field_offset_mismatch",
        }
    }
}
