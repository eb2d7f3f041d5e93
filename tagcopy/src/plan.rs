//! Precompiled field selections.
//!
//! A [`CopyPlan`] resolves which fields a tag selects once, after checking
//! the record's field table against its reflected facet shape. Applying the
//! plan is then a straight walk over the selected accessors.

use core::fmt::Write as _;
use core::marker::PhantomData;

use facet_core::{ConstTypeId, Shape, Type, UserType};
use tracing::{debug, trace};

use crate::errors::CompileError;
use crate::table::Tagged;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyInstr {
    Assign { field: u32, name: &'static str },
}

/// The selection a plan executes, independent of the record type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyProgram {
    pub shape_id: ConstTypeId,
    pub tag: String,
    pub field_count: usize,
    pub instructions: Vec<CopyInstr>,
}

impl CopyProgram {
    pub fn to_sexp(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(&mut out, "(copy-program");
        let _ = writeln!(&mut out, "  (shape-id {:?})", self.shape_id);
        let _ = writeln!(&mut out, "  (tag {:?})", self.tag);
        let _ = writeln!(&mut out, "  (field-count {})", self.field_count);
        let _ = writeln!(&mut out, "  (instructions");
        for instr in &self.instructions {
            match *instr {
                CopyInstr::Assign { field, name } => {
                    let _ = writeln!(
                        &mut out,
                        "    (assign (field {}) (name {}))",
                        field, name
                    );
                }
            }
        }
        let _ = writeln!(&mut out, "  )");
        let _ = write!(&mut out, ")");
        out
    }
}

/// Field selection for one record type and one tag.
pub struct CopyPlan<T> {
    shape: &'static Shape,
    program: CopyProgram,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for CopyPlan<T> {
    fn clone(&self) -> Self {
        Self {
            shape: self.shape,
            program: self.program.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T> core::fmt::Debug for CopyPlan<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CopyPlan")
            .field("shape", &self.shape.type_identifier)
            .field("program", &self.program)
            .finish()
    }
}

impl<T> CopyPlan<T>
where
    T: Tagged,
{
    pub fn compile(tag: &str) -> Result<Self, CompileError> {
        let shape = T::SHAPE;
        let Type::User(UserType::Struct(st)) = &shape.ty else {
            return Err(CompileError::RootNotStruct {
                type_name: shape.type_identifier,
            });
        };
        if st.fields.len() != T::FIELDS.len() {
            return Err(CompileError::FieldCountMismatch {
                type_name: shape.type_identifier,
                declared: T::FIELDS.len(),
                reflected: st.fields.len(),
            });
        }

        let mut instructions = Vec::new();
        for (idx, (entry, field)) in T::FIELDS.iter().zip(st.fields.iter()).enumerate() {
            // facet may rename a field; its offset is what pins it.
            if entry.offset != field.offset {
                return Err(CompileError::FieldOffsetMismatch {
                    field_index: idx,
                    name: entry.name,
                    declared: entry.offset,
                    reflected: field.offset,
                });
            }
            if entry.selected_by(tag) {
                instructions.push(CopyInstr::Assign {
                    field: idx as u32,
                    name: entry.name,
                });
            }
        }

        debug!(
            shape = shape.type_identifier,
            tag,
            selected = instructions.len(),
            "compiled copy plan"
        );
        Ok(Self {
            shape,
            program: CopyProgram {
                shape_id: shape.id,
                tag: tag.to_owned(),
                field_count: T::FIELDS.len(),
                instructions,
            },
            _marker: PhantomData,
        })
    }

    pub fn program(&self) -> &CopyProgram {
        &self.program
    }

    pub fn tag(&self) -> &str {
        &self.program.tag
    }

    /// Names of the selected fields, in declaration order.
    pub fn selected(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.program.instructions.iter().map(|instr| match *instr {
            CopyInstr::Assign { name, .. } => name,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.program.instructions.is_empty()
    }

    /// Same effect as [`copy`](crate::copy) with this plan's tag.
    pub fn apply(&self, dst: &mut T, src: &T) {
        for instr in &self.program.instructions {
            match *instr {
                CopyInstr::Assign { field, name } => {
                    trace!(field = name, "assign");
                    (T::FIELDS[field as usize].assign)(dst, src);
                }
            }
        }
    }

    /// Same effect as [`copy_owned`](crate::copy_owned) with this plan's tag.
    pub fn apply_owned(&self, dst: &mut T, mut src: T) {
        for instr in &self.program.instructions {
            match *instr {
                CopyInstr::Assign { field, name } => {
                    trace!(field = name, "move");
                    (T::FIELDS[field as usize].swap)(dst, &mut src);
                }
            }
        }
    }

    pub fn view(&self, src: &T) -> T
    where
        T: Default,
    {
        let mut out = T::default();
        self.apply(&mut out, src);
        out
    }
}
