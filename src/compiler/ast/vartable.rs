use log::debug;
use serde::Serialize;

/// Size, in bytes, of every local variable slot.
pub const WORD_SIZE: u32 = 8;

/// A local variable's slot in the stack frame.  The slot lives `offset`
/// bytes below the frame base pointer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct LocalVar {
    offset: u32,
}

impl LocalVar {
    pub fn new(offset: u32) -> LocalVar {
        LocalVar { offset }
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }
}

impl std::fmt::Display for LocalVar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "var[{}]", self.offset)
    }
}

#[derive(Debug, PartialEq, Serialize)]
pub struct VarDecl {
    pub name: String,
    pub var: LocalVar,
}

/// Maps every variable name in a program to its slot in the stack frame.
///
/// Slots are handed out in the order that names are first seen: the first
/// name gets offset 8, the next 16, and so on.  An empty table is the "no
/// variables" frame of size 0.
#[derive(Debug, Default, PartialEq, Serialize)]
pub struct VarTable {
    vars: Vec<VarDecl>,
}

impl VarTable {
    pub fn new() -> VarTable {
        VarTable { vars: vec![] }
    }

    pub fn find(&self, name: &str) -> Option<LocalVar> {
        self.vars.iter().find(|vd| vd.name == name).map(|vd| vd.var)
    }

    /// Returns the slot for `name`, allocating the next slot if this is the
    /// first time `name` has been seen.
    pub fn find_or_insert(&mut self, name: &str) -> LocalVar {
        match self.find(name) {
            Some(var) => var,
            None => {
                let var = LocalVar::new(self.stack_size() + WORD_SIZE);
                debug!("Allocate {} to {}", name, var);
                self.vars.push(VarDecl {
                    name: name.into(),
                    var,
                });
                var
            }
        }
    }

    /// The number of bytes below the frame base which are used by variables.
    pub fn stack_size(&self) -> u32 {
        self.vars.iter().map(|vd| vd.var.offset()).max().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<VarDecl> {
        self.vars.iter()
    }
}
