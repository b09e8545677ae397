//! Type tags for lunet.
//!
//! A [`Ty`] is the small value the front end attaches to expressions and
//! signatures. It only carries enough information to key into the class
//! table; the actual definition of a type is the `ClassDef` registered under
//! that key.

use std::fmt;

use smol_str::SmolStr;

/// A type tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Ty {
    /// A concrete named type, e.g. `Int`.
    Raw { name: SmolStr },
    /// The type of a class object, e.g. the type of the expression `Int`.
    ///
    /// Registered in the class table under the `Meta:` prefixed name.
    Meta { base: SmolStr },
    /// An uninstantiated type parameter appearing in a generic signature.
    ///
    /// Type parameters are not classes and have no class-table entry.
    Param { name: SmolStr },
}

impl Ty {
    pub fn raw(name: impl Into<SmolStr>) -> Self {
        Ty::Raw { name: name.into() }
    }

    pub fn meta(base: impl Into<SmolStr>) -> Self {
        Ty::Meta { base: base.into() }
    }

    pub fn param(name: impl Into<SmolStr>) -> Self {
        Ty::Param { name: name.into() }
    }

    /// The name under which this type is registered in the class table.
    ///
    /// For a type parameter this is just its name; type parameters are looked
    /// up in the type-parameter namespace, never in the class table.
    pub fn name(&self) -> SmolStr {
        match self {
            Ty::Raw { name } => name.clone(),
            Ty::Meta { base } => SmolStr::from(format!("Meta:{base}")),
            Ty::Param { name } => name.clone(),
        }
    }
}

impl fmt::Display for Ty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A type parameter bound by a generic class definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TyParam {
    pub name: SmolStr,
}

impl TyParam {
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self { name: name.into() }
    }
}
