//! Program entity definitions.
//!
//! These are built from the syntax tree before checking starts and are never
//! mutated while an [`Env`](crate::env::Env) aliases them. The environment
//! only finds them by name; it never looks past the operations defined here.

use std::collections::HashMap;
use std::rc::Rc;

use lunet_types::{Ty, TyParam};
use smol_str::SmolStr;

/// A class definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDef {
    pub name: SmolStr,
    /// Direct superclass. `None` only for the root class.
    pub superclass: Option<Rc<ClassDef>>,
    pub ty_params: Vec<TyParam>,
    /// Instance variables declared directly on this class.
    pub ivars: HashMap<SmolStr, IvarDef>,
    /// Methods defined directly on this class.
    pub methods: HashMap<SmolStr, Rc<MethodDef>>,
}

impl ClassDef {
    pub fn new(name: impl Into<SmolStr>, superclass: Option<Rc<ClassDef>>) -> Self {
        Self {
            name: name.into(),
            superclass,
            ty_params: Vec::new(),
            ivars: HashMap::new(),
            methods: HashMap::new(),
        }
    }

    /// Look up a method, walking the superclass chain.
    ///
    /// Method-resolution order is this entity's concern; the environment
    /// delegates here once it has found the receiver's class.
    pub fn find_method(&self, name: &str) -> Option<Rc<MethodDef>> {
        if let Some(found) = self.methods.get(name) {
            return Some(Rc::clone(found));
        }
        self.superclass
            .as_ref()
            .and_then(|superclass| superclass.find_method(name))
    }

    /// Look up an instance variable declared on this class.
    pub fn find_ivar(&self, name: &str) -> Option<&IvarDef> {
        self.ivars.get(name)
    }

    /// The class-table key of this class's metaclass.
    pub fn meta_name(&self) -> SmolStr {
        Ty::meta(self.name.clone()).name()
    }
}

/// A method signature.
///
/// Resolution stops at the signature; arity and argument checking stay with
/// the type-checker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDef {
    pub name: SmolStr,
    pub params: Vec<MethodParam>,
    pub ret_ty: Ty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodParam {
    pub name: SmolStr,
    pub ty: Ty,
}

/// An instance variable declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IvarDef {
    pub name: SmolStr,
    pub ty: Ty,
}

/// A local variable binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarDef {
    pub name: SmolStr,
    pub ty: Ty,
    /// `true` for bindings that may not be reassigned.
    pub readonly: bool,
}

impl VarDef {
    pub fn new(name: impl Into<SmolStr>, ty: Ty, readonly: bool) -> Self {
        Self {
            name: name.into(),
            ty,
            readonly,
        }
    }
}

/// A named constant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstDef {
    pub name: SmolStr,
    pub ty: Ty,
}

impl ConstDef {
    pub fn new(name: impl Into<SmolStr>, ty: Ty) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}
