//! The symbol-resolution environment.

use std::rc::Rc;

use im::HashMap;
use lunet_types::{Ty, TyParam};
use smol_str::SmolStr;

use crate::def::{ClassDef, ConstDef, IvarDef, MethodDef, VarDef};
use crate::error::EnvError;

/// An immutable snapshot of every symbol table visible at one point of
/// analysis or evaluation: classes, type parameters, local variables,
/// constants, and the current enclosing class (`self`).
///
/// `Env` has no parent pointer and never chains lookups. Lexical nesting
/// exists only in which snapshot a caller happens to hold: entering a scope
/// means deriving a child with one of the `extend_*` operations and threading
/// it through the subtree, and leaving the scope means dropping the child and
/// continuing with the snapshot the caller already had. Keep it that way —
/// scope discipline belongs to the tree walker, not to this type.
///
/// Extension is pure. The receiver is never mutated, and the persistent
/// tables make a derived snapshot share structure with its source, so deep
/// nesting stays cheap.
#[derive(Debug, Clone, Default)]
pub struct Env {
    classes: HashMap<SmolStr, Rc<ClassDef>>,
    ty_params: HashMap<SmolStr, TyParam>,
    local_vars: HashMap<SmolStr, Rc<VarDef>>,
    constants: HashMap<SmolStr, Rc<ConstDef>>,
    current_self: Option<Rc<ClassDef>>,
}

impl Env {
    /// Create the program-root environment: the global class table populated,
    /// every other namespace empty and `self` unset.
    pub fn new(classes: impl IntoIterator<Item = (SmolStr, Rc<ClassDef>)>) -> Self {
        Self {
            classes: classes.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Derive an environment with `delta` merged key-wise into the class
    /// table. Existing keys are overridden, new keys added.
    pub fn extend_classes(
        &self,
        delta: impl IntoIterator<Item = (SmolStr, Rc<ClassDef>)>,
    ) -> Self {
        let mut derived = self.clone();
        derived.classes.extend(delta);
        derived
    }

    /// Derive an environment with `delta` merged into the type-parameter
    /// table.
    pub fn extend_ty_params(&self, delta: impl IntoIterator<Item = (SmolStr, TyParam)>) -> Self {
        let mut derived = self.clone();
        derived.ty_params.extend(delta);
        derived
    }

    /// Derive an environment with `delta` merged into the local-variable
    /// table.
    pub fn extend_local_vars(
        &self,
        delta: impl IntoIterator<Item = (SmolStr, Rc<VarDef>)>,
    ) -> Self {
        let mut derived = self.clone();
        derived.local_vars.extend(delta);
        derived
    }

    /// Derive an environment with `delta` merged into the constant table.
    pub fn extend_constants(
        &self,
        delta: impl IntoIterator<Item = (SmolStr, Rc<ConstDef>)>,
    ) -> Self {
        let mut derived = self.clone();
        derived.constants.extend(delta);
        derived
    }

    /// Derive an environment whose enclosing class is `class`. The slot is
    /// replaced outright, not merged.
    pub fn with_current_self(&self, class: Rc<ClassDef>) -> Self {
        let mut derived = self.clone();
        derived.current_self = Some(class);
        derived
    }

    /// Derive an environment with no enclosing class, e.g. for re-entering
    /// toplevel context.
    pub fn without_current_self(&self) -> Self {
        let mut derived = self.clone();
        derived.current_self = None;
        derived
    }

    /// The enclosing class, if any.
    pub fn current_self(&self) -> Option<&Rc<ClassDef>> {
        self.current_self.as_ref()
    }

    /// Whether `name` is bound as a local variable in this snapshot.
    pub fn has_local(&self, name: &str) -> bool {
        self.local_vars.contains_key(name)
    }

    pub fn resolve_class(&self, name: &str) -> Result<Rc<ClassDef>, EnvError> {
        self.classes
            .get(name)
            .cloned()
            .ok_or_else(|| EnvError::NotFoundClass(name.into()))
    }

    pub fn resolve_const(&self, name: &str) -> Result<Rc<ConstDef>, EnvError> {
        self.constants
            .get(name)
            .cloned()
            .ok_or_else(|| EnvError::NotFoundConst(name.into()))
    }

    /// Resolve a type parameter bound by an enclosing generic definition.
    /// An unbound name is an unknown type, the same as a missing class.
    pub fn resolve_ty_param(&self, name: &str) -> Result<TyParam, EnvError> {
        self.ty_params
            .get(name)
            .cloned()
            .ok_or_else(|| EnvError::UnknownType(name.into()))
    }

    pub fn resolve_local(&self, name: &str) -> Result<Rc<VarDef>, EnvError> {
        self.local_vars
            .get(name)
            .cloned()
            .ok_or_else(|| EnvError::UndefinedVariable(name.into()))
    }

    /// Resolve an instance variable against the enclosing class.
    ///
    /// Fails with [`EnvError::OutOfContext`] outside of a class, and with
    /// [`EnvError::UnknownMember`] when the enclosing class does not declare
    /// the variable.
    pub fn resolve_ivar(&self, name: &str) -> Result<IvarDef, EnvError> {
        let class = self
            .current_self
            .as_ref()
            .ok_or_else(|| EnvError::OutOfContext(name.into()))?;
        class
            .find_ivar(name)
            .cloned()
            .ok_or_else(|| EnvError::UnknownMember {
                class: class.name.clone(),
                ivar: name.into(),
            })
    }

    /// Resolve a method on a receiver type.
    ///
    /// The receiver tag must name a class or a metaclass; anything else is an
    /// invariant violation in the caller. Method-resolution order is the
    /// class entity's concern ([`ClassDef::find_method`]); this only finds
    /// the class.
    pub fn resolve_method(&self, receiver_ty: &Ty, name: &str) -> Result<Rc<MethodDef>, EnvError> {
        let key = match receiver_ty {
            Ty::Raw { .. } | Ty::Meta { .. } => receiver_ty.name(),
            Ty::Param { .. } => {
                return Err(EnvError::InvariantViolation(format!(
                    "receiver type has no class: {receiver_ty:?}"
                )))
            }
        };
        let class = self
            .classes
            .get(key.as_str())
            .ok_or_else(|| EnvError::NotFoundClass(key.clone()))?;
        class
            .find_method(name)
            .ok_or_else(|| EnvError::UnknownMethod {
                class: class.name.clone(),
                method: name.into(),
            })
    }

    /// Check that a concrete named type is registered.
    ///
    /// `Void` is always accepted; it has no class entry.
    pub fn assert_ty_registered(&self, ty: &Ty) -> Result<(), EnvError> {
        let name = match ty {
            Ty::Raw { name } => name,
            Ty::Meta { .. } | Ty::Param { .. } => {
                return Err(EnvError::InvariantViolation(format!(
                    "not a concrete named type: {ty:?}"
                )))
            }
        };
        if name == "Void" || self.classes.contains_key(name.as_str()) {
            Ok(())
        } else {
            Err(EnvError::UnknownType(name.clone()))
        }
    }
}
