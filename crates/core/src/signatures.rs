//! Signatures of code elements on the remote node
//!
//! A signature pins down exactly which method or field of which class a
//! request refers to. The remote node hashes and signs the marshalled
//! request, so the field order declared here is frozen: it is part of the
//! wire contract.
//!
//! Inheritance in the upstream model (`MethodSignature extends
//! CodeSignature`) is expressed as composition: a method signature owns
//! its [`CodeSignature`] and the wire layer writes the base fields first.

use serde::{Deserialize, Serialize};

/// Signature of a callable code element: its defining class and the
/// ordered types of its formal parameters.
///
/// This is the shared base of the signature family. A constructor is
/// described by a bare `CodeSignature`; a method adds its name on top
/// (see [`MethodSignature`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeSignature {
    /// Fully-qualified name of the class defining the code element
    defining_class: String,
    /// Fully-qualified type names of the formal parameters, in
    /// declaration order
    formals: Vec<String>,
}

impl CodeSignature {
    /// Create a code signature for a class and its formal parameter types.
    pub fn new(
        defining_class: impl Into<String>,
        formals: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            defining_class: defining_class.into(),
            formals: formals.into_iter().map(Into::into).collect(),
        }
    }

    /// The fully-qualified name of the defining class.
    pub fn defining_class(&self) -> &str {
        &self.defining_class
    }

    /// The formal parameter type names, in declaration order.
    pub fn formals(&self) -> &[String] {
        &self.formals
    }
}

/// Signature of a method: the shared code signature plus the method name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodSignature {
    /// The base code signature (defining class and formals), written
    /// before the method's own fields
    code: CodeSignature,
    /// Name of the method
    method_name: String,
}

impl MethodSignature {
    /// Create a method signature.
    pub fn new(
        method_name: impl Into<String>,
        defining_class: impl Into<String>,
        formals: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            code: CodeSignature::new(defining_class, formals),
            method_name: method_name.into(),
        }
    }

    /// The base code signature.
    pub fn code(&self) -> &CodeSignature {
        &self.code
    }

    /// The name of the method.
    pub fn method_name(&self) -> &str {
        &self.method_name
    }
}

/// Signature of a field: its name, its type and its defining class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSignature {
    /// Name of the field
    name: String,
    /// Fully-qualified type name of the field
    field_type: String,
    /// Fully-qualified name of the class defining the field
    defining_class: String,
}

impl FieldSignature {
    /// Create a field signature.
    pub fn new(
        name: impl Into<String>,
        field_type: impl Into<String>,
        defining_class: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            field_type: field_type.into(),
            defining_class: defining_class.into(),
        }
    }

    /// The name of the field.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The fully-qualified type name of the field.
    pub fn field_type(&self) -> &str {
        &self.field_type
    }

    /// The fully-qualified name of the defining class.
    pub fn defining_class(&self) -> &str {
        &self.defining_class
    }
}
