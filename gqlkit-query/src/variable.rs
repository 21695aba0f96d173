//! Operation-level variable declarations.

use std::fmt;

/// Type tag of a declared variable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum VariableType {
    /// `String`
    #[default]
    String,
    /// `Int`
    Int,
    /// `Float`
    Float,
    /// `Boolean`
    Boolean,
    /// `ID`
    Id,
    /// Any named input type. A blank name renders as `Object`.
    Object(String),
}

impl VariableType {
    /// Name of the type as it appears in the document.
    pub fn as_str(&self) -> &str {
        match self {
            VariableType::String => "String",
            VariableType::Int => "Int",
            VariableType::Float => "Float",
            VariableType::Boolean => "Boolean",
            VariableType::Id => "ID",
            VariableType::Object(name) if name.trim().is_empty() => "Object",
            VariableType::Object(name) => name.as_str(),
        }
    }
}

impl fmt::Display for VariableType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single `$name:Type` declaration attached to a query node.
///
/// Setters return the same builder so calls can be chained; the last type
/// setter wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableBuilder {
    name: String,
    default_value: String,
    ty: VariableType,
    required: bool,
}

impl VariableBuilder {
    pub(crate) fn new(name: impl Into<String>, default_value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default_value: default_value.into(),
            ty: VariableType::default(),
            required: false,
        }
    }

    /// Declare as `String`.
    pub fn string(&mut self) -> &mut Self {
        self.of_type(VariableType::String)
    }

    /// Declare as `Int`.
    pub fn int(&mut self) -> &mut Self {
        self.of_type(VariableType::Int)
    }

    /// Declare as `Float`.
    pub fn float(&mut self) -> &mut Self {
        self.of_type(VariableType::Float)
    }

    /// Declare as `Boolean`.
    pub fn boolean(&mut self) -> &mut Self {
        self.of_type(VariableType::Boolean)
    }

    /// Declare as `ID`.
    pub fn id(&mut self) -> &mut Self {
        self.of_type(VariableType::Id)
    }

    /// Declare as an arbitrary named type, e.g. `[ID!]` or `UserFilter`.
    pub fn object(&mut self, of_type: impl Into<String>) -> &mut Self {
        self.of_type(VariableType::Object(of_type.into()))
    }

    /// Set the type tag.
    pub fn of_type(&mut self, ty: VariableType) -> &mut Self {
        self.ty = ty;
        self
    }

    /// Mark the variable as non-null (`!`).
    pub fn required(&mut self) -> &mut Self {
        self.required = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn variable_type(&self) -> &VariableType {
        &self.ty
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn default_value(&self) -> &str {
        &self.default_value
    }

    /// Render as `$name:Type[!][ = default]`.
    pub fn build(&self) -> String {
        let mut out = format!("${}:{}", self.name, self.ty);
        if self.required {
            out.push('!');
        }
        if !self.default_value.trim().is_empty() {
            out.push_str(" = ");
            out.push_str(&self.default_value);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_optional_string() {
        let var = VariableBuilder::new("Cursor", "");
        assert_eq!(var.build(), "$Cursor:String");
        assert!(!var.is_required());
    }

    #[test]
    fn test_scalar_tags() {
        assert_eq!(VariableBuilder::new("A", "").int().build(), "$A:Int");
        assert_eq!(VariableBuilder::new("A", "").float().build(), "$A:Float");
        assert_eq!(VariableBuilder::new("A", "").boolean().build(), "$A:Boolean");
        assert_eq!(VariableBuilder::new("A", "").id().build(), "$A:ID");
        assert_eq!(VariableBuilder::new("A", "").int().string().build(), "$A:String");
    }

    #[test]
    fn test_named_type() {
        let mut var = VariableBuilder::new("filter", "");
        var.object("UserFilter").required();
        assert_eq!(var.build(), "$filter:UserFilter!");
    }

    #[test]
    fn test_blank_named_type_falls_back_to_object() {
        assert_eq!(VariableBuilder::new("o", "").object("").build(), "$o:Object");
        assert_eq!(VariableBuilder::new("o", "").object("  ").build(), "$o:Object");
    }

    #[test]
    fn test_required_with_default() {
        let mut var = VariableBuilder::new("X", "5");
        var.int().required();
        assert_eq!(var.build(), "$X:Int! = 5");
    }

    #[test]
    fn test_blank_default_is_omitted() {
        let mut var = VariableBuilder::new("X", "   ");
        var.int();
        assert_eq!(var.build(), "$X:Int");
    }

    #[test]
    fn test_required_is_idempotent() {
        let mut var = VariableBuilder::new("X", "");
        var.required().required();
        assert_eq!(var.build(), "$X:String!");
    }
}
