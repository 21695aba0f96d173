//! Variables and arguments attached to a query node.

use indexmap::IndexMap;

use crate::variable::VariableBuilder;

/// Collects the variable declarations and `name:value` arguments of one
/// query node.
///
/// Variables keep declaration order. Arguments are keyed by name: setting
/// a name again replaces the value but keeps the position of the first
/// insertion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentsBuilder {
    variables: Vec<VariableBuilder>,
    params: IndexMap<String, String>,
}

impl ArgumentsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a variable with no default value.
    pub fn var(&mut self, name: impl Into<String>) -> &mut VariableBuilder {
        self.var_with_default(name, "")
    }

    /// Declare a variable with a default literal, rendered verbatim.
    pub fn var_with_default(
        &mut self,
        name: impl Into<String>,
        default_value: impl Into<String>,
    ) -> &mut VariableBuilder {
        self.variables
            .push(VariableBuilder::new(name, default_value));
        let last = self.variables.len() - 1;
        &mut self.variables[last]
    }

    /// Set an argument. The value is a raw literal and is not escaped, so
    /// `"$id"`, `"10"`, `"[OPEN, CLOSED]"` and `"\"text\""` all work.
    pub fn param(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.params.insert(name.into(), value.into());
        self
    }

    /// Value currently bound to an argument name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    pub fn variables(&self) -> &[VariableBuilder] {
        &self.variables
    }

    /// Arguments in iteration order.
    pub fn params(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// True when no variable is declared and no argument is set.
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty() && self.params.is_empty()
    }

    /// Render variables then arguments as one comma-separated list, without
    /// the surrounding parentheses.
    pub fn build(&self) -> String {
        let variables = self.variables.iter().map(VariableBuilder::build);
        let params = self
            .params
            .iter()
            .map(|(name, value)| format!("{}:{}", name, value));

        variables.chain(params).collect::<Vec<_>>().join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let args = ArgumentsBuilder::new();
        assert!(args.is_empty());
        assert_eq!(args.build(), "");
    }

    #[test]
    fn test_variables_precede_arguments() {
        let mut args = ArgumentsBuilder::new();
        args.param("limit", "10");
        args.var("A");
        args.var("B").int().required();

        assert!(!args.is_empty());
        assert_eq!(args.build(), "$A:String, $B:Int!, limit:10");
    }

    #[test]
    fn test_overwrite_keeps_first_position() {
        let mut args = ArgumentsBuilder::new();
        args.param("first", "10").param("after", "$Cursor").param("first", "20");

        assert_eq!(args.build(), "first:20, after:$Cursor");
        assert_eq!(args.params().count(), 2);
        assert_eq!(args.get("first"), Some("20"));
    }

    #[test]
    fn test_only_variables_makes_it_non_empty() {
        let mut args = ArgumentsBuilder::new();
        args.var("X");
        assert!(!args.is_empty());
        assert_eq!(args.variables().len(), 1);
    }

    #[test]
    fn test_raw_values_are_not_escaped() {
        let mut args = ArgumentsBuilder::new();
        args.param("orderBy", "{ direction: DESC, field: CREATED_AT }");
        args.param("name", "\"octocat\"");
        assert_eq!(
            args.build(),
            "orderBy:{ direction: DESC, field: CREATED_AT }, name:\"octocat\""
        );
    }
}
