//! Field selections.

use crate::format::Formatting;

/// A selected field, optionally carrying its own nested selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldBuilder {
    name: String,
    child: SelectBuilder,
}

impl FieldBuilder {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            child: SelectBuilder::default(),
        }
    }

    /// Populate the nested selection. May be called more than once; fields
    /// accumulate.
    pub fn select<F>(&mut self, inner: F) -> &mut Self
    where
        F: FnOnce(&mut SelectBuilder),
    {
        inner(&mut self.child);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn selection(&self) -> &SelectBuilder {
        &self.child
    }

    /// Nested selection, for building deep trees without closures.
    pub fn selection_mut(&mut self) -> &mut SelectBuilder {
        &mut self.child
    }
}

/// Ordered list of fields selected on a node or a field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectBuilder {
    fields: Vec<FieldBuilder>,
}

impl SelectBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field and return it for further nesting.
    pub fn field(&mut self, name: impl Into<String>) -> &mut FieldBuilder {
        self.fields.push(FieldBuilder::new(name));
        let last = self.fields.len() - 1;
        &mut self.fields[last]
    }

    /// Append several leaf fields at once.
    pub fn fields<I, S>(&mut self, names: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields.extend(names.into_iter().map(FieldBuilder::new));
        self
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldBuilder> {
        self.fields.iter()
    }

    /// Render every field at `nesting`, joined by the formatting separator.
    pub fn build(&self, nesting: usize, formatting: Formatting) -> String {
        let mut out = String::new();
        self.write_to(&mut out, nesting, formatting);
        out
    }

    /// Append the rendered fields to `out`. Nested selections are walked
    /// with an explicit stack, so depth is bounded only by memory.
    pub(crate) fn write_to(&self, out: &mut String, nesting: usize, formatting: Formatting) {
        let new_line = formatting.separator();
        let mut stack = Vec::new();
        push_fields(&mut stack, self, nesting);

        while let Some(frame) = stack.pop() {
            match frame {
                Frame::Open(field, nesting) => {
                    out.push_str(&formatting.indent(nesting));
                    out.push_str(&field.name);
                    if !field.child.is_empty() {
                        out.push_str(" {");
                        out.push_str(new_line);
                        stack.push(Frame::Close(nesting));
                        push_fields(&mut stack, &field.child, nesting + 1);
                    }
                }
                Frame::Separator => out.push_str(new_line),
                Frame::Close(nesting) => {
                    out.push_str(new_line);
                    out.push_str(&formatting.indent(nesting));
                    out.push('}');
                }
            }
        }
    }
}

impl Drop for SelectBuilder {
    // Unlinks nested selections one level at a time instead of recursing.
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.fields);
        while let Some(mut field) = pending.pop() {
            pending.append(&mut field.child.fields);
        }
    }
}

enum Frame<'a> {
    Open(&'a FieldBuilder, usize),
    Separator,
    Close(usize),
}

// Pushed in reverse so fields pop in insertion order.
fn push_fields<'a>(stack: &mut Vec<Frame<'a>>, select: &'a SelectBuilder, nesting: usize) {
    for (i, field) in select.fields.iter().enumerate().rev() {
        stack.push(Frame::Open(field, nesting));
        if i > 0 {
            stack.push(Frame::Separator);
        }
    }
}

impl<'a> IntoIterator for &'a SelectBuilder {
    type Item = &'a FieldBuilder;
    type IntoIter = std::slice::Iter<'a, FieldBuilder>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}
