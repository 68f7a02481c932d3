//! GraphQL document tree and rendering.
//!
//! A [`Field`] is a named GraphQL field with ordered arguments and an ordered
//! selection set. A [`Document`] wraps a root field as either a query or a
//! mutation, and an [`Operation`] pairs a document with the JSON variables
//! that travel alongside it.
//!
//! Documents render through [`fmt::Display`] to compact GraphQL text:
//!
//! ```rust
//! use travelbase_api::graphql::{Document, Field};
//!
//! let root = Field::new("rentalUnit")
//!     .argument("id", 7_u64)
//!     .fields(["id", "name"]);
//!
//! assert_eq!(
//!     Document::query(root).to_string(),
//!     "query { rentalUnit(id: 7) { id name } }"
//! );
//! ```

use std::fmt::{self, Write as _};

use chrono::NaiveDate;
use serde_json::json;

/// Format used for every date sent to the API.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A GraphQL argument value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    /// An integer literal.
    Int(u64),
    /// A string literal, escaped on rendering.
    String(String),
    /// A boolean literal.
    Bool(bool),
    /// A calendar date, rendered as a quoted `YYYY-MM-DD` string.
    Date(NaiveDate),
    /// A list literal.
    List(Vec<Value>),
    /// A reference to a declared variable, rendered as `$name`.
    Variable(String),
}

impl Value {
    /// Creates a variable reference.
    #[must_use]
    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable(name.into())
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Self::Int(u64::from(value))
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<NaiveDate> for Value {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl<T: Into<Self>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Bool(value) => write!(f, "{value}"),
            Self::String(value) => write_escaped(f, value),
            Self::Date(date) => write!(f, "\"{}\"", date.format(DATE_FORMAT)),
            Self::Variable(name) => write!(f, "${name}"),
            Self::List(values) => {
                f.write_char('[')?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{value}")?;
                }
                f.write_char(']')
            }
        }
    }
}

fn write_escaped(f: &mut fmt::Formatter<'_>, value: &str) -> fmt::Result {
    f.write_char('"')?;
    for c in value.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            c if c.is_control() => write!(f, "\\u{:04x}", u32::from(c))?,
            c => f.write_char(c)?,
        }
    }
    f.write_char('"')
}

/// One entry in a selection set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selection {
    /// A leaf field selected by name.
    Scalar(String),
    /// A nested field with its own arguments and selection set.
    Field(Field),
}

impl Selection {
    /// Returns the name of the selected field.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Scalar(name) => name,
            Self::Field(field) => field.name(),
        }
    }
}

/// A GraphQL field with arguments and a selection set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    name: String,
    arguments: Vec<(String, Value)>,
    selection: Vec<Selection>,
}

impl Field {
    /// Creates a field with no arguments and an empty selection set.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: Vec::new(),
            selection: Vec::new(),
        }
    }

    /// Adds an argument.
    #[must_use]
    pub fn argument(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.arguments.push((name.into(), value.into()));
        self
    }

    /// Adds an argument only when `value` is `Some`.
    ///
    /// Absent arguments are left out of the document entirely rather than
    /// being sent as `null`.
    #[must_use]
    pub fn optional_argument<V: Into<Value>>(self, name: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(value) => self.argument(name, value),
            None => self,
        }
    }

    /// Selects a single leaf field.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>) -> Self {
        self.selection.push(Selection::Scalar(name.into()));
        self
    }

    /// Selects several leaf fields, in order.
    #[must_use]
    pub fn fields<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selection
            .extend(names.into_iter().map(|name| Selection::Scalar(name.into())));
        self
    }

    /// Selects a nested field.
    #[must_use]
    pub fn nested(mut self, field: Self) -> Self {
        self.selection.push(Selection::Field(field));
        self
    }

    /// Returns the field name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the arguments in insertion order.
    #[must_use]
    pub fn arguments(&self) -> &[(String, Value)] {
        &self.arguments
    }

    /// Returns the value of the named argument, if present.
    #[must_use]
    pub fn get_argument(&self, name: &str) -> Option<&Value> {
        self.arguments
            .iter()
            .find(|(arg, _)| arg == name)
            .map(|(_, value)| value)
    }

    /// Returns the selection set in order.
    #[must_use]
    pub fn selection(&self) -> &[Selection] {
        &self.selection
    }

    /// Returns the names of every directly selected field, leaf or nested.
    #[must_use]
    pub fn selected_names(&self) -> Vec<&str> {
        self.selection.iter().map(Selection::name).collect()
    }

    /// Returns the nested field with the given name, if selected.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&Self> {
        self.selection.iter().find_map(|selection| match selection {
            Selection::Field(field) if field.name == name => Some(field),
            _ => None,
        })
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;

        if !self.arguments.is_empty() {
            f.write_char('(')?;
            for (i, (name, value)) in self.arguments.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{name}: {value}")?;
            }
            f.write_char(')')?;
        }

        if !self.selection.is_empty() {
            f.write_str(" {")?;
            for selection in &self.selection {
                match selection {
                    Selection::Scalar(name) => write!(f, " {name}")?,
                    Selection::Field(field) => write!(f, " {field}")?,
                }
            }
            f.write_str(" }")?;
        }

        Ok(())
    }
}

/// A declared operation variable, e.g. `$input: DeleteTripsInput!`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VariableDefinition {
    /// Variable name without the leading `$`.
    pub name: String,
    /// GraphQL input type name.
    pub type_name: String,
    /// Whether the type is non-null.
    pub required: bool,
}

impl VariableDefinition {
    /// Creates a new variable definition.
    #[must_use]
    pub fn new(name: impl Into<String>, type_name: impl Into<String>, required: bool) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            required,
        }
    }
}

impl fmt::Display for VariableDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}: {}", self.name, self.type_name)?;
        if self.required {
            f.write_char('!')?;
        }
        Ok(())
    }
}

/// A complete GraphQL document with a single root field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Document {
    /// A read-only query.
    Query {
        /// The root field.
        root: Field,
    },
    /// A mutation with declared variables.
    Mutation {
        /// The declared variables.
        variables: Vec<VariableDefinition>,
        /// The root field.
        root: Field,
    },
}

impl Document {
    /// Creates a query document.
    #[must_use]
    pub const fn query(root: Field) -> Self {
        Self::Query { root }
    }

    /// Creates a mutation document.
    #[must_use]
    pub const fn mutation(variables: Vec<VariableDefinition>, root: Field) -> Self {
        Self::Mutation { variables, root }
    }

    /// Returns the root field.
    #[must_use]
    pub const fn root(&self) -> &Field {
        match self {
            Self::Query { root } | Self::Mutation { root, .. } => root,
        }
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Query { root } => write!(f, "query {{ {root} }}"),
            Self::Mutation { variables, root } => {
                f.write_str("mutation")?;
                if !variables.is_empty() {
                    f.write_char('(')?;
                    for (i, variable) in variables.iter().enumerate() {
                        if i > 0 {
                            f.write_str(", ")?;
                        }
                        write!(f, "{variable}")?;
                    }
                    f.write_char(')')?;
                }
                write!(f, " {{ {root} }}")
            }
        }
    }
}

/// A document ready for execution, paired with its variables.
#[derive(Clone, Debug, PartialEq)]
pub struct Operation {
    name: &'static str,
    document: Document,
    variables: serde_json::Value,
}

impl Operation {
    /// Creates a query operation with no variables.
    #[must_use]
    pub fn query(name: &'static str, root: Field) -> Self {
        Self {
            name,
            document: Document::query(root),
            variables: json!({}),
        }
    }

    /// Creates a mutation operation.
    #[must_use]
    pub fn mutation(
        name: &'static str,
        definitions: Vec<VariableDefinition>,
        root: Field,
        variables: serde_json::Value,
    ) -> Self {
        Self {
            name,
            document: Document::mutation(definitions, root),
            variables,
        }
    }

    /// Returns the operation label used in logs and error context.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the document.
    #[must_use]
    pub const fn document(&self) -> &Document {
        &self.document
    }

    /// Returns the variables object.
    #[must_use]
    pub const fn variables(&self) -> &serde_json::Value {
        &self.variables
    }

    /// Returns the JSON request body: `{"query": ..., "variables": ...}`.
    #[must_use]
    pub fn body(&self) -> serde_json::Value {
        json!({
            "query": self.document.to_string(),
            "variables": self.variables,
        })
    }
}
