//! Structural parameter schema attached to tool definitions.
//!
//! Schemas are modelled as a closed set of shapes rather than free-form JSON.
//! They serialize to the JSON-Schema-style document MCP clients expect, but no
//! JSON Schema validation is performed.

use serde::{Serialize, Serializer};
use serde_json::{Map, Value, json};

/// Shape of a tool input or of one of its properties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSchema {
    /// An object with named properties and a list of required names.
    Object(ObjectSchema),
    /// An array, optionally constraining its item shape.
    Array(Option<Box<InputSchema>>),
    /// A string value.
    String,
    /// A numeric value.
    Number,
    /// A boolean value.
    Boolean,
    /// The null value.
    Null,
}

impl InputSchema {
    /// Creates an array schema whose items follow `items`.
    #[must_use]
    pub fn array_of(items: Self) -> Self {
        Self::Array(Some(Box::new(items)))
    }

    /// Returns the JSON Schema `type` keyword for this shape.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Object(_) => "object",
            Self::Array(_) => "array",
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Null => "null",
        }
    }

    /// Returns the object schema when this is an object shape.
    #[must_use]
    pub const fn as_object(&self) -> Option<&ObjectSchema> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Renders the schema as a JSON document.
    #[must_use]
    pub fn to_json(&self) -> Value {
        let mut document = Map::new();
        self.write_json(&mut document);
        Value::Object(document)
    }

    fn write_json(&self, document: &mut Map<String, Value>) {
        document.insert("type".to_owned(), json!(self.type_name()));
        match self {
            Self::Object(object) => {
                let properties = object
                    .properties()
                    .iter()
                    .map(|property| (property.name().to_owned(), property.to_json()))
                    .collect::<Map<_, _>>();
                document.insert("properties".to_owned(), Value::Object(properties));
                document.insert("required".to_owned(), json!(object.required_names()));
            }
            Self::Array(Some(items)) => {
                document.insert("items".to_owned(), items.to_json());
            }
            Self::Array(None) | Self::String | Self::Number | Self::Boolean | Self::Null => {}
        }
    }
}

impl Serialize for InputSchema {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

/// One named property of an object schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaProperty {
    name: String,
    schema: InputSchema,
    description: Option<String>,
}

impl SchemaProperty {
    /// Creates an undocumented property.
    #[must_use]
    pub fn new(name: impl Into<String>, schema: InputSchema) -> Self {
        Self {
            name: name.into(),
            schema,
            description: None,
        }
    }

    /// Attaches a description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns the property name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the property shape.
    #[must_use]
    pub const fn schema(&self) -> &InputSchema {
        &self.schema
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the description, falling back to the type name.
    #[must_use]
    pub fn summary(&self) -> &str {
        self.description().unwrap_or_else(|| self.schema.type_name())
    }

    fn to_json(&self) -> Value {
        let mut document = Map::new();
        self.schema.write_json(&mut document);
        if let Some(description) = &self.description {
            document.insert("description".to_owned(), json!(description));
        }
        Value::Object(document)
    }
}

/// Object shape: ordered properties plus the names that must be supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectSchema {
    properties: Vec<SchemaProperty>,
    required: Vec<String>,
}

impl ObjectSchema {
    /// Creates an object schema with no properties.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a property callers must supply.
    #[must_use]
    pub fn required(
        mut self,
        name: impl Into<String>,
        schema: InputSchema,
        description: impl Into<String>,
    ) -> Self {
        let property = SchemaProperty::new(name, schema).with_description(description);
        self.required.push(property.name().to_owned());
        self.properties.push(property);
        self
    }

    /// Appends a property callers may omit.
    #[must_use]
    pub fn optional(
        mut self,
        name: impl Into<String>,
        schema: InputSchema,
        description: impl Into<String>,
    ) -> Self {
        self.properties
            .push(SchemaProperty::new(name, schema).with_description(description));
        self
    }

    /// Returns the properties in declaration order.
    #[must_use]
    pub fn properties(&self) -> &[SchemaProperty] {
        &self.properties
    }

    /// Returns the required property names in declaration order.
    #[must_use]
    pub fn required_names(&self) -> &[String] {
        &self.required
    }

    /// Returns whether `name` is a required property.
    #[must_use]
    pub fn is_required(&self, name: &str) -> bool {
        self.required.iter().any(|required| required == name)
    }

    /// Returns the property called `name`.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&SchemaProperty> {
        self.properties
            .iter()
            .find(|property| property.name() == name)
    }
}

impl From<ObjectSchema> for InputSchema {
    fn from(object: ObjectSchema) -> Self {
        Self::Object(object)
    }
}
