//! Tool specifications.
//!
//! A [`ToolSpec`] declares a tool's name, description, and parameter
//! schema. The schema is an ordered list of [`ParameterSpec`] entries;
//! the registry validates incoming arguments against it before the
//! tool's handler ever runs.

use serde::{Deserialize, Serialize};

/// JSON type expected for a tool parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterType {
    String,
    Number,
    Boolean,
}

impl ParameterType {
    /// Returns the JSON Schema type name.
    pub fn as_schema_type(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
        }
    }

    /// Returns true if the value matches this type.
    pub fn matches(&self, value: &serde_json::Value) -> bool {
        match self {
            Self::String => value.is_string(),
            Self::Number => value.is_number(),
            Self::Boolean => value.is_boolean(),
        }
    }
}

/// One declared parameter of a tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterSpec {
    /// Parameter name
    name: String,

    /// Expected JSON type
    param_type: ParameterType,

    /// Whether the argument must be present
    required: bool,

    /// Value substituted when an optional argument is absent
    default: Option<serde_json::Value>,
}

impl ParameterSpec {
    /// Declares a required parameter.
    pub fn required(name: impl Into<String>, param_type: ParameterType) -> Self {
        Self {
            name: name.into(),
            param_type,
            required: true,
            default: None,
        }
    }

    /// Declares an optional parameter with no default.
    pub fn optional(name: impl Into<String>, param_type: ParameterType) -> Self {
        Self {
            name: name.into(),
            param_type,
            required: false,
            default: None,
        }
    }

    /// Sets the default substituted when the argument is absent.
    pub fn with_default(mut self, default: serde_json::Value) -> Self {
        self.default = Some(default);
        self
    }

    /// Returns the parameter name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the expected type.
    pub fn param_type(&self) -> ParameterType {
        self.param_type
    }

    /// Returns true if the argument must be present.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Returns the default value, if one is declared.
    pub fn default(&self) -> Option<&serde_json::Value> {
        self.default.as_ref()
    }
}

/// Argument validation failure, reported before a tool handler runs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArgumentError {
    #[error("missing required argument '{parameter}' for tool '{tool}'")]
    MissingRequired { tool: String, parameter: String },

    #[error("argument '{parameter}' for tool '{tool}' must be a {expected}")]
    InvalidType {
        tool: String,
        parameter: String,
        expected: &'static str,
    },
}

/// Declaration of a tool the reasoning engine may call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolSpec {
    /// Unique name used by the engine to reference the tool
    name: String,

    /// Human-readable description of when to use the tool
    description: String,

    /// Parameter schema, in declaration order
    parameters: Vec<ParameterSpec>,
}

impl ToolSpec {
    /// Creates a new tool specification.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        parameters: Vec<ParameterSpec>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters,
        }
    }

    /// Returns the tool name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the declared parameters.
    pub fn parameters(&self) -> &[ParameterSpec] {
        &self.parameters
    }

    /// Renders the parameter schema as a JSON Schema object.
    pub fn parameters_schema(&self) -> serde_json::Value {
        let mut properties = serde_json::Map::new();
        let mut required = Vec::new();

        for param in &self.parameters {
            properties.insert(
                param.name().to_string(),
                serde_json::json!({ "type": param.param_type().as_schema_type() }),
            );
            if param.is_required() {
                required.push(serde_json::Value::String(param.name().to_string()));
            }
        }

        serde_json::json!({
            "type": "object",
            "properties": properties,
            "required": required,
        })
    }

    /// Converts to OpenAI function-calling format.
    pub fn to_openai_format(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "function",
            "function": {
                "name": self.name,
                "description": self.description,
                "parameters": self.parameters_schema(),
            }
        })
    }

    /// Validates arguments against the schema.
    ///
    /// Returns the arguments with declared defaults filled in for absent
    /// optional parameters. A JSON `null` argument counts as absent.
    pub fn validate_arguments(
        &self,
        arguments: &serde_json::Map<String, serde_json::Value>,
    ) -> Result<serde_json::Map<String, serde_json::Value>, ArgumentError> {
        let mut validated = arguments.clone();

        for param in &self.parameters {
            let present = match validated.get(param.name()) {
                None | Some(serde_json::Value::Null) => false,
                Some(value) => {
                    if !param.param_type().matches(value) {
                        return Err(ArgumentError::InvalidType {
                            tool: self.name.clone(),
                            parameter: param.name().to_string(),
                            expected: param.param_type().as_schema_type(),
                        });
                    }
                    true
                }
            };

            if !present {
                if param.is_required() {
                    return Err(ArgumentError::MissingRequired {
                        tool: self.name.clone(),
                        parameter: param.name().to_string(),
                    });
                }
                if let Some(default) = param.default() {
                    validated.insert(param.name().to_string(), default.clone());
                }
            }
        }

        Ok(validated)
    }
}
