//! Generic tool registry.
//!
//! Every tool is a [`ToolDescriptor`]: a name, a description, the JSON schema
//! of its typed parameter struct and a handler. The registry is built once at
//! startup from a list of descriptors and never changes afterwards.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use deskhand_core::ToolError;
use futures::FutureExt;
use futures::future::BoxFuture;
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use thiserror::Error;

use crate::protocol::Tool;

/// Pending invocation of a tool handler
pub type ToolFuture = BoxFuture<'static, Result<String, ToolError>>;

type Handler<C> = Arc<dyn Fn(Arc<C>, Value) -> Result<ToolFuture, serde_json::Error> + Send + Sync>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
  #[error("Tool '{0}' is registered more than once")]
  DuplicateTool(String),
}

/// A named tool with its argument schema and handler
pub struct ToolDescriptor<C> {
  name: String,
  description: String,
  input_schema: Value,
  handler: Handler<C>,
}

impl<C: Send + Sync + 'static> ToolDescriptor<C> {
  /// Describe a tool whose arguments deserialize into `P`.
  ///
  /// The input schema is generated from `P`, and arguments are validated by
  /// deserializing into `P` before `handler` is called.
  pub fn new<P, F, Fut>(name: impl Into<String>, description: impl Into<String>, handler: F) -> Self
  where
    P: DeserializeOwned + JsonSchema + Send + 'static,
    F: Fn(Arc<C>, P) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<String, ToolError>> + Send + 'static,
  {
    let input_schema = serde_json::to_value(schemars::schema_for!(P)).unwrap_or_else(|_| json!({ "type": "object" }));

    let handler: Handler<C> = Arc::new(
      move |context: Arc<C>, arguments: Value| -> Result<ToolFuture, serde_json::Error> {
        let params: P = serde_json::from_value(arguments)?;
        Ok(handler(context, params).boxed())
      },
    );

    Self {
      name: name.into(),
      description: description.into(),
      input_schema,
      handler,
    }
  }
}

impl<C> ToolDescriptor<C> {
  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn description(&self) -> &str {
    &self.description
  }

  pub fn input_schema(&self) -> &Value {
    &self.input_schema
  }

  /// Validate `arguments` and return the handler future without polling it.
  pub fn prepare(&self, context: Arc<C>, arguments: Value) -> Result<ToolFuture, serde_json::Error> {
    (self.handler)(context, arguments)
  }

  /// Protocol view of this tool for `tools/list`
  pub fn to_tool(&self) -> Tool {
    Tool {
      name: self.name.clone(),
      description: self.description.clone(),
      input_schema: self.input_schema.clone(),
    }
  }
}

/// Immutable name → descriptor mapping
pub struct ToolRegistry<C> {
  tools: Vec<ToolDescriptor<C>>,
  index: HashMap<String, usize>,
}

impl<C> ToolRegistry<C> {
  /// Build a registry, keeping registration order for listing.
  pub fn new(descriptors: Vec<ToolDescriptor<C>>) -> Result<Self, RegistryError> {
    let mut index = HashMap::with_capacity(descriptors.len());
    for (position, descriptor) in descriptors.iter().enumerate() {
      if index.insert(descriptor.name.clone(), position).is_some() {
        return Err(RegistryError::DuplicateTool(descriptor.name.clone()));
      }
    }

    Ok(Self {
      tools: descriptors,
      index,
    })
  }

  pub fn get(&self, name: &str) -> Option<&ToolDescriptor<C>> {
    self.index.get(name).and_then(|&position| self.tools.get(position))
  }

  pub fn list(&self) -> Vec<Tool> {
    self.tools.iter().map(ToolDescriptor::to_tool).collect()
  }

  pub const fn len(&self) -> usize {
    self.tools.len()
  }

  pub const fn is_empty(&self) -> bool {
    self.tools.is_empty()
  }
}
