//! Matched node with its concrete location.

use serde_json::Value;
use variant_json_pointer::{format_json_pointer, PathStep};

/// A matched JSON value paired with the keys and indices leading to it.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueNode<'a> {
    pub data: &'a Value,
    pub location: Vec<PathStep>,
}

impl<'a> ValueNode<'a> {
    pub fn new(data: &'a Value, location: Vec<PathStep>) -> Self {
        Self { data, location }
    }

    /// Location steps from root to this node.
    pub fn location(&self) -> &[PathStep] {
        &self.location
    }

    /// This node's location as a JSON Pointer.
    pub fn pointer(&self) -> String {
        format_json_pointer(&self.location)
    }

    /// This node's location as a normalized bracketed path, e.g.
    /// `$['values'][1]['value']`.
    pub fn json_path(&self) -> String {
        let mut out = String::from("$");
        for step in &self.location {
            match step {
                PathStep::Key(key) => {
                    out.push_str("['");
                    out.push_str(&escape_single_quoted(key));
                    out.push_str("']");
                }
                PathStep::Index(index) => {
                    out.push('[');
                    out.push_str(&index.to_string());
                    out.push(']');
                }
            }
        }
        out
    }
}

fn escape_single_quoted(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            _ => out.push(ch),
        }
    }
    out
}
