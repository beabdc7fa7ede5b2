//! Path evaluator.

use serde_json::Value;
use variant_json_pointer::PathStep;

use crate::{ParseError, PathExpression, PathParser, Segment, ValueNode};

/// Evaluates compiled paths against JSON documents.
///
/// Evaluation never fails: a walk that cannot descend (missing field,
/// property access on a non-object, filter on a non-array) just drops that
/// branch. Results are in document order.
pub struct PathEval;

impl PathEval {
    /// All values matched by `path`.
    pub fn select<'a>(root: &'a Value, path: &PathExpression) -> Vec<&'a Value> {
        Self::select_nodes(root, path)
            .into_iter()
            .map(|node| node.data)
            .collect()
    }

    /// All matches, each paired with its location in `root`.
    pub fn select_nodes<'a>(root: &'a Value, path: &PathExpression) -> Vec<ValueNode<'a>> {
        let mut current = vec![ValueNode::new(root, Vec::new())];

        for segment in &path.segments {
            let mut next = Vec::new();
            for node in &current {
                Self::eval_segment(node, segment, &mut next);
            }
            if next.is_empty() {
                return next;
            }
            current = next;
        }

        current
    }

    /// First match in document order.
    pub fn select_single<'a>(root: &'a Value, path: &PathExpression) -> Option<&'a Value> {
        Self::select(root, path).into_iter().next()
    }

    /// Whether `path` matches anything in `root`.
    pub fn exists(root: &Value, path: &PathExpression) -> bool {
        !Self::select_nodes(root, path).is_empty()
    }

    /// Compile `path` and select against `root`.
    pub fn run<'a>(path: &str, root: &'a Value) -> Result<Vec<&'a Value>, ParseError> {
        let compiled = PathParser::compile(path)?;
        Ok(Self::select(root, &compiled))
    }

    fn eval_segment<'a>(node: &ValueNode<'a>, segment: &Segment, out: &mut Vec<ValueNode<'a>>) {
        match segment {
            Segment::Property(name) => {
                if let Value::Object(map) = node.data {
                    if let Some(child) = map.get(name) {
                        out.push(Self::child(node, child, PathStep::Key(name.clone())));
                    }
                }
            }
            // A filter without conditions selects nothing.
            Segment::Filter(conditions) if conditions.is_empty() => {}
            Segment::Filter(conditions) => {
                if let Value::Array(arr) = node.data {
                    for (idx, element) in arr.iter().enumerate() {
                        if conditions.iter().all(|c| c.holds_for(element)) {
                            out.push(Self::child(node, element, PathStep::Index(idx)));
                        }
                    }
                }
            }
        }
    }

    fn child<'a>(parent: &ValueNode<'a>, data: &'a Value, step: PathStep) -> ValueNode<'a> {
        let mut location = Vec::with_capacity(parent.location.len() + 1);
        location.extend_from_slice(&parent.location);
        location.push(step);
        ValueNode::new(data, location)
    }
}
