//! Replace-at-path without touching the caller's document.

use serde_json::{Map, Value};
use variant_json_path::{PathEval, PathExpression};
use variant_json_pointer::{find_mut, PathStep};

use crate::{ApplyOptions, MultipleMatches, PatchError, PatchOperation};

/// Replace the first location matched by `path` with `new_value`.
///
/// `document` is only read. The returned document shares no mutable state with
/// it: containers on the way from the root to the match are rebuilt, every
/// other subtree is copied as is.
pub fn apply_replace(
    document: &Value,
    path: &PathExpression,
    new_value: Value,
) -> Result<Value, PatchError> {
    apply_replace_with(document, path, new_value, &ApplyOptions::default())
}

/// [`apply_replace`] with explicit options.
pub fn apply_replace_with(
    document: &Value,
    path: &PathExpression,
    new_value: Value,
    options: &ApplyOptions,
) -> Result<Value, PatchError> {
    let location = locate(document, path, options)?;
    rebuild(document, &location, new_value).ok_or_else(|| PatchError::NotFound {
        path: path.to_string(),
    })
}

/// Compile the operation's path and apply it to `document`.
pub fn apply_operation(
    document: &Value,
    operation: &PatchOperation,
    options: &ApplyOptions,
) -> Result<Value, PatchError> {
    let path = operation.compile()?;
    match operation {
        PatchOperation::Replace { value, .. } => {
            apply_replace_with(document, &path, value.clone(), options)
        }
    }
}

/// Apply operations in order, each against the result of the previous one.
///
/// All or nothing: on failure the error names the failing operation and no
/// partial document is returned.
pub fn apply_all(
    document: &Value,
    operations: &[PatchOperation],
    options: &ApplyOptions,
) -> Result<Value, PatchError> {
    let mut working = document.clone();
    for (index, operation) in operations.iter().enumerate() {
        apply_in_place(&mut working, operation, options).map_err(|source| {
            PatchError::Operation {
                index,
                source: Box::new(source),
            }
        })?;
    }
    Ok(working)
}

// The working copy in `apply_all` is owned by the batch, so it is edited in place.
fn apply_in_place(
    working: &mut Value,
    operation: &PatchOperation,
    options: &ApplyOptions,
) -> Result<(), PatchError> {
    let path = operation.compile()?;
    let location = locate(working, &path, options)?;
    let slot = find_mut(working, &location).ok_or_else(|| PatchError::NotFound {
        path: path.to_string(),
    })?;
    *slot = operation.value().clone();
    Ok(())
}

fn locate(
    document: &Value,
    path: &PathExpression,
    options: &ApplyOptions,
) -> Result<Vec<PathStep>, PatchError> {
    let mut nodes = PathEval::select_nodes(document, path);
    match nodes.len() {
        0 => Err(PatchError::NotFound {
            path: path.to_string(),
        }),
        1 => Ok(nodes.swap_remove(0).location),
        matches => match options.multiple_matches {
            MultipleMatches::First => Ok(nodes.swap_remove(0).location),
            MultipleMatches::Reject => Err(PatchError::Ambiguous {
                path: path.to_string(),
                matches,
            }),
        },
    }
}

/// Copy `node` with the value at `location` swapped for `new_value`.
///
/// Only the child on the location is rebuilt at each level; siblings are
/// cloned. Returns `None` if the location does not resolve.
fn rebuild(node: &Value, location: &[PathStep], new_value: Value) -> Option<Value> {
    let Some((step, rest)) = location.split_first() else {
        return Some(new_value);
    };
    match (node, step) {
        (Value::Object(map), PathStep::Key(key)) => {
            if !map.contains_key(key) {
                return None;
            }
            let mut out = Map::with_capacity(map.len());
            let mut pending = Some(new_value);
            for (k, child) in map {
                let value = match pending.take() {
                    Some(new_value) if k == key => rebuild(child, rest, new_value)?,
                    other => {
                        pending = other;
                        child.clone()
                    }
                };
                out.insert(k.clone(), value);
            }
            Some(Value::Object(out))
        }
        (Value::Array(arr), PathStep::Index(idx)) => {
            let target = arr.get(*idx)?;
            let mut out = Vec::with_capacity(arr.len());
            out.extend_from_slice(&arr[..*idx]);
            out.push(rebuild(target, rest, new_value)?);
            out.extend_from_slice(&arr[*idx + 1..]);
            Some(Value::Array(out))
        }
        _ => None,
    }
}
