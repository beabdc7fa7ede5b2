//! Static inspection of compiled paths.

use crate::{PathExpression, Segment};

/// Property names traversed by `path`, in order.
pub fn accessed_properties(path: &PathExpression) -> Vec<String> {
    path.segments
        .iter()
        .filter_map(|segment| match segment {
            Segment::Property(name) => Some(name.clone()),
            Segment::Filter(_) => None,
        })
        .collect()
}

/// Field names tested by filter conditions, in order of appearance.
pub fn filter_fields(path: &PathExpression) -> Vec<String> {
    let mut fields = Vec::new();
    for segment in &path.segments {
        if let Segment::Filter(conditions) = segment {
            fields.extend(conditions.iter().map(|c| c.field.clone()));
        }
    }
    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PathParser;

    #[test]
    fn lists_properties_and_filter_fields() {
        let path = PathParser::compile(
            "$.values[?(@.alias == 'blocks' && @.culture == null)].value.contentData[?(@.key == 'k')].values",
        )
        .unwrap();
        assert_eq!(
            accessed_properties(&path),
            vec!["values", "value", "contentData", "values"]
        );
        assert_eq!(filter_fields(&path), vec!["alias", "culture", "key"]);
    }
}
