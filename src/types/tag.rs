use std::fmt;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::display::ShapeFormatter;
use crate::error::ModelError;

/// A key-value pair attached to a SageMaker resource.
///
/// Tags are used for cost allocation and access control. A resource can
/// carry at most 50 of them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option), build_fn(error = "ModelError"))]
#[serde(rename_all = "PascalCase", default)]
pub struct Tag {
    /// The tag key. Tag keys must be unique per resource.
    ///
    /// Length: 1 - 128. Pattern: `^([\p{L}\p{Z}\p{N}_.:/=+\-@]*)$`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// The tag value.
    ///
    /// Length: 0 - 256. Pattern: `^([\p{L}\p{Z}\p{N}_.:/=+\-@]*)$`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Tag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Tag {
            key: Some(key.into()),
            value: Some(value.into()),
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("Key", &self.key)
            .field("Value", &self.value)
            .finish()
    }
}

/// Shapes that carry a `Tags` list.
pub trait Taggable {
    fn tag_list(&self) -> &Option<Vec<Tag>>;

    fn tag_list_mut(&mut self) -> &mut Option<Vec<Tag>>;

    /// Appends a tag, allocating the list when it is absent.
    fn add_tag(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self
    where
        Self: Sized,
    {
        self.tag_list_mut()
            .get_or_insert_with(Vec::new)
            .push(Tag::new(key, value));
        self
    }

    fn add_tags(&mut self, tags: impl IntoIterator<Item = Tag>) -> &mut Self
    where
        Self: Sized,
    {
        self.tag_list_mut()
            .get_or_insert_with(Vec::new)
            .extend(tags);
        self
    }

    /// Value of the first tag whose key is `key`.
    fn tag_value(&self, key: &str) -> Option<&str> {
        self.tag_list()
            .as_ref()?
            .iter()
            .find(|t| t.key.as_deref() == Some(key))
            .and_then(|t| t.value.as_deref())
    }
}

macro_rules! taggable {
    ($($shape:ty),+ $(,)?) => {
        $(
            impl $crate::types::tag::Taggable for $shape {
                fn tag_list(&self) -> &Option<Vec<$crate::types::tag::Tag>> {
                    &self.tags
                }

                fn tag_list_mut(&mut self) -> &mut Option<Vec<$crate::types::tag::Tag>> {
                    &mut self.tags
                }
            }
        )+
    };
}

pub(crate) use taggable;

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Tagged {
        tags: Option<Vec<Tag>>,
    }

    taggable!(Tagged);

    #[test]
    fn test_builder_matches_assignment() {
        let built = TagBuilder::default()
            .key("team")
            .value("research")
            .build()
            .unwrap();
        let mut assigned = Tag::default();
        assigned.key = Some("team".to_string());
        assigned.value = Some("research".to_string());
        assert_eq!(built, assigned);
        assert_eq!(built, Tag::new("team", "research"));
    }

    #[test]
    fn test_display_skips_absent_members() {
        assert_eq!(Tag::new("a", "b").to_string(), "{Key: a,Value: b}");
        let key_only = TagBuilder::default().key("a").build().unwrap();
        assert_eq!(key_only.to_string(), "{Key: a}");
        assert_eq!(Tag::default().to_string(), "{}");
    }

    #[test]
    fn test_wire_names() {
        let json = serde_json::to_value(Tag::new("k", "v")).unwrap();
        assert_eq!(json, serde_json::json!({"Key": "k", "Value": "v"}));
        let empty = serde_json::to_value(Tag::default()).unwrap();
        assert_eq!(empty, serde_json::json!({}));
    }

    #[test]
    fn test_add_tag_allocates_and_appends() {
        let mut shape = Tagged::default();
        shape.add_tag("a", "1").add_tag("b", "2");
        assert_eq!(shape.tags.as_ref().map(Vec::len), Some(2));
        assert_eq!(shape.tag_value("b"), Some("2"));
        assert_eq!(shape.tag_value("c"), None);
    }

    #[test]
    fn test_tag_value_without_tags() {
        let shape = Tagged::default();
        assert_eq!(shape.tag_value("a"), None);
    }
}
