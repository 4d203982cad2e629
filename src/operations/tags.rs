use std::fmt;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::display::ShapeFormatter;
use crate::entries::list_appenders;
use crate::error::ModelError;
use crate::operation::operation;
use crate::types::tag::{taggable, Tag};

/// Adds or overwrites tags on a SageMaker resource.
///
/// Tags added to a hyperparameter tuning job are propagated to the training
/// jobs it launches after the call, not to the ones already running.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option), build_fn(error = "ModelError"))]
#[serde(rename_all = "PascalCase", default)]
pub struct AddTagsRequest {
    /// Length: up to 256.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_arn: Option<String>,
    /// Up to 50 entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl fmt::Display for AddTagsRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("ResourceArn", &self.resource_arn)
            .list("Tags", &self.tags)
            .finish()
    }
}

/// The tags now attached to the resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option), build_fn(error = "ModelError"))]
#[serde(rename_all = "PascalCase", default)]
pub struct AddTagsResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl fmt::Display for AddTagsResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f).list("Tags", &self.tags).finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option), build_fn(error = "ModelError"))]
#[serde(rename_all = "PascalCase", default)]
pub struct DeleteTagsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_arn: Option<String>,
    /// 1 - 50 entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_keys: Option<Vec<String>>,
}

impl fmt::Display for DeleteTagsRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("ResourceArn", &self.resource_arn)
            .list("TagKeys", &self.tag_keys)
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option), build_fn(error = "ModelError"))]
#[serde(rename_all = "PascalCase", default)]
pub struct DeleteTagsResult {}

impl fmt::Display for DeleteTagsResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f).finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option), build_fn(error = "ModelError"))]
#[serde(rename_all = "PascalCase", default)]
pub struct ListTagsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_arn: Option<String>,
    /// Token returned by a previous, truncated response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// Minimum: 50.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

impl fmt::Display for ListTagsRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("ResourceArn", &self.resource_arn)
            .field("NextToken", &self.next_token)
            .field("MaxResults", &self.max_results)
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option), build_fn(error = "ModelError"))]
#[serde(rename_all = "PascalCase", default)]
pub struct ListTagsResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    /// Present when more tags are available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl fmt::Display for ListTagsResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .list("Tags", &self.tags)
            .field("NextToken", &self.next_token)
            .finish()
    }
}

taggable!(AddTagsRequest, AddTagsResult, ListTagsResult);

operation!(
    AddTagsRequest => AddTagsResult as "AddTags",
    DeleteTagsRequest => DeleteTagsResult as "DeleteTags",
    ListTagsRequest => ListTagsResult as "ListTags",
);

list_appenders!(DeleteTagsRequest {
    add_tag_keys => tag_keys: String,
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operation::Operation;
    use crate::types::tag::Taggable;

    const ARN: &str = "arn:aws:sagemaker:us-east-1:123456789012:notebook-instance/nb";

    #[test]
    fn test_targets() {
        assert_eq!(AddTagsRequest::target(), "SageMaker.AddTags");
        assert_eq!(DeleteTagsRequest::target(), "SageMaker.DeleteTags");
        assert_eq!(<ListTagsRequest as Operation>::NAME, "ListTags");
    }

    #[test]
    fn test_builder_matches_assignment() {
        let built = AddTagsRequestBuilder::default()
            .resource_arn(ARN)
            .tags(vec![Tag::new("team", "ml")])
            .build()
            .unwrap();

        let mut assigned = AddTagsRequest::default();
        assigned.resource_arn = Some(ARN.to_string());
        assigned.add_tag("team", "ml");

        assert_eq!(built, assigned);
    }

    #[test]
    fn test_add_tags_wire_form() {
        let mut request = AddTagsRequest::default();
        request.resource_arn = Some(ARN.to_string());
        request.add_tag("a", "1").add_tag("b", "2");
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({
                "ResourceArn": ARN,
                "Tags": [{"Key": "a", "Value": "1"}, {"Key": "b", "Value": "2"}]
            })
        );
    }

    #[test]
    fn test_delete_tag_keys_append() {
        let mut request = DeleteTagsRequest::default();
        request.add_tag_keys(["a"]).add_tag_keys(vec!["b".to_string()]);
        assert_eq!(
            request.tag_keys,
            Some(vec!["a".to_string(), "b".to_string()])
        );
        assert_eq!(request.to_string(), "{TagKeys: [a, b]}");
    }

    #[test]
    fn test_empty_result() {
        let result: DeleteTagsResult = serde_json::from_str("{}").unwrap();
        assert_eq!(result.to_string(), "{}");
        assert_eq!(serde_json::to_string(&result).unwrap(), "{}");
    }

    #[test]
    fn test_list_tags_result() {
        let result: ListTagsResult = serde_json::from_str(
            r#"{"Tags": [{"Key": "stage", "Value": "prod"}], "NextToken": "abc"}"#,
        )
        .unwrap();
        assert_eq!(result.tag_value("stage"), Some("prod"));
        assert_eq!(
            result.to_string(),
            "{Tags: [{Key: stage,Value: prod}],NextToken: abc}"
        );
    }
}
