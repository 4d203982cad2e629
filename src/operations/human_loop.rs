use std::fmt;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::display::ShapeFormatter;
use crate::error::ModelError;
use crate::operation::operation;
use crate::types::human::{
    FlowDefinitionOutputConfig, HumanLoopActivationConfig, HumanLoopConfig, HumanLoopRequestSource,
};
use crate::types::tag::{taggable, Tag};

/// Creates a flow definition: the human review workflow used by Augmented
/// AI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option), build_fn(error = "ModelError"))]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateFlowDefinitionRequest {
    /// Length: 1 - 63. Pattern: `^[a-z0-9](-*[a-z0-9])*`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flow_definition_name: Option<String>,
    /// Only set when the review is driven by a built-in AWS task type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub human_loop_request_source: Option<HumanLoopRequestSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub human_loop_activation_config: Option<HumanLoopActivationConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub human_loop_config: Option<HumanLoopConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_config: Option<FlowDefinitionOutputConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl fmt::Display for CreateFlowDefinitionRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("FlowDefinitionName", &self.flow_definition_name)
            .field("HumanLoopRequestSource", &self.human_loop_request_source)
            .field(
                "HumanLoopActivationConfig",
                &self.human_loop_activation_config,
            )
            .field("HumanLoopConfig", &self.human_loop_config)
            .field("OutputConfig", &self.output_config)
            .field("RoleArn", &self.role_arn)
            .list("Tags", &self.tags)
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option), build_fn(error = "ModelError"))]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateFlowDefinitionResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flow_definition_arn: Option<String>,
}

impl fmt::Display for CreateFlowDefinitionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("FlowDefinitionArn", &self.flow_definition_arn)
            .finish()
    }
}

taggable!(CreateFlowDefinitionRequest);

operation!(
    CreateFlowDefinitionRequest => CreateFlowDefinitionResult as "CreateFlowDefinition",
);
