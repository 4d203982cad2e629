use std::fmt;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::display::ShapeFormatter;
use crate::error::ModelError;
use crate::operation::operation;
use crate::types::human::HumanTaskConfig;
use crate::types::labeling::{
    LabelingJobAlgorithmsConfig, LabelingJobInputConfig, LabelingJobOutputConfig,
    LabelingJobStoppingConditions,
};
use crate::types::tag::{taggable, Tag};

/// Creates a Ground Truth labeling job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option), build_fn(error = "ModelError"))]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateLabelingJobRequest {
    /// Length: 1 - 63.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labeling_job_name: Option<String>,
    /// Attribute name used for labels in the output manifest. Must not end
    /// in `-metadata`. Length: 1 - 127.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_attribute_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_config: Option<LabelingJobInputConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_config: Option<LabelingJobOutputConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<String>,
    /// JSON file listing the label categories shown to workers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_category_config_s3_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stopping_conditions: Option<LabelingJobStoppingConditions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labeling_job_algorithms_config: Option<LabelingJobAlgorithmsConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub human_task_config: Option<HumanTaskConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl fmt::Display for CreateLabelingJobRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("LabelingJobName", &self.labeling_job_name)
            .field("LabelAttributeName", &self.label_attribute_name)
            .field("InputConfig", &self.input_config)
            .field("OutputConfig", &self.output_config)
            .field("RoleArn", &self.role_arn)
            .field(
                "LabelCategoryConfigS3Uri",
                &self.label_category_config_s3_uri,
            )
            .field("StoppingConditions", &self.stopping_conditions)
            .field(
                "LabelingJobAlgorithmsConfig",
                &self.labeling_job_algorithms_config,
            )
            .field("HumanTaskConfig", &self.human_task_config)
            .list("Tags", &self.tags)
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option), build_fn(error = "ModelError"))]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateLabelingJobResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labeling_job_arn: Option<String>,
}

impl fmt::Display for CreateLabelingJobResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("LabelingJobArn", &self.labeling_job_arn)
            .finish()
    }
}

taggable!(CreateLabelingJobRequest);

operation!(
    CreateLabelingJobRequest => CreateLabelingJobResult as "CreateLabelingJob",
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operation::Operation;
    use crate::types::labeling::LabelingJobOutputConfigBuilder;
    use crate::types::tag::Taggable;

    #[test]
    fn test_target() {
        assert_eq!(
            CreateLabelingJobRequest::target(),
            "SageMaker.CreateLabelingJob"
        );
    }

    #[test]
    fn test_builder_matches_assignment() {
        let output = LabelingJobOutputConfigBuilder::default()
            .s3_output_path("s3://bucket/labels/")
            .build()
            .unwrap();
        let built = CreateLabelingJobRequestBuilder::default()
            .labeling_job_name("dogs")
            .label_attribute_name("breed")
            .output_config(output.clone())
            .tags(vec![Tag::new("team", "vision")])
            .build()
            .unwrap();

        let mut assigned = CreateLabelingJobRequest::default();
        assigned.labeling_job_name = Some("dogs".to_string());
        assigned.label_attribute_name = Some("breed".to_string());
        assigned.output_config = Some(output);
        assigned.add_tag("team", "vision");

        assert_eq!(built, assigned);
        assert_eq!(built.to_string(), assigned.to_string());
    }

    #[test]
    fn test_display() {
        let mut request = CreateLabelingJobRequest::default();
        request.labeling_job_name = Some("dogs".to_string());
        request.stopping_conditions = Some(LabelingJobStoppingConditions {
            max_human_labeled_object_count: Some(500),
            max_percentage_of_input_dataset_labeled: None,
        });
        assert_eq!(
            request.to_string(),
            "{LabelingJobName: dogs,StoppingConditions: {MaxHumanLabeledObjectCount: 500}}"
        );
    }
}
