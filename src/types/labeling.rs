//! Ground Truth labeling job input, output and automated labeling settings.

use std::fmt;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::display::ShapeFormatter;
use crate::entries::list_appenders;
use crate::enums::ContentClassifier;
use crate::error::ModelError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option), build_fn(error = "ModelError"))]
#[serde(rename_all = "PascalCase", default)]
pub struct LabelingJobS3DataSource {
    /// Manifest file listing the data objects to label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manifest_s3_uri: Option<String>,
}

impl fmt::Display for LabelingJobS3DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("ManifestS3Uri", &self.manifest_s3_uri)
            .finish()
    }
}

/// Topic that feeds data objects to a streaming labeling job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option), build_fn(error = "ModelError"))]
#[serde(rename_all = "PascalCase", default)]
pub struct LabelingJobSnsDataSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sns_topic_arn: Option<String>,
}

impl fmt::Display for LabelingJobSnsDataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("SnsTopicArn", &self.sns_topic_arn)
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option), build_fn(error = "ModelError"))]
#[serde(rename_all = "PascalCase", default)]
pub struct LabelingJobDataSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_data_source: Option<LabelingJobS3DataSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sns_data_source: Option<LabelingJobSnsDataSource>,
}

impl fmt::Display for LabelingJobDataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("S3DataSource", &self.s3_data_source)
            .field("SnsDataSource", &self.sns_data_source)
            .finish()
    }
}

/// Declarations about the content of the input data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option), build_fn(error = "ModelError"))]
#[serde(rename_all = "PascalCase", default)]
pub struct LabelingJobDataAttributes {
    /// Up to 256 entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_classifiers: Option<Vec<ContentClassifier>>,
}

impl fmt::Display for LabelingJobDataAttributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .list("ContentClassifiers", &self.content_classifiers)
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option), build_fn(error = "ModelError"))]
#[serde(rename_all = "PascalCase", default)]
pub struct LabelingJobInputConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_source: Option<LabelingJobDataSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_attributes: Option<LabelingJobDataAttributes>,
}

impl fmt::Display for LabelingJobInputConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("DataSource", &self.data_source)
            .field("DataAttributes", &self.data_attributes)
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option), build_fn(error = "ModelError"))]
#[serde(rename_all = "PascalCase", default)]
pub struct LabelingJobOutputConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_output_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,
    /// Topic that labeled objects are published to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sns_topic_arn: Option<String>,
}

impl fmt::Display for LabelingJobOutputConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("S3OutputPath", &self.s3_output_path)
            .field("KmsKeyId", &self.kms_key_id)
            .field("SnsTopicArn", &self.sns_topic_arn)
            .finish()
    }
}

/// Stops a labeling job once either limit is reached.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option), build_fn(error = "ModelError"))]
#[serde(rename_all = "PascalCase", default)]
pub struct LabelingJobStoppingConditions {
    /// Minimum: 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_human_labeled_object_count: Option<i32>,
    /// Range: 1 - 100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_percentage_of_input_dataset_labeled: Option<i32>,
}

impl fmt::Display for LabelingJobStoppingConditions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field(
                "MaxHumanLabeledObjectCount",
                &self.max_human_labeled_object_count,
            )
            .field(
                "MaxPercentageOfInputDatasetLabeled",
                &self.max_percentage_of_input_dataset_labeled,
            )
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option), build_fn(error = "ModelError"))]
#[serde(rename_all = "PascalCase", default)]
pub struct LabelingJobResourceConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_kms_key_id: Option<String>,
}

impl fmt::Display for LabelingJobResourceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("VolumeKmsKeyId", &self.volume_kms_key_id)
            .finish()
    }
}

/// Settings for automated data labeling.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option), build_fn(error = "ModelError"))]
#[serde(rename_all = "PascalCase", default)]
pub struct LabelingJobAlgorithmsConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labeling_job_algorithm_specification_arn: Option<String>,
    /// Model from a previous job to start active learning from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_active_learning_model_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labeling_job_resource_config: Option<LabelingJobResourceConfig>,
}

impl fmt::Display for LabelingJobAlgorithmsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field(
                "LabelingJobAlgorithmSpecificationArn",
                &self.labeling_job_algorithm_specification_arn,
            )
            .field(
                "InitialActiveLearningModelArn",
                &self.initial_active_learning_model_arn,
            )
            .field(
                "LabelingJobResourceConfig",
                &self.labeling_job_resource_config,
            )
            .finish()
    }
}

list_appenders!(LabelingJobDataAttributes {
    add_content_classifiers => content_classifiers: ContentClassifier,
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_config_wire_form() {
        let input = LabelingJobInputConfigBuilder::default()
            .data_source(
                LabelingJobDataSourceBuilder::default()
                    .s3_data_source(
                        LabelingJobS3DataSourceBuilder::default()
                            .manifest_s3_uri("s3://bucket/manifest.json")
                            .build()
                            .unwrap(),
                    )
                    .build()
                    .unwrap(),
            )
            .data_attributes(LabelingJobDataAttributes {
                content_classifiers: Some(vec![
                    ContentClassifier::FreeOfPersonallyIdentifiableInformation,
                    ContentClassifier::FreeOfAdultContent,
                ]),
            })
            .build()
            .unwrap();
        assert_eq!(
            serde_json::to_value(&input).unwrap(),
            serde_json::json!({
                "DataSource": {"S3DataSource": {"ManifestS3Uri": "s3://bucket/manifest.json"}},
                "DataAttributes": {
                    "ContentClassifiers": [
                        "FreeOfPersonallyIdentifiableInformation",
                        "FreeOfAdultContent"
                    ]
                }
            })
        );
    }

    #[test]
    fn test_classifier_list_display() {
        let attributes = LabelingJobDataAttributes {
            content_classifiers: Some(vec![ContentClassifier::FreeOfAdultContent]),
        };
        assert_eq!(
            attributes.to_string(),
            "{ContentClassifiers: [FreeOfAdultContent]}"
        );
    }

    #[test]
    fn test_stopping_conditions_equality() {
        let mut a = LabelingJobStoppingConditions::default();
        a.max_percentage_of_input_dataset_labeled = Some(80);
        let b = LabelingJobStoppingConditionsBuilder::default()
            .max_percentage_of_input_dataset_labeled(80)
            .build()
            .unwrap();
        assert_eq!(a, b);
        assert_eq!(b.to_string(), "{MaxPercentageOfInputDatasetLabeled: 80}");
    }

    #[test]
    fn test_append_content_classifiers() {
        let mut attributes = LabelingJobDataAttributes::default();
        attributes.add_content_classifiers(["FreeOfAdultContent"]);
        attributes.add_content_classifiers([
            ContentClassifier::FreeOfPersonallyIdentifiableInformation,
        ]);
        assert_eq!(
            attributes.content_classifiers,
            Some(vec![
                ContentClassifier::FreeOfAdultContent,
                ContentClassifier::FreeOfPersonallyIdentifiableInformation,
            ])
        );
    }
}
