use std::collections::BTreeMap;
use std::fmt;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::display::ShapeFormatter;
use crate::entries::insert_entry;
use crate::enums::BatchStrategy;
use crate::error::ModelError;
use crate::operation::operation;
use crate::types::tag::{taggable, Tag};
use crate::types::training::ExperimentConfig;
use crate::types::transform::{DataProcessing, TransformInput, TransformOutput, TransformResources};

/// Starts a batch transform job against an existing model.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option), build_fn(error = "ModelError"))]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateTransformJobRequest {
    /// Length: 1 - 63.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transform_job_name: Option<String>,
    /// Name of a model in the same account and region.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_name: Option<String>,
    /// Parallel requests sent to each instance. Minimum: 0.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_concurrent_transforms: Option<i32>,
    /// Maximum size of a mini-batch in MB. Minimum: 0.
    #[serde(rename = "MaxPayloadInMB", skip_serializing_if = "Option::is_none")]
    pub max_payload_in_mb: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch_strategy: Option<BatchStrategy>,
    /// Environment variables set in the model container, up to 16.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transform_input: Option<TransformInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transform_output: Option<TransformOutput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transform_resources: Option<TransformResources>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_processing: Option<DataProcessing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experiment_config: Option<ExperimentConfig>,
}

impl CreateTransformJobRequest {
    pub fn add_environment_entry(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<&mut Self, ModelError> {
        insert_entry(&mut self.environment, "Environment", key, value)?;
        Ok(self)
    }

    pub fn clear_environment_entries(&mut self) -> &mut Self {
        self.environment = None;
        self
    }
}

impl fmt::Display for CreateTransformJobRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("TransformJobName", &self.transform_job_name)
            .field("ModelName", &self.model_name)
            .field("MaxConcurrentTransforms", &self.max_concurrent_transforms)
            .field("MaxPayloadInMB", &self.max_payload_in_mb)
            .field("BatchStrategy", &self.batch_strategy)
            .map("Environment", &self.environment)
            .field("TransformInput", &self.transform_input)
            .field("TransformOutput", &self.transform_output)
            .field("TransformResources", &self.transform_resources)
            .field("DataProcessing", &self.data_processing)
            .list("Tags", &self.tags)
            .field("ExperimentConfig", &self.experiment_config)
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option), build_fn(error = "ModelError"))]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateTransformJobResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transform_job_arn: Option<String>,
}

impl fmt::Display for CreateTransformJobResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("TransformJobArn", &self.transform_job_arn)
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option), build_fn(error = "ModelError"))]
#[serde(rename_all = "PascalCase", default)]
pub struct StopTransformJobRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transform_job_name: Option<String>,
}

impl fmt::Display for StopTransformJobRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("TransformJobName", &self.transform_job_name)
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option), build_fn(error = "ModelError"))]
#[serde(rename_all = "PascalCase", default)]
pub struct StopTransformJobResult {}

impl fmt::Display for StopTransformJobResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f).finish()
    }
}

taggable!(CreateTransformJobRequest);

operation!(
    CreateTransformJobRequest => CreateTransformJobResult as "CreateTransformJob",
    StopTransformJobRequest => StopTransformJobResult as "StopTransformJob",
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::{AssemblyType, TransformInstanceType};
    use crate::operation::Operation;
    use crate::types::transform::{TransformOutputBuilder, TransformResourcesBuilder};

    fn make_request() -> CreateTransformJobRequest {
        CreateTransformJobRequestBuilder::default()
            .transform_job_name("nightly-scoring")
            .model_name("churn-model")
            .max_payload_in_mb(6)
            .batch_strategy(BatchStrategy::MultiRecord)
            .transform_output(
                TransformOutputBuilder::default()
                    .s3_output_path("s3://bucket/scores/")
                    .assemble_with(AssemblyType::Line)
                    .build()
                    .unwrap(),
            )
            .transform_resources(
                TransformResourcesBuilder::default()
                    .instance_type(TransformInstanceType::MlM4Xlarge)
                    .instance_count(1)
                    .build()
                    .unwrap(),
            )
            .build()
            .unwrap()
    }

    #[test]
    fn test_targets() {
        assert_eq!(
            CreateTransformJobRequest::target(),
            "SageMaker.CreateTransformJob"
        );
        assert_eq!(StopTransformJobRequest::target(), "SageMaker.StopTransformJob");
    }

    #[test]
    fn test_max_payload_wire_name() {
        let json = serde_json::to_value(make_request()).unwrap();
        assert_eq!(json["MaxPayloadInMB"], 6);
        assert_eq!(json["BatchStrategy"], "MultiRecord");
        assert_eq!(json["TransformResources"]["InstanceType"], "ml.m4.xlarge");
    }

    #[test]
    fn test_environment_entries() {
        let mut request = make_request();
        request
            .add_environment_entry("MODEL_SERVER_WORKERS", "2")
            .unwrap()
            .add_environment_entry("LOG_LEVEL", "info")
            .unwrap();
        assert!(request
            .add_environment_entry("LOG_LEVEL", "debug")
            .is_err());
        let mut cleared = request.clone();
        cleared.clear_environment_entries();
        assert_eq!(cleared, make_request());
        assert!(request
            .to_string()
            .contains("Environment: {LOG_LEVEL=info, MODEL_SERVER_WORKERS=2}"));
    }

    #[test]
    fn test_stop_request_display() {
        let stop = StopTransformJobRequestBuilder::default()
            .transform_job_name("nightly-scoring")
            .build()
            .unwrap();
        assert_eq!(stop.to_string(), "{TransformJobName: nightly-scoring}");
    }
}
