//! Starting and stopping training jobs.

use std::collections::BTreeMap;
use std::fmt;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::display::ShapeFormatter;
use crate::entries::{insert_entry, list_appenders};
use crate::error::ModelError;
use crate::operation::operation;
use crate::types::debugger::{DebugHookConfig, DebugRuleConfiguration, TensorBoardOutputConfig};
use crate::types::network::VpcConfig;
use crate::types::tag::{taggable, Tag};
use crate::types::training::{
    AlgorithmSpecification, Channel, CheckpointConfig, ExperimentConfig, OutputDataConfig,
    ResourceConfig, StoppingCondition,
};

/// Starts a model training job.
///
/// Hyperparameters are passed to the algorithm verbatim; their names and
/// values are defined by the algorithm, not by the service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option), build_fn(error = "ModelError"))]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateTrainingJobRequest {
    /// Unique per account and region. Length: 1 - 63.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub training_job_name: Option<String>,
    /// Up to 100 entries, keys up to 256 and values up to 2500 characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hyper_parameters: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub algorithm_specification: Option<AlgorithmSpecification>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<String>,
    /// 1 - 20 entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_data_config: Option<Vec<Channel>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_data_config: Option<OutputDataConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_config: Option<ResourceConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_config: Option<VpcConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stopping_condition: Option<StoppingCondition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_network_isolation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_inter_container_traffic_encryption: Option<bool>,
    /// Requires `stopping_condition.max_wait_time_in_seconds`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_managed_spot_training: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checkpoint_config: Option<CheckpointConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug_hook_config: Option<DebugHookConfig>,
    /// Up to 20 entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug_rule_configurations: Option<Vec<DebugRuleConfiguration>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tensor_board_output_config: Option<TensorBoardOutputConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experiment_config: Option<ExperimentConfig>,
}

impl CreateTrainingJobRequest {
    pub fn add_hyper_parameters_entry(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<&mut Self, ModelError> {
        insert_entry(&mut self.hyper_parameters, "HyperParameters", key, value)?;
        Ok(self)
    }

    pub fn clear_hyper_parameters_entries(&mut self) -> &mut Self {
        self.hyper_parameters = None;
        self
    }
}

impl fmt::Display for CreateTrainingJobRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("TrainingJobName", &self.training_job_name)
            .map("HyperParameters", &self.hyper_parameters)
            .field("AlgorithmSpecification", &self.algorithm_specification)
            .field("RoleArn", &self.role_arn)
            .list("InputDataConfig", &self.input_data_config)
            .field("OutputDataConfig", &self.output_data_config)
            .field("ResourceConfig", &self.resource_config)
            .field("VpcConfig", &self.vpc_config)
            .field("StoppingCondition", &self.stopping_condition)
            .list("Tags", &self.tags)
            .field("EnableNetworkIsolation", &self.enable_network_isolation)
            .field(
                "EnableInterContainerTrafficEncryption",
                &self.enable_inter_container_traffic_encryption,
            )
            .field(
                "EnableManagedSpotTraining",
                &self.enable_managed_spot_training,
            )
            .field("CheckpointConfig", &self.checkpoint_config)
            .field("DebugHookConfig", &self.debug_hook_config)
            .list("DebugRuleConfigurations", &self.debug_rule_configurations)
            .field("TensorBoardOutputConfig", &self.tensor_board_output_config)
            .field("ExperimentConfig", &self.experiment_config)
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option), build_fn(error = "ModelError"))]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateTrainingJobResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub training_job_arn: Option<String>,
}

impl fmt::Display for CreateTrainingJobResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("TrainingJobArn", &self.training_job_arn)
            .finish()
    }
}

/// Stops a training job. The algorithm receives `SIGTERM` and has 120
/// seconds to save its model artifacts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option), build_fn(error = "ModelError"))]
#[serde(rename_all = "PascalCase", default)]
pub struct StopTrainingJobRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub training_job_name: Option<String>,
}

impl fmt::Display for StopTrainingJobRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("TrainingJobName", &self.training_job_name)
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option), build_fn(error = "ModelError"))]
#[serde(rename_all = "PascalCase", default)]
pub struct StopTrainingJobResult {}

impl fmt::Display for StopTrainingJobResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f).finish()
    }
}

taggable!(CreateTrainingJobRequest);

operation!(
    CreateTrainingJobRequest => CreateTrainingJobResult as "CreateTrainingJob",
    StopTrainingJobRequest => StopTrainingJobResult as "StopTrainingJob",
);

list_appenders!(CreateTrainingJobRequest {
    add_input_data_config => input_data_config: Channel,
    add_debug_rule_configurations => debug_rule_configurations: DebugRuleConfiguration,
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::{TrainingInputMode, TrainingInstanceType};
    use crate::operation::Operation;
    use crate::types::tag::Taggable;
    use crate::types::training::{
        AlgorithmSpecificationBuilder, OutputDataConfigBuilder, ResourceConfigBuilder,
        StoppingConditionBuilder,
    };

    fn make_request() -> CreateTrainingJobRequest {
        CreateTrainingJobRequestBuilder::default()
            .training_job_name("xgb-2020-03-01")
            .algorithm_specification(
                AlgorithmSpecificationBuilder::default()
                    .training_image("683313688378.dkr.ecr.us-east-1.amazonaws.com/sagemaker-xgboost:0.90-1-cpu-py3")
                    .training_input_mode(TrainingInputMode::File)
                    .build()
                    .unwrap(),
            )
            .role_arn("arn:aws:iam::123456789012:role/training")
            .output_data_config(
                OutputDataConfigBuilder::default()
                    .s3_output_path("s3://bucket/output/")
                    .build()
                    .unwrap(),
            )
            .resource_config(
                ResourceConfigBuilder::default()
                    .instance_type(TrainingInstanceType::MlM5Xlarge)
                    .instance_count(1)
                    .volume_size_in_gb(10)
                    .build()
                    .unwrap(),
            )
            .stopping_condition(
                StoppingConditionBuilder::default()
                    .max_runtime_in_seconds(3600)
                    .build()
                    .unwrap(),
            )
            .build()
            .unwrap()
    }

    #[test]
    fn test_target() {
        assert_eq!(
            CreateTrainingJobRequest::target(),
            "SageMaker.CreateTrainingJob"
        );
        assert_eq!(StopTrainingJobRequest::NAME, "StopTrainingJob");
    }

    #[test]
    fn test_hyper_parameters_reject_duplicates() {
        let mut request = make_request();
        request
            .add_hyper_parameters_entry("num_round", "100")
            .unwrap()
            .add_hyper_parameters_entry("max_depth", "5")
            .unwrap();
        let before = request.clone();
        let err = request
            .add_hyper_parameters_entry("num_round", "50")
            .unwrap_err();
        assert_eq!(
            err,
            ModelError::DuplicateKey {
                field: "HyperParameters",
                key: "num_round".to_string()
            }
        );
        assert_eq!(request, before);
    }

    #[test]
    fn test_clear_then_add_starts_fresh() {
        let mut request = make_request();
        request.add_hyper_parameters_entry("eta", "0.2").unwrap();
        request
            .clear_hyper_parameters_entries()
            .add_hyper_parameters_entry("eta", "0.3")
            .unwrap();
        assert_eq!(
            request.hyper_parameters.unwrap().get("eta").map(String::as_str),
            Some("0.3")
        );
    }

    #[test]
    fn test_wire_form_omits_absent_members() {
        let mut request = make_request();
        request.add_tag("project", "churn");
        let json = serde_json::to_value(&request).unwrap();
        let keys: Vec<&str> = json
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(
            keys.len(),
            7,
            "unexpected members: {:?}",
            keys
        );
        assert_eq!(json["ResourceConfig"]["VolumeSizeInGB"], 10);
        assert_eq!(json["AlgorithmSpecification"]["TrainingInputMode"], "File");
        assert!(json.get("HyperParameters").is_none());

        let back: CreateTrainingJobRequest = serde_json::from_value(json).unwrap();
        assert_eq!(back, request);
    }

    #[test]
    fn test_result_display() {
        let result = CreateTrainingJobResultBuilder::default()
            .training_job_arn("arn:aws:sagemaker:us-east-1:123456789012:training-job/xgb")
            .build()
            .unwrap();
        assert_eq!(
            result.to_string(),
            "{TrainingJobArn: arn:aws:sagemaker:us-east-1:123456789012:training-job/xgb}"
        );
    }

    #[test]
    fn test_append_training_request_lists() {
        let mut request = CreateTrainingJobRequest::default();
        let mut train = Channel::default();
        train.channel_name = Some("train".to_string());
        let mut validation = Channel::default();
        validation.channel_name = Some("validation".to_string());
        request
            .add_input_data_config([train.clone()])
            .add_input_data_config([validation.clone()]);
        assert_eq!(request.input_data_config, Some(vec![train, validation]));
        request.add_debug_rule_configurations([DebugRuleConfiguration::default()]);
        assert_eq!(request.debug_rule_configurations.map(|r| r.len()), Some(1));
    }
}
