//! The description of a training job as reported by the service.

use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::display::ShapeFormatter;
use crate::entries::{insert_entry, list_appenders};
use crate::enums::{SecondaryStatus, TrainingJobStatus};
use crate::error::ModelError;
use crate::types::debugger::{
    DebugHookConfig, DebugRuleConfiguration, DebugRuleEvaluationStatus, TensorBoardOutputConfig,
};
use crate::types::network::VpcConfig;
use crate::types::tag::{taggable, Tag};
use crate::types::training::{
    AlgorithmSpecification, Channel, CheckpointConfig, ExperimentConfig, OutputDataConfig,
    ResourceConfig, StoppingCondition,
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option), build_fn(error = "ModelError"))]
#[serde(rename_all = "PascalCase", default)]
pub struct ModelArtifacts {
    /// S3 path of the model artifacts. Length: up to 1024.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_model_artifacts: Option<String>,
}

impl fmt::Display for ModelArtifacts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("S3ModelArtifacts", &self.s3_model_artifacts)
            .finish()
    }
}

/// One step in the secondary status history of a training job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option), build_fn(error = "ModelError"))]
#[serde(rename_all = "PascalCase", default)]
pub struct SecondaryStatusTransition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<SecondaryStatus>,
    #[serde(
        with = "crate::timestamp::epoch_seconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub start_time: Option<DateTime<Utc>>,
    /// Absent while the job is still in this status.
    #[serde(
        with = "crate::timestamp::epoch_seconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_message: Option<String>,
}

impl fmt::Display for SecondaryStatusTransition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("Status", &self.status)
            .field("StartTime", &self.start_time)
            .field("EndTime", &self.end_time)
            .field("StatusMessage", &self.status_message)
            .finish()
    }
}

/// A metric value recorded by the algorithm at a point in time.
///
/// `value` is compared and hashed by its bit pattern, so `0.0` and `-0.0`
/// differ and a `NaN` value equals itself.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option), build_fn(error = "ModelError"))]
#[serde(rename_all = "PascalCase", default)]
pub struct MetricData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f32>,
    #[serde(
        with = "crate::timestamp::epoch_seconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub timestamp: Option<DateTime<Utc>>,
}

impl PartialEq for MetricData {
    fn eq(&self, other: &Self) -> bool {
        self.metric_name == other.metric_name
            && self.value.map(f32::to_bits) == other.value.map(f32::to_bits)
            && self.timestamp == other.timestamp
    }
}

impl Eq for MetricData {}

impl Hash for MetricData {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.metric_name.hash(state);
        self.value.map(f32::to_bits).hash(state);
        self.timestamp.hash(state);
    }
}

impl fmt::Display for MetricData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("MetricName", &self.metric_name)
            .field("Value", &self.value)
            .field("Timestamp", &self.timestamp)
            .finish()
    }
}

/// Everything known about a training job, as returned by search results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option), build_fn(error = "ModelError"))]
#[serde(rename_all = "PascalCase", default)]
pub struct TrainingJob {
    /// Length: 1 - 63. Pattern: `^[a-zA-Z0-9](-*[a-zA-Z0-9])*`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub training_job_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub training_job_arn: Option<String>,
    /// Set when the job was launched by a hyperparameter tuning job.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tuning_job_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labeling_job_arn: Option<String>,
    #[serde(rename = "AutoMLJobArn", skip_serializing_if = "Option::is_none")]
    pub auto_ml_job_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_artifacts: Option<ModelArtifacts>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub training_job_status: Option<TrainingJobStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_status: Option<SecondaryStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,
    /// Up to 100 entries.
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
    #[serde(
        with = "crate::timestamp::epoch_seconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub creation_time: Option<DateTime<Utc>>,
    #[serde(
        with = "crate::timestamp::epoch_seconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub training_start_time: Option<DateTime<Utc>>,
    #[serde(
        with = "crate::timestamp::epoch_seconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub training_end_time: Option<DateTime<Utc>>,
    #[serde(
        with = "crate::timestamp::epoch_seconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_modified_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_status_transitions: Option<Vec<SecondaryStatusTransition>>,
    /// Up to 40 entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_metric_data_list: Option<Vec<MetricData>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_network_isolation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_inter_container_traffic_encryption: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_managed_spot_training: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checkpoint_config: Option<CheckpointConfig>,
    /// Minimum: 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub training_time_in_seconds: Option<i32>,
    /// Minimum: 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billable_time_in_seconds: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug_hook_config: Option<DebugHookConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experiment_config: Option<ExperimentConfig>,
    /// Up to 20 entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug_rule_configurations: Option<Vec<DebugRuleConfiguration>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tensor_board_output_config: Option<TensorBoardOutputConfig>,
    /// Up to 20 entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug_rule_evaluation_statuses: Option<Vec<DebugRuleEvaluationStatus>>,
    /// Up to 50 entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

taggable!(TrainingJob);

impl TrainingJob {
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

    /// Most recent final value reported for `metric_name`.
    pub fn final_metric(&self, metric_name: &str) -> Option<f32> {
        self.final_metric_data_list
            .as_ref()?
            .iter()
            .filter(|m| m.metric_name.as_deref() == Some(metric_name))
            .max_by_key(|m| m.timestamp)
            .and_then(|m| m.value)
    }
}

impl fmt::Display for TrainingJob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("TrainingJobName", &self.training_job_name)
            .field("TrainingJobArn", &self.training_job_arn)
            .field("TuningJobArn", &self.tuning_job_arn)
            .field("LabelingJobArn", &self.labeling_job_arn)
            .field("AutoMLJobArn", &self.auto_ml_job_arn)
            .field("ModelArtifacts", &self.model_artifacts)
            .field("TrainingJobStatus", &self.training_job_status)
            .field("SecondaryStatus", &self.secondary_status)
            .field("FailureReason", &self.failure_reason)
            .map("HyperParameters", &self.hyper_parameters)
            .field("AlgorithmSpecification", &self.algorithm_specification)
            .field("RoleArn", &self.role_arn)
            .list("InputDataConfig", &self.input_data_config)
            .field("OutputDataConfig", &self.output_data_config)
            .field("ResourceConfig", &self.resource_config)
            .field("VpcConfig", &self.vpc_config)
            .field("StoppingCondition", &self.stopping_condition)
            .field("CreationTime", &self.creation_time)
            .field("TrainingStartTime", &self.training_start_time)
            .field("TrainingEndTime", &self.training_end_time)
            .field("LastModifiedTime", &self.last_modified_time)
            .list(
                "SecondaryStatusTransitions",
                &self.secondary_status_transitions,
            )
            .list("FinalMetricDataList", &self.final_metric_data_list)
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
            .field("TrainingTimeInSeconds", &self.training_time_in_seconds)
            .field("BillableTimeInSeconds", &self.billable_time_in_seconds)
            .field("DebugHookConfig", &self.debug_hook_config)
            .field("ExperimentConfig", &self.experiment_config)
            .list("DebugRuleConfigurations", &self.debug_rule_configurations)
            .field("TensorBoardOutputConfig", &self.tensor_board_output_config)
            .list(
                "DebugRuleEvaluationStatuses",
                &self.debug_rule_evaluation_statuses,
            )
            .list("Tags", &self.tags)
            .finish()
    }
}

list_appenders!(TrainingJob {
    add_input_data_config => input_data_config: Channel,
    add_secondary_status_transitions => secondary_status_transitions: SecondaryStatusTransition,
    add_final_metric_data => final_metric_data_list: MetricData,
    add_debug_rule_configurations => debug_rule_configurations: DebugRuleConfiguration,
    add_debug_rule_evaluation_statuses => debug_rule_evaluation_statuses: DebugRuleEvaluationStatus,
});
