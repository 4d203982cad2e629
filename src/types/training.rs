//! Configuration shapes shared by training and tuning jobs: the algorithm,
//! its input channels, where output goes and how long the job may run.

use std::fmt;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::display::ShapeFormatter;
use crate::entries::list_appenders;
use crate::enums::{
    CompressionType, FileSystemAccessMode, FileSystemType, RecordWrapper, S3DataDistribution,
    S3DataType, TrainingInputMode, TrainingInstanceType,
};
use crate::error::ModelError;

/// The training algorithm and its input mode.
///
/// Either `training_image` or `algorithm_name` identifies the algorithm;
/// the service rejects requests that set both.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option), build_fn(error = "ModelError"))]
#[serde(rename_all = "PascalCase", default)]
pub struct AlgorithmSpecification {
    /// Registry path of the Docker image holding the training algorithm.
    /// Length: up to 255.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub training_image: Option<String>,
    /// Name or ARN of an algorithm resource. Length: 1 - 170.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub algorithm_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub training_input_mode: Option<TrainingInputMode>,
    /// Regular expressions used to scrape metrics from the container logs,
    /// up to 40 entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric_definitions: Option<Vec<MetricDefinition>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_sage_maker_metrics_time_series: Option<bool>,
}

impl fmt::Display for AlgorithmSpecification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("TrainingImage", &self.training_image)
            .field("AlgorithmName", &self.algorithm_name)
            .field("TrainingInputMode", &self.training_input_mode)
            .list("MetricDefinitions", &self.metric_definitions)
            .field(
                "EnableSageMakerMetricsTimeSeries",
                &self.enable_sage_maker_metrics_time_series,
            )
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option), build_fn(error = "ModelError"))]
#[serde(rename_all = "PascalCase", default)]
pub struct MetricDefinition {
    /// Length: 1 - 255.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Length: 1 - 500.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regex: Option<String>,
}

impl fmt::Display for MetricDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("Name", &self.name)
            .field("Regex", &self.regex)
            .finish()
    }
}

/// A named input of a training job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option), build_fn(error = "ModelError"))]
#[serde(rename_all = "PascalCase", default)]
pub struct Channel {
    /// Length: 1 - 64. Pattern: `[A-Za-z0-9\.\-_]+`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_source: Option<DataSource>,
    /// MIME type of the data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compression_type: Option<CompressionType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_wrapper_type: Option<RecordWrapper>,
    /// Overrides the input mode of the algorithm for this channel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_mode: Option<TrainingInputMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shuffle_config: Option<ShuffleConfig>,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("ChannelName", &self.channel_name)
            .field("DataSource", &self.data_source)
            .field("ContentType", &self.content_type)
            .field("CompressionType", &self.compression_type)
            .field("RecordWrapperType", &self.record_wrapper_type)
            .field("InputMode", &self.input_mode)
            .field("ShuffleConfig", &self.shuffle_config)
            .finish()
    }
}

/// Location of channel data; exactly one member is expected to be set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option), build_fn(error = "ModelError"))]
#[serde(rename_all = "PascalCase", default)]
pub struct DataSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_data_source: Option<S3DataSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_system_data_source: Option<FileSystemDataSource>,
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("S3DataSource", &self.s3_data_source)
            .field("FileSystemDataSource", &self.file_system_data_source)
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option), build_fn(error = "ModelError"))]
#[serde(rename_all = "PascalCase", default)]
pub struct S3DataSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_data_type: Option<S3DataType>,
    /// Key prefix or manifest location. Length: up to 1024.
    /// Pattern: `^(https|s3)://([^/]+)/?(.*)$`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_data_distribution_type: Option<S3DataDistribution>,
    /// Attribute names to use from an augmented manifest, up to 16 entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute_names: Option<Vec<String>>,
}

impl fmt::Display for S3DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("S3DataType", &self.s3_data_type)
            .field("S3Uri", &self.s3_uri)
            .field("S3DataDistributionType", &self.s3_data_distribution_type)
            .list("AttributeNames", &self.attribute_names)
            .finish()
    }
}

/// Training data held on EFS or FSx for Lustre.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option), build_fn(error = "ModelError"))]
#[serde(rename_all = "PascalCase", default)]
pub struct FileSystemDataSource {
    /// Length: 11 - . Pattern: `.*`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_system_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_system_access_mode: Option<FileSystemAccessMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_system_type: Option<FileSystemType>,
    /// Length: up to 4096. Pattern: `.*`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory_path: Option<String>,
}

impl fmt::Display for FileSystemDataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("FileSystemId", &self.file_system_id)
            .field("FileSystemAccessMode", &self.file_system_access_mode)
            .field("FileSystemType", &self.file_system_type)
            .field("DirectoryPath", &self.directory_path)
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option), build_fn(error = "ModelError"))]
#[serde(rename_all = "PascalCase", default)]
pub struct ShuffleConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<i64>,
}

impl fmt::Display for ShuffleConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f).field("Seed", &self.seed).finish()
    }
}

/// Where model artifacts are written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option), build_fn(error = "ModelError"))]
#[serde(rename_all = "PascalCase", default)]
pub struct OutputDataConfig {
    /// KMS key used to encrypt the artifacts at rest. Length: up to 2048.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_output_path: Option<String>,
}

impl fmt::Display for OutputDataConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("KmsKeyId", &self.kms_key_id)
            .field("S3OutputPath", &self.s3_output_path)
            .finish()
    }
}

/// Compute resources of a training job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option), build_fn(error = "ModelError"))]
#[serde(rename_all = "PascalCase", default)]
pub struct ResourceConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<TrainingInstanceType>,
    /// Minimum: 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_count: Option<i32>,
    /// Size of the ML storage volume attached to each instance.
    /// Minimum: 1.
    #[serde(rename = "VolumeSizeInGB", skip_serializing_if = "Option::is_none")]
    pub volume_size_in_gb: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_kms_key_id: Option<String>,
}

impl fmt::Display for ResourceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("InstanceType", &self.instance_type)
            .field("InstanceCount", &self.instance_count)
            .field("VolumeSizeInGB", &self.volume_size_in_gb)
            .field("VolumeKmsKeyId", &self.volume_kms_key_id)
            .finish()
    }
}

/// Limits on how long a training job may run.
///
/// `max_wait_time_in_seconds` only applies to managed spot training and
/// must be at least `max_runtime_in_seconds`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option), build_fn(error = "ModelError"))]
#[serde(rename_all = "PascalCase", default)]
pub struct StoppingCondition {
    /// Minimum: 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_runtime_in_seconds: Option<i32>,
    /// Minimum: 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_wait_time_in_seconds: Option<i32>,
}

impl fmt::Display for StoppingCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("MaxRuntimeInSeconds", &self.max_runtime_in_seconds)
            .field("MaxWaitTimeInSeconds", &self.max_wait_time_in_seconds)
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option), build_fn(error = "ModelError"))]
#[serde(rename_all = "PascalCase", default)]
pub struct CheckpointConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_uri: Option<String>,
    /// Defaults to `/opt/ml/checkpoints/` on the service side.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_path: Option<String>,
}

impl fmt::Display for CheckpointConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("S3Uri", &self.s3_uri)
            .field("LocalPath", &self.local_path)
            .finish()
    }
}

/// Associates a training job with an experiment trial.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option), build_fn(error = "ModelError"))]
#[serde(rename_all = "PascalCase", default)]
pub struct ExperimentConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experiment_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trial_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trial_component_display_name: Option<String>,
}

impl fmt::Display for ExperimentConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("ExperimentName", &self.experiment_name)
            .field("TrialName", &self.trial_name)
            .field(
                "TrialComponentDisplayName",
                &self.trial_component_display_name,
            )
            .finish()
    }
}

list_appenders!(AlgorithmSpecification {
    add_metric_definitions => metric_definitions: MetricDefinition,
});

list_appenders!(S3DataSource {
    add_attribute_names => attribute_names: String,
});
