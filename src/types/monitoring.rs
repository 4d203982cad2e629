//! Model monitoring: the processing job run on a schedule against an
//! endpoint's captured traffic.

use std::collections::BTreeMap;
use std::fmt;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::display::ShapeFormatter;
use crate::entries::{insert_entry, list_appenders};
use crate::enums::{
    ProcessingInstanceType, ProcessingS3DataDistributionType, ProcessingS3InputMode,
    ProcessingS3UploadMode,
};
use crate::error::ModelError;
use crate::types::network::NetworkConfig;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option), build_fn(error = "ModelError"))]
#[serde(rename_all = "PascalCase", default)]
pub struct MonitoringS3Output {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_uri: Option<String>,
    /// Path inside the container the job writes to before upload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_upload_mode: Option<ProcessingS3UploadMode>,
}

impl fmt::Display for MonitoringS3Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("S3Uri", &self.s3_uri)
            .field("LocalPath", &self.local_path)
            .field("S3UploadMode", &self.s3_upload_mode)
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option), build_fn(error = "ModelError"))]
#[serde(rename_all = "PascalCase", default)]
pub struct MonitoringOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_output: Option<MonitoringS3Output>,
}

impl fmt::Display for MonitoringOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("S3Output", &self.s3_output)
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option), build_fn(error = "ModelError"))]
#[serde(rename_all = "PascalCase", default)]
pub struct MonitoringOutputConfig {
    /// Exactly one entry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitoring_outputs: Option<Vec<MonitoringOutput>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,
}

impl fmt::Display for MonitoringOutputConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .list("MonitoringOutputs", &self.monitoring_outputs)
            .field("KmsKeyId", &self.kms_key_id)
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option), build_fn(error = "ModelError"))]
#[serde(rename_all = "PascalCase", default)]
pub struct MonitoringClusterConfig {
    /// Range: 1 - 100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<ProcessingInstanceType>,
    /// Range: 1 - 16384.
    #[serde(rename = "VolumeSizeInGB", skip_serializing_if = "Option::is_none")]
    pub volume_size_in_gb: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_kms_key_id: Option<String>,
}

impl fmt::Display for MonitoringClusterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("InstanceCount", &self.instance_count)
            .field("InstanceType", &self.instance_type)
            .field("VolumeSizeInGB", &self.volume_size_in_gb)
            .field("VolumeKmsKeyId", &self.volume_kms_key_id)
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option), build_fn(error = "ModelError"))]
#[serde(rename_all = "PascalCase", default)]
pub struct MonitoringResources {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_config: Option<MonitoringClusterConfig>,
}

impl fmt::Display for MonitoringResources {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("ClusterConfig", &self.cluster_config)
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option), build_fn(error = "ModelError"))]
#[serde(rename_all = "PascalCase", default)]
pub struct MonitoringStoppingCondition {
    /// Range: 1 - 3600.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_runtime_in_seconds: Option<i32>,
}

impl fmt::Display for MonitoringStoppingCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("MaxRuntimeInSeconds", &self.max_runtime_in_seconds)
            .finish()
    }
}

/// The container that analyses captured data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option), build_fn(error = "ModelError"))]
#[serde(rename_all = "PascalCase", default)]
pub struct MonitoringAppSpecification {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_uri: Option<String>,
    /// 1 - 100 entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_entrypoint: Option<Vec<String>>,
    /// 1 - 50 entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_arguments: Option<Vec<String>>,
    /// Script run on every captured record before analysis.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_preprocessor_source_uri: Option<String>,
    /// Script run once the analysis has finished.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_analytics_processor_source_uri: Option<String>,
}

impl fmt::Display for MonitoringAppSpecification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("ImageUri", &self.image_uri)
            .list("ContainerEntrypoint", &self.container_entrypoint)
            .list("ContainerArguments", &self.container_arguments)
            .field(
                "RecordPreprocessorSourceUri",
                &self.record_preprocessor_source_uri,
            )
            .field(
                "PostAnalyticsProcessorSourceUri",
                &self.post_analytics_processor_source_uri,
            )
            .finish()
    }
}

/// The endpoint whose captured data is monitored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option), build_fn(error = "ModelError"))]
#[serde(rename_all = "PascalCase", default)]
pub struct EndpointInput {
    /// Length: up to 63. Pattern: `^[a-zA-Z0-9](-*[a-zA-Z0-9])*`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_input_mode: Option<ProcessingS3InputMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_data_distribution_type: Option<ProcessingS3DataDistributionType>,
}

impl fmt::Display for EndpointInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("EndpointName", &self.endpoint_name)
            .field("LocalPath", &self.local_path)
            .field("S3InputMode", &self.s3_input_mode)
            .field("S3DataDistributionType", &self.s3_data_distribution_type)
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option), build_fn(error = "ModelError"))]
#[serde(rename_all = "PascalCase", default)]
pub struct MonitoringInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint_input: Option<EndpointInput>,
}

impl fmt::Display for MonitoringInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("EndpointInput", &self.endpoint_input)
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option), build_fn(error = "ModelError"))]
#[serde(rename_all = "PascalCase", default)]
pub struct MonitoringConstraintsResource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_uri: Option<String>,
}

impl fmt::Display for MonitoringConstraintsResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f).field("S3Uri", &self.s3_uri).finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option), build_fn(error = "ModelError"))]
#[serde(rename_all = "PascalCase", default)]
pub struct MonitoringStatisticsResource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_uri: Option<String>,
}

impl fmt::Display for MonitoringStatisticsResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f).field("S3Uri", &self.s3_uri).finish()
    }
}

/// Baseline constraints and statistics that captured data is compared to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option), build_fn(error = "ModelError"))]
#[serde(rename_all = "PascalCase", default)]
pub struct MonitoringBaselineConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constraints_resource: Option<MonitoringConstraintsResource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics_resource: Option<MonitoringStatisticsResource>,
}

impl fmt::Display for MonitoringBaselineConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("ConstraintsResource", &self.constraints_resource)
            .field("StatisticsResource", &self.statistics_resource)
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option), build_fn(error = "ModelError"))]
#[serde(rename_all = "PascalCase", default)]
pub struct MonitoringJobDefinition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baseline_config: Option<MonitoringBaselineConfig>,
    /// Exactly one entry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitoring_inputs: Option<Vec<MonitoringInput>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitoring_output_config: Option<MonitoringOutputConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitoring_resources: Option<MonitoringResources>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitoring_app_specification: Option<MonitoringAppSpecification>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stopping_condition: Option<MonitoringStoppingCondition>,
    /// Environment variables set in the monitoring container, up to 50.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_config: Option<NetworkConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<String>,
}

impl MonitoringJobDefinition {
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

impl fmt::Display for MonitoringJobDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("BaselineConfig", &self.baseline_config)
            .list("MonitoringInputs", &self.monitoring_inputs)
            .field("MonitoringOutputConfig", &self.monitoring_output_config)
            .field("MonitoringResources", &self.monitoring_resources)
            .field(
                "MonitoringAppSpecification",
                &self.monitoring_app_specification,
            )
            .field("StoppingCondition", &self.stopping_condition)
            .map("Environment", &self.environment)
            .field("NetworkConfig", &self.network_config)
            .field("RoleArn", &self.role_arn)
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option), build_fn(error = "ModelError"))]
#[serde(rename_all = "PascalCase", default)]
pub struct ScheduleConfig {
    /// A cron expression, for example `cron(0 * ? * * *)` for hourly runs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_expression: Option<String>,
}

impl fmt::Display for ScheduleConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("ScheduleExpression", &self.schedule_expression)
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option), build_fn(error = "ModelError"))]
#[serde(rename_all = "PascalCase", default)]
pub struct MonitoringScheduleConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_config: Option<ScheduleConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitoring_job_definition: Option<MonitoringJobDefinition>,
}

impl fmt::Display for MonitoringScheduleConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("ScheduleConfig", &self.schedule_config)
            .field("MonitoringJobDefinition", &self.monitoring_job_definition)
            .finish()
    }
}

list_appenders!(MonitoringOutputConfig {
    add_monitoring_outputs => monitoring_outputs: MonitoringOutput,
});

list_appenders!(MonitoringAppSpecification {
    add_container_entrypoint => container_entrypoint: String,
    add_container_arguments => container_arguments: String,
});

list_appenders!(MonitoringJobDefinition {
    add_monitoring_inputs => monitoring_inputs: MonitoringInput,
});

#[cfg(test)]
mod tests {
    use super::*;

    fn make_definition() -> MonitoringJobDefinition {
        MonitoringJobDefinitionBuilder::default()
            .monitoring_inputs(vec![MonitoringInput {
                endpoint_input: Some(
                    EndpointInputBuilder::default()
                        .endpoint_name("churn-endpoint")
                        .local_path("/opt/ml/processing/input")
                        .build()
                        .unwrap(),
                ),
            }])
            .monitoring_resources(MonitoringResources {
                cluster_config: Some(
                    MonitoringClusterConfigBuilder::default()
                        .instance_count(1)
                        .instance_type(ProcessingInstanceType::MlM5Xlarge)
                        .volume_size_in_gb(20)
                        .build()
                        .unwrap(),
                ),
            })
            .role_arn("arn:aws:iam::123456789012:role/monitor")
            .build()
            .unwrap()
    }

    #[test]
    fn test_environment_entries() {
        let mut definition = make_definition();
        definition
            .add_environment_entry("dataset_format", "{\"json\": true}")
            .unwrap();
        assert!(definition
            .add_environment_entry("dataset_format", "csv")
            .is_err());
        let json = serde_json::to_value(&definition).unwrap();
        assert_eq!(json["Environment"]["dataset_format"], "{\"json\": true}");
        definition.clear_environment_entries();
        assert_eq!(definition, make_definition());
    }

    #[test]
    fn test_cluster_wire_names() {
        let json = serde_json::to_value(make_definition()).unwrap();
        let cluster = &json["MonitoringResources"]["ClusterConfig"];
        assert_eq!(cluster["VolumeSizeInGB"], 20);
        assert_eq!(cluster["InstanceType"], "ml.m5.xlarge");
        assert_eq!(
            json["MonitoringInputs"][0]["EndpointInput"]["EndpointName"],
            "churn-endpoint"
        );
    }

    #[test]
    fn test_schedule_display() {
        let schedule = MonitoringScheduleConfigBuilder::default()
            .schedule_config(
                ScheduleConfigBuilder::default()
                    .schedule_expression("cron(0 * ? * * *)")
                    .build()
                    .unwrap(),
            )
            .build()
            .unwrap();
        assert_eq!(
            schedule.to_string(),
            "{ScheduleConfig: {ScheduleExpression: cron(0 * ? * * *)}}"
        );
    }

    #[test]
    fn test_output_upload_mode_parses() {
        let output: MonitoringOutputConfig = serde_json::from_str(
            r#"{"MonitoringOutputs": [{"S3Output": {"S3Uri": "s3://b/out", "LocalPath": "/opt/ml/processing/output", "S3UploadMode": "EndOfJob"}}]}"#,
        )
        .unwrap();
        let s3 = output.monitoring_outputs.unwrap()[0]
            .s3_output
            .clone()
            .unwrap();
        assert_eq!(s3.s3_upload_mode, Some(ProcessingS3UploadMode::EndOfJob));
    }

    #[test]
    fn test_append_monitoring_lists() {
        let mut app = MonitoringAppSpecification::default();
        app.add_container_entrypoint(["python3"])
            .add_container_arguments(["--verbose"])
            .add_container_arguments(["--strict"]);
        assert_eq!(app.container_entrypoint, Some(vec!["python3".to_string()]));
        assert_eq!(
            app.container_arguments,
            Some(vec!["--verbose".to_string(), "--strict".to_string()])
        );

        let mut outputs = MonitoringOutputConfig::default();
        outputs.add_monitoring_outputs([MonitoringOutput::default()]);
        assert_eq!(outputs.monitoring_outputs.map(|o| o.len()), Some(1));

        let mut job = MonitoringJobDefinition::default();
        job.add_monitoring_inputs([MonitoringInput::default()]);
        assert_eq!(job.monitoring_inputs.map(|i| i.len()), Some(1));
    }
}
