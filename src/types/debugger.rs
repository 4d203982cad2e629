//! Debugger and TensorBoard settings attached to a training job.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::display::ShapeFormatter;
use crate::entries::{insert_entry, list_appenders};
use crate::enums::{ProcessingInstanceType, RuleEvaluationStatus};
use crate::error::ModelError;

/// Where debug output tensors are written and which collections are saved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option), build_fn(error = "ModelError"))]
#[serde(rename_all = "PascalCase", default)]
pub struct DebugHookConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_output_path: Option<String>,
    /// Up to 20 entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hook_parameters: Option<BTreeMap<String, String>>,
    /// Up to 20 entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_configurations: Option<Vec<CollectionConfiguration>>,
}

impl DebugHookConfig {
    pub fn add_hook_parameters_entry(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<&mut Self, ModelError> {
        insert_entry(&mut self.hook_parameters, "HookParameters", key, value)?;
        Ok(self)
    }

    pub fn clear_hook_parameters_entries(&mut self) -> &mut Self {
        self.hook_parameters = None;
        self
    }
}

impl fmt::Display for DebugHookConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("LocalPath", &self.local_path)
            .field("S3OutputPath", &self.s3_output_path)
            .map("HookParameters", &self.hook_parameters)
            .list("CollectionConfigurations", &self.collection_configurations)
            .finish()
    }
}

/// A named tensor collection and its save settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option), build_fn(error = "ModelError"))]
#[serde(rename_all = "PascalCase", default)]
pub struct CollectionConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_parameters: Option<BTreeMap<String, String>>,
}

impl CollectionConfiguration {
    pub fn add_collection_parameters_entry(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<&mut Self, ModelError> {
        insert_entry(
            &mut self.collection_parameters,
            "CollectionParameters",
            key,
            value,
        )?;
        Ok(self)
    }

    pub fn clear_collection_parameters_entries(&mut self) -> &mut Self {
        self.collection_parameters = None;
        self
    }
}

impl fmt::Display for CollectionConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("CollectionName", &self.collection_name)
            .map("CollectionParameters", &self.collection_parameters)
            .finish()
    }
}

/// A rule evaluated against the debug output of a training job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option), build_fn(error = "ModelError"))]
#[serde(rename_all = "PascalCase", default)]
pub struct DebugRuleConfiguration {
    /// Length: 1 - 256.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_configuration_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_output_path: Option<String>,
    /// Elastic Container Registry image of the rule evaluator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_evaluator_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<ProcessingInstanceType>,
    /// Minimum: 0.
    #[serde(rename = "VolumeSizeInGB", skip_serializing_if = "Option::is_none")]
    pub volume_size_in_gb: Option<i32>,
    /// Up to 100 entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_parameters: Option<BTreeMap<String, String>>,
}

impl DebugRuleConfiguration {
    pub fn add_rule_parameters_entry(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<&mut Self, ModelError> {
        insert_entry(&mut self.rule_parameters, "RuleParameters", key, value)?;
        Ok(self)
    }

    pub fn clear_rule_parameters_entries(&mut self) -> &mut Self {
        self.rule_parameters = None;
        self
    }
}

impl fmt::Display for DebugRuleConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("RuleConfigurationName", &self.rule_configuration_name)
            .field("LocalPath", &self.local_path)
            .field("S3OutputPath", &self.s3_output_path)
            .field("RuleEvaluatorImage", &self.rule_evaluator_image)
            .field("InstanceType", &self.instance_type)
            .field("VolumeSizeInGB", &self.volume_size_in_gb)
            .map("RuleParameters", &self.rule_parameters)
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option), build_fn(error = "ModelError"))]
#[serde(rename_all = "PascalCase", default)]
pub struct DebugRuleEvaluationStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_configuration_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_evaluation_job_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_evaluation_status: Option<RuleEvaluationStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_details: Option<String>,
    #[serde(
        with = "crate::timestamp::epoch_seconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_modified_time: Option<DateTime<Utc>>,
}

impl fmt::Display for DebugRuleEvaluationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("RuleConfigurationName", &self.rule_configuration_name)
            .field("RuleEvaluationJobArn", &self.rule_evaluation_job_arn)
            .field("RuleEvaluationStatus", &self.rule_evaluation_status)
            .field("StatusDetails", &self.status_details)
            .field("LastModifiedTime", &self.last_modified_time)
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option), build_fn(error = "ModelError"))]
#[serde(rename_all = "PascalCase", default)]
pub struct TensorBoardOutputConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_output_path: Option<String>,
}

impl fmt::Display for TensorBoardOutputConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("LocalPath", &self.local_path)
            .field("S3OutputPath", &self.s3_output_path)
            .finish()
    }
}

list_appenders!(DebugHookConfig {
    add_collection_configurations => collection_configurations: CollectionConfiguration,
});
