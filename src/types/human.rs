//! Shapes describing work handed to human workers: labeling tasks and
//! human review loops.

use std::fmt;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::display::ShapeFormatter;
use crate::entries::list_appenders;
use crate::enums::AwsManagedHumanLoopRequestSource;
use crate::error::ModelError;
use crate::types::pricing::PublicWorkforceTaskPrice;

/// Where the worker task template lives.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option), build_fn(error = "ModelError"))]
#[serde(rename_all = "PascalCase", default)]
pub struct UiConfig {
    /// S3 location of the Liquid template shown to workers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ui_template_s3_uri: Option<String>,
    /// ARN of a worker task template created with `CreateHumanTaskUi`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub human_task_ui_arn: Option<String>,
}

impl fmt::Display for UiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("UiTemplateS3Uri", &self.ui_template_s3_uri)
            .field("HumanTaskUiArn", &self.human_task_ui_arn)
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option), build_fn(error = "ModelError"))]
#[serde(rename_all = "PascalCase", default)]
pub struct AnnotationConsolidationConfig {
    /// Lambda that merges the annotations of several workers into one label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotation_consolidation_lambda_arn: Option<String>,
}

impl fmt::Display for AnnotationConsolidationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field(
                "AnnotationConsolidationLambdaArn",
                &self.annotation_consolidation_lambda_arn,
            )
            .finish()
    }
}

/// Information required for human workers to complete a labeling task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option), build_fn(error = "ModelError"))]
#[serde(rename_all = "PascalCase", default)]
pub struct HumanTaskConfig {
    /// ARN of the work team assigned to the task. Length: up to 256.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workteam_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ui_config: Option<UiConfig>,
    /// Lambda run before a data object is sent to a worker. It prepares the
    /// object for the task template. Length: up to 2048.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_human_task_lambda_arn: Option<String>,
    /// Keywords that help workers find the task, 1 - 5 entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_keywords: Option<Vec<String>>,
    /// Length: 1 - 128.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_title: Option<String>,
    /// Length: 1 - 255.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_description: Option<String>,
    /// Range: 1 - 9.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_human_workers_per_data_object: Option<i32>,
    /// Range: 30 - 28800.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_time_limit_in_seconds: Option<i32>,
    /// How long a task stays available to workers. Range: 60 - 864000.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_availability_lifetime_in_seconds: Option<i32>,
    /// Range: 1 - 1000.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_concurrent_task_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotation_consolidation_config: Option<AnnotationConsolidationConfig>,
    /// Only used with the public (Mechanical Turk) workforce.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_workforce_task_price: Option<PublicWorkforceTaskPrice>,
}

impl fmt::Display for HumanTaskConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("WorkteamArn", &self.workteam_arn)
            .field("UiConfig", &self.ui_config)
            .field("PreHumanTaskLambdaArn", &self.pre_human_task_lambda_arn)
            .list("TaskKeywords", &self.task_keywords)
            .field("TaskTitle", &self.task_title)
            .field("TaskDescription", &self.task_description)
            .field(
                "NumberOfHumanWorkersPerDataObject",
                &self.number_of_human_workers_per_data_object,
            )
            .field("TaskTimeLimitInSeconds", &self.task_time_limit_in_seconds)
            .field(
                "TaskAvailabilityLifetimeInSeconds",
                &self.task_availability_lifetime_in_seconds,
            )
            .field("MaxConcurrentTaskCount", &self.max_concurrent_task_count)
            .field(
                "AnnotationConsolidationConfig",
                &self.annotation_consolidation_config,
            )
            .field("PublicWorkforceTaskPrice", &self.public_workforce_task_price)
            .finish()
    }
}

/// How a human review loop presents its tasks to workers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option), build_fn(error = "ModelError"))]
#[serde(rename_all = "PascalCase", default)]
pub struct HumanLoopConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workteam_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub human_task_ui_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_description: Option<String>,
    /// Number of distinct workers that review each object. Range: 1 - 3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_count: Option<i32>,
    /// Range: 1 - 864000.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_availability_lifetime_in_seconds: Option<i32>,
    /// Range: 30 - 28800.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_time_limit_in_seconds: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_keywords: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_workforce_task_price: Option<PublicWorkforceTaskPrice>,
}

impl fmt::Display for HumanLoopConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("WorkteamArn", &self.workteam_arn)
            .field("HumanTaskUiArn", &self.human_task_ui_arn)
            .field("TaskTitle", &self.task_title)
            .field("TaskDescription", &self.task_description)
            .field("TaskCount", &self.task_count)
            .field(
                "TaskAvailabilityLifetimeInSeconds",
                &self.task_availability_lifetime_in_seconds,
            )
            .field("TaskTimeLimitInSeconds", &self.task_time_limit_in_seconds)
            .list("TaskKeywords", &self.task_keywords)
            .field("PublicWorkforceTaskPrice", &self.public_workforce_task_price)
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option), build_fn(error = "ModelError"))]
#[serde(rename_all = "PascalCase", default)]
pub struct HumanLoopRequestSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aws_managed_human_loop_request_source: Option<AwsManagedHumanLoopRequestSource>,
}

impl fmt::Display for HumanLoopRequestSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field(
                "AwsManagedHumanLoopRequestSource",
                &self.aws_managed_human_loop_request_source,
            )
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option), build_fn(error = "ModelError"))]
#[serde(rename_all = "PascalCase", default)]
pub struct HumanLoopActivationConditionsConfig {
    /// JSON document describing when a human loop starts. Kept verbatim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub human_loop_activation_conditions: Option<String>,
}

impl fmt::Display for HumanLoopActivationConditionsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field(
                "HumanLoopActivationConditions",
                &self.human_loop_activation_conditions,
            )
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option), build_fn(error = "ModelError"))]
#[serde(rename_all = "PascalCase", default)]
pub struct HumanLoopActivationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub human_loop_activation_conditions_config: Option<HumanLoopActivationConditionsConfig>,
}

impl fmt::Display for HumanLoopActivationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field(
                "HumanLoopActivationConditionsConfig",
                &self.human_loop_activation_conditions_config,
            )
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option), build_fn(error = "ModelError"))]
#[serde(rename_all = "PascalCase", default)]
pub struct FlowDefinitionOutputConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_output_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,
}

impl fmt::Display for FlowDefinitionOutputConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("S3OutputPath", &self.s3_output_path)
            .field("KmsKeyId", &self.kms_key_id)
            .finish()
    }
}

list_appenders!(HumanTaskConfig {
    add_task_keywords => task_keywords: String,
});

list_appenders!(HumanLoopConfig {
    add_task_keywords => task_keywords: String,
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::pricing::UsdBuilder;

    fn make_task_config() -> HumanTaskConfig {
        HumanTaskConfigBuilder::default()
            .workteam_arn("arn:aws:sagemaker:us-east-1:394669845002:workteam/public-crowd/default")
            .ui_config(
                UiConfigBuilder::default()
                    .ui_template_s3_uri("s3://bucket/template.liquid")
                    .build()
                    .unwrap(),
            )
            .task_keywords(vec!["images".to_string(), "labeling".to_string()])
            .task_title("Label the image")
            .number_of_human_workers_per_data_object(3)
            .task_time_limit_in_seconds(300)
            .public_workforce_task_price(PublicWorkforceTaskPrice {
                amount_in_usd: Some(UsdBuilder::default().cents(1).build().unwrap()),
            })
            .build()
            .unwrap()
    }

    #[test]
    fn test_display_lists_present_members_in_order() {
        let rendered = make_task_config().to_string();
        assert_eq!(
            rendered,
            "{WorkteamArn: arn:aws:sagemaker:us-east-1:394669845002:workteam/public-crowd/default,\
             UiConfig: {UiTemplateS3Uri: s3://bucket/template.liquid},\
             TaskKeywords: [images, labeling],\
             TaskTitle: Label the image,\
             NumberOfHumanWorkersPerDataObject: 3,\
             TaskTimeLimitInSeconds: 300,\
             PublicWorkforceTaskPrice: {AmountInUsd: {Cents: 1}}}"
        );
        assert!(!rendered.contains("TaskDescription"));
    }

    #[test]
    fn test_round_trip_through_json() {
        let config = make_task_config();
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"NumberOfHumanWorkersPerDataObject\":3"));
        assert!(json.contains("\"UiTemplateS3Uri\""));
        assert!(!json.contains("MaxConcurrentTaskCount"));
        let back: HumanTaskConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_request_source_uses_enum_wire_value() {
        let source = HumanLoopRequestSourceBuilder::default()
            .aws_managed_human_loop_request_source(
                AwsManagedHumanLoopRequestSource::TextractAnalyzeDocumentFormsV1,
            )
            .build()
            .unwrap();
        assert_eq!(
            serde_json::to_value(&source).unwrap(),
            serde_json::json!({
                "AwsManagedHumanLoopRequestSource": "AWS/Textract/AnalyzeDocument/Forms/V1"
            })
        );
    }

    #[test]
    fn test_loop_config_members_differ() {
        let a = HumanLoopConfigBuilder::default().task_count(1).build().unwrap();
        let b = HumanLoopConfigBuilder::default().task_count(2).build().unwrap();
        assert_ne!(a, b);
        let mut c = b.clone();
        c.task_count = Some(1);
        assert_eq!(a, c);
    }

    #[test]
    fn test_append_task_keywords() {
        let mut task = HumanTaskConfig::default();
        task.add_task_keywords(["images"]);
        task.add_task_keywords(["labeling"]);
        assert_eq!(
            task.task_keywords,
            Some(vec!["images".to_string(), "labeling".to_string()])
        );

        let mut lp = HumanLoopConfig::default();
        assert_eq!(lp.task_keywords, None);
        lp.add_task_keywords(["review"]);
        assert_eq!(lp.task_keywords, Some(vec!["review".to_string()]));
        assert_eq!(lp.to_string(), "{TaskKeywords: [review]}");
    }
}
