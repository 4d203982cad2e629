use std::fmt;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::display::ShapeFormatter;
use crate::entries::list_appenders;
use crate::error::ModelError;
use crate::operation::operation;
use crate::types::tag::{taggable, Tag};
use crate::types::tuning::{HyperParameterTrainingJobDefinition, HyperParameterTuningJobConfig};

/// Starts a hyperparameter tuning job.
///
/// Either `training_job_definition` or `training_job_definitions` describes
/// the trials; the latter tunes several algorithms at once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option), build_fn(error = "ModelError"))]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateHyperParameterTuningJobRequest {
    /// Length: 1 - 32.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hyper_parameter_tuning_job_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hyper_parameter_tuning_job_config: Option<HyperParameterTuningJobConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub training_job_definition: Option<HyperParameterTrainingJobDefinition>,
    /// 1 - 10 entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub training_job_definitions: Option<Vec<HyperParameterTrainingJobDefinition>>,
    /// Propagated to every training job the tuning job launches.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl fmt::Display for CreateHyperParameterTuningJobRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field(
                "HyperParameterTuningJobName",
                &self.hyper_parameter_tuning_job_name,
            )
            .field(
                "HyperParameterTuningJobConfig",
                &self.hyper_parameter_tuning_job_config,
            )
            .field("TrainingJobDefinition", &self.training_job_definition)
            .list("TrainingJobDefinitions", &self.training_job_definitions)
            .list("Tags", &self.tags)
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option), build_fn(error = "ModelError"))]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateHyperParameterTuningJobResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hyper_parameter_tuning_job_arn: Option<String>,
}

impl fmt::Display for CreateHyperParameterTuningJobResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field(
                "HyperParameterTuningJobArn",
                &self.hyper_parameter_tuning_job_arn,
            )
            .finish()
    }
}

taggable!(CreateHyperParameterTuningJobRequest);

operation!(
    CreateHyperParameterTuningJobRequest => CreateHyperParameterTuningJobResult
        as "CreateHyperParameterTuningJob",
);

list_appenders!(CreateHyperParameterTuningJobRequest {
    add_training_job_definitions => training_job_definitions: HyperParameterTrainingJobDefinition,
});
