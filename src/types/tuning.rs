//! Hyperparameter tuning: the search space, the objective and the training
//! job template each trial is launched from.

use std::collections::BTreeMap;
use std::fmt;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::display::ShapeFormatter;
use crate::entries::{insert_entry, list_appenders};
use crate::enums::{
    HyperParameterScalingType, HyperParameterTuningJobObjectiveType,
    HyperParameterTuningJobStrategyType, TrainingInputMode, TrainingJobEarlyStoppingType,
};
use crate::error::ModelError;
use crate::types::network::VpcConfig;
use crate::types::training::{
    Channel, CheckpointConfig, MetricDefinition, OutputDataConfig, ResourceConfig,
    StoppingCondition,
};

/// The metric a tuning job optimizes and in which direction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option), build_fn(error = "ModelError"))]
#[serde(rename_all = "PascalCase", default)]
pub struct HyperParameterTuningJobObjective {
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub objective_type: Option<HyperParameterTuningJobObjectiveType>,
    /// Must match the name of one of the algorithm's metric definitions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric_name: Option<String>,
}

impl fmt::Display for HyperParameterTuningJobObjective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("Type", &self.objective_type)
            .field("MetricName", &self.metric_name)
            .finish()
    }
}

/// An integer hyperparameter searched between two bounds.
///
/// Bounds travel as strings, exactly as the algorithm receives them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option), build_fn(error = "ModelError"))]
#[serde(rename_all = "PascalCase", default)]
pub struct IntegerParameterRange {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scaling_type: Option<HyperParameterScalingType>,
}

impl fmt::Display for IntegerParameterRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("Name", &self.name)
            .field("MinValue", &self.min_value)
            .field("MaxValue", &self.max_value)
            .field("ScalingType", &self.scaling_type)
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option), build_fn(error = "ModelError"))]
#[serde(rename_all = "PascalCase", default)]
pub struct ContinuousParameterRange {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_value: Option<String>,
    /// `ReverseLogarithmic` is only valid for ranges inside `[0, 1)`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scaling_type: Option<HyperParameterScalingType>,
}

impl fmt::Display for ContinuousParameterRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("Name", &self.name)
            .field("MinValue", &self.min_value)
            .field("MaxValue", &self.max_value)
            .field("ScalingType", &self.scaling_type)
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option), build_fn(error = "ModelError"))]
#[serde(rename_all = "PascalCase", default)]
pub struct CategoricalParameterRange {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// 1 - 20 entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
}

impl fmt::Display for CategoricalParameterRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("Name", &self.name)
            .list("Values", &self.values)
            .finish()
    }
}

/// The search space of a tuning job. At most 20 ranges in total.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option), build_fn(error = "ModelError"))]
#[serde(rename_all = "PascalCase", default)]
pub struct ParameterRanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integer_parameter_ranges: Option<Vec<IntegerParameterRange>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub continuous_parameter_ranges: Option<Vec<ContinuousParameterRange>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categorical_parameter_ranges: Option<Vec<CategoricalParameterRange>>,
}

impl ParameterRanges {
    /// Number of ranges across all three kinds.
    pub fn len(&self) -> usize {
        self.integer_parameter_ranges.as_ref().map_or(0, Vec::len)
            + self.continuous_parameter_ranges.as_ref().map_or(0, Vec::len)
            + self.categorical_parameter_ranges.as_ref().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for ParameterRanges {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .list("IntegerParameterRanges", &self.integer_parameter_ranges)
            .list("ContinuousParameterRanges", &self.continuous_parameter_ranges)
            .list("CategoricalParameterRanges", &self.categorical_parameter_ranges)
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option), build_fn(error = "ModelError"))]
#[serde(rename_all = "PascalCase", default)]
pub struct HyperParameterAlgorithmSpecification {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub training_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub training_input_mode: Option<TrainingInputMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub algorithm_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric_definitions: Option<Vec<MetricDefinition>>,
}

impl fmt::Display for HyperParameterAlgorithmSpecification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("TrainingImage", &self.training_image)
            .field("TrainingInputMode", &self.training_input_mode)
            .field("AlgorithmName", &self.algorithm_name)
            .list("MetricDefinitions", &self.metric_definitions)
            .finish()
    }
}

/// The template for the training jobs a tuning job launches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option), build_fn(error = "ModelError"))]
#[serde(rename_all = "PascalCase", default)]
pub struct HyperParameterTrainingJobDefinition {
    /// Length: 1 - 64.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tuning_objective: Option<HyperParameterTuningJobObjective>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hyper_parameter_ranges: Option<ParameterRanges>,
    /// Hyperparameters that stay fixed across every trial.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub static_hyper_parameters: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub algorithm_specification: Option<HyperParameterAlgorithmSpecification>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_data_config: Option<Vec<Channel>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_config: Option<VpcConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_data_config: Option<OutputDataConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_config: Option<ResourceConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stopping_condition: Option<StoppingCondition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_network_isolation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_inter_container_traffic_encryption: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_managed_spot_training: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checkpoint_config: Option<CheckpointConfig>,
}

impl HyperParameterTrainingJobDefinition {
    pub fn add_static_hyper_parameters_entry(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<&mut Self, ModelError> {
        insert_entry(
            &mut self.static_hyper_parameters,
            "StaticHyperParameters",
            key,
            value,
        )?;
        Ok(self)
    }

    pub fn clear_static_hyper_parameters_entries(&mut self) -> &mut Self {
        self.static_hyper_parameters = None;
        self
    }
}

impl fmt::Display for HyperParameterTrainingJobDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("DefinitionName", &self.definition_name)
            .field("TuningObjective", &self.tuning_objective)
            .field("HyperParameterRanges", &self.hyper_parameter_ranges)
            .map("StaticHyperParameters", &self.static_hyper_parameters)
            .field("AlgorithmSpecification", &self.algorithm_specification)
            .field("RoleArn", &self.role_arn)
            .list("InputDataConfig", &self.input_data_config)
            .field("VpcConfig", &self.vpc_config)
            .field("OutputDataConfig", &self.output_data_config)
            .field("ResourceConfig", &self.resource_config)
            .field("StoppingCondition", &self.stopping_condition)
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
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option), build_fn(error = "ModelError"))]
#[serde(rename_all = "PascalCase", default)]
pub struct ResourceLimits {
    /// Minimum: 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_number_of_training_jobs: Option<i32>,
    /// Minimum: 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_parallel_training_jobs: Option<i32>,
}

impl fmt::Display for ResourceLimits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("MaxNumberOfTrainingJobs", &self.max_number_of_training_jobs)
            .field("MaxParallelTrainingJobs", &self.max_parallel_training_jobs)
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option), build_fn(error = "ModelError"))]
#[serde(rename_all = "PascalCase", default)]
pub struct HyperParameterTuningJobConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy: Option<HyperParameterTuningJobStrategyType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hyper_parameter_tuning_job_objective: Option<HyperParameterTuningJobObjective>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_limits: Option<ResourceLimits>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter_ranges: Option<ParameterRanges>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub training_job_early_stopping_type: Option<TrainingJobEarlyStoppingType>,
}

impl fmt::Display for HyperParameterTuningJobConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("Strategy", &self.strategy)
            .field(
                "HyperParameterTuningJobObjective",
                &self.hyper_parameter_tuning_job_objective,
            )
            .field("ResourceLimits", &self.resource_limits)
            .field("ParameterRanges", &self.parameter_ranges)
            .field(
                "TrainingJobEarlyStoppingType",
                &self.training_job_early_stopping_type,
            )
            .finish()
    }
}

list_appenders!(CategoricalParameterRange {
    add_values => values: String,
});

list_appenders!(ParameterRanges {
    add_integer_parameter_ranges => integer_parameter_ranges: IntegerParameterRange,
    add_continuous_parameter_ranges => continuous_parameter_ranges: ContinuousParameterRange,
    add_categorical_parameter_ranges => categorical_parameter_ranges: CategoricalParameterRange,
});

list_appenders!(HyperParameterAlgorithmSpecification {
    add_metric_definitions => metric_definitions: MetricDefinition,
});

list_appenders!(HyperParameterTrainingJobDefinition {
    add_input_data_config => input_data_config: Channel,
});

#[cfg(test)]
mod tests {
    use super::*;

    fn make_ranges() -> ParameterRanges {
        ParameterRangesBuilder::default()
            .integer_parameter_ranges(vec![IntegerParameterRangeBuilder::default()
                .name("max_depth")
                .min_value("3")
                .max_value("10")
                .build()
                .unwrap()])
            .continuous_parameter_ranges(vec![ContinuousParameterRangeBuilder::default()
                .name("eta")
                .min_value("0.01")
                .max_value("0.5")
                .scaling_type(HyperParameterScalingType::Logarithmic)
                .build()
                .unwrap()])
            .build()
            .unwrap()
    }

    #[test]
    fn test_range_count() {
        assert_eq!(make_ranges().len(), 2);
        assert!(ParameterRanges::default().is_empty());
    }

    #[test]
    fn test_objective_type_wire_name() {
        let objective = HyperParameterTuningJobObjectiveBuilder::default()
            .objective_type(HyperParameterTuningJobObjectiveType::Maximize)
            .metric_name("validation:auc")
            .build()
            .unwrap();
        assert_eq!(
            serde_json::to_value(&objective).unwrap(),
            serde_json::json!({"Type": "Maximize", "MetricName": "validation:auc"})
        );
        assert_eq!(
            objective.to_string(),
            "{Type: Maximize,MetricName: validation:auc}"
        );
    }

    #[test]
    fn test_tuning_config_display() {
        let config = HyperParameterTuningJobConfigBuilder::default()
            .strategy(HyperParameterTuningJobStrategyType::Bayesian)
            .resource_limits(
                ResourceLimitsBuilder::default()
                    .max_number_of_training_jobs(20)
                    .max_parallel_training_jobs(3)
                    .build()
                    .unwrap(),
            )
            .parameter_ranges(make_ranges())
            .build()
            .unwrap();
        assert_eq!(
            config.to_string(),
            "{Strategy: Bayesian,\
             ResourceLimits: {MaxNumberOfTrainingJobs: 20,MaxParallelTrainingJobs: 3},\
             ParameterRanges: {IntegerParameterRanges: [{Name: max_depth,MinValue: 3,MaxValue: 10}],\
             ContinuousParameterRanges: [{Name: eta,MinValue: 0.01,MaxValue: 0.5,ScalingType: Logarithmic}]}}"
        );
    }

    #[test]
    fn test_static_hyper_parameters() {
        let mut definition = HyperParameterTrainingJobDefinitionBuilder::default()
            .definition_name("xgb")
            .build()
            .unwrap();
        definition
            .add_static_hyper_parameters_entry("objective", "binary:logistic")
            .unwrap()
            .add_static_hyper_parameters_entry("num_round", "100")
            .unwrap();
        let err = definition
            .add_static_hyper_parameters_entry("objective", "reg:linear")
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Duplicated keys (objective) are provided for StaticHyperParameters"
        );
        let json = serde_json::to_value(&definition).unwrap();
        assert_eq!(
            json["StaticHyperParameters"],
            serde_json::json!({"num_round": "100", "objective": "binary:logistic"})
        );
    }

    #[test]
    fn test_categorical_values_round_trip() {
        let range: CategoricalParameterRange =
            serde_json::from_str(r#"{"Name": "booster", "Values": ["gbtree", "dart"]}"#).unwrap();
        assert_eq!(range.to_string(), "{Name: booster,Values: [gbtree, dart]}");
    }

    #[test]
    fn test_append_ranges_and_definitions() {
        let mut category = CategoricalParameterRange::default();
        category.add_values(["gbtree"]).add_values(["dart"]);
        assert_eq!(
            category.values,
            Some(vec!["gbtree".to_string(), "dart".to_string()])
        );

        let mut ranges = ParameterRanges::default();
        ranges.add_categorical_parameter_ranges([category.clone()]);
        ranges.add_integer_parameter_ranges([IntegerParameterRange::default()]);
        assert_eq!(ranges.categorical_parameter_ranges, Some(vec![category]));
        assert_eq!(ranges.continuous_parameter_ranges, None);
        ranges.add_continuous_parameter_ranges([ContinuousParameterRange::default()]);
        assert_eq!(ranges.len(), 3);

        let mut algorithm = HyperParameterAlgorithmSpecification::default();
        algorithm.add_metric_definitions([MetricDefinition::default()]);
        assert_eq!(algorithm.metric_definitions.map(|m| m.len()), Some(1));

        let mut definition = HyperParameterTrainingJobDefinition::default();
        definition
            .add_input_data_config([Channel::default()])
            .add_input_data_config([Channel::default()]);
        assert_eq!(definition.input_data_config.map(|c| c.len()), Some(2));
    }
}
