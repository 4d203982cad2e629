use std::fmt;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::display::ShapeFormatter;
use crate::error::ModelError;
use crate::operation::operation;
use crate::types::monitoring::MonitoringScheduleConfig;
use crate::types::tag::{taggable, Tag};

/// Schedules recurring monitoring jobs against an endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option), build_fn(error = "ModelError"))]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateMonitoringScheduleRequest {
    /// Unique per account and region. Length: 1 - 63.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitoring_schedule_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitoring_schedule_config: Option<MonitoringScheduleConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl fmt::Display for CreateMonitoringScheduleRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("MonitoringScheduleName", &self.monitoring_schedule_name)
            .field("MonitoringScheduleConfig", &self.monitoring_schedule_config)
            .list("Tags", &self.tags)
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option), build_fn(error = "ModelError"))]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateMonitoringScheduleResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitoring_schedule_arn: Option<String>,
}

impl fmt::Display for CreateMonitoringScheduleResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("MonitoringScheduleArn", &self.monitoring_schedule_arn)
            .finish()
    }
}

taggable!(CreateMonitoringScheduleRequest);

operation!(
    CreateMonitoringScheduleRequest => CreateMonitoringScheduleResult as "CreateMonitoringSchedule",
);
