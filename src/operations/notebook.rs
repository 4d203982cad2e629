//! Notebook instance lifecycle.

use std::fmt;

use chrono::{DateTime, Utc};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::display::ShapeFormatter;
use crate::entries::list_appenders;
use crate::enums::{
    DirectInternetAccess, InstanceType, NotebookInstanceAcceleratorType, NotebookInstanceStatus,
    RootAccess,
};
use crate::error::ModelError;
use crate::operation::operation;
use crate::types::tag::{taggable, Tag};

/// Launches an ML compute instance running Jupyter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option), build_fn(error = "ModelError"))]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateNotebookInstanceRequest {
    /// Length: up to 63. Pattern: `^[a-zA-Z0-9](-*[a-zA-Z0-9])*`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notebook_instance_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<InstanceType>,
    /// Subnet the instance's network interface is created in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet_id: Option<String>,
    /// Must belong to the VPC of `subnet_id`. Up to 5 entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_group_ids: Option<Vec<String>>,
    /// IAM role the instance assumes. Length: 20 - 2048.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifecycle_config_name: Option<String>,
    /// `Disabled` requires `subnet_id`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direct_internet_access: Option<DirectInternetAccess>,
    /// Range: 5 - 16384.
    #[serde(rename = "VolumeSizeInGB", skip_serializing_if = "Option::is_none")]
    pub volume_size_in_gb: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accelerator_types: Option<Vec<NotebookInstanceAcceleratorType>>,
    /// Git repository name or URL cloned when the instance starts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_code_repository: Option<String>,
    /// Up to 3 entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_code_repositories: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_access: Option<RootAccess>,
}

impl fmt::Display for CreateNotebookInstanceRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("NotebookInstanceName", &self.notebook_instance_name)
            .field("InstanceType", &self.instance_type)
            .field("SubnetId", &self.subnet_id)
            .list("SecurityGroupIds", &self.security_group_ids)
            .field("RoleArn", &self.role_arn)
            .field("KmsKeyId", &self.kms_key_id)
            .list("Tags", &self.tags)
            .field("LifecycleConfigName", &self.lifecycle_config_name)
            .field("DirectInternetAccess", &self.direct_internet_access)
            .field("VolumeSizeInGB", &self.volume_size_in_gb)
            .list("AcceleratorTypes", &self.accelerator_types)
            .field("DefaultCodeRepository", &self.default_code_repository)
            .list(
                "AdditionalCodeRepositories",
                &self.additional_code_repositories,
            )
            .field("RootAccess", &self.root_access)
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option), build_fn(error = "ModelError"))]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateNotebookInstanceResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notebook_instance_arn: Option<String>,
}

impl fmt::Display for CreateNotebookInstanceResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("NotebookInstanceArn", &self.notebook_instance_arn)
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option), build_fn(error = "ModelError"))]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeNotebookInstanceRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notebook_instance_name: Option<String>,
}

impl fmt::Display for DescribeNotebookInstanceRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("NotebookInstanceName", &self.notebook_instance_name)
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option), build_fn(error = "ModelError"))]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeNotebookInstanceResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notebook_instance_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notebook_instance_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notebook_instance_status: Option<NotebookInstanceStatus>,
    /// Set when the status is `Failed`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,
    /// URL used to connect to the Jupyter notebook.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<InstanceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_groups: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_interface_id: Option<String>,
    #[serde(
        with = "crate::timestamp::epoch_seconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_modified_time: Option<DateTime<Utc>>,
    #[serde(
        with = "crate::timestamp::epoch_seconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub creation_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notebook_instance_lifecycle_config_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direct_internet_access: Option<DirectInternetAccess>,
    #[serde(rename = "VolumeSizeInGB", skip_serializing_if = "Option::is_none")]
    pub volume_size_in_gb: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accelerator_types: Option<Vec<NotebookInstanceAcceleratorType>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_code_repository: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_code_repositories: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_access: Option<RootAccess>,
}

impl fmt::Display for DescribeNotebookInstanceResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("NotebookInstanceArn", &self.notebook_instance_arn)
            .field("NotebookInstanceName", &self.notebook_instance_name)
            .field("NotebookInstanceStatus", &self.notebook_instance_status)
            .field("FailureReason", &self.failure_reason)
            .field("Url", &self.url)
            .field("InstanceType", &self.instance_type)
            .field("SubnetId", &self.subnet_id)
            .list("SecurityGroups", &self.security_groups)
            .field("RoleArn", &self.role_arn)
            .field("KmsKeyId", &self.kms_key_id)
            .field("NetworkInterfaceId", &self.network_interface_id)
            .field("LastModifiedTime", &self.last_modified_time)
            .field("CreationTime", &self.creation_time)
            .field(
                "NotebookInstanceLifecycleConfigName",
                &self.notebook_instance_lifecycle_config_name,
            )
            .field("DirectInternetAccess", &self.direct_internet_access)
            .field("VolumeSizeInGB", &self.volume_size_in_gb)
            .list("AcceleratorTypes", &self.accelerator_types)
            .field("DefaultCodeRepository", &self.default_code_repository)
            .list(
                "AdditionalCodeRepositories",
                &self.additional_code_repositories,
            )
            .field("RootAccess", &self.root_access)
            .finish()
    }
}

/// Changes a stopped notebook instance. The `disassociate_*` flags remove
/// the matching setting instead of replacing it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option), build_fn(error = "ModelError"))]
#[serde(rename_all = "PascalCase", default)]
pub struct UpdateNotebookInstanceRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notebook_instance_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<InstanceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifecycle_config_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disassociate_lifecycle_config: Option<bool>,
    /// Can only grow. Range: 5 - 16384.
    #[serde(rename = "VolumeSizeInGB", skip_serializing_if = "Option::is_none")]
    pub volume_size_in_gb: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_code_repository: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_code_repositories: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accelerator_types: Option<Vec<NotebookInstanceAcceleratorType>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disassociate_accelerator_types: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disassociate_default_code_repository: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disassociate_additional_code_repositories: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_access: Option<RootAccess>,
}

impl fmt::Display for UpdateNotebookInstanceRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("NotebookInstanceName", &self.notebook_instance_name)
            .field("InstanceType", &self.instance_type)
            .field("RoleArn", &self.role_arn)
            .field("LifecycleConfigName", &self.lifecycle_config_name)
            .field(
                "DisassociateLifecycleConfig",
                &self.disassociate_lifecycle_config,
            )
            .field("VolumeSizeInGB", &self.volume_size_in_gb)
            .field("DefaultCodeRepository", &self.default_code_repository)
            .list(
                "AdditionalCodeRepositories",
                &self.additional_code_repositories,
            )
            .list("AcceleratorTypes", &self.accelerator_types)
            .field(
                "DisassociateAcceleratorTypes",
                &self.disassociate_accelerator_types,
            )
            .field(
                "DisassociateDefaultCodeRepository",
                &self.disassociate_default_code_repository,
            )
            .field(
                "DisassociateAdditionalCodeRepositories",
                &self.disassociate_additional_code_repositories,
            )
            .field("RootAccess", &self.root_access)
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option), build_fn(error = "ModelError"))]
#[serde(rename_all = "PascalCase", default)]
pub struct UpdateNotebookInstanceResult {}

impl fmt::Display for UpdateNotebookInstanceResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f).finish()
    }
}

// Start, stop and delete only name the instance and return nothing.
macro_rules! named_instance_operation {
    ($($request:ident => $result:ident),+ $(,)?) => {
        $(
            #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
            #[builder(default, setter(into, strip_option), build_fn(error = "ModelError"))]
            #[serde(rename_all = "PascalCase", default)]
            pub struct $request {
                #[serde(skip_serializing_if = "Option::is_none")]
                pub notebook_instance_name: Option<String>,
            }

            impl fmt::Display for $request {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    ShapeFormatter::new(f)
                        .field("NotebookInstanceName", &self.notebook_instance_name)
                        .finish()
                }
            }

            #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
            #[builder(default, setter(into, strip_option), build_fn(error = "ModelError"))]
            #[serde(rename_all = "PascalCase", default)]
            pub struct $result {}

            impl fmt::Display for $result {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    ShapeFormatter::new(f).finish()
                }
            }
        )+
    };
}

named_instance_operation!(
    StartNotebookInstanceRequest => StartNotebookInstanceResult,
    StopNotebookInstanceRequest => StopNotebookInstanceResult,
    DeleteNotebookInstanceRequest => DeleteNotebookInstanceResult,
);

taggable!(CreateNotebookInstanceRequest);

operation!(
    CreateNotebookInstanceRequest => CreateNotebookInstanceResult as "CreateNotebookInstance",
    DescribeNotebookInstanceRequest => DescribeNotebookInstanceResult as "DescribeNotebookInstance",
    UpdateNotebookInstanceRequest => UpdateNotebookInstanceResult as "UpdateNotebookInstance",
    StartNotebookInstanceRequest => StartNotebookInstanceResult as "StartNotebookInstance",
    StopNotebookInstanceRequest => StopNotebookInstanceResult as "StopNotebookInstance",
    DeleteNotebookInstanceRequest => DeleteNotebookInstanceResult as "DeleteNotebookInstance",
);

list_appenders!(CreateNotebookInstanceRequest {
    add_security_group_ids => security_group_ids: String,
    add_accelerator_types => accelerator_types: NotebookInstanceAcceleratorType,
    add_additional_code_repositories => additional_code_repositories: String,
});

list_appenders!(DescribeNotebookInstanceResult {
    add_security_groups => security_groups: String,
    add_accelerator_types => accelerator_types: NotebookInstanceAcceleratorType,
    add_additional_code_repositories => additional_code_repositories: String,
});

list_appenders!(UpdateNotebookInstanceRequest {
    add_additional_code_repositories => additional_code_repositories: String,
    add_accelerator_types => accelerator_types: NotebookInstanceAcceleratorType,
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operation::Operation;
    use crate::types::tag::Taggable;
    use chrono::TimeZone;

    fn make_create() -> CreateNotebookInstanceRequest {
        CreateNotebookInstanceRequestBuilder::default()
            .notebook_instance_name("research")
            .instance_type(InstanceType::MlT3Medium)
            .role_arn("arn:aws:iam::123456789012:role/notebook")
            .volume_size_in_gb(20)
            .accelerator_types(vec![NotebookInstanceAcceleratorType::MlEia1Medium])
            .root_access(RootAccess::Disabled)
            .build()
            .unwrap()
    }

    #[test]
    fn test_create_wire_form() {
        let mut request = make_create();
        request.add_tag("owner", "data-science");
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({
                "NotebookInstanceName": "research",
                "InstanceType": "ml.t3.medium",
                "RoleArn": "arn:aws:iam::123456789012:role/notebook",
                "Tags": [{"Key": "owner", "Value": "data-science"}],
                "VolumeSizeInGB": 20,
                "AcceleratorTypes": ["ml.eia1.medium"],
                "RootAccess": "Disabled"
            })
        );
    }

    #[test]
    fn test_create_display_lists_present_members() {
        assert_eq!(
            make_create().to_string(),
            "{NotebookInstanceName: research,InstanceType: ml.t3.medium,\
             RoleArn: arn:aws:iam::123456789012:role/notebook,VolumeSizeInGB: 20,\
             AcceleratorTypes: [ml.eia1.medium],RootAccess: Disabled}"
        );
    }

    #[test]
    fn test_describe_result_from_service() {
        let result: DescribeNotebookInstanceResult = serde_json::from_str(
            r#"{
                "NotebookInstanceName": "research",
                "NotebookInstanceStatus": "InService",
                "Url": "research.notebook.us-east-1.sagemaker.aws",
                "InstanceType": "ml.t3.medium",
                "CreationTime": 1583064000,
                "DirectInternetAccess": "Enabled",
                "VolumeSizeInGB": 5
            }"#,
        )
        .unwrap();
        assert_eq!(
            result.notebook_instance_status,
            Some(NotebookInstanceStatus::InService)
        );
        assert_eq!(
            result.creation_time,
            Some(Utc.with_ymd_and_hms(2020, 3, 1, 12, 0, 0).unwrap())
        );
        assert_eq!(result.volume_size_in_gb, Some(5));
        assert_eq!(result.failure_reason, None);
    }

    #[test]
    fn test_update_disassociate_flags() {
        let request = UpdateNotebookInstanceRequestBuilder::default()
            .notebook_instance_name("research")
            .disassociate_lifecycle_config(true)
            .build()
            .unwrap();
        assert_eq!(
            request.to_string(),
            "{NotebookInstanceName: research,DisassociateLifecycleConfig: true}"
        );
    }

    #[test]
    fn test_named_instance_operations() {
        let stop = StopNotebookInstanceRequestBuilder::default()
            .notebook_instance_name("research")
            .build()
            .unwrap();
        assert_eq!(stop.to_string(), "{NotebookInstanceName: research}");
        assert_eq!(
            StopNotebookInstanceRequest::target(),
            "SageMaker.StopNotebookInstance"
        );
        assert_eq!(
            DeleteNotebookInstanceRequest::target(),
            "SageMaker.DeleteNotebookInstance"
        );
        assert_eq!(StartNotebookInstanceResult::default().to_string(), "{}");
    }

    #[test]
    fn test_equal_requests_hash_alike() {
        use std::collections::HashSet;
        let mut seen = HashSet::new();
        seen.insert(make_create());
        assert!(seen.contains(&make_create()));
        let mut other = make_create();
        other.root_access = Some(RootAccess::Enabled);
        assert!(!seen.contains(&other));
    }

    #[test]
    fn test_append_notebook_lists() {
        let mut create = CreateNotebookInstanceRequest::default();
        create
            .add_security_group_ids(["sg-1"])
            .add_accelerator_types(["ml.eia1.medium"])
            .add_additional_code_repositories(["https://example.com/a.git"])
            .add_additional_code_repositories(["https://example.com/b.git"]);
        assert_eq!(create.security_group_ids, Some(vec!["sg-1".to_string()]));
        assert_eq!(
            create.accelerator_types,
            Some(vec![NotebookInstanceAcceleratorType::MlEia1Medium])
        );
        assert_eq!(create.additional_code_repositories.map(|r| r.len()), Some(2));

        let mut update = UpdateNotebookInstanceRequest::default();
        update.add_accelerator_types([NotebookInstanceAcceleratorType::MlEia1Large]);
        update.add_additional_code_repositories(["repo"]);
        assert_eq!(update.additional_code_repositories, Some(vec!["repo".to_string()]));
        assert_eq!(update.accelerator_types.map(|a| a.len()), Some(1));

        let mut describe = DescribeNotebookInstanceResult::default();
        describe.add_security_groups(["sg-2"]);
        describe.add_accelerator_types(["ml.eia1.medium"]);
        describe.add_additional_code_repositories(["repo"]);
        assert_eq!(describe.security_groups, Some(vec!["sg-2".to_string()]));
        assert_eq!(describe.accelerator_types.map(|a| a.len()), Some(1));
        assert_eq!(describe.additional_code_repositories.map(|r| r.len()), Some(1));
    }
}
