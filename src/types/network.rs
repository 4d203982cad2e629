use std::fmt;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::display::ShapeFormatter;
use crate::entries::list_appenders;
use crate::error::ModelError;

/// The VPC that hosted models, training jobs and monitoring jobs connect to.
///
/// Controls access to and from the job's ML storage volumes and network
/// interfaces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option), build_fn(error = "ModelError"))]
#[serde(rename_all = "PascalCase", default)]
pub struct VpcConfig {
    /// Security group IDs in the form `sg-xxxxxxxx`, 1 - 5 entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_group_ids: Option<Vec<String>>,
    /// Subnet IDs, 1 - 16 entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnets: Option<Vec<String>>,
}

impl fmt::Display for VpcConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .list("SecurityGroupIds", &self.security_group_ids)
            .list("Subnets", &self.subnets)
            .finish()
    }
}

/// Networking options for monitoring and processing jobs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option), build_fn(error = "ModelError"))]
#[serde(rename_all = "PascalCase", default)]
pub struct NetworkConfig {
    /// Encrypts traffic between the instances of a distributed job.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_inter_container_traffic_encryption: Option<bool>,
    /// Disallows inbound and outbound network calls from the job container.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_network_isolation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_config: Option<VpcConfig>,
}

impl fmt::Display for NetworkConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field(
                "EnableInterContainerTrafficEncryption",
                &self.enable_inter_container_traffic_encryption,
            )
            .field("EnableNetworkIsolation", &self.enable_network_isolation)
            .field("VpcConfig", &self.vpc_config)
            .finish()
    }
}

list_appenders!(VpcConfig {
    add_security_group_ids => security_group_ids: String,
    add_subnets => subnets: String,
});

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    fn make_vpc(subnets: &[&str]) -> VpcConfig {
        VpcConfigBuilder::default()
            .security_group_ids(vec!["sg-0123".to_string()])
            .subnets(subnets.iter().map(|s| s.to_string()).collect::<Vec<_>>())
            .build()
            .unwrap()
    }

    #[test]
    fn test_structural_equality_and_hash() {
        let a = make_vpc(&["subnet-a", "subnet-b"]);
        let b = make_vpc(&["subnet-a", "subnet-b"]);
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));

        let c = make_vpc(&["subnet-a"]);
        assert_ne!(a, c);
    }

    #[test]
    fn test_empty_list_differs_from_absent_list() {
        let mut empty = VpcConfig::default();
        empty.subnets = Some(vec![]);
        assert_ne!(empty, VpcConfig::default());
        assert_eq!(empty.to_string(), "{Subnets: []}");
    }

    #[test]
    fn test_nested_display() {
        let network = NetworkConfigBuilder::default()
            .enable_network_isolation(true)
            .vpc_config(make_vpc(&["subnet-a"]))
            .build()
            .unwrap();
        assert_eq!(
            network.to_string(),
            "{EnableNetworkIsolation: true,VpcConfig: {SecurityGroupIds: [sg-0123],Subnets: [subnet-a]}}"
        );
    }

    #[test]
    fn test_deserialize_partial_document() {
        let network: NetworkConfig = serde_json::from_str(
            r#"{"EnableNetworkIsolation": false, "VpcConfig": {"Subnets": ["subnet-1"]}}"#,
        )
        .unwrap();
        assert_eq!(network.enable_network_isolation, Some(false));
        assert_eq!(network.enable_inter_container_traffic_encryption, None);
        let vpc = network.vpc_config.unwrap();
        assert_eq!(vpc.subnets, Some(vec!["subnet-1".to_string()]));
        assert_eq!(vpc.security_group_ids, None);
    }

    #[test]
    fn test_append_allocates_lists() {
        let mut vpc = VpcConfig::default();
        vpc.add_subnets(["subnet-1"]).add_subnets(["subnet-2"]);
        vpc.add_security_group_ids(vec!["sg-1".to_string()]);
        assert_eq!(
            vpc.subnets,
            Some(vec!["subnet-1".to_string(), "subnet-2".to_string()])
        );
        assert_eq!(vpc.security_group_ids, Some(vec!["sg-1".to_string()]));
    }
}
