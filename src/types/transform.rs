//! Batch transform input, output and compute settings.

use std::fmt;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::display::ShapeFormatter;
use crate::enums::{
    AssemblyType, CompressionType, JoinSource, S3DataType, SplitType, TransformInstanceType,
};
use crate::error::ModelError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option), build_fn(error = "ModelError"))]
#[serde(rename_all = "PascalCase", default)]
pub struct TransformS3DataSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_data_type: Option<S3DataType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_uri: Option<String>,
}

impl fmt::Display for TransformS3DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("S3DataType", &self.s3_data_type)
            .field("S3Uri", &self.s3_uri)
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option), build_fn(error = "ModelError"))]
#[serde(rename_all = "PascalCase", default)]
pub struct TransformDataSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_data_source: Option<TransformS3DataSource>,
}

impl fmt::Display for TransformDataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("S3DataSource", &self.s3_data_source)
            .finish()
    }
}

/// The data a transform job reads and how it is split into records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option), build_fn(error = "ModelError"))]
#[serde(rename_all = "PascalCase", default)]
pub struct TransformInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_source: Option<TransformDataSource>,
    /// MIME type sent to the model with each request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compression_type: Option<CompressionType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub split_type: Option<SplitType>,
}

impl fmt::Display for TransformInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("DataSource", &self.data_source)
            .field("ContentType", &self.content_type)
            .field("CompressionType", &self.compression_type)
            .field("SplitType", &self.split_type)
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option), build_fn(error = "ModelError"))]
#[serde(rename_all = "PascalCase", default)]
pub struct TransformOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_output_path: Option<String>,
    /// MIME type used to format the results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accept: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assemble_with: Option<AssemblyType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,
}

impl fmt::Display for TransformOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("S3OutputPath", &self.s3_output_path)
            .field("Accept", &self.accept)
            .field("AssembleWith", &self.assemble_with)
            .field("KmsKeyId", &self.kms_key_id)
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option), build_fn(error = "ModelError"))]
#[serde(rename_all = "PascalCase", default)]
pub struct TransformResources {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<TransformInstanceType>,
    /// Minimum: 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_kms_key_id: Option<String>,
}

impl fmt::Display for TransformResources {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("InstanceType", &self.instance_type)
            .field("InstanceCount", &self.instance_count)
            .field("VolumeKmsKeyId", &self.volume_kms_key_id)
            .finish()
    }
}

/// JSONPath filters applied around inference, and how results are joined
/// back onto the input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option), build_fn(error = "ModelError"))]
#[serde(rename_all = "PascalCase", default)]
pub struct DataProcessing {
    /// Length: up to 63.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_filter: Option<String>,
    /// Length: up to 63.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_filter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub join_source: Option<JoinSource>,
}

impl fmt::Display for DataProcessing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeFormatter::new(f)
            .field("InputFilter", &self.input_filter)
            .field("OutputFilter", &self.output_filter)
            .field("JoinSource", &self.join_source)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_display() {
        let input = TransformInputBuilder::default()
            .data_source(
                TransformDataSourceBuilder::default()
                    .s3_data_source(
                        TransformS3DataSourceBuilder::default()
                            .s3_data_type(S3DataType::S3Prefix)
                            .s3_uri("s3://bucket/batch/")
                            .build()
                            .unwrap(),
                    )
                    .build()
                    .unwrap(),
            )
            .content_type("text/csv")
            .split_type(SplitType::Line)
            .build()
            .unwrap();
        assert_eq!(
            input.to_string(),
            "{DataSource: {S3DataSource: {S3DataType: S3Prefix,S3Uri: s3://bucket/batch/}},\
             ContentType: text/csv,SplitType: Line}"
        );
    }

    #[test]
    fn test_join_source_none_is_a_value() {
        let processing = DataProcessingBuilder::default()
            .input_filter("$[1:]")
            .join_source(JoinSource::None)
            .build()
            .unwrap();
        let json = serde_json::to_value(&processing).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"InputFilter": "$[1:]", "JoinSource": "None"})
        );
    }

    #[test]
    fn test_resources_equality() {
        let a = TransformResourcesBuilder::default()
            .instance_type(TransformInstanceType::MlM5Large)
            .instance_count(1)
            .build()
            .unwrap();
        let mut b = a.clone();
        assert_eq!(a, b);
        b.instance_count = Some(2);
        assert_ne!(a, b);
    }
}
