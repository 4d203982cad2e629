//! String enumerations of the service model.
//!
//! Every enumeration keeps values it does not know in an `Unknown` variant,
//! so a document received from a newer service version survives a round
//! trip. `FromStr` is the strict variant and rejects anything outside the
//! known set.
//!
//! Equality and hashing follow the wire value, so an `Unknown` holding a
//! known value is equal to the matching variant.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ModelError;

/// Generates a string enumeration. The first argument is the enum name,
/// followed by `Variant => "wire value"` pairs.
macro_rules! shape_enum {
    ($(#[$meta:meta])* $name:ident { $($var:ident => $value:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Clone, Debug)]
        #[non_exhaustive]
        pub enum $name {
            $($var,)+
            /// A value outside the set known to this crate. Parsing only
            /// produces it for unknown values.
            Unknown(String),
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.as_str() == other.as_str()
            }
        }

        impl Eq for $name {}

        impl std::hash::Hash for $name {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                std::hash::Hash::hash(self.as_str(), state);
            }
        }

        impl $name {
            /// Wire values of the known variants.
            pub const VALUES: &'static [&'static str] = &[$($value),+];

            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$var => $value,)+
                    Self::Unknown(value) => value.as_str(),
                }
            }

            pub fn is_known(&self) -> bool {
                !matches!(self, Self::Unknown(_))
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                match value {
                    $($value => Self::$var,)+
                    other => Self::Unknown(other.to_string()),
                }
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self::from(value.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ModelError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                if value.is_empty() {
                    return Err(ModelError::EmptyEnumValue(stringify!($name)));
                }
                match Self::from(value) {
                    Self::Unknown(value) => Err(ModelError::UnknownEnumValue {
                        shape: stringify!($name),
                        value,
                    }),
                    known => Ok(known),
                }
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                String::deserialize(deserializer).map(Self::from)
            }
        }
    };
}

shape_enum!(
    /// ML compute instance types available to notebook instances.
    InstanceType {
        MlT2Medium => "ml.t2.medium",
        MlT2Large => "ml.t2.large",
        MlT2Xlarge => "ml.t2.xlarge",
        MlT22xlarge => "ml.t2.2xlarge",
        MlT3Medium => "ml.t3.medium",
        MlT3Large => "ml.t3.large",
        MlT3Xlarge => "ml.t3.xlarge",
        MlT32xlarge => "ml.t3.2xlarge",
        MlM4Xlarge => "ml.m4.xlarge",
        MlM42xlarge => "ml.m4.2xlarge",
        MlM44xlarge => "ml.m4.4xlarge",
        MlM410xlarge => "ml.m4.10xlarge",
        MlM416xlarge => "ml.m4.16xlarge",
        MlM5Xlarge => "ml.m5.xlarge",
        MlM52xlarge => "ml.m5.2xlarge",
        MlM54xlarge => "ml.m5.4xlarge",
        MlM512xlarge => "ml.m5.12xlarge",
        MlM524xlarge => "ml.m5.24xlarge",
        MlC4Xlarge => "ml.c4.xlarge",
        MlC42xlarge => "ml.c4.2xlarge",
        MlC44xlarge => "ml.c4.4xlarge",
        MlC48xlarge => "ml.c4.8xlarge",
        MlC5Xlarge => "ml.c5.xlarge",
        MlC52xlarge => "ml.c5.2xlarge",
        MlC54xlarge => "ml.c5.4xlarge",
        MlC59xlarge => "ml.c5.9xlarge",
        MlC518xlarge => "ml.c5.18xlarge",
        MlC5dXlarge => "ml.c5d.xlarge",
        MlC5d2xlarge => "ml.c5d.2xlarge",
        MlC5d4xlarge => "ml.c5d.4xlarge",
        MlC5d9xlarge => "ml.c5d.9xlarge",
        MlC5d18xlarge => "ml.c5d.18xlarge",
        MlP2Xlarge => "ml.p2.xlarge",
        MlP28xlarge => "ml.p2.8xlarge",
        MlP216xlarge => "ml.p2.16xlarge",
        MlP32xlarge => "ml.p3.2xlarge",
        MlP38xlarge => "ml.p3.8xlarge",
        MlP316xlarge => "ml.p3.16xlarge",
    }
);

shape_enum!(
    /// Elastic Inference accelerators that can be attached to a notebook instance.
    NotebookInstanceAcceleratorType {
        MlEia1Medium => "ml.eia1.medium",
        MlEia1Large => "ml.eia1.large",
        MlEia1Xlarge => "ml.eia1.xlarge",
        MlEia2Medium => "ml.eia2.medium",
        MlEia2Large => "ml.eia2.large",
        MlEia2Xlarge => "ml.eia2.xlarge",
    }
);

shape_enum!(
    NotebookInstanceStatus {
        Pending => "Pending",
        InService => "InService",
        Stopping => "Stopping",
        Stopped => "Stopped",
        Failed => "Failed",
        Deleting => "Deleting",
        Updating => "Updating",
    }
);

shape_enum!(
    DirectInternetAccess {
        Enabled => "Enabled",
        Disabled => "Disabled",
    }
);

shape_enum!(
    RootAccess {
        Enabled => "Enabled",
        Disabled => "Disabled",
    }
);

shape_enum!(
    /// How a training container receives its input data.
    TrainingInputMode {
        Pipe => "Pipe",
        File => "File",
    }
);

shape_enum!(
    /// ML compute instance types available to training jobs.
    TrainingInstanceType {
        MlM4Xlarge => "ml.m4.xlarge",
        MlM42xlarge => "ml.m4.2xlarge",
        MlM44xlarge => "ml.m4.4xlarge",
        MlM410xlarge => "ml.m4.10xlarge",
        MlM416xlarge => "ml.m4.16xlarge",
        MlG4dnXlarge => "ml.g4dn.xlarge",
        MlG4dn2xlarge => "ml.g4dn.2xlarge",
        MlG4dn4xlarge => "ml.g4dn.4xlarge",
        MlG4dn8xlarge => "ml.g4dn.8xlarge",
        MlG4dn12xlarge => "ml.g4dn.12xlarge",
        MlG4dn16xlarge => "ml.g4dn.16xlarge",
        MlM5Large => "ml.m5.large",
        MlM5Xlarge => "ml.m5.xlarge",
        MlM52xlarge => "ml.m5.2xlarge",
        MlM54xlarge => "ml.m5.4xlarge",
        MlM512xlarge => "ml.m5.12xlarge",
        MlM524xlarge => "ml.m5.24xlarge",
        MlC4Xlarge => "ml.c4.xlarge",
        MlC42xlarge => "ml.c4.2xlarge",
        MlC44xlarge => "ml.c4.4xlarge",
        MlC48xlarge => "ml.c4.8xlarge",
        MlP2Xlarge => "ml.p2.xlarge",
        MlP28xlarge => "ml.p2.8xlarge",
        MlP216xlarge => "ml.p2.16xlarge",
        MlP32xlarge => "ml.p3.2xlarge",
        MlP38xlarge => "ml.p3.8xlarge",
        MlP316xlarge => "ml.p3.16xlarge",
        MlP3dn24xlarge => "ml.p3dn.24xlarge",
        MlC5Xlarge => "ml.c5.xlarge",
        MlC52xlarge => "ml.c5.2xlarge",
        MlC54xlarge => "ml.c5.4xlarge",
        MlC59xlarge => "ml.c5.9xlarge",
        MlC518xlarge => "ml.c5.18xlarge",
        MlC5nXlarge => "ml.c5n.xlarge",
        MlC5n2xlarge => "ml.c5n.2xlarge",
        MlC5n4xlarge => "ml.c5n.4xlarge",
        MlC5n9xlarge => "ml.c5n.9xlarge",
        MlC5n18xlarge => "ml.c5n.18xlarge",
    }
);

shape_enum!(
    /// ML compute instance types available to batch transform jobs.
    TransformInstanceType {
        MlM4Xlarge => "ml.m4.xlarge",
        MlM42xlarge => "ml.m4.2xlarge",
        MlM44xlarge => "ml.m4.4xlarge",
        MlM410xlarge => "ml.m4.10xlarge",
        MlM416xlarge => "ml.m4.16xlarge",
        MlC4Xlarge => "ml.c4.xlarge",
        MlC42xlarge => "ml.c4.2xlarge",
        MlC44xlarge => "ml.c4.4xlarge",
        MlC48xlarge => "ml.c4.8xlarge",
        MlP2Xlarge => "ml.p2.xlarge",
        MlP28xlarge => "ml.p2.8xlarge",
        MlP216xlarge => "ml.p2.16xlarge",
        MlP32xlarge => "ml.p3.2xlarge",
        MlP38xlarge => "ml.p3.8xlarge",
        MlP316xlarge => "ml.p3.16xlarge",
        MlC5Xlarge => "ml.c5.xlarge",
        MlC52xlarge => "ml.c5.2xlarge",
        MlC54xlarge => "ml.c5.4xlarge",
        MlC59xlarge => "ml.c5.9xlarge",
        MlC518xlarge => "ml.c5.18xlarge",
        MlM5Large => "ml.m5.large",
        MlM5Xlarge => "ml.m5.xlarge",
        MlM52xlarge => "ml.m5.2xlarge",
        MlM54xlarge => "ml.m5.4xlarge",
        MlM512xlarge => "ml.m5.12xlarge",
        MlM524xlarge => "ml.m5.24xlarge",
    }
);

shape_enum!(
    /// ML compute instance types available to processing, monitoring and
    /// debugger rule jobs.
    ProcessingInstanceType {
        MlT3Medium => "ml.t3.medium",
        MlT3Large => "ml.t3.large",
        MlT3Xlarge => "ml.t3.xlarge",
        MlT32xlarge => "ml.t3.2xlarge",
        MlM4Xlarge => "ml.m4.xlarge",
        MlM42xlarge => "ml.m4.2xlarge",
        MlM44xlarge => "ml.m4.4xlarge",
        MlM410xlarge => "ml.m4.10xlarge",
        MlM416xlarge => "ml.m4.16xlarge",
        MlC4Xlarge => "ml.c4.xlarge",
        MlC42xlarge => "ml.c4.2xlarge",
        MlC44xlarge => "ml.c4.4xlarge",
        MlC48xlarge => "ml.c4.8xlarge",
        MlP2Xlarge => "ml.p2.xlarge",
        MlP28xlarge => "ml.p2.8xlarge",
        MlP216xlarge => "ml.p2.16xlarge",
        MlP32xlarge => "ml.p3.2xlarge",
        MlP38xlarge => "ml.p3.8xlarge",
        MlP316xlarge => "ml.p3.16xlarge",
        MlC5Xlarge => "ml.c5.xlarge",
        MlC52xlarge => "ml.c5.2xlarge",
        MlC54xlarge => "ml.c5.4xlarge",
        MlC59xlarge => "ml.c5.9xlarge",
        MlC518xlarge => "ml.c5.18xlarge",
        MlM5Large => "ml.m5.large",
        MlM5Xlarge => "ml.m5.xlarge",
        MlM52xlarge => "ml.m5.2xlarge",
        MlM54xlarge => "ml.m5.4xlarge",
        MlM512xlarge => "ml.m5.12xlarge",
        MlM524xlarge => "ml.m5.24xlarge",
        MlR5Large => "ml.r5.large",
        MlR5Xlarge => "ml.r5.xlarge",
        MlR52xlarge => "ml.r5.2xlarge",
        MlR54xlarge => "ml.r5.4xlarge",
        MlR58xlarge => "ml.r5.8xlarge",
        MlR512xlarge => "ml.r5.12xlarge",
        MlR516xlarge => "ml.r5.16xlarge",
        MlR524xlarge => "ml.r5.24xlarge",
    }
);

shape_enum!(
    CompressionType {
        None => "None",
        Gzip => "Gzip",
    }
);

shape_enum!(
    RecordWrapper {
        None => "None",
        RecordIo => "RecordIO",
    }
);

shape_enum!(
    S3DataType {
        ManifestFile => "ManifestFile",
        S3Prefix => "S3Prefix",
        AugmentedManifestFile => "AugmentedManifestFile",
    }
);

shape_enum!(
    S3DataDistribution {
        FullyReplicated => "FullyReplicated",
        ShardedByS3Key => "ShardedByS3Key",
    }
);

shape_enum!(
    FileSystemAccessMode {
        Rw => "rw",
        Ro => "ro",
    }
);

shape_enum!(
    FileSystemType {
        Efs => "EFS",
        FSxLustre => "FSxLustre",
    }
);

shape_enum!(
    TrainingJobStatus {
        InProgress => "InProgress",
        Completed => "Completed",
        Failed => "Failed",
        Stopping => "Stopping",
        Stopped => "Stopped",
    }
);

shape_enum!(
    /// Detailed progress of a training job, see `TrainingJobStatus` for the
    /// coarse view.
    SecondaryStatus {
        Starting => "Starting",
        LaunchingMlInstances => "LaunchingMLInstances",
        PreparingTrainingStack => "PreparingTrainingStack",
        Downloading => "Downloading",
        DownloadingTrainingImage => "DownloadingTrainingImage",
        Training => "Training",
        Uploading => "Uploading",
        Stopping => "Stopping",
        Stopped => "Stopped",
        MaxRuntimeExceeded => "MaxRuntimeExceeded",
        Completed => "Completed",
        Failed => "Failed",
        Interrupted => "Interrupted",
        MaxWaitTimeExceeded => "MaxWaitTimeExceeded",
    }
);

shape_enum!(
    RuleEvaluationStatus {
        InProgress => "InProgress",
        NoIssuesFound => "NoIssuesFound",
        IssuesFound => "IssuesFound",
        Error => "Error",
        Stopping => "Stopping",
        Stopped => "Stopped",
    }
);

shape_enum!(
    BatchStrategy {
        MultiRecord => "MultiRecord",
        SingleRecord => "SingleRecord",
    }
);

shape_enum!(
    SplitType {
        None => "None",
        Line => "Line",
        RecordIo => "RecordIO",
        TfRecord => "TFRecord",
    }
);

shape_enum!(
    AssemblyType {
        None => "None",
        Line => "Line",
    }
);

shape_enum!(
    JoinSource {
        Input => "Input",
        None => "None",
    }
);

shape_enum!(
    HyperParameterTuningJobObjectiveType {
        Maximize => "Maximize",
        Minimize => "Minimize",
    }
);

shape_enum!(
    HyperParameterScalingType {
        Auto => "Auto",
        Linear => "Linear",
        Logarithmic => "Logarithmic",
        ReverseLogarithmic => "ReverseLogarithmic",
    }
);

shape_enum!(
    HyperParameterTuningJobStrategyType {
        Bayesian => "Bayesian",
        Random => "Random",
    }
);

shape_enum!(
    TrainingJobEarlyStoppingType {
        Off => "Off",
        Auto => "Auto",
    }
);

shape_enum!(
    ProcessingS3UploadMode {
        Continuous => "Continuous",
        EndOfJob => "EndOfJob",
    }
);

shape_enum!(
    ProcessingS3InputMode {
        Pipe => "Pipe",
        File => "File",
    }
);

shape_enum!(
    ProcessingS3DataDistributionType {
        FullyReplicated => "FullyReplicated",
        ShardedByS3Key => "ShardedByS3Key",
    }
);

shape_enum!(
    AwsManagedHumanLoopRequestSource {
        RekognitionDetectModerationLabelsImageV3 => "AWS/Rekognition/DetectModerationLabels/Image/V3",
        TextractAnalyzeDocumentFormsV1 => "AWS/Textract/AnalyzeDocument/Forms/V1",
    }
);

shape_enum!(
    ContentClassifier {
        FreeOfPersonallyIdentifiableInformation => "FreeOfPersonallyIdentifiableInformation",
        FreeOfAdultContent => "FreeOfAdultContent",
    }
);

/// Known values of the enumeration called `name`, as used by the catalogue.
pub fn values_of(name: &str) -> Option<&'static [&'static str]> {
    let values = match name {
        "InstanceType" => InstanceType::VALUES,
        "NotebookInstanceAcceleratorType" => NotebookInstanceAcceleratorType::VALUES,
        "NotebookInstanceStatus" => NotebookInstanceStatus::VALUES,
        "DirectInternetAccess" => DirectInternetAccess::VALUES,
        "RootAccess" => RootAccess::VALUES,
        "TrainingInputMode" => TrainingInputMode::VALUES,
        "TrainingInstanceType" => TrainingInstanceType::VALUES,
        "TransformInstanceType" => TransformInstanceType::VALUES,
        "ProcessingInstanceType" => ProcessingInstanceType::VALUES,
        "CompressionType" => CompressionType::VALUES,
        "RecordWrapper" => RecordWrapper::VALUES,
        "S3DataType" => S3DataType::VALUES,
        "S3DataDistribution" => S3DataDistribution::VALUES,
        "FileSystemAccessMode" => FileSystemAccessMode::VALUES,
        "FileSystemType" => FileSystemType::VALUES,
        "TrainingJobStatus" => TrainingJobStatus::VALUES,
        "SecondaryStatus" => SecondaryStatus::VALUES,
        "RuleEvaluationStatus" => RuleEvaluationStatus::VALUES,
        "BatchStrategy" => BatchStrategy::VALUES,
        "SplitType" => SplitType::VALUES,
        "AssemblyType" => AssemblyType::VALUES,
        "JoinSource" => JoinSource::VALUES,
        "HyperParameterTuningJobObjectiveType" => HyperParameterTuningJobObjectiveType::VALUES,
        "HyperParameterScalingType" => HyperParameterScalingType::VALUES,
        "HyperParameterTuningJobStrategyType" => HyperParameterTuningJobStrategyType::VALUES,
        "TrainingJobEarlyStoppingType" => TrainingJobEarlyStoppingType::VALUES,
        "ProcessingS3UploadMode" => ProcessingS3UploadMode::VALUES,
        "ProcessingS3InputMode" => ProcessingS3InputMode::VALUES,
        "ProcessingS3DataDistributionType" => ProcessingS3DataDistributionType::VALUES,
        "AwsManagedHumanLoopRequestSource" => AwsManagedHumanLoopRequestSource::VALUES,
        "ContentClassifier" => ContentClassifier::VALUES,
        _ => return None,
    };
    Some(values)
}
