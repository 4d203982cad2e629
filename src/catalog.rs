//! Lookup of operations and enumerations by name, and rendering of JSON
//! documents through the matching shape.

use std::fmt::{self, Debug, Display};

use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::enums;
use crate::error::ModelError;
use crate::operation::{Operation, SERVICE_TARGET_PREFIX};
use crate::operations::*;

/// One supported operation and the shapes it exchanges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationInfo {
    pub name: &'static str,
    pub request_shape: &'static str,
    pub result_shape: &'static str,
}

impl OperationInfo {
    pub fn target(&self) -> String {
        format!("{}.{}", SERVICE_TARGET_PREFIX, self.name)
    }
}

impl Display for OperationInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} -> {})",
            self.name, self.request_shape, self.result_shape
        )
    }
}

/// Which side of an operation a document holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Request,
    Result,
}

/// How a parsed document is printed back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStyle {
    /// The flattened `{Name: value,...}` form.
    Display,
    Debug,
    /// Pretty JSON with absent members dropped.
    Json,
}

fn render_shape<T>(
    shape: &'static str,
    document: &str,
    style: RenderStyle,
) -> Result<String, ModelError>
where
    T: Serialize + DeserializeOwned + Display + Debug,
{
    let value: T = serde_json::from_str(document).map_err(|e| ModelError::Document {
        shape,
        reason: e.to_string(),
    })?;
    debug!("Parsed {} document of {} bytes", shape, document.len());
    match style {
        RenderStyle::Display => Ok(value.to_string()),
        RenderStyle::Debug => Ok(format!("{:#?}", value)),
        RenderStyle::Json => {
            serde_json::to_string_pretty(&value).map_err(|e| ModelError::Document {
                shape,
                reason: e.to_string(),
            })
        }
    }
}

macro_rules! catalog {
    ($($request:ident => $result:ident),+ $(,)?) => {
        /// Every operation with request and result shapes in this crate.
        pub fn operations() -> Vec<OperationInfo> {
            vec![$(
                OperationInfo {
                    name: <$request as Operation>::NAME,
                    request_shape: stringify!($request),
                    result_shape: stringify!($result),
                },
            )+]
        }

        fn render_by_name(
            name: &str,
            document: &str,
            kind: ShapeKind,
            style: RenderStyle,
        ) -> Result<String, ModelError> {
            $(
                if name == <$request as Operation>::NAME {
                    return match kind {
                        ShapeKind::Request => {
                            render_shape::<$request>(stringify!($request), document, style)
                        }
                        ShapeKind::Result => {
                            render_shape::<$result>(stringify!($result), document, style)
                        }
                    };
                }
            )+
            Err(ModelError::UnknownOperation(name.to_string()))
        }
    };
}

catalog!(
    AddTagsRequest => AddTagsResult,
    DeleteTagsRequest => DeleteTagsResult,
    ListTagsRequest => ListTagsResult,
    CreateNotebookInstanceRequest => CreateNotebookInstanceResult,
    DescribeNotebookInstanceRequest => DescribeNotebookInstanceResult,
    UpdateNotebookInstanceRequest => UpdateNotebookInstanceResult,
    StartNotebookInstanceRequest => StartNotebookInstanceResult,
    StopNotebookInstanceRequest => StopNotebookInstanceResult,
    DeleteNotebookInstanceRequest => DeleteNotebookInstanceResult,
    CreateTrainingJobRequest => CreateTrainingJobResult,
    StopTrainingJobRequest => StopTrainingJobResult,
    CreateHyperParameterTuningJobRequest => CreateHyperParameterTuningJobResult,
    CreateTransformJobRequest => CreateTransformJobResult,
    StopTransformJobRequest => StopTransformJobResult,
    CreateMonitoringScheduleRequest => CreateMonitoringScheduleResult,
    CreateFlowDefinitionRequest => CreateFlowDefinitionResult,
    CreateLabelingJobRequest => CreateLabelingJobResult,
);

/// Accepts either the bare operation name or its target header value.
fn operation_name(name: &str) -> &str {
    name.strip_prefix(SERVICE_TARGET_PREFIX)
        .and_then(|rest| rest.strip_prefix('.'))
        .unwrap_or(name)
}

pub fn find_operation(name: &str) -> Result<OperationInfo, ModelError> {
    let wanted = operation_name(name);
    operations()
        .into_iter()
        .find(|op| op.name == wanted)
        .ok_or_else(|| ModelError::UnknownOperation(name.to_string()))
}

/// Parses `document` as the request or result shape of `operation` and
/// prints it in the requested style.
pub fn render(
    operation: &str,
    document: &str,
    kind: ShapeKind,
    style: RenderStyle,
) -> Result<String, ModelError> {
    let name = operation_name(operation);
    debug!("Rendering {:?} of {} as {:?}", kind, name, style);
    render_by_name(name, document, kind, style).map_err(|e| match e {
        ModelError::UnknownOperation(_) => ModelError::UnknownOperation(operation.to_string()),
        other => other,
    })
}

/// Known values of an enumeration, by its shape name.
pub fn enum_values(name: &str) -> Result<&'static [&'static str], ModelError> {
    enums::values_of(name).ok_or_else(|| ModelError::UnknownEnum(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operations_are_unique() {
        let ops = operations();
        assert_eq!(ops.len(), 17);
        let mut names: Vec<_> = ops.iter().map(|op| op.name).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), ops.len());
    }

    #[test]
    fn test_find_operation() {
        let op = find_operation("CreateTrainingJob").unwrap();
        assert_eq!(op.request_shape, "CreateTrainingJobRequest");
        assert_eq!(op.result_shape, "CreateTrainingJobResult");
        assert_eq!(op.target(), "SageMaker.CreateTrainingJob");
        assert_eq!(find_operation("SageMaker.AddTags").unwrap().name, "AddTags");
        assert_eq!(
            find_operation("CreateModel"),
            Err(ModelError::UnknownOperation("CreateModel".to_string()))
        );
    }

    #[test]
    fn test_render_request_display() {
        let out = render(
            "AddTags",
            r#"{"ResourceArn": "arn:x", "Tags": [{"Key": "a", "Value": "1"}]}"#,
            ShapeKind::Request,
            RenderStyle::Display,
        )
        .unwrap();
        assert_eq!(out, "{ResourceArn: arn:x,Tags: [{Key: a,Value: 1}]}");
    }

    #[test]
    fn test_render_result_json_drops_nulls() {
        let out = render(
            "SageMaker.CreateTrainingJob",
            r#"{"TrainingJobArn": "arn:y", "Unrelated": 1}"#,
            ShapeKind::Result,
            RenderStyle::Json,
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value, serde_json::json!({"TrainingJobArn": "arn:y"}));
    }

    #[test]
    fn test_render_debug() {
        let out = render(
            "StopTrainingJob",
            r#"{"TrainingJobName": "xgb"}"#,
            ShapeKind::Request,
            RenderStyle::Debug,
        )
        .unwrap();
        assert!(out.starts_with("StopTrainingJobRequest {"));
        assert!(out.contains("\"xgb\""));
    }

    #[test]
    fn test_render_errors() {
        assert_eq!(
            render("Nope", "{}", ShapeKind::Request, RenderStyle::Display),
            Err(ModelError::UnknownOperation("Nope".to_string()))
        );
        let err = render(
            "ListTags",
            r#"{"MaxResults": "many"}"#,
            ShapeKind::Request,
            RenderStyle::Display,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ModelError::Document {
                shape: "ListTagsRequest",
                ..
            }
        ));
    }

    #[test]
    fn test_enum_values() {
        assert_eq!(
            enum_values("JoinSource").unwrap(),
            &["Input", "None"][..]
        );
        assert_eq!(
            enum_values("Colour"),
            Err(ModelError::UnknownEnum("Colour".to_string()))
        );
    }
}
