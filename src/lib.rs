//! Request, result and configuration shapes for the Amazon SageMaker
//! management API (`2017-07-24`).
//!
//! Shapes are plain values. Every member is an `Option` that can be read
//! and assigned directly; `<Shape>Builder` offers chained construction:
//!
//! ```
//! use sagemaker_model::operations::StopTrainingJobRequestBuilder;
//! use sagemaker_model::Operation;
//!
//! let request = StopTrainingJobRequestBuilder::default()
//!     .training_job_name("xgb-2020-03-01")
//!     .build()
//!     .unwrap();
//! assert_eq!(request.to_string(), "{TrainingJobName: xgb-2020-03-01}");
//! assert_eq!(
//!     sagemaker_model::operations::StopTrainingJobRequest::target(),
//!     "SageMaker.StopTrainingJob"
//! );
//! ```
//!
//! Signing, transport and retries are left to the caller; the shapes only
//! carry data and serialize to the service's JSON form.

pub mod catalog;
mod display;
mod entries;
pub mod enums;
pub mod error;
pub mod operation;
pub mod operations;
pub mod timestamp;
pub mod types;

pub use error::ModelError;
pub use operation::{Operation, API_VERSION, SERVICE_TARGET_PREFIX};
pub use types::{Tag, Taggable};
