//! Binding between request shapes and the operations they are sent with.

use std::fmt::{Debug, Display};

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Prefix of the `X-Amz-Target` header for every SageMaker operation.
pub const SERVICE_TARGET_PREFIX: &str = "SageMaker";

/// API version of the service model the shapes follow.
pub const API_VERSION: &str = "2017-07-24";

/// A request shape of one SageMaker operation.
pub trait Operation: Serialize + DeserializeOwned + Display + Debug {
    /// Operation name, e.g. `CreateTrainingJob`.
    const NAME: &'static str;

    /// The result shape the service answers with.
    type Output: Serialize + DeserializeOwned + Display + Debug;

    /// Value of the `X-Amz-Target` header, e.g. `SageMaker.CreateTrainingJob`.
    fn target() -> String {
        format!("{}.{}", SERVICE_TARGET_PREFIX, Self::NAME)
    }
}

macro_rules! operation {
    ($($request:ty => $result:ty as $name:literal),+ $(,)?) => {
        $(
            impl $crate::operation::Operation for $request {
                const NAME: &'static str = $name;
                type Output = $result;
            }
        )+
    };
}

pub(crate) use operation;
