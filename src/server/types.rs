use serde::Serialize;
use std::collections::BTreeMap;

/// Success envelope wrapping every 200 response from `/analyze`.
#[derive(Debug, Serialize)]
pub struct SuccessResponse<T> {
    pub status: &'static str,
    pub data: T,
}

impl<T> SuccessResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            status: "success",
            data,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub status: &'static str,
    pub message: &'static str,
    pub description: &'static str,
    pub version: &'static str,
    pub endpoints: BTreeMap<&'static str, &'static str>,
}

impl ServiceInfo {
    pub fn current() -> Self {
        Self {
            status: "success",
            message: "Welcome to VogueRadar™ API",
            description: "TrendForecasterAI- Personalized fashion trend analysis and prediction API",
            version: env!("CARGO_PKG_VERSION"),
            endpoints: BTreeMap::from([
                ("/", "This documentation"),
                (
                    "/analyze",
                    "POST - Analyze fashion content with personal preferences",
                ),
            ]),
        }
    }
}
