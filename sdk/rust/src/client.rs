use reqwest::{Client, Response};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

/// Conversion direction, named by its URL segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    CelsiusToFahrenheit,
    FahrenheitToCelsius,
}

impl Direction {
    fn segment(self) -> &'static str {
        match self {
            Direction::CelsiusToFahrenheit => "celsius-to-fahrenheit",
            Direction::FahrenheitToCelsius => "fahrenheit-to-celsius",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversion {
    pub original_value: f64,
    pub original_unit: String,
    pub converted_value: f64,
    pub converted_unit: String,
    pub formula: String,
    pub timestamp: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextResponse {
    pub celsius: f64,
    pub context: String,
    pub label: String,
    pub freezing_point: bool,
    pub boiling_point: bool,
}

/// Error envelope returned by the service for any non-2xx response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorBody {
    pub status: u16,
    pub error: String,
    pub message: String,
    pub path: String,
    pub error_code: String,
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub invalid_value: Option<f64>,
    #[serde(default)]
    pub max_limit: Option<f64>,
    #[serde(default)]
    pub parameter_name: Option<String>,
}

#[derive(Debug, Error)]
pub enum SdkError {
    #[error("transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API returned {}: {}", .0.status, .0.message)]
    Api(ApiErrorBody),

    #[error("unexpected response (status {status}): {body}")]
    Unexpected { status: u16, body: String },
}

#[derive(Serialize)]
struct ValueBody {
    value: Option<f64>,
}

pub struct TemperatureClient {
    client: Client,
    base_url: String,
}

impl TemperatureClient {
    /// `base_url` is the service root, e.g. `http://localhost:8080`.
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/temperature/{}", self.base_url, path)
    }

    pub async fn celsius_to_fahrenheit(&self, celsius: f64) -> Result<Conversion, SdkError> {
        self.convert(Direction::CelsiusToFahrenheit, celsius).await
    }

    pub async fn fahrenheit_to_celsius(&self, fahrenheit: f64) -> Result<Conversion, SdkError> {
        self.convert(Direction::FahrenheitToCelsius, fahrenheit).await
    }

    /// Convert with the value in the URL path.
    pub async fn convert(&self, direction: Direction, value: f64) -> Result<Conversion, SdkError> {
        let resp = self
            .client
            .get(self.url(&format!("{}/{}", direction.segment(), value)))
            .send()
            .await?;
        decode(resp).await
    }

    /// Convert with the value in a JSON body. `None` sends `{"value": null}`.
    pub async fn convert_body(
        &self,
        direction: Direction,
        value: Option<f64>,
    ) -> Result<Conversion, SdkError> {
        let resp = self
            .client
            .post(self.url(direction.segment()))
            .json(&ValueBody { value })
            .send()
            .await?;
        decode(resp).await
    }

    pub async fn context(&self, celsius: f64) -> Result<ContextResponse, SdkError> {
        let resp = self
            .client
            .get(self.url(&format!("context/{}", celsius)))
            .send()
            .await?;
        decode(resp).await
    }

    pub async fn health(&self) -> Result<serde_json::Value, SdkError> {
        let resp = self.client.get(self.url("health")).send().await?;
        decode(resp).await
    }

    pub async fn info(&self) -> Result<serde_json::Value, SdkError> {
        let resp = self.client.get(self.url("info")).send().await?;
        decode(resp).await
    }
}

async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, SdkError> {
    let status = resp.status();
    let text = resp.text().await?;

    if status.is_success() {
        return match serde_json::from_str::<T>(&text) {
            Ok(value) => Ok(value),
            Err(_) => Err(SdkError::Unexpected {
                status: status.as_u16(),
                body: text,
            }),
        };
    }

    match serde_json::from_str::<ApiErrorBody>(&text) {
        Ok(body) => Err(SdkError::Api(body)),
        Err(_) => Err(SdkError::Unexpected {
            status: status.as_u16(),
            body: text,
        }),
    }
}
