use serde::Deserialize;
use serde::de::DeserializeOwned;

/// Standard GraphQL response envelope.
#[derive(Deserialize, Debug)]
pub struct Envelope<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct GraphQlError {
    pub message: String,
}

/// Extracts `data` from a GraphQL response body.
///
/// # Arguments
///
/// * `json` - Response body returned by the GraphQL endpoint.
///
/// # Returns
///
/// * `Ok(data)` if the body parses and carries no errors.
/// * `Err(error_message)` if parsing fails, `errors` is non-empty or `data` is absent.
pub fn extract_data<T: DeserializeOwned>(json: &str) -> Result<T, String> {
    let envelope = serde_json::from_str::<Envelope<T>>(json)
        .map_err(|e| format!("Failed to parse GraphQL response: {e}"))?;

    if !envelope.errors.is_empty() {
        let messages: Vec<&str> = envelope.errors.iter().map(|e| e.message.as_str()).collect();
        return Err(format!("GraphQL error: {}", messages.join("; ")));
    }

    envelope
        .data
        .ok_or_else(|| "GraphQL response has no data".to_string())
}
