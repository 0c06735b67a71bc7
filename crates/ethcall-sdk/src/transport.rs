//! Transport layer for RPC communication

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use crate::SdkError;

#[cfg(feature = "http")]
use crate::config::TransportConfig;

/// Transport trait for RPC communication (object-safe)
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send an RPC request and get JSON response
    async fn request_json(&self, method: &str, params: Vec<Value>) -> Result<Value, SdkError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn request_json(&self, method: &str, params: Vec<Value>) -> Result<Value, SdkError> {
        (**self).request_json(method, params).await
    }
}

/// Helper to deserialize response
pub fn deserialize_response<T: serde::de::DeserializeOwned>(value: Value) -> Result<T, SdkError> {
    serde_json::from_value(value).map_err(|e| SdkError::Serialization(e.to_string()))
}

/// A request seen by [`MockTransport`]
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    /// RPC method
    pub method: String,
    /// Positional params
    pub params: Vec<Value>,
}

/// Mock transport for testing
///
/// `web3_sha3` is answered by hashing locally unless a custom response is
/// set for it.
pub struct MockTransport {
    responses: Arc<Mutex<HashMap<String, Value>>>,
    default_responses: Arc<Mutex<HashMap<String, Value>>>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl MockTransport {
    /// Create a new mock transport
    pub fn new() -> Self {
        let mut defaults = HashMap::new();

        defaults.insert("net_version".to_string(), Value::String("1".to_string()));
        defaults.insert("eth_chainId".to_string(), Value::String("0x1".to_string()));
        defaults.insert(
            "web3_clientVersion".to_string(),
            Value::String("MockTransport/v1".to_string()),
        );
        defaults.insert("eth_call".to_string(), Value::String("0x".to_string()));

        Self {
            responses: Arc::new(Mutex::new(HashMap::new())),
            default_responses: Arc::new(Mutex::new(defaults)),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Set a mock response for a specific method
    pub fn set_response(&self, method: &str, response: Value) {
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(method.to_string(), response);
    }

    /// Clear custom responses
    pub fn clear_responses(&self) {
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    /// Every request received so far, oldest first
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of requests received for one method
    pub fn call_count(&self, method: &str) -> usize {
        self.calls().iter().filter(|c| c.method == method).count()
    }

    fn local_sha3(params: &[Value]) -> Result<Value, SdkError> {
        let data = params
            .first()
            .and_then(Value::as_str)
            .ok_or_else(|| SdkError::Rpc {
                code: -32602,
                message: "web3_sha3 expects one hex string".to_string(),
            })?;
        let hash = ethcall_crypto::keccak256_hex(data).map_err(|e| SdkError::Rpc {
            code: -32602,
            message: e.to_string(),
        })?;
        Ok(Value::String(hash))
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn request_json(&self, method: &str, params: Vec<Value>) -> Result<Value, SdkError> {
        self.calls
            .lock()
            .map_err(|_| SdkError::Transport("MockTransport mutex poisoned".to_string()))?
            .push(RecordedCall {
                method: method.to_string(),
                params: params.clone(),
            });

        // Check custom responses first
        let custom_response = self
            .responses
            .lock()
            .map_err(|_| SdkError::Transport("MockTransport mutex poisoned".to_string()))?
            .get(method)
            .cloned();

        if let Some(response) = custom_response {
            return Ok(response);
        }

        if method == "web3_sha3" {
            return Self::local_sha3(&params);
        }

        // Fall back to defaults
        let default_response = self
            .default_responses
            .lock()
            .map_err(|_| SdkError::Transport("MockTransport mutex poisoned".to_string()))?
            .get(method)
            .cloned();

        if let Some(response) = default_response {
            return Ok(response);
        }

        Err(SdkError::Rpc {
            code: -32601,
            message: format!("Method not found: {}", method),
        })
    }
}

/// HTTP transport for real RPC communication
#[cfg(feature = "http")]
pub struct HttpTransport {
    client: reqwest::Client,
    url: String,
    request_id: std::sync::atomic::AtomicU64,
}

#[cfg(feature = "http")]
impl HttpTransport {
    /// Create a new HTTP transport
    pub fn new(url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.to_string(),
            request_id: std::sync::atomic::AtomicU64::new(1),
        }
    }

    /// Create a transport from configuration, applying its request timeout
    pub fn from_config(config: &TransportConfig) -> Result<Self, SdkError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| SdkError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            url: config.url(),
            request_id: std::sync::atomic::AtomicU64::new(1),
        })
    }

    /// Endpoint URL
    pub fn url(&self) -> &str {
        &self.url
    }

    fn next_id(&self) -> u64 {
        self.request_id
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst)
    }
}

#[cfg(feature = "http")]
#[async_trait]
impl Transport for HttpTransport {
    async fn request_json(&self, method: &str, params: Vec<Value>) -> Result<Value, SdkError> {
        let id = self.next_id();
        let request = serde_json::json!({
            "jsonrpc": "2.0",
            "id": id,
            "method": method,
            "params": params,
        });

        let response = self
            .client
            .post(&self.url)
            .json(&request)
            .send()
            .await
            .map_err(|e| SdkError::Transport(e.to_string()))?;

        let response: JsonRpcResponse = response
            .json()
            .await
            .map_err(|e| SdkError::Transport(e.to_string()))?;

        check_response_id(id, &response.id)?;

        if let Some(error) = response.error {
            return Err(SdkError::Rpc {
                code: error.code,
                message: error.message,
            });
        }

        response.result.ok_or_else(|| SdkError::Rpc {
            code: -32603,
            message: "No result in response".to_string(),
        })
    }
}

/// The node must echo the request id back
#[cfg(feature = "http")]
fn check_response_id(expected: u64, got: &Value) -> Result<(), SdkError> {
    if got.as_u64() == Some(expected) {
        return Ok(());
    }
    tracing::warn!("JSON-RPC response id {} differs from request id {}", got, expected);
    Err(SdkError::Transport(format!(
        "Given ID {}, differs from expected {}",
        got, expected
    )))
}

#[cfg(feature = "http")]
#[derive(serde::Deserialize)]
struct JsonRpcResponse {
    #[serde(default)]
    id: Value,
    result: Option<Value>,
    error: Option<JsonRpcError>,
}

#[cfg(feature = "http")]
#[derive(serde::Deserialize)]
struct JsonRpcError {
    code: i64,
    message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_transport_default_responses() {
        let transport = MockTransport::new();

        let result = transport.request_json("net_version", vec![]).await.unwrap();
        assert_eq!(result, Value::String("1".to_string()));

        let result = transport.request_json("eth_chainId", vec![]).await.unwrap();
        assert_eq!(result, Value::String("0x1".to_string()));
    }

    #[tokio::test]
    async fn test_mock_transport_custom_response() {
        let transport = MockTransport::new();
        transport.set_response("eth_chainId", Value::String("0x5".to_string()));

        let result = transport.request_json("eth_chainId", vec![]).await.unwrap();
        assert_eq!(result, Value::String("0x5".to_string()));

        transport.clear_responses();
        let result = transport.request_json("eth_chainId", vec![]).await.unwrap();
        assert_eq!(result, Value::String("0x1".to_string()));
    }

    #[tokio::test]
    async fn test_mock_transport_unknown_method() {
        let transport = MockTransport::new();
        let result = transport.request_json("unknown_method", vec![]).await;
        assert!(matches!(result, Err(SdkError::Rpc { code: -32601, .. })));
    }

    #[tokio::test]
    async fn test_mock_transport_web3_sha3() {
        let transport = MockTransport::new();
        let result = transport
            .request_json("web3_sha3", vec![Value::String("0x68656c6c6f".to_string())])
            .await
            .unwrap();
        assert_eq!(
            result,
            Value::String(
                "0x1c8aff950685c2ed4bc3174f3472287b56d9517b9c948127319a09a7a36deac8".to_string()
            )
        );

        let result = transport.request_json("web3_sha3", vec![]).await;
        assert!(matches!(result, Err(SdkError::Rpc { code: -32602, .. })));
    }

    #[tokio::test]
    async fn test_mock_transport_records_calls() {
        let transport = Arc::new(MockTransport::new());
        transport
            .request_json("eth_call", vec![Value::String("0x".to_string())])
            .await
            .unwrap();
        let _ = transport.request_json("nope", vec![]).await;

        let calls = transport.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].method, "eth_call");
        assert_eq!(calls[0].params, vec![Value::String("0x".to_string())]);
        assert_eq!(transport.call_count("nope"), 1);
    }

    #[test]
    fn test_mock_transport_survives_poisoned_lock() {
        let transport = Arc::new(MockTransport::new());
        let poisoner = Arc::clone(&transport);
        let joined = std::thread::spawn(move || {
            let _calls = poisoner.calls.lock().unwrap();
            let _responses = poisoner.responses.lock().unwrap();
            panic!("poison the mock locks");
        })
        .join();
        assert!(joined.is_err());
        assert!(transport.calls.is_poisoned());

        assert!(transport.calls().is_empty());
        assert_eq!(transport.call_count("eth_call"), 0);
        transport.set_response("eth_chainId", Value::String("0x2a".to_string()));
        assert_eq!(
            transport.responses.lock().unwrap_or_else(PoisonError::into_inner)["eth_chainId"],
            Value::String("0x2a".to_string())
        );
        transport.clear_responses();
        assert!(transport
            .responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty());
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_check_response_id() {
        assert!(check_response_id(7, &Value::from(7u64)).is_ok());
        assert!(matches!(
            check_response_id(7, &Value::from(8u64)),
            Err(SdkError::Transport(_))
        ));
        assert!(check_response_id(7, &Value::Null).is_err());
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_http_transport_from_config() {
        let config = TransportConfig {
            host: "10.0.0.5".to_string(),
            port: 8546,
            ..Default::default()
        };
        let transport = HttpTransport::from_config(&config).unwrap();
        assert_eq!(transport.url(), "http://10.0.0.5:8546");
    }
}
