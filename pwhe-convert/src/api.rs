//! Request handling for hosted conversion.
//!
//! [`Handler`] is the JSON contract of the web front end without the
//! transport: a host decodes the HTTP request, hands the body to
//! [`Handler::convert_json`] and writes back [`Response::status`] and
//! [`Response::body`]. The handler keeps no state between requests.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use pwhe_core::{convert_document, BridgeSettings, Conversion, ConvertError};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{info, warn};

pub const SERVICE_NAME: &str = "PW-HE Config Generator";

/// Body of a conversion request. Missing fields read as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertRequest {
    pub old_config: String,
    pub pw_ether_id: String,
    /// Also return the L2VPN bridge configuration when one is needed.
    pub include_bridge: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Response {
    pub status: u16,
    pub body: Value,
}

impl Response {
    fn ok(body: Value) -> Self {
        Self { status: 200, body }
    }

    fn error(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            body: json!({ "error": message.into() }),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Handler {
    bridge: BridgeSettings,
}

impl Handler {
    pub fn new(bridge: BridgeSettings) -> Self {
        Self { bridge }
    }

    /// Liveness probe.
    pub fn health(&self) -> Response {
        Response::ok(json!({ "status": "healthy", "service": SERVICE_NAME }))
    }

    /// Decode a JSON request body and convert it.
    pub fn convert_json(&self, body: &str) -> Response {
        match serde_json::from_str::<ConvertRequest>(body) {
            Ok(request) => self.convert(&request),
            Err(err) => {
                warn!(error = %err, "rejected malformed request body");
                Response::error(400, format!("Invalid request body: {err}"))
            }
        }
    }

    /// Convert a decoded request.
    ///
    /// Blank fields give 400, an internal fault gives 500 with its message.
    pub fn convert(&self, request: &ConvertRequest) -> Response {
        match self.run(request) {
            Ok(conversion) => {
                info!(
                    pw_ether_id = %conversion.target_id,
                    blocks = conversion.blocks.len(),
                    "conversion request served"
                );
                let mut body = json!({
                    "success": true,
                    "new_config": conversion.render(),
                });
                if request.include_bridge {
                    if let Some(bridge) = conversion.bridge_config {
                        body["bridge_config"] = Value::String(bridge);
                    }
                }
                Response::ok(body)
            }
            Err(ConvertError::Validation(err)) => Response::error(400, err.to_string()),
            Err(err @ ConvertError::Failure(_)) => {
                warn!(error = %err, "conversion request failed");
                Response::error(500, err.to_string())
            }
        }
    }

    fn run(&self, request: &ConvertRequest) -> Result<Conversion, ConvertError> {
        panic::catch_unwind(AssertUnwindSafe(|| {
            convert_document(&request.old_config, &request.pw_ether_id, &self.bridge)
        }))
        .unwrap_or_else(|payload| Err(ConvertError::Failure(panic_message(payload.as_ref()))))
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unexpected internal error".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG: &str = "interface GigabitEthernet0/0/0/14.1176049\n\
                          encapsulation dot1q 3513 second-dot1q 49\n\
                          !";

    fn request(old_config: &str, pw_ether_id: &str) -> ConvertRequest {
        ConvertRequest {
            old_config: old_config.to_string(),
            pw_ether_id: pw_ether_id.to_string(),
            include_bridge: false,
        }
    }

    #[test]
    fn health_payload_is_fixed() {
        let response = Handler::default().health();
        assert_eq!(response.status, 200);
        assert_eq!(
            response.body,
            json!({ "status": "healthy", "service": "PW-HE Config Generator" })
        );
    }

    #[test]
    fn blank_config_is_a_client_error() {
        let response = Handler::default().convert(&request("  ", "10239"));
        assert_eq!(response.status, 400);
        assert_eq!(
            response.body["error"],
            "Please provide the old configuration"
        );
    }

    #[test]
    fn blank_id_is_a_client_error() {
        let response = Handler::default().convert(&request(CONFIG, "\n"));
        assert_eq!(response.status, 400);
        assert_eq!(response.body["error"], "Please provide the PW-Ether ID");
    }

    #[test]
    fn success_returns_new_config() {
        let response = Handler::default().convert(&request(CONFIG, "10239"));
        assert!(response.is_success());
        assert_eq!(response.body["success"], true);
        let config = response.body["new_config"].as_str().expect("new_config");
        assert!(config.starts_with("interface PW-Ether 10239.049\nencapsulation dot1q 49\nshutdown\n!"));
        assert!(config.contains("### shutdown (from list) ###"));
        assert!(response.body.get("bridge_config").is_none());
    }

    #[test]
    fn bridge_config_only_when_requested_and_needed() {
        let config = "interface GigabitEthernet0/0/0/13.1001502 l2transport\n\
                      encapsulation dot1q 1001 second-dot1q 502\n!";
        let handler = Handler::default();

        let mut req = request(config, "10239");
        assert!(handler.convert(&req).body.get("bridge_config").is_none());

        req.include_bridge = true;
        let response = handler.convert(&req);
        let bridge = response.body["bridge_config"].as_str().expect("bridge_config");
        assert!(bridge.contains("bridge-domain ME_DNET_502"));

        let response = handler.convert(&ConvertRequest {
            include_bridge: true,
            ..request(CONFIG, "10239")
        });
        assert!(response.body.get("bridge_config").is_none());
    }

    #[test]
    fn json_body_with_missing_fields_is_rejected() {
        let response = Handler::default().convert_json(r#"{"old_config": "interface X"}"#);
        assert_eq!(response.status, 400);
        assert_eq!(response.body["error"], "Please provide the PW-Ether ID");
    }

    #[test]
    fn malformed_json_is_rejected() {
        let response = Handler::default().convert_json("{not json");
        assert_eq!(response.status, 400);
        assert!(response.body["error"]
            .as_str()
            .expect("error message")
            .starts_with("Invalid request body"));
    }

    #[test]
    fn panic_payloads_become_messages() {
        let payload: Box<dyn Any + Send> = Box::new("boom");
        assert_eq!(panic_message(payload.as_ref()), "boom");
        let payload: Box<dyn Any + Send> = Box::new(String::from("bang"));
        assert_eq!(panic_message(payload.as_ref()), "bang");
        let payload: Box<dyn Any + Send> = Box::new(7u8);
        assert_eq!(panic_message(payload.as_ref()), "unexpected internal error");
    }
}
