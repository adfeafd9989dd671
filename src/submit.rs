//! Record Submission
//!
//! One-shot POST of a validated record to the remote script endpoint.
//! The caller owns validation and the busy flag; this module only moves
//! bytes and reports the outcome.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::models::Record;

/// The remote script that receives submitted records.
pub const ENDPOINT_URL: &str = "https://script.google.com/macros/s/AKfycby9iEIsY0gRLG0R57RCO2QPmhJu4A-aHz9pKJcT5bPg-xv7KH61j4sVaLA6W96F6WLG7g/exec";

/// Serialize the full record to the JSON object the endpoint expects.
pub fn payload_json(record: &Record) -> Result<String, String> {
    serde_json::to_string(record).map_err(|e| e.to_string())
}

/// POST the record and parse the acknowledgment body as JSON.
///
/// The endpoint requires `Content-Type: text/plain` despite the JSON
/// body; sending `application/json` trips its CORS preflight. The
/// acknowledgment's shape is not part of the contract, so it comes back
/// as an opaque `JsValue` for the caller to log.
pub async fn send_record(record: &Record) -> Result<JsValue, String> {
    let body = payload_json(record)?;

    let headers = web_sys::Headers::new().map_err(js_err)?;
    headers.set("Content-Type", "text/plain").map_err(js_err)?;

    let init = web_sys::RequestInit::new();
    init.set_method("POST");
    init.set_headers(&headers);
    init.set_body(&JsValue::from_str(&body));

    let request =
        web_sys::Request::new_with_str_and_init(ENDPOINT_URL, &init).map_err(js_err)?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_err)?;
    let response: web_sys::Response = response.dyn_into().map_err(js_err)?;

    let json = response.json().map_err(js_err)?;
    JsFuture::from(json).await.map_err(js_err)
}

fn js_err(err: JsValue) -> String {
    format!("{err:?}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_carries_all_fields() {
        let record = Record {
            id: 0,
            tag: "a".to_string(),
            code: "b".to_string(),
            category: "c".to_string(),
            title: "d".to_string(),
            date: "2024-01-01".to_string(),
            description: "e".to_string(),
            content: "f".to_string(),
        };

        let json = payload_json(&record).unwrap();
        assert_eq!(
            json,
            r#"{"id":0,"tag":"a","code":"b","category":"c","title":"d","date":"2024-01-01","description":"e","content":"f"}"#
        );
    }

    #[test]
    fn test_payload_escapes_multiline_content() {
        let record = Record {
            content: "dòng một\ndòng hai \"quoted\"".to_string(),
            ..Record::default()
        };

        let json = payload_json(&record).unwrap();
        let back: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
