//! Request and response models for the YesCaptcha API.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Result, YesCaptchaError};

/// Status strings defined by the `getTaskResult` protocol.
///
/// The `"processing"` sentinel is what separates a pending poll from a real
/// error, so it lives here as named protocol configuration rather than as an
/// inline literal. Any status outside these two is rejected as a protocol
/// violation instead of being silently treated as pending.
pub const STATUS_PROCESSING: &str = "processing";
/// Status string reported once a solution is available.
pub const STATUS_READY: &str = "ready";

/// A captcha challenge to be submitted to the service.
///
/// Serializes to the wire shape `createTask` expects: a `type` tag plus the
/// variant-specific fields, with optional fields omitted when unset.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Task {
    /// OCR recognition of an alphanumeric image captcha.
    #[serde(rename = "ImageToTextTaskMuggle")]
    ImageToText {
        /// Base64-encoded image content, without the `data:image/...;base64,` prefix.
        body: String,
        /// Custom model name for site-specific captchas.
        #[serde(skip_serializing_if = "Option::is_none")]
        project_name: Option<String>,
    },

    /// reCAPTCHA v2 checkbox, solved without a proxy.
    #[serde(rename = "NoCaptchaTaskProxyless")]
    NoCaptchaProxyless {
        #[serde(rename = "websiteURL")]
        website_url: String,
        #[serde(rename = "websiteKey")]
        website_key: String,
        /// Set for the invisible reCAPTCHA variant.
        #[serde(rename = "isInvisible")]
        is_invisible: bool,
    },

    /// reCAPTCHA v2 Enterprise, proxyless.
    #[serde(rename = "RecaptchaV2EnterpriseTaskProxyless")]
    RecaptchaV2EnterpriseProxyless {
        #[serde(rename = "websiteURL")]
        website_url: String,
        #[serde(rename = "websiteKey")]
        website_key: String,
        #[serde(rename = "enterprisePayload", skip_serializing_if = "Option::is_none")]
        enterprise_payload: Option<Value>,
    },

    /// reCAPTCHA v3 (score-based), proxyless.
    #[serde(rename = "RecaptchaV3TaskProxyless")]
    RecaptchaV3Proxyless {
        #[serde(rename = "websiteURL")]
        website_url: String,
        #[serde(rename = "websiteKey")]
        website_key: String,
        /// The `action` value the page passes to grecaptcha. The token is
        /// worthless if this does not match.
        #[serde(rename = "pageAction")]
        page_action: String,
    },

    /// reCAPTCHA v3 Enterprise.
    #[serde(rename = "RecaptchaV3EnterpriseTask")]
    RecaptchaV3Enterprise {
        #[serde(rename = "websiteURL")]
        website_url: String,
        #[serde(rename = "websiteKey")]
        website_key: String,
        #[serde(rename = "pageAction")]
        page_action: String,
        #[serde(rename = "enterprisePayload", skip_serializing_if = "Option::is_none")]
        enterprise_payload: Option<Value>,
    },

    /// hCaptcha, proxyless.
    #[serde(rename = "HCaptchaTaskProxyless")]
    HCaptchaProxyless {
        #[serde(rename = "websiteURL")]
        website_url: String,
        #[serde(rename = "websiteKey")]
        website_key: String,
    },

    /// hCaptcha 3x3 grid classification.
    #[serde(rename = "HCaptchaClassification")]
    HCaptchaClassification {
        /// Base64-encoded tile images.
        queries: Vec<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        question: Option<String>,
        /// Reference images shown in the grid corner, when present.
        #[serde(skip_serializing_if = "Option::is_none")]
        anchors: Option<Vec<String>>,
    },

    /// reCAPTCHA v2 image classification.
    #[serde(rename = "ReCaptchaV2Classification")]
    RecaptchaV2Classification {
        /// Base64-encoded image content.
        image: String,
        question: String,
    },

    /// FunCaptcha image classification.
    #[serde(rename = "FunCaptchaClassification")]
    FunCaptchaClassification {
        /// Base64-encoded images.
        images: Vec<String>,
        question: String,
    },

    /// Cloudflare Turnstile, proxyless.
    #[serde(rename = "TurnstileTaskProxyless")]
    TurnstileProxyless {
        #[serde(rename = "websiteURL")]
        website_url: String,
        #[serde(rename = "websiteKey")]
        website_key: String,
    },

    /// Cloudflare 5-second shield. Requires a caller-supplied proxy.
    #[serde(rename = "CloudFlareTaskS3")]
    CloudFlare {
        #[serde(rename = "websiteURL")]
        website_url: String,
        /// Proxy URL, e.g. `http://user:pass@ip:port` or `socks5://ip:port`.
        proxy: String,
        #[serde(rename = "userAgent", skip_serializing_if = "Option::is_none")]
        user_agent: Option<String>,
        #[serde(rename = "waitLoad")]
        wait_load: bool,
        #[serde(rename = "requiredCookies", skip_serializing_if = "Option::is_none")]
        required_cookies: Option<Vec<String>>,
        #[serde(rename = "blockImage")]
        block_image: bool,
        #[serde(rename = "postData", skip_serializing_if = "Option::is_none")]
        post_data: Option<Value>,
    },
}

impl Task {
    /// Returns the `type` tag this task serializes with.
    pub fn type_name(&self) -> &'static str {
        match self {
            Task::ImageToText { .. } => "ImageToTextTaskMuggle",
            Task::NoCaptchaProxyless { .. } => "NoCaptchaTaskProxyless",
            Task::RecaptchaV2EnterpriseProxyless { .. } => "RecaptchaV2EnterpriseTaskProxyless",
            Task::RecaptchaV3Proxyless { .. } => "RecaptchaV3TaskProxyless",
            Task::RecaptchaV3Enterprise { .. } => "RecaptchaV3EnterpriseTask",
            Task::HCaptchaProxyless { .. } => "HCaptchaTaskProxyless",
            Task::HCaptchaClassification { .. } => "HCaptchaClassification",
            Task::RecaptchaV2Classification { .. } => "ReCaptchaV2Classification",
            Task::FunCaptchaClassification { .. } => "FunCaptchaClassification",
            Task::TurnstileProxyless { .. } => "TurnstileTaskProxyless",
            Task::CloudFlare { .. } => "CloudFlareTaskS3",
        }
    }
}

/// The decoded answer for a solved task.
///
/// The API returns the solution object untagged; decoding tries each known
/// shape in order and rejects anything that matches none of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Solution {
    /// reCAPTCHA / hCaptcha response token.
    Recaptcha {
        #[serde(rename = "gRecaptchaResponse")]
        g_recaptcha_response: String,
    },
    /// Turnstile token.
    Turnstile { token: String },
    /// OCR text for image-to-text tasks.
    Text { text: String },
    /// Selected tile indices for classification tasks.
    Classification { objects: Vec<u32> },
    /// Cookies and page content for CloudFlare tasks.
    CloudFlare {
        cookies: HashMap<String, String>,
        #[serde(rename = "userAgent", default)]
        user_agent: Option<String>,
        #[serde(default)]
        content: Option<String>,
    },
}

impl Solution {
    /// The response token, for token-shaped solutions.
    pub fn token(&self) -> Option<&str> {
        match self {
            Solution::Recaptcha {
                g_recaptcha_response,
            } => Some(g_recaptcha_response),
            Solution::Turnstile { token } => Some(token),
            _ => None,
        }
    }

    /// The recognized text, for OCR solutions.
    pub fn text(&self) -> Option<&str> {
        match self {
            Solution::Text { text } => Some(text),
            _ => None,
        }
    }

    /// The selected indices, for classification solutions.
    pub fn objects(&self) -> Option<&[u32]> {
        match self {
            Solution::Classification { objects } => Some(objects),
            _ => None,
        }
    }
}

/// Result of one `getTaskResult` poll.
#[derive(Debug, Clone, PartialEq)]
pub enum TaskStatus {
    /// The service is still working on the task.
    Processing,
    /// The task finished and produced a solution.
    Ready(Solution),
}

/// Account balance snapshot from `getBalance`.
#[derive(Debug, Clone, PartialEq)]
pub struct Balance {
    /// Account credit, in points.
    pub balance: f64,
    /// Developer revenue-share balance.
    pub soft_balance: Option<f64>,
    /// Invite revenue-share balance.
    pub invite_balance: Option<f64>,
    /// Account ID of the inviter.
    pub invite_by: Option<String>,
}

/// The `errorId`/`errorCode`/`errorDescription` envelope present on every
/// API response. `errorId == 0` means success; anything else is a service
/// rejection. Note that for `getTaskResult` a zero `errorId` still covers
/// both "processing" and "ready" - that split is carried by `status`.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ErrorEnvelope {
    #[serde(rename = "errorId", default)]
    pub error_id: i64,
    #[serde(rename = "errorCode", default)]
    pub error_code: Option<String>,
    #[serde(rename = "errorDescription", default)]
    pub error_description: Option<String>,
}

impl ErrorEnvelope {
    /// Raise a `Service` error if the envelope reports one.
    pub fn check(&self) -> Result<()> {
        if self.error_id == 0 {
            return Ok(());
        }
        Err(YesCaptchaError::Service {
            code: self.error_code.clone().unwrap_or_default(),
            description: self.error_description.clone().unwrap_or_default(),
        })
    }
}

/// Response from `/createTask`.
#[derive(Debug, Deserialize)]
pub(crate) struct CreateTaskResponse {
    #[serde(flatten)]
    pub error: ErrorEnvelope,
    #[serde(
        rename = "taskId",
        default,
        deserialize_with = "deserialize_optional_string_or_int"
    )]
    pub task_id: Option<String>,
}

/// Response from `/getTaskResult`.
#[derive(Debug, Deserialize)]
pub(crate) struct TaskResultResponse {
    #[serde(flatten)]
    pub error: ErrorEnvelope,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub solution: Option<Solution>,
}

/// Response from `/getBalance`.
#[derive(Debug, Deserialize)]
pub(crate) struct BalanceResponse {
    #[serde(flatten)]
    pub error: ErrorEnvelope,
    #[serde(default)]
    pub balance: Option<f64>,
    #[serde(rename = "softBalance", default)]
    pub soft_balance: Option<f64>,
    #[serde(rename = "inviteBalance", default)]
    pub invite_balance: Option<f64>,
    #[serde(
        rename = "inviteBy",
        default,
        deserialize_with = "deserialize_optional_string_or_int"
    )]
    pub invite_by: Option<String>,
}

/// Helper to deserialize fields that can be either string or integer.
/// The API emits `taskId` (and `inviteBy`) in both shapes.
fn deserialize_optional_string_or_int<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{self, Visitor};

    struct StringOrIntVisitor;

    impl<'de> Visitor<'de> for StringOrIntVisitor {
        type Value = Option<String>;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("a string, integer, or null")
        }

        fn visit_none<E>(self) -> std::result::Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_unit<E>(self) -> std::result::Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_str<E>(self, v: &str) -> std::result::Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(v.to_string()))
        }

        fn visit_string<E>(self, v: String) -> std::result::Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(v))
        }

        fn visit_i64<E>(self, v: i64) -> std::result::Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(v.to_string()))
        }

        fn visit_u64<E>(self, v: u64) -> std::result::Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(v.to_string()))
        }
    }

    deserializer.deserialize_any(StringOrIntVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_turnstile_task_wire_shape() {
        let task = Task::TurnstileProxyless {
            website_url: "https://example.com".into(),
            website_key: "0x4AAAAAAAB".into(),
        };

        assert_eq!(task.type_name(), "TurnstileTaskProxyless");
        assert_eq!(
            serde_json::to_value(&task).unwrap(),
            json!({
                "type": "TurnstileTaskProxyless",
                "websiteURL": "https://example.com",
                "websiteKey": "0x4AAAAAAAB",
            })
        );
    }

    #[test]
    fn test_no_captcha_task_wire_shape() {
        let task = Task::NoCaptchaProxyless {
            website_url: "https://example.com".into(),
            website_key: "site-key".into(),
            is_invisible: false,
        };

        assert_eq!(
            serde_json::to_value(&task).unwrap(),
            json!({
                "type": "NoCaptchaTaskProxyless",
                "websiteURL": "https://example.com",
                "websiteKey": "site-key",
                "isInvisible": false,
            })
        );
    }

    #[test]
    fn test_recaptcha_v3_includes_page_action() {
        let task = Task::RecaptchaV3Proxyless {
            website_url: "https://example.com".into(),
            website_key: "site-key".into(),
            page_action: "login".into(),
        };

        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(value["pageAction"], "login");
        assert_eq!(value["type"], "RecaptchaV3TaskProxyless");
    }

    #[test]
    fn test_optional_fields_are_omitted() {
        let task = Task::ImageToText {
            body: "aGVsbG8=".into(),
            project_name: None,
        };

        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(
            value,
            json!({"type": "ImageToTextTaskMuggle", "body": "aGVsbG8="})
        );

        let task = Task::RecaptchaV2EnterpriseProxyless {
            website_url: "https://example.com".into(),
            website_key: "site-key".into(),
            enterprise_payload: Some(json!({"s": "payload"})),
        };
        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(value["enterprisePayload"], json!({"s": "payload"}));
    }

    #[test]
    fn test_solution_decodes_by_shape() {
        let recaptcha: Solution =
            serde_json::from_value(json!({"gRecaptchaResponse": "03AGdBq_token"})).unwrap();
        assert_eq!(recaptcha.token(), Some("03AGdBq_token"));

        let turnstile: Solution = serde_json::from_value(json!({"token": "ts-token"})).unwrap();
        assert_eq!(turnstile.token(), Some("ts-token"));
        assert_eq!(turnstile.text(), None);

        let text: Solution = serde_json::from_value(json!({"text": "ab12"})).unwrap();
        assert_eq!(text.text(), Some("ab12"));

        let objects: Solution = serde_json::from_value(json!({"objects": [0, 3, 7]})).unwrap();
        assert_eq!(objects.objects(), Some(&[0u32, 3, 7][..]));
    }

    #[test]
    fn test_solution_rejects_unknown_shape() {
        let result: std::result::Result<Solution, _> =
            serde_json::from_value(json!({"somethingElse": true}));
        assert!(result.is_err());
    }

    #[test]
    fn test_error_envelope_check() {
        let ok = ErrorEnvelope {
            error_id: 0,
            error_code: None,
            error_description: None,
        };
        assert!(ok.check().is_ok());

        let err = ErrorEnvelope {
            error_id: 1,
            error_code: Some("ERROR_KEY_DOES_NOT_EXIST".into()),
            error_description: Some("Account key does not exist".into()),
        };
        match err.check() {
            Err(YesCaptchaError::Service { code, description }) => {
                assert_eq!(code, "ERROR_KEY_DOES_NOT_EXIST");
                assert_eq!(description, "Account key does not exist");
            }
            other => panic!("expected Service error, got {:?}", other),
        }
    }

    #[test]
    fn test_task_id_decodes_from_string_or_int() {
        let from_str: CreateTaskResponse =
            serde_json::from_value(json!({"errorId": 0, "taskId": "abc-123"})).unwrap();
        assert_eq!(from_str.task_id.as_deref(), Some("abc-123"));

        let from_int: CreateTaskResponse =
            serde_json::from_value(json!({"errorId": 0, "taskId": 987654})).unwrap();
        assert_eq!(from_int.task_id.as_deref(), Some("987654"));

        let absent: CreateTaskResponse = serde_json::from_value(json!({"errorId": 0})).unwrap();
        assert_eq!(absent.task_id, None);
    }

    #[test]
    fn test_balance_response_decodes() {
        let response: BalanceResponse = serde_json::from_value(json!({
            "errorId": 0,
            "balance": 10000.0,
            "softBalance": 100.5,
            "inviteBalance": 50.0,
            "inviteBy": 12345,
        }))
        .unwrap();

        assert!(response.error.check().is_ok());
        assert_eq!(response.balance, Some(10000.0));
        assert_eq!(response.soft_balance, Some(100.5));
        assert_eq!(response.invite_by.as_deref(), Some("12345"));
    }
}
