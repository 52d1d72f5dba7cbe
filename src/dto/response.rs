use serde::{Deserialize, Serialize};

/// Body returned by the generation service. Every field may be missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpstreamGenerateResponse {
    #[serde(default)]
    pub qr_image_base64: Option<String>,
    #[serde(default)]
    pub qr_code_url: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GenerateQrResponse {
    pub qr_image: Option<String>,
    pub qr_code_url: Option<String>,
    pub id: Option<String>,
}

impl From<UpstreamGenerateResponse> for GenerateQrResponse {
    fn from(upstream: UpstreamGenerateResponse) -> Self {
        Self {
            qr_image: upstream.qr_image_base64,
            qr_code_url: upstream.qr_code_url,
            // an empty id is as good as none
            id: upstream.id.filter(|id| !id.is_empty()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn renames_upstream_fields() {
        let upstream: UpstreamGenerateResponse = serde_json::from_value(json!({
            "qr_image_base64": "X",
            "qr_code_url": "Y",
            "id": "Z"
        }))
        .unwrap();
        let relayed = serde_json::to_value(GenerateQrResponse::from(upstream)).unwrap();
        assert_eq!(
            relayed,
            json!({"qr_image": "X", "qr_code_url": "Y", "id": "Z"})
        );
    }

    #[test]
    fn missing_fields_become_null() {
        let upstream: UpstreamGenerateResponse =
            serde_json::from_value(json!({"qr_image_base64": "X"})).unwrap();
        let relayed = serde_json::to_value(GenerateQrResponse::from(upstream)).unwrap();
        assert_eq!(
            relayed,
            json!({"qr_image": "X", "qr_code_url": null, "id": null})
        );
    }

    #[test]
    fn empty_id_becomes_null() {
        let upstream = UpstreamGenerateResponse {
            id: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(GenerateQrResponse::from(upstream).id, None);
    }
}
