use serde::{Deserialize, Serialize};

/// The JSON representation of a browser push subscription
/// as produced by `PushSubscription.toJSON()`.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct PushSubscription {
    pub endpoint: String,
    #[serde(default)]
    pub expiration_time: Option<f64>,
    pub keys: PushSubscriptionKeys,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct PushSubscriptionKeys {
    pub p256dh: String,
    pub auth: String,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct SubscribeRequest {
    pub subscription : PushSubscription,
    pub latitude     : f64,
    pub longitude    : f64,
    pub threshold    : i64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct UnsubscribeRequest {
    pub subscription: PushSubscription,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn subscription() -> PushSubscription {
        PushSubscription {
            endpoint: "https://push.example.com/send/abc".to_string(),
            expiration_time: None,
            keys: PushSubscriptionKeys {
                p256dh: "BNcRdreALRFXTkOOUHK1EtK2wtaz5Ry4YfYCA_0QTpQtUbVlUls0VJXg7A8u-Ts1XbjhazAkj7I99e8QcYP7DkM".to_string(),
                auth: "tBHItJI5svbpez7KI4CCXg".to_string(),
            },
        }
    }

    #[test]
    fn subscribe_request_body() {
        let req = SubscribeRequest {
            subscription: subscription(),
            latitude: 40.0,
            longitude: -73.0,
            threshold: 75,
        };
        let body = serde_json::to_value(&req).unwrap();
        assert_eq!(body["latitude"], json!(40.0));
        assert_eq!(body["longitude"], json!(-73.0));
        assert_eq!(body["threshold"], json!(75));
        assert_eq!(
            body["subscription"]["endpoint"],
            json!("https://push.example.com/send/abc")
        );
        assert_eq!(body["subscription"]["expirationTime"], json!(null));
        assert_eq!(body["subscription"]["keys"]["auth"], json!("tBHItJI5svbpez7KI4CCXg"));
        assert_eq!(body.as_object().unwrap().len(), 4);
    }

    #[test]
    fn read_browser_subscription_json() {
        let json = r#"{
          "endpoint": "https://fcm.googleapis.com/fcm/send/c1KrmpTuRm",
          "expirationTime": null,
          "keys": { "p256dh": "BIPUL12DLfytvTajnryr2PRdAgXS3HGKiLqndGcJGabyhHheJYlNGCeXl1dn18gSJ1WAkAPIxr4gK0_dQds4yiI", "auth": "FPssNDTKnInHVndSTdbKFw" }
        }"#;
        let sub: PushSubscription = serde_json::from_str(json).unwrap();
        assert_eq!(sub.endpoint, "https://fcm.googleapis.com/fcm/send/c1KrmpTuRm");
        assert!(sub.expiration_time.is_none());
        assert_eq!(sub.keys.auth, "FPssNDTKnInHVndSTdbKFw");
    }

    #[test]
    fn unsubscribe_request_only_carries_the_subscription() {
        let req = UnsubscribeRequest {
            subscription: subscription(),
        };
        let body = serde_json::to_value(&req).unwrap();
        assert_eq!(body.as_object().unwrap().len(), 1);
        assert!(body["subscription"]["keys"]["p256dh"].is_string());
    }
}
