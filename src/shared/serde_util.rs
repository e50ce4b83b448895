//! Custom serde helpers for request and response wire formats.

/// Serializes an `f64` only when it is finite.
///
/// JSON has no representation for NaN or infinity; `serde_json::to_value`
/// would silently turn them into `null`, which the canonicalizer then drops.
pub mod finite {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if !value.is_finite() {
            return Err(serde::ser::Error::custom(format!(
                "non-finite number: {}",
                value
            )));
        }
        serializer.serialize_f64(*value)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        f64::deserialize(deserializer)
    }
}

/// [`finite`] for optional fields. `None` serializes as `null`.
pub mod finite_opt {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(v) => super::finite::serialize(v, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<f64>::deserialize(deserializer)
    }
}

/// Epoch seconds <-> `Option<DateTime<Utc>>`.
///
/// Transaction records carry `created_epoch` / `last_update_epoch` as integer
/// seconds alongside their ISO strings.
pub mod epoch_seconds_opt {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(dt) => serializer.serialize_some(&dt.timestamp()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<i64>::deserialize(deserializer)? {
            Some(secs) => DateTime::<Utc>::from_timestamp(secs, 0)
                .map(Some)
                .ok_or_else(|| serde::de::Error::custom(format!("Invalid timestamp: {}", secs))),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Serialize};

    #[derive(Serialize)]
    struct Stake {
        #[serde(with = "super::finite")]
        value: f64,
        #[serde(with = "super::finite_opt", skip_serializing_if = "Option::is_none")]
        extra: Option<f64>,
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Stamped {
        #[serde(default, with = "super::epoch_seconds_opt")]
        created_epoch: Option<DateTime<Utc>>,
    }

    #[test]
    fn test_finite_passes_through() {
        let json = serde_json::to_string(&Stake { value: 0.25, extra: None }).unwrap();
        assert_eq!(json, r#"{"value":0.25}"#);
    }

    #[test]
    fn test_finite_rejects_nan_and_infinity() {
        assert!(serde_json::to_value(Stake { value: f64::NAN, extra: None }).is_err());
        assert!(serde_json::to_value(Stake { value: 1.0, extra: Some(f64::INFINITY) }).is_err());
    }

    #[test]
    fn test_epoch_seconds() {
        let s: Stamped = serde_json::from_str(r#"{"created_epoch":1577836800}"#).unwrap();
        assert_eq!(s.created_epoch.unwrap().to_rfc3339(), "2020-01-01T00:00:00+00:00");
        let empty: Stamped = serde_json::from_str("{}").unwrap();
        assert!(empty.created_epoch.is_none());
    }

    #[test]
    fn test_epoch_seconds_reencode() {
        let s: Stamped = serde_json::from_str(r#"{"created_epoch":1577836800}"#).unwrap();
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(json, r#"{"created_epoch":1577836800}"#);
        assert_eq!(serde_json::from_str::<Stamped>(&json).unwrap(), s);

        let none = serde_json::to_string(&Stamped { created_epoch: None }).unwrap();
        assert_eq!(none, r#"{"created_epoch":null}"#);
        assert_eq!(serde_json::from_str::<Stamped>(&none).unwrap().created_epoch, None);
    }
}
