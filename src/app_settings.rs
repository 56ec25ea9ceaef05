use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Upload size hint shown in the drop zone, enforced by the photo intake.
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AppSettings {
    /// Simulated latency for text questions.
    pub text_delay_ms: u64,
    /// Simulated latency for photo analysis.
    pub photo_delay_ms: u64,
    pub max_upload_bytes: u64,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            text_delay_ms: 2_000,
            photo_delay_ms: 3_000,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl AppSettings {
    pub fn text_delay(&self) -> Duration {
        Duration::from_millis(self.text_delay_ms)
    }

    pub fn photo_delay(&self) -> Duration {
        Duration::from_millis(self.photo_delay_ms)
    }

    /// Human readable form of the upload limit, e.g. "10MB".
    pub fn max_upload_label(&self) -> String {
        let mb = self.max_upload_bytes as f64 / (1024.0 * 1024.0);
        if mb.fract() == 0.0 {
            format!("{mb:.0}MB")
        } else {
            format!("{mb:.1}MB")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let s: AppSettings = serde_json::from_str(r#"{ "text_delay_ms": 50 }"#).unwrap();
        assert_eq!(s.text_delay(), Duration::from_millis(50));
        assert_eq!(s.photo_delay(), Duration::from_millis(3_000));
        assert_eq!(s.max_upload_bytes, DEFAULT_MAX_UPLOAD_BYTES);
    }

    #[test]
    fn upload_label() {
        assert_eq!(AppSettings::default().max_upload_label(), "10MB");
        let s = AppSettings {
            max_upload_bytes: 1024 * 1024 * 3 / 2,
            ..Default::default()
        };
        assert_eq!(s.max_upload_label(), "1.5MB");
    }
}
