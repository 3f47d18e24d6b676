//! The current-level reading served by `/api/current`.
//!
//! There is no collector behind this yet: [`CURRENT`] is a fixed reading and
//! the wire body is rendered once at startup.

use serde::Serialize;

/// A lake level reading plus a status flag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurrentLevel {
    /// Surface elevation in feet.
    pub level: f64,
    pub status: &'static str,
}

/// The reading every request receives.
pub const CURRENT: CurrentLevel = CurrentLevel {
    level: 3570.42,
    status: "OK",
};

impl CurrentLevel {
    /// Render the exact wire body, e.g. `{"level": 3570.42, "status": "OK"}`.
    ///
    /// Written by hand rather than through `serde_json` because clients see a
    /// space after each colon, which the compact serializer does not emit.
    pub fn to_json_body(&self) -> String {
        format!(
            r#"{{"level": {}, "status": "{}"}}"#,
            self.level, self.status
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_body_matches_wire_literal() {
        assert_eq!(CURRENT.to_json_body(), r#"{"level": 3570.42, "status": "OK"}"#);
    }

    #[test]
    fn body_is_valid_json_with_both_fields() {
        let json: serde_json::Value = serde_json::from_str(&CURRENT.to_json_body()).unwrap();
        assert_eq!(json["level"].as_f64(), Some(3570.42));
        assert_eq!(json["status"], "OK");
        assert_eq!(json.as_object().unwrap().len(), 2);
    }

    #[test]
    fn hand_rendered_body_agrees_with_serde() {
        let from_serde = serde_json::to_value(CURRENT).unwrap();
        let from_body: serde_json::Value = serde_json::from_str(&CURRENT.to_json_body()).unwrap();
        assert_eq!(from_serde, from_body);
    }

    #[test]
    fn whole_number_levels_render_without_fraction() {
        let reading = CurrentLevel { level: 3600.0, status: "STALE" };
        assert_eq!(reading.to_json_body(), r#"{"level": 3600, "status": "STALE"}"#);
    }
}
