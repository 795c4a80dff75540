use crate::config::BuildError;
use crate::evaluation::{CurveFormat, LearningCurve};
use anyhow::{Context, Result};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

pub const DEFAULT_ORDERING_MEASUREMENT: &str = "learning evaluation instances";

fn default_ordering_measurement() -> String {
    DEFAULT_ORDERING_MEASUREMENT.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct CurveParameters {
    #[serde(default = "default_ordering_measurement")]
    #[schemars(
        title = "Ordering measurement",
        description = "Measurement whose value keeps the curve's rows in order."
    )]
    pub ordering_measurement: String,

    #[serde(default)]
    #[schemars(
        title = "Output format",
        description = "Text layout used when the curve is exported."
    )]
    pub format: CurveFormat,
}

impl Default for CurveParameters {
    fn default() -> Self {
        Self {
            ordering_measurement: default_ordering_measurement(),
            format: CurveFormat::default(),
        }
    }
}

/// Reads [`CurveParameters`] from a JSON file; absent fields take their defaults.
pub fn load_parameters<P: AsRef<Path>>(path: P) -> Result<CurveParameters> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read curve parameters from {}", path.display()))?;
    let params: CurveParameters = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse curve parameters in {}", path.display()))?;
    info!(
        path = %path.display(),
        ordering = %params.ordering_measurement,
        format = %params.format,
        "loaded curve parameters"
    );
    Ok(params)
}

impl TryFrom<CurveParameters> for LearningCurve {
    type Error = BuildError;

    fn try_from(p: CurveParameters) -> Result<Self, Self::Error> {
        if p.ordering_measurement.trim().is_empty() {
            return Err(BuildError::InvalidParameter(
                "ordering_measurement must not be blank".into(),
            ));
        }
        Ok(LearningCurve::new(p.ordering_measurement))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn root_props_of<T: JsonSchema>() -> Value {
        let root = schemars::schema_for!(T);
        let v = serde_json::to_value(root).expect("schema to JSON");
        v.get("schema")
            .cloned()
            .unwrap_or(v)
            .get("properties")
            .cloned()
            .unwrap_or_else(|| json!({}))
    }

    #[test]
    fn defaults() {
        let p = CurveParameters::default();
        assert_eq!(p.ordering_measurement, DEFAULT_ORDERING_MEASUREMENT);
        assert_eq!(p.format, CurveFormat::Csv);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let p: CurveParameters = serde_json::from_str("{}").unwrap();
        assert_eq!(p, CurveParameters::default());

        let p: CurveParameters = serde_json::from_str(r#"{"format":"json"}"#).unwrap();
        assert_eq!(p.format, CurveFormat::Json);
        assert_eq!(p.ordering_measurement, DEFAULT_ORDERING_MEASUREMENT);
    }

    #[test]
    fn schema_describes_fields() {
        let props = root_props_of::<CurveParameters>();
        assert!(props.get("ordering_measurement").is_some());
        assert!(props.get("format").is_some());
        assert_eq!(
            props["ordering_measurement"]["title"],
            json!("Ordering measurement")
        );
    }

    #[test]
    fn builds_curve_with_ordering_name() {
        let p = CurveParameters {
            ordering_measurement: "progress".into(),
            format: CurveFormat::Tsv,
        };
        let lc = LearningCurve::try_from(p).unwrap();
        assert_eq!(lc.ordering_measurement_name(), "progress");
    }

    #[test]
    fn blank_ordering_name_is_rejected() {
        let p = CurveParameters {
            ordering_measurement: "  ".into(),
            format: CurveFormat::Csv,
        };
        let err = LearningCurve::try_from(p).unwrap_err();
        assert!(matches!(err, BuildError::InvalidParameter(_)));
    }

    #[test]
    fn load_from_file() {
        let mut tf = NamedTempFile::new().unwrap();
        write!(tf, r#"{{"ordering_measurement":"step","format":"tsv"}}"#).unwrap();
        let p = load_parameters(tf.path()).unwrap();
        assert_eq!(p.ordering_measurement, "step");
        assert_eq!(p.format, CurveFormat::Tsv);
    }

    #[test]
    fn load_reports_path_on_bad_json() {
        let mut tf = NamedTempFile::new().unwrap();
        write!(tf, "not json").unwrap();
        let err = load_parameters(tf.path()).unwrap_err();
        assert!(format!("{err}").contains("failed to parse curve parameters"));
    }
}
