/// Summarized scalar metric produced by an evaluator or a measure collection.
///
/// Typical examples: `"learning evaluation instances"`, `"accuracy"`, `"BSS"`.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub name: String,
    pub value: f64,
}

impl Measurement {
    /// Convenience constructor
    #[inline]
    pub fn new<N: Into<String>>(name: N, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// First measurement in `measurements` called `name`, if any.
    pub fn named<'a>(name: &str, measurements: &'a [Measurement]) -> Option<&'a Measurement> {
        measurements.iter().find(|m| m.name == name)
    }
}

/// Latest named prediction value (e.g. a class vote), kept as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vote {
    pub name: String,
    pub value: String,
}

impl Vote {
    #[inline]
    pub fn new<N: Into<String>, V: Into<String>>(name: N, value: V) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}
