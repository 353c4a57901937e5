use ordered_float::NotNan;

/// A criterion value as submitted for an alternative: a non-NaN f64 in the range [0, 1].
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Normalized(NotNan<f64>);

impl Normalized {
    pub fn new(value: f64) -> Option<Self> {
        // adding 0.0 turns -0.0 into 0.0
        let value = NotNan::new(value + 0.0).ok()?;
        if *value < 0.0 || *value > 1.0 {
            return None;
        }
        Some(Self(value))
    }

    pub fn as_f64(&self) -> f64 {
        self.0.into_inner()
    }
}

/// A positive non-NaN f64 value. Weights are not required to sum to 1.
#[derive(Clone, Copy, PartialEq)]
pub struct Weight(NotNan<f64>);

impl Weight {
    pub const ZERO: Self = Self(unsafe { NotNan::new_unchecked(0.0) });

    pub fn new(value: f64) -> Option<Self> {
        let value = NotNan::new(value + 0.0).ok()?;
        if *value < 0.0 || value.is_infinite() {
            return None;
        }
        Some(Self(value))
    }

    pub fn as_f64(&self) -> f64 {
        self.0.into_inner()
    }
}

impl std::fmt::Debug for Weight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A non-negative, finite score with a total order. Unlike [`Normalized`], scores are unbounded
/// above: cost criteria normalize to values >= 1.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Score(NotNan<f64>);

impl Score {
    pub const ZERO: Self = Self(unsafe { NotNan::new_unchecked(0.0) });

    pub fn new(value: f64) -> Option<Self> {
        let value = NotNan::new(value + 0.0).ok()?;
        if *value < 0.0 || value.is_infinite() {
            return None;
        }
        Some(Self(value))
    }

    pub fn as_f64(&self) -> f64 {
        self.0.into_inner()
    }
}

impl std::fmt::Debug for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl serde::Serialize for Score {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

#[track_caller]
pub fn assert_within(value: f64, expected: f64, tolerance: f64) {
    let diff = (value - expected).abs();
    assert!(
        diff <= tolerance,
        "Expected value of {expected} +- {tolerance} but got {value} which is off by {diff}",
    );
}
