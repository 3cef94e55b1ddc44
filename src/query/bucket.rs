//! Named numeric range buckets for range-style filters

use serde::{Deserialize, Serialize};

/// A named numeric range used by range filters (e.g., price brackets).
///
/// All bounds are optional; a value matches when every present bound
/// holds. The original price brackets map as:
///
/// - `Free` — `eq: 0`
/// - `$0-$50` — `le: 50` (the source applies no lower bound)
/// - `$50-$100` — `gt: 50, le: 100`
/// - `$100+` — `gt: 100`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Bucket {
    /// Display label, also the value selected by the filter menu
    pub label: String,

    /// Value must equal this exactly
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eq: Option<f64>,

    /// Value must be strictly greater
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gt: Option<f64>,

    /// Value must be greater or equal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ge: Option<f64>,

    /// Value must be strictly smaller
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lt: Option<f64>,

    /// Value must be smaller or equal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub le: Option<f64>,
}

impl Bucket {
    /// Create an unbounded bucket with the given label
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            eq: None,
            gt: None,
            ge: None,
            lt: None,
            le: None,
        }
    }

    /// Builder-style exact bound
    pub fn exactly(mut self, value: f64) -> Self {
        self.eq = Some(value);
        self
    }

    /// Builder-style strict lower bound
    pub fn above(mut self, value: f64) -> Self {
        self.gt = Some(value);
        self
    }

    /// Builder-style inclusive upper bound
    pub fn at_most(mut self, value: f64) -> Self {
        self.le = Some(value);
        self
    }

    /// Check whether a value falls within this bucket
    pub fn contains(&self, value: f64) -> bool {
        if let Some(eq) = self.eq {
            if value != eq {
                return false;
            }
        }
        if let Some(gt) = self.gt {
            if value <= gt {
                return false;
            }
        }
        if let Some(ge) = self.ge {
            if value < ge {
                return false;
            }
        }
        if let Some(lt) = self.lt {
            if value >= lt {
                return false;
            }
        }
        if let Some(le) = self.le {
            if value > le {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn price_brackets() -> Vec<Bucket> {
        vec![
            Bucket::new("Free").exactly(0.0),
            Bucket::new("$0-$50").at_most(50.0),
            Bucket::new("$50-$100").above(50.0).at_most(100.0),
            Bucket::new("$100+").above(100.0),
        ]
    }

    #[test]
    fn test_free_bucket_is_exact() {
        let free = &price_brackets()[0];
        assert!(free.contains(0.0));
        assert!(!free.contains(0.01));
    }

    #[test]
    fn test_mid_bracket_excludes_lower_bound() {
        // "$50-$100" means 50 < price <= 100
        let mid = &price_brackets()[2];
        assert!(!mid.contains(50.0));
        assert!(mid.contains(50.01));
        assert!(mid.contains(100.0));
        assert!(!mid.contains(100.01));
    }

    #[test]
    fn test_low_bracket_has_no_lower_bound() {
        let low = &price_brackets()[1];
        assert!(low.contains(0.0));
        assert!(low.contains(50.0));
        assert!(!low.contains(50.01));
    }

    #[test]
    fn test_open_upper_bracket() {
        let high = &price_brackets()[3];
        assert!(!high.contains(100.0));
        assert!(high.contains(100.01));
        assert!(high.contains(99999.0));
    }

    #[test]
    fn test_unbounded_bucket_matches_everything() {
        let all = Bucket::new("any");
        assert!(all.contains(f64::MIN));
        assert!(all.contains(0.0));
        assert!(all.contains(f64::MAX));
    }

    #[test]
    fn test_yaml_deserialization() {
        let bucket: Bucket =
            serde_yaml::from_str("label: \"$50-$100\"\ngt: 50\nle: 100\n").unwrap();
        assert_eq!(bucket.label, "$50-$100");
        assert!(!bucket.contains(50.0));
        assert!(bucket.contains(75.0));
    }
}
