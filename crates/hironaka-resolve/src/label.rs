//! Chart labels and chart variable names.
//!
//! A label is the path of exceptional coordinates (1-based) from the root,
//! so labels of distinct charts never collide and no counter is needed.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A string that is not a dot-separated list of positive integers.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("invalid chart label '{0}'")]
pub struct ParseLabelError(String);

/// Path from the root to a chart. The root has the empty label `""`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChartLabel(Vec<usize>);

impl ChartLabel {
    /// The label of the root chart.
    #[must_use]
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Returns true for the root label.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Label of the child whose exceptional coordinate has index `coordinate`
    /// (0-based) in this chart.
    #[must_use]
    pub fn child(&self, coordinate: usize) -> Self {
        let mut path = self.0.clone();
        path.push(coordinate + 1);
        Self(path)
    }

    /// Label of the parent chart, `None` for the root.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        let (_, rest) = self.0.split_last()?;
        Some(Self(rest.to_vec()))
    }

    /// Number of blow-ups between the root and this chart.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    /// The 0-based exceptional coordinate of the last blow-up.
    #[must_use]
    pub fn exceptional_coordinate(&self) -> Option<usize> {
        self.0.last().map(|c| c - 1)
    }

    /// Name of coordinate `base` in the chart with this label.
    ///
    /// The root keeps the base name; other charts append their label, e.g.
    /// `a_1^(2.1)`.
    #[must_use]
    pub fn variable_name(&self, base: &str) -> String {
        if self.is_root() {
            base.to_string()
        } else {
            format!("{base}^({self})")
        }
    }
}

impl fmt::Display for ChartLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        write!(f, "{}", parts.join("."))
    }
}

impl FromStr for ChartLabel {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Ok(Self::root());
        }
        s.split('.')
            .map(|part| match part.parse::<usize>() {
                Ok(n) if n > 0 => Ok(n),
                _ => Err(ParseLabelError(s.to_string())),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

impl serde::Serialize for ChartLabel {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for ChartLabel {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_and_children() {
        let root = ChartLabel::root();
        assert!(root.is_root());
        assert_eq!(root.to_string(), "");
        assert_eq!(root.parent(), None);

        let child = root.child(2).child(0);
        assert_eq!(child.to_string(), "3.1");
        assert_eq!(child.depth(), 2);
        assert_eq!(child.exceptional_coordinate(), Some(0));
        assert_eq!(child.parent(), Some(root.child(2)));
    }

    #[test]
    fn test_labels_are_unique_per_path() {
        let a = ChartLabel::root().child(0).child(10);
        let b = ChartLabel::root().child(10).child(0);
        assert_ne!(a, b);
        assert_ne!(a.to_string(), b.to_string());
    }

    #[test]
    fn test_parse() {
        let label: ChartLabel = "3.1".parse().unwrap();
        assert_eq!(label, ChartLabel::root().child(2).child(0));
        assert_eq!("".parse::<ChartLabel>().unwrap(), ChartLabel::root());
        assert!("3.x".parse::<ChartLabel>().is_err());
        assert!("0".parse::<ChartLabel>().is_err());
    }

    #[test]
    fn test_variable_names() {
        assert_eq!(ChartLabel::root().variable_name("a_1"), "a_1");
        let label = ChartLabel::root().child(1).child(0);
        assert_eq!(label.variable_name("b_2"), "b_2^(2.1)");
    }
}
