// Chart domain models - declarative widget descriptions handed to the charting layer
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;
use std::fmt;
use std::ops::Index;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartKind {
    Pie,
    #[default]
    Bar,
    Line,
    Area,
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ChartKind::Pie => "pie",
            ChartKind::Bar => "bar",
            ChartKind::Line => "line",
            ChartKind::Area => "area",
        };
        f.write_str(name)
    }
}

/// A single cell of a chart data point: either a number or a label.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum DataValue {
    Number(f64),
    Text(String),
}

impl DataValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            DataValue::Number(n) => Some(*n),
            DataValue::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            DataValue::Number(_) => None,
            DataValue::Text(s) => Some(s),
        }
    }
}

pub type DataPoint = BTreeMap<String, DataValue>;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChartSpec {
    #[serde(alias = "type")]
    pub kind: ChartKind,
    pub data_keys: Vec<String>,
    pub colors: Vec<String>,
    #[serde(alias = "data")]
    pub data_points: Vec<DataPoint>,
}

impl ChartSpec {
    /// Sum of a numeric series across all data points; text cells are skipped.
    pub fn series_total(&self, key: &str) -> f64 {
        self.data_points
            .iter()
            .filter_map(|point| point.get(key).and_then(DataValue::as_number))
            .sum()
    }
}

/// Chart specs keyed by name, kept in the order the tenant declared them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartMap(Vec<(String, ChartSpec)>);

impl ChartMap {
    pub fn get(&self, key: &str) -> Option<&ChartSpec> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, chart)| chart)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ChartSpec)> {
        self.0.iter().map(|(key, chart)| (key.as_str(), chart))
    }

    /// Replaces an existing entry in place, otherwise appends.
    pub fn insert(&mut self, key: String, chart: ChartSpec) {
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = chart,
            None => self.0.push((key, chart)),
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Index<&str> for ChartMap {
    type Output = ChartSpec;

    fn index(&self, key: &str) -> &ChartSpec {
        match self.get(key) {
            Some(chart) => chart,
            None => panic!("no chart named {}", key),
        }
    }
}

impl<'de> Deserialize<'de> for ChartMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ChartMapVisitor;

        impl<'de> Visitor<'de> for ChartMapVisitor {
            type Value = ChartMap;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a table of chart specs")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<ChartMap, A::Error> {
                let mut map = ChartMap::default();
                while let Some((key, chart)) = access.next_entry::<String, ChartSpec>()? {
                    map.insert(key, chart);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(ChartMapVisitor)
    }
}
