//! Textual vector codec: `AV:L/AC:L/Au:N/...` to and from [`CcssVector`].

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;

use crate::constants::{SEGMENT_SEPARATOR, VALUE_SEPARATOR};
use crate::errors::{VectorError, VectorResult};
use crate::metric::{Metric, MetricGroup};
use crate::record::{unreachable_index, CcssVector};

/// Position of the parser inside the fixed metric order.
#[derive(Debug, Default)]
struct Cursor {
    /// Index into [`MetricGroup::ALL`]; 3 once every group is consumed.
    group: usize,
    /// Index inside the current group.
    position: usize,
}

impl Cursor {
    /// Check that `found` is the metric expected at this position.
    ///
    /// At the head of the temporal group anything other than `GEL` means the
    /// temporal group was omitted, so the cursor jumps to `LVP` and checks
    /// again.
    fn expect(&mut self, found: Metric) -> VectorResult<()> {
        let Some(mut group) = MetricGroup::ALL.get(self.group).copied() else {
            return Err(VectorError::InvalidMetricOrder {
                expected: "end of vector".to_string(),
                found: found.abbreviation().to_string(),
            });
        };

        if group == MetricGroup::Temporal
            && self.position == 0
            && found != Metric::GeneralExploitLevel
        {
            self.group += 1;
            group = MetricGroup::Environmental;
        }

        let expected = group.metrics()[self.position];
        if expected != found {
            return Err(VectorError::InvalidMetricOrder {
                expected: expected.abbreviation().to_string(),
                found: found.abbreviation().to_string(),
            });
        }
        Ok(())
    }

    fn advance(&mut self) {
        self.position += 1;
        let len = MetricGroup::ALL
            .get(self.group)
            .map_or(0, |g| g.metrics().len());
        if self.position == len {
            self.group += 1;
            self.position = 0;
        }
    }

    /// The last group touched must have been consumed completely.
    fn finish(&self) -> VectorResult<()> {
        if self.position == 0 {
            return Ok(());
        }
        match MetricGroup::ALL.get(self.group) {
            Some(group) => Err(VectorError::TooShortVector {
                group: *group,
                specified: self.position,
                required: group.metrics().len(),
            }),
            None => Ok(()),
        }
    }
}

impl CcssVector {
    /// Parse a CCSS vector.
    ///
    /// Base metrics are mandatory; the temporal and environmental groups are
    /// optional but must be complete when present. Metric order is fixed.
    /// On error nothing is returned, so no partially filled record escapes.
    pub fn parse(vector: &str) -> VectorResult<Self> {
        let result = Self::parse_segments(vector);
        if let Err(ref error) = result {
            debug!(vector, %error, "rejected CCSS vector");
        }
        result
    }

    fn parse_segments(vector: &str) -> VectorResult<Self> {
        let mut scratch = Self::blank();
        let mut cursor = Cursor::default();

        for segment in vector.split(SEGMENT_SEPARATOR) {
            let (abbreviation, value) = segment
                .split_once(VALUE_SEPARATOR)
                .unwrap_or((segment, ""));
            let metric = Metric::from_abbreviation(abbreviation)
                .ok_or_else(|| VectorError::unknown_metric(abbreviation))?;

            cursor.expect(metric)?;
            scratch.set_metric(metric, value)?;
            cursor.advance();
        }

        cursor.finish()?;
        Ok(scratch)
    }

    /// Current wire value of the metric named `abbreviation`.
    pub fn get(&self, abbreviation: &str) -> VectorResult<&'static str> {
        let metric = Metric::from_abbreviation(abbreviation)
            .ok_or_else(|| VectorError::unknown_metric(abbreviation))?;
        Ok(self.metric(metric))
    }

    /// Set the metric named `abbreviation` to `value`.
    ///
    /// The value is validated before anything is written.
    pub fn set(&mut self, abbreviation: &str, value: &str) -> VectorResult<()> {
        let metric = Metric::from_abbreviation(abbreviation)
            .ok_or_else(|| VectorError::unknown_metric(abbreviation))?;
        self.set_metric(metric, value)
    }

    /// Current wire value of `metric`.
    pub fn metric(&self, metric: Metric) -> &'static str {
        let index = self.index_of(metric);
        metric
            .value_at(index)
            .unwrap_or_else(|| unreachable_index(metric, index))
    }

    pub fn set_metric(&mut self, metric: Metric, value: &str) -> VectorResult<()> {
        let index = metric
            .value_index(value)
            .ok_or_else(|| VectorError::InvalidMetricValue {
                metric,
                value: value.to_string(),
            })?;
        self.write_index(metric, index);
        Ok(())
    }

    /// Metrics that appear in the canonical vector, with their values.
    ///
    /// Base is always present; an optional group is present only when at
    /// least one of its metrics is not `ND`.
    pub fn present_metrics(&self) -> impl Iterator<Item = (Metric, &'static str)> + '_ {
        MetricGroup::ALL
            .into_iter()
            .filter(move |group| self.is_group_defined(*group))
            .flat_map(|group| group.metrics().iter().copied())
            .map(move |metric| (metric, self.metric(metric)))
    }

    /// Exact length of the canonical vector string.
    pub fn encoded_len(&self) -> usize {
        let (count, bytes) = self
            .present_metrics()
            .fold((0usize, 0usize), |(count, bytes), (metric, value)| {
                (count + 1, bytes + metric.abbreviation().len() + 1 + value.len())
            });
        bytes + count.saturating_sub(1)
    }

    /// Serialize to the canonical vector string.
    pub fn to_vector_string(&self) -> String {
        let mut out = String::with_capacity(self.encoded_len());
        // Writing into a String cannot fail.
        let _ = self.write_segments(&mut out);
        out
    }

    fn write_segments<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        for (i, (metric, value)) in self.present_metrics().enumerate() {
            if i > 0 {
                out.write_char(SEGMENT_SEPARATOR)?;
            }
            out.write_str(metric.abbreviation())?;
            out.write_char(VALUE_SEPARATOR)?;
            out.write_str(value)?;
        }
        Ok(())
    }
}

impl fmt::Display for CcssVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_segments(f)
    }
}

impl FromStr for CcssVector {
    type Err = VectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for CcssVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CcssVector {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(de::Error::custom)
    }
}
