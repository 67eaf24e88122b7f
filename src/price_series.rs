use std::{ops::Index, slice, sync::Arc};

use crate::PriceRecord;

/// Chronologically ordered, immutable price records.
///
/// Index `0` is the earliest record. Storage is shared: cloning a series is
/// O(1) and never copies records, so several
/// [`WindowStream`](crate::WindowStream)s can replay one series side by side.
#[derive(Clone, Debug, PartialEq)]
pub struct PriceSeries {
    records: Arc<[PriceRecord]>,
}

impl PriceSeries {
    /// Number of records.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the series holds no records.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record at `index`, or `None` past the end.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&PriceRecord> {
        self.records.get(index)
    }

    /// All records, earliest first.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[PriceRecord] {
        &self.records
    }

    /// Iterates records from earliest to latest.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, PriceRecord> {
        self.records.iter()
    }

    pub(crate) fn shared(&self) -> Arc<[PriceRecord]> {
        Arc::clone(&self.records)
    }
}

impl From<Vec<PriceRecord>> for PriceSeries {
    fn from(records: Vec<PriceRecord>) -> Self {
        Self {
            records: records.into(),
        }
    }
}

impl FromIterator<PriceRecord> for PriceSeries {
    fn from_iter<I: IntoIterator<Item = PriceRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl Index<usize> for PriceSeries {
    type Output = PriceRecord;

    #[inline]
    fn index(&self, index: usize) -> &PriceRecord {
        &self.records[index]
    }
}

impl<'a> IntoIterator for &'a PriceSeries {
    type Item = &'a PriceRecord;
    type IntoIter = slice::Iter<'a, PriceRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
