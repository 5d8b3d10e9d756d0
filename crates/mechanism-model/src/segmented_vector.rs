//! A flat vector addressed by joint id through a precomputed range table, built once per
//! mechanism (for `q` and separately for `v`) rather than recomputed from running
//! offsets on every access.

use mechanism_spatial::scalar::Scalar;
use std::ops::Range;

/// A mapping from dense joint id to a contiguous range within a flat buffer. Built once
/// per mechanism (for `q` and separately for `v`) and shared by every `SegmentedVector`
/// over that mechanism, regardless of scalar type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SegmentLayout {
    ranges: Vec<Range<usize>>,
}

impl SegmentLayout {
    /// Builds a layout from the per-joint widths, in joint-id order starting at joint 1
    /// (joint 0 is reserved for the virtual root-to-world attachment and has zero width).
    #[must_use]
    pub fn from_widths(widths: &[usize]) -> Self {
        let mut ranges = Vec::with_capacity(widths.len());
        let mut offset = 0;
        for &width in widths {
            ranges.push(offset..offset + width);
            offset += width;
        }
        Self { ranges }
    }

    #[must_use]
    pub fn total_len(&self) -> usize {
        self.ranges.last().map_or(0, |r| r.end)
    }

    #[must_use]
    pub fn range(&self, joint_index: usize) -> Range<usize> {
        self.ranges[joint_index].clone()
    }

    #[must_use]
    pub fn njoints(&self) -> usize {
        self.ranges.len()
    }
}

/// A flat buffer addressed by joint id through a shared [`SegmentLayout`].
#[derive(Clone, Debug, PartialEq)]
pub struct SegmentedVector<T: Scalar> {
    data: Vec<T>,
}

impl<T: Scalar> SegmentedVector<T> {
    #[must_use]
    pub fn zeros(layout: &SegmentLayout) -> Self {
        Self {
            data: vec![T::zero(); layout.total_len()],
        }
    }

    #[must_use]
    pub fn from_flat(data: Vec<T>) -> Self {
        Self { data }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[must_use]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    #[must_use]
    pub fn segment(&self, layout: &SegmentLayout, joint_index: usize) -> &[T] {
        &self.data[layout.range(joint_index)]
    }

    pub fn segment_mut(&mut self, layout: &SegmentLayout, joint_index: usize) -> &mut [T] {
        &mut self.data[layout.range(joint_index)]
    }

    pub fn update_segment(&mut self, layout: &SegmentLayout, joint_index: usize, values: &[T]) {
        self.data[layout.range(joint_index)].copy_from_slice(values);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranges_cover_total_width_exactly_once() {
        let layout = SegmentLayout::from_widths(&[1, 0, 3, 1]);
        assert_eq!(layout.total_len(), 5);
        assert_eq!(layout.range(0), 0..1);
        assert_eq!(layout.range(1), 1..1);
        assert_eq!(layout.range(2), 1..4);
        assert_eq!(layout.range(3), 4..5);
    }

    #[test]
    fn update_segment_writes_in_place() {
        let layout = SegmentLayout::from_widths(&[2, 1]);
        let mut v = SegmentedVector::<f64>::zeros(&layout);
        v.update_segment(&layout, 0, &[1.0, 2.0]);
        assert_eq!(v.segment(&layout, 0), &[1.0, 2.0]);
        assert_eq!(v.segment(&layout, 1), &[0.0]);
    }
}
