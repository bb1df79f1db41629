//! Lane allocation within one margin
//!
//! Greedy first-fit in data order: each reading takes the lowest lane not
//! holding an overlapping span. Slots are never released or compacted during a
//! pass, so the result depends only on the input order.

use super::geometry::PixelSpan;

/// A span already placed in a lane during the current pass
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OccupiedSlot {
    pub span: PixelSpan,
    pub lane: usize,
}

/// Per-margin lane bookkeeping for one layout pass
#[derive(Clone, Debug, Default)]
pub struct LaneAllocator {
    slots: Vec<OccupiedSlot>,
}

impl LaneAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign the lowest lane free of overlaps with `span` and record it
    pub fn allocate(&mut self, span: PixelSpan) -> usize {
        let mut lane = 0;
        while self
            .slots
            .iter()
            .any(|slot| slot.lane == lane && span.overlaps(&slot.span))
        {
            lane += 1;
        }

        self.slots.push(OccupiedSlot { span, lane });
        lane
    }

    /// Number of lanes in use (highest lane + 1)
    pub fn lane_count(&self) -> usize {
        self.slots.iter().map(|slot| slot.lane + 1).max().unwrap_or(0)
    }

    pub fn slots(&self) -> &[OccupiedSlot] {
        &self.slots
    }
}
