// Tue Aug 25 2026 - Alex

use crate::display::row::{DisplayRow, BAD_VALUE_SENTINEL};
use crate::memory::{MemoryRegion, MemorySubsystem};
use crate::search::{ElementWidth, SearchEngine};
use parking_lot::Mutex;
use serde::Serialize;
use std::sync::Arc;

/// Hard cap on how many candidates are ever decoded per update cycle. The
/// full set is retained by the engine; only the window below this cap is
/// rendered.
pub const DISPLAY_CAP: usize = 4096;

/// Decoded rows for one update cycle plus the true match count.
#[derive(Debug, Clone, Serialize)]
pub struct SampleOutput {
    pub rows: Vec<DisplayRow>,
    pub total_matches: usize,
    pub truncated: bool,
}

impl SampleOutput {
    fn empty() -> Self {
        Self {
            rows: Vec::new(),
            total_matches: 0,
            truncated: false,
        }
    }

    /// Status line for the result label. Reports the true match count even
    /// when the rendered rows are capped.
    pub fn summary(&self) -> String {
        if self.total_matches == 0 {
            String::new()
        } else if self.truncated {
            format!("Too many matches to display ({})", self.total_matches)
        } else {
            format!("{} Match(es)", self.total_matches)
        }
    }
}

/// Produces live-refreshed typed views of the engine's candidates. Each call
/// is independent and carries no state between invocations; the only
/// persistent piece is the in-flight guard that makes timer-driven sampling
/// non-overlapping.
pub struct DisplaySampler {
    memory: Arc<dyn MemorySubsystem>,
    in_flight: Mutex<()>,
}

impl DisplaySampler {
    pub fn new(memory: Arc<dyn MemorySubsystem>) -> Self {
        Self {
            memory,
            in_flight: Mutex::new(()),
        }
    }

    /// Decodes rows for the candidate index window `[window_start,
    /// window_end)`, clamped to `[0, min(count, DISPLAY_CAP))`.
    pub fn sample(&self, engine: &SearchEngine, window_start: usize, window_end: usize) -> SampleOutput {
        let _guard = self.in_flight.lock();
        self.sample_window(engine, window_start, window_end)
    }

    /// Timer-tick variant: returns `None` instead of queueing when a
    /// previous sample is still in flight.
    pub fn try_sample(
        &self,
        engine: &SearchEngine,
        window_start: usize,
        window_end: usize,
    ) -> Option<SampleOutput> {
        let _guard = self.in_flight.try_lock()?;
        Some(self.sample_window(engine, window_start, window_end))
    }

    fn sample_window(&self, engine: &SearchEngine, window_start: usize, window_end: usize) -> SampleOutput {
        let session = match engine.session() {
            Some(session) => session,
            None => return SampleOutput::empty(),
        };
        let total = session.candidates().len();
        if total == 0 {
            return SampleOutput::empty();
        }

        let visible = total.min(DISPLAY_CAP);
        let start = window_start.min(visible);
        let end = window_end.min(visible).max(start);

        let region = *session.region();
        let width = session.width();
        let window = &session.candidates()[start..end];
        let mut rows = Vec::with_capacity(window.len());

        let memory = Arc::clone(&self.memory);
        let mut decode = || {
            for candidate in window {
                rows.push(decode_row(&*memory, &region, width, candidate.offset));
            }
        };
        memory.run_synchronized(&mut decode);

        SampleOutput {
            rows,
            total_matches: total,
            truncated: total > DISPLAY_CAP,
        }
    }
}

fn decode_row(
    memory: &dyn MemorySubsystem,
    region: &MemoryRegion,
    width: ElementWidth,
    offset: u32,
) -> DisplayRow {
    let address = region.to_absolute(offset);
    if !memory.is_readable_address(address) {
        return DisplayRow::unreadable(address);
    }

    let hex = match width.size() {
        1 => format!("{:02x}", memory.read_u8(address)),
        2 => format!("{:04x}", memory.read_u16(address)),
        _ => format!("{:08x}", memory.read_u32(address)),
    };
    let decimal = match u32::from_str_radix(&hex, 16) {
        Ok(value) => value.to_string(),
        Err(_) => BAD_VALUE_SENTINEL.to_string(),
    };
    // Always reinterpreted as a 4-byte float; only meaningful for the float
    // width, shown for the others anyway.
    let float = memory.read_f32(address).to_string();

    DisplayRow {
        address,
        hex,
        decimal,
        float,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{EmulatedMemory, RegionKind};
    use crate::search::ComparisonPredicate;

    const BASE: u32 = 0x8000_0000;

    fn searched_engine(memory: &Arc<EmulatedMemory>, width: ElementWidth) -> SearchEngine {
        let mut engine = SearchEngine::new(memory.clone());
        engine.initialize(RegionKind::Main, width, None).unwrap();
        engine
    }

    #[test]
    fn test_rows_decode_all_columns() {
        let memory = Arc::new(EmulatedMemory::new().with_region(
            RegionKind::Main,
            BASE,
            1.5f32.to_bits().to_be_bytes().to_vec(),
        ));
        let engine = searched_engine(&memory, ElementWidth::Int);
        let sampler = DisplaySampler::new(memory.clone());

        let output = sampler.sample(&engine, 0, usize::MAX);
        assert_eq!(output.total_matches, 1);
        assert!(!output.truncated);
        assert_eq!(output.summary(), "1 Match(es)");

        let row = &output.rows[0];
        assert_eq!(row.address, BASE);
        assert_eq!(row.address_text(), "80000000");
        assert_eq!(row.hex, "3fc00000");
        assert_eq!(row.decimal, 0x3fc0_0000u32.to_string());
        assert_eq!(row.float, "1.5");
    }

    #[test]
    fn test_row_width_formatting() {
        let memory = Arc::new(EmulatedMemory::new().with_region(
            RegionKind::Main,
            BASE,
            vec![0x0a, 0x0b, 0x0c, 0x0d],
        ));

        let engine = searched_engine(&memory, ElementWidth::Byte);
        let sampler = DisplaySampler::new(memory.clone());
        let output = sampler.sample(&engine, 0, usize::MAX);
        assert_eq!(output.rows[0].hex, "0a");
        assert_eq!(output.rows[0].decimal, "10");

        let engine = searched_engine(&memory, ElementWidth::Short);
        let output = sampler.sample(&engine, 0, usize::MAX);
        assert_eq!(output.rows[0].hex, "0a0b");
        assert_eq!(output.rows[1].hex, "0c0d");
    }

    #[test]
    fn test_rows_track_live_memory() {
        let memory = Arc::new(EmulatedMemory::new().with_region(
            RegionKind::Main,
            BASE,
            vec![0u8; 4],
        ));
        let engine = searched_engine(&memory, ElementWidth::Int);
        let sampler = DisplaySampler::new(memory.clone());

        assert_eq!(sampler.sample(&engine, 0, 1).rows[0].decimal, "0");
        memory.poke_u32(BASE, 77);
        // Rows always show the current bytes, not the recorded baseline.
        assert_eq!(sampler.sample(&engine, 0, 1).rows[0].decimal, "77");
    }

    #[test]
    fn test_unreadable_rows_use_sentinels() {
        let memory = Arc::new(EmulatedMemory::new().with_region(
            RegionKind::Main,
            BASE,
            vec![0u8; 8],
        ));
        let engine = searched_engine(&memory, ElementWidth::Int);
        let sampler = DisplaySampler::new(memory.clone());

        memory.remove_region(RegionKind::Main);
        let output = sampler.sample(&engine, 0, usize::MAX);
        assert_eq!(output.rows.len(), 2);
        for row in &output.rows {
            assert!(!row.is_readable());
            assert_eq!(row.hex, "---");
            assert_eq!(row.decimal, "-");
            assert_eq!(row.float, "-");
        }
    }

    #[test]
    fn test_display_cap_limits_rows_not_matches() {
        // Scenario: 10000 candidates against a 4096-row cap.
        let memory = Arc::new(EmulatedMemory::new().with_region(
            RegionKind::Main,
            BASE,
            vec![0u8; 40_000],
        ));
        let engine = searched_engine(&memory, ElementWidth::Int);
        assert_eq!(engine.candidate_count(), 10_000);

        let sampler = DisplaySampler::new(memory.clone());
        let output = sampler.sample(&engine, 0, usize::MAX);
        assert_eq!(output.rows.len(), DISPLAY_CAP);
        assert_eq!(output.total_matches, 10_000);
        assert!(output.truncated);
        assert_eq!(output.summary(), "Too many matches to display (10000)");

        // Windows beyond the cap are clamped to nothing, so one update
        // cycle can never render more than the cap in total.
        let beyond = sampler.sample(&engine, DISPLAY_CAP, DISPLAY_CAP + 100);
        assert!(beyond.rows.is_empty());
        assert_eq!(beyond.total_matches, 10_000);
    }

    #[test]
    fn test_window_is_positional() {
        let memory = Arc::new(EmulatedMemory::new().with_region(
            RegionKind::Main,
            BASE,
            (0u8..16).collect(),
        ));
        let engine = searched_engine(&memory, ElementWidth::Byte);
        let sampler = DisplaySampler::new(memory.clone());

        let output = sampler.sample(&engine, 5, 8);
        let addresses: Vec<u32> = output.rows.iter().map(|row| row.address).collect();
        assert_eq!(addresses, vec![BASE + 5, BASE + 6, BASE + 7]);
        assert_eq!(output.rows[0].decimal, "5");
    }

    #[test]
    fn test_sample_without_session_is_empty() {
        let memory = Arc::new(EmulatedMemory::new().with_region(
            RegionKind::Main,
            BASE,
            vec![0u8; 4],
        ));
        let engine = SearchEngine::new(memory.clone());
        let sampler = DisplaySampler::new(memory.clone());

        let output = sampler.sample(&engine, 0, usize::MAX);
        assert!(output.rows.is_empty());
        assert_eq!(output.summary(), "");
    }

    #[test]
    fn test_sample_after_filtering_to_empty_is_empty() {
        let memory = Arc::new(EmulatedMemory::new().with_region(
            RegionKind::Main,
            BASE,
            vec![0u8; 8],
        ));
        let mut engine = searched_engine(&memory, ElementWidth::Int);
        memory.poke_u32(BASE, 1);
        memory.poke_u32(BASE + 4, 1);
        engine.refine(ComparisonPredicate::Equal, None).unwrap();
        assert_eq!(engine.candidate_count(), 0);

        let sampler = DisplaySampler::new(memory.clone());
        assert!(sampler.sample(&engine, 0, usize::MAX).rows.is_empty());
    }

    #[test]
    fn test_overlapping_tick_is_dropped() {
        let memory = Arc::new(EmulatedMemory::new().with_region(
            RegionKind::Main,
            BASE,
            vec![0u8; 4],
        ));
        let engine = searched_engine(&memory, ElementWidth::Int);
        let sampler = DisplaySampler::new(memory.clone());

        let guard = sampler.in_flight.lock();
        assert!(sampler.try_sample(&engine, 0, usize::MAX).is_none());
        drop(guard);
        assert!(sampler.try_sample(&engine, 0, usize::MAX).is_some());
    }
}
