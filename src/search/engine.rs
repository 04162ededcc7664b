// Tue Aug 25 2026 - Alex

use crate::memory::{MemoryRegion, MemorySubsystem, RegionKind};
use crate::search::{Candidate, ComparisonPredicate, ElementWidth, EngineError, MAX_VALUE_WIDTH};
use std::sync::Arc;

/// User-supplied range bounds are coarsened down to this granularity before
/// the scan starts.
const BOUND_ALIGNMENT: u32 = 16;

/// Fixed state for one search: the region and element width chosen at
/// initialization, plus the surviving candidate set in ascending offset
/// order. Positional indices into the set are stable across refinement
/// passes, so callers can use them as row handles.
#[derive(Debug)]
pub struct SearchSession {
    region: MemoryRegion,
    width: ElementWidth,
    candidates: Vec<Candidate>,
}

impl SearchSession {
    pub fn region(&self) -> &MemoryRegion {
        &self.region
    }

    pub fn width(&self) -> ElementWidth {
        self.width
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }
}

#[derive(Debug)]
enum EngineState {
    NotInitialized,
    Initialized(SearchSession),
}

/// Iterative memory-value search. `initialize` captures one candidate per
/// element-aligned offset of the selected region, each successive `refine`
/// replaces the set with the subset passing the comparison predicate, and
/// `reset` discards everything. All phases that touch live memory run inside
/// the subsystem's synchronized hand-off so the emulated CPU cannot mutate
/// values mid-pass.
pub struct SearchEngine {
    memory: Arc<dyn MemorySubsystem>,
    state: EngineState,
}

impl SearchEngine {
    pub fn new(memory: Arc<dyn MemorySubsystem>) -> Self {
        Self {
            memory,
            state: EngineState::NotInitialized,
        }
    }

    pub fn is_initialized(&self) -> bool {
        matches!(self.state, EngineState::Initialized(_))
    }

    pub fn session(&self) -> Option<&SearchSession> {
        match &self.state {
            EngineState::Initialized(session) => Some(session),
            EngineState::NotInitialized => None,
        }
    }

    pub fn candidate_count(&self) -> usize {
        self.session().map_or(0, |session| session.candidates.len())
    }

    pub fn candidates(&self) -> &[Candidate] {
        self.session().map_or(&[], |session| session.candidates.as_slice())
    }

    /// Arms a new search over `kind`, capturing the current bytes at every
    /// `width`-aligned offset inside `bounds` (region-relative, clamped to
    /// the region when malformed or absent). Any previous candidate set is
    /// discarded.
    pub fn initialize(
        &mut self,
        kind: RegionKind,
        width: ElementWidth,
        bounds: Option<(u32, u32)>,
    ) -> Result<(), EngineError> {
        if !self.memory.is_session_runnable() {
            return Err(EngineError::SessionNotRunnable);
        }
        // Never trust a region descriptor from a previous operation; the
        // backing buffer may have been torn down in between.
        let region = self
            .memory
            .resolve_region(kind)
            .ok_or(EngineError::RegionUnavailable)?;

        let (start, end) = normalize_bounds(bounds, region.size());
        let step = width.size() as u32;
        let mut candidates = Vec::with_capacity(((end - start) / step) as usize);

        let memory = Arc::clone(&self.memory);
        let mut capture = || {
            let mut offset = start;
            while u64::from(offset) + u64::from(step) <= u64::from(end) {
                let mut value = [0u8; MAX_VALUE_WIDTH];
                memory.read_bytes(region.to_absolute(offset), &mut value[..width.size()]);
                candidates.push(Candidate::new(offset, value));
                offset += step;
            }
        };
        memory.run_synchronized(&mut capture);

        log::info!(
            "initialized {} search over {}: {} candidates",
            width,
            kind,
            candidates.len()
        );
        self.state = EngineState::Initialized(SearchSession {
            region,
            width,
            candidates,
        });
        Ok(())
    }

    /// Runs one narrowing pass. Each candidate's current bytes are ordered
    /// against `value`, or against the candidate's own previously recorded
    /// value when `value` is `None` ("has it changed / stayed the same").
    /// Survivors are rebaselined to the bytes just read, so the next blank
    /// pass compares against this pass's observation.
    ///
    /// The ordering is a byte-wise comparison of big-endian values: exact
    /// for integers, not a numeric order for floats of differing sign. A
    /// candidate whose address has become unreadable is judged on its last
    /// recorded value; the pass itself never aborts.
    pub fn refine(
        &mut self,
        predicate: ComparisonPredicate,
        value: Option<[u8; MAX_VALUE_WIDTH]>,
    ) -> Result<(), EngineError> {
        let session = match &mut self.state {
            EngineState::Initialized(session) => session,
            EngineState::NotInitialized => return Err(EngineError::NotInitialized),
        };
        if session.candidates.is_empty() {
            return Ok(());
        }

        let region = session.region;
        let size = session.width.size();
        let candidates = &session.candidates;
        let mut kept = Vec::with_capacity(candidates.len());

        let memory = Arc::clone(&self.memory);
        let mut filter = || {
            for candidate in candidates {
                let mut current = candidate.value;
                if !memory.read_bytes(region.to_absolute(candidate.offset), &mut current[..size]) {
                    current = candidate.value;
                }
                let operand = value.unwrap_or(candidate.value);
                let ordering = current[..size].cmp(&operand[..size]);
                if predicate.accepts(ordering) {
                    kept.push(Candidate::new(candidate.offset, current));
                }
            }
        };
        memory.run_synchronized(&mut filter);

        log::debug!(
            "{} pass kept {} of {} candidates",
            predicate,
            kept.len(),
            session.candidates.len()
        );
        session.candidates = kept;
        Ok(())
    }

    /// Returns the engine to its pre-initialize state. Always succeeds.
    pub fn reset(&mut self) {
        self.state = EngineState::NotInitialized;
    }
}

/// Clamps optional user bounds to `[0, size)`, coarsening both ends down to
/// the fixed scan granularity first. A bound that fails any acceptance check
/// falls back to the corresponding region edge, so fully malformed bounds
/// behave exactly like no bounds at all.
fn normalize_bounds(bounds: Option<(u32, u32)>, size: u32) -> (u32, u32) {
    let mut start = 0u32;
    let mut end = size;

    if let Some((custom_start, custom_end)) = bounds {
        let custom_start = custom_start & !(BOUND_ALIGNMENT - 1);
        let custom_end = custom_end & !(BOUND_ALIGNMENT - 1);

        if custom_start > 0 && custom_start < custom_end && custom_start < size {
            start = custom_start;
        }
        if custom_end < size && custom_end > custom_start && custom_end > start {
            end = custom_end;
        }
    }

    (start, end)
}
