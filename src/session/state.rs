use image::RgbaImage;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use crate::border::BorderPattern;
use crate::compose::compositor::generate_tagged;
use crate::compose::{ChartExport, CompositionInput, StitchInterpretation};
use crate::grid::{GridDimensions, Side};
use crate::history::{HistoryManager, HistorySnapshot};
use crate::io::configuration::DECODE_WAIT_MS;
use crate::io::error::{ChartError, Result};
use crate::motif::{FlipAxis, MotifLayer, PlacedMotif};
use crate::overlay::{FillColor, ManualFills};
use crate::raster::{DecodeCompletion, DecodeQueue, Generation};
use crate::session::RegenerationDebouncer;
use crate::yarn::GridType;

/// Single-user editing session for a two-sided chart
///
/// Owns every piece of editable state. Each mutating edit captures history
/// first and then schedules a debounced regeneration; [`tick`](Self::tick)
/// runs the pass once the edits settle. Each pass gets a fresh
/// [`Generation`]; every decode is tagged with the pass that requested it, and
/// a completion is kept only while no newer request for the same motif
/// supersedes it. Pixels that arrive after their pass still land in the cache.
pub struct Session {
    dimensions: GridDimensions,
    border: BorderPattern,
    grid_type: GridType,
    interpretation: StitchInterpretation,
    front: MotifLayer,
    back: MotifLayer,
    manual_fills: ManualFills,
    history: HistoryManager,
    next_id: u64,
    generation: Generation,
    images: HashMap<String, Arc<RgbaImage>>,
    failed_images: HashSet<String>,
    pending_decodes: HashMap<String, Generation>,
    decoder: DecodeQueue,
    debouncer: RegenerationDebouncer,
    decode_wait: Duration,
    latest: Option<ChartExport>,
}

impl Session {
    /// Start an empty session
    pub fn new(dimensions: GridDimensions) -> Self {
        Self {
            dimensions,
            border: BorderPattern::None,
            grid_type: GridType::default(),
            interpretation: StitchInterpretation::default(),
            front: MotifLayer::new(),
            back: MotifLayer::new(),
            manual_fills: ManualFills::new(),
            history: HistoryManager::new(),
            next_id: 1,
            generation: Generation::initial(),
            images: HashMap::new(),
            failed_images: HashSet::new(),
            pending_decodes: HashMap::new(),
            decoder: DecodeQueue::new(),
            debouncer: RegenerationDebouncer::default(),
            decode_wait: Duration::from_millis(DECODE_WAIT_MS),
            latest: None,
        }
    }

    /// Start an empty session sized in centimeters
    ///
    /// # Errors
    ///
    /// Returns an error if the size is outside the accepted range
    pub fn from_centimeters(width_cm: f64, height_cm: f64) -> Result<Self> {
        Ok(Self::new(GridDimensions::from_centimeters(width_cm, height_cm)?))
    }

    /// Replace the debouncer (mainly to shorten the quiet period)
    #[must_use]
    pub fn with_debouncer(mut self, debouncer: RegenerationDebouncer) -> Self {
        self.debouncer = debouncer;
        self
    }

    /// Change how long a regeneration pass blocks on motif decodes
    #[must_use]
    pub const fn with_decode_wait(mut self, decode_wait: Duration) -> Self {
        self.decode_wait = decode_wait;
        self
    }

    /// Replace the motif lists and overrides wholesale, clearing history
    ///
    /// Used when loading a project; the loaded state is not undoable.
    pub fn load_state(&mut self, front: MotifLayer, back: MotifLayer, manual_fills: ManualFills) {
        let highest = front.max_id().max(back.max_id()).unwrap_or(0);
        self.next_id = self.next_id.max(highest + 1);
        self.front = front;
        self.back = back;
        self.manual_fills = manual_fills;
        self.history.clear();
        self.request_regeneration();
    }

    // Settings

    /// Grid size in cells
    pub const fn dimensions(&self) -> GridDimensions {
        self.dimensions
    }

    /// Resize the grid; motifs keep their percentage positions
    pub fn set_dimensions(&mut self, dimensions: GridDimensions) {
        self.dimensions = dimensions;
        self.request_regeneration();
    }

    /// Selected border pattern
    pub const fn border(&self) -> BorderPattern {
        self.border
    }

    /// Change the border pattern
    pub fn set_border(&mut self, border: BorderPattern) {
        self.border = border;
        self.request_regeneration();
    }

    /// Grid density
    pub const fn grid_type(&self) -> GridType {
        self.grid_type
    }

    /// Change the grid density
    pub fn set_grid_type(&mut self, grid_type: GridType) {
        self.grid_type = grid_type;
        self.request_regeneration();
    }

    /// Display reading of filled cells
    pub const fn interpretation(&self) -> StitchInterpretation {
        self.interpretation
    }

    /// Change how filled cells are displayed
    pub fn set_interpretation(&mut self, interpretation: StitchInterpretation) {
        self.interpretation = interpretation;
        self.request_regeneration();
    }

    // Motif edits

    /// Motifs placed on one side
    pub const fn motifs(&self, side: Side) -> &MotifLayer {
        match side {
            Side::Front => &self.front,
            Side::Back => &self.back,
        }
    }

    const fn motifs_mut(&mut self, side: Side) -> &mut MotifLayer {
        match side {
            Side::Front => &mut self.front,
            Side::Back => &mut self.back,
        }
    }

    /// Place a motif on a side under a fresh placement id
    ///
    /// The id carried by `motif` is ignored. Returns the assigned id.
    pub fn place_motif(&mut self, side: Side, mut motif: PlacedMotif) -> u64 {
        self.capture();
        motif.id = self.allocate_id();
        let id = motif.id;
        debug!(side = %side, id, motif = %motif.motif_id, "Placing motif");
        self.motifs_mut(side).push(motif);
        self.request_regeneration();
        id
    }

    /// Move a placed motif
    ///
    /// # Errors
    ///
    /// Returns an error if no placement has the given id
    pub fn move_motif(&mut self, side: Side, id: u64, x: f64, y: f64) -> Result<()> {
        self.edit_motif(side, id, |layer| layer.move_to(id, x, y))
    }

    /// Set the size multiplier of a placed motif
    ///
    /// # Errors
    ///
    /// Returns an error if no placement has the given id
    pub fn resize_motif(&mut self, side: Side, id: u64, size: f64) -> Result<()> {
        self.edit_motif(side, id, |layer| layer.resize(id, size))
    }

    /// Grow or shrink a placed motif by whole steps
    ///
    /// # Errors
    ///
    /// Returns an error if no placement has the given id
    pub fn step_motif_size(&mut self, side: Side, id: u64, steps: i32) -> Result<()> {
        self.edit_motif(side, id, |layer| layer.step_size(id, steps))
    }

    /// Set the ink threshold of a placed motif
    ///
    /// # Errors
    ///
    /// Returns an error if no placement has the given id
    pub fn set_motif_threshold(&mut self, side: Side, id: u64, threshold: i64) -> Result<()> {
        self.edit_motif(side, id, |layer| layer.set_threshold(id, threshold))
    }

    /// Mirror a placed motif
    ///
    /// # Errors
    ///
    /// Returns an error if no placement has the given id
    pub fn flip_motif(&mut self, side: Side, id: u64, axis: FlipAxis) -> Result<()> {
        self.edit_motif(side, id, |layer| layer.flip(id, axis))
    }

    /// Copy a placed motif; returns the new placement id
    ///
    /// # Errors
    ///
    /// Returns an error if no placement has the given id
    pub fn duplicate_motif(&mut self, side: Side, id: u64) -> Result<u64> {
        self.ensure_exists(side, id)?;
        self.capture();
        let new_id = self.allocate_id();
        self.motifs_mut(side).duplicate(id, new_id)?;
        self.request_regeneration();
        Ok(new_id)
    }

    /// Remove a placed motif and return it
    ///
    /// # Errors
    ///
    /// Returns an error if no placement has the given id
    pub fn remove_motif(&mut self, side: Side, id: u64) -> Result<PlacedMotif> {
        self.ensure_exists(side, id)?;
        self.capture();
        let removed = self.motifs_mut(side).remove(id)?;
        self.request_regeneration();
        Ok(removed)
    }

    /// Move a placed motif to the other side, keeping its id
    ///
    /// # Errors
    ///
    /// Returns an error if no placement has the given id
    pub fn transfer_motif(&mut self, side: Side, id: u64) -> Result<()> {
        self.ensure_exists(side, id)?;
        self.capture();
        let motif = self.motifs_mut(side).remove(id)?;
        self.motifs_mut(side.opposite()).push(motif);
        self.request_regeneration();
        Ok(())
    }

    /// Remove every motif and manual override on both sides
    pub fn clear_all(&mut self) {
        self.capture();
        self.front.clear();
        self.back.clear();
        self.manual_fills.clear_all();
        self.request_regeneration();
    }

    fn edit_motif(
        &mut self,
        side: Side,
        id: u64,
        edit: impl FnOnce(&mut MotifLayer) -> Result<()>,
    ) -> Result<()> {
        self.ensure_exists(side, id)?;
        self.capture();
        edit(self.motifs_mut(side))?;
        self.request_regeneration();
        Ok(())
    }

    fn ensure_exists(&self, side: Side, id: u64) -> Result<()> {
        self.motifs(side)
            .get(id)
            .map(|_| ())
            .ok_or(ChartError::UnknownMotif { id })
    }

    const fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    // Manual fills

    /// Manual overrides for both sides
    pub const fn manual_fills(&self) -> &ManualFills {
        &self.manual_fills
    }

    /// Brush a cell with toggle semantics; returns the override left behind
    pub fn paint_cell(&mut self, side: Side, row: usize, col: usize, color: FillColor) -> Option<FillColor> {
        self.capture();
        let result = self.manual_fills.paint(row, col, side, color);
        self.request_regeneration();
        result
    }

    /// Paint a cell with `color`, replacing any previous override
    pub fn set_cell(&mut self, side: Side, row: usize, col: usize, color: FillColor) {
        self.capture();
        self.manual_fills.set(row, col, side, color);
        self.request_regeneration();
    }

    /// Force a cell open
    pub fn erase_cell(&mut self, side: Side, row: usize, col: usize) {
        self.capture();
        self.manual_fills.erase(row, col, side);
        self.request_regeneration();
    }

    /// Drop the override on a cell so motifs and border decide again
    pub fn clear_cell(&mut self, side: Side, row: usize, col: usize) -> Option<FillColor> {
        self.capture();
        let previous = self.manual_fills.clear(row, col, side);
        self.request_regeneration();
        previous
    }

    // History

    /// Copy of the current motif lists and overrides
    pub fn snapshot(&self) -> HistorySnapshot {
        HistorySnapshot {
            front_motifs: self.front.clone(),
            back_motifs: self.back.clone(),
            manual_fills: self.manual_fills.clone(),
        }
    }

    /// Record the current state as an undo point
    pub fn capture(&mut self) {
        let snapshot = self.snapshot();
        self.history.capture(snapshot);
    }

    /// Undo the last edit; returns `false` when there was nothing to undo
    pub fn undo(&mut self) -> bool {
        let current = self.snapshot();
        match self.history.undo(current) {
            Some(previous) => {
                self.restore(previous);
                true
            }
            None => false,
        }
    }

    /// Redo the last undone edit; returns `false` when there was nothing to redo
    pub fn redo(&mut self) -> bool {
        let current = self.snapshot();
        match self.history.redo(current) {
            Some(next) => {
                self.restore(next);
                true
            }
            None => false,
        }
    }

    /// History stacks
    pub const fn history(&self) -> &HistoryManager {
        &self.history
    }

    fn restore(&mut self, snapshot: HistorySnapshot) {
        self.front = snapshot.front_motifs;
        self.back = snapshot.back_motifs;
        self.manual_fills = snapshot.manual_fills;
        self.request_regeneration();
    }

    // Regeneration

    /// Schedule a debounced regeneration
    pub fn request_regeneration(&mut self) {
        self.debouncer.schedule(Instant::now());
    }

    /// Run a pending regeneration if its quiet period has elapsed at `now`
    pub fn tick(&mut self, now: Instant) -> Option<&ChartExport> {
        if self.debouncer.poll(now) {
            Some(self.regenerate())
        } else {
            None
        }
    }

    /// Compose both sides immediately
    pub fn regenerate(&mut self) -> &ChartExport {
        self.debouncer.cancel();
        self.generation = self.generation.next();
        let generation = self.generation;
        self.decode_missing(generation);

        let front = generate_tagged(
            &self.composition_input(Side::Front),
            &self.images,
            generation,
        );
        let back = generate_tagged(&self.composition_input(Side::Back), &self.images, generation);

        info!(
            generation = generation.value(),
            skeins = front.skeins_needed(),
            "Regenerated chart"
        );

        self.latest.insert(ChartExport {
            front,
            back,
            interpretation: self.interpretation,
            border: self.border,
            grid_type: self.grid_type,
        })
    }

    /// Result of the most recent regeneration
    pub const fn latest(&self) -> Option<&ChartExport> {
        self.latest.as_ref()
    }

    /// Current regeneration generation
    pub const fn generation(&self) -> Generation {
        self.generation
    }

    /// Forget a decoded image so it is decoded again on the next pass
    ///
    /// A decode still in flight for the old source is discarded when it
    /// arrives.
    pub fn invalidate_image(&mut self, motif_id: &str) {
        self.images.remove(motif_id);
        self.failed_images.remove(motif_id);
        self.pending_decodes.remove(motif_id);
        self.request_regeneration();
    }

    /// Check whether decoded pixels are cached for a source motif
    pub fn has_image(&self, motif_id: &str) -> bool {
        self.images.contains_key(motif_id)
    }

    /// Source motif ids whose decodes have not arrived yet, sorted
    pub fn pending_decodes(&self) -> Vec<String> {
        let mut pending: Vec<String> = self.pending_decodes.keys().cloned().collect();
        pending.sort();
        pending
    }

    /// Block until outstanding decodes arrive or `timeout` elapses
    ///
    /// Returns the number of decodes still pending. Does not regenerate.
    pub fn await_decodes(&mut self, timeout: Duration) -> usize {
        let completions = self.decoder.wait(timeout);
        for completion in completions {
            self.store_decode(completion);
        }
        self.pending_decodes.len()
    }

    fn composition_input(&self, side: Side) -> CompositionInput<'_> {
        CompositionInput {
            side,
            motifs: self.motifs(side).as_slice(),
            dimensions: self.dimensions,
            border: self.border,
            manual_fills: &self.manual_fills,
            grid_type: self.grid_type,
        }
    }

    fn decode_missing(&mut self, generation: Generation) {
        for completion in self.decoder.drain() {
            self.store_decode(completion);
        }

        for motif in self.front.iter().chain(self.back.iter()) {
            let key = motif.motif_id.as_str();
            if self.images.contains_key(key)
                || self.failed_images.contains(key)
                || self.pending_decodes.contains_key(key)
            {
                continue;
            }
            self.decoder
                .submit(generation, key.to_string(), motif.image.clone());
            self.pending_decodes.insert(key.to_string(), generation);
        }

        if self.pending_decodes.is_empty() {
            return;
        }

        let remaining = self.await_decodes(self.decode_wait);
        if remaining > 0 {
            warn!(
                pending = ?self.pending_decodes(),
                generation = generation.value(),
                "Composing without motifs that are still decoding"
            );
        }
    }

    fn store_decode(&mut self, completion: DecodeCompletion) {
        let current = self.pending_decodes.get(&completion.key).copied();
        if current.is_none_or(|requested| completion.generation.is_stale(requested)) {
            debug!(
                motif = %completion.key,
                generation = completion.generation.value(),
                "Discarding decode of a superseded source"
            );
            return;
        }
        self.pending_decodes.remove(&completion.key);

        match completion.result {
            Ok(image) => {
                self.images.insert(completion.key, Arc::new(image));
            }
            Err(e) => {
                warn!(motif = %completion.key, error = %e, "Motif image failed to decode");
                self.failed_images.insert(completion.key);
            }
        }
    }
}
