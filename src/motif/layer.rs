use crate::io::configuration::{DUPLICATE_OFFSET_PERCENT, MOTIF_SIZE_STEP};
use crate::io::error::{ChartError, Result};
use crate::motif::{FlipAxis, PlacedMotif};

/// Motifs placed on one side, in placement order
///
/// Placement order has no effect on the composed grid since motif
/// contributions are OR-merged; it is kept for display and export.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MotifLayer {
    motifs: Vec<PlacedMotif>,
}

impl MotifLayer {
    /// Create an empty layer
    pub const fn new() -> Self {
        Self { motifs: Vec::new() }
    }

    /// Rebuild a layer from a list of motifs, keeping their ids
    pub const fn from_motifs(motifs: Vec<PlacedMotif>) -> Self {
        Self { motifs }
    }

    /// Add a motif at the end of the layer
    pub fn push(&mut self, motif: PlacedMotif) {
        self.motifs.push(motif);
    }

    /// Look up a placement by id
    pub fn get(&self, id: u64) -> Option<&PlacedMotif> {
        self.motifs.iter().find(|motif| motif.id == id)
    }

    /// Look up a placement by id for editing
    ///
    /// # Errors
    ///
    /// Returns an error if no placement has the given id
    pub fn get_mut(&mut self, id: u64) -> Result<&mut PlacedMotif> {
        self.motifs
            .iter_mut()
            .find(|motif| motif.id == id)
            .ok_or(ChartError::UnknownMotif { id })
    }

    /// Move a placement to a new percentage position
    ///
    /// # Errors
    ///
    /// Returns an error if no placement has the given id
    pub fn move_to(&mut self, id: u64, x: f64, y: f64) -> Result<()> {
        self.get_mut(id)?.set_position(x, y);
        Ok(())
    }

    /// Set the size multiplier of a placement
    ///
    /// # Errors
    ///
    /// Returns an error if no placement has the given id
    pub fn resize(&mut self, id: u64, size: f64) -> Result<()> {
        self.get_mut(id)?.set_size(size);
        Ok(())
    }

    /// Grow (positive) or shrink (negative) a placement by whole size steps
    ///
    /// # Errors
    ///
    /// Returns an error if no placement has the given id
    pub fn step_size(&mut self, id: u64, steps: i32) -> Result<()> {
        let motif = self.get_mut(id)?;
        let size = f64::from(steps).mul_add(MOTIF_SIZE_STEP, motif.size());
        // Round to one decimal so repeated steps do not drift
        motif.set_size((size * 10.0).round() / 10.0);
        Ok(())
    }

    /// Set the ink threshold of a placement
    ///
    /// # Errors
    ///
    /// Returns an error if no placement has the given id
    pub fn set_threshold(&mut self, id: u64, threshold: i64) -> Result<()> {
        self.get_mut(id)?.set_threshold(threshold);
        Ok(())
    }

    /// Toggle mirroring of a placement
    ///
    /// # Errors
    ///
    /// Returns an error if no placement has the given id
    pub fn flip(&mut self, id: u64, axis: FlipAxis) -> Result<()> {
        self.get_mut(id)?.flip(axis);
        Ok(())
    }

    /// Copy a placement under a new id, offset down and to the right
    ///
    /// # Errors
    ///
    /// Returns an error if no placement has the given id
    pub fn duplicate(&mut self, id: u64, new_id: u64) -> Result<&PlacedMotif> {
        let mut copy = self.get(id).cloned().ok_or(ChartError::UnknownMotif { id })?;
        copy.id = new_id;
        copy.set_position(
            copy.x() + DUPLICATE_OFFSET_PERCENT,
            copy.y() + DUPLICATE_OFFSET_PERCENT,
        );
        self.motifs.push(copy);
        self.motifs
            .last()
            .ok_or(ChartError::UnknownMotif { id: new_id })
    }

    /// Remove a placement and return it
    ///
    /// # Errors
    ///
    /// Returns an error if no placement has the given id
    pub fn remove(&mut self, id: u64) -> Result<PlacedMotif> {
        let index = self
            .motifs
            .iter()
            .position(|motif| motif.id == id)
            .ok_or(ChartError::UnknownMotif { id })?;
        Ok(self.motifs.remove(index))
    }

    /// Remove every placement
    pub fn clear(&mut self) {
        self.motifs.clear();
    }

    /// Placements in order
    pub fn as_slice(&self) -> &[PlacedMotif] {
        &self.motifs
    }

    /// Iterate over placements in order
    pub fn iter(&self) -> std::slice::Iter<'_, PlacedMotif> {
        self.motifs.iter()
    }

    /// Number of placements
    pub const fn len(&self) -> usize {
        self.motifs.len()
    }

    /// Check whether the layer has no placements
    pub const fn is_empty(&self) -> bool {
        self.motifs.is_empty()
    }

    /// Largest placement id in the layer
    pub fn max_id(&self) -> Option<u64> {
        self.motifs.iter().map(|motif| motif.id).max()
    }
}

impl<'a> IntoIterator for &'a MotifLayer {
    type Item = &'a PlacedMotif;
    type IntoIter = std::slice::Iter<'a, PlacedMotif>;

    fn into_iter(self) -> Self::IntoIter {
        self.motifs.iter()
    }
}
