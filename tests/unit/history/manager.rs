//! Tests for bounded undo/redo history

#[cfg(test)]
mod tests {
    use filetgrid::grid::Side;
    use filetgrid::history::{HistoryManager, HistorySnapshot};
    use filetgrid::motif::{ImageSource, MotifLayer, PlacedMotif};
    use filetgrid::overlay::FillColor;
    use std::path::PathBuf;

    fn motif(id: u64) -> PlacedMotif {
        PlacedMotif::new(id, "m", "M", ImageSource::File(PathBuf::from("m.png")))
    }

    fn with_front(ids: &[u64]) -> HistorySnapshot {
        HistorySnapshot {
            front_motifs: MotifLayer::from_motifs(ids.iter().map(|&id| motif(id)).collect()),
            ..HistorySnapshot::default()
        }
    }

    // Tests undo after two captured edits restores the intermediate state
    // Verified by popping from the oldest end
    #[test]
    fn test_undo_restores_previous_state() {
        let mut history = HistoryManager::new();
        history.capture(with_front(&[]));
        history.capture(with_front(&[1]));

        let restored = history.undo(with_front(&[1, 2]));
        assert_eq!(restored, Some(with_front(&[1])));
        assert_eq!(history.len(), 1);
    }

    // Tests that restored snapshots keep ids and order verbatim
    // Verified by renumbering motifs on restore
    #[test]
    fn test_restore_keeps_ids() {
        let mut history = HistoryManager::new();
        let snapshot = with_front(&[9, 4, 7]);
        history.capture(snapshot.clone());

        let restored = history.undo(HistorySnapshot::default()).unwrap_or_default();
        let ids: Vec<u64> = restored.front_motifs.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![9, 4, 7]);
        assert_eq!(restored, snapshot);
    }

    // Tests the capacity bound and eviction of the oldest entry
    // Verified by evicting the newest entry
    #[test]
    fn test_capacity_evicts_oldest() {
        let mut history = HistoryManager::new();
        assert_eq!(history.capacity(), 50);
        for id in 0..51 {
            history.capture(with_front(&[id]));
        }
        assert_eq!(history.len(), 50);

        let mut oldest = None;
        let mut current = HistorySnapshot::default();
        while let Some(previous) = history.undo(current.clone()) {
            oldest = Some(previous.clone());
            current = previous;
        }
        assert_eq!(oldest, Some(with_front(&[1])));
    }

    // Tests undo on an empty history
    // Verified by returning a default snapshot
    #[test]
    fn test_undo_empty() {
        let mut history = HistoryManager::default();
        assert!(history.is_empty());
        assert!(!history.can_undo());
        assert_eq!(history.undo(HistorySnapshot::default()), None);
        assert!(!history.can_redo());
    }

    // Tests that redo reverses an undo
    // Verified by not pushing the current state onto the redo stack
    #[test]
    fn test_redo_after_undo() {
        let mut history = HistoryManager::new();
        history.capture(with_front(&[]));

        let before = history.undo(with_front(&[1]));
        assert_eq!(before, Some(with_front(&[])));
        assert!(history.can_redo());

        let after = history.redo(with_front(&[]));
        assert_eq!(after, Some(with_front(&[1])));
        assert!(history.can_undo());
        assert!(!history.can_redo());
    }

    // Tests that a new capture invalidates redo
    // Verified by keeping the redo stack on capture
    #[test]
    fn test_capture_clears_redo() {
        let mut history = HistoryManager::new();
        history.capture(with_front(&[]));
        assert!(history.undo(with_front(&[1])).is_some());

        let mut edited = with_front(&[]);
        edited.manual_fills.set(0, 0, Side::Front, FillColor::Red);
        history.capture(edited);
        assert!(!history.can_redo());
        assert_eq!(history.redo(with_front(&[])), None);
    }

    // Tests custom capacity floor and clearing
    // Verified by allowing a zero capacity
    #[test]
    fn test_with_capacity_and_clear() {
        let mut history = HistoryManager::with_capacity(0);
        assert_eq!(history.capacity(), 1);
        history.capture(with_front(&[1]));
        history.capture(with_front(&[2]));
        assert_eq!(history.len(), 1);

        history.clear();
        assert!(history.is_empty());
        assert!(!history.can_redo());
    }
}
