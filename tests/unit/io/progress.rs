//! Tests for batch progress tracking

#[cfg(test)]
mod tests {
    use filetgrid::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
    use filetgrid::io::progress::{ProgressManager, Stage};
    use std::path::Path;

    // Tests stage order, positions and labels
    // Verified by reordering the stage enum
    #[test]
    fn test_stage_order() {
        let positions: Vec<u64> = Stage::ALL.iter().map(|stage| stage.position()).collect();
        assert_eq!(positions, vec![0, 1, 2, 3]);
        assert_eq!(Stage::Compose.label(), "composing");
        assert_eq!(Stage::Summary.label(), "summary");
        assert!(Stage::RenderFront < Stage::RenderBack);
    }

    // Tests a small batch through every stage
    // Verified by panicking on unknown project indices
    #[test]
    fn test_small_batch_lifecycle() {
        let mut pm = ProgressManager::new();
        pm.initialize(2);
        assert_eq!(pm.project_count(), 2);

        for index in 0..2 {
            pm.start_project(index, Path::new("rose.json"));
            for stage in Stage::ALL {
                pm.enter_stage(index, stage);
            }
            pm.complete_project(index);
        }
        pm.enter_stage(99, Stage::Compose);
        pm.finish();
    }

    // Tests a batch larger than the visible window
    // Verified by creating one bar per project
    #[test]
    fn test_large_batch() {
        let mut pm = ProgressManager::default();
        let count = MAX_INDIVIDUAL_PROGRESS_BARS + 3;
        pm.initialize(count);
        assert_eq!(pm.project_count(), count);

        for index in 0..count {
            pm.start_project(index, Path::new("chart.json"));
            pm.enter_stage(index, Stage::RenderBack);
            pm.complete_project(index);
        }
        pm.finish();
    }
}
