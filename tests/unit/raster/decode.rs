//! Tests for motif decoding and generation-tagged decode completions

#[cfg(test)]
mod tests {
    use filetgrid::ChartError;
    use filetgrid::motif::ImageSource;
    use filetgrid::raster::decode::decode;
    use filetgrid::raster::{DecodeQueue, Generation};
    use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;
    use std::path::PathBuf;
    use std::sync::Arc;
    use std::time::Duration;

    fn encoded_png(width: u32, height: u32) -> ImageSource {
        let image = RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 255]));
        let mut bytes = Vec::new();
        let written =
            DynamicImage::ImageRgba8(image).write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png);
        assert!(written.is_ok(), "PNG encoding should succeed");
        ImageSource::Encoded(Arc::from(bytes))
    }

    // Tests generation ordering and staleness
    // Verified by treating equal generations as stale
    #[test]
    fn test_generation_staleness() {
        let first = Generation::initial().next();
        let second = first.next();
        assert_eq!(first.value(), 1);
        assert_eq!(second.value(), 2);
        assert!(first.is_stale(second));
        assert!(!second.is_stale(second));
        assert!(!second.is_stale(first));
    }

    // Tests decoding of in-memory PNG bytes
    // Verified by swapping width and height on decode
    #[test]
    fn test_decode_encoded_png() {
        let decoded = decode(&encoded_png(6, 4));
        let dims = decoded.map(|image| image.dimensions());
        assert_eq!(dims.ok(), Some((6, 4)));
    }

    // Tests that garbage bytes and missing files are decode errors
    // Verified by returning an empty image on failure
    #[test]
    fn test_decode_failures() {
        let garbage = ImageSource::Encoded(Arc::from(vec![1_u8, 2, 3, 4]));
        assert!(matches!(
            decode(&garbage),
            Err(ChartError::ImageDecode { .. })
        ));

        let missing = ImageSource::File(PathBuf::from("does/not/exist.png"));
        assert!(matches!(
            decode(&missing),
            Err(ChartError::ImageDecode { .. })
        ));
    }

    // Tests that completions are delivered with their keys
    // Verified by never decrementing the in-flight count
    #[test]
    fn test_queue_delivers_completions() {
        let mut queue = DecodeQueue::new();
        let generation = Generation::initial().next();
        queue.submit(generation, "a", encoded_png(3, 3));
        queue.submit(generation, "b", encoded_png(2, 2));
        assert_eq!(queue.in_flight(), 2);

        let mut keys: Vec<String> = queue
            .wait(Duration::from_secs(10))
            .into_iter()
            .filter(|completion| completion.result.is_ok())
            .map(|completion| completion.key)
            .collect();
        keys.sort();

        assert_eq!(keys, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(queue.in_flight(), 0);
    }

    // Tests that each completion keeps the generation that requested it
    // Verified by tagging completions with the latest submission
    #[test]
    fn test_queue_keeps_request_generation() {
        let mut queue = DecodeQueue::new();
        let old = Generation::initial().next();
        let current = old.next();
        queue.submit(old, "late", encoded_png(2, 2));
        queue.submit(current, "fresh", encoded_png(2, 2));

        let mut tags: Vec<(String, u64)> = queue
            .wait(Duration::from_secs(10))
            .into_iter()
            .map(|completion| (completion.key, completion.generation.value()))
            .collect();
        tags.sort();

        assert_eq!(tags, vec![("fresh".to_string(), 2), ("late".to_string(), 1)]);
        assert_eq!(queue.in_flight(), 0);
    }

    // Tests that draining an idle queue returns nothing
    // Verified by blocking in drain
    #[test]
    fn test_drain_idle_queue() {
        let mut queue = DecodeQueue::default();
        assert!(queue.drain().is_empty());
        assert!(queue.wait(Duration::from_millis(1)).is_empty());
    }
}
