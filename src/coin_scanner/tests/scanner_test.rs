#[cfg(test)]
mod scanner_test {
    use crate::coin_classifier::error::PredictionError;
    use crate::coin_scanner::error::ScanError;
    use crate::coin_scanner::tests::fixture::{counts, Fixture};
    use crate::device_camera::interface::DeviceCamera;
    use crate::device_display::impl_fake::Shown;
    use crate::inference_engine::interface::InferenceOutput;
    use crate::record::interface::RecordStore;

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

    #[test]
    fn test_capture_saves_record_with_photo() {
        let f = Fixture::new(vec![Ok(counts([2.0, 0.0, 1.0, 0.0, 0.0, 0.0, 4.0]))]);
        f.device_camera.start().unwrap();

        let report = f.coin_scanner.capture().unwrap();

        assert_eq!(report.result.lines(), ["1 yen 2", "10 yen 1", "合計: 12円"]);
        let record = report.record.unwrap();
        assert_eq!(record.total, 12);
        assert_eq!(record.result_text, "1 yen 2\n10 yen 1\n合計: 12円");
        assert!(record.photo_png.starts_with(&PNG_SIGNATURE));
        assert_eq!(record.captured_at.offset().local_minus_utc(), 9 * 3600);

        assert_eq!(f.record_store.list().unwrap(), vec![record]);
        assert_eq!(
            f.shown(),
            vec![Shown::Prediction(vec![
                "1 yen 2".to_string(),
                "10 yen 1".to_string(),
                "合計: 12円".to_string(),
            ])]
        );
    }

    #[test]
    fn test_capture_without_coins_is_not_recorded() {
        let f = Fixture::new(vec![Ok(counts([0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 3.0]))]);
        f.device_camera.start().unwrap();

        let report = f.coin_scanner.capture().unwrap();

        assert_eq!(report.result.lines(), ["予測なし"]);
        assert_eq!(report.record, None);
        assert!(f.record_store.list().unwrap().is_empty());
        assert_eq!(f.shown(), vec![Shown::Prediction(vec!["予測なし".to_string()])]);
    }

    #[test]
    fn test_capture_of_unvalued_classification_is_not_recorded() {
        let f = Fixture::new(vec![Ok(InferenceOutput::classification("bottle cap", 0.8))]);
        f.device_camera.start().unwrap();

        let report = f.coin_scanner.capture().unwrap();

        assert_eq!(report.result.lines(), ["予測: bottle cap (80%)"]);
        assert_eq!(report.record, None);
        assert!(f.record_store.list().unwrap().is_empty());
    }

    #[test]
    fn test_preview_does_not_record() {
        let f = Fixture::new(vec![Ok(counts([1.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0]))]);
        f.device_camera.start().unwrap();

        let result = f.coin_scanner.preview().unwrap();

        assert_eq!(result.total(), 6);
        assert!(f.record_store.list().unwrap().is_empty());
    }

    #[test]
    fn test_capture_before_camera_start_is_camera_error() {
        let f = Fixture::new(vec![Ok(counts([1.0; 7]))]);

        let result = f.coin_scanner.capture();

        assert!(matches!(result, Err(ScanError::Camera(_))));
        assert_eq!(f.engine.calls(), 0);
    }

    #[test]
    fn test_run_scans_up_to_max_and_builds_statistics() {
        let f = Fixture::new(vec![
            Ok(counts([0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0])),
            Ok(counts([0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0])),
            Ok(counts([3.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0])),
        ]);

        let scans = f.coin_scanner.run().unwrap();

        assert_eq!(scans, 3);
        assert_eq!(f.device_camera.captured(), 3);

        let stats = f.coin_scanner.statistics().unwrap();
        assert_eq!(stats.record_count, 3);
        assert_eq!(stats.grand_total, 603);
        assert_eq!(stats.max_total, 500);
        assert_eq!(stats.daily_totals.iter().map(|(_, t)| t).sum::<u64>(), 603);
    }

    #[test]
    fn test_run_continues_after_transient_failures() {
        let f = Fixture::new(vec![
            Err("engine hiccup".to_string()),
            Ok(InferenceOutput::default()),
            Ok(counts([0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0])),
        ]);

        let scans = f.coin_scanner.run().unwrap();

        assert_eq!(scans, 3);
        assert_eq!(f.record_store.list().unwrap().len(), 1);

        let shown = f.shown();
        assert_eq!(shown.len(), 3);
        assert!(matches!(&shown[0], Shown::Status(s) if s.contains("engine hiccup")));
        assert!(matches!(&shown[1], Shown::Status(s) if s.contains("prediction unavailable")));
        assert_eq!(
            shown[2],
            Shown::Prediction(vec!["5 yen 1".to_string(), "合計: 5円".to_string()])
        );
    }

    #[test]
    fn test_run_without_model_explains_and_never_captures() {
        let f = Fixture::without_model();

        let result = f.coin_scanner.run();

        assert!(matches!(
            result,
            Err(ScanError::Prediction(PredictionError::ModelUnavailable { .. }))
        ));
        assert_eq!(f.device_camera.captured(), 0);
        assert_eq!(f.engine.calls(), 0);
        assert!(matches!(
            &f.shown()[..],
            [Shown::Status(s)] if s.starts_with("Model unavailable") && s.contains("coin_counter.onnx")
        ));
    }

    #[test]
    fn test_capture_without_model_is_model_unavailable() {
        let f = Fixture::without_model();
        f.device_camera.start().unwrap();

        let result = f.coin_scanner.capture();

        assert!(matches!(
            result,
            Err(ScanError::Prediction(PredictionError::ModelUnavailable { .. }))
        ));
        assert_eq!(f.engine.calls(), 0);
    }
}
