#[cfg(test)]
mod tests {
    use std::fs;

    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use tempfile::TempDir;

    use clocktab::commands::{background, engines, settings, transfer};
    use clocktab::commands::{Config, SearchEngine, StoredImage};
    use clocktab::error::DashboardError;
    use clocktab::services::background_store::BackgroundStore;
    use clocktab::services::settings_store::SettingsStore;
    use clocktab::state::AppState;

    fn state_in(dir: &TempDir) -> AppState {
        let store = BackgroundStore::open(dir.path().join("backgrounds.db")).unwrap();
        AppState::new(
            SettingsStore::with_path(dir.path().join("config.json")),
            Some(store),
        )
    }

    fn image(byte: u8, mime: &str) -> StoredImage {
        StoredImage {
            data: vec![byte; 8],
            mime: mime.to_string(),
        }
    }

    #[test]
    fn first_run_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let state = state_in(&dir);

        let config = settings::get_config(&state);
        assert_eq!(config, Config::default());
        assert!(!config.search_engines.is_empty());
    }

    #[test]
    fn mutations_persist_across_restart() {
        let dir = TempDir::new().unwrap();

        let state = state_in(&dir);
        settings::set_blur(&state, false).unwrap();
        settings::set_tip(&state, false).unwrap();
        settings::set_background_color(&state, "rgba(12, 34, 56)".to_string()).unwrap();
        engines::next_engine(&state).unwrap();

        // Same directory again, as if the app restarted
        let reloaded = state_in(&dir);
        let config = settings::get_config(&reloaded);
        assert!(!config.blur);
        assert!(!config.tip);
        assert_eq!(config.background_color, "rgba(12, 34, 56)");
        assert_eq!(config.search_engine_index, 1);
    }

    #[test]
    fn corrupt_settings_file_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("config.json"), "{ this is not json").unwrap();

        let state = state_in(&dir);
        assert_eq!(settings::get_config(&state), Config::default());
    }

    #[test]
    fn stored_out_of_range_engine_index_resets_to_zero() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("config.json"),
            r#"{
                "searchEngineIndex": 9,
                "searchEngines": [
                    { "name": "하나", "url": "https://one.example/?q=(query)" },
                    { "name": "둘", "url": "https://two.example/?q=(query)" }
                ]
            }"#,
        )
        .unwrap();

        let config = settings::get_config(&state_in(&dir));
        assert_eq!(config.search_engine_index, 0);
        assert_eq!(config.search_engines.len(), 2);
        // Unmentioned fields kept their defaults
        assert!(config.autohide);
        assert_eq!(config.hide_delay, 2000);
    }

    #[test]
    fn cycling_returns_to_start_after_full_loop() {
        let dir = TempDir::new().unwrap();
        let state = state_in(&dir);
        let n = settings::get_config(&state).search_engines.len();

        for _ in 0..n {
            engines::next_engine(&state).unwrap();
        }
        assert_eq!(settings::get_config(&state).search_engine_index, 0);

        for _ in 0..n {
            engines::previous_engine(&state).unwrap();
        }
        assert_eq!(settings::get_config(&state).search_engine_index, 0);
    }

    #[test]
    fn add_and_remove_engine_through_commands() {
        let dir = TempDir::new().unwrap();
        let state = state_in(&dir);
        let n = settings::get_config(&state).search_engines.len();

        let config =
            engines::add_engine(&state, "다음".to_string(), "https://search.daum.net/search".to_string())
                .unwrap();
        assert_eq!(config.search_engines.len(), n + 1);
        assert_eq!(
            config.search_engines.last().unwrap().url,
            "https://search.daum.net/search?q=(query)"
        );

        let config = engines::remove_engine(&state, n).unwrap();
        assert_eq!(config.search_engines.len(), n);

        // Rejected adds leave the registry untouched, on disk too
        assert!(engines::add_engine(&state, "".to_string(), "http://x".to_string()).is_err());
        assert!(engines::add_engine(&state, "Name".to_string(), "".to_string()).is_err());
        let reloaded = state_in(&dir);
        assert_eq!(settings::get_config(&reloaded).search_engines.len(), n);
    }

    #[test]
    fn backgrounds_save_pick_and_clear() {
        let dir = TempDir::new().unwrap();
        let state = state_in(&dir);

        let batch = vec![image(1, "image/png"), image(2, "image/jpeg")];
        background::save_backgrounds(&state, batch.clone()).unwrap();

        let mut rng = StdRng::seed_from_u64(3);
        let picked = background::get_background(&state, &mut rng).unwrap();
        assert!(batch.contains(&picked));

        background::clear_backgrounds(&state).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        assert!(background::get_background(&state, &mut rng).is_none());
    }

    #[test]
    fn background_commands_require_an_open_store() {
        let dir = TempDir::new().unwrap();
        let state = AppState::new(
            SettingsStore::with_path(dir.path().join("config.json")),
            None,
        );

        let err = background::save_backgrounds(&state, vec![image(1, "image/png")]).unwrap_err();
        assert!(matches!(err, DashboardError::StorageUnavailable(_)));

        // Reads degrade to "no image" instead of erroring
        let mut rng = StdRng::seed_from_u64(0);
        assert!(background::get_background(&state, &mut rng).is_none());
    }

    #[test]
    fn export_import_round_trip_restores_settings_and_images() {
        let source_dir = TempDir::new().unwrap();
        let source = state_in(&source_dir);

        settings::set_blur(&source, false).unwrap();
        settings::set_tip(&source, false).unwrap();
        settings::set_background_color(&source, "rgba(1, 2, 3)".to_string()).unwrap();
        source
            .update_config(|config| {
                config.search_engines = vec![
                    SearchEngine::new("구글", "https://www.google.com/search?q=(query)"),
                    SearchEngine::new("사전", "https://dict.example/search?q=(query)"),
                ];
                config.search_engine_index = 1;
                Ok(())
            })
            .unwrap();
        let batch = vec![image(7, "image/png"), image(8, "image/webp")];
        background::save_backgrounds(&source, batch.clone()).unwrap();

        let archive = transfer::export_settings(&source).unwrap();

        // Fresh profile with default settings and no images
        let target_dir = TempDir::new().unwrap();
        let target = state_in(&target_dir);
        let imported = transfer::import_settings(&target, archive).unwrap();

        let expected = settings::get_config(&source);
        assert_eq!(imported.search_engines, expected.search_engines);
        assert_eq!(imported.search_engine_index, 1);
        assert_eq!(imported.background_color, "rgba(1, 2, 3)");
        assert!(!imported.blur);
        assert!(!imported.tip);

        let restored = target.with_backgrounds(|store| store.load_all()).unwrap();
        assert_eq!(restored, batch);

        // The merge also landed on disk
        let reloaded = state_in(&target_dir);
        assert_eq!(settings::get_config(&reloaded), imported);
    }

    #[test]
    fn importing_an_imageless_archive_clears_stored_images() {
        let empty_dir = TempDir::new().unwrap();
        let empty = state_in(&empty_dir);
        let archive = transfer::export_settings(&empty).unwrap();

        let target_dir = TempDir::new().unwrap();
        let target = state_in(&target_dir);
        background::save_backgrounds(&target, vec![image(5, "image/png")]).unwrap();

        transfer::import_settings(&target, archive).unwrap();
        let remaining = target.with_backgrounds(|store| store.load_all()).unwrap();
        assert!(remaining.is_empty());
    }

    #[test]
    fn malformed_upload_changes_nothing() {
        let dir = TempDir::new().unwrap();
        let state = state_in(&dir);
        background::save_backgrounds(&state, vec![image(9, "image/png")]).unwrap();
        let before = settings::get_config(&state);

        let err = transfer::import_settings(&state, b"not a zip at all".to_vec()).unwrap_err();
        assert!(matches!(err, DashboardError::Archive(_)));

        assert_eq!(settings::get_config(&state), before);
        let images = state.with_backgrounds(|store| store.load_all()).unwrap();
        assert_eq!(images.len(), 1);
    }
}
