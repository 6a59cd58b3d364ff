use crate::*;

fn sample_data() -> ProjectData {
    ProjectData {
        text: "春はあけぼの。やうやう白くなりゆく山際".to_string(),
        stopwords_text: "の\nは、やう".to_string(),
        settings: CloudSettings {
            color_scheme_id: "forest".to_string(),
            ..CloudSettings::default()
        },
    }
}

#[test]
fn save_load_round_trip_is_lossless() {
    let mut store = MemoryProjectStore::new();
    let meta = store
        .create(CreateProjectPayload {
            name: "枕草子".to_string(),
            app: "wordcloud".to_string(),
            data: sample_data(),
        })
        .unwrap();

    let loaded = store.get(&meta.id).unwrap();
    assert_eq!(loaded, sample_data());

    // The persisted JSON itself must round-trip byte-stably too.
    let json = serde_json::to_string(&loaded).unwrap();
    let back: ProjectData = serde_json::from_str(&json).unwrap();
    assert_eq!(back, loaded);
    assert!(json.contains("\"stopwordsText\""));
}

#[test]
fn meta_serializes_with_camel_case_timestamp() {
    let mut store = MemoryProjectStore::new();
    let meta = store
        .create(CreateProjectPayload {
            name: "枕草子".to_string(),
            app: "wordcloud".to_string(),
            data: sample_data(),
        })
        .unwrap();

    let json = serde_json::to_string(&meta).unwrap();
    assert!(json.contains("\"updatedAt\""));
    let back: ProjectMeta = serde_json::from_str(&json).unwrap();
    assert_eq!(back, meta);
}

#[test]
fn update_replaces_data_and_bumps_meta() {
    let mut store = MemoryProjectStore::new();
    let meta = store
        .create(CreateProjectPayload {
            name: "draft".to_string(),
            app: "wordcloud".to_string(),
            data: sample_data(),
        })
        .unwrap();

    let mut data = sample_data();
    data.text.push_str("、少し明かりて");
    let updated = store
        .update(
            &meta.id,
            UpdateProjectPayload {
                name: Some("final".to_string()),
                data: data.clone(),
            },
        )
        .unwrap();
    assert_eq!(updated.name, "final");
    assert_eq!(store.get(&meta.id).unwrap(), data);
}

#[test]
fn list_filters_by_app() {
    let mut store = MemoryProjectStore::new();
    for app in ["wordcloud", "wordcloud", "other"] {
        store
            .create(CreateProjectPayload {
                name: format!("{app} project"),
                app: app.to_string(),
                data: sample_data(),
            })
            .unwrap();
    }
    assert_eq!(store.list("wordcloud").unwrap().len(), 2);
    assert_eq!(store.list("other").unwrap().len(), 1);
}

#[test]
fn missing_ids_and_thumbnails_surface_as_errors() {
    let mut store = MemoryProjectStore::new();
    assert!(matches!(store.get("nope"), Err(Error::NotFound { .. })));
    assert!(matches!(store.delete("nope"), Err(Error::NotFound { .. })));

    let meta = store
        .create(CreateProjectPayload {
            name: "p".to_string(),
            app: "wordcloud".to_string(),
            data: sample_data(),
        })
        .unwrap();
    assert!(matches!(
        store.thumbnail(&meta.id),
        Err(Error::StorageFailure { .. })
    ));
    store.set_thumbnail(&meta.id, vec![1, 2, 3]).unwrap();
    assert_eq!(store.thumbnail(&meta.id).unwrap(), vec![1, 2, 3]);

    store.delete(&meta.id).unwrap();
    assert!(store.list("wordcloud").unwrap().is_empty());
}
