use std::fs;
use std::path::Path;

use tempfile::TempDir;

use streetrisk::{PipelineConfig, PipelineContext, PipelineError, PipelineWarning};

/// Structurally broken artifact: a one-node tree whose children point
/// past the node array.
const BROKEN_MODEL_JSON: &str = r#"{
    "initial_score": 0.0,
    "learning_rate": 1.0,
    "trees": [{
        "feature": [0],
        "threshold": [0.5],
        "left": [1],
        "right": [2],
        "value": [0.0]
    }],
    "n_features": 1
}"#;

const SCHEMA_JSON: &str = r#"["SPEEDING"]"#;

fn write_model_and_schema(dir: &Path) {
    // Single stump over SPEEDING: <= 0.5 contributes -2 log-odds, else +2.
    let model = r#"{
        "initial_score": 0.0,
        "learning_rate": 1.0,
        "trees": [{
            "feature": [0, -2, -2],
            "threshold": [0.5, 0.0, 0.0],
            "left": [1, -1, -1],
            "right": [2, -1, -1],
            "value": [0.0, -2.0, 2.0]
        }],
        "n_features": 1
    }"#;
    fs::write(dir.join("severity_model.json"), model).unwrap();
    fs::write(dir.join("feature_columns.json"), SCHEMA_JSON).unwrap();
}

fn context_for(dir: &Path) -> PipelineContext {
    PipelineContext::load(PipelineConfig::for_dir(dir)).unwrap()
}

#[test]
fn missing_model_artifact_is_fatal() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("feature_columns.json"), SCHEMA_JSON).unwrap();
    let err = PipelineContext::load(PipelineConfig::for_dir(dir.path())).unwrap_err();
    assert!(matches!(err, PipelineError::MissingArtifact { .. }), "{err}");
}

#[test]
fn invalid_model_structure_is_fatal() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("severity_model.json"), BROKEN_MODEL_JSON).unwrap();
    fs::write(dir.path().join("feature_columns.json"), SCHEMA_JSON).unwrap();
    let err = PipelineContext::load(PipelineConfig::for_dir(dir.path())).unwrap_err();
    assert!(matches!(err, PipelineError::ArtifactFormat { .. }), "{err}");
}

#[test]
fn cyclic_model_artifact_is_fatal() {
    let dir = TempDir::new().unwrap();
    // In-range but self-referential children; loading must reject this
    // instead of letting scoring spin forever.
    let cyclic = r#"{
        "initial_score": 0.0,
        "learning_rate": 1.0,
        "trees": [{
            "feature": [0],
            "threshold": [0.5],
            "left": [0],
            "right": [0],
            "value": [0.0]
        }],
        "n_features": 1
    }"#;
    fs::write(dir.path().join("severity_model.json"), cyclic).unwrap();
    fs::write(dir.path().join("feature_columns.json"), SCHEMA_JSON).unwrap();
    let err = PipelineContext::load(PipelineConfig::for_dir(dir.path())).unwrap_err();
    assert!(matches!(err, PipelineError::ArtifactFormat { .. }), "{err}");
}

#[test]
fn missing_schema_artifact_is_fatal() {
    let dir = TempDir::new().unwrap();
    write_model_and_schema(dir.path());
    fs::remove_file(dir.path().join("feature_columns.json")).unwrap();
    let err = PipelineContext::load(PipelineConfig::for_dir(dir.path())).unwrap_err();
    assert!(matches!(err, PipelineError::MissingArtifact { .. }), "{err}");
}

#[test]
fn missing_dataset_degrades_to_empty_report_with_warning() {
    let dir = TempDir::new().unwrap();
    write_model_and_schema(dir.path());
    let report = context_for(dir.path()).run().unwrap();
    assert!(report.is_empty());
    assert!(report
        .warnings
        .iter()
        .any(|warning| matches!(warning, PipelineWarning::DatasetMissing { .. })));
}

#[test]
fn dataset_without_indicator_columns_degrades_with_warning() {
    let dir = TempDir::new().unwrap();
    write_model_and_schema(dir.path());
    fs::write(
        dir.path().join("processed_accidents.csv"),
        "SPEEDING\n1\n0\n",
    )
    .unwrap();
    let report = context_for(dir.path()).run().unwrap();
    assert!(report.is_empty());
    assert!(report.warnings.contains(&PipelineWarning::NoIndicatorColumns));
}

#[test]
fn missing_feature_columns_degrade_with_warning() {
    let dir = TempDir::new().unwrap();
    write_model_and_schema(dir.path());
    fs::write(
        dir.path().join("processed_accidents.csv"),
        "NEIGHBOURHOOD_1_Alpha\n1\n",
    )
    .unwrap();
    let report = context_for(dir.path()).run().unwrap();
    assert!(report.is_empty());
    assert_eq!(
        report.warnings,
        vec![PipelineWarning::MissingFeatureColumns {
            missing: vec!["SPEEDING".into()]
        }]
    );
}

#[test]
fn full_run_ranks_labels_and_resolves_map_coordinates() {
    let dir = TempDir::new().unwrap();
    write_model_and_schema(dir.path());
    // Alderwood rows always speed, Atlantis rows never do.
    fs::write(
        dir.path().join("processed_accidents.csv"),
        "SPEEDING,NEIGHBOURHOOD_1_Alderwood,NEIGHBOURHOOD_2_Atlantis (99)\n\
         1,1,0\n\
         1,1,0\n\
         0,0,1\n\
         0,0,1\n",
    )
    .unwrap();
    let report = context_for(dir.path()).run().unwrap();

    assert!(report.warnings.is_empty());
    assert_eq!(report.entries.len(), 2);
    assert_eq!(report.entries[0].label, "Alderwood");
    assert_eq!(report.entries[0].rank, 1);
    assert!(report.entries[0].mean_probability > report.entries[1].mean_probability);
    // Two groups: both inside the highlight split.
    assert!(report.entries.iter().all(|entry| entry.is_highlighted));
    // Radius normalization spans the configured bounds.
    assert_eq!(report.entries[0].radius, 800.0);
    assert_eq!(report.entries[1].radius, 200.0);

    // The count suffix is stripped from the second label.
    assert_eq!(report.entries[1].label, "Atlantis");
    // Known label resolves; unknown label falls back to the city center.
    assert_eq!(report.map[0].latitude, 43.634);
    assert_eq!(report.map[1].latitude, 43.65107);
    assert_eq!(report.map[1].longitude, -79.347015);

    assert_eq!(report.bars.len(), 2);
    assert_eq!(report.table[0].rank, 1);
}

#[test]
fn identical_inputs_produce_identical_rankings() {
    let dir = TempDir::new().unwrap();
    write_model_and_schema(dir.path());
    fs::write(
        dir.path().join("processed_accidents.csv"),
        "SPEEDING,NEIGHBOURHOOD_1_Alpha,NEIGHBOURHOOD_2_Beta\n\
         1,1,0\n\
         0,0,1\n",
    )
    .unwrap();
    let context = context_for(dir.path());
    let first = context.run().unwrap();
    let second = context.run().unwrap();
    assert_eq!(first.entries, second.entries);
    assert_eq!(first.warnings, second.warnings);
}

#[test]
fn uniform_scores_surface_the_degenerate_normalization_warning() {
    let dir = TempDir::new().unwrap();
    write_model_and_schema(dir.path());
    // Every row speeds, so both neighborhoods share one mean probability.
    fs::write(
        dir.path().join("processed_accidents.csv"),
        "SPEEDING,NEIGHBOURHOOD_1_Alpha,NEIGHBOURHOOD_2_Beta\n\
         1,1,0\n\
         1,0,1\n",
    )
    .unwrap();
    let report = context_for(dir.path()).run().unwrap();
    assert_eq!(report.entries.len(), 2);
    assert!(report
        .warnings
        .contains(&PipelineWarning::DegenerateNormalization));
    assert!(report.entries.iter().all(|entry| entry.radius == 200.0));
}
