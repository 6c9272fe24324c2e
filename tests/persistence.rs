use std::path::PathBuf;

use adaline::{Adaline, Case, Dataset, Error, TrainConfig, Weights};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("adaline-{name}-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn trained_weights_survive_a_file_roundtrip() {
    let dir = scratch_dir("weights");
    let path = dir.join(Case::Case2.weights_file_name());

    let mut model = Adaline::new(TrainConfig::new(0.1, 0.01)).unwrap();
    model.train(&Case::Case2.dataset()).unwrap();
    model.save_weights(&path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(text.lines().count(), 4);

    let loaded = Adaline::load_weights(TrainConfig::default(), &path).unwrap();
    assert_eq!(loaded.parameters().unwrap(), model.parameters().unwrap());

    let inputs = Case::Case2.dataset().inputs().clone();
    assert_eq!(
        loaded.predict(&inputs).unwrap(),
        model.predict(&inputs).unwrap()
    );

    std::fs::remove_dir_all(dir).unwrap();
}

#[test]
fn loaded_weights_skip_initialization() {
    let dir = scratch_dir("preset");
    let path = dir.join("exact.txt");
    std::fs::write(&path, "2.0\n1.0\n0.0\n").unwrap();

    let mut model = Adaline::load_weights(TrainConfig::new(0.1, 0.01), &path).unwrap();
    let report = model.train(&Case::Case1.dataset()).unwrap();

    assert_eq!(report.epochs_trained, 1);
    assert_eq!(model.weights().unwrap(), &[2.0, 1.0]);

    std::fs::remove_dir_all(dir).unwrap();
}

#[test]
fn dataset_file_with_header_loads() {
    let dir = scratch_dir("table");
    let path = dir.join(Case::Case1.data_file_name());
    std::fs::write(&path, "x1,x2,Y\n0,0,0\n0,1,1\n1,0,2\n1,1,3").unwrap();

    let data = Dataset::load_table(&path).unwrap();
    assert_eq!(data, Case::Case1.dataset());

    std::fs::remove_dir_all(dir).unwrap();
}

#[test]
fn builtin_table_text_loads_back() {
    let data = Case::Case3.dataset();
    assert_eq!(Dataset::parse_table(&data.to_table()).unwrap(), data);
}

#[test]
fn missing_files_are_io_errors() {
    let missing = std::env::temp_dir().join("adaline-does-not-exist/nothing.txt");
    assert!(matches!(Dataset::load_table(&missing), Err(Error::Io(_))));
    assert!(matches!(Weights::load(&missing), Err(Error::Io(_))));
    assert!(matches!(
        Adaline::load_weights(TrainConfig::default(), &missing),
        Err(Error::Io(_))
    ));
}

#[cfg(feature = "serde")]
#[test]
fn json_model_roundtrips_through_disk() {
    let dir = scratch_dir("json");
    let path = dir.join("model.json");

    let cfg = TrainConfig::new(0.1, 0.01).with_max_epochs(500);
    let mut model = Adaline::new(cfg).unwrap();
    model.train(&Case::Case1.dataset()).unwrap();
    model.save_json(&path).unwrap();

    let loaded = Adaline::load_json(&path).unwrap();
    assert_eq!(loaded.config(), model.config());
    assert_eq!(loaded.parameters().unwrap(), model.parameters().unwrap());
    assert!(loaded.error_history().is_empty());

    std::fs::remove_dir_all(dir).unwrap();
}
