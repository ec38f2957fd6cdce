//! Prototype and metadata load contract: all-or-nothing validation.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use hamnet::error::HamnetError;
use hamnet::loader;

fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_load_valid_prototypes() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "prototipos.csv", "Clase,f1,f2,f3\nA,1,0,1\nB,0,0,0\n");

    let network = loader::load_prototypes(&path, None).unwrap();
    assert_eq!(network.prototypes().len(), 2);
    assert_eq!(network.prototypes()[0].label, "A");
    assert_eq!(network.features(), &["f1", "f2", "f3"]);
}

#[test]
fn test_class_column_is_case_insensitive() {
    let dir = TempDir::new().unwrap();
    for header in ["clase", "CLASE", "Clase"] {
        let path = write_file(&dir, "prototipos.csv", &format!("{header},f1\nA,1\n"));
        let network = loader::load_prototypes(&path, None).unwrap();
        assert_eq!(network.prototypes().len(), 1);
    }
}

#[test]
fn test_feature_order_follows_header() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "prototipos.csv", "z,Clase,a,m\nA,X,1,0\n");

    let network = loader::load_prototypes(&path, None).unwrap();
    assert_eq!(network.features(), &["z", "a", "m"]);
}

#[test]
fn test_missing_class_column_rejects_load() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "prototipos.csv", "Categoria,f1\nA,1\n");

    let err = loader::load_prototypes(&path, None).unwrap_err();
    assert!(matches!(err, HamnetError::Schema(_)));
    assert!(err.to_string().contains("Clase"));
}

#[test]
fn test_non_binary_cell_rejects_load() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "prototipos.csv", "Clase,f1,f2\nA,1,0\nB,maybe,1\n");

    let err = loader::load_prototypes(&path, None).unwrap_err();
    assert!(matches!(err, HamnetError::Schema(_)));
    assert!(err.to_string().contains("maybe"));
    assert!(err.to_string().contains("f1"));
}

#[test]
fn test_empty_label_rejects_load() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "prototipos.csv", "Clase,f1\n ,1\n");

    let err = loader::load_prototypes(&path, None).unwrap_err();
    assert!(matches!(err, HamnetError::Schema(_)));
}

#[test]
fn test_no_feature_columns_rejects_load() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "prototipos.csv", "Clase\nA\n");

    let err = loader::load_prototypes(&path, None).unwrap_err();
    assert!(matches!(err, HamnetError::Schema(_)));
}

#[test]
fn test_header_only_rejects_load() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "prototipos.csv", "Clase,f1,f2\n");

    let err = loader::load_prototypes(&path, None).unwrap_err();
    assert!(matches!(err, HamnetError::Schema(_)));
}

#[test]
fn test_only_blank_rows_rejects_load() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "prototipos.csv", "Clase,f1\n,\n,\n");

    let err = loader::load_prototypes(&path, None).unwrap_err();
    assert!(matches!(err, HamnetError::Schema(_)));
}

#[test]
fn test_blank_rows_are_skipped_not_fatal() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "prototipos.csv", "Clase,f1\nA,1\n,\nB,0\n");

    let network = loader::load_prototypes(&path, None).unwrap();
    assert_eq!(network.prototypes().len(), 2);
}

#[test]
fn test_missing_file_rejects_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("no-such-file.csv");

    let err = loader::load_prototypes(&path, None).unwrap_err();
    assert!(matches!(err, HamnetError::Table(_)));
}

#[test]
fn test_empty_file_rejects_load() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "prototipos.csv", "");

    let err = loader::load_prototypes(&path, None).unwrap_err();
    assert!(matches!(err, HamnetError::Table(_)));
}

#[test]
fn test_metadata_accepts_tagged_features() {
    let dir = TempDir::new().unwrap();
    let metadata_path = write_file(
        &dir,
        "metadata.csv",
        "Caracteristica,Tipo\nf1,binario\nf2,Binario\n",
    );
    let prototypes_path = write_file(&dir, "prototipos.csv", "Clase,f1,f2\nA,1,0\n");

    let metadata = loader::load_metadata(&metadata_path).unwrap();
    let network = loader::load_prototypes(&prototypes_path, Some(&metadata)).unwrap();
    assert_eq!(network.prototypes().len(), 1);
}

#[test]
fn test_metadata_missing_feature_rejects_load() {
    let dir = TempDir::new().unwrap();
    let metadata_path = write_file(&dir, "metadata.csv", "Caracteristica,Tipo\nf1,binario\n");
    let prototypes_path = write_file(&dir, "prototipos.csv", "Clase,f1,f2\nA,1,0\n");

    let metadata = loader::load_metadata(&metadata_path).unwrap();
    let err = loader::load_prototypes(&prototypes_path, Some(&metadata)).unwrap_err();
    assert!(matches!(err, HamnetError::Metadata(_)));
    assert!(err.to_string().contains("f2"));
}

#[test]
fn test_metadata_wrong_type_tag_rejects_load() {
    let dir = TempDir::new().unwrap();
    let metadata_path = write_file(
        &dir,
        "metadata.csv",
        "Caracteristica,Tipo\nf1,binario\nf2,numerico\n",
    );
    let prototypes_path = write_file(&dir, "prototipos.csv", "Clase,f1,f2\nA,1,0\n");

    let metadata = loader::load_metadata(&metadata_path).unwrap();
    let err = loader::load_prototypes(&prototypes_path, Some(&metadata)).unwrap_err();
    assert!(matches!(err, HamnetError::Metadata(_)));
    assert!(err.to_string().contains("numerico"));
}

#[test]
fn test_metadata_extra_entries_are_allowed() {
    let dir = TempDir::new().unwrap();
    let metadata_path = write_file(
        &dir,
        "metadata.csv",
        "Caracteristica,Tipo\nf1,binario\nunused,binario\n",
    );
    let prototypes_path = write_file(&dir, "prototipos.csv", "Clase,f1\nA,1\n");

    let metadata = loader::load_metadata(&metadata_path).unwrap();
    let network = loader::load_prototypes(&prototypes_path, Some(&metadata)).unwrap();
    assert_eq!(network.features(), &["f1"]);
}

#[test]
fn test_metadata_requires_its_columns() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "metadata.csv", "Feature,Kind\nf1,binario\n");

    let err = loader::load_metadata(&path).unwrap_err();
    assert!(matches!(err, HamnetError::Metadata(_)));
}
