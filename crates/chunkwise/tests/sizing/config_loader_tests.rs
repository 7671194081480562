use chunkwise::{ChunkwiseError, ConfigLoader, EngineConfig};
use std::io::Write;
use tempfile::Builder;
use test_log::test;

fn write_config(suffix: &str, content: &str) -> tempfile::NamedTempFile {
    let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn loads_json_by_extension() {
    let file = write_config(".json", r#"{"nthreads": 2}"#);
    let config = ConfigLoader::from_path(file.path()).unwrap();
    assert_eq!(config.nthreads, 2);
    assert_eq!(config.chunk_bytes, None);
}

#[test]
fn missing_nthreads_defaults_to_core_count() {
    let file = write_config(".json", r#"{"chunk_bytes": 65536}"#);
    let config = ConfigLoader::from_path(file.path()).unwrap();
    assert_eq!(config.nthreads, chunkwise::detect_number_of_cores());
    assert_eq!(config.chunk_bytes_for(1e4).unwrap(), 65_536);
}

#[test]
fn unknown_extension_falls_back_to_yaml() {
    let file = write_config(".conf", "nthreads: 6\n");
    let config = ConfigLoader::from_path(file.path()).unwrap();
    assert_eq!(config.nthreads, 6);
}

#[test]
fn round_trips_through_json() {
    let config = EngineConfig::default()
        .with_nthreads(8)
        .unwrap()
        .with_chunk_bytes(32 * 1024)
        .unwrap();
    let file = write_config(".json", &serde_json::to_string_pretty(&config).unwrap());
    assert_eq!(ConfigLoader::from_path(file.path()).unwrap(), config);
}

#[test]
fn loaded_config_is_validated() {
    let file = write_config(".yml", "nthreads: 0\n");
    let err = ConfigLoader::from_path(file.path()).unwrap_err();
    assert!(err.is_invalid_argument());

    let file = write_config(".json", r#"{"nthreads": 1, "chunk_bytes": 1500}"#);
    assert!(ConfigLoader::from_path(file.path()).unwrap_err().is_invalid_argument());
}

#[test]
fn malformed_file_is_parse_error() {
    let file = write_config(".json", "{ nthreads: ");
    match ConfigLoader::from_path(file.path()).unwrap_err() {
        ChunkwiseError::ConfigParse { context, .. } => assert_eq!(context, "JSON config parsing"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = ConfigLoader::from_path(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, ChunkwiseError::ConfigIo { .. }));
}
