//! End-to-end tests writing a generated client to disk.

use std::fs;

use postgen_codegen::pipeline::Pipeline;
use postgen_codegen_javascript::{Generator, LanguageCodegen};
use postgen_collection::Collection;
use tempfile::TempDir;

const SHOP: &str = include_str!("fixtures/shop.json");

fn generator(collection_json: &str) -> Generator {
    let collection: Collection = collection_json.parse().expect("Failed to parse collection");
    let ctx = Pipeline::new().run(collection).expect("Pipeline failed");
    Generator::from_context(ctx).expect("Missing service tree")
}

#[test]
fn test_generate_writes_every_module() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let output_dir = temp.path().join("api");

    let result = generator(SHOP).generate(&output_dir).unwrap();

    assert_eq!(result.services, vec!["delete", "rootRequests", "users"]);
    assert_eq!(result.files.len(), 8);
    for file in &result.files {
        assert!(file.exists(), "{}", file.display());
    }
    assert!(output_dir.join("services/users/posts/index.js").is_file());
}

#[test]
fn test_written_files_match_preview() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let generator = generator(SHOP);

    generator.generate(temp.path()).unwrap();

    for file in generator.preview().unwrap() {
        let written = fs::read_to_string(temp.path().join(&file.path)).unwrap();
        assert_eq!(written, file.content, "{}", file.path);
    }
}

#[test]
fn test_aggregate_lists_services_on_disk() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let generator = generator(SHOP);

    generator.materialize(temp.path()).unwrap();
    fs::create_dir(temp.path().join("services/legacy")).unwrap();
    let (services, _) = generator.aggregate(temp.path()).unwrap();

    assert_eq!(services, vec!["delete", "legacy", "rootRequests", "users"]);
    let barrel = fs::read_to_string(temp.path().join("services/index.js")).unwrap();
    assert!(barrel.contains("import { legacy } from './legacy';\n"));
    let manager = fs::read_to_string(temp.path().join("ApiManager.js")).unwrap();
    assert!(manager.contains("  get legacy() {\n"));
}

#[test]
fn test_materialize_only_writes_services() {
    let temp = TempDir::new().expect("Failed to create temp dir");

    let written = generator(SHOP).materialize(temp.path()).unwrap();

    assert_eq!(written.len(), 4);
    assert!(!temp.path().join("services/index.js").exists());
    assert!(!temp.path().join("ApiManager.js").exists());
}
