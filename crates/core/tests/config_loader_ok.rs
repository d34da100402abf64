use docsearch_core::config::loader::ConfigLoader;
use docsearch_core::index::EmptyQuery;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

fn write_file(path: &PathBuf, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[test]
fn load_default_profile_ok() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("config.toml");
    let toml = r#"
version = 1
profile = "default"

[profiles.default]
site_root  = "/tmp/site"
index_path = "{{site_root}}/build/search_index.js"

[search]
empty_query = "all"
limit = 25
"#;

    write_file(&cfg_path, toml);

    let rc = ConfigLoader::load(Some(&cfg_path), None).expect("should load");
    assert_eq!(rc.active_profile, "default");
    assert_eq!(rc.site_root.display().to_string(), "/tmp/site");
    assert_eq!(rc.index_path.display().to_string(), "/tmp/site/build/search_index.js");
    assert_eq!(rc.search.empty_query, EmptyQuery::All);
    assert_eq!(rc.search.limit, Some(25));
    assert_eq!(rc.search.excerpt_width, 80);
    assert_eq!(rc.logging.level, "warn");
}

#[test]
fn index_path_defaults_under_site_root() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("config.toml");
    write_file(
        &cfg_path,
        r#"
version = 1
[profiles.default]
site_root = "/tmp/site"
"#,
    );

    let rc = ConfigLoader::load(Some(&cfg_path), None).expect("should load");
    assert_eq!(rc.index_path.display().to_string(), "/tmp/site/search_index.js");
    assert_eq!(rc.search.empty_query, EmptyQuery::None);
    assert_eq!(rc.search.limit, None);
}

#[test]
fn load_with_profile_override_ok() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("docsearch/config.toml");
    let toml = r#"
version = 1
profile = "default"

[profiles.default]
site_root = "/tmp/def"

[profiles.work]
site_root  = "/tmp/work"
index_path = "{{site_root}}/idx.json"
"#;
    write_file(&cfg_path, toml);

    let rc = ConfigLoader::load(Some(&cfg_path), Some("work")).expect("should load");
    assert_eq!(rc.active_profile, "work");
    assert_eq!(rc.site_root.display().to_string(), "/tmp/work");
    assert_eq!(rc.index_path.display().to_string(), "/tmp/work/idx.json");
}

#[test]
fn logging_file_is_resolved_against_site_root() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("config.toml");
    write_file(
        &cfg_path,
        r#"
version = 1
[profiles.default]
site_root = "/tmp/site"

[logging]
level = "debug"
file = "{{site_root}}/docsearch.log"
"#,
    );

    let rc = ConfigLoader::load(Some(&cfg_path), None).expect("should load");
    assert_eq!(rc.logging.level, "debug");
    assert_eq!(rc.logging.file.unwrap().display().to_string(), "/tmp/site/docsearch.log");
}
