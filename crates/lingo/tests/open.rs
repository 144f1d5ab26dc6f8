use lingo::domain::config::{DictionaryConfig, LingoConfig};
use lingo::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

fn culture(tag: &str) -> Culture {
    Culture::parse(tag).unwrap()
}

fn config_with_strings() -> LingoConfig {
    let mut config = LingoConfig::default();
    config.dictionaries.push(DictionaryConfig {
        name: "strings".to_owned(),
        default_culture: Some(culture("ru-RU")),
        cultures: [
            (culture("ru-RU"), "ru-RU/strings.json".to_owned()),
            (culture("en-US"), "en-US/strings.json".to_owned()),
        ]
        .into(),
        ..DictionaryConfig::default()
    });
    config
}

#[test]
fn relative_root_is_anchored_at_base_dir() {
    let config = LingoConfig::default();
    assert_eq!(lingo::resources_root(&config, None), PathBuf::from("resources"));
    assert_eq!(
        lingo::resources_root(&config, Some(Path::new("/srv/app"))),
        PathBuf::from("/srv/app/resources")
    );

    let mut absolute = LingoConfig::default();
    absolute.resources.root = PathBuf::from("/opt/bundles");
    assert_eq!(
        lingo::resources_root(&absolute, Some(Path::new("/srv/app"))),
        PathBuf::from("/opt/bundles")
    );
}

#[test]
fn open_registers_configured_dictionaries() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let resources = dir.path().join("resources");
    fs::create_dir_all(resources.join("ru-RU"))?;
    fs::create_dir_all(resources.join("en-US"))?;
    fs::write(resources.join("ru-RU/strings.json"), r#"{"title": "Главная"}"#)?;
    fs::write(resources.join("en-US/strings.json"), r#"{"title": "Home"}"#)?;

    let mut config = config_with_strings();
    config.culture = Some(culture("en-US"));

    let registry = lingo::open(&config, Some(dir.path()))?;

    assert_eq!(registry.dictionary_names(), ["strings"]);
    assert_eq!(registry.get_resource::<String>("title", "strings")?, "Home");

    registry.set_active_culture(None)?;
    assert_eq!(registry.get_resource::<String>("title", "strings")?, "Главная");
    Ok(())
}

#[test]
fn open_reports_missing_bundles() {
    let dir = tempfile::tempdir().unwrap();
    let err = lingo::open(&config_with_strings(), Some(dir.path())).unwrap_err();
    assert!(matches!(err, RegistryError::BundleLoad { .. }));
}
