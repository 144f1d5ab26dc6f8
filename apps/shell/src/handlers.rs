//! Command handlers. Each writes its output to `out` so it can be captured.

use lingo::prelude::*;
use std::io::Write;

/// One name per line, sorted.
pub(crate) fn names(registry: &ResourceRegistry, out: &mut impl Write) -> anyhow::Result<()> {
    for name in registry.dictionary_names() {
        writeln!(out, "{name}")?;
    }
    Ok(())
}

pub(crate) fn get(
    registry: &ResourceRegistry,
    dictionary: &str,
    key: &str,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let value = registry.get_resource_value(key, dictionary)?;
    writeln!(out, "{value}")?;
    Ok(())
}

/// `# <source path>` followed by sorted `key = value` lines.
pub(crate) fn show(registry: &ResourceRegistry, dictionary: &str, out: &mut impl Write) -> anyhow::Result<()> {
    let bundle = registry.get_dictionary(dictionary)?;

    writeln!(out, "# {}", bundle.source_path())?;
    for (key, value) in bundle.sorted_entries() {
        writeln!(out, "{key} = {value}")?;
    }
    Ok(())
}

/// `<culture>\t<path>` lines; the default culture is marked with `*`.
/// Dictionaries without localization print a single `*\t<path>` line.
pub(crate) fn paths(registry: &ResourceRegistry, dictionary: &str, out: &mut impl Write) -> anyhow::Result<()> {
    let descriptor = registry.descriptor(dictionary).ok_or_else(|| RegistryError::DictionaryNotRegistered {
        message: dictionary.to_owned().into(),
        context: None,
    })?;

    match descriptor.localization() {
        Some(localization) => {
            for (culture, path) in localization.entries() {
                let marker = if culture == localization.default_culture() { "*" } else { "" };
                writeln!(out, "{culture}{marker}\t{path}")?;
            }
        },
        None => writeln!(out, "*\t{}", descriptor.default_path())?,
    }
    Ok(())
}
