//! Supported languages, declared in the shared boot script.

use std::{fs, sync::LazyLock};

use anyhow::{Context, Result, bail};
use regex::Regex;

use super::BuildContext;

static LANGUAGES_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\['BlocklyGamesLanguages'\] = (\[[-,'\s\w]+\])").unwrap()
});

/// Extract the language codes from the boot script source.
///
/// The array may span several lines; it is read as JSON after swapping
/// single quotes for double quotes.
pub fn parse_languages(boot_js: &str) -> Result<Vec<String>> {
    let joined = boot_js.split_inclusive('\n').collect::<Vec<_>>().join(" ");
    let Some(caps) = LANGUAGES_REGEX.captures(&joined) else {
        bail!("Can't find BlocklyGamesLanguages in boot.js");
    };
    let array = caps[1].replace('\'', "\"");
    serde_json::from_str(&array)
        .with_context(|| format!("Failed to parse BlocklyGamesLanguages: {}", &caps[1]))
}

pub fn supported_languages(ctx: &BuildContext) -> Result<Vec<String>> {
    let path = ctx.resolve(&ctx.config.boot_script);
    let boot_js = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read boot script: {}", path.display()))?;
    let langs = parse_languages(&boot_js)?;
    log::debug!("Supported languages: {}", langs.join(", "));
    Ok(langs)
}
