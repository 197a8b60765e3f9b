//! Uncompressed bundle: a bootstrap script that loads every dependency in order.

use anyhow::{Result, bail};

use super::{BuildContext, BuildWarning, write_output};
use crate::{
    GENERATED_BANNER,
    target::{Injection, TargetProfile},
};

/// Script paths of the bootstrap plus the injection that was applied, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapSources {
    pub sources: Vec<String>,
    pub injected: Option<Injection>,
}

/// Turn analyzer output into the script paths the page loads.
///
/// Paths are trimmed and use forward slashes. The profile's injection is
/// applied before `prefix` is stripped; every path must start with `prefix`.
pub fn bundle_sources(
    files: &[String],
    prefix: &str,
    profile: &TargetProfile,
    warnings: &mut Vec<BuildWarning>,
) -> Result<BootstrapSources> {
    let mut files: Vec<String> = files
        .iter()
        .map(|file| file.trim().replace('\\', "/"))
        .collect();

    let mut injected = None;
    if let Some(injection) = profile.injection {
        let anchor = format!("{}{}", prefix, injection.anchor);
        let entry = format!("{}{}", prefix, injection.entry);
        match files.iter().position(|file| *file == anchor) {
            Some(index) => {
                log::debug!("Injecting {} after {}", entry, anchor);
                files.insert(index + 1, entry);
                injected = Some(injection);
            }
            None => warnings.push(BuildWarning::InjectionAnchorMissing { anchor, entry }),
        }
    }

    let mut sources = Vec::with_capacity(files.len());
    for file in files {
        let Some(rel) = file.strip_prefix(prefix) else {
            bail!("\"{}\" is not in \"{}\".", file, prefix);
        };
        sources.push(format!("{}{}", profile.path_prefix, rel));
    }

    Ok(BootstrapSources { sources, injected })
}

/// Render the bootstrap script.
///
/// Each script's `onload` inserts the next one, so the browser executes them
/// strictly in list order.
pub fn render(sources: &[String]) -> String {
    let srcs = sources
        .iter()
        .map(|src| format!("\"{}\"", src))
        .collect::<Vec<_>>()
        .join(",\n          ");

    format!(
        r#"{GENERATED_BANNER}
window.CLOSURE_NO_DEPS = true;

(function() {{
  var srcs = [
      {srcs}
  ];
  function loadScript() {{
    var src = srcs.shift();
    if (src) {{
      var script = document.createElement('script');
      script.src = src;
      script.type = 'text/javascript';
      script.onload = loadScript;
      document.head.appendChild(script);
    }}
  }}
  loadScript();
}})();
"#
    )
}

/// Write `generated/uncompressed.js` for the app.
pub fn write_uncompressed(
    ctx: &BuildContext,
    files: &[String],
    warnings: &mut Vec<BuildWarning>,
) -> Result<BootstrapSources> {
    let bundle = bundle_sources(files, &ctx.config.source_prefix(), &ctx.profile, warnings)?;
    write_output(
        &ctx.generated_dir().join("uncompressed.js"),
        &render(&bundle.sources),
    )?;
    Ok(bundle)
}
