//! Generate operation - collection to JavaScript client on disk.

use std::path::Path;

use eyre::{Context, Result};
use postgen_codegen::pipeline::{Pipeline, Severity, TracePlugin};
use postgen_codegen_javascript::{Formatter, Generator, JsOptions};
use postgen_collection::Collection;
use postgen_core::LanguageCodegen;
use tracing::debug;

use crate::{
    error::RunError,
    prompt::{self, Prompter},
    reports::{GenerateReport, GenerationResult, PreviewResult, WrittenResult},
};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Destination directory, replaced as a whole.
    pub output_dir: &'a Path,
    /// Options for the emitted JavaScript.
    pub js: JsOptions,
    /// Formatter run over the written files, if any.
    pub formatter: Option<Formatter>,
    /// Whether to preview without writing files.
    pub dry_run: bool,
    /// Replace an existing destination without asking.
    pub assume_yes: bool,
}

/// Execute the generate operation.
///
/// Runs the pipeline on the collection, then either previews the files or
/// replaces the destination with them.
pub fn generate(
    collection: Collection,
    opts: GenerateOptions,
    prompter: &mut dyn Prompter,
) -> Result<GenerateReport> {
    let collection_name = collection.name().map(str::to_string);

    let ctx = Pipeline::new()
        .plugin(TracePlugin)
        .run(collection)
        .wrap_err("Pipeline failed")?;

    let warnings: Vec<String> = ctx
        .warnings()
        .map(|d| match &d.location {
            Some(location) => format!("{} (at {location})", d.message),
            None => d.message.clone(),
        })
        .collect();
    for diag in ctx
        .diagnostics
        .iter()
        .filter(|d| matches!(d.severity, Severity::Info))
    {
        debug!(phase = %diag.phase, "{diag}");
    }

    let operation_count = ctx.tree()?.operation_count();
    let generator = Generator::from_context(ctx)?.with_options(opts.js);
    let service_count = generator.services().len();

    let result = if opts.dry_run {
        let files = generator.preview()?;
        GenerationResult::Preview(PreviewResult { files })
    } else {
        prepare_destination(opts.output_dir, opts.assume_yes, prompter)?;

        let gen_result = generator
            .generate(opts.output_dir)
            .wrap_err("Failed to generate code")?;

        let formatted = opts
            .formatter
            .as_ref()
            .is_some_and(|formatter| spawn_formatter(formatter, opts.output_dir));

        GenerationResult::Written(WrittenResult {
            output_dir: opts.output_dir.to_path_buf(),
            services: gen_result.services,
            files: gen_result.files,
            formatted,
        })
    };

    Ok(GenerateReport {
        collection_name,
        warnings,
        operation_count,
        service_count,
        result,
    })
}

/// Refuse destinations whose removal would take the working directory with it.
pub fn check_destination(destination: &Path) -> Result<(), RunError> {
    let unusable = |reason| RunError::UnusableDestination {
        path: destination.to_path_buf(),
        reason,
    };

    if destination.as_os_str().is_empty() {
        return Err(unusable("the path is empty"));
    }

    // A destination that does not exist yet cannot contain the working directory.
    if let Ok(destination) = destination.canonicalize()
        && let Ok(cwd) = std::env::current_dir().and_then(|cwd| cwd.canonicalize())
        && cwd.starts_with(&destination)
    {
        return Err(unusable("it contains the working directory"));
    }

    Ok(())
}

/// Clear the destination and create it empty.
///
/// An existing destination is only removed after confirmation, unless
/// `assume_yes` is set. Nothing is touched when the answer is negative.
fn prepare_destination(
    destination: &Path,
    assume_yes: bool,
    prompter: &mut dyn Prompter,
) -> Result<()> {
    check_destination(destination)?;

    if let Ok(metadata) = std::fs::symlink_metadata(destination) {
        if !assume_yes {
            prompt::confirm_overwrite(prompter, destination)?;
        }

        let removed = if metadata.is_dir() {
            std::fs::remove_dir_all(destination)
        } else {
            std::fs::remove_file(destination)
        };
        removed.wrap_err_with(|| format!("Failed to remove '{}'", destination.display()))?;
        debug!(path = %destination.display(), "removed existing destination");
    }

    std::fs::create_dir_all(destination)
        .wrap_err_with(|| format!("Failed to create '{}'", destination.display()))?;
    Ok(())
}

fn spawn_formatter(formatter: &Formatter, output_dir: &Path) -> bool {
    match formatter.spawn(output_dir) {
        Ok(_child) => true,
        Err(err) => {
            debug!(%err, "formatter did not start");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::prompt::ScriptedPrompter;

    const SHOP: &str = r#"{
        "info": { "name": "Shop API" },
        "item": [
            {
                "name": "Users",
                "item": [
                    {
                        "name": "users",
                        "request": { "method": "GET", "urlObject": { "path": ["users"] } }
                    }
                ]
            },
            { "name": "Ping", "request": { "method": "GET", "urlObject": { "path": ["ping"] } } }
        ]
    }"#;

    fn options(output_dir: &Path) -> GenerateOptions<'_> {
        GenerateOptions {
            output_dir,
            js: JsOptions::default(),
            formatter: None,
            dry_run: false,
            assume_yes: false,
        }
    }

    fn is_cancelled(err: &eyre::Report) -> bool {
        matches!(err.downcast_ref::<RunError>(), Some(RunError::Cancelled))
    }

    #[test]
    fn test_generate_into_new_destination() {
        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("api");
        let mut prompter = ScriptedPrompter::new(&[]);

        let report = generate(SHOP.parse().unwrap(), options(&dest), &mut prompter).unwrap();

        assert!(prompter.asked.is_empty());
        assert_eq!(report.collection_name.as_deref(), Some("Shop API"));
        assert_eq!(report.operation_count, 2);
        let GenerationResult::Written(written) = report.result else {
            panic!("expected written result");
        };
        assert_eq!(written.services, ["Users", "rootRequests"]);
        assert!(!written.formatted);
        assert!(dest.join("services/Users/index.js").is_file());
        assert!(dest.join("ApiManager.js").is_file());
    }

    #[test]
    fn test_declined_overwrite_leaves_destination() {
        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("api");
        fs::create_dir(&dest).unwrap();
        fs::write(dest.join("keep.js"), "export {};\n").unwrap();
        let mut prompter = ScriptedPrompter::new(&["n"]);

        let err = generate(SHOP.parse().unwrap(), options(&dest), &mut prompter).unwrap_err();

        assert!(is_cancelled(&err));
        assert!(dest.join("keep.js").is_file());
        assert!(!dest.join("services").exists());
    }

    #[test]
    fn test_confirmed_overwrite_replaces_destination() {
        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("api");
        fs::create_dir_all(dest.join("services/stale")).unwrap();
        let mut prompter = ScriptedPrompter::new(&["what?", "yes"]);

        let report = generate(SHOP.parse().unwrap(), options(&dest), &mut prompter).unwrap();

        assert_eq!(prompter.asked.len(), 2);
        assert!(!dest.join("services/stale").exists());
        let GenerationResult::Written(written) = report.result else {
            panic!("expected written result");
        };
        assert_eq!(written.services, ["Users", "rootRequests"]);
    }

    #[test]
    fn test_assume_yes_skips_confirmation() {
        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("api");
        fs::write(&dest, "not a directory").unwrap();
        let mut prompter = ScriptedPrompter::new(&[]);

        let opts = GenerateOptions {
            assume_yes: true,
            ..options(&dest)
        };
        generate(SHOP.parse().unwrap(), opts, &mut prompter).unwrap();

        assert!(dest.join("index.js").is_file());
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("api");
        let mut prompter = ScriptedPrompter::new(&[]);

        let opts = GenerateOptions {
            dry_run: true,
            ..options(&dest)
        };
        let report = generate(SHOP.parse().unwrap(), opts, &mut prompter).unwrap();

        assert!(!dest.exists());
        let GenerationResult::Preview(preview) = report.result else {
            panic!("expected preview result");
        };
        assert!(preview.files.iter().any(|f| f.path == "services/Users/index.js"));
    }

    #[test]
    fn test_unusable_destinations() {
        for dest in ["", ".", "/"] {
            let err = check_destination(Path::new(dest)).unwrap_err();
            assert!(matches!(err, RunError::UnusableDestination { .. }), "{dest:?}");
        }

        let temp = TempDir::new().unwrap();
        assert!(check_destination(&temp.path().join("api")).is_ok());
    }
}
