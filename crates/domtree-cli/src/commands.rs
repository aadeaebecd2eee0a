//! Subcommand implementations
//!
//! Each command returns an [`Outcome`]; `main` maps it to stdout/stderr and
//! an exit code. IO and usage problems come back as `Err`.

use std::path::{Path, PathBuf};

use anyhow::Context;
use domtree_core::{BuildError, OrderingMode, OrderingValidator, PrefixMatch};
use domtree_provider::{DomainTreeService, JsonFileProvider, ProviderError, ServiceConfig};
use tracing::debug;

/// Result of a command that ran to completion
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print to stdout, exit 0
    Success(String),
    /// Print to stderr, exit 1
    Failure(String),
}

/// Options for `build`
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    /// Listing file
    pub input: PathBuf,
    /// Root below which records are listed
    pub root: String,
    /// Fail on ordering violations
    pub strict: bool,
    /// Use plain string prefixes
    pub raw_prefix: bool,
    /// Separator override
    pub separator: Option<char>,
    /// Page size override
    pub batch_size: Option<usize>,
    /// Emit JSON instead of text
    pub json: bool,
    /// TOML config file
    pub config: Option<PathBuf>,
}

impl BuildOptions {
    /// File config (or defaults) with command-line overrides applied
    ///
    /// # Errors
    /// Returns error if the config file cannot be loaded.
    pub fn effective_config(&self) -> anyhow::Result<ServiceConfig> {
        let mut config = match &self.config {
            Some(path) => ServiceConfig::from_file(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => ServiceConfig::default(),
        };
        if self.strict {
            config.builder.ordering = OrderingMode::Strict;
        }
        if self.raw_prefix {
            config.builder.prefix_match = PrefixMatch::Raw;
        }
        if let Some(separator) = self.separator {
            config.builder.separator = separator;
        }
        if let Some(batch_size) = self.batch_size {
            config.batch_size = batch_size;
        }
        Ok(config)
    }
}

/// Load a listing file and render its forest
///
/// # Errors
/// Returns error for unreadable input, bad configuration, or provider
/// failures. Strict-mode ordering violations are an [`Outcome::Failure`].
pub async fn build(options: &BuildOptions) -> anyhow::Result<Outcome> {
    let config = options.effective_config()?;
    debug!(?config, "effective configuration");

    let provider = JsonFileProvider::open(&options.input)
        .await?
        .with_separator(config.builder.separator);
    let service = DomainTreeService::new(provider, config)?;

    let forest = match service.load_tree(&options.root).await {
        Ok(forest) => forest,
        Err(ProviderError::Build(e)) => return Ok(Outcome::Failure(describe(&e))),
        Err(e) => return Err(e.into()),
    };

    let rendered = if options.json {
        let mut json = serde_json::to_string_pretty(&forest)?;
        json.push('\n');
        json
    } else {
        forest.render_text()
    };
    Ok(Outcome::Success(rendered))
}

/// Check a listing file's ordering without building a forest
///
/// # Errors
/// Returns error if the input cannot be read or parsed.
pub async fn validate(input: &Path, separator: Option<char>) -> anyhow::Result<Outcome> {
    let provider = JsonFileProvider::open(input).await?;
    let validator = separator.map_or_else(OrderingValidator::default, OrderingValidator::new);

    Ok(match validator.validate(provider.records()) {
        Ok(summary) => Outcome::Success(format!(
            "valid: {} records, {} roots, max depth {}\n",
            summary.records, summary.roots, summary.max_depth
        )),
        Err(e) => Outcome::Failure(describe(&e)),
    })
}

/// Print the effective configuration of a config file
///
/// # Errors
/// Returns error if the file cannot be loaded.
pub fn check_config(path: &Path) -> anyhow::Result<Outcome> {
    let config = ServiceConfig::from_file(path)
        .with_context(|| format!("loading config {}", path.display()))?;
    Ok(Outcome::Success(format!("{config:#?}\n")))
}

fn describe(error: &BuildError) -> String {
    format!("invalid listing: {error}\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn listing_file(json: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    fn options(file: &NamedTempFile) -> BuildOptions {
        BuildOptions {
            input: file.path().to_path_buf(),
            root: "/".into(),
            ..BuildOptions::default()
        }
    }

    const NESTED: &str = r#"[
        {"name":"a","path":"/a","type":"domain"},
        {"name":"x","path":"/a/x","type":"item"},
        {"name":"y","path":"/a/y","type":"item"},
        {"name":"b","path":"/b","type":"item"}
    ]"#;

    #[tokio::test]
    async fn build_renders_text() {
        let file = listing_file(NESTED);
        let outcome = build(&options(&file)).await.unwrap();
        assert_eq!(outcome, Outcome::Success("+ a\n  - x\n  - y\n- b\n".into()));
    }

    #[tokio::test]
    async fn build_renders_json() {
        let file = listing_file(NESTED);
        let outcome = build(&BuildOptions {
            json: true,
            ..options(&file)
        })
        .await
        .unwrap();
        let Outcome::Success(text) = outcome else {
            panic!("expected success");
        };
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value[0]["children"][0]["label"], "x");
    }

    #[tokio::test]
    async fn build_below_root() {
        let file = listing_file(NESTED);
        let outcome = build(&BuildOptions {
            root: "/a".into(),
            ..options(&file)
        })
        .await
        .unwrap();
        assert_eq!(outcome, Outcome::Success("- x\n- y\n".into()));
    }

    #[tokio::test]
    async fn strict_build_reports_failure() {
        let file = listing_file(r#"[{"name":"b","path":"/b"},{"name":"a","path":"/a"}]"#);
        let outcome = build(&BuildOptions {
            strict: true,
            ..options(&file)
        })
        .await
        .unwrap();
        assert!(matches!(outcome, Outcome::Failure(msg) if msg.contains("out of order")));
    }

    #[tokio::test]
    async fn raw_prefix_flag_changes_nesting() {
        let file = listing_file(r#"[{"name":"a","path":"/a"},{"name":"a-extra","path":"/a-extra"}]"#);
        let boundary = build(&options(&file)).await.unwrap();
        let raw = build(&BuildOptions {
            raw_prefix: true,
            ..options(&file)
        })
        .await
        .unwrap();
        assert_eq!(boundary, Outcome::Success("- a\n- a-extra\n".into()));
        assert_eq!(raw, Outcome::Success("+ a\n  - a-extra\n".into()));
    }

    #[tokio::test]
    async fn custom_separator_builds_from_default_root() {
        let file = listing_file(
            r#"[{"name":"a","path":".a"},{"name":"b","path":".a.b"},{"name":"c","path":".c"}]"#,
        );
        let outcome = build(&BuildOptions {
            separator: Some('.'),
            ..options(&file)
        })
        .await
        .unwrap();
        assert_eq!(outcome, Outcome::Success("+ a\n  - b\n- c\n".into()));
    }

    #[test]
    fn config_file_with_overrides() {
        let mut config = NamedTempFile::new().unwrap();
        writeln!(config, "batch_size = 5\n[builder]\nordering = \"strict\"").unwrap();
        let opts = BuildOptions {
            config: Some(config.path().to_path_buf()),
            batch_size: Some(9),
            ..BuildOptions::default()
        };
        let effective = opts.effective_config().unwrap();
        assert_eq!(effective.batch_size, 9);
        assert_eq!(effective.builder.ordering, OrderingMode::Strict);
    }

    #[tokio::test]
    async fn missing_input_is_error() {
        let opts = BuildOptions {
            input: "/nonexistent/listing.json".into(),
            root: "/".into(),
            ..BuildOptions::default()
        };
        assert!(build(&opts).await.is_err());
    }

    #[tokio::test]
    async fn validate_reports_summary_and_violations() {
        let good = listing_file(NESTED);
        let outcome = validate(good.path(), None).await.unwrap();
        assert_eq!(
            outcome,
            Outcome::Success("valid: 4 records, 2 roots, max depth 1\n".into())
        );

        let bad = listing_file(r#"[{"name":"a","path":"/a"},{"name":"1","path":"/a/x/1"}]"#);
        let outcome = validate(bad.path(), None).await.unwrap();
        assert!(matches!(outcome, Outcome::Failure(msg) if msg.contains("intermediate ancestors")));
    }

    #[test]
    fn check_config_prints_effective_values() {
        let mut config = NamedTempFile::new().unwrap();
        writeln!(config, "reject_empty = true").unwrap();
        let Outcome::Success(text) = check_config(config.path()).unwrap() else {
            panic!("expected success");
        };
        assert!(text.contains("reject_empty: true"));
        assert!(text.contains("batch_size: 75"));
    }
}
