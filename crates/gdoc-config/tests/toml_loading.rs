//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var manipulation.

use figment::Jail;
use gdoc_config::{GdocConfig, ParseConfig, WalkConfig};
use pretty_assertions::assert_eq;

#[test]
fn project_file_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".gdoc")?;
        jail.create_file(
            ".gdoc/config.toml",
            r#"
[walk]
include_test_files = false
respect_gitignore = true

[parse]
strict = false
"#,
        )?;

        let config = GdocConfig::load().expect("config loads");
        assert_eq!(
            config,
            GdocConfig {
                walk: WalkConfig {
                    include_test_files: false,
                    respect_gitignore: true,
                    ..WalkConfig::default()
                },
                parse: ParseConfig { strict: false },
            }
        );
        Ok(())
    });
}

#[test]
fn explicit_file_overrides_project_file() {
    Jail::expect_with(|jail| {
        jail.create_dir(".gdoc")?;
        jail.create_file(".gdoc/config.toml", "[walk]\nskip_hidden = false\n")?;
        jail.create_file("ci.toml", "[walk]\nskip_hidden = true\n")?;

        let config =
            GdocConfig::load_with_file(std::path::Path::new("ci.toml")).expect("config loads");
        assert!(config.walk.skip_hidden);
        Ok(())
    });
}

#[test]
fn partial_sections_keep_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file("partial.toml", "[walk]\nfollow_links = true\n")?;

        let config = GdocConfig::load_with_file(std::path::Path::new("partial.toml"))
            .expect("config loads");
        assert!(config.walk.follow_links);
        assert!(config.walk.include_test_files);
        assert!(config.parse.strict);
        Ok(())
    });
}

#[test]
fn invalid_value_is_an_error() {
    Jail::expect_with(|jail| {
        jail.create_file("bad.toml", "[parse]\nstrict = \"sometimes\"\n")?;

        let result = GdocConfig::load_with_file(std::path::Path::new("bad.toml"));
        assert!(result.is_err());
        Ok(())
    });
}
