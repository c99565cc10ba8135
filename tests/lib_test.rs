//! Library integration tests.

use tiny_pkg_config::PkgConfigError;

#[test]
fn error_types_are_public() {
    let err = PkgConfigError::PackageNotFound {
        name: "test".into(),
    };
    assert!(err.to_string().contains("test"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> tiny_pkg_config::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use tiny_pkg_config::cli::{Cli, Selector};

    let cli = Cli::parse_from(["tiny-pkg-config", "--cflags", "zlib"]);
    assert_eq!(cli.package.as_deref(), Some("zlib"));
    assert_eq!(cli.selector(), Some(Selector::Cflags));
}

#[test]
fn cargo_toml_has_release_profile() {
    let cargo_toml = include_str!("../Cargo.toml");
    assert!(
        cargo_toml.contains("[profile.release]"),
        "Cargo.toml must have a [profile.release] section"
    );
    assert!(
        cargo_toml.contains("lto = true"),
        "Release profile must enable LTO"
    );
}
