use std::path::Path;

use super::*;
use crate::external::Validation;

struct AlwaysValid;

impl SyntaxValidator for AlwaysValid {
    fn validate(&self, _path: &Path) -> std::io::Result<Validation> {
        Ok(Validation::Valid)
    }
}

fn names(registry: &CheckRegistry) -> Vec<&'static str> {
    registry.checks().iter().map(|c| c.name()).collect()
}

#[test]
fn standard_registry_follows_registration_order() {
    let settings = CheckSettings {
        validator: Some(Arc::new(AlwaysValid)),
        ..CheckSettings::default()
    };

    let registry = CheckRegistry::standard(&settings);

    assert_eq!(names(&registry), ALL_CHECK_NAMES);
}

#[test]
fn syntax_check_requires_a_validator() {
    let registry = CheckRegistry::standard(&CheckSettings::default());

    assert_eq!(registry.len(), ALL_CHECK_NAMES.len() - 1);
    assert!(!names(&registry).contains(&"syntax"));
}

#[test]
fn disabled_checks_are_left_out() {
    let settings = CheckSettings {
        disabled: ["pipefail", "env-integration"]
            .iter()
            .map(ToString::to_string)
            .collect(),
        ..CheckSettings::default()
    };

    let registry = CheckRegistry::standard(&settings);
    let names = names(&registry);

    assert!(!names.contains(&"pipefail"));
    assert!(!names.contains(&"env-integration"));
    assert!(names.contains(&"fail-fast"));
}

#[test]
fn python_files_get_shebang_palette_and_env() {
    let registry = CheckRegistry::standard(&CheckSettings::default());

    let applicable: Vec<_> = registry.applicable("py").map(|c| c.name()).collect();

    assert_eq!(applicable, ["shebang", "palette", "env-integration"]);
}

#[test]
fn extensionless_files_get_palette_only() {
    let registry = CheckRegistry::standard(&CheckSettings::default());

    let applicable: Vec<_> = registry.applicable("").map(|c| c.name()).collect();

    assert_eq!(applicable, ["palette"]);
}

#[test]
fn known_check_names() {
    assert!(is_known_check("local-variables"));
    assert!(!is_known_check("unquoted-variables"));
}
