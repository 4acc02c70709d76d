//! # Lintstart Dependency Sets
//!
//! File: cli/src/commands/init/utils/dependencies.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Computes which packages are removed before installation and which are
//! installed for a given project profile. On runtimes older than the configured
//! minimum, every specifier is pinned to a range from a fixed compatibility
//! matrix of releases that still support those runtimes.
//!
use super::project_detector::{Framework, Language, ProjectProfile};
use std::fmt;

/// Packages removed before a fresh installation. Absent packages are not an error.
pub const OLD_DEPENDENCIES: [&str; 8] = [
    "eslint",
    "prettier",
    "eslint-config-prettier",
    "eslint-plugin-prettier",
    "eslint-plugin-react",
    "eslint-plugin-react-hooks",
    "@typescript-eslint/parser",
    "@typescript-eslint/eslint-plugin",
];

const BASE: [&str; 4] = [
    "eslint",
    "prettier",
    "eslint-config-prettier",
    "eslint-plugin-prettier",
];
const REACT: [&str; 3] = [
    "eslint-plugin-react",
    "eslint-plugin-react-hooks",
    "eslint-plugin-jsx-a11y",
];
const TYPESCRIPT: [&str; 2] = ["@typescript-eslint/parser", "@typescript-eslint/eslint-plugin"];
const TSLINT: [&str; 3] = ["tslint", "tslint-react", "tslint-config-prettier"];
const NEXTJS: [&str; 1] = ["eslint-config-next"];
const VUE: [&str; 3] = [
    "eslint-plugin-vue",
    "@vue/eslint-config-typescript",
    "@vue/eslint-config-prettier",
];
const VITE: [&str; 1] = ["eslint-plugin-react-refresh"];
const IMPORT: [&str; 2] = ["eslint-plugin-import", "eslint-import-resolver-typescript"];

/// Version ranges that still support runtimes below the minimum Node.js version.
const COMPAT_MATRIX: [(&str, &str); 19] = [
    ("eslint", "^8.57.0"),
    ("prettier", "^2.8.8"),
    ("eslint-config-prettier", "^8.10.0"),
    ("eslint-plugin-prettier", "^4.2.1"),
    ("eslint-plugin-react", "^7.33.2"),
    ("eslint-plugin-react-hooks", "^4.6.0"),
    ("eslint-plugin-jsx-a11y", "^6.7.1"),
    ("eslint-plugin-import", "^2.29.1"),
    ("eslint-import-resolver-typescript", "^3.6.1"),
    ("@typescript-eslint/parser", "^5.62.0"),
    ("@typescript-eslint/eslint-plugin", "^5.62.0"),
    ("tslint", "^6.1.3"),
    ("tslint-react", "^5.0.0"),
    ("tslint-config-prettier", "^1.18.0"),
    ("eslint-config-next", "^13.5.6"),
    ("eslint-plugin-vue", "^9.17.0"),
    ("@vue/eslint-config-typescript", "^11.0.3"),
    ("@vue/eslint-config-prettier", "^7.1.0"),
    ("eslint-plugin-react-refresh", "^0.4.3"),
];

/// Pinned range for `name` on legacy runtimes, if the matrix lists one.
pub fn legacy_range(name: &str) -> Option<&'static str> {
    COMPAT_MATRIX
        .iter()
        .find(|(package, _)| *package == name)
        .map(|(_, range)| *range)
}

/// # Dependency Set (`DependencySet`)
///
/// Ordered package specifiers (`name` or `name@range`) consumed once by the
/// install step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencySet {
    specifiers: Vec<String>,
}

impl DependencySet {
    /// Builds the install set for `profile`.
    ///
    /// Framework config packages follow `overlay`, the framework whose rules
    /// end up in the generated config (`Framework::None` installs none).
    /// `include_tslint` only has an effect for TypeScript projects. With
    /// `pin_legacy` every known package is pinned through the compatibility matrix.
    pub fn for_profile(
        profile: &ProjectProfile,
        overlay: Framework,
        include_tslint: bool,
        pin_legacy: bool,
    ) -> Self {
        let mut names: Vec<&str> = BASE.to_vec();

        if profile.framework.uses_react() {
            names.extend(REACT);
        }
        if profile.language == Language::TypeScript {
            names.extend(TYPESCRIPT);
            if include_tslint {
                names.extend(TSLINT);
            }
        }
        match overlay {
            Framework::NextJs => names.extend(NEXTJS),
            Framework::Vue => names.extend(VUE),
            Framework::Vite => names.extend(VITE),
            Framework::React | Framework::None => {}
        }
        names.extend(IMPORT);

        let specifiers = names
            .into_iter()
            .map(|name| match legacy_range(name) {
                Some(range) if pin_legacy => format!("{}@{}", name, range),
                _ => name.to_string(),
            })
            .collect();
        Self { specifiers }
    }

    /// Wraps an explicit list of specifiers.
    #[cfg(test)]
    pub fn from_specifiers<I, S>(specifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            specifiers: specifiers.into_iter().map(Into::into).collect(),
        }
    }

    pub fn specifiers(&self) -> &[String] {
        &self.specifiers
    }

    pub fn is_empty(&self) -> bool {
        self.specifiers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.specifiers.len()
    }
}

impl fmt::Display for DependencySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.specifiers.join(" "))
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    fn profile(language: Language, framework: Framework) -> ProjectProfile {
        ProjectProfile {
            language,
            framework,
        }
    }

    #[test]
    fn test_javascript_react_set() {
        let set = DependencySet::for_profile(&profile(Language::JavaScript, Framework::React), Framework::React, false, false);
        assert_eq!(
            set.specifiers(),
            &[
                "eslint",
                "prettier",
                "eslint-config-prettier",
                "eslint-plugin-prettier",
                "eslint-plugin-react",
                "eslint-plugin-react-hooks",
                "eslint-plugin-jsx-a11y",
                "eslint-plugin-import",
                "eslint-import-resolver-typescript",
            ]
        );
    }

    #[test]
    fn test_typescript_vue_set_with_tslint() {
        let set = DependencySet::for_profile(&profile(Language::TypeScript, Framework::Vue), Framework::Vue, true, false);
        let specs = set.specifiers();
        assert!(!specs.iter().any(|s| s == "eslint-plugin-react"));
        assert!(specs.iter().any(|s| s == "@typescript-eslint/parser"));
        assert!(specs.iter().any(|s| s == "tslint-react"));
        assert!(specs.iter().any(|s| s == "@vue/eslint-config-prettier"));
        assert_eq!(specs.last().map(String::as_str), Some("eslint-import-resolver-typescript"));
    }

    #[test]
    fn test_tslint_ignored_for_javascript() {
        let set = DependencySet::for_profile(&profile(Language::JavaScript, Framework::Vite), Framework::Vite, true, false);
        assert!(!set.specifiers().iter().any(|s| s.starts_with("tslint")));
        assert!(set.specifiers().iter().any(|s| s == "eslint-plugin-react-refresh"));
    }

    #[test]
    fn test_legacy_pinning_keeps_names() {
        let set = DependencySet::for_profile(&profile(Language::TypeScript, Framework::NextJs), Framework::NextJs, false, true);
        for spec in set.specifiers() {
            let (name, range) = spec.rsplit_once('@').expect("pinned specifier");
            assert!(!name.is_empty(), "{} lost its name", spec);
            assert!(range.starts_with('^'));
        }
        assert!(set.specifiers().contains(&"eslint@^8.57.0".to_string()));
        assert!(set
            .specifiers()
            .contains(&"@typescript-eslint/parser@^5.62.0".to_string()));
        assert!(set.specifiers().contains(&"eslint-config-next@^13.5.6".to_string()));
    }

    #[test]
    fn test_no_overlay_skips_framework_packages() {
        let next = profile(Language::JavaScript, Framework::NextJs);
        let set = DependencySet::for_profile(&next, Framework::None, false, false);
        assert!(!set.specifiers().iter().any(|s| s == "eslint-config-next"));
        assert!(set.specifiers().iter().any(|s| s == "eslint-plugin-react"));

        let vue = profile(Language::TypeScript, Framework::Vue);
        let set = DependencySet::for_profile(&vue, Framework::None, false, false);
        assert!(!set.specifiers().iter().any(|s| s.contains("vue")));
        assert!(!set.specifiers().iter().any(|s| s == "eslint-plugin-react"));
    }

    #[test]
    fn test_display_joins_specifiers() {
        let set = DependencySet::from_specifiers(["eslint", "prettier"]);
        assert_eq!(set.to_string(), "eslint prettier");
        assert_eq!(set.len(), 2);
        assert!(legacy_range("left-pad").is_none());
    }
}
