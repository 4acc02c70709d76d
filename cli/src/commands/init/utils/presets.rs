//! # Lintstart Preset Catalog
//!
//! File: cli/src/commands/init/utils/presets.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The fixed catalog of lint/format presets and framework overlays.
//!
//! | Preset     | Intent                                            |
//! |------------|---------------------------------------------------|
//! | `standard` | Balance between code quality and velocity (default) |
//! | `strict`   | Maximum strictness, complexity limits             |
//! | `relaxed`  | Legacy code or fast prototyping                   |
//! | `team`     | Multi-developer projects, import ordering         |
//!
//! Overlays exist for `nextjs`, `vite` and `vue`; plain React projects use the
//! preset as-is. The catalog is read-only: every lookup builds a fresh value,
//! so callers are free to merge into what they get back.
//!
use super::project_detector::Framework;
use serde::Serialize;
use serde_json::{json, Map, Value};

/// Preset used when no (or an unknown) preset name is given.
pub const DEFAULT_PRESET: &str = "standard";

/// All preset names, in the order they are offered to the user.
pub const PRESET_NAMES: [&str; 4] = ["standard", "strict", "relaxed", "team"];

/// # Lint Ruleset (`LintRuleset`)
///
/// An ESLint configuration block. Used for the preset's lint half, for
/// framework overlays, and for the final resolved `.eslintrc.js` document.
/// Field order here is the key order of the generated file; empty sections are
/// omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LintRuleset {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extends: Vec<String>,
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub env: Map<String, Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub plugins: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parser: Option<String>,
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub parser_options: Map<String, Value>,
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub rules: Map<String, Value>,
}

impl LintRuleset {
    /// Layers `overlay` on top of `self`.
    ///
    /// `extends` and `plugins` concatenate (own entries first), while `env`,
    /// `parserOptions` and `rules` merge key-wise with the overlay winning.
    pub fn merge(&mut self, overlay: &LintRuleset) {
        self.extends.extend(overlay.extends.iter().cloned());
        self.plugins.extend(overlay.plugins.iter().cloned());
        for (key, value) in &overlay.env {
            self.env.insert(key.clone(), value.clone());
        }
        for (key, value) in &overlay.parser_options {
            self.parser_options.insert(key.clone(), value.clone());
        }
        for (key, value) in &overlay.rules {
            self.rules.insert(key.clone(), value.clone());
        }
        if overlay.parser.is_some() {
            self.parser = overlay.parser.clone();
        }
    }
}

/// A named preset: one lint ruleset and one Prettier option set.
#[derive(Debug, Clone, PartialEq)]
pub struct Preset {
    pub name: &'static str,
    pub eslint: LintRuleset,
    pub prettier: Map<String, Value>,
}

/// Returns `true` if `name` is one of the catalog presets.
pub fn is_known(name: &str) -> bool {
    PRESET_NAMES.contains(&name)
}

/// Human-readable description shown in the preset prompt.
pub fn description(name: &str) -> &'static str {
    match name {
        "strict" => "Strict - maximum code quality requirements",
        "relaxed" => "Relaxed - fast prototyping or legacy projects",
        "team" => "Team - consistent style for multi-developer projects",
        _ => "Standard - balances code quality and velocity (recommended)",
    }
}

/// # Look Up Preset (`preset`)
///
/// Returns the named preset. Unknown names resolve to `standard`; this never
/// fails.
pub fn preset(name: &str) -> Preset {
    let name = PRESET_NAMES
        .iter()
        .copied()
        .find(|known| *known == name)
        .unwrap_or(DEFAULT_PRESET);

    let (eslint, prettier) = match name {
        "strict" => strict(),
        "relaxed" => relaxed(),
        "team" => team(),
        _ => standard(),
    };

    Preset {
        name,
        eslint,
        prettier,
    }
}

/// # Framework Overlay (`framework_overlay`)
///
/// The additional lint block for a framework, or `None` when the framework
/// needs nothing beyond the preset (React, or no framework at all).
pub fn framework_overlay(framework: Framework) -> Option<LintRuleset> {
    match framework {
        Framework::NextJs => Some(LintRuleset {
            extends: strings(&["next/core-web-vitals"]),
            rules: object(json!({
                "@next/next/no-img-element": "error",
                "@next/next/no-html-link-for-pages": "error"
            })),
            ..Default::default()
        }),
        Framework::Vite => Some(LintRuleset {
            env: object(json!({ "browser": true, "es2020": true })),
            parser_options: object(json!({ "ecmaVersion": "latest", "sourceType": "module" })),
            plugins: strings(&["react-refresh"]),
            rules: object(json!({ "react-refresh/only-export-components": "warn" })),
            ..Default::default()
        }),
        Framework::Vue => Some(LintRuleset {
            extends: strings(&[
                "plugin:vue/vue3-essential",
                "@vue/eslint-config-typescript",
                "@vue/eslint-config-prettier",
            ]),
            rules: object(json!({
                "vue/multi-word-component-names": "off",
                "vue/no-unused-vars": "error"
            })),
            ..Default::default()
        }),
        Framework::React | Framework::None => None,
    }
}

fn strict() -> (LintRuleset, Map<String, Value>) {
    let eslint = LintRuleset {
        extends: strings(&[
            "eslint:recommended",
            "plugin:@typescript-eslint/recommended",
            "plugin:@typescript-eslint/recommended-requiring-type-checking",
            "plugin:react/recommended",
            "plugin:react-hooks/recommended",
            "plugin:jsx-a11y/recommended",
            "plugin:import/recommended",
            "plugin:import/typescript",
            "prettier",
        ]),
        rules: object(json!({
            "@typescript-eslint/no-explicit-any": "error",
            "@typescript-eslint/no-unused-vars": "error",
            "@typescript-eslint/explicit-function-return-type": "error",
            "@typescript-eslint/no-non-null-assertion": "error",
            "react/prop-types": "error",
            "no-console": "error",
            "no-debugger": "error",
            "complexity": ["error", 10],
            "max-depth": ["error", 4],
            "max-lines-per-function": ["error", 50]
        })),
        ..Default::default()
    };
    let prettier = object(json!({
        "printWidth": 80,
        "tabWidth": 2,
        "semi": true,
        "singleQuote": true,
        "trailingComma": "all",
        "arrowParens": "always"
    }));
    (eslint, prettier)
}

fn standard() -> (LintRuleset, Map<String, Value>) {
    let eslint = LintRuleset {
        extends: strings(&[
            "eslint:recommended",
            "plugin:@typescript-eslint/recommended",
            "plugin:react/recommended",
            "plugin:react-hooks/recommended",
            "prettier",
        ]),
        rules: object(json!({
            "@typescript-eslint/no-explicit-any": "warn",
            "@typescript-eslint/no-unused-vars": ["error", { "argsIgnorePattern": "^_" }],
            "@typescript-eslint/explicit-function-return-type": "off",
            "@typescript-eslint/no-non-null-assertion": "warn",
            "react/prop-types": "off",
            "no-console": "warn",
            "no-debugger": "error"
        })),
        ..Default::default()
    };
    let prettier = object(json!({
        "printWidth": 80,
        "tabWidth": 2,
        "semi": true,
        "singleQuote": true,
        "trailingComma": "es5",
        "arrowParens": "avoid"
    }));
    (eslint, prettier)
}

fn relaxed() -> (LintRuleset, Map<String, Value>) {
    let eslint = LintRuleset {
        extends: strings(&[
            "eslint:recommended",
            "plugin:@typescript-eslint/recommended",
            "plugin:react/recommended",
            "prettier",
        ]),
        rules: object(json!({
            "@typescript-eslint/no-explicit-any": "off",
            "@typescript-eslint/no-unused-vars": "warn",
            "@typescript-eslint/explicit-function-return-type": "off",
            "@typescript-eslint/no-non-null-assertion": "off",
            "react/prop-types": "off",
            "no-console": "off",
            "no-debugger": "warn",
            "@typescript-eslint/ban-ts-comment": "off"
        })),
        ..Default::default()
    };
    let prettier = object(json!({
        "printWidth": 120,
        "tabWidth": 2,
        "semi": false,
        "singleQuote": true,
        "trailingComma": "none",
        "arrowParens": "avoid"
    }));
    (eslint, prettier)
}

fn team() -> (LintRuleset, Map<String, Value>) {
    let eslint = LintRuleset {
        extends: strings(&[
            "eslint:recommended",
            "plugin:@typescript-eslint/recommended",
            "plugin:react/recommended",
            "plugin:react-hooks/recommended",
            "plugin:import/recommended",
            "plugin:import/typescript",
            "prettier",
        ]),
        rules: object(json!({
            "@typescript-eslint/no-explicit-any": "warn",
            "@typescript-eslint/no-unused-vars": ["error", { "argsIgnorePattern": "^_" }],
            "@typescript-eslint/explicit-function-return-type": "off",
            "@typescript-eslint/consistent-type-imports": "error",
            "react/prop-types": "off",
            "no-console": "warn",
            "no-debugger": "error",
            "import/order": ["error", {
                "groups": ["builtin", "external", "internal", "parent", "sibling", "index"],
                "newlines-between": "always",
                "alphabetize": { "order": "asc", "caseInsensitive": true }
            }],
            "prefer-const": "error",
            "no-var": "error"
        })),
        ..Default::default()
    };
    let prettier = object(json!({
        "printWidth": 100,
        "tabWidth": 2,
        "semi": true,
        "singleQuote": true,
        "trailingComma": "es5",
        "arrowParens": "avoid",
        "bracketSpacing": true
    }));
    (eslint, prettier)
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Unwraps a `json!` object literal; non-objects yield an empty map.
fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}
