//! User-supplied options threaded through every emission site.
//!
//! Shaped like the teacher's `LithoExportTypescript` (a small deserializable
//! options struct carried alongside the document), generalized into a plain
//! builder since these options are supplied by the host program rather than
//! read off a schema directive.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Carries every recognized option from spec.md §3. All fields have
/// sensible defaults, so `Configuration::default()` is a valid, minimal
/// invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    /// GraphQL scalar name -> target type expression.
    #[serde(default)]
    pub scalar_mappings: BTreeMap<String, String>,
    /// Import lines emitted verbatim after the library imports.
    #[serde(default)]
    pub additional_imports: Vec<String>,
    /// When set, every enum gains a catch-all variant carrying the
    /// unrecognized wire string.
    #[serde(default)]
    pub extensible_enums: bool,
    /// When set, emit one file per top-level declaration plus a
    /// package-object file with type aliases.
    #[serde(default)]
    pub split_files: bool,
    /// Target package; only meaningful when `split_files` is set.
    #[serde(default)]
    pub package_name: Option<String>,
    /// Effect wrapper placed around root-operation results. Reserved by
    /// spec.md §3; not consulted by any emission rule this crate implements.
    #[serde(default = "default_effect_wrapper")]
    pub effect_wrapper: String,
    /// Whether the emitted text should be run through a `SourceFormatter`.
    #[serde(default = "default_enable_fmt")]
    pub enable_fmt: bool,
    /// Reserved flag for view-style generation (spec.md §3). Carried for
    /// forward-compatibility; out of scope for this generator.
    #[serde(default)]
    pub gen_view: bool,
}

fn default_effect_wrapper() -> String {
    "Effect".to_string()
}

fn default_enable_fmt() -> bool {
    true
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            scalar_mappings: BTreeMap::new(),
            additional_imports: Vec::new(),
            extensible_enums: false,
            split_files: false,
            package_name: None,
            effect_wrapper: default_effect_wrapper(),
            enable_fmt: default_enable_fmt(),
            gen_view: false,
        }
    }
}

impl Configuration {
    pub fn new() -> Self {
        Configuration::default()
    }

    pub fn with_scalar_mapping(mut self, graphql_name: impl Into<String>, target: impl Into<String>) -> Self {
        self.scalar_mappings.insert(graphql_name.into(), target.into());
        self
    }

    pub fn with_additional_import(mut self, import: impl Into<String>) -> Self {
        self.additional_imports.push(import.into());
        self
    }

    pub fn with_extensible_enums(mut self, value: bool) -> Self {
        self.extensible_enums = value;
        self
    }

    pub fn with_split_files(mut self, value: bool) -> Self {
        self.split_files = value;
        self
    }

    pub fn with_package_name(mut self, name: impl Into<String>) -> Self {
        self.package_name = Some(name.into());
        self
    }

    pub fn with_effect_wrapper(mut self, effect: impl Into<String>) -> Self {
        self.effect_wrapper = effect.into();
        self
    }

    pub fn with_enable_fmt(mut self, value: bool) -> Self {
        self.enable_fmt = value;
        self
    }

    pub fn with_gen_view(mut self, value: bool) -> Self {
        self.gen_view = value;
        self
    }
}
