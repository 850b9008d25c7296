//! Data model types for the template catalog.
//!
//! Every vocabulary here is closed: the gallery only ever offers these
//! values, and YAML that names anything else fails to parse.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a string names no member of a vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind}: '{value}'")]
pub struct VocabularyError {
    pub kind: &'static str,
    pub value: String,
}

/// Declares a closed vocabulary enum with its slug, display label,
/// declaration-ordered `all()`, `Display`, and case-insensitive `FromStr`.
macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        $name:ident ($kind:literal, $all:ident) {
            $($variant:ident => $slug:literal, $label:literal;)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $slug)]
                $variant,
            )+
        }

        const $all: &[$name] = &[$($name::$variant,)+];

        impl $name {
            /// Slug used in YAML, share links, and CLI arguments.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $slug,)+
                }
            }

            /// Human-readable label shown next to filter controls.
            pub fn label(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }

            /// Every member in declaration order.
            pub fn all() -> &'static [$name] {
                $all
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.label())
            }
        }

        impl std::str::FromStr for $name {
            type Err = VocabularyError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let lower = s.trim().to_lowercase();
                $all
                    .iter()
                    .copied()
                    .find(|v| v.as_str() == lower)
                    .ok_or_else(|| VocabularyError {
                        kind: $kind,
                        value: s.to_string(),
                    })
            }
        }
    };
}

// ── Category ────────────────────────────────────────────────────────────────

vocabulary! {
    /// Top-level grouping of a template in the gallery sidebar.
    Category ("category", ALL_CATEGORIES) {
        Professional => "professional", "Professional";
        Interactive => "interactive", "Interactive";
        Detailed => "detailed", "Detailed";
        Minimal => "minimal", "Minimal";
        Themed => "themed", "Themed";
    }
}

// ── Feature ─────────────────────────────────────────────────────────────────

vocabulary! {
    /// Capability label. Entries carry these as both `tags` and `features`;
    /// tag filtering treats the two lists as one label space.
    Feature ("tag", ALL_FEATURES) {
        Retry => "retry", "Retry Logic";
        Collapsible => "collapsible", "Collapsible Details";
        Copy => "copy", "Copy Functionality";
        Animated => "animated", "Animations";
        Themed => "themed", "Custom Theme";
        Support => "support", "Support Guidance";
        Warning => "warning", "Warning Style";
        Info => "info", "Info Style";
        InlineActions => "inline-actions", "Inline Actions";
        Modern => "modern", "Modern Design";
        Comprehensive => "comprehensive", "Comprehensive";
        Smooth => "smooth", "Smooth Animations";
        Bounce => "bounce", "Bounce Effects";
        Transitions => "transitions", "Transitions";
        Automatic => "automatic", "Automatic Retry";
        Smart => "smart", "Smart Logic";
        Loading => "loading", "Loading States";
        Tracking => "tracking", "Retry Tracking";
        Details => "details", "Error Details";
        StackTrace => "stack-trace", "Stack Trace";
        Essential => "essential", "Essential Features";
        Simple => "simple", "Simple Design";
        Clean => "clean", "Clean Layout";
        SpaceEfficient => "space-efficient", "Space Efficient";
        Inline => "inline", "Inline Layout";
        Minimal => "minimal", "Minimal Design";
        DarkMode => "dark-mode", "Dark Mode";
        RedAccent => "red-accent", "Red Accent";
        Gradient => "gradient", "Gradient Design";
        Colorful => "colorful", "Colorful";
        Beautiful => "beautiful", "Beautiful Design";
        Fancy => "fancy", "Fancy Styling";
        Elegant => "elegant", "Elegant Design";
        Premium => "premium", "Premium Look";
        Shadow => "shadow", "Shadow Effects";
        Icon => "icon", "Icon Focus";
        Centered => "centered", "Centered Layout";
        Svg => "svg", "SVG Icons";
        Orange => "orange", "Orange Theme";
        Professional => "professional", "Professional";
        Card => "card", "Card Style";
        Detailed => "detailed", "Detailed Info";
        Compact => "compact", "Compact Design";
    }
}

// ── Language ────────────────────────────────────────────────────────────────

vocabulary! {
    /// Implementation technology of the template source itself.
    Language ("language", ALL_LANGUAGES) {
        Jsx => "jsx", "JSX";
        Tsx => "tsx", "TypeScript React";
        Css => "css", "CSS";
        Tailwind => "tailwind", "Tailwind CSS";
        Html => "html", "HTML";
        Scss => "scss", "SCSS";
        Sass => "sass", "Sass";
        StyledComponents => "styled-components", "Styled Components";
        Emotion => "emotion", "Emotion";
    }
}

// ── Badge ───────────────────────────────────────────────────────────────────

vocabulary! {
    /// Status badge. Declaration order is the status sort rank.
    Badge ("badge", ALL_BADGES) {
        New => "new", "New";
        Popular => "popular", "Popular";
        Stable => "stable", "Stable";
        Beta => "beta", "Beta";
        Experimental => "experimental", "Experimental";
    }
}

// ── Complexity ──────────────────────────────────────────────────────────────

vocabulary! {
    /// How much a template does. Declaration order is the severity rank.
    Complexity ("complexity", ALL_COMPLEXITIES) {
        Simple => "simple", "Simple";
        Intermediate => "intermediate", "Intermediate";
        Advanced => "advanced", "Advanced";
    }
}

// ── Catalog Entry ───────────────────────────────────────────────────────────

/// One selectable template in the gallery, loaded from YAML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Unique slug (`[a-z0-9-]+`), stable across releases.
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: Category,
    #[serde(default)]
    pub tags: Vec<Feature>,
    #[serde(default)]
    pub features: Vec<Feature>,
    #[serde(default)]
    pub languages: Vec<Language>,
    #[serde(default)]
    pub badge: Option<Badge>,
    pub complexity: Complexity,
    /// Path of the template source, relative to the template root.
    pub template_path: String,
    #[serde(default)]
    pub usage_example: Option<String>,
}

impl CatalogEntry {
    /// True when `label` appears in either `tags` or `features`.
    pub fn has_label(&self, label: Feature) -> bool {
        self.tags.contains(&label) || self.features.contains(&label)
    }

    pub fn has_language(&self, language: Language) -> bool {
        self.languages.contains(&language)
    }

    /// Tags followed by features, duplicates included.
    pub fn labels(&self) -> impl Iterator<Item = Feature> + '_ {
        self.tags.iter().chain(self.features.iter()).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_round_trip_through_from_str() {
        for &feature in Feature::all() {
            let parsed: Feature = feature.as_str().parse().unwrap();
            assert_eq!(parsed, feature, "round-trip failed for {:?}", feature);
        }
        for &language in Language::all() {
            let parsed: Language = language.as_str().parse().unwrap();
            assert_eq!(parsed, language);
        }
    }

    #[test]
    fn parsing_is_case_insensitive_and_trims() {
        assert_eq!("Dark-Mode".parse::<Feature>().unwrap(), Feature::DarkMode);
        assert_eq!(" TSX ".parse::<Language>().unwrap(), Language::Tsx);
        assert_eq!("Themed".parse::<Category>().unwrap(), Category::Themed);
    }

    #[test]
    fn unknown_value_names_its_vocabulary() {
        let err = "sparkly".parse::<Badge>().unwrap_err();
        assert_eq!(err.kind, "badge");
        assert_eq!(err.to_string(), "unknown badge: 'sparkly'");
    }

    #[test]
    fn vocabulary_sizes() {
        assert_eq!(Category::all().len(), 5);
        assert_eq!(Feature::all().len(), 43);
        assert_eq!(Language::all().len(), 9);
        assert_eq!(Badge::all().len(), 5);
        assert_eq!(Complexity::all().len(), 3);
    }

    #[test]
    fn declaration_order_is_rank_order() {
        assert!(Badge::New < Badge::Popular);
        assert!(Badge::Beta < Badge::Experimental);
        assert!(Complexity::Simple < Complexity::Intermediate);
        assert!(Complexity::Intermediate < Complexity::Advanced);
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(Feature::StackTrace.to_string(), "Stack Trace");
        assert_eq!(Language::StyledComponents.to_string(), "Styled Components");
    }

    #[test]
    fn has_label_checks_tags_and_features() {
        let entry = CatalogEntry {
            id: "retry".into(),
            title: "Retry".into(),
            description: "Retries".into(),
            category: Category::Interactive,
            tags: vec![],
            features: vec![Feature::Retry],
            languages: vec![Language::Tsx],
            badge: None,
            complexity: Complexity::Simple,
            template_path: "app/components/error-boundaries/RetryErrorBoundary.tsx".into(),
            usage_example: None,
        };
        assert!(entry.has_label(Feature::Retry));
        assert!(!entry.has_label(Feature::Copy));
        assert!(entry.has_language(Language::Tsx));
        assert_eq!(entry.labels().collect::<Vec<_>>(), vec![Feature::Retry]);
    }
}
