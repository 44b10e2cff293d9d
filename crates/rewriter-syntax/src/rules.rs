//! The table of resource lookups the rewriter understands.

/// The kind of asset a lookup resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// An image asset.
    Image,
    /// A colour asset.
    Color,
}

impl ResourceKind {
    /// The suffix stripped from normalised names of this kind.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Image => "Image",
            Self::Color => "Color",
        }
    }
}

/// The UI framework generation a lookup belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiGeneration {
    /// `UIImage(named:)` and `UIColor(named:)`, which return optionals.
    UiKit,
    /// `Image(_:)` and `Color(_:)`.
    SwiftUi,
}

/// One string-named initialiser and how to rewrite it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RewriteRule {
    callee: &'static str,
    kind: ResourceKind,
    generation: ApiGeneration,
    required_label: Option<&'static str>,
    output_label: Option<&'static str>,
}

const RULES: [RewriteRule; 4] = [
    RewriteRule {
        callee: "UIImage",
        kind: ResourceKind::Image,
        generation: ApiGeneration::UiKit,
        required_label: Some("named"),
        output_label: Some("resource"),
    },
    RewriteRule {
        callee: "UIColor",
        kind: ResourceKind::Color,
        generation: ApiGeneration::UiKit,
        required_label: Some("named"),
        output_label: Some("resource"),
    },
    RewriteRule {
        callee: "Image",
        kind: ResourceKind::Image,
        generation: ApiGeneration::SwiftUi,
        required_label: None,
        output_label: None,
    },
    RewriteRule {
        callee: "Color",
        kind: ResourceKind::Color,
        generation: ApiGeneration::SwiftUi,
        required_label: None,
        output_label: None,
    },
];

impl RewriteRule {
    /// Looks up the rule for a bare callee identifier.
    #[must_use]
    pub fn for_callee(name: &str) -> Option<&'static Self> {
        RULES.iter().find(|rule| rule.callee == name)
    }

    /// The type name being initialised.
    #[must_use]
    pub const fn callee(&self) -> &'static str {
        self.callee
    }

    /// The kind of asset looked up.
    #[must_use]
    pub const fn kind(&self) -> ResourceKind {
        self.kind
    }

    /// The framework generation of the lookup.
    #[must_use]
    pub const fn generation(&self) -> ApiGeneration {
        self.generation
    }

    /// The label the first argument must carry; `None` means unlabelled.
    #[must_use]
    pub const fn required_label(&self) -> Option<&'static str> {
        self.required_label
    }

    /// The label written in front of the typed accessor.
    #[must_use]
    pub const fn output_label(&self) -> Option<&'static str> {
        self.output_label
    }

    /// Whether a `?` or `!` applied to the call is removed on rewrite.
    ///
    /// The UIKit initialisers are failable; the typed replacements are not.
    #[must_use]
    pub const fn strips_null_safety_wrapper(&self) -> bool {
        matches!(self.generation, ApiGeneration::UiKit)
    }
}
