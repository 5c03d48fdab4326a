//! Config field paths used to address diagnostics.

use owo_colors::OwoColorize;
use std::borrow::Cow;
use std::fmt;

/// A config field path such as `theme.nav[2].link`.
///
/// Static paths come from the `FIELDS` constants generated by
/// [`config_fields!`]; paths into lists and sidebar sections are built
/// at runtime with [`FieldPath::at`] and [`FieldPath::key`].
///
/// # Example
///
/// ```ignore
/// config_fields!(SiteConfig => SiteConfigFields { base, dest });
///
/// diag.error(SiteConfig::FIELDS.base, "must start with `/`");
/// diag.error(ThemeConfig::FIELDS.nav.at(2).join("link"), "link is empty");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath(Cow<'static, str>);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(Cow::Borrowed(path))
    }

    #[inline]
    pub fn owned(path: impl Into<String>) -> Self {
        Self(Cow::Owned(path.into()))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Child field, e.g. `theme.nav[0]` + `link` -> `theme.nav[0].link`.
    pub fn join(&self, child: &str) -> Self {
        if self.0.is_empty() {
            Self::owned(child)
        } else {
            Self::owned(format!("{}.{child}", self.0))
        }
    }

    /// List element, e.g. `theme.nav` -> `theme.nav[3]`.
    pub fn at(&self, index: usize) -> Self {
        Self::owned(format!("{}[{index}]", self.0))
    }

    /// Quoted map key, e.g. `theme.sidebar` -> `theme.sidebar."/CSS/"`.
    pub fn key(&self, key: &str) -> Self {
        Self::owned(format!("{}.\"{key}\"", self.0))
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

/// Generate a `FIELDS` constant holding one [`FieldPath`] per listed field.
///
/// The optional section literal is prepended with a dot.
macro_rules! config_fields {
    ($ty:ident => $fields:ident { $($field:ident),* $(,)? }) => {
        /// Generated field path accessors.
        pub struct $fields {
            $(pub $field: $crate::config::FieldPath,)*
        }

        impl $ty {
            /// Field paths for diagnostic messages.
            pub const FIELDS: $fields = $fields {
                $($field: $crate::config::FieldPath::new(stringify!($field)),)*
            };
        }
    };
    ($ty:ident => $fields:ident, $section:literal { $($field:ident),* $(,)? }) => {
        /// Generated field path accessors.
        pub struct $fields {
            $(pub $field: $crate::config::FieldPath,)*
        }

        impl $ty {
            /// Field paths for diagnostic messages.
            pub const FIELDS: $fields = $fields {
                $($field: $crate::config::FieldPath::new(
                    concat!($section, ".", stringify!($field))
                ),)*
            };
        }
    };
}

pub(crate) use config_fields;
