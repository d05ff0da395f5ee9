/// Declares a closed set of string-valued variants.
///
/// Each variant carries a machine slug (used by serde and URL/CLI input) and
/// a display label. Parsing accepts either, case-insensitively.
macro_rules! labeled_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident ($kind:literal) {
            $( $(#[$vmeta:meta])* $variant:ident => ($slug:literal, $label:literal) ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $( $(#[$vmeta])* #[serde(rename = $slug)] $variant ),+
        }

        impl $name {
            /// All variants in display order.
            pub const fn all() -> &'static [$name] {
                &[$( $name::$variant ),+]
            }

            pub const fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $slug ),+
                }
            }

            pub const fn label(self) -> &'static str {
                match self {
                    $( $name::$variant => $label ),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let needle = s.trim();
                $name::all()
                    .iter()
                    .copied()
                    .find(|v| {
                        v.as_str().eq_ignore_ascii_case(needle)
                            || v.label().eq_ignore_ascii_case(needle)
                    })
                    .ok_or_else(|| $crate::ModelError::unknown($kind, s))
            }
        }
    };
}

pub(crate) use labeled_enum;
