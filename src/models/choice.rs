//! Open choice enums
//!
//! The backend stores categories and statuses as short strings. Known values
//! map onto named variants; anything else is kept verbatim in
//! `Unrecognized` so grouping can still give it a bucket of its own.

/// Macro to generate a string-backed choice enum with an open fallback
macro_rules! define_choice {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal, $label:literal; )+
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize,
        )]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// A value this build does not know, kept as sent
            Unrecognized(String),
        }

        impl $name {
            /// All known values in declaration order
            pub fn known() -> Vec<Self> {
                vec![$(Self::$variant),+]
            }

            /// The wire value
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $wire,)+
                    Self::Unrecognized(raw) => raw.as_str(),
                }
            }

            /// Human-readable label
            pub fn label(&self) -> &str {
                match self {
                    $(Self::$variant => $label,)+
                    Self::Unrecognized(raw) => raw.as_str(),
                }
            }

            pub fn is_recognized(&self) -> bool {
                !matches!(self, Self::Unrecognized(_))
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                let s = s.trim();
                match s.to_ascii_lowercase().as_str() {
                    $($wire => Self::$variant,)+
                    _ => Self::Unrecognized(s.to_string()),
                }
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self::from(s.as_str())
            }
        }

        impl From<$name> for String {
            fn from(choice: $name) -> String {
                match choice {
                    $name::Unrecognized(raw) => raw,
                    other => other.as_str().to_string(),
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

pub(crate) use define_choice;

#[cfg(test)]
mod tests {
    define_choice! {
        /// Test fixture
        Colour {
            Red => "red", "Red";
            DarkBlue => "dark_blue", "Dark Blue";
        }
    }

    #[test]
    fn test_known_values_round_trip() {
        assert_eq!(Colour::from("red"), Colour::Red);
        assert_eq!(Colour::from(" Dark_Blue "), Colour::DarkBlue);
        assert_eq!(Colour::DarkBlue.as_str(), "dark_blue");
        assert_eq!(Colour::DarkBlue.label(), "Dark Blue");
        assert_eq!(Colour::known(), vec![Colour::Red, Colour::DarkBlue]);
    }

    #[test]
    fn test_unknown_values_are_preserved() {
        let c = Colour::from("Teal");
        assert_eq!(c, Colour::Unrecognized("Teal".into()));
        assert_eq!(c.as_str(), "Teal");
        assert!(!c.is_recognized());
        assert_eq!(String::from(c), "Teal");
    }

    #[test]
    fn test_serde_uses_wire_strings() {
        let json = serde_json::to_string(&Colour::DarkBlue).unwrap();
        assert_eq!(json, "\"dark_blue\"");

        let parsed: Colour = serde_json::from_str("\"mauve\"").unwrap();
        assert_eq!(parsed, Colour::Unrecognized("mauve".into()));
    }
}
