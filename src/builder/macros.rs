//! Macros for declaring register-encoded states.

/// Declare a state enum whose variants carry their register encoding.
///
/// Generates the enum with value-type derives, the [`State`] trait
/// implementation, `Display`, an `ALL` table and a `from_code` lookup.
///
/// [`State`]: crate::core::State
///
/// # Example
///
/// ```
/// use doorstep::core::State;
/// use doorstep::state_enum;
///
/// state_enum! {
///     pub enum Light {
///         Off = 0b0,
///         On = 0b1,
///     }
/// }
///
/// assert_eq!(Light::On.code(), 1);
/// assert_eq!(Light::from_code(0), Some(Light::Off));
/// assert_eq!(Light::On.to_string(), "On");
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $code:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        #[repr(u8)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant = $code
            ),*
        }

        impl $name {
            /// Every state in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),*];

            /// Look a state up by its register encoding.
            pub fn from_code(code: u8) -> Option<Self> {
                match code {
                    $(c if c == Self::$variant as u8 => Some(Self::$variant),)*
                    _ => None,
                }
            }
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn code(&self) -> u8 {
                *self as u8
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::core::State::name(self))
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::State;

    state_enum! {
        enum Phase {
            Idle = 0,
            Busy = 1,
            Done = 3,
        }
    }

    #[test]
    fn state_enum_macro_generates_trait() {
        assert_eq!(Phase::Idle.name(), "Idle");
        assert_eq!(Phase::Done.name(), "Done");
        assert_eq!(Phase::Busy.code(), 1);
        assert_eq!(Phase::Done.code(), 3);
    }

    #[test]
    fn from_code_only_accepts_declared_encodings() {
        assert_eq!(Phase::from_code(0), Some(Phase::Idle));
        assert_eq!(Phase::from_code(3), Some(Phase::Done));
        assert_eq!(Phase::from_code(2), None);
    }

    #[test]
    fn all_lists_variants_in_declaration_order() {
        assert_eq!(Phase::ALL, &[Phase::Idle, Phase::Busy, Phase::Done]);
    }

    #[test]
    fn state_enum_supports_visibility() {
        state_enum! {
            pub enum PublicState {
                A = 0,
                B = 1,
            }
        }

        assert_eq!(PublicState::B.to_string(), "B");
    }
}
