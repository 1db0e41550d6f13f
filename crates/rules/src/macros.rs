//! Macros for declaring rules with minimal boilerplate.
//!
//! # Examples
//!
//! ```rust,ignore
//! use valid_rules::rule;
//! use valid_rules::foundation::ValidationError;
//!
//! rule! {
//!     /// Accepts strings that start with a fixed prefix.
//!     pub HasPrefix { prefix: String } for str;
//!     rule(self, input) { input.starts_with(&self.prefix) }
//!     error(self, input) { ValidationError::new("prefix", "missing prefix") }
//!     new(prefix: impl Into<String>) { Self { prefix: prefix.into() } }
//!     fn has_prefix(prefix: impl Into<String>);
//! }
//! ```

// ============================================================================
// RULE MACRO
// ============================================================================

/// Declares a rule: struct definition, constructor, `Validate`
/// implementation and an optional factory function.
///
/// `#[derive(Debug, Clone)]` is always applied; add more with `#[derive(...)]`.
/// Fields are private and fixed at construction.
#[macro_export]
macro_rules! rule {
    // ── Struct with fields + custom new + factory fn ─────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::rule! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ } for $input;
            rule($self_, $inp) $rule
            error($self2, $einp) $err
            new($($narg: $naty),*) $new_body
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Struct with fields + custom new, no factory ──────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $($field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($narg: $naty),*) -> Self $new_body
        }

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&$self_, $inp: &Self::Input) -> Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }
    };
}
