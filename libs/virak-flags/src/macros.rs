// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! The `options!` declaration macro

/// Declare an options struct together with its flag bindings.
///
/// Each field is `name: kind = ("flag-name", default, "usage")` where kind is
/// one of `string`, `bool`, `int` or `strings`. Adding `: zone` after the
/// struct name marks the command as zone scoped.
///
/// ```ignore
/// options! {
///     /// Options for `bucket create`
///     pub struct CreateOptions: zone {
///         name: string = ("name", "", "Bucket name"),
///         policy: string = ("policy", "Private", "Access policy (Private or Public)"),
///     }
/// }
/// ```
#[macro_export]
macro_rules! options {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident $(: $zone:ident)? {
            $(
                $(#[doc = $doc:literal])*
                $field:ident : $kind:ident = ($flag:literal, $default:expr, $usage:literal)
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        $vis struct $name {
            $(
                $(#[doc = $doc])*
                pub $field: $crate::__flag_type!($kind),
            )*
        }

        impl ::std::default::Default for $name {
            fn default() -> Self {
                Self {
                    $( $field: $crate::__flag_default!($kind, $default), )*
                }
            }
        }

        impl $crate::Options for $name {
            const ZONE_SCOPED: bool = $crate::__zone_scoped!($($zone)?);

            fn fields() -> ::std::vec::Vec<$crate::Field<Self>> {
                ::std::vec![
                    $( $crate::__flag_field!($name, $field, $kind, $flag, $default, $usage), )*
                ]
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __flag_type {
    (string) => { ::std::string::String };
    (bool) => { bool };
    (int) => { i64 };
    (strings) => { ::std::vec::Vec<::std::string::String> };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __flag_default {
    (string, $default:expr) => {
        ::std::string::String::from($default)
    };
    (bool, $default:expr) => {
        $default
    };
    (int, $default:expr) => {
        $default
    };
    (strings, $default:expr) => {{
        let items: &[&str] = &$default;
        items.iter().map(|s| (*s).to_string()).collect()
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __flag_field {
    ($ty:ident, $field:ident, string, $flag:literal, $default:expr, $usage:literal) => {
        $crate::Field::new(
            $flag,
            $usage,
            $crate::Binding::Str {
                default: $default,
                set: |o: &mut $ty, v| o.$field = v,
            },
        )
    };
    ($ty:ident, $field:ident, bool, $flag:literal, $default:expr, $usage:literal) => {
        $crate::Field::new(
            $flag,
            $usage,
            $crate::Binding::Bool {
                default: $default,
                set: |o: &mut $ty, v| o.$field = v,
            },
        )
    };
    ($ty:ident, $field:ident, int, $flag:literal, $default:expr, $usage:literal) => {
        $crate::Field::new(
            $flag,
            $usage,
            $crate::Binding::Int {
                default: $default,
                set: |o: &mut $ty, v| o.$field = v,
            },
        )
    };
    ($ty:ident, $field:ident, strings, $flag:literal, $default:expr, $usage:literal) => {
        $crate::Field::new(
            $flag,
            $usage,
            $crate::Binding::StrList {
                default: &$default,
                set: |o: &mut $ty, v| o.$field = v,
            },
        )
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __zone_scoped {
    () => {
        false
    };
    (zone) => {
        true
    };
}
