//! Macros for declaring action sets and model fields.

/// Declare an action set and its reductions in one place.
///
/// Each entry names an action, lists its typed positional arguments and
/// gives the reduction as `|state| expr`, where `state` is a reference to
/// the previous state. The macro generates an enum with one tuple variant per
/// action (so `Enum::name` doubles as the action's constructor) and an
/// [`Action`](crate::Action) implementation.
///
/// Argument types must implement `serde::Deserialize`, `Clone`, `Debug` and
/// `PartialEq` so the action can also be rebuilt from an encoded event.
///
/// # Example
///
/// ```
/// use statehub::{reductions, Action};
///
/// #[derive(Clone, Debug, PartialEq)]
/// pub struct Agent {
///     name: String,
///     counter: i32,
/// }
///
/// reductions! {
///     pub enum AgentAction for Agent {
///         add(n: i32) => |state| Agent { counter: state.counter + n, ..state.clone() },
///         rename(name: String, penalty: i32) => |state| Agent {
///             name,
///             counter: state.counter - penalty,
///         },
///     }
/// }
///
/// let agent = Agent { name: "anonymous".into(), counter: 0 };
/// let renamed = AgentAction::rename("Bond, James".into(), 1).apply(&agent);
/// assert_eq!(renamed, Agent { name: "Bond, James".into(), counter: -1 });
/// ```
#[macro_export]
macro_rules! reductions {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident for $state:ty {
            $(
                $(#[$action_meta:meta])*
                $action:ident ( $($arg:ident : $arg_ty:ty),* $(,)? ) => |$st:ident| $body:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[allow(non_camel_case_types)]
        #[derive(Clone, Debug, PartialEq)]
        $vis enum $name {
            $(
                $(#[$action_meta])*
                $action($($arg_ty),*)
            ),+
        }

        impl $crate::Action for $name {
            type State = $state;

            fn name(&self) -> &'static str {
                match self {
                    $(Self::$action(..) => stringify!($action)),+
                }
            }

            fn names() -> &'static [&'static str] {
                &[$(stringify!($action)),+]
            }

            #[allow(unused_variables)]
            fn apply(self, state: &$state) -> $state {
                match self {
                    $(
                        Self::$action($($arg),*) => {
                            let $st = state;
                            $body
                        }
                    ),+
                }
            }

            fn decode(
                name: &str,
                args: $crate::__private::Value,
            ) -> ::core::result::Result<::core::option::Option<Self>, $crate::__private::JsonError> {
                $(
                    if name == stringify!($action) {
                        let ($($arg,)*): ($($arg_ty,)*) = $crate::__private::decode_args(args)?;
                        return ::core::result::Result::Ok(::core::option::Option::Some(
                            Self::$action($($arg),*),
                        ));
                    }
                )+
                ::core::result::Result::Ok(::core::option::Option::None)
            }
        }
    };
}

/// Declare the replaceable fields of a named-field struct.
///
/// Generates an enum with one variant per listed field, carrying a new value
/// of that field's type, and an [`Action`](crate::Action) implementation that
/// returns a copy of the state with exactly that field replaced. Fields left
/// out of the list cannot be addressed: excluding a key is done by not
/// listing it.
///
/// # Example
///
/// ```
/// use statehub::{model, Action};
///
/// #[derive(Clone, Debug, PartialEq)]
/// pub struct Agent {
///     id: u64,
///     name: String,
///     counter: i32,
/// }
///
/// model! {
///     pub enum AgentField for Agent {
///         name: String,
///         counter: i32,
///     }
/// }
///
/// let agent = Agent { id: 7, name: "x".into(), counter: 0 };
/// let next = AgentField::counter(5).apply(&agent);
/// assert_eq!(next, Agent { id: 7, name: "x".into(), counter: 5 });
/// assert_eq!(AgentField::names(), &["name", "counter"]);
/// ```
#[macro_export]
macro_rules! model {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident for $state:ident {
            $(
                $(#[$field_meta:meta])*
                $field:ident : $ty:ty
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[allow(non_camel_case_types)]
        #[derive(Clone, Debug, PartialEq)]
        $vis enum $name {
            $(
                $(#[$field_meta])*
                $field($ty)
            ),+
        }

        impl $crate::Action for $name {
            type State = $state;

            fn name(&self) -> &'static str {
                match self {
                    $(Self::$field(..) => stringify!($field)),+
                }
            }

            fn names() -> &'static [&'static str] {
                &[$(stringify!($field)),+]
            }

            #[allow(clippy::needless_update)]
            fn apply(self, state: &$state) -> $state {
                match self {
                    $(
                        Self::$field(value) => $state {
                            $field: value,
                            ..::core::clone::Clone::clone(state)
                        }
                    ),+
                }
            }

            fn decode(
                name: &str,
                args: $crate::__private::Value,
            ) -> ::core::result::Result<::core::option::Option<Self>, $crate::__private::JsonError> {
                $(
                    if name == stringify!($field) {
                        let (value,): ($ty,) = $crate::__private::decode_args(args)?;
                        return ::core::result::Result::Ok(::core::option::Option::Some(
                            Self::$field(value),
                        ));
                    }
                )+
                ::core::result::Result::Ok(::core::option::Option::None)
            }
        }
    };
}
