//! Argument lists.
//!
//! Fetchers take explicit argument structs: a list of identifiers plus an
//! always-present options bag. [`extract_options`], [`UserArgs::from_args`]
//! and [`IdArgs::from_args`] accept the positional form, where a trailing options map may or may not be
//! present, and normalize it into those structs.

use crate::types::{Options, ParamValue, UserIdentifier};

/// One positional argument.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    User(UserIdentifier),
    /// Nested identifiers, flattened before use.
    List(Vec<Arg>),
    Options(Options),
}

macro_rules! user_arg_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Arg {
                fn from(value: $ty) -> Self {
                    Self::User(value.into())
                }
            }
        )*
    };
}

user_arg_from!(UserIdentifier, u64, &str, String, &crate::types::User);

impl From<Options> for Arg {
    fn from(options: Options) -> Self {
        Self::Options(options)
    }
}

/// Pop a trailing options map off `args`.
///
/// Returns an empty bag (and leaves `args` untouched) when the last element is
/// not an options map. Earlier elements are never inspected.
pub fn extract_options(args: &mut Vec<Arg>) -> Options {
    pop_trailing_options(args, |arg| match arg {
        Arg::Options(options) => Ok(options),
        other => Err(other),
    })
}

fn pop_trailing_options<A>(
    args: &mut Vec<A>,
    into_options: impl FnOnce(A) -> Result<Options, A>,
) -> Options {
    match args.pop().map(into_options) {
        Some(Ok(options)) => options,
        Some(Err(other)) => {
            args.push(other);
            Options::new()
        }
        None => Options::new(),
    }
}

/// Flatten nested lists into identifiers. Options maps left in the list are
/// dropped.
pub fn flatten_args(args: Vec<Arg>) -> Vec<UserIdentifier> {
    let mut out = Vec::with_capacity(args.len());
    flatten_into(args, &mut out);
    out
}

fn flatten_into(args: Vec<Arg>, out: &mut Vec<UserIdentifier>) {
    for arg in args {
        match arg {
            Arg::User(user) => out.push(user),
            Arg::List(nested) => flatten_into(nested, out),
            Arg::Options(_) => {}
        }
    }
}

/// Identifiers plus shared options for user-oriented fetches.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserArgs {
    pub users: Vec<UserIdentifier>,
    pub options: Options,
}

impl UserArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize a positional list: extract trailing options, then flatten.
    pub fn from_args(mut args: Vec<Arg>) -> Self {
        let options = extract_options(&mut args);
        Self {
            users: flatten_args(args),
            options,
        }
    }

    pub fn user(mut self, user: impl Into<UserIdentifier>) -> Self {
        self.users.push(user.into());
        self
    }

    pub fn users<I, U>(mut self, users: I) -> Self
    where
        I: IntoIterator<Item = U>,
        U: Into<UserIdentifier>,
    {
        self.users.extend(users.into_iter().map(Into::into));
        self
    }

    pub fn options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    pub fn option(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.options.insert(key, value);
        self
    }
}

impl From<Vec<Arg>> for UserArgs {
    fn from(args: Vec<Arg>) -> Self {
        Self::from_args(args)
    }
}

/// One positional argument to a generic parallel fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum IdArg {
    Id(ParamValue),
    /// Nested ids, flattened before use.
    List(Vec<IdArg>),
    Options(Options),
}

macro_rules! id_arg_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for IdArg {
                fn from(value: $ty) -> Self {
                    Self::Id(value.into())
                }
            }
        )*
    };
}

id_arg_from!(ParamValue, i64, i32, u64, &str, String);

impl From<Options> for IdArg {
    fn from(options: Options) -> Self {
        Self::Options(options)
    }
}

impl From<Vec<IdArg>> for IdArg {
    fn from(nested: Vec<IdArg>) -> Self {
        Self::List(nested)
    }
}

fn flatten_ids_into(args: Vec<IdArg>, out: &mut Vec<ParamValue>) {
    for arg in args {
        match arg {
            IdArg::Id(id) => out.push(id),
            IdArg::List(nested) => flatten_ids_into(nested, out),
            IdArg::Options(_) => {}
        }
    }
}

/// Object ids plus shared options for generic parallel fetches.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IdArgs {
    pub ids: Vec<ParamValue>,
    pub options: Options,
}

impl IdArgs {
    pub fn new<I, V>(ids: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<ParamValue>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
            options: Options::new(),
        }
    }

    /// Normalize a positional list the same way as [`UserArgs::from_args`].
    pub fn from_args(mut args: Vec<IdArg>) -> Self {
        let options = pop_trailing_options(&mut args, |arg| match arg {
            IdArg::Options(options) => Ok(options),
            other => Err(other),
        });
        let mut ids = Vec::with_capacity(args.len());
        flatten_ids_into(args, &mut ids);
        Self { ids, options }
    }

    pub fn options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    pub fn option(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.options.insert(key, value);
        self
    }
}

impl From<Vec<IdArg>> for IdArgs {
    fn from(args: Vec<IdArg>) -> Self {
        Self::from_args(args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_trailing_options() {
        let mut args: Vec<Arg> = vec![1u64.into(), 2u64.into(), Options::new().with("a", 1).into()];
        let options = extract_options(&mut args);
        assert_eq!(options, Options::new().with("a", 1));
        assert_eq!(args, vec![Arg::from(1u64), Arg::from(2u64)]);
    }

    #[test]
    fn no_trailing_options_leaves_list_untouched() {
        let mut args: Vec<Arg> = vec![1u64.into(), 2u64.into()];
        let options = extract_options(&mut args);
        assert!(options.is_empty());
        assert_eq!(args, vec![Arg::from(1u64), Arg::from(2u64)]);

        let mut empty: Vec<Arg> = Vec::new();
        assert!(extract_options(&mut empty).is_empty());
    }

    #[test]
    fn only_the_last_element_is_considered() {
        let mut args: Vec<Arg> = vec![Options::new().with("a", 1).into(), 1u64.into()];
        assert!(extract_options(&mut args).is_empty());
        assert_eq!(args.len(), 2);
    }

    #[test]
    fn from_args_flattens_nested_lists() {
        let args = vec![
            Arg::List(vec!["alice".into(), Arg::List(vec![5u64.into()])]),
            7u64.into(),
            Options::new().with("count", 3).into(),
        ];
        let parsed = UserArgs::from_args(args);
        assert_eq!(
            parsed.users,
            vec![
                UserIdentifier::ScreenName("alice".into()),
                UserIdentifier::Id(5),
                UserIdentifier::Id(7),
            ]
        );
        assert_eq!(parsed.options, Options::new().with("count", 3));
    }

    #[test]
    fn id_args_extract_trailing_options_and_flatten() {
        let args: Vec<IdArg> = vec![
            5u64.into(),
            vec![IdArg::from(1u64), IdArg::from("3")].into(),
            Options::new().with("trim_user", true).into(),
        ];
        let parsed = IdArgs::from_args(args);
        assert_eq!(
            parsed.ids,
            vec![ParamValue::Int(5), ParamValue::Int(1), ParamValue::Text("3".into())]
        );
        assert_eq!(parsed.options, Options::new().with("trim_user", true));

        let bare = IdArgs::from(vec![IdArg::from(9u64)]);
        assert_eq!(bare.ids, vec![ParamValue::Int(9)]);
        assert!(bare.options.is_empty());
    }
}
