//! Teleshell for AWS.
//!
//! Every command in these modules uses [`SdkConfig`] as its provider and
//! creates its service client per call.
pub use aws_config::SdkConfig;
pub mod cloudsearch;
pub mod dynamodb;
pub mod ssm_contacts;

/// Reads an SDK member the same way whether the service model marks it as
/// required or optional.
///
/// The SDK returns required members directly (`&str`, `bool`, `&T`) and
/// optional ones wrapped in `Option`. Response records flatten both into
/// `Option`.
pub(crate) trait Member {
    type Value;

    fn member(self) -> Option<Self::Value>;
}

impl<'a, T: ?Sized> Member for &'a T {
    type Value = &'a T;

    fn member(self) -> Option<&'a T> {
        Some(self)
    }
}

impl<'a, T: ?Sized> Member for Option<&'a T> {
    type Value = &'a T;

    fn member(self) -> Option<&'a T> {
        self
    }
}

macro_rules! copy_members {
    ($($ty:ty),*) => {
        $(
            impl Member for $ty {
                type Value = $ty;

                fn member(self) -> Option<$ty> {
                    Some(self)
                }
            }

            impl Member for Option<$ty> {
                type Value = $ty;

                fn member(self) -> Option<$ty> {
                    self
                }
            }
        )*
    };
}

copy_members!(bool, i32, i64, f64);

/// An owned copy of a string member.
pub(crate) fn text<'a>(member: impl Member<Value = &'a str>) -> Option<String> {
    member.member().map(str::to_owned)
}

/// The display form of a member, used for enums and timestamps.
pub(crate) fn display<'a, T>(member: impl Member<Value = &'a T>) -> Option<String>
where
    T: core::fmt::Display + ?Sized + 'a,
{
    member.member().map(|value| value.to_string())
}

/// A list member, where an empty list reads as absent.
pub(crate) fn list<T, U>(items: &[T], f: impl FnMut(&T) -> U) -> Option<Vec<U>> {
    if items.is_empty() {
        None
    } else {
        Some(items.iter().map(f).collect())
    }
}

/// Convert a list of SDK values into owned records.
pub(crate) fn records<'a, T: 'a, U: From<&'a T>>(items: &'a [T]) -> Vec<U> {
    items.iter().map(U::from).collect()
}

/// Bind a command's parameters from command line arguments.
#[cfg(test)]
pub(crate) fn bind<A: clap::Args>(args: &[&str]) -> Result<A, clap::Error> {
    let command = A::augment_args(clap::Command::new("tsh").no_binary_name(true));
    let matches = command.try_get_matches_from(args.iter().copied())?;
    <A as clap::FromArgMatches>::from_arg_matches(&matches)
}
