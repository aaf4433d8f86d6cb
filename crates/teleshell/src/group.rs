//! Nested option groups.
//!
//! Many AWS request shapes carry optional sub-structures, for example the
//! per-type option blocks of a CloudSearch index field. Commands bind each
//! member of such a block as its own flat parameter, so when the request is
//! built the block is assembled speculatively and kept only if the caller
//! actually bound at least one of its members. Sending an empty-but-present
//! block could be read by the service as an explicit reset to defaults.
//!
//! ```
//! use tsh::group::{group, OptionGroup};
//!
//! #[derive(Debug, Default, PartialEq, OptionGroup)]
//! struct DateOptions {
//!     default_value: Option<String>,
//!     sort_enabled: Option<bool>,
//! }
//!
//! assert_eq!(None, group(DateOptions::default()));
//! assert_eq!(
//!     Some(DateOptions {
//!         default_value: None,
//!         sort_enabled: Some(false),
//!     }),
//!     group(DateOptions {
//!         default_value: None,
//!         sort_enabled: Some(false),
//!     })
//! );
//! ```

pub use teleshell_derive::OptionGroup;

/// Whether a single request member was bound.
pub trait Presence {
    fn is_present(&self) -> bool;
}

impl<T> Presence for Option<T> {
    fn is_present(&self) -> bool {
        self.is_some()
    }
}

/// A cohesive set of optional request members.
///
/// This trait is usually derived. The derived implementation reports the
/// group as present iff any of its fields is present. Fields may be excluded
/// from the check with `#[group(ignore)]`.
pub trait OptionGroup {
    fn is_present(&self) -> bool;
}

/// Keep the candidate group only if at least one of its members is present.
pub fn group<G: OptionGroup>(candidate: G) -> Option<G> {
    if candidate.is_present() {
        Some(candidate)
    } else {
        None
    }
}

/// Serialize a group as `null` unless at least one of its members is present.
///
/// Used on command contexts, so an unbound group reads like any other unbound
/// parameter.
pub fn serialize_group<G, S>(candidate: &G, serializer: S) -> Result<S::Ok, S::Error>
where
    G: OptionGroup + serde::Serialize,
    S: serde::Serializer,
{
    if candidate.is_present() {
        candidate.serialize(serializer)
    } else {
        serializer.serialize_none()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[derive(Debug, Default, Clone, PartialEq, serde::Serialize, OptionGroup)]
    #[serde(rename_all = "PascalCase")]
    struct Inner {
        #[serde(skip_serializing_if = "Option::is_none")]
        limit: Option<i32>,
    }

    #[derive(Debug, Default, Clone, PartialEq, serde::Serialize, OptionGroup)]
    #[serde(rename_all = "PascalCase")]
    struct Outer {
        #[serde(skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        inner: Option<Inner>,
        #[group(ignore)]
        #[serde(skip)]
        label: Option<&'static str>,
    }

    #[test]
    fn absent_group_collapses_to_none() {
        assert_eq!(None, group(Outer::default()));
    }

    #[test]
    fn falsy_values_still_count_as_present() {
        let inner = group(Inner { limit: Some(0) });
        assert_eq!(Some(Inner { limit: Some(0) }), inner);
    }

    #[test]
    fn nested_groups_collapse_bottom_up() {
        let outer = group(Outer {
            name: None,
            inner: group(Inner { limit: None }),
            label: None,
        });
        assert_eq!(None, outer);

        let outer = group(Outer {
            name: None,
            inner: group(Inner { limit: Some(3) }),
            label: None,
        })
        .unwrap();
        pretty_assertions::assert_eq!(
            serde_json::json!({ "Inner": { "Limit": 3 } }),
            serde_json::to_value(&outer).unwrap()
        );
    }

    #[test]
    fn ignored_fields_do_not_make_a_group_present() {
        let outer = Outer {
            label: Some("just a label"),
            ..Default::default()
        };
        assert!(!outer.is_present());
        assert_eq!(None, group(outer));
    }
}
