//! Request and response shapes, one module per API version.
//!
//! The same name often appears in several versions with a different shape
//! (`Operation`, `CheckNameAvailabilityResult`, ...). Each version's types
//! live in their own module and are tagged with their version through
//! [`Model`], so a [`crate::Serializer`] bound to one version refuses the
//! types of another.

use std::fmt;

use serde::{Serialize, de::DeserializeOwned};

/// Implements [`Model`] for each listed type and exports the version's
/// [`ModelSet`] as `MODELS`.
macro_rules! model_set {
    (@name $ty:ident) => { stringify!($ty) };
    (@name $ty:ident $wire:literal) => { $wire };
    ($version:literal; $($ty:ident $(=> $wire:literal)?),* $(,)?) => {
        $(
            impl $crate::models::Model for $ty {
                const NAME: &'static str = model_set!(@name $ty $($wire)?);
                const API_VERSION: &'static str = $version;
            }
        )*

        /// Every top-level model defined for this API version.
        pub static MODELS: $crate::models::ModelSet = $crate::models::ModelSet::new(
            $version,
            &[$(model_set!(@name $ty $($wire)?)),*],
        );
    };
}

pub mod v2015_08_01;
pub mod v2017_04_01;
pub mod v2018_01_01_preview;

/// A data-transfer type belonging to exactly one API version.
pub trait Model: Serialize + DeserializeOwned {
    /// The model's name, unique within its API version.
    const NAME: &'static str;
    /// The API version that defines this shape.
    const API_VERSION: &'static str;
}

/// The collection of models defined by one API version.
pub struct ModelSet {
    api_version: &'static str,
    names: &'static [&'static str],
}

impl ModelSet {
    /// Declare the model set of an API version.
    pub const fn new(api_version: &'static str, names: &'static [&'static str]) -> Self {
        Self { api_version, names }
    }

    /// The API version these models belong to.
    pub fn api_version(&self) -> &'static str {
        self.api_version
    }

    /// The names of all models in the set.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + use<> {
        self.names.iter().copied()
    }

    /// The number of models in the set.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Whether a model with the given name is part of this set.
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| *n == name)
    }

    /// Whether `M` is one of this version's models. A same-named type from
    /// another API version does not count.
    pub fn contains_model<M: Model>(&self) -> bool {
        M::API_VERSION == self.api_version && self.contains(M::NAME)
    }

    /// Look up one of the built-in model sets by API version.
    pub fn for_version(api_version: &str) -> Option<&'static ModelSet> {
        builtin()
            .into_iter()
            .find(|set| set.api_version == api_version)
    }
}

impl PartialEq for ModelSet {
    fn eq(&self, other: &Self) -> bool {
        self.api_version == other.api_version && self.names == other.names
    }
}

impl Eq for ModelSet {}

impl fmt::Debug for ModelSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelSet")
            .field("api_version", &self.api_version)
            .field("models", &self.names.len())
            .finish()
    }
}

/// The model sets of every API version shipped with this crate.
pub fn builtin() -> [&'static ModelSet; 3] {
    [
        &v2015_08_01::MODELS,
        &v2017_04_01::MODELS,
        &v2018_01_01_preview::MODELS,
    ]
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn same_name_different_version() {
        assert!(v2015_08_01::MODELS.contains("Operation"));
        assert!(v2017_04_01::MODELS.contains("Operation"));

        assert!(v2015_08_01::MODELS.contains_model::<v2015_08_01::Operation>());
        assert!(!v2017_04_01::MODELS.contains_model::<v2015_08_01::Operation>());
    }

    #[test]
    fn wire_names() {
        assert!(v2017_04_01::MODELS.contains("EHNamespace"));
        assert!(!v2017_04_01::MODELS.contains("EhNamespace"));
        assert!(v2018_01_01_preview::MODELS.contains("EHNamespaceIdListResult"));
    }

    #[test]
    fn builtin_versions() {
        let versions: Vec<_> = builtin().iter().map(|m| m.api_version()).collect();
        assert_eq!(
            versions,
            vec!["2015-08-01", "2017-04-01", "2018-01-01-preview"]
        );

        for set in builtin() {
            assert!(!set.is_empty());
        }
    }

    #[test]
    fn for_version() {
        let set = ModelSet::for_version("2015-08-01").unwrap();
        assert!(set.contains("NamespaceResource"));
        assert_eq!(set, &v2015_08_01::MODELS);

        assert!(ModelSet::for_version("1999-01-01").is_none());
    }
}
