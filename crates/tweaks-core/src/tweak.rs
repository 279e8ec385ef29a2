//! Typed tweak definitions and their identity.
//!
//! A [`Tweak`] is an immutable description of one adjustable value: where it
//! lives in the collection/group hierarchy, what its default is, and (for
//! numeric kinds) what bounds and step apply. Definitions are created once,
//! statically, as part of an application's tweak declarations, and handed to
//! the store at construction.
//!
//! # Definition errors
//!
//! An inconsistent definition (`min > max`, or a default outside the bounds)
//! is a programmer mistake, not a runtime condition. Builders panic
//! immediately so the bug shows up at declaration time.
//!
//! # Example
//!
//! ```rust
//! use tweaks_core::Tweak;
//!
//! let spacing: Tweak<f64> = Tweak::new("Layout", "List", "Row Spacing", 8.0)
//!     .with_min(0.0)
//!     .with_max(32.0)
//!     .with_step(0.5);
//!
//! let title: Tweak<String> = Tweak::new("Text", "Header", "Title", "Hello".to_string());
//! ```

use core::fmt;

use crate::handle::AnyTweak;
use crate::tweakable::TweakableValue;

/// The (collection, group, name) identity triple.
///
/// The triple is unique across a store and doubles as the persistence key in
/// its `collection.group.name` string form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TweakId {
    /// Top-level collection name (one editing screen in the UI).
    pub collection: String,
    /// Group name within the collection (one table section).
    pub group: String,
    /// Tweak name within the group.
    pub name: String,
}

impl TweakId {
    /// Create an identity triple.
    pub fn new(
        collection: impl Into<String>,
        group: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            collection: collection.into(),
            group: group.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for TweakId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.collection, self.group, self.name)
    }
}

/// An immutable, typed definition of one adjustable value.
///
/// `T` is one of the supported value types (see
/// [`TweakableValue`]). Bounds and step are only meaningful for
/// ordered numeric types; non-numeric tweaks simply never set them.
#[derive(Debug, Clone)]
pub struct Tweak<T: TweakableValue> {
    id: TweakId,
    default: T,
    min: Option<T>,
    max: Option<T>,
    step: Option<T>,
    options: Vec<String>,
}

impl<T: TweakableValue> Tweak<T> {
    /// Create a definition with a default value and no bounds.
    pub fn new(
        collection: impl Into<String>,
        group: impl Into<String>,
        name: impl Into<String>,
        default: T,
    ) -> Self {
        Self {
            id: TweakId::new(collection, group, name),
            default,
            min: None,
            max: None,
            step: None,
            options: Vec::new(),
        }
    }

    /// Identity triple.
    pub fn id(&self) -> &TweakId {
        &self.id
    }

    /// Declared default value.
    pub fn default(&self) -> &T {
        &self.default
    }

    /// Declared minimum, if any.
    pub fn min(&self) -> Option<&T> {
        self.min.as_ref()
    }

    /// Declared maximum, if any.
    pub fn max(&self) -> Option<&T> {
        self.max.as_ref()
    }

    /// Declared step increment, if any.
    pub fn step(&self) -> Option<&T> {
        self.step.as_ref()
    }

    /// Type-erase into an [`AnyTweak`] handle.
    pub fn any(&self) -> AnyTweak {
        AnyTweak::from_definition(self)
    }
}

impl<T: TweakableValue + PartialOrd> Tweak<T> {
    /// Set the minimum bound.
    ///
    /// # Panics
    ///
    /// Panics if the default is below `min`, or an existing maximum is below
    /// `min`. Both are definition bugs.
    pub fn with_min(mut self, min: T) -> Self {
        assert!(
            self.default >= min,
            "tweak {}: default {:?} below min {:?}",
            self.id,
            self.default,
            min
        );
        if let Some(max) = &self.max {
            assert!(
                *max >= min,
                "tweak {}: min {:?} above max {:?}",
                self.id,
                min,
                max
            );
        }
        self.min = Some(min);
        self
    }

    /// Set the maximum bound.
    ///
    /// # Panics
    ///
    /// Panics if the default is above `max`, or an existing minimum is above
    /// `max`.
    pub fn with_max(mut self, max: T) -> Self {
        assert!(
            self.default <= max,
            "tweak {}: default {:?} above max {:?}",
            self.id,
            self.default,
            max
        );
        if let Some(min) = &self.min {
            assert!(
                *min <= max,
                "tweak {}: min {:?} above max {:?}",
                self.id,
                min,
                max
            );
        }
        self.max = Some(max);
        self
    }

    /// Set the step increment used by stepper-style editors.
    pub fn with_step(mut self, step: T) -> Self {
        self.step = Some(step);
        self
    }
}

impl Tweak<String> {
    /// Restrict a string tweak to an enumerated set of options.
    ///
    /// # Panics
    ///
    /// Panics if the default is not one of the options.
    pub fn with_options(mut self, options: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let options: Vec<String> = options.into_iter().map(Into::into).collect();
        assert!(
            options.iter().any(|o| *o == self.default),
            "tweak {}: default {:?} not in options {:?}",
            self.id,
            self.default,
            options
        );
        self.options = options;
        self
    }

    /// The enumerated options, empty for free-form strings.
    pub fn options(&self) -> &[String] {
        &self.options
    }
}

impl<T: TweakableValue> Tweak<T> {
    pub(crate) fn options_vec(&self) -> Vec<String> {
        self.options.clone()
    }
}
