//! Grouping tree for UI enumeration.
//!
//! The store derives a collection → group → tweak tree once at construction.
//! The tree exists purely so editing UIs can enumerate tweaks in a stable
//! order; it never participates in value resolution.

use tweaks_core::AnyTweak;

/// One named group of tweaks inside a collection.
#[derive(Debug, Clone)]
pub struct Group {
    name: String,
    tweaks: Vec<AnyTweak>,
}

impl Group {
    /// Group name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Tweaks in the group, sorted by name.
    pub fn tweaks(&self) -> &[AnyTweak] {
        &self.tweaks
    }
}

/// One top-level collection (an editing screen in the UI).
#[derive(Debug, Clone)]
pub struct Collection {
    name: String,
    groups: Vec<Group>,
}

impl Collection {
    /// Collection name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Groups in the collection, sorted by name.
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Total number of tweaks across all groups.
    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.tweaks.len()).sum()
    }

    /// True if the collection has no tweaks.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The full collection → group → tweak hierarchy of a store.
#[derive(Debug, Clone, Default)]
pub struct TweakTree {
    collections: Vec<Collection>,
}

impl TweakTree {
    /// Build the tree from a set of registered tweaks.
    ///
    /// Collections, groups, and tweaks are each sorted by name so
    /// enumeration order is stable across launches regardless of
    /// registration order.
    pub fn build(tweaks: &[AnyTweak]) -> Self {
        let mut sorted: Vec<&AnyTweak> = tweaks.iter().collect();
        sorted.sort_by(|a, b| a.id().cmp(b.id()));

        let mut collections: Vec<Collection> = Vec::new();
        for tweak in sorted {
            let id = tweak.id();
            if collections.last().is_none_or(|c| c.name != id.collection) {
                collections.push(Collection {
                    name: id.collection.clone(),
                    groups: Vec::new(),
                });
            }
            let collection = collections.last_mut().expect("just pushed");
            if collection.groups.last().is_none_or(|g| g.name != id.group) {
                collection.groups.push(Group {
                    name: id.group.clone(),
                    tweaks: Vec::new(),
                });
            }
            collection
                .groups
                .last_mut()
                .expect("just pushed")
                .tweaks
                .push(tweak.clone());
        }

        Self { collections }
    }

    /// Collections, sorted by name.
    pub fn collections(&self) -> &[Collection] {
        &self.collections
    }

    /// Iterate every tweak in collection/group/name order.
    pub fn iter(&self) -> impl Iterator<Item = &AnyTweak> {
        self.collections
            .iter()
            .flat_map(|c| c.groups.iter())
            .flat_map(|g| g.tweaks.iter())
    }

    /// Total number of tweaks in the tree.
    pub fn len(&self) -> usize {
        self.collections.iter().map(Collection::len).sum()
    }

    /// True if the tree has no tweaks.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
