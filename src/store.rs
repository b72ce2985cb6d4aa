//! In-memory repositories: one id-indexed collection per entity kind, iterated in insertion order.

use crate::models::{Amenity, EntityKind, Place, Review, User};
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

/// A record that can be stored in a [`Repository`].
pub trait Entity: Clone + Send + Sync + 'static {
    const KIND: EntityKind;

    fn id(&self) -> Uuid;
}

macro_rules! impl_entity {
    ($($ty:ident => $kind:ident),+ $(,)?) => {
        $(
            impl Entity for $ty {
                const KIND: EntityKind = EntityKind::$kind;

                fn id(&self) -> Uuid {
                    self.id
                }
            }
        )+
    };
}

impl_entity! {
    User => User,
    Amenity => Amenity,
    Place => Place,
    Review => Review,
}

#[derive(Debug)]
pub struct Repository<T> {
    by_id: HashMap<Uuid, T>,
    order: Vec<Uuid>,
}

impl<T> Default for Repository<T> {
    fn default() -> Self {
        Self {
            by_id: HashMap::new(),
            order: Vec::new(),
        }
    }
}

impl<T: Entity> Repository<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new record, or replace the record with the same id in place.
    pub fn upsert(&mut self, entity: T) {
        let id = entity.id();
        if self.by_id.insert(id, entity).is_none() {
            self.order.push(id);
        }
    }

    pub fn get(&self, id: &Uuid) -> Option<&T> {
        self.by_id.get(id)
    }

    pub fn contains(&self, id: &Uuid) -> bool {
        self.by_id.contains_key(id)
    }

    pub fn remove(&mut self, id: &Uuid) -> Option<T> {
        let removed = self.by_id.remove(id)?;
        self.order.retain(|existing| existing != id);
        Some(removed)
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.order.iter().filter_map(|id| self.by_id.get(id))
    }

    pub fn list(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// A repository behind a reader/writer lock. Readers share; writers serialize per collection.
#[derive(Debug)]
pub struct Collection<T> {
    inner: RwLock<Repository<T>>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            inner: RwLock::new(Repository::default()),
        }
    }
}

impl<T: Entity> Collection<T> {
    // Writers replace whole records, so a poisoned lock never guards a half-written entry.
    pub fn read(&self) -> RwLockReadGuard<'_, Repository<T>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, Repository<T>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewAmenity;
    use chrono::Utc;

    fn amenity(name: &str) -> Amenity {
        Amenity::new(NewAmenity { name: name.into() }, Utc::now())
    }

    #[test]
    fn iterates_in_insertion_order() {
        let mut repo = Repository::new();
        let names = ["WI-FI", "Pool", "Parking"];
        for name in names {
            repo.upsert(amenity(name));
        }
        let listed: Vec<String> = repo.iter().map(|a| a.name.clone()).collect();
        assert_eq!(listed, names);
        assert_eq!(repo.len(), 3);
    }

    #[test]
    fn upsert_replaces_without_reordering() {
        let mut repo = Repository::new();
        let first = amenity("WI-FI");
        repo.upsert(first.clone());
        repo.upsert(amenity("Pool"));

        let mut renamed = first.clone();
        renamed.name = "Wiwi".into();
        repo.upsert(renamed);

        let listed: Vec<String> = repo.iter().map(|a| a.name.clone()).collect();
        assert_eq!(listed, ["Wiwi", "Pool"]);
    }

    #[test]
    fn remove_drops_record_and_order_slot() {
        let mut repo = Repository::new();
        let gone = amenity("Sauna");
        repo.upsert(gone.clone());
        repo.upsert(amenity("Pool"));

        assert_eq!(repo.remove(&gone.id), Some(gone.clone()));
        assert!(!repo.contains(&gone.id));
        assert_eq!(repo.len(), 1);
        assert_eq!(repo.remove(&gone.id), None);
    }

    #[test]
    fn entity_kind_matches_type() {
        assert_eq!(<User as Entity>::KIND, EntityKind::User);
        assert_eq!(<Amenity as Entity>::KIND, EntityKind::Amenity);
        assert_eq!(<Place as Entity>::KIND, EntityKind::Place);
        assert_eq!(<Review as Entity>::KIND, EntityKind::Review);
        let wifi = amenity("WI-FI");
        assert_eq!(Entity::id(&wifi), wifi.id);
    }

    #[test]
    fn collection_guards_share_the_repository() {
        let collection: Collection<Amenity> = Collection::default();
        let wifi = amenity("WI-FI");
        collection.write().upsert(wifi.clone());
        assert_eq!(collection.read().get(&wifi.id), Some(&wifi));
        assert!(!collection.read().is_empty());
    }
}
