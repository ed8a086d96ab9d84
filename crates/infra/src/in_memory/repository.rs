use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, warn};

use catalog_core::{DomainError, DomainResult, Entity, Repository, ValueObject};

/// In-memory CRUD repository.
///
/// Items live in one `RwLock<Vec<E>>`: every operation takes the lock exactly
/// once, so each call sees (or produces) a single consistent snapshot.
/// Intended for tests/dev. Not optimized for performance.
#[derive(Debug)]
pub struct InMemoryRepository<E> {
    items: RwLock<Vec<E>>,
}

impl<E> InMemoryRepository<E> {
    pub fn new() -> Self {
        Self::with_items(Vec::new())
    }

    /// Seed the repository with `items` (kept in the given order).
    pub fn with_items(items: Vec<E>) -> Self {
        Self {
            items: RwLock::new(items),
        }
    }

    pub fn len(&self) -> DomainResult<usize> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> DomainResult<bool> {
        Ok(self.read()?.is_empty())
    }

    pub(crate) fn read(&self) -> DomainResult<RwLockReadGuard<'_, Vec<E>>> {
        self.items
            .read()
            .map_err(|_| DomainError::invariant("repository lock poisoned"))
    }

    fn write(&self) -> DomainResult<RwLockWriteGuard<'_, Vec<E>>> {
        self.items
            .write()
            .map_err(|_| DomainError::invariant("repository lock poisoned"))
    }
}

impl<E> Default for InMemoryRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

fn position_of<E: Entity>(items: &[E], id: &E::Id) -> Option<usize> {
    items.iter().position(|item| item.entity_id().equals(Some(id)))
}

impl<E> Repository<E> for InMemoryRepository<E>
where
    E: Entity + Clone + Send + Sync,
{
    fn insert(&self, entity: E) -> DomainResult<()> {
        let mut items = self.write()?;
        debug!(entity_type = E::ENTITY_TYPE, id = %entity.entity_id(), "insert");
        items.push(entity);
        Ok(())
    }

    fn bulk_insert(&self, entities: Vec<E>) -> DomainResult<()> {
        let mut items = self.write()?;
        debug!(entity_type = E::ENTITY_TYPE, count = entities.len(), "bulk insert");
        items.extend(entities);
        Ok(())
    }

    fn update(&self, entity: E) -> DomainResult<()> {
        let mut items = self.write()?;
        let Some(idx) = position_of(items.as_slice(), entity.entity_id()) else {
            warn!(entity_type = E::ENTITY_TYPE, id = %entity.entity_id(), "update of unknown entity");
            return Err(DomainError::not_found(entity.entity_id(), E::ENTITY_TYPE));
        };
        debug!(entity_type = E::ENTITY_TYPE, id = %entity.entity_id(), "update");
        items[idx] = entity;
        Ok(())
    }

    fn delete(&self, id: &E::Id) -> DomainResult<()> {
        let mut items = self.write()?;
        let Some(idx) = position_of(items.as_slice(), id) else {
            warn!(entity_type = E::ENTITY_TYPE, id = %id, "delete of unknown entity");
            return Err(DomainError::not_found(id, E::ENTITY_TYPE));
        };
        debug!(entity_type = E::ENTITY_TYPE, id = %id, "delete");
        items.remove(idx);
        Ok(())
    }

    fn find_by_id(&self, id: &E::Id) -> DomainResult<Option<E>> {
        let items = self.read()?;
        Ok(position_of(items.as_slice(), id).map(|idx| items[idx].clone()))
    }

    fn find_all(&self) -> DomainResult<Vec<E>> {
        Ok(self.read()?.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::EntityId;
    use serde_json::{Value as JsonValue, json};

    #[derive(Debug, Clone, PartialEq)]
    struct DummyEntity {
        entity_id: EntityId,
        name: String,
        price: f64,
    }

    impl DummyEntity {
        fn new(name: &str, price: f64) -> Self {
            Self {
                entity_id: EntityId::new(),
                name: name.to_string(),
                price,
            }
        }
    }

    impl Entity for DummyEntity {
        type Id = EntityId;

        const ENTITY_TYPE: &'static str = "DummyEntity";

        fn entity_id(&self) -> &Self::Id {
            &self.entity_id
        }

        fn to_json(&self) -> JsonValue {
            json!({
                "id": self.entity_id.to_string(),
                "name": self.name,
                "price": self.price,
            })
        }
    }

    fn repo() -> InMemoryRepository<DummyEntity> {
        InMemoryRepository::new()
    }

    #[test]
    fn insert_appends() {
        let repository = repo();
        repository.insert(DummyEntity::new("Test", 100.0)).unwrap();
        assert_eq!(repository.len().unwrap(), 1);
    }

    #[test]
    fn bulk_insert_preserves_order() {
        let repository = repo();
        let entities = vec![DummyEntity::new("Test1", 100.0), DummyEntity::new("Test2", 200.0)];
        repository.bulk_insert(entities.clone()).unwrap();
        assert_eq!(repository.find_all().unwrap(), entities);
    }

    #[test]
    fn find_by_id_returns_equal_entity() {
        let repository = repo();
        let entity = DummyEntity::new("Test", 100.0);
        repository.insert(entity.clone()).unwrap();

        assert_eq!(repository.find_by_id(&entity.entity_id).unwrap(), Some(entity));
    }

    #[test]
    fn find_by_id_miss_is_none() {
        let repository = repo();
        repository.insert(DummyEntity::new("Test", 100.0)).unwrap();
        assert_eq!(repository.find_by_id(&EntityId::new()).unwrap(), None);
    }

    #[test]
    fn update_replaces_in_place() {
        let repository = repo();
        let first = DummyEntity::new("First", 1.0);
        let entity = DummyEntity::new("Test", 100.0);
        let last = DummyEntity::new("Last", 2.0);
        repository
            .bulk_insert(vec![first.clone(), entity.clone(), last.clone()])
            .unwrap();

        let updated = DummyEntity {
            price: 150.0,
            ..entity.clone()
        };
        repository.update(updated.clone()).unwrap();

        assert_eq!(repository.find_all().unwrap(), vec![first, updated, last]);
    }

    #[test]
    fn update_unknown_entity_is_not_found() {
        let repository = repo();
        let entity = DummyEntity::new("Test", 100.0);

        let err = repository.update(entity.clone()).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("Entity \"DummyEntity\" with id(s) \"{}\" not found.", entity.entity_id)
        );
    }

    #[test]
    fn delete_removes_entity() {
        let repository = repo();
        let entity = DummyEntity::new("Test", 100.0);
        repository.insert(entity.clone()).unwrap();

        repository.delete(&entity.entity_id).unwrap();
        assert_eq!(repository.find_by_id(&entity.entity_id).unwrap(), None);
        assert!(repository.is_empty().unwrap());
    }

    #[test]
    fn delete_unknown_entity_is_not_found() {
        let repository = repo();
        let id = EntityId::new();

        let err = repository.delete(&id).unwrap_err();
        assert_eq!(err, DomainError::not_found(id, "DummyEntity"));
        assert_eq!(
            err.to_string(),
            format!("Entity \"DummyEntity\" with id(s) \"{id}\" not found.")
        );
    }

    #[test]
    fn entity_type_comes_from_entity() {
        assert_eq!(repo().entity_type(), "DummyEntity");
    }
}
