use std::sync::{Arc, RwLock};

use contracts::domain::common::{AggregateId, AggregateRoot};

use crate::shared::error::{ServiceError, ServiceResult};

/// In-memory коллекция записей справочника
///
/// Стоит на месте БД: порядок элементов — от новых к старым, новая запись
/// вставляется в начало. Блокировка берётся только внутри синхронных
/// замыканий и никогда не удерживается через `await`, поэтому листинги не
/// видят частично применённых изменений.
#[derive(Debug)]
pub struct MemoryStore<T> {
    items: Arc<RwLock<Vec<T>>>,
}

impl<T> Clone for MemoryStore<T> {
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
        }
    }
}

impl<T> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> MemoryStore<T> {
    pub fn new() -> Self {
        Self::from_vec(Vec::new())
    }

    pub fn from_vec(items: Vec<T>) -> Self {
        Self {
            items: Arc::new(RwLock::new(items)),
        }
    }

    pub fn read<R>(&self, f: impl FnOnce(&[T]) -> R) -> ServiceResult<R> {
        let guard = self
            .items
            .read()
            .map_err(|_| ServiceError::Transport("storage lock poisoned".into()))?;
        Ok(f(&guard))
    }

    pub fn write<R>(&self, f: impl FnOnce(&mut Vec<T>) -> R) -> ServiceResult<R> {
        let mut guard = self
            .items
            .write()
            .map_err(|_| ServiceError::Transport("storage lock poisoned".into()))?;
        Ok(f(&mut guard))
    }

    pub fn len(&self) -> ServiceResult<usize> {
        self.read(|items| items.len())
    }

    pub fn is_empty(&self) -> ServiceResult<bool> {
        self.read(|items| items.is_empty())
    }
}

impl<T: Clone> MemoryStore<T> {
    /// Копия всей коллекции на текущий момент
    pub fn snapshot(&self) -> ServiceResult<Vec<T>> {
        self.read(|items| items.to_vec())
    }
}

impl<T> MemoryStore<T>
where
    T: AggregateRoot + Clone,
    T::Id: AggregateId,
{
    pub fn find_by_id(&self, id: &str) -> ServiceResult<Option<T>> {
        self.read(|items| items.iter().find(|x| x.id().as_string() == id).cloned())
    }

    pub fn position_of(items: &[T], id: &str) -> Option<usize> {
        items.iter().position(|x| x.id().as_string() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_the_collection() {
        let store = MemoryStore::from_vec(vec![1, 2, 3]);
        let other = store.clone();

        other.write(|items| items.insert(0, 0)).unwrap();

        assert_eq!(store.snapshot().unwrap(), vec![0, 1, 2, 3]);
        assert_eq!(store.len().unwrap(), 4);
    }

    #[test]
    fn test_fresh_stores_are_independent() {
        let a: MemoryStore<i32> = MemoryStore::new();
        let b: MemoryStore<i32> = MemoryStore::new();

        a.write(|items| items.push(1)).unwrap();

        assert!(b.is_empty().unwrap());
        assert_eq!(a.len().unwrap(), 1);
    }
}
