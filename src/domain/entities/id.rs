use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use uuid::Uuid;

/// Typed identity of an entity. The marker keeps a `Skill` id from being
/// passed where a `Project` id is expected.
pub struct Id<T> {
    pub value: Uuid,
    _marker: PhantomData<T>,
}

impl<T> Id<T> {
    pub fn new(value: Uuid) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    pub fn generate() -> Id<T> {
        Id::new(Uuid::now_v7())
    }
}

// Manual impls: derives would require the marker type itself to be Clone/Eq/Hash.
impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        Id::new(self.value)
    }
}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> Hash for Id<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

impl<T> From<Uuid> for Id<T> {
    fn from(value: Uuid) -> Self {
        Id::new(value)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use uuid::Uuid;

    use crate::domain::entities::id::Id;
    use crate::domain::entities::skill::Skill;

    #[test]
    fn test_id_new() {
        let uuid = Uuid::now_v7();
        let id: Id<Skill> = Id::new(uuid);
        assert_eq!(id.value, uuid)
    }

    #[test]
    fn test_id_generate_is_unique_and_time_ordered() {
        let first: Id<Skill> = Id::generate();
        let second: Id<Skill> = Id::generate();
        assert_ne!(first, second);
        assert!(first.value < second.value);
    }

    #[test]
    fn test_id_hash_uses_value() {
        let uuid = Uuid::now_v7();
        let ids: HashSet<Id<Skill>> = [Id::new(uuid), Id::new(uuid), Id::generate()].into_iter().collect();
        assert_eq!(ids.len(), 2);
    }

    #[test]
    fn test_id_display_is_plain_uuid() {
        let uuid = Uuid::now_v7();
        let id: Id<Skill> = Id::new(uuid);
        assert_eq!(id.to_string(), uuid.to_string());
    }
}
