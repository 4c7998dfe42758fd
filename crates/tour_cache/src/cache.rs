//! The frozen lesson cache.

use std::collections::{hash_map, HashMap};

use tour_common::LessonId;
use tour_lesson::CompiledLesson;

/// Mapping from lesson id to compiled lesson JSON.
///
/// A cache is assembled in one step from fully compiled lessons and has no
/// methods that modify it afterwards, so it can be shared between any number
/// of readers without locking.
#[derive(Debug, Default)]
pub struct LessonCache {
    lessons: HashMap<LessonId, CompiledLesson>,
}

impl LessonCache {
    /// Creates a cache holding no lessons.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the compiled lesson for `id`.
    pub fn get(&self, id: &str) -> Option<&CompiledLesson> {
        self.lessons.get(id)
    }

    /// Returns `true` if a lesson with this id is cached.
    pub fn contains(&self, id: &str) -> bool {
        self.lessons.contains_key(id)
    }

    /// Returns the number of cached lessons.
    pub fn len(&self) -> usize {
        self.lessons.len()
    }

    /// Returns `true` if the cache holds no lessons.
    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }

    /// Iterates over all entries in unspecified order.
    ///
    /// The iterator is `Clone`, so callers can walk the entries twice, for
    /// example to size a buffer before filling it.
    pub fn iter(&self) -> hash_map::Iter<'_, LessonId, CompiledLesson> {
        self.lessons.iter()
    }

    /// Returns all lesson ids in sorted order.
    pub fn ids(&self) -> Vec<&LessonId> {
        let mut ids: Vec<&LessonId> = self.lessons.keys().collect();
        ids.sort();
        ids
    }
}

impl FromIterator<(LessonId, CompiledLesson)> for LessonCache {
    fn from_iter<I: IntoIterator<Item = (LessonId, CompiledLesson)>>(iter: I) -> Self {
        Self {
            lessons: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tour_lesson::Lesson;

    fn compiled(title: &str) -> CompiledLesson {
        CompiledLesson::encode(&Lesson {
            title: title.to_string(),
            description: String::new(),
            pages: Vec::new(),
        })
        .unwrap()
    }

    #[test]
    fn empty_cache() {
        let cache = LessonCache::empty();
        assert!(cache.is_empty());
        assert_eq!(cache.len(), 0);
        assert!(cache.get("basics").is_none());
        assert_eq!(cache.iter().len(), 0);
    }

    #[test]
    fn collect_and_lookup() {
        let cache: LessonCache = [
            (LessonId::new("moretypes"), compiled("More types")),
            (LessonId::new("basics"), compiled("Basics")),
        ]
        .into_iter()
        .collect();
        assert_eq!(cache.len(), 2);
        assert!(cache.contains("basics"));
        assert!(!cache.contains("methods"));
        assert_eq!(
            cache.get("basics").unwrap().as_bytes(),
            compiled("Basics").as_bytes()
        );
        let ids: Vec<&str> = cache.ids().iter().map(|id| id.as_str()).collect();
        assert_eq!(ids, vec!["basics", "moretypes"]);
    }

    #[test]
    fn iter_can_be_replayed() {
        let cache: LessonCache = [
            (LessonId::new("basics"), compiled("Basics")),
            (LessonId::new("methods"), compiled("Methods")),
        ]
        .into_iter()
        .collect();
        let first = cache.iter();
        let replay = first.clone();
        let a: Vec<&LessonId> = first.map(|(id, _)| id).collect();
        let b: Vec<&LessonId> = replay.map(|(id, _)| id).collect();
        assert_eq!(a, b);
        assert_eq!(a.len(), 2);
    }
}
