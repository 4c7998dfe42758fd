//! Lesson queries over a built cache.

use std::borrow::Cow;
use std::io::{self, Write};

use tour_common::LessonId;

use crate::cache::LessonCache;
use crate::error::LookupError;
use crate::splice::{splice_object, write_spliced_object};

/// Answers lesson requests from a [`LessonCache`].
///
/// The service only reads the cache, so a single instance can be shared
/// across threads (for example behind an `Arc`) and queried concurrently.
#[derive(Debug, Default)]
pub struct LessonService {
    cache: LessonCache,
}

impl LessonService {
    /// Wraps a built cache.
    pub fn new(cache: LessonCache) -> Self {
        Self { cache }
    }

    /// Returns the underlying cache.
    pub fn cache(&self) -> &LessonCache {
        &self.cache
    }

    /// Returns the JSON for one lesson, or for all lessons when `id` is empty.
    ///
    /// A single lesson is returned as the cached bytes, unchanged.
    pub fn get_lesson(&self, id: &str) -> Result<Cow<'_, [u8]>, LookupError> {
        if id.is_empty() {
            return Ok(Cow::Owned(self.get_all_lessons()));
        }
        match self.cache.get(id) {
            Some(lesson) => Ok(Cow::Borrowed(lesson.as_bytes())),
            None => {
                tracing::debug!(lesson = id, "lesson not found");
                Err(LookupError::NotFound { id: id.to_string() })
            }
        }
    }

    /// Returns one JSON object mapping every lesson id to its lesson JSON.
    ///
    /// Entry order is unspecified. An empty cache yields `{}`.
    pub fn get_all_lessons(&self) -> Vec<u8> {
        splice_object(
            self.cache
                .iter()
                .map(|(id, lesson)| (id.as_str(), lesson.as_bytes())),
        )
    }

    /// Writes the result of [`get_lesson`](Self::get_lesson) to `w`.
    ///
    /// An unknown id writes nothing.
    pub fn write_lesson<W: Write + ?Sized>(&self, id: &str, w: &mut W) -> Result<(), LookupError> {
        if id.is_empty() {
            return self.write_all_lessons(w).map_err(LookupError::from);
        }
        let lesson = self.cache.get(id).ok_or_else(|| LookupError::NotFound {
            id: id.to_string(),
        })?;
        w.write_all(lesson.as_bytes())?;
        Ok(())
    }

    /// Streams the aggregate object to `w` without buffering it first.
    pub fn write_all_lessons<W: Write + ?Sized>(&self, w: &mut W) -> io::Result<()> {
        write_spliced_object(
            w,
            self.cache
                .iter()
                .map(|(id, lesson)| (id.as_str(), lesson.as_bytes())),
        )
    }

    /// Returns the ids of all cached lessons, sorted.
    pub fn ids(&self) -> Vec<&LessonId> {
        self.cache.ids()
    }

    /// Returns the number of cached lessons.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Returns `true` if no lessons are cached.
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Returns `true` if a lesson with this id is cached.
    pub fn contains(&self, id: &str) -> bool {
        self.cache.contains(id)
    }
}

impl From<LessonCache> for LessonService {
    fn from(cache: LessonCache) -> Self {
        Self::new(cache)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use tour_lesson::{compile_document, CompiledLesson, HtmlRenderer, Lesson};
    use tour_present::{parse_str, MapCodeLoader};

    fn compiled(title: &str, pages: usize) -> CompiledLesson {
        let text = (0..pages)
            .map(|i| format!("* Page {i}\n\nText {i}.\n"))
            .collect::<Vec<_>>()
            .join("\n");
        let doc = parse_str(
            "lesson.article",
            &format!("{title}\n\n{text}"),
            &MapCodeLoader::new(),
        )
        .unwrap();
        compile_document(&doc, &HtmlRenderer::default()).unwrap()
    }

    fn service(entries: &[(&str, &str, usize)]) -> LessonService {
        entries
            .iter()
            .map(|(id, title, pages)| (LessonId::new(*id), compiled(title, *pages)))
            .collect::<LessonCache>()
            .into()
    }

    fn tour() -> LessonService {
        service(&[
            ("basics", "Basics", 2),
            ("flowcontrol", "Flow control", 1),
            ("methods", "Methods \"and\" interfaces", 3),
        ])
    }

    #[test]
    fn single_lesson_is_cached_bytes() {
        let svc = tour();
        let got = svc.get_lesson("basics").unwrap();
        assert!(matches!(got, Cow::Borrowed(_)));
        assert_eq!(&*got, svc.cache().get("basics").unwrap().as_bytes());
    }

    #[test]
    fn aggregate_holds_every_lesson() {
        let svc = tour();
        let all: Value = serde_json::from_slice(&svc.get_all_lessons()).unwrap();
        let object = all.as_object().unwrap();
        assert_eq!(object.len(), svc.len());
        for id in svc.ids() {
            let single: Value =
                serde_json::from_slice(&svc.get_lesson(id.as_str()).unwrap()).unwrap();
            assert_eq!(object[id.as_str()], single);
        }
        let methods: Lesson = serde_json::from_value(object["methods"].clone()).unwrap();
        assert_eq!(methods.title, "Methods \"and\" interfaces");
        assert_eq!(methods.pages.len(), 3);
    }

    #[test]
    fn aggregate_keys_match_cache_entries() {
        let svc = tour();
        let all = svc.get_all_lessons();
        let object: serde_json::Map<String, Value> = serde_json::from_slice(&all).unwrap();
        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort();
        let mut cached: Vec<&str> = svc.cache().iter().map(|(id, _)| id.as_str()).collect();
        cached.sort();
        assert_eq!(keys, cached);

        let payload: usize = svc
            .cache()
            .iter()
            .map(|(id, lesson)| id.as_str().len() + 3 + lesson.as_bytes().len())
            .sum();
        // plus braces and the separators between three entries
        assert_eq!(all.len(), payload + 2 + 2);
    }

    #[test]
    fn empty_id_means_all_lessons() {
        let svc = tour();
        let got = svc.get_lesson("").unwrap();
        assert!(matches!(got, Cow::Owned(_)));
        assert_eq!(got.into_owned(), svc.get_all_lessons());
    }

    #[test]
    fn empty_cache_aggregate() {
        let svc = LessonService::default();
        assert!(svc.is_empty());
        assert_eq!(svc.get_all_lessons(), b"{}");
        assert_eq!(&*svc.get_lesson("").unwrap(), b"{}");
    }

    #[test]
    fn one_lesson_aggregate() {
        let svc = service(&[("basics", "Basics", 0)]);
        let single = svc.get_lesson("basics").unwrap().into_owned();
        let mut expected = b"{\"basics\":".to_vec();
        expected.extend_from_slice(&single);
        expected.push(b'}');
        assert_eq!(svc.get_all_lessons(), expected);
    }

    #[test]
    fn unknown_lesson_not_found() {
        let svc = tour();
        let err = svc.get_lesson("nonexistent").unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "lesson not found: nonexistent");
    }

    #[test]
    fn lookup_is_exact() {
        let svc = tour();
        assert!(svc.get_lesson("Basics").is_err());
        assert!(svc.get_lesson("basics.article").is_err());
        assert!(svc.contains("flowcontrol"));
    }

    #[test]
    fn write_lesson_matches_get() {
        let svc = tour();
        let mut out = Vec::new();
        svc.write_lesson("flowcontrol", &mut out).unwrap();
        assert_eq!(out, &*svc.get_lesson("flowcontrol").unwrap());

        let mut all = Vec::new();
        svc.write_lesson("", &mut all).unwrap();
        assert_eq!(all, svc.get_all_lessons());
    }

    #[test]
    fn write_unknown_writes_nothing() {
        let svc = tour();
        let mut out = Vec::new();
        let err = svc.write_lesson("nope", &mut out).unwrap_err();
        assert!(err.is_not_found());
        assert!(out.is_empty());
    }

    #[test]
    fn hello_lesson() {
        let loader = MapCodeLoader::new().with_file("main.go", "package main");
        let text = "Hello\n\n* Intro\n\n.play main.go\n";
        let doc = parse_str("hello.article", text, &loader).unwrap();
        let lesson = compile_document(&doc, &HtmlRenderer::default()).unwrap();
        let svc: LessonService = [(LessonId::new("hello"), lesson)]
            .into_iter()
            .collect::<LessonCache>()
            .into();

        let single: Lesson = serde_json::from_slice(&svc.get_lesson("hello").unwrap()).unwrap();
        assert_eq!(single.title, "Hello");
        assert_eq!(single.description, "");
        assert_eq!(single.pages.len(), 1);
        assert_eq!(single.pages[0].title, "Intro");
        assert_eq!(single.pages[0].files[0].name, "main.go");
        assert_eq!(single.pages[0].files[0].content, "package main");

        let all: Value = serde_json::from_slice(&svc.get_all_lessons()).unwrap();
        assert_eq!(all.as_object().unwrap().len(), 1);
        assert_eq!(all["hello"]["title"], "Hello");
    }

    #[test]
    fn shared_across_threads() {
        let svc = std::sync::Arc::new(tour());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let svc = std::sync::Arc::clone(&svc);
                std::thread::spawn(move || svc.get_all_lessons())
            })
            .collect();
        let expected = svc.get_all_lessons();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    }
}
