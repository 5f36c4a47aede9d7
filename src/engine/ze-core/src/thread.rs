use fnv::FnvHashMap;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::sync::Arc;
use std::thread::ThreadId;

/// Names given to threads for log output, keyed by thread id.
static THREAD_NAMES: Lazy<RwLock<FnvHashMap<ThreadId, Arc<str>>>> = Lazy::new(RwLock::default);

pub fn set_thread_name(id: ThreadId, name: impl Into<Arc<str>>) {
    THREAD_NAMES.write().insert(id, name.into());
}

/// Registered name of `id`, falling back to the name the thread was spawned with.
pub fn thread_name(id: ThreadId) -> Option<Arc<str>> {
    if let Some(name) = THREAD_NAMES.read().get(&id) {
        return Some(name.clone());
    }

    let current = std::thread::current();
    if current.id() == id {
        current.name().map(Arc::from)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use crate::thread::{set_thread_name, thread_name};

    #[test]
    fn registered_name_is_returned() {
        std::thread::spawn(|| {
            set_thread_name(std::thread::current().id(), "Render Thread");
            assert_eq!(
                thread_name(std::thread::current().id()).as_deref(),
                Some("Render Thread")
            );
        })
        .join()
        .unwrap();
    }

    #[test]
    fn registered_name_overrides_spawn_name() {
        std::thread::Builder::new()
            .name("worker".to_string())
            .spawn(|| {
                let id = std::thread::current().id();
                assert_eq!(thread_name(id).as_deref(), Some("worker"));
                set_thread_name(id, "Loader");
                assert_eq!(thread_name(id).as_deref(), Some("Loader"));
            })
            .unwrap()
            .join()
            .unwrap();
    }

    #[test]
    fn unnamed_foreign_thread_has_no_name() {
        let id = std::thread::spawn(|| std::thread::current().id())
            .join()
            .unwrap();
        assert!(thread_name(id).is_none());
    }
}
