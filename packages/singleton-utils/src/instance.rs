use once_cell::sync::OnceCell;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Write-once slot for a lazily constructed instance.
///
/// The value is published at most once; every later access reads the same
/// value. `new` is `const`, so a container can sit in a `static`.
pub struct InstanceContainer<T> {
    instance: OnceCell<T>,
    inits: AtomicUsize,
}

impl<T> InstanceContainer<T> {
    pub const fn new() -> Self {
        Self {
            instance: OnceCell::new(),
            inits: AtomicUsize::new(0),
        }
    }

    pub fn is_init(&self) -> bool {
        self.instance.get().is_some()
    }

    pub fn get(&self) -> Option<&T> {
        self.instance.get()
    }

    /// Returns the stored value, running `init` first if the slot is empty.
    ///
    /// Concurrent callers block until the first one publishes; their own
    /// `init` closures are never run.
    pub fn get_or_init(&self, init: impl FnOnce() -> T) -> &T {
        self.instance.get_or_init(|| {
            let instance = init();
            self.inits.fetch_add(1, Ordering::Relaxed);
            instance
        })
    }

    /// Like [`get_or_init`](Self::get_or_init), but a failed `init` leaves
    /// the slot empty and is not counted as a construction.
    pub fn try_get_or_init<E>(&self, init: impl FnOnce() -> Result<T, E>) -> Result<&T, E> {
        self.instance.get_or_try_init(|| {
            let instance = init()?;
            self.inits.fetch_add(1, Ordering::Relaxed);
            Ok(instance)
        })
    }

    /// Number of construction events so far; never more than one.
    pub fn init_count(&self) -> usize {
        self.inits.load(Ordering::Relaxed)
    }
}

impl<T> Default for InstanceContainer<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_empty_container() {
        let container: InstanceContainer<String> = InstanceContainer::new();
        assert!(!container.is_init());
        assert!(container.get().is_none());
        assert_eq!(container.init_count(), 0);
    }

    #[test]
    fn test_first_init_wins() {
        let container = InstanceContainer::new();
        let first = container.get_or_init(|| "Version-1".to_string());
        let second = container.get_or_init(|| "Version-2".to_string());

        assert!(std::ptr::eq(first, second));
        assert_eq!(second, "Version-1");
        assert_eq!(container.get().map(String::as_str), Some("Version-1"));
        assert_eq!(container.init_count(), 1);
    }

    #[test]
    fn test_later_init_closure_not_run() {
        let container = InstanceContainer::default();
        container.get_or_init(|| 1u32);

        let mut ran = false;
        let value = container.get_or_init(|| {
            ran = true;
            2
        });

        assert!(!ran, "init closure should not run once the slot is filled");
        assert_eq!(*value, 1);
    }

    #[test]
    fn test_failed_init_leaves_slot_empty() {
        let container: InstanceContainer<String> = InstanceContainer::new();

        let result = container.try_get_or_init(|| Err("boom"));
        assert_eq!(result, Err("boom"));
        assert!(!container.is_init());
        assert_eq!(container.init_count(), 0);

        let value = container
            .try_get_or_init(|| Ok::<_, &str>("recovered".to_string()))
            .unwrap();
        assert_eq!(value, "recovered");
        assert_eq!(container.init_count(), 1);
    }

    #[test]
    fn test_static_container() {
        static CONTAINER: InstanceContainer<&'static str> = InstanceContainer::new();

        let first = CONTAINER.get_or_init(|| "A");
        let second = CONTAINER.get_or_init(|| "B");
        assert!(std::ptr::eq(first, second));
        assert_eq!(*second, "A");
    }

    #[test]
    fn test_concurrent_init_constructs_once() {
        let container = Arc::new(InstanceContainer::new());

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let container = Arc::clone(&container);
                thread::spawn(move || {
                    let value = container.get_or_init(|| format!("thread-{i}"));
                    value as *const String as usize
                })
            })
            .collect();

        let addrs: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(addrs.windows(2).all(|w| w[0] == w[1]));
        assert_eq!(container.init_count(), 1);
    }
}
