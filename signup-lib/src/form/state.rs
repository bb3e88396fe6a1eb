use std::sync::{Arc, Mutex, RwLock};

type Subscriber<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// Observable state cell with interior mutability.
///
/// `State<T>` uses `Arc<RwLock<T>>` internally, making it cheap to clone and
/// safe to move into spawned validation tasks. Every `set` or `update`
/// notifies the subscribers with a snapshot of the new value; this is how a
/// Field Record change schedules the whole-record revalidation.
///
/// # Example
///
/// ```
/// use signup_lib::form::State;
///
/// let count = State::new(0);
/// count.update(|v| *v += 1);
/// assert_eq!(count.get(), 1);
/// ```
pub struct State<T> {
    inner: Arc<RwLock<T>>,
    subscribers: Arc<Mutex<Vec<Subscriber<T>>>>,
}

impl<T> State<T> {
    /// Create a new state with the given value
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(RwLock::new(value)),
            subscribers: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Read the current value through a closure without cloning it
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        let guard = self
            .inner
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&guard)
    }

    /// Register a callback run after every change
    pub fn subscribe<F>(&self, f: F)
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        self.subscribers
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(Arc::new(f));
    }
}

impl<T: Clone> State<T> {
    /// Get a clone of the current value
    pub fn get(&self) -> T {
        self.with(T::clone)
    }

    /// Set a new value
    pub fn set(&self, value: T) {
        self.update(|v| *v = value);
    }

    /// Update the value using a closure, returning whatever the closure returns
    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let (result, snapshot) = {
            let mut guard = self
                .inner
                .write()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            let result = f(&mut guard);
            (result, T::clone(&guard))
        };
        self.notify(&snapshot);
        result
    }

    fn notify(&self, snapshot: &T) {
        // Subscribers may touch this state again, so call them unlocked.
        let subscribers: Vec<Subscriber<T>> = self
            .subscribers
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone();
        for subscriber in subscribers {
            subscriber(snapshot);
        }
    }
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            subscribers: Arc::clone(&self.subscribers),
        }
    }
}

impl<T: Default> Default for State<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for State<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.with(|value| f.debug_struct("State").field("value", value).finish())
    }
}
