use std::ops::{Deref, DerefMut};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::warn;

use crate::appender::SharedAppender;
use crate::record::Record;
use crate::thread;

/// Thread-safe ordered set of appenders, which broadcasts every dispatched record to all of them.
///
/// Appenders are compared by identity, i.e. the same instance can be added only once, while
/// multiple different appenders may share the same name. Insertion order is the dispatch order.
///
/// # Locking
///
/// Every operation holds a single exclusive lock for its entire duration, including `dispatch`,
/// which invokes appenders under the lock. As a result a slow appender blocks all concurrent
/// operations on the same registry until it returns.
///
/// The lock is not re-entrant. Calling back into the registry from an appender while it is being
/// dispatched to on the same thread would deadlock, so such calls are detected instead: they emit
/// a diagnostic warning and do nothing.
#[derive(Default)]
pub struct AppenderRegistry {
    appenders: Mutex<Vec<SharedAppender>>,
    /// Id of the thread currently holding the lock, zero if none.
    owner: AtomicUsize,
}

struct Guard<'a> {
    appenders: MutexGuard<'a, Vec<SharedAppender>>,
    owner: &'a AtomicUsize,
}

impl<'a> Deref for Guard<'a> {
    type Target = Vec<SharedAppender>;

    fn deref(&self) -> &Self::Target {
        &self.appenders
    }
}

impl<'a> DerefMut for Guard<'a> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.appenders
    }
}

impl<'a> Drop for Guard<'a> {
    fn drop(&mut self) {
        // Runs before the mutex guard is released.
        self.owner.store(0, Ordering::Release);
    }
}

#[inline]
fn same(lhs: &SharedAppender, rhs: &SharedAppender) -> bool {
    // Vtable pointers are not guaranteed to be unique, so compare data pointers only.
    Arc::as_ptr(lhs) as *const () == Arc::as_ptr(rhs) as *const ()
}

impl AppenderRegistry {
    pub fn new() -> AppenderRegistry {
        AppenderRegistry::default()
    }

    fn lock(&self, op: &str) -> Option<Guard<'_>> {
        let id = thread::id();

        if self.owner.load(Ordering::Acquire) == id {
            warn!("appender registry re-entered by `{}` from an appender, ignoring", op);
            return None;
        }

        // A panicking appender can't leave the sequence torn, so poisoning is ignored.
        let appenders = self.appenders.lock().unwrap_or_else(PoisonError::into_inner);
        self.owner.store(id, Ordering::Release);

        let guard = Guard {
            appenders,
            owner: &self.owner,
        };

        Some(guard)
    }

    /// Appends the given appender to the end of the sequence unless it is already there.
    ///
    /// Passing `None` is a misuse that results in a diagnostic warning only.
    pub fn add<A>(&self, appender: A)
    where
        A: Into<Option<SharedAppender>>,
    {
        let appender = match appender.into() {
            Some(appender) => appender,
            None => {
                warn!("tried to add null appender");
                return;
            }
        };

        if let Some(mut appenders) = self.lock("add") {
            if !appenders.iter().any(|v| same(v, &appender)) {
                appenders.push(appender);
            }
        }
    }

    /// Returns a snapshot of all appenders in their dispatch order.
    pub fn get_all(&self) -> Vec<SharedAppender> {
        match self.lock("get_all") {
            Some(appenders) => appenders.clone(),
            None => Vec::new(),
        }
    }

    /// Returns the first appender with exactly the given name, if any.
    pub fn get_by_name(&self, name: &str) -> Option<SharedAppender> {
        self.lock("get_by_name")?
            .iter()
            .find(|v| v.name() == name)
            .cloned()
    }

    /// Removes all appenders, releasing them in the dispatch order.
    pub fn remove_all(&self) {
        if let Some(mut appenders) = self.lock("remove_all") {
            for appender in appenders.drain(..) {
                drop(appender);
            }
        }
    }

    /// Removes exactly the given appender instance, keeping the order of the rest.
    ///
    /// Removing an absent appender does nothing, while passing `None` is a misuse that results in
    /// a diagnostic warning only.
    pub fn remove<A>(&self, appender: A)
    where
        A: Into<Option<SharedAppender>>,
    {
        let appender = match appender.into() {
            Some(appender) => appender,
            None => {
                warn!("tried to remove null appender");
                return;
            }
        };

        if let Some(mut appenders) = self.lock("remove") {
            if let Some(pos) = appenders.iter().position(|v| same(v, &appender)) {
                appenders.remove(pos);
            }
        }
    }

    /// Removes the first appender with exactly the given name.
    ///
    /// Not finding one is a normal condition, which is silently ignored.
    pub fn remove_by_name(&self, name: &str) {
        if let Some(mut appenders) = self.lock("remove_by_name") {
            if let Some(pos) = appenders.iter().position(|v| v.name() == name) {
                appenders.remove(pos);
            }
        }
    }

    /// Passes the given record to every appender in order, returning how many were invoked.
    pub fn dispatch(&self, rec: &Record) -> usize {
        let appenders = match self.lock("dispatch") {
            Some(appenders) => appenders,
            None => return 0,
        };

        let mut count = 0;
        for appender in appenders.iter() {
            count += 1;
            appender.append(rec);
        }

        count
    }

    /// Returns the number of appenders.
    pub fn len(&self) -> usize {
        self.lock("len").map_or(0, |appenders| appenders.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
