/// Returns an identifier of the calling thread, which is never zero while the thread is alive.
#[inline]
pub fn id() -> usize {
    __get_id()
}

#[cfg(unix)]
#[inline]
fn __get_id() -> usize {
    unsafe { libc::pthread_self() as usize }
}

#[cfg(not(unix))]
#[inline]
fn __get_id() -> usize {
    use std::sync::atomic::{AtomicUsize, Ordering};

    static NEXT: AtomicUsize = AtomicUsize::new(1);

    thread_local! {
        static ID: usize = NEXT.fetch_add(1, Ordering::Relaxed);
    }

    ID.with(|id| *id)
}
