/// Declares a `Droppable` type that tracks how many of its values are alive.
///
/// Each invocation gets its own counter, so tests running in parallel don't see each other.
macro_rules! droppable {
    () => {
        static COUNT: core::sync::atomic::AtomicI32 = core::sync::atomic::AtomicI32::new(0);

        #[derive(Debug, Eq, Ord, PartialEq, PartialOrd)]
        struct Droppable(i32);
        impl Droppable {
            fn new() -> Self {
                let id = COUNT.fetch_add(1, core::sync::atomic::Ordering::Relaxed);
                Droppable(id + 1)
            }

            fn count() -> i32 {
                COUNT.load(core::sync::atomic::Ordering::Relaxed)
            }
        }
        impl Clone for Droppable {
            fn clone(&self) -> Self {
                COUNT.fetch_add(1, core::sync::atomic::Ordering::Relaxed);
                Droppable(self.0)
            }
        }
        impl Drop for Droppable {
            fn drop(&mut self) {
                COUNT.fetch_sub(1, core::sync::atomic::Ordering::Relaxed);
            }
        }
    };
}
