/// Holds a "submitting" flag high for as long as the guard lives.
///
/// The flag is set on [`BusyGuard::enter`] and cleared on drop, so every exit
/// path (early return, `?`, or the future being dropped) resets it.
pub struct BusyGuard<F: FnMut(bool)> {
    set_busy: F,
}

impl<F: FnMut(bool)> BusyGuard<F> {
    pub fn enter(mut set_busy: F) -> Self {
        set_busy(true);
        Self { set_busy }
    }
}

impl<F: FnMut(bool)> Drop for BusyGuard<F> {
    fn drop(&mut self) {
        (self.set_busy)(false);
    }
}
