/// Redraw request sent to the display layer after the canvas changed.
///
/// Must not block: it runs at the end of every rotation pass.
pub trait Invalidate {
    fn invalidate(&self);
}

impl<F: Fn()> Invalidate for F {
    fn invalidate(&self) {
        self();
    }
}

/// Invalidator for callers that poll the canvas themselves.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoInvalidate;

impl Invalidate for NoInvalidate {
    fn invalidate(&self) {}
}
