//! Domain event trait.

/// A fact that an aggregate accepted and applied.
///
/// Events are what the session logs after a successful command; the type name is
/// stable so log consumers can filter on it.
pub trait Event: Clone + core::fmt::Debug {
    /// Stable, dotted event type name (e.g. `inventory.item.added`).
    fn event_type(&self) -> &'static str;
}
