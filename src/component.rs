// Component lifecycle base
//
// Every panel or service element in a shell shares the same skeleton: an
// identity, a registry of owned resources, persisted state, and a live view
// of the current theme. ComponentCore carries that skeleton; the Component
// trait layers the polymorphic style hook on top so concrete components
// only write the parts that differ.
//
// Lifecycle: new -> (shutdown)* -> dispose. Shutdown persists state and
// releases nothing; dispose releases everything exactly once.

use crate::dispose::{Disposable, DisposableStore};
use crate::memento::Memento;
use crate::storage::{Storage, StorageScope};
use crate::styles::StyleCollector;
use crate::theme::{Theme, ThemeEvents, ThemeService};
use anyhow::{bail, Result};
use serde_json::{Map, Value};
use std::sync::Arc;

/// Shared lifecycle state embedded by every component.
pub struct ComponentCore {
    id: String,
    disposables: DisposableStore,
    memento: Memento,
    theme: Theme,
    /// Receiving end of the theme subscription; dropped on dispose so
    /// queued notifications can no longer be drained.
    theme_events: Option<ThemeEvents>,
}

impl ComponentCore {
    /// Wire a new component into the theme service.
    ///
    /// Captures the current theme as the initial snapshot and subscribes to
    /// changes; the subscription's cancellation handle goes straight into
    /// the disposable store so it is released on `dispose()`.
    pub fn new(id: impl Into<String>, themes: &ThemeService) -> Self {
        let id = id.into();
        let theme = themes.current();
        let (subscription, events) = themes.subscribe();
        let mut disposables = DisposableStore::new();
        disposables.register(Box::new(subscription));
        tracing::debug!("component '{}' created", id);

        Self {
            memento: Memento::new(id.clone()),
            theme,
            theme_events: Some(events),
            disposables,
            id,
        }
    }

    /// Immutable identity, unique per component kind. Instances sharing an
    /// id share persisted state.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Hand a resource to the component; it is released on `dispose()`.
    pub fn register(&mut self, disposable: Box<dyn Disposable>) {
        self.disposables.register(disposable);
    }

    /// The cached theme snapshot, updated on every notification.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Textual color for `color_id` in the cached theme snapshot.
    ///
    /// Unknown identifiers are the theme's error to report; nothing is
    /// recovered here.
    pub fn color(&self, color_id: &str) -> Result<String> {
        Ok(self.theme.resolve_color(color_id)?.to_string())
    }

    /// Persisted state for `scope`, loaded from `storage` on first access.
    /// Repeated calls with the same scope return the same live object.
    ///
    /// Errors on a disposed component: it no longer owns its resources and
    /// must not hand out state objects that could never be saved.
    pub fn memento(
        &mut self,
        storage: &Arc<dyn Storage>,
        scope: StorageScope,
    ) -> Result<&mut Map<String, Value>> {
        if self.disposables.is_disposed() {
            bail!("component '{}' is disposed", self.id);
        }
        self.memento.get(storage, scope)
    }

    /// Flush every loaded memento scope back to storage. No-op for scopes
    /// never loaded; safe to call any number of times.
    pub fn save_memento(&self) -> Result<()> {
        self.memento.save()
    }

    /// Persist state ahead of application exit.
    ///
    /// Releases nothing - theme notifications keep flowing until
    /// `dispose()` - and may be called multiple times, re-persisting the
    /// current state each time.
    pub fn shutdown(&self) -> Result<()> {
        self.save_memento()
    }

    /// Release every registered resource (the theme subscription included)
    /// exactly once. The registry is drained, so a second call is a no-op.
    pub fn dispose(&mut self) {
        if self.disposables.is_disposed() {
            return;
        }
        tracing::debug!("component '{}' disposed", self.id);
        self.theme_events = None;
        self.disposables.dispose_all();
    }

    pub fn is_disposed(&self) -> bool {
        self.disposables.is_disposed()
    }

    /// Next queued theme notification, if any. None after dispose.
    fn next_theme_event(&mut self) -> Option<Theme> {
        self.theme_events.as_ref().and_then(ThemeEvents::try_next)
    }

    fn set_theme_snapshot(&mut self, theme: Theme) {
        self.theme = theme;
    }
}

/// Lifecycle contract for shell components.
///
/// Concrete components embed a [`ComponentCore`] and expose it through
/// `core()` / `core_mut()`; the provided methods supply identity, dispatch,
/// and teardown.
pub trait Component {
    fn core(&self) -> &ComponentCore;
    fn core_mut(&mut self) -> &mut ComponentCore;

    /// Immutable component identity.
    fn id(&self) -> &str {
        self.core().id()
    }

    /// Re-apply theme-derived visual properties. No-op by default; invoked
    /// only through `on_theme_change`, never called directly.
    fn update_styles(&mut self, theme: &Theme, styles: &mut StyleCollector) {
        let _ = (theme, styles);
    }

    /// Single dispatch point between a theme-change notification and
    /// `update_styles`: snapshot first, then restyle with the same
    /// arguments.
    fn on_theme_change(&mut self, theme: Theme, styles: &mut StyleCollector) {
        self.core_mut().set_theme_snapshot(theme.clone());
        self.update_styles(&theme, styles);
    }

    /// Feed queued theme notifications through `on_theme_change`, in
    /// delivery order, never reordered or coalesced. Nothing arrives after
    /// `dispose()`; everything queued between `shutdown()` and `dispose()`
    /// still does.
    fn drain_theme_events(&mut self, styles: &mut StyleCollector) {
        while let Some(theme) = self.core_mut().next_theme_event() {
            self.on_theme_change(theme, styles);
        }
    }

    /// Persist state; release nothing. See [`ComponentCore::shutdown`].
    fn shutdown(&self) -> Result<()> {
        self.core().shutdown()
    }

    /// Release owned resources exactly once. See [`ComponentCore::dispose`].
    fn dispose(&mut self) {
        self.core_mut().dispose()
    }
}
