//! The option-presentation orchestrator.
//!
//! One `OptionsView` runs the full lifecycle of a decision point: size the
//! widget pool, bind and reveal the options that may be shown, recap the
//! last spoken line, fade the container in, capture exactly one selection,
//! fade back out, and hand the chosen id to the runner's callback.
//!
//! Fades are launched fire-and-forget on the tokio runtime: the caller is
//! never blocked by a transition, and fade outcomes are observed only
//! inside the spawned task, where faults are logged and the surface is
//! forced into its final state. The selection handoff must survive any fade
//! fault - the runner is never left waiting on a callback because an
//! animation died.

use std::sync::Arc;

use parking_lot::Mutex;
use skein_protocol::{DialogueLine, DialogueOption, OptionId};

use crate::config::{HostSurfaces, OptionsViewConfig};
use crate::effects::{FadeEffect, TimedFade};
use crate::error::OptionsViewError;
use crate::host::{
    FadeSurface, MarkupPalette, OptionBinding, OptionWidget, OptionWidgetFactory, SelectionHook,
};
use crate::pool::OptionPool;
use crate::recap::RecapPresenter;

/// Callback handed to [`OptionsView::present_options`]; receives the id of
/// the chosen option. Fires at most once per presentation cycle.
pub type SelectionCallback = Box<dyn FnOnce(OptionId) + Send>;

/// Mutable state of the current presentation cycle.
///
/// Swapped wholesale when a new presentation begins. The cycle counter tags
/// widget bindings so selection notifications that outlive their
/// presentation can be recognized and dropped.
#[derive(Default)]
struct CycleState {
    cached_line: Option<DialogueLine>,
    pending: Option<SelectionCallback>,
    cycle: u64,
}

struct ViewInner {
    config: OptionsViewConfig,
    container: Arc<dyn FadeSurface>,
    factory: Arc<dyn OptionWidgetFactory>,
    palette: Option<Arc<dyn MarkupPalette>>,
    effect: Arc<dyn FadeEffect>,
    recap: RecapPresenter,
    pool: Mutex<OptionPool>,
    cycle: Mutex<CycleState>,
}

/// Presents dialogue options and reports the player's choice.
///
/// Cheaply cloneable handle; clones share the same pool and cycle state.
/// All methods are synchronous and non-blocking, but the view spawns its
/// fade transitions, so it must live inside a tokio runtime.
#[derive(Clone)]
pub struct OptionsView {
    inner: Arc<ViewInner>,
}

impl OptionsView {
    /// Builds a view using the stock [`TimedFade`] driver.
    pub fn new(config: OptionsViewConfig, host: HostSurfaces) -> Self {
        Self::with_effect(config, host, Arc::new(TimedFade))
    }

    /// Builds a view with a host-supplied fade primitive.
    ///
    /// The container and recap surfaces start hidden.
    pub fn with_effect(
        config: OptionsViewConfig,
        host: HostSurfaces,
        effect: Arc<dyn FadeEffect>,
    ) -> Self {
        let recap = RecapPresenter::new(host.recap_text, host.speaker_text, host.palette.clone());
        host.container.set_visible(false);
        Self {
            inner: Arc::new(ViewInner {
                config,
                container: host.container,
                factory: host.factory,
                palette: host.palette,
                effect,
                recap,
                pool: Mutex::new(OptionPool::new()),
                cycle: Mutex::new(CycleState::default()),
            }),
        }
    }

    /// Records `line` as the recap source and acknowledges immediately.
    ///
    /// This view never displays lines as they are spoken; it is a passive
    /// recorder, and `ack` is invoked synchronously before returning so
    /// line delivery is never held up.
    pub fn deliver_line(&self, line: DialogueLine, ack: impl FnOnce()) {
        self.inner.cycle.lock().cached_line = Some(line);
        ack();
    }

    /// Presents an option set and stores `on_selected` for the cycle.
    ///
    /// Options are bound to pooled widgets in input order; unavailable
    /// options stay hidden unless the view is configured to show them. The
    /// first visible slot receives default focus. Returns once the fade-in
    /// has been launched - it does not wait for the transition.
    ///
    /// A presentation already in flight is replaced: its bindings are
    /// overwritten and its callback is discarded without being invoked.
    ///
    /// # Errors
    ///
    /// [`OptionsViewError::WidgetCreation`] when the pool cannot grow to
    /// hold the option set; the presentation is aborted.
    pub fn present_options(
        &self,
        options: &[DialogueOption],
        on_selected: impl FnOnce(OptionId) + Send + 'static,
    ) -> Result<(), OptionsViewError> {
        let inner = &self.inner;

        // Entering a new cycle invalidates the previous one before any
        // widget is touched: stale bindings stop matching, and a stale
        // callback is dropped unfired.
        let cycle = {
            let mut state = inner.cycle.lock();
            state.cycle = state.cycle.wrapping_add(1);
            state.pending = None;
            state.cycle
        };

        inner.container.set_visible(false);

        let mut pool = inner.pool.lock();
        pool.hide_all();
        pool.ensure_capacity(options.len(), &*inner.factory, &self.selection_hook())?;

        let mut focused: Option<Arc<dyn OptionWidget>> = None;
        for (slot, option) in pool.slots().zip(options.iter()) {
            if !option.is_available && !inner.config.show_unavailable() {
                continue;
            }
            slot.bind(OptionBinding {
                option: option.clone(),
                display_text: self.display_text(&option.text),
                cycle,
            });
            slot.set_visible(true);
            // The first visible option is focused by default.
            if focused.is_none() {
                slot.grab_focus();
                focused = Some(Arc::clone(slot));
            }
        }
        drop(pool);

        let line = inner.cycle.lock().cached_line.clone();
        if let Some(line) = &line {
            inner.recap.show(line);
        }

        inner.cycle.lock().pending = Some(Box::new(on_selected));

        inner.container.set_visible(true);
        Self::spawn_fade(inner, 0.0, 1.0, "present_options");

        // Focus can get lost while the host is still wiring freshly created
        // widgets into its scene; re-apply it once everything is in place.
        if let Some(slot) = focused {
            slot.grab_focus();
        }

        Ok(())
    }

    /// Ends an abandoned presentation when the dialogue session closes.
    ///
    /// No-op unless the option container is still visible. Otherwise the
    /// cached line and pending callback are cleared, the recap and the
    /// container are hidden immediately, and a cosmetic fade-out runs from
    /// whatever alpha the container currently holds.
    pub fn dialogue_complete(&self) {
        let inner = &self.inner;
        if !inner.container.is_visible() {
            return;
        }

        {
            let mut state = inner.cycle.lock();
            state.cached_line = None;
            state.pending = None;
        }
        inner.recap.hide();
        inner.container.set_visible(false);

        let from = inner.container.alpha();
        Self::spawn_fade(inner, from, 0.0, "dialogue_complete");
    }

    /// Hook registered on every pooled widget.
    ///
    /// Holds the view weakly: widgets live in the pool inside the view, so
    /// a strong reference here would cycle and keep everything alive.
    fn selection_hook(&self) -> SelectionHook {
        let weak = Arc::downgrade(&self.inner);
        Arc::new(move |binding| {
            if let Some(inner) = weak.upgrade() {
                ViewInner::widget_selected(inner, binding);
            }
        })
    }

    fn display_text(&self, text: &str) -> String {
        match &self.inner.palette {
            Some(palette) => palette.decorate(text),
            None => text.to_string(),
        }
    }

    /// Launches a fire-and-forget fade on the option container.
    ///
    /// The outcome is observed only here: a fault is logged with the
    /// operation it interrupted and the surface is forced to the target
    /// alpha so the container still ends in its final state.
    fn spawn_fade(inner: &Arc<ViewInner>, from: f32, to: f32, operation: &'static str) {
        let effect = Arc::clone(&inner.effect);
        let surface = Arc::clone(&inner.container);
        let duration = inner.config.fade_duration();
        tokio::spawn(async move {
            if let Err(err) = effect.fade(Arc::clone(&surface), from, to, duration).await {
                tracing::error!("fade failed during {operation} on OptionsView: {err}");
                surface.set_alpha(to);
            }
        });
    }
}

impl ViewInner {
    /// Called through the selection hook when a widget commits its option.
    ///
    /// The pending callback is taken synchronously, so only the first
    /// notification of a cycle wins: repeats and notifications tagged with
    /// a superseded cycle are dropped. The exit sequence - fade out, hide
    /// container and recap, invoke the callback - runs detached from the
    /// notifying widget, and the callback fires even if the fade faults.
    fn widget_selected(inner: Arc<ViewInner>, binding: OptionBinding) {
        let callback = {
            let mut state = inner.cycle.lock();
            if binding.cycle != state.cycle {
                tracing::debug!(
                    option = %binding.option.id,
                    "ignoring selection from a superseded presentation"
                );
                return;
            }
            match state.pending.take() {
                Some(callback) => callback,
                None => {
                    tracing::debug!(
                        option = %binding.option.id,
                        "ignoring repeat selection, cycle already resolved"
                    );
                    return;
                }
            }
        };

        let chosen = binding.option.id;
        let duration = inner.config.fade_duration();
        tokio::spawn(async move {
            let surface = Arc::clone(&inner.container);
            if let Err(err) = inner.effect.fade(Arc::clone(&surface), 1.0, 0.0, duration).await {
                tracing::error!("fade failed during widget_selected on OptionsView: {err}");
                surface.set_alpha(0.0);
            }
            surface.set_visible(false);
            inner.recap.hide();
            callback(chosen);
        });
    }
}
