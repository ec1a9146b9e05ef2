use std::borrow::Cow;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::error::RouteError;
use crate::input::{KeyPhase, PointerPhase};

use super::keys::key_code;
use super::record::{Consumable, KeyEvent, PointerEvent};

/// Which keys a key listener is interested in.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeyTarget {
    /// Every key, written `"*"`.
    Any,
    /// One key by symbolic name, e.g. `"left arrow"`.
    Key(Cow<'static, str>),
}

impl KeyTarget {
    pub fn parse(name: impl Into<Cow<'static, str>>) -> Self {
        let name = name.into();
        if name == "*" { KeyTarget::Any } else { KeyTarget::Key(name) }
    }
}

impl From<&'static str> for KeyTarget {
    fn from(name: &'static str) -> Self {
        KeyTarget::parse(name)
    }
}

impl From<String> for KeyTarget {
    fn from(name: String) -> Self {
        KeyTarget::parse(name)
    }
}

impl fmt::Display for KeyTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyTarget::Any => f.write_str("*"),
            KeyTarget::Key(name) => write!(f, "'{name}'"),
        }
    }
}

/// Shared event callback.
///
/// Identity is the allocation: clones of one `Listener` compare equal, two
/// listeners built from identical closures do not. Keep a clone around to
/// unsubscribe later.
pub struct Listener<C, E>(Rc<RefCell<dyn FnMut(&mut C, &mut E)>>);

impl<C, E> Listener<C, E> {
    pub fn new(f: impl FnMut(&mut C, &mut E) + 'static) -> Self {
        Listener(Rc::new(RefCell::new(f)))
    }

    /// Runs the callback. A listener that is already running (a listener
    /// re-entering dispatch on itself) is skipped.
    pub fn call(&self, ctx: &mut C, event: &mut E) {
        match self.0.try_borrow_mut() {
            Ok(mut f) => (&mut *f)(ctx, event),
            Err(_) => log::warn!("listener re-entered during its own dispatch, skipping"),
        }
    }
}

impl<C, E> Clone for Listener<C, E> {
    fn clone(&self) -> Self {
        Listener(Rc::clone(&self.0))
    }
}

impl<C, E> PartialEq for Listener<C, E> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<C, E> Eq for Listener<C, E> {}

impl<C, E> fmt::Debug for Listener<C, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Listener({:p})", Rc::as_ptr(&self.0) as *const ())
    }
}

/// Delivers `event` to `listeners` from last to first, stopping once the
/// event is consumed. Returns how many listeners ran.
pub fn route<C, E: Consumable>(ctx: &mut C, listeners: &[Listener<C, E>], event: &mut E) -> usize {
    let mut ran = 0;
    for listener in listeners.iter().rev() {
        if event.is_consumed() {
            log::trace!("event consumed after {ran} listener(s)");
            break;
        }
        listener.call(ctx, event);
        ran += 1;
    }
    ran
}

/// Subscription tables for the keyboard and pointer channels.
///
/// `C` is the context listeners receive alongside the event (the session).
pub struct EventRouter<C> {
    keys: HashMap<(KeyPhase, KeyTarget), Vec<Listener<C, KeyEvent>>>,
    pointer: HashMap<PointerPhase, Vec<Listener<C, PointerEvent>>>,
}

impl<C> EventRouter<C> {
    pub fn new() -> Self {
        Self { keys: HashMap::new(), pointer: HashMap::new() }
    }

    /// Adds `listener` for `phase` on `target`. Subscribing twice is a no-op.
    pub fn subscribe_key(&mut self, phase: KeyPhase, target: impl Into<KeyTarget>, listener: Listener<C, KeyEvent>) {
        let target = target.into();
        if let KeyTarget::Key(name) = &target {
            if key_code(name).is_none() {
                log::warn!("subscribing to {phase} for unknown key '{name}'; it will never fire");
            }
        }
        let list = self.keys.entry((phase, target)).or_default();
        if !list.contains(&listener) {
            list.push(listener);
        }
    }

    pub fn unsubscribe_key(
        &mut self,
        phase: KeyPhase,
        target: impl Into<KeyTarget>,
        listener: &Listener<C, KeyEvent>,
    ) -> Result<(), RouteError> {
        let target = target.into();
        let key = (phase, target);
        let removed = self.keys.get_mut(&key).is_some_and(|list| remove_one(list, listener));
        if !removed {
            let (phase, target) = key;
            return Err(RouteError::KeyNotSubscribed { phase, target });
        }
        if self.keys.get(&key).is_some_and(Vec::is_empty) {
            self.keys.remove(&key);
        }
        Ok(())
    }

    /// Adds `listener` for pointer `phase`. Subscribing twice is a no-op.
    pub fn subscribe_pointer(&mut self, phase: PointerPhase, listener: Listener<C, PointerEvent>) {
        let list = self.pointer.entry(phase).or_default();
        if !list.contains(&listener) {
            list.push(listener);
        }
    }

    pub fn unsubscribe_pointer(
        &mut self,
        phase: PointerPhase,
        listener: &Listener<C, PointerEvent>,
    ) -> Result<(), RouteError> {
        let removed = self.pointer.get_mut(&phase).is_some_and(|list| remove_one(list, listener));
        if !removed {
            return Err(RouteError::PointerNotSubscribed(phase));
        }
        if self.pointer.get(&phase).is_some_and(Vec::is_empty) {
            self.pointer.remove(&phase);
        }
        Ok(())
    }

    /// Listeners for one key notification, in registration order: those for
    /// the named key first, then the wildcard ones. [`route`] walks this list
    /// backwards, so the most recent wildcard listener runs first.
    pub fn key_snapshot(&self, phase: KeyPhase, key: Option<&'static str>) -> Vec<Listener<C, KeyEvent>> {
        let mut out = Vec::new();
        if let Some(name) = key {
            if let Some(list) = self.keys.get(&(phase, KeyTarget::Key(Cow::Borrowed(name)))) {
                out.extend(list.iter().cloned());
            }
        }
        if let Some(list) = self.keys.get(&(phase, KeyTarget::Any)) {
            out.extend(list.iter().cloned());
        }
        out
    }

    /// Listeners for one pointer notification, in registration order.
    pub fn pointer_snapshot(&self, phase: PointerPhase) -> Vec<Listener<C, PointerEvent>> {
        self.pointer.get(&phase).cloned().unwrap_or_default()
    }

    /// Drops every subscription.
    pub fn clear(&mut self) {
        self.keys.clear();
        self.pointer.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty() && self.pointer.is_empty()
    }

    /// Total number of subscriptions across both channels.
    pub fn len(&self) -> usize {
        self.keys.values().map(Vec::len).sum::<usize>() + self.pointer.values().map(Vec::len).sum::<usize>()
    }
}

impl<C> Default for EventRouter<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> fmt::Debug for EventRouter<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventRouter")
            .field("key_lists", &self.keys.len())
            .field("pointer_lists", &self.pointer.len())
            .field("subscriptions", &self.len())
            .finish()
    }
}

fn remove_one<T: PartialEq>(list: &mut Vec<T>, item: &T) -> bool {
    match list.iter().position(|l| l == item) {
        Some(i) => {
            list.remove(i);
            true
        }
        None => false,
    }
}
