//! Disclosure Handle
//!
//! Lets code outside a disclosure container (an explorer button, a parent
//! page) drive its open state without holding a strong reference to it.

use gpui::{App, Context, Entity, SharedString, WeakEntity};

use crate::error::{Error, Result};
use crate::state::DisclosureState;

/// A view that owns a `DisclosureState`
pub trait DisclosureOwner: 'static {
    /// Name used in misuse errors, e.g. "an Accordion"
    const CONTAINER: &'static str;

    fn disclosure(&self) -> &DisclosureState<SharedString>;

    fn disclosure_mut(&mut self) -> &mut DisclosureState<SharedString>;
}

/// Weak reference to a disclosure container
pub struct DisclosureHandle<T: DisclosureOwner> {
    owner: WeakEntity<T>,
}

impl<T: DisclosureOwner> Clone for DisclosureHandle<T> {
    fn clone(&self) -> Self {
        Self {
            owner: self.owner.clone(),
        }
    }
}

impl<T: DisclosureOwner> DisclosureHandle<T> {
    pub fn new(owner: &Entity<T>) -> Self {
        Self {
            owner: owner.downgrade(),
        }
    }

    pub fn from_context(cx: &Context<T>) -> Self {
        Self {
            owner: cx.weak_entity(),
        }
    }

    fn released() -> Error {
        Error::OutsideContainer {
            component: "DisclosureHandle",
            container: T::CONTAINER,
        }
    }

    /// Toggle `key` in the owning container, returning whether it is now open
    pub fn toggle(&self, key: impl Into<SharedString>, cx: &mut App) -> Result<bool> {
        let key = key.into();
        self.owner
            .update(cx, |owner, cx| {
                let open = owner.disclosure_mut().toggle(key);
                cx.notify();
                open
            })
            .map_err(|_| Self::released())
    }

    pub fn is_open(&self, key: &SharedString, cx: &App) -> Result<bool> {
        let owner = self.owner.upgrade().ok_or_else(Self::released)?;
        Ok(owner.read(cx).disclosure().is_open(key))
    }

    pub fn collapse_all(&self, cx: &mut App) -> Result<()> {
        self.owner
            .update(cx, |owner, cx| {
                owner.disclosure_mut().collapse_all();
                cx.notify();
            })
            .map_err(|_| Self::released())
    }
}
