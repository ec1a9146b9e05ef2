//! Event routing.
//!
//! Raw keyboard and pointer notifications become [`KeyEvent`] and
//! [`PointerEvent`] records, which are delivered to subscribed
//! [`Listener`]s newest-first until one of them consumes the event.

mod keys;
mod record;
mod router;

pub use keys::{key_code, key_name};
pub use record::{Consumable, KeyEvent, PointerEvent};
pub use router::{EventRouter, KeyTarget, Listener, route};
