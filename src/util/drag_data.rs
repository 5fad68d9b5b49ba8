//! `DataTransfer` access for project drags.
//!
//! Reads and writes the drag payload under [`PROJECT_MIME`]. Without the
//! `hydrate` feature there is no browser, so reads come back empty and
//! writes do nothing.

use leptos::ev::DragEvent;

#[cfg(feature = "hydrate")]
use crate::state::drag::{DRAG_EFFECT, PROJECT_MIME};

/// Attach `data` as the drag payload and allow only a move.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub fn start_drag(ev: &DragEvent, data: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(transfer) = ev.data_transfer() else {
            return;
        };
        if let Err(err) = transfer.set_data(PROJECT_MIME, data) {
            log::warn!("drag payload not set: {err:?}");
        }
        transfer.set_effect_allowed(DRAG_EFFECT);
    }
}

/// MIME types carried by the drag, in browser order.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub fn payload_types(ev: &DragEvent) -> Vec<String> {
    #[cfg(feature = "hydrate")]
    {
        ev.data_transfer()
            .map(|transfer| transfer.types().iter().filter_map(|t| t.as_string()).collect())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Vec::new()
    }
}

/// The project payload of a drop, if any.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub fn payload(ev: &DragEvent) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let transfer = ev.data_transfer()?;
        match transfer.get_data(PROJECT_MIME) {
            Ok(data) => Some(data),
            Err(err) => {
                log::debug!("drop without readable payload: {err:?}");
                None
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
