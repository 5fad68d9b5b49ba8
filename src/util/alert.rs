//! Blocking user notification.

/// Show `message` in a blocking `window.alert`.
///
/// Outside the browser the message is logged at warn level instead.
pub fn alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            log::warn!("{message}");
            return;
        };
        if let Err(err) = window.alert_with_message(message) {
            log::warn!("alert failed ({err:?}): {message}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        log::warn!("{message}");
    }
}
