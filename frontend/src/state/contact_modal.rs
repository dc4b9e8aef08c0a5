use log::{debug, info, warn};
use serde::Serialize;

/// Fields collected by the waitlist dialog.
///
/// Only first name, last name and email are marked required, and that is
/// enforced by the inputs themselves. Nothing here rejects a blank form.
#[derive(Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct WaitlistForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub institution: String,
    pub research_field: String,
    pub project: String,
}

impl WaitlistForm {
    /// Names of required fields that are blank.
    pub fn missing_required(&self) -> Vec<&'static str> {
        [
            ("first_name", &self.first_name),
            ("last_name", &self.last_name),
            ("email", &self.email),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}

/// Visibility of the one waitlist dialog shared by every call-to-action.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactModalState {
    visible: bool,
}

impl ContactModalState {
    pub fn open(&mut self) {
        self.visible = true;
        debug!("waitlist modal opened");
    }

    pub fn close(&mut self) {
        self.visible = false;
        debug!("waitlist modal closed");
    }

    /// Accepts the form and closes the dialog. Delivery is left to a
    /// submission service this page does not have yet.
    pub fn submit(&mut self, form: &WaitlistForm) {
        let missing = form.missing_required();
        info!(
            "waitlist request received ({} required fields blank)",
            missing.len()
        );
        match serde_json::to_string(form) {
            Ok(payload) => debug!("waitlist payload: {}", payload),
            Err(e) => warn!("waitlist payload not serializable: {}", e),
        }
        self.close();
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}
