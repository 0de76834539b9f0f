use serde::{Deserialize, Serialize};

/// Verdict the backend computed from its own reachability probes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendVerdict {
    pub valid: bool,
    pub reason: Option<String>,
}

impl BackendVerdict {
    /// Reason text, ignoring blank strings.
    pub fn supplied_reason(&self) -> Option<&str> {
        self.reason
            .as_deref()
            .filter(|reason| !reason.trim().is_empty())
    }
}

/// Strict contact shape the engine works on. Built once from a [`crate::dto::ContactRecord`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: Option<String>,
    pub email: Option<String>,
    pub email_valid: Option<bool>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub website_valid: Option<bool>,
    pub backend_verdict: Option<BackendVerdict>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
}

impl Contact {
    pub fn phone_trimmed(&self) -> Option<&str> {
        non_blank(self.phone.as_deref())
    }

    pub fn has_email(&self) -> bool {
        non_blank(self.email.as_deref()).is_some()
    }

    pub fn has_phone(&self) -> bool {
        self.phone_trimmed().is_some()
    }

    pub fn has_website(&self) -> bool {
        non_blank(self.website.as_deref()).is_some()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}
