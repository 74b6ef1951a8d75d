//! Resume header block
//!
//! Name, role, and contact identifiers rendered at the top of the
//! document. Edited field-by-field through the API; no dialog involved.

use serde::{Deserialize, Serialize};

/// The document header. Empty fields are skipped individually when the
/// contact row is composed.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResumeHeader {
    pub name: String,
    pub role: String,
    pub email: String,
    pub phone: String,
    /// Link target; rendered as an icon plus a "LinkedIn" anchor.
    pub linkedin: String,
    /// Link target; rendered as an icon plus a "GitHub" anchor.
    pub github: String,
}

impl ResumeHeader {
    pub fn field(&self, name: &str) -> Option<&str> {
        match name {
            "name" => Some(&self.name),
            "role" => Some(&self.role),
            "email" => Some(&self.email),
            "phone" => Some(&self.phone),
            "linkedin" => Some(&self.linkedin),
            "github" => Some(&self.github),
            _ => None,
        }
    }

    /// Returns `false` when no header field has that name.
    pub fn set_field(&mut self, name: &str, value: String) -> bool {
        let slot = match name {
            "name" => &mut self.name,
            "role" => &mut self.role,
            "email" => &mut self.email,
            "phone" => &mut self.phone,
            "linkedin" => &mut self.linkedin,
            "github" => &mut self.github,
            _ => return false,
        };
        *slot = value;
        true
    }
}
