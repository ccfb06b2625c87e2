// SPDX-License-Identifier: MPL-2.0
//! Default values for configuration settings.

// ==========================================================================
// Logging Defaults
// ==========================================================================

/// Tracing filter used when neither `RUST_LOG` nor `[logging] filter` is set.
pub const DEFAULT_LOG_FILTER: &str = "warn";

// ==========================================================================
// Contact Form Defaults
// ==========================================================================

/// Form-submission endpoint the contact payload is shaped for.
pub const DEFAULT_CONTACT_ENDPOINT: &str = "https://api.web3forms.com/submit";

/// Longest accepted contact name, in characters.
pub const MAX_CONTACT_NAME_CHARS: usize = 100;

/// Longest accepted contact email, in characters.
pub const MAX_CONTACT_EMAIL_CHARS: usize = 255;

/// Longest accepted contact message, in characters.
pub const MAX_CONTACT_MESSAGE_CHARS: usize = 2000;

// ==========================================================================
// Content Defaults
// ==========================================================================

/// Projects shown on the home page before "View All Projects".
pub const FEATURED_PROJECT_COUNT: usize = 6;
