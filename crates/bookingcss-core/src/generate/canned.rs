//! Fixed CSS blocks bound to the advanced toggles.

/// Labels of the `/* Advanced: <label> */` marker comments.
pub const DISCOUNT_BUTTON_FIX: &str = "discount button height fix";
pub const PLUGIN_MARGIN_FIX: &str = "plugin margin fix";
pub const AUTO_EXPAND_DESCRIPTION: &str = "auto-expand description";
pub const CONTACT_GUIDE_ALIGNMENT: &str = "contact guide alignment";
pub const MOBILE_CHECKOUT_TITLE_COLOR: &str = "mobile checkout title color";

pub(crate) const DARK_THEME: &str = "\
.booking-widget {
  color-scheme: dark;
}

.booking-widget .panel, .booking-widget .page-content, .booking-widget .modal-content {
  background-color: var(--color-background, #121212) !important;
  color: var(--color-body, #f1f1f1) !important;
}

.booking-widget hr, .booking-widget .detail-row {
  border-color: rgba(255, 255, 255, 0.15) !important;
}
";

pub(crate) const DISCOUNT_BUTTON: &str = "\
.discount-form .button {
  height: auto !important;
  align-self: stretch !important;
  padding-top: 0 !important;
  padding-bottom: 0 !important;
}
";

pub(crate) const MODAL_DARK_MODE: &str = "\
.modal-content .modal-header, .modal-content .modal-footer {
  border-color: rgba(255, 255, 255, 0.15) !important;
}

.modal-content .modal-close {
  filter: invert(1) !important;
}
";

pub(crate) const AUTO_EXPAND: &str = "\
.experience-description {
  max-height: none !important;
  overflow: visible !important;
}

.experience-description .read-more {
  display: none !important;
}
";

pub(crate) const CONTACT_GUIDE: &str = "\
.contact-guide {
  display: flex !important;
  align-items: center !important;
  gap: 0.75em !important;
  text-align: left !important;
}
";
