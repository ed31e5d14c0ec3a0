//! Document contract and timings.
//!
//! `UiConfig::default()` matches the site's markup. Pages with different
//! markup can pass a partial object from JS; missing fields keep their
//! defaults.

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UiConfig {
    // Navigation
    pub header_id: String,
    pub hamburger_selector: String,
    pub nav_list_selector: String,
    pub close_menu_selector: String,
    pub nav_link_selector: String,

    // Scroll effects
    pub scroll_threshold: f64,
    pub reveal_selectors: Vec<String>,
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
    pub anchor_selector: String,

    // Inquiry form
    pub form_id: String,
    pub form_status_id: String,
    pub form_button_selector: String,
    pub sending_label: String,
    pub sent_label: String,
    pub sent_message: String,
    pub sent_button_color: String,
    pub sent_message_color: String,
    pub sending_delay_ms: u32,
    pub sent_duration_ms: u32,

    // Slider
    pub slider_track_selector: String,
    pub slide_selector: String,
    pub slider_next_selector: String,
    pub slider_prev_selector: String,
    pub slider_container_selector: String,
    pub autoplay_interval_ms: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            header_id: "header".into(),
            hamburger_selector: ".hamburger".into(),
            nav_list_selector: ".nav-list".into(),
            close_menu_selector: ".close-menu".into(),
            nav_link_selector: ".nav-link".into(),

            scroll_threshold: 50.0,
            reveal_selectors: vec![
                ".fade-in-up".into(),
                ".reveal-left".into(),
                ".reveal-right".into(),
                ".reveal-up".into(),
            ],
            reveal_threshold: 0.1,
            reveal_root_margin: "0px 0px -50px 0px".into(),
            anchor_selector: "a[href^=\"#\"]".into(),

            form_id: "inquiryForm".into(),
            form_status_id: "formStatus".into(),
            form_button_selector: "button".into(),
            sending_label: "Sending...".into(),
            sent_label: "Sent Successfully!".into(),
            sent_message: "Thank you! We'll be in touch shortly.".into(),
            sent_button_color: "var(--color-accent)".into(),
            sent_message_color: "var(--color-primary)".into(),
            sending_delay_ms: 1000,
            sent_duration_ms: 3000,

            slider_track_selector: ".slider-track".into(),
            slide_selector: ".slide".into(),
            slider_next_selector: ".next-btn".into(),
            slider_prev_selector: ".prev-btn".into(),
            slider_container_selector: ".slider-container".into(),
            autoplay_interval_ms: 5000,
        }
    }
}

impl UiConfig {
    /// All reveal selectors joined into one selector list.
    pub fn reveal_selector_list(&self) -> String {
        self.reveal_selectors.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timings() {
        let config = UiConfig::default();
        assert_eq!(config.scroll_threshold, 50.0);
        assert_eq!(config.sending_delay_ms, 1000);
        assert_eq!(config.sent_duration_ms, 3000);
        assert_eq!(config.autoplay_interval_ms, 5000);
    }

    #[test]
    fn test_reveal_selector_list() {
        let config = UiConfig::default();
        insta::assert_snapshot!(
            config.reveal_selector_list(),
            @".fade-in-up, .reveal-left, .reveal-right, .reveal-up"
        );
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: UiConfig =
            serde_json::from_str(r#"{"autoplayIntervalMs": 8000, "headerId": "site-header"}"#)
                .unwrap();
        assert_eq!(config.autoplay_interval_ms, 8000);
        assert_eq!(config.header_id, "site-header");
        assert_eq!(config.hamburger_selector, ".hamburger");
        assert_eq!(config.sending_delay_ms, 1000);
    }
}
