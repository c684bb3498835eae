// Copyright (C) 2026 Molly Wallet Installer contributors
// Licensed under GPL-3.0-or-later

use super::InstallerApp;
use egui_thematic::ThemeConfig;

// Molly palette
const BG: [u8; 4] = [19, 19, 19, 255];
const SURFACE: [u8; 4] = [30, 31, 38, 255];
const ACCENT: [u8; 4] = [82, 112, 255, 255];
const TEXT: [u8; 4] = [236, 238, 245, 255];
const MUTED: [u8; 4] = [132, 137, 156, 255];

impl InstallerApp {
    pub(super) fn get_theme_config(&self) -> ThemeConfig {
        ThemeConfig {
            name: "Molly".to_string(),
            dark_mode: true,
            override_text_color: Some(TEXT),
            override_weak_text_color: Some(MUTED),
            override_hyperlink_color: Some(ACCENT),
            override_faint_bg_color: Some(SURFACE),
            override_extreme_bg_color: Some(BG),
            override_code_bg_color: Some(SURFACE),
            override_warn_fg_color: Some([245, 166, 35, 255]),
            override_error_fg_color: Some([235, 87, 87, 255]),
            override_window_fill: Some(SURFACE),
            override_window_stroke_color: Some([52, 55, 68, 255]),
            override_window_stroke_width: Some(1.0),
            override_window_corner_radius: None,
            override_window_shadow_size: None,
            override_panel_fill: Some(BG),
            override_popup_shadow_size: None,
            override_selection_bg: Some(ACCENT),
            override_selection_stroke_color: None,
            override_selection_stroke_width: None,
            override_widget_noninteractive_bg_fill: None,
            override_widget_noninteractive_weak_bg_fill: None,
            override_widget_noninteractive_bg_stroke_color: None,
            override_widget_noninteractive_bg_stroke_width: None,
            override_widget_noninteractive_corner_radius: None,
            override_widget_noninteractive_fg_stroke_color: None,
            override_widget_noninteractive_fg_stroke_width: None,
            override_widget_noninteractive_expansion: None,
            override_widget_inactive_bg_fill: Some([44, 46, 58, 255]),
            override_widget_inactive_weak_bg_fill: Some([44, 46, 58, 255]),
            override_widget_inactive_bg_stroke_color: None,
            override_widget_inactive_bg_stroke_width: None,
            override_widget_inactive_corner_radius: None,
            override_widget_inactive_fg_stroke_color: Some(TEXT),
            override_widget_inactive_fg_stroke_width: None,
            override_widget_inactive_expansion: None,
            override_widget_hovered_bg_fill: Some([82, 112, 255, 90]),
            override_widget_hovered_weak_bg_fill: Some([82, 112, 255, 90]),
            override_widget_hovered_bg_stroke_color: Some(ACCENT),
            override_widget_hovered_bg_stroke_width: None,
            override_widget_hovered_corner_radius: None,
            override_widget_hovered_fg_stroke_color: None,
            override_widget_hovered_fg_stroke_width: None,
            override_widget_hovered_expansion: None,
            override_widget_active_bg_fill: Some([82, 112, 255, 160]),
            override_widget_active_weak_bg_fill: None,
            override_widget_active_bg_stroke_color: Some(ACCENT),
            override_widget_active_bg_stroke_width: None,
            override_widget_active_corner_radius: None,
            override_widget_active_fg_stroke_color: None,
            override_widget_active_fg_stroke_width: None,
            override_widget_active_expansion: None,
            override_widget_open_bg_fill: None,
            override_widget_open_weak_bg_fill: None,
            override_widget_open_bg_stroke_color: None,
            override_widget_open_bg_stroke_width: None,
            override_widget_open_corner_radius: None,
            override_widget_open_fg_stroke_color: None,
            override_widget_open_fg_stroke_width: None,
            override_widget_open_expansion: None,
            override_resize_corner_size: None,
            override_text_cursor_width: None,
            override_clip_rect_margin: None,
            override_button_frame: None,
            override_collapsing_header_frame: None,
            override_indent_has_left_vline: None,
            override_striped: None,
            override_slider_trailing_fill: None,
        }
    }
}
