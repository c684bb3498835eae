// Copyright (C) 2026 Molly Wallet Installer contributors
// Licensed under GPL-3.0-or-later

use crate::bridge::{Bridge, BridgeEvent, Notification, Operation, Outcome};
use crate::config::setup_theme;
use crate::router::Router;
use crate::store::Store;
use egui_thematic::ThemeEditorState;
use std::sync::{Arc, Mutex};
use tokio::runtime::Runtime;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

pub struct InstallerApp {
    // Runtime for async operations
    pub(super) runtime: Runtime,

    // Navigation and the shared progress store
    pub(super) router: Router,
    pub(super) store: Store,

    // Backend -> UI events
    pub(super) bridge: Bridge,
    pub(super) events_rx: mpsc::UnboundedReceiver<BridgeEvent>,

    // Operation in flight, and how the last one ended
    pub(super) running: Option<Operation>,
    pub(super) last_outcome: Option<(Operation, Outcome)>,
    pub(super) cancel_token: Option<CancellationToken>,

    // Uninstall asks before touching anything
    pub(super) confirm_uninstall: bool,

    // Notices waiting for the user to dismiss them, oldest first
    pub(super) notices: Vec<Notification>,
    pub(super) log_messages: Arc<Mutex<Vec<String>>>,

    // Theme editor
    pub(super) theme_state: ThemeEditorState,
    pub(super) show_theme_editor: bool,
    pub(super) show_log: bool,
    pub(super) last_system_dark_mode: bool,
}

impl InstallerApp {
    /// Build the UI root. Called once the native window is ready.
    pub fn new(cc: &eframe::CreationContext<'_>, router: Router) -> std::io::Result<Self> {
        // Apply theme from config
        setup_theme(&cc.egui_ctx);

        let runtime = Runtime::new()?;
        let (bridge, events_rx) = Bridge::new(Some(cc.egui_ctx.clone()));
        let is_dark = cc.egui_ctx.style().visuals.dark_mode;

        let mut app = Self {
            runtime,
            router,
            store: Store::new(),
            bridge,
            events_rx,
            running: None,
            last_outcome: None,
            cancel_token: None,
            confirm_uninstall: true,
            notices: Vec::new(),
            log_messages: Arc::new(Mutex::new(Vec::new())),
            theme_state: ThemeEditorState::default(),
            show_theme_editor: false,
            show_log: false,
            last_system_dark_mode: is_dark,
        };

        app.theme_state.current_config = app.get_theme_config();
        app.log(&format!("{} ready", crate::config::WINDOW_TITLE));

        Ok(app)
    }
}
