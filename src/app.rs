// SPDX-License-Identifier: MPL-2.0

use crate::catalog::{Catalog, CatalogFilter};
use crate::config::Config;
use crate::fl;
use crate::i18n::{Translate, LANGUAGE_LOADER};
use crate::pages;
use crate::widgets::dropdown_filter::{DropdownEvent, DropdownMessage, DropdownState, Selection};
use cosmic::app::context_drawer;
use cosmic::cosmic_config::{self, CosmicConfigEntry};
use cosmic::iced::{Length, Subscription};
use cosmic::prelude::*;
use cosmic::widget::{self, about::About, menu};
use std::collections::HashMap;
use tracing::{debug, error, info};

/// The application model stores app-specific state used to describe its interface and
/// drive its logic.
pub struct AppModel {
    /// Application state which is managed by the COSMIC runtime.
    core: cosmic::Core,
    /// Display a context drawer with the designated page if defined.
    context_page: ContextPage,
    /// The about page for this app.
    about: About,
    /// Key bindings for the application's menu bar.
    key_binds: HashMap<menu::KeyBind, MenuAction>,
    /// Configuration data that persists between application runs.
    pub config: Config,
    /// Cosmic config context for saving
    config_context: Option<cosmic_config::Config>,

    // === App-specific state ===
    /// Filters shown on the page, in catalog order
    pub filters: Vec<FilterEntry>,
}

/// A filter hosted by the application.
#[derive(Debug, Clone)]
pub struct FilterEntry {
    /// Catalog key, used in logs
    pub key: String,
    /// Widget state
    pub state: DropdownState,
    /// Last confirmed value
    pub applied: Selection,
}

impl FilterEntry {
    fn from_catalog(filter: &CatalogFilter, show_prefix: bool) -> Self {
        Self {
            key: filter.key.clone(),
            state: filter.to_state(show_prefix, |key| LANGUAGE_LOADER.instant(key)),
            applied: Selection::empty(filter.multiple),
        }
    }

    /// Routes a widget message into the state and acts on the resulting event.
    pub fn handle(&mut self, message: DropdownMessage) {
        match self.state.update(message) {
            Some(DropdownEvent::Confirm(value)) => {
                info!(
                    filter = %self.key,
                    value = ?value.options().iter().map(|o| o.label.as_str()).collect::<Vec<_>>(),
                    "Filter confirmed"
                );
                self.applied = value;
            }
            Some(DropdownEvent::Cancel) => {
                debug!(filter = %self.key, "Filter cancelled, restoring applied value");
                self.state.set_value(self.applied.clone());
            }
            None => {}
        }
    }
}

/// Builds the hosted filters from a catalog.
pub fn filters_from_catalog(catalog: &Catalog, show_prefix: bool) -> Vec<FilterEntry> {
    catalog
        .filters
        .iter()
        .map(|filter| FilterEntry::from_catalog(filter, show_prefix))
        .collect()
}

/// Messages emitted by the application and its widgets.
#[derive(Debug, Clone)]
pub enum Message {
    // Navigation & UI
    LaunchUrl(String),
    ToggleContextPage(ContextPage),
    UpdateConfig(Config),

    // Settings
    ShowPrefixToggled(bool),

    // Filters
    Filter(usize, DropdownMessage),
}

/// Create a COSMIC application from the app model
impl cosmic::Application for AppModel {
    /// The async executor that will be used to run your application's commands.
    type Executor = cosmic::executor::Default;

    /// Data that your application receives to its init method.
    type Flags = ();

    /// Messages which the application and its widgets will emit.
    type Message = Message;

    /// Unique identifier in RDNN (reverse domain name notation) format.
    const APP_ID: &'static str = "dev.mmurphy.Filterdrop";

    fn core(&self) -> &cosmic::Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut cosmic::Core {
        &mut self.core
    }

    /// Initializes the application with any given flags and startup commands.
    fn init(
        core: cosmic::Core,
        _flags: Self::Flags,
    ) -> (Self, Task<cosmic::Action<Self::Message>>) {
        // Create the about widget
        let about = About::default()
            .name(fl!("app-title"))
            .version(env!("CARGO_PKG_VERSION"))
            .license(env!("CARGO_PKG_LICENSE"));

        // Load configuration
        let config_context = cosmic_config::Config::new(Self::APP_ID, Config::VERSION).ok();
        let config = config_context
            .as_ref()
            .map(|context| match Config::get_entry(context) {
                Ok(config) => config,
                Err((errors, config)) => {
                    error!(?errors, "Errors while loading config");
                    config
                }
            })
            .unwrap_or_default();

        let catalog = Catalog::load_or_builtin(&config.catalog_path);
        let filters = filters_from_catalog(&catalog, config.show_prefix);

        let mut app = AppModel {
            core,
            context_page: ContextPage::default(),
            about,
            key_binds: HashMap::new(),
            config,
            config_context,
            filters,
        };

        // Create a startup command that sets the window title.
        let command = app.update_title();

        (app, command)
    }

    /// Elements to pack at the start of the header bar.
    fn header_start(&self) -> Vec<Element<'_, Self::Message>> {
        let menu_bar = menu::bar(vec![menu::Tree::with_children(
            menu::root(fl!("view")).apply(Element::from),
            menu::items(
                &self.key_binds,
                vec![menu::Item::Button(fl!("about"), None, MenuAction::About)],
            ),
        )]);

        vec![menu_bar.into()]
    }

    /// Display a context drawer if the context page is requested.
    fn context_drawer(&self) -> Option<context_drawer::ContextDrawer<'_, Self::Message>> {
        if !self.core.window.show_context {
            return None;
        }

        Some(match &self.context_page {
            ContextPage::About => context_drawer::about(
                &self.about,
                |url| Message::LaunchUrl(url.to_string()),
                Message::ToggleContextPage(ContextPage::About),
            ),
        })
    }

    /// Describes the interface based on the current state of the application model.
    fn view(&self) -> Element<'_, Self::Message> {
        let space_s = cosmic::theme::spacing().space_s;
        let space_m = cosmic::theme::spacing().space_m;

        widget::container(pages::filters::view(self, space_s, space_m))
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(space_m)
            .into()
    }

    /// Register subscriptions for this application.
    fn subscription(&self) -> Subscription<Self::Message> {
        // Watch for application configuration changes.
        self.core()
            .watch_config::<Config>(Self::APP_ID)
            .map(|update| Message::UpdateConfig(update.config))
    }

    /// Handles messages emitted by the application and its widgets.
    fn update(&mut self, message: Self::Message) -> Task<cosmic::Action<Self::Message>> {
        match message {
            Message::ToggleContextPage(context_page) => {
                if self.context_page == context_page {
                    self.core.window.show_context = !self.core.window.show_context;
                } else {
                    self.context_page = context_page;
                    self.core.window.show_context = true;
                }
            }

            Message::UpdateConfig(config) => {
                if config.catalog_path != self.config.catalog_path {
                    let catalog = Catalog::load_or_builtin(&config.catalog_path);
                    self.filters = filters_from_catalog(&catalog, config.show_prefix);
                }
                self.config = config;
                self.apply_show_prefix();
            }

            Message::LaunchUrl(url) => match open::that_detached(&url) {
                Ok(()) => {}
                Err(err) => {
                    error!(?url, %err, "failed to open url");
                }
            },

            Message::ShowPrefixToggled(show) => {
                info!(show, "Setting prefix visibility");
                self.config.show_prefix = show;
                self.apply_show_prefix();

                if let Some(ref context) = self.config_context {
                    if let Err(err) = self.config.write_entry(context) {
                        error!(?err, "Failed to save prefix setting");
                    }
                }
            }

            Message::Filter(index, msg) => match self.filters.get_mut(index) {
                Some(entry) => entry.handle(msg),
                None => debug!(index, "message for unknown filter"),
            },
        }

        Task::none()
    }
}

impl AppModel {
    /// Updates the header and window titles.
    pub fn update_title(&mut self) -> Task<cosmic::Action<Message>> {
        let mut window_title = fl!("app-title");
        window_title.push_str(" — ");
        window_title.push_str(&fl!("filters"));

        if let Some(id) = self.core.main_window_id() {
            self.set_window_title(window_title, id)
        } else {
            Task::none()
        }
    }

    /// Pushes the configured prefix visibility into every filter.
    fn apply_show_prefix(&mut self) {
        for entry in &mut self.filters {
            entry.state.set_show_prefix(self.config.show_prefix);
        }
    }
}

/// The context page to display in the context drawer.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum ContextPage {
    #[default]
    About,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MenuAction {
    About,
}

impl menu::action::MenuAction for MenuAction {
    type Message = Message;

    fn message(&self) -> Self::Message {
        match self {
            MenuAction::About => Message::ToggleContextPage(ContextPage::About),
        }
    }
}
