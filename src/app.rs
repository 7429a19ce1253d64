//! Application state and the iced update/view loop.
//!
//! Each widget message maps to exactly one [`FilterEvent`]; the resulting
//! [`FilterState`] replaces the previous one and the listing is rebuilt from it.

use iced::keyboard::{self, Key};
use iced::widget::{column, container, row, text, Space};
use iced::{event, window, Background, Border, Element, Event, Length, Subscription, Task, Theme};
use reqwest::Client;

use crate::catalog::Catalog;
use crate::companies::{company_tags, CompanyTag};
use crate::config::{Config, ThemeChoice};
use crate::filter::{Filter, FilterEngine, FilterEvent, FilterState};
use crate::images::{self, ImageCache, ImageSource};
use crate::render::Listing;
use crate::ui::theme::{self, Palette};
use crate::ui::{company_bar, product_list, search_bar};

// ============================================================================
// Application State
// ============================================================================

pub struct ProductFilter {
    engine: FilterEngine,
    state: FilterState,
    listing: Listing,
    tags: Vec<CompanyTag>,
    query: String,
    /// Marked company button; `None` while a text search is active.
    active_company: Option<CompanyTag>,
    images: ImageCache,
    theme: ThemeChoice,
}

#[derive(Debug, Clone)]
pub enum Message {
    QueryChanged(String),
    QuerySubmitted,
    QueryCleared,
    CompanySelected(CompanyTag),
    EscapePressed,
    ImageLoaded(String, Result<Vec<u8>, String>),
}

impl ProductFilter {
    pub fn new(catalog: Catalog, config: &Config) -> Self {
        let tags = company_tags(catalog.as_slice());
        let engine = FilterEngine::new(catalog);
        let state = engine.initial();
        let listing = Listing::from_products(state.products(engine.catalog()));

        Self {
            engine,
            state,
            listing,
            tags,
            query: String::new(),
            active_company: Some(CompanyTag::All),
            images: ImageCache::default(),
            theme: config.theme,
        }
    }

    /// Initial state plus the downloads for remote product images.
    pub fn boot(catalog: Catalog, config: &Config) -> (Self, Task<Message>) {
        let mut app = Self::new(catalog, config);
        let task = if config.remote_images {
            app.load_images(Client::new())
        } else {
            Task::none()
        };
        (app, task)
    }

    fn load_images(&mut self, client: Client) -> Task<Message> {
        let sources: Vec<ImageSource> = self
            .engine
            .catalog()
            .as_slice()
            .iter()
            .map(|product| ImageSource::resolve(&product.image))
            .collect();

        let pending = self.images.request(&sources);
        tracing::info!("Fetching {} product images", pending.len());

        Task::batch(pending.into_iter().map(|url| {
            Task::perform(images::fetch(client.clone(), url.clone()), move |result| {
                Message::ImageLoaded(url.clone(), result)
            })
        }))
    }

    pub fn title(&self) -> String {
        format!("Products Filter ({})", self.engine.catalog().len())
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::QueryChanged(query) => {
                self.query = query;
                self.active_company = None;
                self.apply(FilterEvent::TextSearch(self.query.clone()));
            }

            Message::QuerySubmitted => {
                self.active_company = None;
                self.apply(FilterEvent::TextSearch(self.query.clone()));
            }

            Message::QueryCleared => {
                self.query.clear();
                self.active_company = None;
                self.apply(FilterEvent::Clear);
            }

            Message::CompanySelected(tag) => {
                tracing::info!("Company selected: {}", tag);
                self.query.clear();
                self.active_company = Some(tag.clone());
                self.apply(FilterEvent::CompanySelect(tag));
            }

            // Only a running text search has anything to clear.
            Message::EscapePressed => {
                if !self.query.is_empty() {
                    return self.update(Message::QueryCleared);
                }
            }

            Message::ImageLoaded(url, result) => {
                self.images.finish(&url, result);
            }
        }

        Task::none()
    }

    fn apply(&mut self, event: FilterEvent) {
        self.state = self.engine.dispatch(&event);
        self.listing = Listing::from_products(self.state.products(self.engine.catalog()));
        if self.listing.is_empty() {
            tracing::debug!("No products matched {:?}", event);
        } else {
            tracing::debug!("Listing {} rows", self.listing.len());
        }
    }

    /// Count line above the list, naming the active filter.
    pub fn summary(&self) -> String {
        let shown = self.state.len();
        let total = self.engine.catalog().len();

        match self.state.filter() {
            Filter::Text(needle) => format!("{} of {} products matching \"{}\"", shown, total, needle),
            Filter::Company(CompanyTag::Named(name)) => {
                format!("{} of {} products from {}", shown, total, name)
            }
            Filter::Company(CompanyTag::All) | Filter::Everything => {
                format!("{} of {} products", shown, total)
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let palette = Palette::for_choice(self.theme);

        let search = search_bar::view(
            &self.query,
            Message::QueryChanged,
            Message::QuerySubmitted,
            Message::QueryCleared,
            palette,
        );

        let companies = company_bar::view(
            &self.tags,
            self.active_company.as_ref(),
            Message::CompanySelected,
            palette,
        );

        let sidebar = column![
            search,
            Space::with_height(12),
            text("Company").size(13).color(palette.text_muted),
            companies,
        ]
        .spacing(8)
        .width(Length::Fixed(220.0));

        let summary = text(self.summary()).size(12).color(palette.text_muted);

        let results = column![
            summary,
            product_list::view(&self.listing, &self.images, palette)
        ]
        .spacing(8)
        .width(Length::Fill);

        let content = column![
            text("Products Filter").size(24).color(palette.text),
            row![sidebar, results].spacing(24),
        ]
        .spacing(16);

        container(content)
            .padding(24)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_theme| container::Style {
                background: Some(Background::Color(palette.background)),
                border: Border::default(),
                ..Default::default()
            })
            .into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        event::listen_with(escape_pressed)
    }

    pub fn theme(&self) -> Theme {
        theme::iced_theme(self.theme)
    }
}

/// Escape, whether or not the focused search field already handled it.
fn escape_pressed(event: Event, _status: event::Status, _window: window::Id) -> Option<Message> {
    match event {
        Event::Keyboard(keyboard::Event::KeyPressed {
            key: Key::Named(keyboard::key::Named::Escape),
            ..
        }) => Some(Message::EscapePressed),
        _ => None,
    }
}
