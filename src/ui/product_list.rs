//! Product list, or the no-results message when nothing matched.

use iced::widget::{column, container, image, row, scrollable, text, Image, Space};
use iced::{Background, Border, Element, Length, Padding};

use super::theme::Palette;
use crate::images::ImageCache;
use crate::render::{Listing, Row, NO_RESULTS_MESSAGE};

const THUMBNAIL: f32 = 56.0;

pub fn view<'a, Message: 'a>(
    listing: &'a Listing,
    images: &ImageCache,
    palette: Palette,
) -> Element<'a, Message> {
    let rows = match listing {
        Listing::Empty => {
            return container(text(NO_RESULTS_MESSAGE).size(16).color(palette.text_muted))
                .width(Length::Fill)
                .center_x(Length::Fill)
                .padding(32)
                .into();
        }
        Listing::Rows(rows) => rows,
    };

    let items: Vec<Element<'a, Message>> = rows.iter().map(|r| item(r, images, palette)).collect();

    scrollable(column(items).spacing(8))
        .height(Length::Fill)
        .into()
}

fn item<'a, Message: 'a>(
    row_data: &'a Row,
    images: &ImageCache,
    palette: Palette,
) -> Element<'a, Message> {
    // Images still downloading, or unavailable, show the title's initial.
    let thumbnail: Element<'a, Message> = if let Some(handle) = images.handle_for(&row_data.source) {
        let picture: Image<image::Handle> = image(handle);
        picture.width(THUMBNAIL).height(THUMBNAIL).into()
    } else {
        let initial = row_data
            .title
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_default();
        container(text(initial).size(22).color(palette.primary))
            .width(THUMBNAIL)
            .height(THUMBNAIL)
            .center_x(THUMBNAIL)
            .center_y(THUMBNAIL)
            .style(move |_theme| container::Style {
                background: Some(Background::Color(palette.surface_highlight)),
                border: Border::default().rounded(8),
                ..Default::default()
            })
            .into()
    };

    let content = row![
        thumbnail,
        column![
            text(&row_data.title).size(15).color(palette.text),
            text(&row_data.company).size(12).color(palette.text_muted),
        ]
        .spacing(2),
        Space::with_width(Length::Fill),
        text(&row_data.price).size(14).color(palette.primary),
    ]
    .spacing(12)
    .align_y(iced::Alignment::Center);

    container(content)
        .padding(Padding::from([8.0, 12.0]))
        .width(Length::Fill)
        .style(move |_theme| container::Style {
            background: Some(Background::Color(palette.surface)),
            border: Border {
                color: palette.border,
                width: 1.0,
                radius: 8.0.into(),
            },
            ..Default::default()
        })
        .into()
}
