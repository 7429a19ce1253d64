//! Company selector: one button per tag, at most one marked active.

use iced::widget::{button, column, text};
use iced::{Background, Border, Element, Length, Padding};

use super::theme::Palette;
use crate::companies::CompanyTag;

pub fn view<'a, Message: Clone + 'a>(
    tags: &'a [CompanyTag],
    active: Option<&CompanyTag>,
    on_select: impl Fn(CompanyTag) -> Message,
    palette: Palette,
) -> Element<'a, Message> {
    let buttons: Vec<Element<'a, Message>> = tags
        .iter()
        .map(|tag| {
            let is_active = active == Some(tag);

            button(text(tag.label()).size(14))
                .on_press(on_select(tag.clone()))
                .width(Length::Fill)
                .padding(Padding::from([6.0, 10.0]))
                .style(move |_theme, status| {
                    let background = if is_active {
                        palette.selection
                    } else if matches!(status, button::Status::Hovered) {
                        palette.surface_highlight
                    } else {
                        palette.surface
                    };

                    button::Style {
                        background: Some(Background::Color(background)),
                        text_color: if is_active { palette.primary } else { palette.text },
                        border: Border {
                            color: if is_active { palette.primary } else { palette.border },
                            width: 1.0,
                            radius: 8.0.into(),
                        },
                        ..button::Style::default()
                    }
                })
                .into()
        })
        .collect();

    column(buttons).spacing(6).into()
}
