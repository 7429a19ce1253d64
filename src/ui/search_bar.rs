//! Search field with a clear button

use iced::widget::{button, container, row, text, text_input};
use iced::{Background, Border, Color, Element, Length, Padding};

use super::theme::Palette;

/// Search bar component
pub fn view<'a, Message: Clone + 'a>(
    value: &str,
    on_input: impl Fn(String) -> Message + 'a,
    on_submit: Message,
    on_clear: Message,
    palette: Palette,
) -> Element<'a, Message> {
    let input = text_input("Search", value)
        .on_input(on_input)
        .on_submit(on_submit)
        .padding(Padding::new(10.0))
        .size(16)
        .style(move |_theme, _status| text_input::Style {
            background: Background::Color(Color::TRANSPARENT),
            border: Border::default(),
            icon: palette.text_muted,
            placeholder: palette.text_placeholder,
            value: palette.text,
            selection: palette.selection,
        });

    // disabled while there is nothing to clear
    let clear = button(text("×").size(18).color(palette.text_muted))
        .on_press_maybe((!value.is_empty()).then_some(on_clear))
        .padding(Padding::from([4.0, 10.0]))
        .style(|_theme, _status| button::Style {
            background: None,
            ..button::Style::default()
        });

    container(row![input, clear].align_y(iced::Alignment::Center))
        .padding(Padding::from([2.0, 6.0]))
        .width(Length::Fill)
        .style(move |_theme| container::Style {
            background: Some(Background::Color(palette.surface)),
            border: Border {
                color: palette.border,
                width: 1.0,
                radius: 10.0.into(),
            },
            ..Default::default()
        })
        .into()
}
