//! Small pill-shaped label.

use iced::widget::{container, text};
use iced::{Background, Border, Element, Theme};

use crate::theme::{BORDER_RADIUS_SM, SPACING_SM, SPACING_XS, badge_colors};

/// A pill label, used for minterm markers.
pub fn badge<'a, M: 'a>(label: impl text::IntoFragment<'a>) -> Element<'a, M> {
    container(text(label).size(13))
        .padding([SPACING_XS, SPACING_SM])
        .style(|theme: &Theme| {
            let pair = badge_colors(theme);
            container::Style {
                background: Some(Background::Color(pair.color)),
                text_color: Some(pair.text),
                border: Border {
                    radius: BORDER_RADIUS_SM.into(),
                    ..Default::default()
                },
                ..Default::default()
            }
        })
        .into()
}
