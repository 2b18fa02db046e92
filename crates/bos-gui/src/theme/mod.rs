//! Theme for Boolean Optimizer Studio.
//!
//! One custom palette plus spacing constants and the widget style functions
//! the views share. Style functions take the theme and widget status, so
//! everything derives from the palette and follows hover/disabled states.

use iced::theme::{Palette, palette};
use iced::widget::{button, container, text_input};
use iced::{Background, Border, Color, Theme};

// =============================================================================
// SPACING
// =============================================================================

pub const SPACING_XS: f32 = 4.0;
pub const SPACING_SM: f32 = 8.0;
pub const SPACING_MD: f32 = 16.0;
pub const SPACING_LG: f32 = 24.0;
pub const SPACING_XL: f32 = 32.0;

pub const BORDER_RADIUS_SM: f32 = 4.0;
pub const BORDER_RADIUS_MD: f32 = 8.0;

pub const TABLE_CELL_PADDING_X: f32 = 12.0;
pub const TABLE_CELL_PADDING_Y: f32 = 6.0;

/// Maximum content width of a page body.
pub const CONTENT_WIDTH: f32 = 900.0;

// =============================================================================
// THEME
// =============================================================================

/// Build the application theme.
pub fn studio_theme() -> Theme {
    Theme::custom(
        "Optimizer Studio".to_string(),
        Palette {
            background: Color::from_rgb8(0x10, 0x14, 0x1d),
            text: Color::from_rgb8(0xe8, 0xec, 0xf4),
            primary: Color::from_rgb8(0x4f, 0x8c, 0xff),
            success: Color::from_rgb8(0x3d, 0xc8, 0x8b),
            warning: Color::from_rgb8(0xe8, 0xb3, 0x4b),
            danger: Color::from_rgb8(0xe8, 0x5d, 0x6b),
        },
    )
}

// =============================================================================
// WIDGET STYLES
// =============================================================================

/// Primary action button (submit).
pub fn button_primary(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let pair = match status {
        button::Status::Hovered | button::Status::Pressed => palette.primary.strong,
        button::Status::Disabled => palette.primary.weak,
        button::Status::Active => palette.primary.base,
    };
    button::Style {
        background: Some(Background::Color(pair.color)),
        text_color: pair.text,
        border: Border {
            radius: BORDER_RADIUS_SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Low-emphasis button (navigation links, clear, toggles).
pub fn button_ghost(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => {
            Some(Background::Color(palette.background.weak.color))
        }
        _ => None,
    };
    button::Style {
        background,
        text_color: palette.background.base.text,
        border: Border {
            radius: BORDER_RADIUS_SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Back button on the profile page, which carries a distinct treatment.
pub fn button_profile_back(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let pair = match status {
        button::Status::Hovered | button::Status::Pressed => palette.danger.strong,
        _ => palette.danger.base,
    };
    button::Style {
        background: Some(Background::Color(pair.color)),
        text_color: pair.text,
        border: Border {
            radius: BORDER_RADIUS_SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Default single-line text input.
pub fn text_input_default(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let palette = theme.extended_palette();
    let border_color = match status {
        text_input::Status::Focused { .. } => palette.primary.base.color,
        text_input::Status::Hovered => palette.background.strong.color,
        _ => palette.background.weak.color,
    };
    text_input::Style {
        background: Background::Color(palette.background.weak.color),
        border: Border {
            color: border_color,
            width: 1.0,
            radius: BORDER_RADIUS_SM.into(),
        },
        icon: palette.background.weak.text,
        placeholder: palette.background.strong.color,
        value: palette.background.base.text,
        selection: palette.primary.weak.color,
    }
}

/// Card-like panel holding one result fragment.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        border: Border {
            radius: BORDER_RADIUS_MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Table header cell.
pub fn table_header(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(palette.background.strong.color)),
        ..Default::default()
    }
}

/// Table body cell, striped by row parity.
pub fn table_cell(theme: &Theme, is_even: bool) -> container::Style {
    let palette = theme.extended_palette();
    let background = if is_even {
        palette.background.weak.color
    } else {
        palette.background.base.color
    };
    container::Style {
        background: Some(Background::Color(background)),
        ..Default::default()
    }
}

/// Inline validation / failure message.
pub fn error_text(theme: &Theme) -> iced::widget::text::Style {
    iced::widget::text::Style {
        color: Some(theme.extended_palette().danger.base.color),
    }
}

/// Secondary, de-emphasized text.
pub fn muted_text(theme: &Theme) -> iced::widget::text::Style {
    iced::widget::text::Style {
        color: Some(theme.extended_palette().background.strong.text),
    }
}

/// Accent text for highlighted values.
pub fn accent_text(theme: &Theme) -> iced::widget::text::Style {
    iced::widget::text::Style {
        color: Some(theme.extended_palette().primary.base.color),
    }
}

/// Success-tinted pair used by badges.
pub fn badge_colors(theme: &Theme) -> palette::Pair {
    theme.extended_palette().success.base
}
