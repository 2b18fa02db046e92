//! View functions.
//!
//! Views are pure functions from state to widgets; all state changes happen
//! in the handlers. Each page renders inside a shared shell that carries the
//! navigation bar and the context-sensitive back button.

mod calculator;
mod feedback;
mod landing;
mod profile;
mod support;

pub use calculator::EXPRESSION_INPUT_ID;

use iced::widget::{self, Space, button, column, container, row, scrollable, text};
use iced::{Element, Length};

use crate::message::Message;
use crate::state::{AppState, Page};
use crate::theme::{
    CONTENT_WIDTH, SPACING_MD, SPACING_SM, accent_text, button_ghost, button_primary,
    button_profile_back,
};

/// Id of the page scroll region, snapped to top on navigation.
pub const PAGE_SCROLL_ID: &str = "page-scroll";

/// Render the active page inside the navigation shell.
pub fn view_page(state: &AppState) -> Element<'_, Message> {
    let content: Element<'_, Message> = match state.page() {
        Page::Landing => landing::view(state),
        Page::Calculator => calculator::view(state),
        Page::Profile => profile::view(state),
        Page::Support => support::view(state),
        Page::Feedback => feedback::view(state),
    };

    let body = scrollable(
        container(container(content).max_width(CONTENT_WIDTH))
            .width(Length::Fill)
            .center_x(Length::Fill)
            .padding(SPACING_MD),
    )
    .id(widget::Id::new(PAGE_SCROLL_ID))
    .height(Length::Fill);

    column![nav_bar(state), body].into()
}

/// The top navigation bar: back button, links, profile shortcut.
fn nav_bar(state: &AppState) -> Element<'_, Message> {
    let page = state.page();

    let mut bar = row![].spacing(SPACING_SM).padding(SPACING_SM);

    if state.history.can_go_back() {
        // The profile page gets its own back treatment since its back step
        // is a plain navigation, not a history pop.
        let style = if page == Page::Profile {
            button_profile_back
        } else {
            button_ghost
        };
        bar = bar.push(
            button(text("< Back").size(14))
                .on_press(Message::NavigateBack)
                .style(style),
        );
    }

    bar = bar.push(text("Boolean Optimizer Studio").size(16).style(accent_text));
    bar = bar.push(Space::new().width(Length::Fill));

    for link in Page::NAV_ORDER {
        let label = text(link.label()).size(14);
        let style = if link == page {
            button_primary
        } else {
            button_ghost
        };
        bar = bar.push(button(label).on_press(Message::Navigate(link)).style(style));
    }

    let profile_style = if page == Page::Profile {
        button_primary
    } else {
        button_ghost
    };
    bar = bar.push(
        button(text(Page::Profile.label()).size(14))
            .on_press(Message::Navigate(Page::Profile))
            .style(profile_style),
    );

    container(bar).width(Length::Fill).into()
}

/// Shared page heading.
fn page_title(title: &str) -> Element<'_, Message> {
    text(title).size(28).into()
}

/// Shared muted page intro line.
fn page_intro(line: &str) -> Element<'_, Message> {
    text(line).size(15).style(crate::theme::muted_text).into()
}
