//! Navigation state types.
//!
//! Navigation is modeled as two independent concerns: the page currently
//! visible, and the history stack of pages a back step may return to. The
//! two are linked by a per-page capability flag ([`Page::pushable`]): a page
//! that is not pushable can be shown but never enters the stack, so no back
//! or forward traversal can ever resolve to it.

// =============================================================================
// PAGE ENUM
// =============================================================================

/// Pages of the application.
///
/// This determines what is rendered in the main content area.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    /// Landing screen with the feature overview.
    #[default]
    Landing,

    /// The expression calculator and its result fragments.
    Calculator,

    /// Account/profile screen. Reachable only by explicit navigation.
    Profile,

    /// Support / contact screen.
    Support,

    /// Feedback form screen.
    Feedback,
}

impl Page {
    /// Pages shown as top-level navigation links, in display order.
    pub const NAV_ORDER: [Page; 4] = [Page::Landing, Page::Calculator, Page::Support, Page::Feedback];

    /// Whether visiting this page records a history entry.
    ///
    /// The profile page is visible-only: it never enters the stack, so back
    /// navigation can never land on it.
    pub fn pushable(self) -> bool {
        !matches!(self, Self::Profile)
    }

    /// Display name used for navigation links and window titles.
    pub fn label(self) -> &'static str {
        match self {
            Self::Landing => "Home",
            Self::Calculator => "Calculator",
            Self::Profile => "Profile",
            Self::Support => "Support",
            Self::Feedback => "Feedback",
        }
    }

    /// Stable identifier used on the command line to open a specific page.
    pub fn fragment(self) -> &'static str {
        match self {
            Self::Landing => "home",
            Self::Calculator => "calculator",
            Self::Profile => "profile",
            Self::Support => "support",
            Self::Feedback => "feedback",
        }
    }

    /// Resolve a fragment identifier, `None` when unknown.
    pub fn from_fragment(fragment: &str) -> Option<Self> {
        match fragment {
            "home" => Some(Self::Landing),
            "calculator" => Some(Self::Calculator),
            "profile" => Some(Self::Profile),
            "support" => Some(Self::Support),
            "feedback" => Some(Self::Feedback),
            _ => None,
        }
    }
}

// =============================================================================
// HISTORY
// =============================================================================

/// The visible page plus the stack of pages back navigation returns to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    current: Page,
    stack: Vec<Page>,
}

impl Default for History {
    fn default() -> Self {
        Self::new(Page::default())
    }
}

impl History {
    /// Start on `initial`. A non-pushable initial page is shown but the
    /// stack starts empty, as if the user had navigated there explicitly.
    pub fn new(initial: Page) -> Self {
        let stack = if initial.pushable() {
            vec![initial]
        } else {
            Vec::new()
        };
        Self {
            current: initial,
            stack,
        }
    }

    /// The page currently shown.
    pub fn current(&self) -> Page {
        self.current
    }

    /// Whether a back step would change the visible page.
    pub fn can_go_back(&self) -> bool {
        // A non-pushable page always has somewhere to fall back to.
        !self.current.pushable() || self.stack.len() > 1
    }

    /// Navigate to `page`, recording a history entry when the page allows it.
    pub fn navigate(&mut self, page: Page) {
        if page == self.current {
            return;
        }
        if page.pushable() {
            self.stack.push(page);
        }
        self.current = page;
    }

    /// Step back one entry.
    ///
    /// A non-pushable page has no entry of its own, so backing out of one is
    /// an ordinary navigation to the landing page rather than a pop. Popping
    /// past the bottom of the stack resolves to the landing page.
    pub fn back(&mut self) -> Page {
        if !self.current.pushable() {
            self.navigate(Page::Landing);
            return self.current;
        }
        self.stack.pop();
        self.current = self.stack.last().copied().unwrap_or(Page::Landing);
        self.current
    }
}
