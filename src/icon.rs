//! Inline SVG icons.
//!
//! Icons are drawn as 24x24 stroked outlines so that they pick up the text
//! colour of the element they are placed in.

use maud::{Markup, html};

use crate::ledger::TransactionCategory;

/// Every icon the interface draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    Home,
    PiggyBank,
    Send,
    Settings,
    ArrowUp,
    Plus,
    Target,
    User,
    CreditCard,
    QrCode,
    Building,
    ShoppingCart,
    TrendingUp,
    Coffee,
    Bell,
    Lock,
    FileText,
    HelpCircle,
    LogOut,
    Edit,
    ChevronRight,
}

impl IconKind {
    /// The SVG path data that draws the icon.
    fn paths(self) -> &'static [&'static str] {
        match self {
            IconKind::Home => &[
                "m3 9 9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z",
                "M9 22V12h6v10",
            ],
            IconKind::PiggyBank => &[
                "M19 5c-1.5 0-2.8 1.4-3 2-3.5-1.5-11-.3-11 5 0 1.8 0 3 2 4.5V20h4v-2h3v2h4v-4c1-.5 1.7-1 2-2h2v-4h-2c0-1-.5-1.5-1-2V5z",
                "M2 9v1c0 1.1.9 2 2 2h1",
                "M16 11h.01",
            ],
            IconKind::Send => &["m22 2-7 20-4-9-9-4Z", "M22 2 11 13"],
            IconKind::Settings => &[
                "M12.22 2h-.44a2 2 0 0 0-2 2v.18a2 2 0 0 1-1 1.73l-.43.25a2 2 0 0 1-2 0l-.15-.08a2 2 0 0 0-2.73.73l-.22.38a2 2 0 0 0 .73 2.73l.15.1a2 2 0 0 1 1 1.72v.51a2 2 0 0 1-1 1.74l-.15.09a2 2 0 0 0-.73 2.73l.22.38a2 2 0 0 0 2.73.73l.15-.08a2 2 0 0 1 2 0l.43.25a2 2 0 0 1 1 1.73V20a2 2 0 0 0 2 2h.44a2 2 0 0 0 2-2v-.18a2 2 0 0 1 1-1.73l.43-.25a2 2 0 0 1 2 0l.15.08a2 2 0 0 0 2.73-.73l.22-.39a2 2 0 0 0-.73-2.73l-.15-.08a2 2 0 0 1-1-1.74v-.5a2 2 0 0 1 1-1.74l.15-.09a2 2 0 0 0 .73-2.73l-.22-.38a2 2 0 0 0-2.73-.73l-.15.08a2 2 0 0 1-2 0l-.43-.25a2 2 0 0 1-1-1.73V4a2 2 0 0 0-2-2z",
                "M9 12a3 3 0 1 0 6 0a3 3 0 1 0-6 0",
            ],
            IconKind::ArrowUp => &["m5 12 7-7 7 7", "M12 19V5"],
            IconKind::Plus => &["M5 12h14", "M12 5v14"],
            IconKind::Target => &[
                "M2 12a10 10 0 1 0 20 0a10 10 0 1 0-20 0",
                "M6 12a6 6 0 1 0 12 0a6 6 0 1 0-12 0",
                "M10 12a2 2 0 1 0 4 0a2 2 0 1 0-4 0",
            ],
            IconKind::User => &[
                "M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2",
                "M8 7a4 4 0 1 0 8 0a4 4 0 1 0-8 0",
            ],
            IconKind::CreditCard => &[
                "M4 5h16a2 2 0 0 1 2 2v10a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V7a2 2 0 0 1 2-2z",
                "M2 10h20",
            ],
            IconKind::QrCode => &[
                "M4 3h4a1 1 0 0 1 1 1v4a1 1 0 0 1-1 1H4a1 1 0 0 1-1-1V4a1 1 0 0 1 1-1z",
                "M16 3h4a1 1 0 0 1 1 1v4a1 1 0 0 1-1 1h-4a1 1 0 0 1-1-1V4a1 1 0 0 1 1-1z",
                "M4 15h4a1 1 0 0 1 1 1v4a1 1 0 0 1-1 1H4a1 1 0 0 1-1-1v-4a1 1 0 0 1 1-1z",
                "M21 16h-3a2 2 0 0 0-2 2v3",
                "M21 21v.01",
                "M12 7v3a2 2 0 0 1-2 2H7",
                "M3 12h.01",
                "M12 3h.01",
                "M12 16v.01",
                "M16 12h1",
                "M21 12v.01",
                "M12 21v-1",
            ],
            IconKind::Building => &[
                "M6 2h12a2 2 0 0 1 2 2v16a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2z",
                "M9 22v-4h6v4",
                "M8 6h.01",
                "M16 6h.01",
                "M12 6h.01",
                "M12 10h.01",
                "M12 14h.01",
                "M16 10h.01",
                "M16 14h.01",
                "M8 10h.01",
                "M8 14h.01",
            ],
            IconKind::ShoppingCart => &[
                "M7 21a1 1 0 1 0 2 0a1 1 0 1 0-2 0",
                "M18 21a1 1 0 1 0 2 0a1 1 0 1 0-2 0",
                "M2.05 2.05h2l2.66 12.42a2 2 0 0 0 2 1.58h9.78a2 2 0 0 0 1.95-1.57l1.65-7.43H5.12",
            ],
            IconKind::TrendingUp => &["M22 7 13.5 15.5 8.5 10.5 2 17", "M16 7h6v6"],
            IconKind::Coffee => &[
                "M17 8h1a4 4 0 1 1 0 8h-1",
                "M3 8h14v9a4 4 0 0 1-4 4H7a4 4 0 0 1-4-4Z",
                "M6 2v2",
                "M10 2v2",
                "M14 2v2",
            ],
            IconKind::Bell => &[
                "M6 8a6 6 0 0 1 12 0c0 7 3 9 3 9H3s3-2 3-9",
                "M10.3 21a1.94 1.94 0 0 0 3.4 0",
            ],
            IconKind::Lock => &[
                "M5 11h14a2 2 0 0 1 2 2v7a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-7a2 2 0 0 1 2-2z",
                "M7 11V7a5 5 0 0 1 10 0v4",
            ],
            IconKind::FileText => &[
                "M14.5 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7.5L14.5 2z",
                "M14 2v6h6",
                "M16 13H8",
                "M16 17H8",
                "M10 9H8",
            ],
            IconKind::HelpCircle => &[
                "M2 12a10 10 0 1 0 20 0a10 10 0 1 0-20 0",
                "M9.09 9a3 3 0 0 1 5.83 1c0 2-3 3-3 3",
                "M12 17h.01",
            ],
            IconKind::LogOut => &[
                "M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4",
                "m16 17 5-5-5-5",
                "M21 12H9",
            ],
            IconKind::Edit => &[
                "M11 4H4a2 2 0 0 0-2 2v14a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2v-7",
                "M18.5 2.5a2.121 2.121 0 0 1 3 3L12 15l-4 1 1-4 9.5-9.5z",
            ],
            IconKind::ChevronRight => &["m9 18 6-6-6-6"],
        }
    }
}

impl From<TransactionCategory> for IconKind {
    fn from(category: TransactionCategory) -> Self {
        match category {
            TransactionCategory::Groceries => IconKind::ShoppingCart,
            TransactionCategory::Salary => IconKind::TrendingUp,
            TransactionCategory::Cafe => IconKind::Coffee,
            TransactionCategory::Transfer => IconKind::Send,
            TransactionCategory::TopUp => IconKind::Plus,
        }
    }
}

/// Render `kind` as an inline SVG with the Tailwind size and colour classes in `style`.
pub fn icon(kind: IconKind, style: &str) -> Markup {
    html! {
        svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            class=(style)
        {
            @for path in kind.paths() {
                path d=(path) {}
            }
        }
    }
}
