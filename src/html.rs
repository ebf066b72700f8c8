use std::sync::OnceLock;

use maud::{DOCTYPE, Markup, html};
use numfmt::{Formatter, Precision};
use rust_decimal::{Decimal, prelude::ToPrimitive};
use unicode_segmentation::UnicodeSegmentation;

// Button styles
pub const BUTTON_PRIMARY_STYLE: &str = "flex flex-1 items-center justify-center gap-2 px-4 py-2 \
    rounded-lg bg-cyan-400 text-gray-950 font-semibold hover:bg-cyan-300 \
    shadow-[0_0_18px_rgba(34,211,238,0.45)]";

pub const BUTTON_SECONDARY_STYLE: &str = "flex flex-1 items-center justify-center gap-2 px-4 py-2 \
    rounded-lg border border-cyan-400/50 text-gray-100 font-semibold hover:bg-cyan-400/10";

pub const BUTTON_ACCENT_STYLE: &str = "flex flex-1 items-center justify-center gap-2 px-4 py-2 \
    rounded-lg bg-fuchsia-500 text-white font-semibold hover:bg-fuchsia-400 \
    shadow-[0_0_18px_rgba(217,70,239,0.45)]";

// Form styles
pub const FORM_LABEL_STYLE: &str = "block mb-2 text-sm font-medium text-gray-100";
pub const FORM_TEXT_INPUT_STYLE: &str = "block w-full p-2.5 rounded-lg text-sm \
    text-white bg-gray-900/70 border border-cyan-400/30 placeholder-gray-500 \
    focus:ring-cyan-400 focus:border-cyan-400";

// Card styles
pub const CARD_STYLE: &str = "rounded-xl border border-gray-700/60 bg-gray-900/60 \
    backdrop-blur p-4 transition-all hover:border-cyan-400/50";
pub const CARD_PRIMARY_STYLE: &str = "rounded-xl border border-cyan-400/30 bg-gray-900/60 \
    backdrop-blur p-6";
pub const CARD_ACCENT_STYLE: &str = "rounded-xl border border-fuchsia-500/30 bg-gray-900/60 \
    backdrop-blur p-6";

// Page container
pub const PAGE_CONTAINER_STYLE: &str = "p-6 space-y-6 max-w-md mx-auto";
pub const PAGE_TITLE_STYLE: &str = "text-3xl font-bold";
pub const SECTION_TITLE_STYLE: &str = "text-xl font-semibold";
pub const MUTED_TEXT_STYLE: &str = "text-sm text-gray-400";

/// The ID of the element that page content is rendered into.
pub const APP_ID: &str = "app";
/// The ID of the element that alerts are swapped into.
pub const ALERT_CONTAINER_ID: &str = "alert-container";

pub fn base(title: &str, content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en"
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - CyberBank" }
                link href="/static/main.css" rel="stylesheet";

                script src="/static/htmx-2.0.8-min.js" integrity="sha384-/TgkGk7p307TH7EXJDuUlgG3Ce1UVolAOFopFekQkkXihi5u/6OCvVKyz1W+idaz" {}
                script src="/static/htmx-ext-response-targets-2.0.4.js" integrity="sha384-T41oglUPvXLGBVyRdZsVRxNWnOOqCynaPubjUVjxhsjFTKrFJGEMm3/0KGmNQ+Pg" {}
            }

            body
                hx-ext="response-targets"
                class="min-h-screen bg-gray-950 text-gray-100 pb-24"
            {
                (content)

                // Alert container for out-of-band swaps
                (alert_container(None))
            }
        }
    }
}

/// The fixed container that success and error alerts are shown in.
///
/// Responses that want to show an alert alongside other content render this
/// with `alert` set so that htmx swaps it out-of-band.
pub fn alert_container(alert: Option<Markup>) -> Markup {
    html! {
        div
            id=(ALERT_CONTAINER_ID)
            hx-swap-oob=[alert.is_some().then_some("true")]
            class="w-full max-w-md px-4"
            style="position: fixed; bottom: 6rem; left: 50%; transform: translateX(-50%); z-index: 9999;"
        {
            @if let Some(alert) = alert {
                (alert)
            }
        }
    }
}

pub fn error_view(title: &str, header: &str, description: &str, fix: &str) -> Markup {
    let content = html!(
        section
        {
            div class="py-8 px-4 mx-auto max-w-screen-xl lg:py-16 lg:px-6"
            {
                div class="mx-auto max-w-screen-sm text-center"
                {
                    h1
                        class="mb-4 text-7xl tracking-tight font-extrabold
                            lg:text-9xl text-cyan-400"
                    {
                        (header)
                    }

                    p class="mb-4 text-3xl md:text-4xl tracking-tight font-bold"
                    {
                        (description)
                    }

                    p class="mb-4 text-1xl md:text-2xl tracking-tight"
                    {
                        (fix)
                    }

                    a
                        href="/"
                        class="inline-flex text-gray-950 bg-cyan-400
                            hover:bg-cyan-300 font-medium rounded-lg text-sm px-5
                            py-2.5 text-center my-4"
                    {
                        "Back to Homepage"
                    }
                }
            }
        }
    );

    base(title, &content)
}

/// Separates groups of three digits, e.g. "125 850".
const GROUP_SEPARATOR: char = '\u{202f}';

/// Format `amount` in roubles, e.g. "125 850,5 ₽".
///
/// Digits are grouped in threes, a comma is used as the decimal separator
/// and trailing zeros after the decimal separator are dropped.
pub fn format_currency(amount: Decimal) -> String {
    static WHOLE_FMT: OnceLock<Formatter> = OnceLock::new();

    let whole_fmt = WHOLE_FMT.get_or_init(|| {
        Formatter::new()
            .separator(GROUP_SEPARATOR)
            .expect("narrow no-break space should be a valid separator")
            .precision(Precision::Decimals(0))
    });

    let amount = amount.normalize();
    let sign = if amount < Decimal::ZERO { "-" } else { "" };
    let magnitude = amount.abs();

    // Whole roubles are exact in an f64 up to 2^53.
    let whole = magnitude.trunc().to_f64().unwrap_or_default();
    let mut formatted = format!("{sign}{}", whole_fmt.fmt_string(whole));

    // The kopecks come from the decimal itself so they are never rounded.
    let digits = magnitude.to_string();
    if let Some((_, fraction)) = digits.split_once('.') {
        formatted.push(',');
        formatted.push_str(fraction);
    }

    formatted.push_str("\u{a0}₽");
    formatted
}

/// Format `amount` with an explicit '+' for credits, e.g. "+85 000 ₽".
pub fn format_signed_currency(amount: Decimal) -> String {
    if amount > Decimal::ZERO {
        format!("+{}", format_currency(amount))
    } else {
        format_currency(amount)
    }
}

/// The first letter of each of the first `max_words` words of `name`, in upper case.
///
/// Letters are counted as grapheme clusters so that names written with
/// combining characters keep their accents.
pub fn initials(name: &str, max_words: usize) -> String {
    name.split_whitespace()
        .take(max_words)
        .filter_map(|word| word.graphemes(true).next())
        .map(|letter| letter.to_uppercase())
        .collect()
}

/// A round avatar showing `initials`.
pub fn avatar(initials: &str, size_style: &str) -> Markup {
    html! {
        div
            class={
                "flex shrink-0 items-center justify-center rounded-full border-2 \
                border-cyan-400 bg-cyan-400/20 font-bold text-cyan-400 " (size_style)
            }
        {
            (initials)
        }
    }
}

#[cfg(test)]
mod format_currency_tests {
    use rust_decimal::Decimal;

    use super::{format_currency, format_signed_currency};

    fn decimal(text: &str) -> Decimal {
        text.parse().unwrap()
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(
            format_currency(decimal("125850.50")),
            "125\u{202f}850,5\u{a0}₽"
        );
        assert_eq!(
            format_currency(decimal("1000000")),
            "1\u{202f}000\u{202f}000\u{a0}₽"
        );
    }

    #[test]
    fn small_amounts_have_no_separator() {
        assert_eq!(format_currency(decimal("999")), "999\u{a0}₽");
        assert_eq!(format_currency(decimal("0")), "0\u{a0}₽");
    }

    #[test]
    fn keeps_kopecks() {
        assert_eq!(format_currency(decimal("0.05")), "0,05\u{a0}₽");
        assert_eq!(
            format_currency(decimal("1999.99")),
            "1\u{202f}999,99\u{a0}₽"
        );
    }

    #[test]
    fn negative_amounts_have_minus_sign() {
        assert_eq!(format_currency(decimal("-3500")), "-3\u{202f}500\u{a0}₽");
    }

    #[test]
    fn signed_currency_marks_credits() {
        assert_eq!(
            format_signed_currency(decimal("85000")),
            "+85\u{202f}000\u{a0}₽"
        );
        assert_eq!(
            format_signed_currency(decimal("-1200")),
            "-1\u{202f}200\u{a0}₽"
        );
    }
}
