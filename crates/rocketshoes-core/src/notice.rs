//! # Notices
//!
//! The fixed set of user-facing messages the cart can raise, and their
//! text per locale.
//!
//! ```text
//! ┌───────────────────────┬──────────┬──────────────────────────────────────┐
//! │ NoticeKind            │ Severity │ Raised by                            │
//! ├───────────────────────┼──────────┼──────────────────────────────────────┤
//! │ ProductAdded          │ Success  │ add_product (committed)              │
//! │ OutOfStock            │ Error    │ add_product, update_product_amount   │
//! │ AddFailed             │ Error    │ add_product (any other failure)      │
//! │ RemoveFailed          │ Error    │ remove_product                       │
//! │ UpdateAmountFailed    │ Error    │ update_product_amount                │
//! └───────────────────────┴──────────┴──────────────────────────────────────┘
//! ```
//!
//! Removing a product and changing its amount succeed silently; only their
//! failures are announced.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::money::Money;

// =============================================================================
// Locale
// =============================================================================

/// Language used to render notices and prices.
///
/// Decoding goes through [`FromStr`], so config files accept the same
/// spellings (`pt`, `pt_br`, `en-US`, ...) as the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Locale {
    #[default]
    #[serde(rename = "en")]
    En,

    /// Brazilian Portuguese, the storefront's original language.
    #[serde(rename = "pt-BR")]
    PtBr,
}

impl Locale {
    /// Formats a price the way the storefront displays it.
    ///
    /// ## Example
    /// ```rust
    /// use rocketshoes_core::{Locale, Money};
    ///
    /// assert_eq!(Locale::En.format_money(Money::from_cents(17990)), "$179.90");
    /// assert_eq!(Locale::PtBr.format_money(Money::from_cents(17990)), "R$ 179,90");
    /// ```
    pub fn format_money(&self, money: Money) -> String {
        let sign = if money.is_negative() { "-" } else { "" };
        let major = money.major().abs();
        let minor = money.minor();

        match self {
            Locale::En => format!("{}${}.{:02}", sign, major, minor),
            Locale::PtBr => format!("{}R$ {},{:02}", sign, major, minor),
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "en-us" => Ok(Locale::En),
            "pt" | "pt-br" | "pt_br" => Ok(Locale::PtBr),
            other => Err(format!("unsupported locale: {}", other)),
        }
    }
}

impl TryFrom<String> for Locale {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// =============================================================================
// Notice
// =============================================================================

/// Whether a notice reports success or failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Success,
    Error,
}

/// Every message the cart can show to the shopper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    ProductAdded,
    OutOfStock,
    AddFailed,
    RemoveFailed,
    UpdateAmountFailed,
}

impl NoticeKind {
    pub fn severity(&self) -> Severity {
        match self {
            NoticeKind::ProductAdded => Severity::Success,
            NoticeKind::OutOfStock
            | NoticeKind::AddFailed
            | NoticeKind::RemoveFailed
            | NoticeKind::UpdateAmountFailed => Severity::Error,
        }
    }

    /// Message text in the given locale.
    pub fn message(&self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::En, NoticeKind::ProductAdded) => "Added!",
            (Locale::En, NoticeKind::OutOfStock) => "Requested amount is out of stock",
            (Locale::En, NoticeKind::AddFailed) => "Failed to add the product",
            (Locale::En, NoticeKind::RemoveFailed) => "Failed to remove the product",
            (Locale::En, NoticeKind::UpdateAmountFailed) => {
                "Failed to change the product amount"
            }
            (Locale::PtBr, NoticeKind::ProductAdded) => "Adicionado!",
            (Locale::PtBr, NoticeKind::OutOfStock) => "Quantidade solicitada fora de estoque",
            (Locale::PtBr, NoticeKind::AddFailed) => "Erro na adição do produto",
            (Locale::PtBr, NoticeKind::RemoveFailed) => "Erro na remoção do produto",
            (Locale::PtBr, NoticeKind::UpdateAmountFailed) => {
                "Erro na alteração de quantidade do produto"
            }
        }
    }
}

/// A notice ready to hand to a notifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub severity: Severity,
}

impl Notice {
    pub fn new(kind: NoticeKind) -> Self {
        Notice {
            kind,
            severity: kind.severity(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    pub fn message(&self, locale: Locale) -> &'static str {
        self.kind.message(locale)
    }
}

impl From<NoticeKind> for Notice {
    fn from(kind: NoticeKind) -> Self {
        Notice::new(kind)
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message(Locale::default()))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
