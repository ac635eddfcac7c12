use console::Style;
use once_cell::sync::Lazy;

pub static LABEL: Lazy<Style> = Lazy::new(|| Style::new().bold());
pub static TITLE: Lazy<Style> = Lazy::new(|| Style::new().bold().yellow());
pub static BOOK_ID: Lazy<Style> = Lazy::new(|| Style::new().cyan());
pub static READ: Lazy<Style> = Lazy::new(|| Style::new().green());
pub static UNREAD: Lazy<Style> = Lazy::new(|| Style::new().red());
pub static MUTED: Lazy<Style> = Lazy::new(|| Style::new().dim());

// Saddle brown / wheat, the read/unread chart colors.
pub static BAR_READ: Lazy<Style> = Lazy::new(|| Style::new().color256(94));
pub static BAR_UNREAD: Lazy<Style> = Lazy::new(|| Style::new().color256(223));
