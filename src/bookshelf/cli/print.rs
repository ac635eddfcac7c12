use super::styles::{BAR_READ, BAR_UNREAD, BOOK_ID, LABEL, MUTED, READ, TITLE, UNREAD};
use bookshelf::api::{CmdMessage, MessageLevel};
use bookshelf::model::{Book, LibraryStats};
use colored::Colorize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const ID_WIDTH: usize = 6;
const BAR_WIDTH: usize = 30;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

pub(super) fn print_books(books: &[Book], brief: bool) {
    if brief {
        for book in books {
            println!("{}", render_book_line(book));
        }
        return;
    }

    for (i, book) in books.iter().enumerate() {
        if i > 0 {
            println!();
        }
        print!("{}", render_book_card(book));
    }
}

pub(super) fn print_stats(stats: &LibraryStats) {
    print!("{}", render_stats(stats));
}

fn read_status(book: &Book) -> String {
    if book.read {
        READ.apply_to("✅ Read").to_string()
    } else {
        UNREAD.apply_to("❌ Unread").to_string()
    }
}

fn render_book_card(book: &Book) -> String {
    let label = |s: &str| LABEL.apply_to(format!("{}:", s)).to_string();
    let mut out = String::new();
    out.push_str(&format!("{} {}\n", label("Title"), TITLE.apply_to(&book.title)));
    out.push_str(&format!("{} {}\n", label("Author"), book.author));
    out.push_str(&format!("{} {}\n", label("Year"), book.year));
    out.push_str(&format!("{} {}\n", label("Genre"), book.genre));
    out.push_str(&format!("{} {}\n", label("Read"), read_status(book)));
    out.push_str(&format!("{} {}\n", label("ID"), BOOK_ID.apply_to(&book.id)));
    out.push_str(&format!("{} {}\n", label("Content"), book.content));
    out
}

/// `  417   ✓ Dune by Frank Herbert (1965)  Spice must flow…`
fn render_book_line(book: &Book) -> String {
    let id = format!("{:<width$}", book.id.as_str(), width = ID_WIDTH);
    let marker = if book.read { "✓" } else { " " };
    let head = format!("{} by {} ({})", book.title, book.author, book.year);

    let preview: String = book
        .content
        .chars()
        .take(80)
        .map(|c| if c == '\n' { ' ' } else { c })
        .collect();

    let fixed = 2 + ID_WIDTH + 2 + marker.width() + 1;
    let available = LINE_WIDTH.saturating_sub(fixed);
    let body = if preview.is_empty() {
        truncate_to_width(&head, available)
    } else {
        let head = truncate_to_width(&head, available);
        let rest = available.saturating_sub(head.width() + 2);
        if rest > 1 {
            format!("{}  {}", head, MUTED.apply_to(truncate_to_width(&preview, rest)))
        } else {
            head
        }
    };

    let marker = if book.read {
        READ.apply_to(marker).to_string()
    } else {
        marker.to_string()
    };
    format!("  {}  {} {}", BOOK_ID.apply_to(id), marker, body)
}

fn render_stats(stats: &LibraryStats) -> String {
    let mut out = String::new();
    out.push_str(&format!("Total books: {}\n", stats.total));
    out.push_str(&format!("Read books: {}\n", stats.read));
    out.push_str(&format!("Unread books: {}\n", stats.unread));
    out.push_str(&format!("Percentage read: {:.1}%\n", stats.read_percentage));

    if stats.total > 0 {
        let filled = ((stats.read_percentage / 100.0) * BAR_WIDTH as f64).round() as usize;
        let filled = filled.min(BAR_WIDTH);
        out.push_str(&format!(
            "\n[{}{}] {} read / {} unread\n",
            BAR_READ.apply_to("█".repeat(filled)),
            BAR_UNREAD.apply_to("░".repeat(BAR_WIDTH - filled)),
            stats.read,
            stats.unread
        ));
    }
    out
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookshelf::model::BookId;
    use console::strip_ansi_codes;

    fn dune(read: bool) -> Book {
        Book {
            id: BookId::new("417"),
            title: "Dune".into(),
            author: "Frank Herbert".into(),
            year: 1965,
            genre: "SciFi".into(),
            content: "Spice must flow.".into(),
            read,
        }
    }

    #[test]
    fn card_lists_every_field() {
        let card = render_book_card(&dune(true));
        let plain = strip_ansi_codes(&card);
        assert!(plain.contains("Title: Dune\n"));
        assert!(plain.contains("Author: Frank Herbert\n"));
        assert!(plain.contains("Year: 1965\n"));
        assert!(plain.contains("Genre: SciFi\n"));
        assert!(plain.contains("Read: ✅ Read\n"));
        assert!(plain.contains("ID: 417\n"));
        assert!(plain.contains("Content: Spice must flow.\n"));
    }

    #[test]
    fn line_fits_width() {
        let mut book = dune(false);
        book.content = "word ".repeat(100);
        let line = render_book_line(&book);
        let plain = strip_ansi_codes(&line);
        assert!(plain.width() <= LINE_WIDTH);
        assert!(plain.contains("Dune by Frank Herbert (1965)"));
        assert!(plain.ends_with('…'));
    }

    #[test]
    fn stats_for_empty_library_have_no_bar() {
        let out = render_stats(&LibraryStats::default());
        let plain = strip_ansi_codes(&out);
        assert!(plain.contains("Total books: 0"));
        assert!(plain.contains("Percentage read: 0.0%"));
        assert!(!plain.contains('['));
    }

    #[test]
    fn stats_bar_is_proportional() {
        let stats = LibraryStats {
            total: 4,
            read: 1,
            unread: 3,
            read_percentage: 25.0,
        };
        let plain = strip_ansi_codes(&render_stats(&stats)).to_string();
        assert!(plain.contains("Percentage read: 25.0%"));
        assert_eq!(plain.matches('█').count(), 8);
        assert_eq!(plain.matches('░').count(), BAR_WIDTH - 8);
    }

    #[test]
    fn truncate_respects_wide_chars() {
        assert_eq!(truncate_to_width("short", 10), "short");
        let t = truncate_to_width("日本語のタイトル", 7);
        assert!(t.width() <= 7);
        assert!(t.ends_with('…'));
    }
}
