use crate::commands::CmdResult;
use crate::model::{Library, LibraryStats};

pub fn compute(library: &Library) -> LibraryStats {
    let total = library.len();
    let read = library.iter().filter(|b| b.read).count();
    let read_percentage = if total > 0 {
        read as f64 / total as f64 * 100.0
    } else {
        0.0
    };

    LibraryStats {
        total,
        read,
        unread: total - read,
        read_percentage,
    }
}

pub fn run(library: &Library) -> CmdResult {
    CmdResult::default().with_stats(compute(library))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn empty_library_has_zero_stats() {
        let stats = compute(&Library::new());
        assert_eq!(stats, LibraryStats::default());
        assert_eq!(stats.read_percentage, 0.0);
    }

    #[test]
    fn counts_read_and_unread() {
        let library = StoreFixture::new()
            .with_book("1", "A", "X", true)
            .with_book("2", "B", "Y", false)
            .with_book("3", "C", "Z", false)
            .with_book("4", "D", "W", true)
            .library();
        let stats = compute(&library);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.read, 2);
        assert_eq!(stats.unread, 2);
        assert!((stats.read_percentage - 50.0).abs() < f64::EPSILON);
    }
}
